//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `resume_core` linkage without any front end.
//! - Exercise one in-memory session end to end with deterministic output.

use resume_core::{ResumeSession, SequentialIdGenerator, SessionConfig};

fn main() {
    println!("resume_core ping={}", resume_core::ping());
    println!("resume_core version={}", resume_core::core_version());

    let mut session = match ResumeSession::open(&SessionConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("resume_core session=error {err}");
            std::process::exit(1);
        }
    };
    let added = session
        .editor(SequentialIdGenerator::new("smoke-"))
        .add_skill("Rust");
    println!(
        "resume_core session=ok restored={} skill_added={added} has_content={}",
        session.restore_outcome().is_restored(),
        session.preview().has_content()
    );
}
