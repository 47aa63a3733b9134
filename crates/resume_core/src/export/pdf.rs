//! Rasterizer contract and export entry point.

use crate::render::preview::{render_preview, PreviewDocument};
use crate::store::resume_store::ResumeStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Page unit used for margins and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageUnit {
    Inch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// US letter, 8.5 x 11 in.
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
}

/// Fixed page and quality settings passed to every rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub file_name: &'static str,
    pub margin: f32,
    pub image_format: ImageFormat,
    /// Lossy image quality in `0.0..=1.0`.
    pub image_quality: f32,
    /// Canvas scale factor applied before rasterizing.
    pub render_scale: f32,
    pub unit: PageUnit,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_name: "resume.pdf",
            margin: 0.0,
            image_format: ImageFormat::Jpeg,
            image_quality: 0.98,
            render_scale: 2.0,
            unit: PageUnit::Inch,
            format: PageFormat::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

/// Failure reported by the external rasterization facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizeError(pub String);

impl Display for RasterizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rasterization failed: {}", self.0)
    }
}

impl Error for RasterizeError {}

/// External facility turning a rendered preview into PDF bytes.
pub trait PdfRasterizer {
    fn rasterize(
        &self,
        preview: &PreviewDocument,
        options: &ExportOptions,
    ) -> Result<Vec<u8>, RasterizeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The preview shows the empty state; there is nothing to export.
    EmptyPreview,
    Rasterize(RasterizeError),
    /// The rasterizer reported success but produced no bytes.
    EmptyOutput,
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPreview => write!(f, "resume preview has no content to export"),
            Self::Rasterize(err) => write!(f, "{err}"),
            Self::EmptyOutput => write!(f, "rasterizer returned an empty document"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rasterize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RasterizeError> for ExportError {
    fn from(value: RasterizeError) -> Self {
        Self::Rasterize(value)
    }
}

/// Successful export result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPdf {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
    /// Store revision the preview was captured at.
    pub revision: u64,
}

/// Exports the current snapshot of `store` as a PDF.
///
/// The preview is rendered before the rasterizer runs, so the result
/// reflects the store exactly as it was at call time.
pub fn export_pdf(
    store: &ResumeStore,
    rasterizer: &dyn PdfRasterizer,
) -> Result<ExportedPdf, ExportError> {
    let preview = render_preview(store.snapshot());
    let revision = store.revision();
    export_preview(&preview, revision, rasterizer)
}

/// Exports an already captured preview.
///
/// Lets hosts capture on the UI thread and rasterize later while editing
/// continues.
pub fn export_preview(
    preview: &PreviewDocument,
    revision: u64,
    rasterizer: &dyn PdfRasterizer,
) -> Result<ExportedPdf, ExportError> {
    if !preview.has_content() {
        info!("event=pdf_export module=export status=skipped reason=empty_preview");
        return Err(ExportError::EmptyPreview);
    }

    let options = ExportOptions::default();
    let started_at = Instant::now();
    info!(
        "event=pdf_export module=export status=start revision={revision} theme={}",
        preview.theme
    );

    let result = rasterizer
        .rasterize(preview, &options)
        .map_err(ExportError::from)
        .and_then(|bytes| {
            if bytes.is_empty() {
                Err(ExportError::EmptyOutput)
            } else {
                Ok(bytes)
            }
        });

    match result {
        Ok(bytes) => {
            info!(
                "event=pdf_export module=export status=ok revision={revision} bytes={} duration_ms={}",
                bytes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(ExportedPdf {
                file_name: options.file_name,
                bytes,
                revision,
            })
        }
        Err(err) => {
            error!(
                "event=pdf_export module=export status=error revision={revision} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// Severity of a user-facing export notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Non-blocking notification shown around an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNotice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl ExportNotice {
    /// Shown when an export starts.
    pub fn pending() -> Self {
        Self {
            title: "Generating PDF...",
            description: "Please wait while we create your resume",
            variant: NoticeVariant::Default,
        }
    }

    /// Maps an export outcome to its notice.
    ///
    /// An empty preview produces no notice.
    pub fn for_result(result: &Result<ExportedPdf, ExportError>) -> Option<Self> {
        match result {
            Ok(_) => Some(Self {
                title: "Success!",
                description: "Your resume has been downloaded",
                variant: NoticeVariant::Default,
            }),
            Err(ExportError::EmptyPreview) => None,
            Err(_) => Some(Self {
                title: "Error",
                description: "Failed to generate PDF. Please try again.",
                variant: NoticeVariant::Destructive,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportError, ExportNotice, ExportOptions, NoticeVariant, PageFormat};

    #[test]
    fn default_options_are_letter_portrait_at_double_scale() {
        let options = ExportOptions::default();
        assert_eq!(options.format, PageFormat::Letter);
        assert_eq!(options.render_scale, 2.0);
        assert_eq!(options.margin, 0.0);
        assert_eq!(options.file_name, "resume.pdf");
    }

    #[test]
    fn failure_notice_is_destructive_and_empty_preview_is_silent() {
        let failed = Err(ExportError::EmptyOutput);
        let notice = ExportNotice::for_result(&failed).expect("failure notice");
        assert_eq!(notice.variant, NoticeVariant::Destructive);

        assert_eq!(ExportNotice::for_result(&Err(ExportError::EmptyPreview)), None);
    }
}
