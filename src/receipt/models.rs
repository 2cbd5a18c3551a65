//! Core receipt types: how an attached document is referenced, how its
//! preview is chosen and how its download filename is derived.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

/// A document attached to an expense as evidence.
///
/// Seed expenses reference files shipped with the app, uploaded receipts are
/// held in memory for the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    /// A path to a static asset, relative to the working directory,
    /// e.g. `assets/IHS_Payment.pdf`.
    Path(String),
    /// A file captured from the add-expense form.
    Upload {
        /// The file name the user uploaded, e.g. `scan.png`.
        file_name: String,
        /// The MIME type reported by the browser, e.g. `image/png`.
        content_type: String,
        /// The raw file contents.
        bytes: Vec<u8>,
    },
}

impl Receipt {
    /// The receipt's file name without any leading directories.
    pub fn file_name(&self) -> &str {
        match self {
            Receipt::Path(path) => path.rsplit('/').next().unwrap_or(path),
            Receipt::Upload { file_name, .. } => file_name,
        }
    }

    /// The lowercased file extension, if the file name has one.
    pub fn extension(&self) -> Option<String> {
        self.file_name()
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_lowercase())
    }

    /// Whether the receipt is a PDF document, decided by file extension
    /// (case-insensitive).
    pub fn is_pdf(&self) -> bool {
        matches!(self.extension().as_deref(), Some("pdf"))
    }

    /// Which of the two preview strategies applies to this receipt.
    pub fn preview_mode(&self) -> PreviewMode {
        if self.is_pdf() {
            PreviewMode::Document
        } else {
            PreviewMode::Image
        }
    }

    /// The URL the browser loads this receipt from: a path under [crate::endpoints::ASSETS]
    /// for seed receipts, a self-describing `data:` URL for uploads.
    pub fn href(&self) -> String {
        match self {
            Receipt::Path(path) => format!("/{path}"),
            Receipt::Upload {
                content_type,
                bytes,
                ..
            } => format!("data:{content_type};base64,{}", BASE64.encode(bytes)),
        }
    }

    /// The MIME type to serve the receipt body with.
    pub fn content_type(&self) -> String {
        match self {
            Receipt::Upload { content_type, .. } => content_type.clone(),
            Receipt::Path(_) => match self.extension().as_deref() {
                Some("pdf") => "application/pdf".to_owned(),
                Some("jpg") | Some("jpeg") => "image/jpeg".to_owned(),
                Some("png") => "image/png".to_owned(),
                _ => "application/octet-stream".to_owned(),
            },
        }
    }
}

/// The two receipt-rendering strategies, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Embed the document inline with a textual fallback link.
    Document,
    /// Embed as an image, replaced by a failure message if it cannot load.
    Image,
}

impl PreviewMode {
    /// The extension the preview download assumes for this mode.
    ///
    /// Image previews are always named `.jpg` here, regardless of the actual
    /// image type. The per-row download link derives the real extension
    /// instead, see [direct_download_filename]. The two policies are kept
    /// deliberately distinct.
    pub fn assumed_extension(&self) -> &'static str {
        match self {
            PreviewMode::Document => "pdf",
            PreviewMode::Image => "jpg",
        }
    }
}

/// Collapse each run of whitespace in `description` into a single underscore.
fn underscore_whitespace(description: &str) -> String {
    let mut out = String::with_capacity(description.len());
    let mut in_whitespace = false;

    for c in description.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out
}

/// The save-as filename used when downloading the currently previewed receipt.
///
/// The extension comes from the preview mode, not the file itself. If the
/// description is blank, a timestamp-based name is used instead.
pub fn preview_download_filename(
    description: &str,
    mode: PreviewMode,
    fallback_timestamp: i64,
) -> String {
    if description.trim().is_empty() {
        format!("receipt_{fallback_timestamp}.{}", mode.assumed_extension())
    } else {
        format!(
            "{}.{}",
            underscore_whitespace(description),
            mode.assumed_extension()
        )
    }
}

/// The save-as filename used by the per-row download link, keeping the
/// receipt's real file extension.
pub fn direct_download_filename(description: &str, receipt: &Receipt) -> String {
    let stem = underscore_whitespace(description);

    match receipt.extension() {
        Some(extension) => format!("{stem}.{extension}"),
        None => stem,
    }
}
