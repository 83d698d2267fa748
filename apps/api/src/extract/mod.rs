//! Text extraction from uploaded documents.
//!
//! Dispatch is by file extension, checked before any bytes are parsed. The
//! upload is staged in a per-call temp directory (removed on drop) and each
//! format hands off to its own parser: `pdf-extract` for PDF, `docx-rs` for
//! DOCX, `image` + tesseract OCR for images. Every parser failure surfaces as
//! `AppError::Extraction`; nothing across this boundary panics.

pub mod handlers;

use std::fs;
use std::path::Path;

use crate::errors::AppError;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Image,
}

impl FileKind {
    /// Classifies a client-supplied file name by extension, case-insensitively.
    /// Anything outside the allow-list (including extensionless names) is
    /// rejected here, before the request body is read.
    pub fn from_name(file_name: &str) -> Result<Self, AppError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "png" | "jpg" | "jpeg" => Ok(FileKind::Image),
            _ => Err(AppError::UnsupportedFileType),
        }
    }
}

/// Reduces a client-supplied name to a safe temp-file name: alphanumerics,
/// `.`, `-` and `_` pass through, everything else becomes `_`.
fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Extracts plain text from an uploaded file.
///
/// Blocking: parsers here do synchronous I/O and CPU work, so callers in
/// async context must run this inside `tokio::task::spawn_blocking`.
pub fn extract_file(data: &[u8], file_name: &str) -> Result<String, AppError> {
    let kind = FileKind::from_name(file_name)?;

    let dir = tempfile::tempdir().map_err(|e| AppError::Extraction(e.to_string()))?;
    let path = dir.path().join(sanitize_file_name(file_name));
    fs::write(&path, data).map_err(|e| AppError::Extraction(e.to_string()))?;

    match kind {
        FileKind::Pdf => extract_pdf(&path),
        FileKind::Docx => extract_docx(&path),
        FileKind::Image => extract_image(&path),
    }
}

fn extract_pdf(path: &Path) -> Result<String, AppError> {
    pdf_extract::extract_text(path).map_err(|e| AppError::Extraction(e.to_string()))
}

/// Paragraph text in document order, one line per paragraph. Table contents
/// are not extracted.
fn extract_docx(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|e| AppError::Extraction(e.to_string()))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| AppError::Extraction(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(paragraph) => Some(paragraph.raw_text()),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Decodes the image first so corrupt uploads fail before tesseract runs,
/// then hands the staged file to the tesseract CLI. OCR output is returned
/// verbatim, whitespace included.
fn extract_image(path: &Path) -> Result<String, AppError> {
    image::open(path).map_err(|e| AppError::Extraction(e.to_string()))?;

    let ocr_input = rusty_tesseract::Image::from_path(path)
        .map_err(|e| AppError::Extraction(e.to_string()))?;
    rusty_tesseract::image_to_string(&ocr_input, &rusty_tesseract::Args::default())
        .map_err(|e| AppError::Extraction(e.to_string()))
}

#[cfg(test)]
pub mod test_fixtures {
    //! Real-format fixtures assembled in memory, shared with the handler tests.

    use std::io::Cursor;

    /// A well-formed DOCX with one run per paragraph.
    pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = docx_rs::Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*text)),
            );
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    /// A minimal single-page PDF drawing `text` in Helvetica. The xref table
    /// offsets are computed, not hardcoded, so the fixture stays valid if the
    /// objects change.
    pub fn pdf_bytes(text: &str) -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_string(),
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n"
                .to_string(),
            {
                let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
                format!(
                    "4 0 obj\n<< /Length {} >>\nstream\n{stream}\nendstream\nendobj\n",
                    stream.len()
                )
            },
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>\nendobj\n"
                .to_string(),
        ];

        let mut body = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for object in &objects {
            offsets.push(body.len());
            body.push_str(object);
        }

        let xref_offset = body.len();
        body.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        body.push_str("0000000000 65535 f \n");
        for offset in offsets {
            body.push_str(&format!("{offset:010} 00000 n \n"));
        }
        body.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));

        body.into_bytes()
    }
}
