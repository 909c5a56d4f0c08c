//! Attachment metadata
//!
//! Describes where an attachment can be downloaded from. Existence on disk is
//! not checked here.

use serde::Serialize;

/// Coarse attachment category derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Imagen,
    Pdf,
    Documento,
    HojaCalculo,
    Otro,
}

impl AttachmentKind {
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => AttachmentKind::Imagen,
            "pdf" => AttachmentKind::Pdf,
            "doc" | "docx" | "txt" | "odt" | "rtf" => AttachmentKind::Documento,
            "xls" | "xlsx" | "csv" | "ods" => AttachmentKind::HojaCalculo,
            _ => AttachmentKind::Otro,
        }
    }
}

/// Metadata echoed back for an attachment name
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentMetadata {
    pub message: String,
    pub url: String,
    #[serde(rename = "tipo")]
    pub kind: AttachmentKind,
}

impl AttachmentMetadata {
    pub fn new(public_base_url: &str, filename: &str) -> Self {
        Self {
            message: format!("Adjunto {} disponible", filename),
            url: format!(
                "{}/api/adjuntos/{}",
                public_base_url.trim_end_matches('/'),
                urlencoding::encode(filename)
            ),
            kind: AttachmentKind::from_filename(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_case_insensitive() {
        assert_eq!(AttachmentKind::from_filename("captura.PNG"), AttachmentKind::Imagen);
        assert_eq!(AttachmentKind::from_filename("talon.pdf"), AttachmentKind::Pdf);
        assert_eq!(AttachmentKind::from_filename("notas.txt"), AttachmentKind::Documento);
        assert_eq!(AttachmentKind::from_filename("datos.csv"), AttachmentKind::HojaCalculo);
    }

    #[test]
    fn unknown_or_missing_extension_is_other() {
        assert_eq!(AttachmentKind::from_filename("README"), AttachmentKind::Otro);
        assert_eq!(AttachmentKind::from_filename("archive.tar.zst"), AttachmentKind::Otro);
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let meta = AttachmentMetadata::new("http://localhost:3000/", "error.png");
        assert_eq!(meta.url, "http://localhost:3000/api/adjuntos/error.png");
    }

    #[test]
    fn url_encodes_spaces() {
        let meta = AttachmentMetadata::new("http://mock", "captura error.png");
        assert_eq!(meta.url, "http://mock/api/adjuntos/captura%20error.png");
    }

    #[test]
    fn serializes_kind_as_tipo() {
        let json = serde_json::to_value(AttachmentMetadata::new("http://mock", "a.xlsx")).unwrap();
        assert_eq!(json["tipo"], "hoja_calculo");
        assert!(json["message"].as_str().unwrap().contains("a.xlsx"));
    }
}
