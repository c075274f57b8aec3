/// MIME type the portal declares for cause-list documents.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A raw portal response. Bodies are kept as bytes because the document
/// endpoint returns PDF data; HTML endpoints are read through [`PortalResponse::text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl PortalResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Lowercased MIME type with parameters such as `charset` removed.
    pub fn mime_type(&self) -> Option<String> {
        let raw = self.content_type.as_deref()?;
        let essence = raw.split(';').next().unwrap_or(raw).trim();
        if essence.is_empty() {
            None
        } else {
            Some(essence.to_ascii_lowercase())
        }
    }

    /// True for a 200 response declaring a PDF body.
    pub fn is_document(&self) -> bool {
        self.status == 200 && self.mime_type().as_deref() == Some(PDF_MIME_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>) -> PortalResponse {
        PortalResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: b"%PDF-1.4".to_vec(),
        }
    }

    #[test]
    fn mime_type_drops_parameters() {
        let resp = response(200, Some("Text/HTML; charset=UTF-8"));
        assert_eq!(resp.mime_type().as_deref(), Some("text/html"));
        assert_eq!(response(200, Some(" ; x=y")).mime_type(), None);
        assert_eq!(response(200, None).mime_type(), None);
    }

    #[test]
    fn document_requires_ok_status_and_pdf_type() {
        assert!(response(200, Some("application/pdf")).is_document());
        assert!(response(200, Some("application/PDF; name=list.pdf")).is_document());
        assert!(!response(200, Some("text/html")).is_document());
        assert!(!response(200, None).is_document());
        assert!(!response(206, Some("application/pdf")).is_document());
    }

    #[test]
    fn text_is_lossy() {
        let resp = PortalResponse {
            status: 200,
            content_type: None,
            body: vec![b'o', b'k', 0xff],
        };
        assert_eq!(resp.text(), "ok\u{fffd}");
    }
}
