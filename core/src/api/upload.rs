use std::path::Path;

/// Metadata every uploadable file exposes, so validation can run before
/// the file is read.
pub trait UploadSource {
    fn file_name(&self) -> String;
    /// MIME type as reported by the picker (may be empty).
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
}

/// File held in memory. Used by host tools and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Wrap `bytes` read from `path`, guessing the media type from the
    /// extension.
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let media_type = guess_media_type(&name).to_string();
        Self { name, media_type, bytes }
    }
}

impl UploadSource for LocalFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Media type for common image extensions, `application/octet-stream`
/// otherwise.
pub fn guess_media_type(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Multipart body of `POST /api/payments/upload-proof`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofUpload<F> {
    pub file: F,
    pub registration_id: String,
    pub payment_amount: f64,
    pub payment_method: String,
    pub notes: Option<String>,
}

impl<F> ProofUpload<F> {
    /// Text parts in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("registrationId", self.registration_id.clone()),
            ("paymentAmount", self.payment_amount.to_string()),
            ("paymentMethod", self.payment_method.clone()),
        ];
        if let Some(notes) = &self.notes {
            fields.push(("notes", notes.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_media_type() {
        assert_eq!(guess_media_type("bukti.PNG"), "image/png");
        assert_eq!(guess_media_type("scan.jpeg"), "image/jpeg");
        assert_eq!(guess_media_type("noext"), "application/octet-stream");
    }

    #[test]
    fn test_text_fields_skip_empty_notes() {
        let upload = ProofUpload {
            file: (),
            registration_id: "r1".into(),
            payment_amount: 50000.0,
            payment_method: "Transfer Bank".into(),
            notes: None,
        };
        let fields = upload.text_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], ("paymentAmount", "50000".to_string()));
    }
}
