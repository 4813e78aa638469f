use std::fmt;

/// Upload formats the extractors understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Jpeg,
    Png,
}

impl DocumentKind {
    /// Map a declared MIME type; `None` for anything unsupported
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Jpeg | Self::Png)
    }

    /// File suffix used for scratch files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_mime_types() {
        assert_eq!(DocumentKind::from_mime("application/pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime("image/jpeg"), Some(DocumentKind::Jpeg));
        assert_eq!(DocumentKind::from_mime("image/jpg"), Some(DocumentKind::Jpeg));
        assert_eq!(DocumentKind::from_mime("IMAGE/PNG"), Some(DocumentKind::Png));
    }

    #[test]
    fn test_unsupported_mime_types() {
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
        assert_eq!(DocumentKind::from_mime("image/gif"), None);
        assert_eq!(DocumentKind::from_mime(""), None);
    }

    #[test]
    fn test_image_kinds() {
        assert!(DocumentKind::Png.is_image());
        assert!(!DocumentKind::Pdf.is_image());
    }
}
