use bytes::Bytes;
use std::path::Path;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file the user picked, before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: usize,
    pub content: Bytes,
    /// Media type declared by the picker. Derived from the file name,
    /// never from the content.
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len(),
            content,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Reads a file from disk the way a browser file input would: the
    /// declared media type comes from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = Self::new(name, content);
        Ok(match declared_media_type(path) {
            Some(mime_type) => file.with_mime_type(mime_type),
            None => file,
        })
    }

    /// Exact match on the declared media type only.
    pub fn is_pdf(&self) -> bool {
        self.mime_type.as_deref() == Some(PDF_MEDIA_TYPE)
    }
}

pub fn declared_media_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path).first_raw().map(str::to_string)
}
