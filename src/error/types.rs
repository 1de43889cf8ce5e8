use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Shown when a failure carries no description of its own.
pub const FALLBACK_UPLOAD_MESSAGE: &str = "An error occurred while uploading";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Please select a PDF file")]
    NotPdf,

    #[error("Please select a PDF file first")]
    NoFileSelected,

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("{message}")]
    Transport { message: String },

    #[error("{message}")]
    InvalidResponse { message: String },

    #[error("An upload is already in progress")]
    UploadInFlight,

    #[error("{message}")]
    Io { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotPdf => "INVALID_FILE_TYPE",
            AppError::NoFileSelected => "NO_FILE_SELECTED",
            AppError::HttpStatus { .. } => "HTTP_ERROR",
            AppError::Transport { .. } => "TRANSPORT_ERROR",
            AppError::InvalidResponse { .. } => "INVALID_RESPONSE",
            AppError::UploadInFlight => "UPLOAD_IN_FLIGHT",
            AppError::Io { .. } => "IO_ERROR",
        }
    }

    /// Message for the error panel. Falls back to a generic string when the
    /// underlying failure did not describe itself.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_UPLOAD_MESSAGE.to_string()
        } else {
            message
        }
    }
}

// Convert common errors to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // Alternate formatting keeps the whole cause chain, e.g.
        // "error sending request for url (...): tcp connect error: Connection refused".
        let message = format!("{:#}", anyhow::Error::new(err));
        AppError::Transport { message }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse {
            message: format!("JSON parsing error: {}", err),
        }
    }
}
