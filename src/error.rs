//! Error handling for the NovaNest backend

#[cfg(feature = "server")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "server")]
use serde_json::json;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resident not found: {0}")]
    ResidentNotFound(u32),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Alert not found: {0}")]
    AlertNotFound(u32),

    /// Path segment was not an integer. Reported to clients exactly like
    /// `ResidentNotFound`; kept separate so logs can tell the two apart.
    #[error("Invalid resident id: {0:?}")]
    InvalidResidentId(String),

    #[error("Invalid alert id: {0:?}")]
    InvalidAlertId(String),

    /// Identifier already registered in a collection
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message exposed to API clients in the `error` field
    pub fn public_message(&self) -> String {
        match self {
            Error::ResidentNotFound(_) | Error::InvalidResidentId(_) => {
                "Resident not found".to_string()
            }
            Error::DeviceNotFound(_) => "Device not found".to_string(),
            Error::AlertNotFound(_) | Error::InvalidAlertId(_) => "Alert not found".to_string(),
            Error::DuplicateId { collection, .. } => format!("Duplicate {} id", collection),
            Error::Config(_) | Error::Io(_) => "Internal server error".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ResidentNotFound(_)
                | Error::DeviceNotFound(_)
                | Error::AlertNotFound(_)
                | Error::InvalidResidentId(_)
                | Error::InvalidAlertId(_)
        )
    }
}

#[cfg(feature = "server")]
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::DuplicateId { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request error");
        } else {
            tracing::warn!(status = %status, error = %self, "Request error");
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
