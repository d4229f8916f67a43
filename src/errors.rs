use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad user input, etc.) or the data and model layers.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DatasetError(String),
    ModelError(String),
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DatasetError(msg) => write!(f, "Dataset Error: {msg}"),
            ServerError::ModelError(msg) => write!(f, "Model Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
