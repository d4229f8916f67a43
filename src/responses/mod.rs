pub mod csv;
pub mod errors;
pub mod html;
pub mod xlsx;

use astra::Response;

use crate::errors::ServerError;

/// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use self::csv::csv_response;
pub use self::errors::html_error_response;
pub use self::html::{css_response, html_response};
pub use self::xlsx::xlsx_response;
