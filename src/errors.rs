mod api;

pub use api::{panic_response, ApiError};
