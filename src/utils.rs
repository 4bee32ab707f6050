pub mod error;
pub mod shutdown;

pub use error::format_error_report;
pub use shutdown::shutdown_signal;
