pub mod app_error;
pub mod error_payload;

pub use app_error::AppError;
