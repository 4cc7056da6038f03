pub mod errors;
pub mod serde_utils;
pub mod time;
pub mod upstream;
