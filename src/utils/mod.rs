pub mod format;
pub mod upload;
