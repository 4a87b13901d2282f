pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod profile;
pub mod source;
#[cfg(test)]
pub mod test_helpers;
