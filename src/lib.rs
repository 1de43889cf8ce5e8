//! PDF Text Extractor client
//!
//! Picks a PDF, uploads it to the extraction service and shows the text it
//! sends back.

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use config::Config;
pub use controller::UploadController;
pub use error::{AppError, AppResult};
