pub mod config;
pub mod logging;

pub mod catalog;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod orchestrator;
pub mod resolver;
pub mod storage;
pub mod url_model;

pub use error::InstdlError;
