pub mod config;
pub mod logging;

pub mod console;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod gate;
pub mod naming;
pub mod pipeline;
pub mod storage;
pub mod validator;

pub use error::RunError;
