pub mod config;
pub mod errors;
pub mod extractor;
pub mod output;
pub mod resolve;
