pub mod bigrams;
pub mod cache;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod report;
pub mod scorer;
pub mod stopwords;
pub mod taxonomy;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
