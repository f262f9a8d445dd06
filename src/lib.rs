pub mod api;
pub mod config;
pub mod discovery;
pub mod llm;
