pub mod ast;
pub mod codegen;
pub mod converter;
pub mod errors;
pub mod metrics;
pub mod orchestrator;
pub mod parser;
