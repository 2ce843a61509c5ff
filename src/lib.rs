pub mod analyzers;
pub mod collector;
pub mod error;
pub mod output;
pub mod parser;
