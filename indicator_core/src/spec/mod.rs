pub mod indicator;
pub mod parser;
