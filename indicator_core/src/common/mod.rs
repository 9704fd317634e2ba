pub mod date;
pub mod errors;
