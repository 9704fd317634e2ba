pub mod bar;
pub mod range;
