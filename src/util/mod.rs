pub mod parse;
pub mod timestamp;
