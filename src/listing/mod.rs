pub mod models;
pub mod parser;
pub mod text;
pub mod viewing;

pub use parser::extract_records;
