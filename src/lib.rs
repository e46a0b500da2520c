pub mod cliopt;
pub mod decoder;
pub mod error;
pub mod model;
pub mod output;
pub mod reader;
pub mod utils;

pub use decoder::parse;
