pub mod chunk;
pub mod colors;
pub mod formatting;
pub mod table;

pub use chunk::chunk;
