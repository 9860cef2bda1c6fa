pub mod types;

pub mod errors;
pub mod index_space;
pub mod graph;
pub mod utils;
