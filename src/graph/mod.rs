pub mod builder;
pub mod generators;
pub mod matrix;
pub mod traits;

pub use matrix::MatrixGraph;
pub use traits::Graph;
