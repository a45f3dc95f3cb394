pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::{bfs, BfsRun};
pub use dijkstra::dijkstra;
pub use path::{expand_on_maze, reconstruct, Path};
