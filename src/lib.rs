pub mod deque;
pub mod error;
pub mod logging;
pub mod percolation;
pub mod randomized_queue;
pub mod stats;
pub mod union_find;
pub use error::{EmptyStructure, InvalidArgument};
pub use percolation::Percolation;
pub use union_find::{UnionFind, WeightedQuickUnion};
