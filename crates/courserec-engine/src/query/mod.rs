//! Query resolution: key lookup and top-k neighbour selection.

pub mod index;
pub mod resolver;

pub use index::QueryIndex;
pub use resolver::{rank_neighbours, QueryResolver};
