use thiserror::Error;

use crate::types::{Distance, Rank, VertexId};

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} is outside the valid range [{min_index}, {max_index}]")]
    InvalidVertex {
        vertex: VertexId,
        min_index: VertexId,
        max_index: VertexId,
    },

    #[error("rank {rank} is outside the valid range [0, {vertex_num})")]
    InvalidRank { rank: Rank, vertex_num: usize },

    #[error("negative weight {weight} on the arc from {start} to {end}, the repeated dijkstra solver requires nonnegative weights")]
    NegativeWeight {
        start: VertexId,
        end: VertexId,
        weight: Distance,
    },

    #[error("the distance matrix has not been solved yet")]
    Unsolved,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input line: {0}")]
    Parse(String),
}
