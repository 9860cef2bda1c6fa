use crate::errors::GraphError;
use crate::types::VertexId;

/// the contiguous range of valid external vertex ids, offset by a
/// caller-chosen minimum index. external ids are mapped to zero based
/// internal indices before any matrix access so that no storage is
/// wasted on the offset and every access stays bounds checked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexIndexSpace {
    min_index: VertexId,
    vertex_num: usize,
}

impl VertexIndexSpace {
    pub fn new(vertex_num: usize, min_index: VertexId) -> Self {
        VertexIndexSpace {
            min_index,
            vertex_num,
        }
    }

    pub fn vertex_num(&self) -> usize {
        self.vertex_num
    }

    pub fn min_index(&self) -> VertexId {
        self.min_index
    }

    /// for an empty range this collapses to the minimum index so the
    /// computation cannot underflow
    pub fn max_index(&self) -> VertexId {
        self.min_index + self.vertex_num.saturating_sub(1) as VertexId
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex >= self.min_index && ((vertex - self.min_index) as usize) < self.vertex_num
    }

    /// maps an external vertex id to its internal index, failing on ids
    /// outside the valid range instead of corrupting a matrix access
    pub fn to_internal(&self, vertex: VertexId) -> Result<usize, GraphError> {
        if !self.contains(vertex) {
            return Err(GraphError::InvalidVertex {
                vertex,
                min_index: self.min_index,
                max_index: self.max_index(),
            });
        }

        Ok((vertex - self.min_index) as usize)
    }

    pub fn to_external(&self, index: usize) -> VertexId {
        self.min_index + index as VertexId
    }

    /// all valid external vertex ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = VertexId> {
        let min_index = self.min_index;
        (0..self.vertex_num).map(move |index| min_index + index as VertexId)
    }
}
