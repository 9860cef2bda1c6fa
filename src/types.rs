pub type VertexId = u32;
pub type Distance = i64;
pub type Coord = i64;
pub type Rank = usize;

/// sentinel distance for unreachable vertex pairs.
/// half of the maximum leaves enough headroom so that adding two finite
/// distances can never wrap before the saturation check caps the result
pub const UNREACHABLE: Distance = i64::MAX / 2;

/// a weighted arc given as (source vertex, target vertex, weight)
pub type Arc = (VertexId, VertexId, Distance);
pub type ArcList = Vec<Arc>;

/// a 2-d point given as (x, y)
pub type Point = (Coord, Coord);

/// adds two distances, saturating at the unreachable sentinel
pub fn add_distances(first: Distance, second: Distance) -> Distance {
    if first >= UNREACHABLE || second >= UNREACHABLE {
        return UNREACHABLE;
    }

    (first + second).min(UNREACHABLE)
}
