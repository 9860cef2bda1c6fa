use std::io::Write;

use rand::Rng;

use crate::errors::GraphError;
use crate::index_space::VertexIndexSpace;
use crate::types::*;
use crate::utils::data_structures::Matrix;

/// rendered in place of a numeric value for unreachable vertex pairs
pub const UNREACHABLE_TOKEN: &str = "x";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// selects the solver used to turn the adjacency matrix into the
/// all-pairs distance matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveAlgorithm {
    /// relaxes all pairs through every intermediate vertex, cubic time,
    /// supports negative weights as long as no negative cycle exists
    FloydWarshall,
    /// one dense dijkstra run per source vertex, requires strictly
    /// nonnegative weights
    RepeatedDijkstra,
}

/// selects the strategy used to build the per-vertex distance rankings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankAlgorithm {
    ComparisonSort,
    InsertionSort,
}

/// dense graph over a contiguous external vertex id range that answers
/// all-pairs shortest distance, per-vertex distance rankings and radius
/// bounded proximity queries.
///
/// the distance matrix and the ranking table are computed lazily on
/// first access and cached. a fresh solve invalidates the cached
/// ranking table but does not recompute it until the next access.
///
/// storage is quadratic and the all-pairs solve is cubic, which limits
/// practical use to graphs of a few thousand vertices.
pub struct ProximityGraph {
    kind: GraphKind,
    index_space: VertexIndexSpace,

    adjacency: Matrix<Distance>,
    shortest_dist: Matrix<Distance>,
    dist_seq: Matrix<VertexId>,

    shortest_dist_solved: bool,
    dist_seq_solved: bool,
}

impl ProximityGraph {
    /// creates a graph with no arcs, every vertex at distance zero from
    /// itself and unreachable from every other vertex
    pub fn new(vertex_num: usize, min_index: VertexId, kind: GraphKind) -> Self {
        let mut adjacency = Matrix::new(vertex_num, vertex_num, UNREACHABLE);

        for index in 0..vertex_num {
            adjacency.set(index, index, 0);
        }

        ProximityGraph {
            kind,
            index_space: VertexIndexSpace::new(vertex_num, min_index),
            adjacency,
            shortest_dist: Matrix::new(vertex_num, vertex_num, UNREACHABLE),
            dist_seq: Matrix::new(vertex_num, vertex_num, 0),
            shortest_dist_solved: false,
            dist_seq_solved: false,
        }
    }

    /// creates a graph from an explicit arc list. undirected graphs get
    /// the symmetric entry as well. duplicate arcs overwrite earlier
    /// ones and a self loop overwrites the zero diagonal
    pub fn from_arcs(
        arcs: &ArcList,
        vertex_num: usize,
        min_index: VertexId,
        kind: GraphKind,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_num, min_index, kind);

        for &(source, target, weight) in arcs {
            let row = graph.index_space.to_internal(source)?;
            let col = graph.index_space.to_internal(target)?;

            graph.adjacency.set(row, col, weight);

            if kind == GraphKind::Undirected {
                graph.adjacency.set(col, row, weight);
            }
        }

        Ok(graph)
    }

    /// creates a complete undirected graph over zero based point indices
    /// with squared euclidean distances as arc weights.
    ///
    /// squared distances do not satisfy the triangle inequality in
    /// general, so relaxing them would produce meaningless values. the
    /// adjacency matrix is therefore copied as the final distance matrix
    /// and the solve step is skipped. the resulting distances are an
    /// ordering proxy for nearest-neighbour queries, not true metric
    /// shortest path distances
    pub fn from_points(points: &[Point]) -> Self {
        let mut graph = Self::new(points.len(), 0, GraphKind::Undirected);

        for i in 0..points.len() {
            for j in 0..i {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let weight = dx * dx + dy * dy;

                graph.adjacency.set(i, j, weight);
                graph.adjacency.set(j, i, weight);
            }
        }

        graph.shortest_dist = graph.adjacency.clone();
        graph.shortest_dist_solved = true;

        graph
    }

    pub fn vertex_num(&self) -> usize {
        self.index_space.vertex_num()
    }

    pub fn min_index(&self) -> VertexId {
        self.index_space.min_index()
    }

    pub fn max_index(&self) -> VertexId {
        self.index_space.max_index()
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn adjacency_weight(&self, source: VertexId, target: VertexId) -> Result<Distance, GraphError> {
        let row = self.index_space.to_internal(source)?;
        let col = self.index_space.to_internal(target)?;

        Ok(self.adjacency.get(row, col))
    }

    /// shortest distance between two vertices, only valid once the
    /// distance matrix has been solved
    pub fn distance(&self, from: VertexId, to: VertexId) -> Result<Distance, GraphError> {
        if !self.shortest_dist_solved {
            return Err(GraphError::Unsolved);
        }

        let row = self.index_space.to_internal(from)?;
        let col = self.index_space.to_internal(to)?;

        Ok(self.shortest_dist.get(row, col))
    }

    /// solves the distance matrix with the default algorithm if it is
    /// stale and returns it
    pub fn shortest_paths(&mut self) -> &Matrix<Distance> {
        if !self.shortest_dist_solved {
            self.solve_floyd();

            self.shortest_dist_solved = true;
            self.dist_seq_solved = false;
        }

        &self.shortest_dist
    }

    /// solves the distance matrix with the given algorithm if it is
    /// stale. solving an already solved graph is a no-op unless
    /// invalidate is called first
    pub fn solve_with(&mut self, algorithm: SolveAlgorithm) -> Result<&Matrix<Distance>, GraphError> {
        if !self.shortest_dist_solved {
            match algorithm {
                SolveAlgorithm::FloydWarshall => self.solve_floyd(),
                SolveAlgorithm::RepeatedDijkstra => self.solve_dijkstra()?,
            }

            self.shortest_dist_solved = true;
            self.dist_seq_solved = false;
        }

        Ok(&self.shortest_dist)
    }

    /// discards the cached distance matrix and ranking table so the
    /// next access recomputes them
    pub fn invalidate(&mut self) {
        self.shortest_dist_solved = false;
        self.dist_seq_solved = false;
    }

    fn solve_floyd(&mut self) {
        self.shortest_dist.clone_from(&self.adjacency);

        let vertex_num = self.vertex_num();

        // the intermediate vertex has to be the outermost loop
        for via in 0..vertex_num {
            for row in 0..vertex_num {
                let to_via = self.shortest_dist.get(row, via);
                if to_via >= UNREACHABLE {
                    continue;
                }

                for col in 0..vertex_num {
                    let candidate = add_distances(to_via, self.shortest_dist.get(via, col));

                    self.shortest_dist.reduce_value(row, col, candidate);
                }
            }
        }
    }

    fn solve_dijkstra(&mut self) -> Result<(), GraphError> {
        self.check_nonnegative_weights()?;

        self.shortest_dist.clone_from(&self.adjacency);

        let vertex_num = self.vertex_num();

        for source in 0..vertex_num {
            let mut settled = vec![false; vertex_num];
            settled[source] = true;

            for _ in 1..vertex_num {
                // the closest unsettled vertex, none once the remaining
                // vertices are all unreachable from the source
                let closest = (0..vertex_num)
                    .filter(|&vertex| !settled[vertex])
                    .min_by_key(|&vertex| self.shortest_dist.get(source, vertex));

                let closest = match closest {
                    Some(vertex) if self.shortest_dist.get(source, vertex) < UNREACHABLE => vertex,
                    _ => break,
                };

                settled[closest] = true;
                let base = self.shortest_dist.get(source, closest);

                for vertex in 0..vertex_num {
                    if settled[vertex] {
                        continue;
                    }

                    let candidate = add_distances(base, self.adjacency.get(closest, vertex));

                    self.shortest_dist.reduce_value(source, vertex, candidate);
                }
            }
        }

        Ok(())
    }

    fn check_nonnegative_weights(&self) -> Result<(), GraphError> {
        let vertex_num = self.vertex_num();

        for row in 0..vertex_num {
            for col in 0..vertex_num {
                let weight = self.adjacency.get(row, col);

                if weight < 0 {
                    return Err(GraphError::NegativeWeight {
                        start: self.index_space.to_external(row),
                        end: self.index_space.to_external(col),
                        weight,
                    });
                }
            }
        }

        Ok(())
    }

    /// solves and ranks with the default algorithms if stale and
    /// returns the ranking table. row v holds every vertex id sorted by
    /// ascending distance from v, so entry zero is v itself
    pub fn dist_seq_table(&mut self) -> &Matrix<VertexId> {
        if !self.dist_seq_solved {
            self.shortest_paths(); // prerequisite
            self.rank_with(RankAlgorithm::ComparisonSort);
        }

        &self.dist_seq
    }

    /// rebuilds the ranking table with the given strategy, solving the
    /// distance matrix first if it is stale.
    ///
    /// both strategies order by distance with ties broken by ascending
    /// vertex id, so their results are interchangeable
    pub fn rank_with(&mut self, algorithm: RankAlgorithm) -> &Matrix<VertexId> {
        self.shortest_paths(); // prerequisite

        match algorithm {
            RankAlgorithm::ComparisonSort => self.rank_by_sort(),
            RankAlgorithm::InsertionSort => self.rank_by_insertion(),
        }

        self.dist_seq_solved = true;

        &self.dist_seq
    }

    fn rank_by_sort(&mut self) {
        let vertex_num = self.vertex_num();

        for row in 0..vertex_num {
            let mut seq: Vec<usize> = (0..vertex_num).collect();
            seq.sort_by_key(|&vertex| (self.shortest_dist.get(row, vertex), vertex));

            for (rank, &vertex) in seq.iter().enumerate() {
                self.dist_seq.set(row, rank, self.index_space.to_external(vertex));
            }
        }
    }

    fn rank_by_insertion(&mut self) {
        let vertex_num = self.vertex_num();

        for row in 0..vertex_num {
            let mut seq: Vec<usize> = Vec::with_capacity(vertex_num);

            for vertex in 0..vertex_num {
                let key = (self.shortest_dist.get(row, vertex), vertex);

                // scan backwards for the insertion position
                let mut position = seq.len();
                while position > 0 {
                    let settled = seq[position - 1];

                    if (self.shortest_dist.get(row, settled), settled) <= key {
                        break;
                    }

                    position -= 1;
                }

                seq.insert(position, vertex);
            }

            for (rank, &vertex) in seq.iter().enumerate() {
                self.dist_seq.set(row, rank, self.index_space.to_external(vertex));
            }
        }
    }

    /// the vertex with the given rank in the distance ranking of the
    /// start vertex, rank zero being the start vertex itself
    pub fn nth_closest_vertex(&mut self, start: VertexId, rank: Rank) -> Result<VertexId, GraphError> {
        let row = self.index_space.to_internal(start)?;

        if rank >= self.vertex_num() {
            return Err(GraphError::InvalidRank {
                rank,
                vertex_num: self.vertex_num(),
            });
        }

        self.dist_seq_table();

        Ok(self.dist_seq.get(row, rank))
    }

    /// number of vertices strictly closer to the start vertex than the
    /// given radius. the ranking row is sorted, so the scan stops at
    /// the first entry at or beyond the radius
    pub fn vertex_count_within_radius(&mut self, start: VertexId, radius: Distance) -> Result<usize, GraphError> {
        let row = self.index_space.to_internal(start)?;

        self.dist_seq_table();

        let mut count = 0;
        for rank in 0..self.vertex_num() {
            let vertex = self.internal_index(self.dist_seq.get(row, rank));

            if self.shortest_dist.get(row, vertex) >= radius {
                break;
            }

            count += 1;
        }

        Ok(count)
    }

    /// picks a vertex uniformly at random among all vertices strictly
    /// closer to the start vertex than the given radius, in a single
    /// pass over the qualifying prefix of the ranking row: the n-th
    /// candidate replaces the current choice with probability 1/n.
    /// returns none when no vertex qualifies
    pub fn random_vertex_within_radius_with(
        &mut self,
        start: VertexId,
        radius: Distance,
        rng: &mut impl Rng,
    ) -> Result<Option<VertexId>, GraphError> {
        let row = self.index_space.to_internal(start)?;

        self.dist_seq_table();

        let mut selected = None;
        let mut candidates = 0;

        for rank in 0..self.vertex_num() {
            let vertex = self.dist_seq.get(row, rank);

            if self.shortest_dist.get(row, self.internal_index(vertex)) >= radius {
                break;
            }

            candidates += 1;
            if rng.gen_range(0..candidates) == 0 {
                selected = Some(vertex);
            }
        }

        Ok(selected)
    }

    pub fn random_vertex_within_radius(
        &mut self,
        start: VertexId,
        radius: Distance,
    ) -> Result<Option<VertexId>, GraphError> {
        self.random_vertex_within_radius_with(start, radius, &mut rand::thread_rng())
    }

    /// writes one comma separated line per vertex with the solved
    /// distances, unreachable pairs rendered as a placeholder token
    pub fn write_shortest_dist(&mut self, writer: &mut impl Write) -> Result<(), GraphError> {
        self.shortest_paths();

        for row in 0..self.vertex_num() {
            let rendered: Vec<String> = self
                .shortest_dist
                .row(row)
                .iter()
                .map(|&dist| {
                    if dist >= UNREACHABLE {
                        String::from(UNREACHABLE_TOKEN)
                    } else {
                        dist.to_string()
                    }
                })
                .collect();

            writeln!(writer, "{}", rendered.join(","))?;
        }

        Ok(())
    }

    /// writes one comma separated line per vertex with the vertex ids
    /// in ascending order of distance
    pub fn write_dist_seq_table(&mut self, writer: &mut impl Write) -> Result<(), GraphError> {
        self.dist_seq_table();

        for row in 0..self.vertex_num() {
            let rendered: Vec<String> = self
                .dist_seq
                .row(row)
                .iter()
                .map(|vertex| vertex.to_string())
                .collect();

            writeln!(writer, "{}", rendered.join(","))?;
        }

        Ok(())
    }

    // entries of the ranking table are valid external ids by construction
    fn internal_index(&self, vertex: VertexId) -> usize {
        (vertex - self.index_space.min_index()) as usize
    }
}
