use dense_proximity::errors::GraphError;
use dense_proximity::graph::{GraphKind, ProximityGraph, RankAlgorithm};
use dense_proximity::types::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn get_line_graph() -> ProximityGraph {
    // 0 --2-- 1 --2-- 2 --2-- 3
    let arcs: ArcList = vec![(0, 1, 2), (1, 2, 2), (2, 3, 2)];

    ProximityGraph::from_arcs(&arcs, 4, 0, GraphKind::Undirected).unwrap()
}

fn random_graph(vertex_num: usize, seed: u64) -> ProximityGraph {
    let mut rng = StdRng::seed_from_u64(seed);

    let arcs: ArcList = (0..(vertex_num * 4))
        .map(|_| {
            // avoid self loops so that every vertex stays closest to itself
            let source = rng.gen_range(0..vertex_num);
            let target = (source + rng.gen_range(1..vertex_num)) % vertex_num;

            (source as VertexId, target as VertexId, rng.gen_range(1..10) as Distance)
        })
        .collect();

    ProximityGraph::from_arcs(&arcs, vertex_num, 0, GraphKind::Directed).unwrap()
}

#[test]
fn test_ranking_on_line_graph() {
    let mut graph = get_line_graph();

    let expected_rankings: Vec<VertexId> = vec![
        0, 1, 2, 3,
        1, 0, 2, 3,
        2, 1, 3, 0,
        3, 2, 1, 0,
    ];

    for algorithm in [RankAlgorithm::ComparisonSort, RankAlgorithm::InsertionSort] {
        graph.invalidate();
        let table = graph.rank_with(algorithm);

        for row in 0..4 {
            for rank in 0..4 {
                assert_eq!(table.get(row, rank), expected_rankings[row * 4 + rank]);
            }
        }
    }
}

/// equal distances have to be broken by ascending vertex id in both
/// strategies, vertex 1 and 2 are both at distance 2 from vertex 0
#[test]
fn test_ties_broken_by_ascending_id() {
    let arcs: ArcList = vec![(0, 1, 2), (0, 2, 2), (0, 3, 1)];
    let mut graph = ProximityGraph::from_arcs(&arcs, 4, 0, GraphKind::Undirected).unwrap();

    for algorithm in [RankAlgorithm::ComparisonSort, RankAlgorithm::InsertionSort] {
        graph.invalidate();
        let table = graph.rank_with(algorithm);

        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.get(0, 1), 3);
        assert_eq!(table.get(0, 2), 1);
        assert_eq!(table.get(0, 3), 2);
    }
}

/// both strategies have to produce identical tables on any graph
#[test]
fn test_strategies_are_interchangeable() {
    for seed in 0..5 {
        let mut graph = random_graph(40, seed);

        let sort_table: Vec<VertexId> = {
            let table = graph.rank_with(RankAlgorithm::ComparisonSort);
            (0..40).flat_map(|row| table.row(row).to_vec()).collect()
        };

        let insertion_table: Vec<VertexId> = {
            let table = graph.rank_with(RankAlgorithm::InsertionSort);
            (0..40).flat_map(|row| table.row(row).to_vec()).collect()
        };

        assert_eq!(sort_table, insertion_table);
    }
}

#[test]
fn test_rows_are_non_decreasing_and_start_at_zero_distance() {
    let mut graph = random_graph(30, 11);

    graph.dist_seq_table();

    for vertex in 0..30 {
        let first = graph.nth_closest_vertex(vertex, 0).unwrap();
        assert_eq!(graph.distance(vertex, first).unwrap(), 0);
        assert_eq!(first, vertex);

        let mut previous = 0;
        for rank in 0..30 {
            let ranked = graph.nth_closest_vertex(vertex, rank).unwrap();
            let dist = graph.distance(vertex, ranked).unwrap();

            assert!(dist >= previous);
            previous = dist;
        }
    }
}

#[test]
fn test_ranking_with_min_index_offset() {
    // line graph shifted to ids 5..=8
    let arcs: ArcList = vec![(5, 6, 2), (6, 7, 2), (7, 8, 2)];
    let mut graph = ProximityGraph::from_arcs(&arcs, 4, 5, GraphKind::Undirected).unwrap();

    assert_eq!(graph.nth_closest_vertex(5, 0).unwrap(), 5);
    assert_eq!(graph.nth_closest_vertex(5, 1).unwrap(), 6);
    assert_eq!(graph.nth_closest_vertex(5, 3).unwrap(), 8);
}

#[test]
fn test_invalid_rank_is_rejected() {
    let mut graph = get_line_graph();

    assert!(matches!(
        graph.nth_closest_vertex(0, 4),
        Err(GraphError::InvalidRank { rank: 4, vertex_num: 4 })
    ));
}

/// a fresh solve invalidates the cached ranking table
#[test]
fn test_ranking_recomputed_after_invalidate() {
    let mut graph = get_line_graph();

    graph.dist_seq_table();
    graph.invalidate();

    assert_eq!(graph.nth_closest_vertex(3, 1).unwrap(), 2);
}
