use std::fs;
use std::path::PathBuf;

use dense_proximity::graph::{GraphKind, ProximityGraph};
use dense_proximity::utils::io;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn test_read_graph_data() {
    let path = temp_file("dense_proximity_io_test_graph.txt");
    fs::write(&path, "p sp 3 2\na 0 1 5\na 1 2 3\n").unwrap();

    let (arcs, vertex_num) = io::read_graph_data(&path).unwrap();

    assert_eq!(vertex_num, 3);
    assert_eq!(arcs, vec![(0, 1, 5), (1, 2, 3)]);

    let mut graph = ProximityGraph::from_arcs(&arcs, vertex_num, 0, GraphKind::Undirected).unwrap();
    graph.shortest_paths();
    assert_eq!(graph.distance(0, 2).unwrap(), 8);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_graph_data_rejects_malformed_arcs() {
    let path = temp_file("dense_proximity_io_test_malformed.txt");
    fs::write(&path, "p sp 2 1\na 0 1\n").unwrap();

    assert!(io::read_graph_data(&path).is_err());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_points() {
    let path = temp_file("dense_proximity_io_test_points.txt");
    fs::write(&path, "0 0\n3 4\n\n-1 2\n").unwrap();

    let points = io::read_points(&path).unwrap();

    assert_eq!(points, vec![(0, 0), (3, 4), (-1, 2)]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_distance_matrix() {
    let path = temp_file("dense_proximity_io_test_export.txt");

    let arcs = vec![(0, 1, 5)];
    let mut graph = ProximityGraph::from_arcs(&arcs, 3, 0, GraphKind::Undirected).unwrap();

    io::export_distance_matrix(&path, &mut graph).unwrap();

    let exported = fs::read_to_string(&path).unwrap();
    assert_eq!(exported, "0,5,x\n5,0,x\nx,x,0\n");

    fs::remove_file(&path).unwrap();
}
