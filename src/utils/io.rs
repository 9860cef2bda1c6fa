use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::GraphError;
use crate::graph::ProximityGraph;
use crate::types::*;

/// reads a graph file in the dimacs-like format used by the command
/// line tools: a `p sp <num_vertices> <num_arcs>` size line followed by
/// one `a <source> <target> <weight>` line per arc. vertex ids are kept
/// exactly as written, the caller decides the minimum index
pub fn read_graph_data(path: &dyn AsRef<Path>) -> Result<(ArcList, usize), GraphError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut arcs: ArcList = Vec::new();
    let mut vertex_num = 0;

    for line in reader.lines() {
        let line = line?;
        let split: Vec<&str> = line.split_whitespace().collect();

        if is_graph_size_line(&line) {
            if split.len() < 3 {
                return Err(GraphError::Parse(line.clone()));
            }

            vertex_num = parse_field(&line, split[2])?;
        } else if is_arc_line(&line) {
            if split.len() < 4 {
                return Err(GraphError::Parse(line.clone()));
            }

            let source: VertexId = parse_field(&line, split[1])?;
            let target: VertexId = parse_field(&line, split[2])?;
            let weight: Distance = parse_field(&line, split[3])?;

            arcs.push((source, target, weight));
        }
    }

    Ok((arcs, vertex_num))
}

/// reads a point set file with one `<x> <y>` line per point
pub fn read_points(path: &dyn AsRef<Path>) -> Result<Vec<Point>, GraphError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut points: Vec<Point> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let split: Vec<&str> = line.split_whitespace().collect();

        if split.is_empty() {
            continue;
        }
        if split.len() < 2 {
            return Err(GraphError::Parse(line.clone()));
        }

        let x: Coord = parse_field(&line, split[0])?;
        let y: Coord = parse_field(&line, split[1])?;

        points.push((x, y));
    }

    Ok(points)
}

/// exports the solved distance matrix as comma separated lines
pub fn export_distance_matrix(path: &dyn AsRef<Path>, graph: &mut ProximityGraph) -> Result<(), GraphError> {
    let mut file = File::create(path)?;

    graph.write_shortest_dist(&mut file)
}

fn parse_field<T: std::str::FromStr>(line: &str, field: &str) -> Result<T, GraphError> {
    field
        .parse()
        .map_err(|_| GraphError::Parse(String::from(line)))
}

fn is_graph_size_line(line: &str) -> bool {
    line.starts_with("p sp")
}

fn is_arc_line(line: &str) -> bool {
    line.starts_with("a ")
}
