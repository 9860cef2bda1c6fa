use std::io::stdout;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_proximity::errors::GraphError;
use dense_proximity::graph::{GraphKind, ProximityGraph, RankAlgorithm, SolveAlgorithm};
use dense_proximity::types::{ArcList, Distance, Point, VertexId};
use dense_proximity::utils::{io, measure_time};

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    DistanceMatrix(DistanceMatrixCommand),
    Rankings(RankingsCommand),
    WithinRadius(WithinRadiusCommand),
    RandomPoints(RandomPointsCommand),
}

#[derive(Parser)]
struct DistanceMatrixCommand {
    /// path to the graph file to load
    #[clap(short, long)]
    graph_path: String,

    /// smallest valid vertex id in the graph file
    #[clap(short, long, default_value = "0")]
    min_index: VertexId,

    /// treat the arcs as directed instead of undirected
    #[clap(short, long)]
    directed: bool,

    /// solver to use, either floyd or dijkstra
    #[clap(short, long, default_value = "floyd")]
    algorithm: String,
}

#[derive(Parser)]
struct RankingsCommand {
    /// path to the graph file to load
    #[clap(short, long)]
    graph_path: String,

    /// smallest valid vertex id in the graph file
    #[clap(short, long, default_value = "0")]
    min_index: VertexId,

    /// treat the arcs as directed instead of undirected
    #[clap(short, long)]
    directed: bool,

    /// ranking strategy to use, either sort or insertion
    #[clap(short, long, default_value = "sort")]
    ranking: String,
}

#[derive(Parser)]
struct WithinRadiusCommand {
    /// path to the graph file to load
    #[clap(short, long)]
    graph_path: String,

    /// smallest valid vertex id in the graph file
    #[clap(short, long, default_value = "0")]
    min_index: VertexId,

    /// treat the arcs as directed instead of undirected
    #[clap(short, long)]
    directed: bool,

    /// vertex to start the proximity query from
    #[clap(short, long)]
    start: VertexId,

    /// distance threshold, only strictly closer vertices qualify
    #[clap(short, long)]
    radius: Distance,
}

#[derive(Parser)]
struct RandomPointsCommand {
    /// number of random points to generate
    #[clap(short, long, default_value = "10")]
    num_points: usize,

    /// coordinates are drawn uniformly from [0, max_coord)
    #[clap(short, long, default_value = "100")]
    max_coord: i64,

    /// seed for the random number generator
    #[clap(short, long, default_value = "42")]
    seed: u64,
}

fn main() {
    let opts = Opts::parse();

    let result = match opts.subcmd {
        SubCommand::DistanceMatrix(command) => distance_matrix(&command),
        SubCommand::Rankings(command) => rankings(&command),
        SubCommand::WithinRadius(command) => within_radius(&command),
        SubCommand::RandomPoints(command) => random_points(&command),
    };

    if let Err(error) = result {
        println!("error: {}", error);
    }
}

fn load_graph(graph_path: &str, min_index: VertexId, directed: bool) -> Result<ProximityGraph, GraphError> {
    let (arcs, vertex_num): (ArcList, usize) = io::read_graph_data(&Path::new(graph_path))?;
    println!("graph successfully loaded. num_vertices: {}, num_arcs: {}", vertex_num, arcs.len());

    let kind = if directed { GraphKind::Directed } else { GraphKind::Undirected };

    ProximityGraph::from_arcs(&arcs, vertex_num, min_index, kind)
}

fn parse_solver(name: &str) -> SolveAlgorithm {
    match name {
        "dijkstra" => SolveAlgorithm::RepeatedDijkstra,
        _ => SolveAlgorithm::FloydWarshall,
    }
}

fn distance_matrix(command: &DistanceMatrixCommand) -> Result<(), GraphError> {
    let mut graph = load_graph(&command.graph_path, command.min_index, command.directed)?;

    let (solve_time, result) = measure_time(|| graph.solve_with(parse_solver(&command.algorithm)).map(|_| ()));
    result?;

    println!("solve done. time required: {} ms", solve_time.as_millis());

    graph.write_shortest_dist(&mut stdout())
}

fn rankings(command: &RankingsCommand) -> Result<(), GraphError> {
    let mut graph = load_graph(&command.graph_path, command.min_index, command.directed)?;

    let ranking = match command.ranking.as_str() {
        "insertion" => RankAlgorithm::InsertionSort,
        _ => RankAlgorithm::ComparisonSort,
    };

    let (rank_time, _) = measure_time(|| {
        graph.rank_with(ranking);
    });

    println!("ranking done. time required: {} ms", rank_time.as_millis());

    graph.write_dist_seq_table(&mut stdout())
}

fn within_radius(command: &WithinRadiusCommand) -> Result<(), GraphError> {
    let mut graph = load_graph(&command.graph_path, command.min_index, command.directed)?;

    let count = graph.vertex_count_within_radius(command.start, command.radius)?;
    println!("{} vertices within radius {} of vertex {}", count, command.radius, command.start);

    match graph.random_vertex_within_radius(command.start, command.radius)? {
        Some(vertex) => println!("randomly selected vertex: {}", vertex),
        None => println!("no vertex qualifies"),
    }

    Ok(())
}

fn random_points(command: &RandomPointsCommand) -> Result<(), GraphError> {
    let mut rng = StdRng::seed_from_u64(command.seed);

    let points: Vec<Point> = (0..command.num_points)
        .map(|_| (rng.gen_range(0..command.max_coord), rng.gen_range(0..command.max_coord)))
        .collect();

    println!("generated {} random points", points.len());

    let mut graph = ProximityGraph::from_points(&points);

    // squared euclidean weights, the solve step is skipped by design
    graph.write_shortest_dist(&mut stdout())?;

    for rank in 0..points.len().min(3) {
        let closest = graph.nth_closest_vertex(0, rank)?;
        println!("rank {} closest to point 0: {}", rank, closest);
    }

    Ok(())
}
