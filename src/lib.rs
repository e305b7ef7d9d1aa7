use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub use cli::CLIParser;
use error::Error;
use graph::csv_parser::parse_graph_records;
use graph::{dijkstra, kruskal, prim, Graph, MinimumSpanningTree};
use huffman::HuffmanCoding;

mod cli;
pub mod error;
pub mod graph;
pub mod huffman;
mod logger;
pub mod min_heap;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Prim,
    Kruskal,
    Dijkstra,
    Huffman,
    All,
}

pub struct Arguments {
    algorithm: Algorithm,
    graph_file: PathBuf,
    text_file: PathBuf,
    source: Option<String>,
    start: Option<String>,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn load_graph(file_path: &Path) -> Result<Graph> {
    let input_file = open_input_file(file_path)?;
    let graph = parse_graph_records(BufReader::new(input_file))?;
    log::info!(
        "Loaded graph from '{}': {} vertices, {} edges",
        file_path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn read_text_file(file_path: &Path) -> Result<String> {
    let mut input_file = open_input_file(file_path)?;
    let mut text = String::new();
    input_file
        .read_to_string(&mut text)
        .map_err(|e| Error::FailedToReadInputFile(file_path.display().to_string(), e))?;
    Ok(text)
}

/// Runs the algorithm selected on the command line and prints its
/// result report to stdout.
pub fn run(arguments: &Arguments) -> Result<()> {
    match arguments.algorithm {
        Algorithm::Prim => run_prim(&arguments.graph_file, arguments.start.as_deref()),
        Algorithm::Kruskal => run_kruskal(&arguments.graph_file),
        Algorithm::Dijkstra => run_dijkstra(&arguments.graph_file, arguments.source.as_deref()),
        Algorithm::Huffman => run_huffman(&arguments.text_file),
        Algorithm::All => {
            run_prim(&arguments.graph_file, arguments.start.as_deref())?;
            run_kruskal(&arguments.graph_file)?;
            run_dijkstra(&arguments.graph_file, arguments.source.as_deref())?;
            run_huffman(&arguments.text_file)
        }
    }
}

pub fn run_prim(graph_file: &Path, start: Option<&str>) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let tree = prim::minimum_spanning_tree(&graph, start)?;
    print_spanning_tree_report("Prim", &graph, &tree);
    Ok(())
}

pub fn run_kruskal(graph_file: &Path) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let tree = kruskal::minimum_spanning_tree(&graph)?;
    print_spanning_tree_report("Kruskal", &graph, &tree);
    Ok(())
}

pub fn run_dijkstra(graph_file: &Path, source: Option<&str>) -> Result<()> {
    let graph = load_graph(graph_file)?;
    if graph.vertex_count() == 0 {
        println!("--- Shortest paths (Dijkstra) ---");
        println!("The graph has no vertices.");
        return Ok(());
    }
    // default to the first vertex of the input
    let source = source.unwrap_or_else(|| graph.label(0));
    let paths = dijkstra::shortest_paths(&graph, source)?;

    println!("--- Shortest paths (Dijkstra) from '{}' ---", source);
    for vertex in 0..graph.vertex_count() {
        if paths.is_reachable(vertex) {
            println!("  {}: {:.2}", graph.label(vertex), paths.distance[vertex]);
        } else {
            println!("  {}: unreachable", graph.label(vertex));
        }
    }
    println!("--- Paths ---");
    for vertex in 0..graph.vertex_count() {
        if vertex == paths.source {
            continue;
        }
        match paths.path_to(vertex) {
            Some(path) => {
                let rendered: Vec<&str> = path.iter().map(|&step| graph.label(step)).collect();
                println!(
                    "  {} -> {}: {} (distance: {:.2})",
                    source,
                    graph.label(vertex),
                    rendered.join(" -> "),
                    paths.distance[vertex]
                );
            }
            None => println!("  {} -> {}: no path", source, graph.label(vertex)),
        }
    }
    Ok(())
}

pub fn run_huffman(text_file: &Path) -> Result<()> {
    let text = read_text_file(text_file)?;
    let coding = HuffmanCoding::from_text(&text)?;
    log::info!(
        "Loaded text from '{}': {} characters, {} distinct",
        text_file.display(),
        coding.frequencies().total_symbols(),
        coding.frequencies().distinct_symbols()
    );

    println!("--- Huffman code table ---");
    let mut rows: Vec<(char, usize)> = coding.frequencies().iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    for (symbol, frequency) in rows {
        let code = coding.code_table().code(symbol).unwrap_or("");
        println!("  {:?}: frequency {}, code {}", symbol, frequency, code);
    }

    println!("--- Compression ---");
    println!("  Original bits (8 per symbol): {}", coding.original_bit_count());
    println!("  Encoded bits: {}", coding.encoded_bit_count());
    if coding.original_bit_count() > 0 {
        let ratio = 100.0
            * (1.0 - coding.encoded_bit_count() as f64 / coding.original_bit_count() as f64);
        println!("  Saved: {:.2}%", ratio);
    }

    if let Some(tree) = coding.tree() {
        println!("--- Tree ---");
        print!("{}", tree);
    } else {
        println!("The input text is empty, nothing to encode.");
    }
    Ok(())
}

fn print_spanning_tree_report(algorithm: &str, graph: &Graph, tree: &MinimumSpanningTree) {
    println!("--- Minimum spanning tree ({}) ---", algorithm);
    for &edge_id in &tree.edges {
        let edge = graph.edge(edge_id);
        println!(
            "  {} -- {} : {:.2}",
            graph.label(edge.u),
            graph.label(edge.v),
            edge.weight
        );
    }
    println!("Total weight: {:.2}", tree.total_weight);
    if !tree.spans(graph) {
        log::warn!(
            "{} result does not span the graph ({} edges for {} vertices)",
            algorithm,
            tree.edges.len(),
            graph.vertex_count()
        );
        println!(
            "The graph is disconnected. The result is a spanning forest, not a spanning tree."
        );
    }
}
