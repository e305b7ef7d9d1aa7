use algolab::{run, CLIParser};
use std::path::PathBuf;

const GRAPH_FIXTURE_PATH: &str = "data/graph.csv";
const TEXT_FIXTURE_PATH: &str = "data/huffman.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_graph_fixture_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(GRAPH_FIXTURE_PATH);
    root_path
}

fn get_text_fixture_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(TEXT_FIXTURE_PATH);
    root_path
}

#[test]
fn test_run_all_algorithms_on_fixtures() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "all",
        "--graph_file",
        get_graph_fixture_path().to_str().unwrap(),
        "--text_file",
        get_text_fixture_path().to_str().unwrap(),
    ]);
    run(&arguments).expect("Running all algorithms on the bundled fixtures failed");
}

#[test]
fn test_run_dijkstra_with_explicit_source() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "dijkstra",
        "--graph_file",
        get_graph_fixture_path().to_str().unwrap(),
        "--source",
        "F",
    ]);
    run(&arguments).expect("Dijkstra run with explicit source failed");
}

#[test]
fn test_run_fails_on_missing_input_file() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "kruskal",
        "--graph_file",
        "does/not/exist.csv",
    ]);
    assert!(run(&arguments).is_err(), "Missing input file not reported");
}
