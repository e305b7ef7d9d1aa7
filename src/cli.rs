use crate::{Algorithm, Arguments};
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;

impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Prim,
            Self::Kruskal,
            Self::Dijkstra,
            Self::Huffman,
            Self::All,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Prim => Some(PossibleValue::new("prim")),
            Self::Kruskal => Some(PossibleValue::new("kruskal")),
            Self::Dijkstra => Some(PossibleValue::new("dijkstra")),
            Self::Huffman => Some(PossibleValue::new("huffman")),
            Self::All => Some(PossibleValue::new("all")),
        }
    }
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_algorithm_argument(command);
        let command = Self::register_graph_file_argument(command);
        let command = Self::register_text_file_argument(command);
        let command = Self::register_source_argument(command);
        Self::register_start_argument(command)
    }

    fn register_algorithm_argument(command: Command) -> Command {
        command.arg(Self::create_algorithm_argument())
    }

    fn register_graph_file_argument(command: Command) -> Command {
        command.arg(Self::create_graph_file_argument())
    }

    fn register_text_file_argument(command: Command) -> Command {
        command.arg(Self::create_text_file_argument())
    }

    fn register_source_argument(command: Command) -> Command {
        command.arg(Self::create_source_argument())
    }

    fn register_start_argument(command: Command) -> Command {
        command.arg(Self::create_start_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_algorithm_argument() -> Arg {
        Arg::new("algorithm")
            .help("Algorithm to run")
            .value_parser(value_parser!(Algorithm))
            .required(true)
    }

    fn create_graph_file_argument() -> Arg {
        arg!(graph_file: -g --graph_file <FILE> "Path to the graph CSV file")
            .default_value("data/graph.csv")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_text_file_argument() -> Arg {
        arg!(text_file: -x --text_file <FILE> "Path to the text file for Huffman coding")
            .default_value("data/huffman.txt")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_source_argument() -> Arg {
        arg!(source: -s --source <VERTEX> "Source vertex for Dijkstra")
            .required(false)
            .value_parser(value_parser!(String))
    }

    fn create_start_argument() -> Arg {
        arg!(start: -t --start <VERTEX> "Start vertex for Prim")
            .required(false)
            .value_parser(value_parser!(String))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            algorithm: Self::extract_algorithm_argument(matches),
            graph_file: Self::extract_graph_file_argument(matches),
            text_file: Self::extract_text_file_argument(matches),
            source: Self::extract_source_argument(matches),
            start: Self::extract_start_argument(matches),
        }
    }

    fn extract_algorithm_argument(matches: &ArgMatches) -> Algorithm {
        matches
            .get_one::<Algorithm>("algorithm")
            .expect("Required argument algorithm not provided")
            .to_owned()
    }

    fn extract_graph_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("graph_file")
            .expect("Graph file must be provided, but was unset")
            .clone()
    }

    fn extract_text_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("text_file")
            .expect("Text file must be provided, but was unset")
            .clone()
    }

    fn extract_source_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("source").cloned()
    }

    fn extract_start_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("start").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
