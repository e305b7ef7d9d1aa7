use std::env::args_os;

use algolab::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => log::info!("Run completed"),
        Err(e) => eprintln!("Run failed because of: {}", e),
    }
}
