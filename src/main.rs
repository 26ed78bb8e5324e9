use clap::Parser;
use simfeed::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
