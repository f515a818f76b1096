use clap::Parser;
use pattern_explorer_core::{execute_explorer_flow, style, CliArgs};

fn main() {
    let cli_args = CliArgs::parse();
    if let Err(e) = execute_explorer_flow(cli_args) {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("pattern-explorer failed:").red().bold(),
            style(format!("{e:#}")).red()
        );
        std::process::exit(1);
    }
}
