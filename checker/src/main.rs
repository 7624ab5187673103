use clap::Parser;
use json_check::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            for line in summary.lines(cli.quiet) {
                println!("{}", line);
            }
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            eprintln!("json-check: {}", e);
            ExitCode::from(2)
        }
    }
}
