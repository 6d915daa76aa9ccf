use clap::Parser;
use kmp_cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.run() {
        Ok(status) => status.exit_code(),
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
