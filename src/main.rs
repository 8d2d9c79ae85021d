use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use scrap_editions::process::{exit_code, process_editions};
use scrap_editions::{error_time, info_time, Args, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let start_time = Local::now();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // `--help` and `--version` also land here, on stdout.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(io) = e.print() {
                error_time!("Couldn't print usage: {io}");
            }
            return code;
        }
    };
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            error_time!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = process_editions(&config).await;
    match &result {
        Ok(_) => info_time!(start_time, "Full program time:"),
        Err(e) => error_time!("{e}"),
    }
    ExitCode::from(exit_code(&result))
}
