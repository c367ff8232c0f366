mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli_res = cli::cli();

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match cli_res {
        cli::CliRes::NoCli => ok_exit,
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::Err => err_exit,
    }
}
