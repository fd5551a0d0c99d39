use std::process::ExitCode;

mod command;
mod exit;
mod output;
mod report;
mod source;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match command::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit::exit_code(&err)
        }
    }
}
