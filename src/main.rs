use std::process::ExitCode;

fn main() -> ExitCode {
    match gen_ranges::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
