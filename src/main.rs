use std::process::ExitCode;

fn main() -> ExitCode {
    match tripwire::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
