//! Command-line entry point: write the test deck to the current directory.

use std::process::ExitCode;

fn main() -> ExitCode {
    match pptx_fixture::fixture::build_and_save(pptx_fixture::fixture::OUTPUT_FILENAME) {
        Ok(()) => {
            println!(
                "Created {} successfully!",
                pptx_fixture::fixture::OUTPUT_FILENAME
            );
            println!("You can now test importing this file.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}
