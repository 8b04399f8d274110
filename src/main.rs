use std::process::ExitCode;

fn main() -> ExitCode {
    uitk_string_gen::cli::run()
}
