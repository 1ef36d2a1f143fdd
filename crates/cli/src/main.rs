use std::process::ExitCode;

fn main() -> ExitCode {
    storefront_cli::run()
}
