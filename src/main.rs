fn main() {
    // Delegate to CLI runner; errors are printed nicely inside.
    match histcmp::cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
