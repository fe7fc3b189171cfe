use std::env;

/// Application configuration for plan comparison runs
#[derive(Clone)]
pub struct Config {
    pub file_path: String,
    pub generate: Option<usize>,
    pub verbose: bool,
}

/// Parse command line arguments to create application configuration
///
/// Args: [file_path] [gen N] [verbose_flag]
/// - file_path: JSONL file with comparison scenarios (default: scenarios.jsonl)
/// - gen N: write N fake scenarios to file_path and exit
/// - verbose: enable detailed logging (default: false)
pub fn config() -> Config {
    let args: Vec<String> = env::args().skip(1).collect();

    let file_path = match args.first() {
        Some(arg) if arg != "gen" && arg != "verbose" && arg != "v" => arg.clone(),
        _ => "scenarios.jsonl".to_string(),
    };

    let generate = args
        .iter()
        .position(|arg| arg == "gen")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<usize>().ok());

    let verbose = args.iter().any(|arg| arg == "verbose" || arg == "v");

    Config {
        file_path,
        generate,
        verbose,
    }
}
