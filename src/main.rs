use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let mut args = std::env::args().skip(1);
    let mut path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                path = args.next().map(PathBuf::from);
                if path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Secret Santa - draw gift-exchange pairings");
                println!();
                println!("Usage: santa [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Session file (default: .data/santa.json)");
                println!("  -h, --help             Show this help");
                println!();
                println!("Logging goes to stderr; control it with RUST_LOG (default: warn).");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let path = path.unwrap_or_else(|| PathBuf::from(".data").join("santa.json"));
    santa::cli::run(&path);
}
