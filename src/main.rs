use clap::Parser;
use roster::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

#[derive(Parser)]
#[command(name = "roster", about = "Browse the Futurama character roster", version)]
struct Args {
    /// API base URL (the characters endpoint is appended)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Where to write the log file
    #[arg(long, default_value = "roster.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            log::warn!("Config load failed: {}", e);
            config::RosterConfig::default()
        }
    };

    let cli = CliOverrides {
        base_url: args.base_url,
        timeout_secs: args.timeout_secs,
    };
    let resolved = config::resolve(&file_config, &cli);

    if !Path::new(&resolved.placeholder_path).exists() {
        log::warn!(
            "Placeholder avatar not found at {}; cards will still show its path",
            resolved.placeholder_path
        );
    }

    log::info!(
        "Roster starting up: base_url={}, timeout={:?}",
        resolved.base_url,
        resolved.timeout
    );

    roster::tui::run(resolved)
}
