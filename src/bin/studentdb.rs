//! studentdb Binary
//!
//! Runs the interactive student records menu on stdin/stdout.

use clap::Parser;
use studentdb::console::Terminal;
use studentdb::{shell, Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Interactive student records backed by a flat binary file")]
#[command(version)]
struct Args {
    /// Store file
    #[arg(short, long, default_value = studentdb::config::DEFAULT_STORE_FILE)]
    file: String,

    /// Skip fsync after each write
    #[arg(long)]
    no_sync: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("studentdb v{}", studentdb::VERSION);
    tracing::info!("Store file: {}", args.file);

    let config = Config::builder()
        .store_path(&args.file)
        .sync_writes(!args.no_sync)
        .build();

    let store = match RecordStore::open(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut console = Terminal::stdio();
    if let Err(e) = shell::run(&store, &mut console) {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
