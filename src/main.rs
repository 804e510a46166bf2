use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rpager::config::{Config, PagerConfig};
use rpager::pager::Pager;

#[derive(Parser)]
#[command(name = "rpager", version, about = "Pagination metadata calculator")]
struct Cli {
    /// Page to compute metadata for, starting at 1. Omitted means the first page.
    #[arg(short, long)]
    page: Option<i64>,

    /// Total number of results being paginated
    #[arg(short = 'n', long)]
    count: i64,

    /// Results shown per page
    #[arg(short = 's', long)]
    page_size: Option<i64>,

    /// Width of the page button window
    #[arg(short = 'b', long)]
    buttons: Option<i64>,

    /// Path to a TOML config file with pagination defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pull an out-of-range page back to the nearest valid one instead of failing
    #[arg(long)]
    clamp: bool,

    /// Include a button entry for every page in the output
    #[arg(long)]
    all_pages: bool,

    /// Log level (e.g. error, info, debug)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    // Setup tracing/logging. Diagnostics go to stderr; stdout carries only
    // the JSON document.
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let defaults = match cli.config {
        Some(ref path) => {
            let config = Config::load(path).unwrap_or_else(|e| {
                tracing::error!("Error loading config: {e}");
                std::process::exit(1);
            });
            tracing::debug!("Loaded defaults from {}", path.display());
            config.pager
        }
        None => PagerConfig::default(),
    };

    let page_size = cli.page_size.unwrap_or(defaults.page_size);
    let button_count = cli.buttons.unwrap_or(defaults.button_count);

    let built = if cli.clamp {
        Pager::clamped(cli.page, cli.count, page_size, button_count)
    } else {
        Pager::with_layout(cli.page, cli.count, page_size, button_count)
    };
    let pager = built.unwrap_or_else(|e| {
        tracing::error!("{e}");
        std::process::exit(1);
    });

    tracing::debug!(
        "page {} of {}: skip {}, take {}",
        pager.current_page,
        pager.page_count,
        pager.skip,
        pager.take
    );

    let mut doc = serde_json::to_value(&pager).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize pager: {e}");
        std::process::exit(1);
    });
    doc["previous_jumps"] = serde_json::json!({
        "10": pager.previous_ten(),
        "20": pager.previous_twenty(),
        "30": pager.previous_thirty(),
        "40": pager.previous_forty(),
        "50": pager.previous_fifty(),
        "100": pager.previous_hundred(),
    });
    doc["next_jumps"] = serde_json::json!({
        "10": pager.next_ten(),
        "20": pager.next_twenty(),
        "30": pager.next_thirty(),
        "40": pager.next_forty(),
        "50": pager.next_fifty(),
        "100": pager.next_hundred(),
    });
    if cli.all_pages {
        doc["all_pages"] = serde_json::json!(pager.all_pages());
    }

    match serde_json::to_string_pretty(&doc) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            tracing::error!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}
