//! site-report — who was at each site, and for how long.
//!
//! Loads a site directory and the fleet's trip logs (CSV or JSON response
//! bodies), runs visit detection for every site over the requested window,
//! and prints a per-site summary.
//!
//! ```text
//! site-report --sites sites.csv --trips trips.json \
//!     --end-ms 1540341729936 --duration-ms 3600000 --expanded
//! ```
//!
//! Set `RUST_LOG=debug` for per-site detail; skipped sites are logged at
//! `warn`.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use tos_core::TimeWindow;
use tos_fleet::{Fleet, load_sites, load_trips};
use tos_output::{CsvWriter, ReportWriter, TextWriter};
use tos_visit::{LogObserver, SiteReportAggregator};

/// Time-on-site report for a fleet over one time window.
#[derive(Parser, Debug)]
#[command(name = "site-report", version, about)]
struct Args {
    /// Site directory (.csv or .json)
    #[arg(long)]
    sites: PathBuf,

    /// Vehicle trip logs (.csv or .json)
    #[arg(long)]
    trips: PathBuf,

    /// Window end, epoch milliseconds
    #[arg(long)]
    end_ms: i64,

    /// Window length in milliseconds
    #[arg(long, default_value_t = 3_600_000)]
    duration_ms: i64,

    /// JSON run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bounding-box multiplier (overrides the config file)
    #[arg(long)]
    multiplier: Option<f32>,

    /// Worker threads (overrides the config file)
    #[arg(long)]
    threads: Option<usize>,

    /// List every visit under its site
    #[arg(short, long)]
    expanded: bool,

    /// Also write site_summaries.csv and visit_lines.csv to this directory
    #[arg(long)]
    csv_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let program_start = Instant::now();

    // 1. Validate the window before touching any data.
    let window = TimeWindow::ending_at(args.end_ms, args.duration_ms)?;

    // 2. Configuration.
    let config = config::resolve(args.config.as_deref(), args.multiplier, args.threads)?;
    log::info!("window {window}, bound multiplier {}", config.bound_multiplier);

    // 3. Load input.
    let t0 = Instant::now();
    let fleet = Fleet::new(load_sites(&args.sites)?, load_trips(&args.trips)?);
    log::info!(
        "loaded {} sites, {} vehicles and {} trips in {:.3} s",
        fleet.sites.len(),
        fleet.vehicles.len(),
        fleet.trip_count(),
        t0.elapsed().as_secs_f64()
    );

    // 4. Run.
    let aggregator = SiteReportAggregator::new(config)?;
    let t1 = Instant::now();
    let reports = aggregator.run(&fleet.sites, &fleet.vehicles, window, &mut LogObserver::default());
    log::info!("visit detection finished in {:.3} s", t1.elapsed().as_secs_f64());

    // 5. Output.
    let mut text = TextWriter::new(std::io::stdout().lock(), args.expanded);
    text.write_reports(window, &reports)?;
    text.finish()?;

    if let Some(dir) = args.csv_out {
        std::fs::create_dir_all(&dir)?;
        let mut csv = CsvWriter::new(&dir)?;
        csv.write_reports(window, &reports)?;
        csv.finish()?;
        log::info!("wrote CSV reports to {}", dir.display());
    }

    log::info!("total runtime {:.3} s", program_start.elapsed().as_secs_f64());
    Ok(())
}
