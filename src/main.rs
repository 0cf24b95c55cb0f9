use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use salonslots_core::{
    models::{slot::Slot, staff::StaffId},
    reports::{BookingRecord, BookingReport, summarize_bookings},
};
use salonslots_directory::{
    config::{DirectoryConfig, log_level_from_env},
    http::HttpDirectory,
    service::{AvailabilityService, SlotQuery},
    session::Session,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

/// Available booking slots and booking reports for the salon dashboards
#[derive(Debug, Parser)]
#[command(name = "salon-slots", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the free 30-minute slots of one staff member on one day
    Slots {
        #[arg(long)]
        salon: String,
        #[arg(long)]
        staff: String,
        /// Day to check, as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Print a JSON array instead of one line per slot
        #[arg(long)]
        json: bool,
    },
    /// Summarize a JSON array of bookings by status and revenue
    Report {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG directives override LOG_LEVEL
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level_from_env()).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Slots {
            salon,
            staff,
            date,
            json,
        } => {
            let config = DirectoryConfig::from_env()?;
            let session = Session::from_env();
            let directory = HttpDirectory::new(config)?;
            let service = AvailabilityService::new(directory.clone(), directory);

            let query = SlotQuery {
                salon_id: salon,
                staff_id: StaffId::from(staff),
                date,
            };
            let slots = service.available_slots(&session, &query).await?;
            print_slots(&slots, json)?;
        }
        Command::Report { file, json } => {
            let raw = fs::read_to_string(&file)
                .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
            let bookings: Vec<BookingRecord> =
                serde_json::from_str(&raw).wrap_err("Bookings file is not a valid booking list")?;
            info!(bookings = bookings.len(), "Summarizing bookings");
            print_report(&summarize_bookings(&bookings)?, json)?;
        }
    }

    Ok(())
}

fn print_slots(slots: &[Slot], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
    } else if slots.is_empty() {
        println!("No free slots");
    } else {
        for slot in slots {
            println!("{slot}");
        }
    }
    Ok(())
}

fn print_report(report: &BookingReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Bookings: {}", report.total_bookings);
    for (status, count) in &report.status_counts {
        println!("  {status:?}: {count}");
    }
    println!("Revenue: {}", report.total_revenue);
    for (day, revenue) in &report.daily_revenue {
        println!("  {day}: {revenue}");
    }
    Ok(())
}
