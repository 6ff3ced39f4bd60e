//! `salon` CLI: slot availability, bookings, and reports over a JSON state file.
//!
//! ## Usage
//!
//! ```sh
//! # Which 60-minute "cut" slots can S1 offer on Christmas?
//! salon slots -s salon.json --staff S1 --date 2024-12-25 --service cut
//!
//! # Book one, saving the new booking back to the state file
//! salon book -s salon.json --staff S1 --date 2024-12-25 --time "10:30 AM" \
//!   --service cut --client-name "Jane Smith" --client-phone 8765432109 --write
//!
//! # Admin: list pending bookings, confirm one, revenue for December
//! salon bookings -s salon.json --status pending
//! salon set-status -s salon.json --id 3 --status confirmed --write
//! salon report -s salon.json --from 2024-12-01 --to 2024-12-31
//! salon dashboard -s salon.json --today 2024-12-20
//! salon offers -s salon.json --valid-on 2024-12-20
//!
//! # Clock conversion
//! salon time to-minutes "1:00 PM"
//! salon time to-display 780
//! ```
//!
//! Business hours come from `--config` (or `SALON_CONFIG`), a TOML file with a
//! `[business_hours]` table. Set `RUST_LOG=info` to see booking decisions.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salon_engine::clock::MINUTES_PER_DAY;
use salon_engine::{BookingStatus, BusinessHours, SlotConflict, TimeOfDay};
use salon_store::{BookingFilter, BookingRequest, Salon, SalonSnapshot, StoreError};

use crate::config::SalonConfig;

#[derive(Parser)]
#[command(name = "salon", version, about = "Salon booking and availability CLI")]
struct Cli {
    /// TOML config file with a [business_hours] table
    #[arg(long, global = true, env = "SALON_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a staff member's slots for a service on a date
    Slots {
        /// Salon state file (JSON)
        #[arg(short, long)]
        state: PathBuf,
        #[arg(long)]
        staff: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        service: String,
        /// Omit slots that are already taken
        #[arg(long)]
        available_only: bool,
    },
    /// Book an appointment
    Book {
        #[arg(short, long)]
        state: PathBuf,
        #[arg(long)]
        staff: String,
        #[arg(long)]
        date: NaiveDate,
        /// Start time, e.g. "10:30 AM"
        #[arg(long)]
        time: String,
        #[arg(long)]
        service: String,
        #[arg(long)]
        client_name: String,
        #[arg(long)]
        client_phone: String,
        #[arg(long)]
        client_email: Option<String>,
        /// Special requests for the stylist
        #[arg(long)]
        notes: Option<String>,
        /// Save the new booking back to the state file
        #[arg(long)]
        write: bool,
    },
    /// List bookings, oldest appointment first
    Bookings {
        #[arg(short, long)]
        state: PathBuf,
        #[arg(long)]
        status: Option<BookingStatus>,
        /// First date to include, YYYY-MM-DD
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date to include, YYYY-MM-DD
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Only bookings made with this phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Change a booking's status
    SetStatus {
        #[arg(short, long)]
        state: PathBuf,
        #[arg(long)]
        id: u64,
        #[arg(long)]
        status: BookingStatus,
        #[arg(long)]
        notes: Option<String>,
        /// Save the change back to the state file
        #[arg(long)]
        write: bool,
    },
    /// Revenue from confirmed and completed bookings in a date range
    Report {
        #[arg(short, long)]
        state: PathBuf,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Dashboard counts, month revenue, and the next week's confirmed bookings
    Dashboard {
        #[arg(short, long)]
        state: PathBuf,
        /// Date to report as of, YYYY-MM-DD; defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List promotional offers
    Offers {
        #[arg(short, long)]
        state: PathBuf,
        /// Only offers active and in their window on this date
        #[arg(long)]
        valid_on: Option<NaiveDate>,
    },
    /// Convert between "H:MM AM/PM" and minutes since midnight
    Time {
        #[command(subcommand)]
        command: TimeCommand,
    },
}

#[derive(Subcommand)]
enum TimeCommand {
    ToMinutes { display: String },
    ToDisplay { minutes: u32 },
}

/// One row of `salon slots` output.
#[derive(Serialize)]
struct SlotView {
    time: TimeOfDay,
    available: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = SalonConfig::load(cli.config.as_deref())?;
    let hours = config.business_hours;

    match cli.command {
        Commands::Slots {
            state,
            staff,
            date,
            service,
            available_only,
        } => {
            let salon = load_salon(&state, hours)?;
            let slots: Vec<SlotView> = salon
                .available_slots(&staff, date, &service)?
                .into_iter()
                .filter(|slot| slot.available || !available_only)
                .map(|slot| SlotView {
                    time: slot.time(),
                    available: slot.available,
                })
                .collect();
            print_json(&slots)?;
        }
        Commands::Book {
            state,
            staff,
            date,
            time,
            service,
            client_name,
            client_phone,
            client_email,
            notes,
            write,
        } => {
            let salon = load_salon(&state, hours)?;
            let request = BookingRequest {
                client_name,
                client_phone,
                client_email,
                service_id: service,
                staff_id: staff,
                appointment_date: date,
                appointment_time: time,
                special_requests: notes,
            };
            let booking = match salon.book(request) {
                Ok(booking) => booking,
                Err(StoreError::SlotConflict(conflict)) => bail!(describe_conflict(&conflict)),
                Err(other) => return Err(other).context("Failed to create booking"),
            };
            if write {
                save_salon(&state, &salon)?;
            }
            print_json(&booking)?;
        }
        Commands::Bookings {
            state,
            status,
            from,
            to,
            phone,
        } => {
            let salon = load_salon(&state, hours)?;
            let filter = BookingFilter {
                status,
                date_from: from,
                date_to: to,
            };
            let bookings: Vec<_> = match phone {
                Some(phone) => salon
                    .bookings()
                    .for_client_phone(&phone)
                    .into_iter()
                    .filter(|b| filter.matches(b))
                    .collect(),
                None => salon.bookings().list(&filter),
            };
            print_json(&bookings)?;
        }
        Commands::SetStatus {
            state,
            id,
            status,
            notes,
            write,
        } => {
            let salon = load_salon(&state, hours)?;
            let booking = match salon.bookings().update_status(id, status, notes) {
                Ok(booking) => booking,
                Err(StoreError::SlotConflict(conflict)) => bail!(describe_conflict(&conflict)),
                Err(other) => return Err(other).context("Failed to update booking status"),
            };
            if write {
                save_salon(&state, &salon)?;
            }
            print_json(&booking)?;
        }
        Commands::Report { state, from, to } => {
            if from > to {
                bail!("--from ({}) must not be after --to ({})", from, to);
            }
            let salon = load_salon(&state, hours)?;
            print_json(&salon.revenue_report(from, to))?;
        }
        Commands::Dashboard { state, today } => {
            let salon = load_salon(&state, hours)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            print_json(&salon.dashboard(today))?;
        }
        Commands::Offers { state, valid_on } => {
            let salon = load_salon(&state, hours)?;
            let offers = salon.offers();
            let listed: Vec<_> = match valid_on {
                Some(date) => offers.valid_on(date).collect(),
                None => offers.list().iter().collect(),
            };
            print_json(&listed)?;
        }
        Commands::Time { command } => match command {
            TimeCommand::ToMinutes { display } => {
                let time = TimeOfDay::parse(&display)?;
                println!("{}", time.minutes());
            }
            TimeCommand::ToDisplay { minutes } => {
                let time = TimeOfDay::from_minutes(minutes)?;
                println!("{}", time);
            }
        },
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable. Quiet unless `RUST_LOG` says
/// otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_salon(path: &Path, hours: BusinessHours) -> Result<Salon> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    let snapshot = SalonSnapshot::from_json(&json)
        .with_context(|| format!("Invalid state file: {}", path.display()))?;
    Salon::from_snapshot(snapshot, hours)
        .with_context(|| format!("Inconsistent state file: {}", path.display()))
}

fn save_salon(path: &Path, salon: &Salon) -> Result<()> {
    let json = salon.snapshot().to_json_pretty()?;
    fs::write(path, json).with_context(|| format!("Failed to write state file: {}", path.display()))?;
    info!(path = %path.display(), "state saved");
    Ok(())
}

fn describe_conflict(conflict: &SlotConflict) -> String {
    let mut message =
        String::from("This time slot is already booked. Please choose a different time.\nConflicting bookings:");
    for booking in conflict.bookings() {
        let end = booking.interval().end_minutes();
        message.push_str(&format!(
            "\n  #{} {} {}-{} ({})",
            booking.id,
            booking.date,
            booking.start,
            render_end(end),
            booking.status
        ));
    }
    message
}

/// Ends may fall on or past midnight, which `TimeOfDay` cannot hold.
fn render_end(minutes: u32) -> String {
    TimeOfDay::from_minutes(minutes)
        .map(|t| t.to_string())
        .unwrap_or_else(|_| format!("+{} min past midnight", minutes - MINUTES_PER_DAY))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
