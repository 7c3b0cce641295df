use std::fs;

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::{AppointmentFilters, AppointmentService, AvailabilityService};
use backup_cell::{BackupService, ExportFilters, ExportService};
use doctor_cell::{migrations, DoctorService};
use shared_config::AppConfig;
use shared_models::{validation, AppointmentStatus, CreateAppointmentRequest, DoctorType};
use shared_storage::Store;

const USAGE: &str = "usage: clinic-cli <command>

commands:
  stats                              appointment counts by status
  list [status]                      list appointments, optionally by status
  book <name> <phone> <service> <date> <time>
                                     enter a walk-in appointment
  check <phone> <date> [time]        look up an existing booking
  doctors                            list doctor profiles
  slots <date> [doctor-type]         available time slots for a date
  export-backup <file>               write a full JSON backup
  restore <file>                     restore from a full JSON backup
  export [file]                      date-wise appointment workbook as JSON";

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let store = Store::open(&config).context("open data store")?;

    // Startup repairs run before any command touches the data.
    migrations::backfill_doctor_images(&store)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("");
    match command {
        "stats" => stats(&store),
        "list" => list(&store, args.get(1).map(String::as_str)),
        "book" => book(&store, &args[1..]),
        "check" => check(&store, &args[1..]),
        "doctors" => doctors(&store),
        "slots" => slots(&store, &args[1..]),
        "export-backup" => export_backup(&store, args.get(1).map(String::as_str)),
        "restore" => restore(&store, args.get(1).map(String::as_str)),
        "export" => export_workbook(&store, args.get(1).map(String::as_str)),
        _ => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

fn stats(store: &Store) -> Result<()> {
    let stats = AppointmentService::new(store.clone()).stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn list(store: &Store, status: Option<&str>) -> Result<()> {
    let status = match status {
        Some(raw) => Some(
            AppointmentStatus::parse(raw)
                .with_context(|| format!("unknown status '{raw}'"))?,
        ),
        None => None,
    };
    let appointments = AppointmentService::new(store.clone()).list_appointments(
        &AppointmentFilters {
            status,
            date: None,
        },
    );
    println!("{}", serde_json::to_string_pretty(&appointments)?);
    Ok(())
}

fn book(store: &Store, args: &[String]) -> Result<()> {
    let [name, phone, service, date, time] = args else {
        bail!("book needs <name> <phone> <service> <date> <time>");
    };
    let request = CreateAppointmentRequest {
        name: name.clone(),
        phone: phone.clone(),
        service: service.clone(),
        date: date.clone(),
        time: time.clone(),
        ..Default::default()
    };
    if let Err(err) = validation::validate_admin_create(&request) {
        bail!("{}: {}", err.field, err.message);
    }
    let appointment = AppointmentService::new(store.clone()).create_appointment(request)?;
    println!("{}", serde_json::to_string_pretty(&appointment)?);
    Ok(())
}

fn check(store: &Store, args: &[String]) -> Result<()> {
    let (Some(phone), Some(date)) = (args.first(), args.get(1)) else {
        bail!("check needs <phone> <date> [time]");
    };
    let result = AppointmentService::new(store.clone()).check_appointment(
        phone,
        date,
        args.get(2).map(String::as_str),
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn doctors(store: &Store) -> Result<()> {
    let doctors = DoctorService::new(store.clone()).list_doctors()?;
    println!("{}", serde_json::to_string_pretty(&doctors)?);
    Ok(())
}

fn slots(store: &Store, args: &[String]) -> Result<()> {
    let Some(date) = args.first() else {
        bail!("slots needs a date (YYYY-MM-DD)");
    };
    let doctor_type = match args.get(1) {
        Some(raw) => Some(
            DoctorType::parse(raw).with_context(|| format!("unknown doctor type '{raw}'"))?,
        ),
        None => None,
    };
    let slots =
        AvailabilityService::new(store.clone()).available_slots(Some(date), doctor_type, None);
    if slots.is_empty() {
        println!("no slots available");
        return Ok(());
    }
    for slot in slots {
        println!("{}  {}", slot.value, slot.label);
    }
    Ok(())
}

fn export_backup(store: &Store, path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        bail!("export-backup needs an output file");
    };
    let backup = BackupService::new(store.clone()).export_backup()?;
    fs::write(path, serde_json::to_string_pretty(&backup)?)?;
    info!("backup written to {}", path);
    Ok(())
}

fn restore(store: &Store, path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        bail!("restore needs a backup file");
    };
    let text = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let report = BackupService::new(store.clone()).import_backup(&text);
    if !report.success {
        bail!(
            "{} ({})",
            report.message,
            report.error.unwrap_or_else(|| "unknown".into())
        );
    }
    println!("{}", report.message);
    Ok(())
}

fn export_workbook(store: &Store, path: Option<&str>) -> Result<()> {
    let workbook =
        ExportService::new(store.clone()).export_appointments(&ExportFilters::default());
    let json = serde_json::to_string_pretty(&workbook)?;
    match path {
        Some(path) => {
            fs::write(path, json)?;
            info!("workbook written to {}", path);
        }
        None => println!("{json}"),
    }
    Ok(())
}
