use tempfile::TempDir;

use appointment_cell::AppointmentService;
use backup_cell::{ExportFilters, ExportService, EXPORT_HEADER};
use shared_config::AppConfig;
use shared_models::{AppointmentPatch, AppointmentStatus, CreateAppointmentRequest};
use shared_storage::Store;

fn open_store(dir: &TempDir) -> Store {
    Store::open(&AppConfig::with_data_dir(dir.path())).unwrap()
}

fn book(store: &Store, phone: &str, date: &str, time: &str) -> i64 {
    AppointmentService::new(store.clone())
        .create_appointment(CreateAppointmentRequest {
            name: "Patient".to_string(),
            phone: phone.to_string(),
            service: "PRP/GFC".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            ..Default::default()
        })
        .unwrap()
        .id
}

#[test]
fn one_sheet_per_date_in_ascending_order() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    book(&store, "9000000001", "2027-03-02", "09:00");
    book(&store, "9000000002", "2027-03-01", "09:00");
    book(&store, "9000000003", "2027-03-01", "10:00");

    let workbook = ExportService::new(store).export_appointments(&ExportFilters::default());
    assert_eq!(workbook.sheets.len(), 2);
    assert_eq!(workbook.sheets[0].name, "2027-03-01");
    assert_eq!(workbook.sheets[1].name, "2027-03-02");

    let first = &workbook.sheets[0];
    assert_eq!(first.rows[0], EXPORT_HEADER.to_vec());
    assert_eq!(first.rows.len(), 3); // header + two bookings
    for row in &first.rows[1..] {
        assert_eq!(row.len(), EXPORT_HEADER.len());
        assert_eq!(row[5], "2027-03-01");
        assert_eq!(row[8], "pending");
    }
}

#[test]
fn filters_narrow_by_status_and_date_range() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let confirmed = book(&store, "9000000001", "2027-03-01", "09:00");
    book(&store, "9000000002", "2027-03-05", "09:00");
    book(&store, "9000000003", "2027-04-01", "09:00");
    AppointmentService::new(store.clone())
        .update_appointment(
            confirmed,
            AppointmentPatch {
                status: Some(AppointmentStatus::Confirmed),
                ..Default::default()
            },
        )
        .unwrap();

    let export = ExportService::new(store);

    let march = export.export_appointments(&ExportFilters {
        date_from: Some("2027-03-01".to_string()),
        date_to: Some("2027-03-31".to_string()),
        ..Default::default()
    });
    assert_eq!(march.sheets.len(), 2);

    let confirmed_only = export.export_appointments(&ExportFilters {
        status: Some(AppointmentStatus::Confirmed),
        ..Default::default()
    });
    assert_eq!(confirmed_only.sheets.len(), 1);
    assert_eq!(confirmed_only.sheets[0].rows.len(), 2);

    let one_day = export.export_appointments(&ExportFilters::day_range("2027-03-05"));
    assert_eq!(one_day.sheets.len(), 1);
    assert_eq!(one_day.sheets[0].name, "2027-03-05");

    let april = export.export_appointments(&ExportFilters::month_range(2027, 4).unwrap());
    assert_eq!(april.sheets.len(), 1);
    assert_eq!(april.sheets[0].name, "2027-04-01");
}

#[test]
fn empty_result_yields_a_single_placeholder_sheet() {
    let dir = TempDir::new().unwrap();
    let workbook =
        ExportService::new(open_store(&dir)).export_appointments(&ExportFilters::default());
    assert_eq!(workbook.sheets.len(), 1);
    assert_eq!(workbook.sheets[0].name, "Appointments");
    assert_eq!(workbook.sheets[0].rows.len(), 2);
    assert_eq!(
        workbook.sheets[0].rows[1][1],
        "No appointments found for the selected period"
    );
}
