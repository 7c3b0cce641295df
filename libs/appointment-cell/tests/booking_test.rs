use assert_matches::assert_matches;
use tempfile::TempDir;

use appointment_cell::{AppointmentError, AppointmentFilters, AppointmentService};
use shared_config::AppConfig;
use shared_models::{
    validation, AppointmentPatch, AppointmentStatus, CreateAppointmentRequest, Period,
};
use shared_storage::Store;

fn service(dir: &TempDir) -> AppointmentService {
    AppointmentService::new(Store::open(&AppConfig::with_data_dir(dir.path())).unwrap())
}

fn booking(phone: &str, date: &str, time: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        name: "Asha Sharma".to_string(),
        phone: phone.to_string(),
        service: "डायबिटीज़, थायराइड".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        ..Default::default()
    }
}

#[test]
fn walk_in_entry_is_validated_then_created() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    // Same path the CLI `book` subcommand takes: schema check on the
    // request, then hand it to the service by value.
    let request = booking("9123456789", "2027-03-02", "10:30");
    validation::validate_admin_create(&request).unwrap();
    let appointment = service.create_appointment(request).unwrap();
    assert_eq!(appointment.phone, "9123456789");
    assert_eq!(appointment.status, AppointmentStatus::Pending);
}

#[test]
fn duplicate_tuple_is_rejected_until_original_is_cancelled() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let first = service
        .create_appointment(booking("9999999999", "2027-01-10", "09:00"))
        .unwrap();
    assert_eq!(first.status, AppointmentStatus::Pending);

    let err = service
        .create_appointment(booking("9999999999", "2027-01-10", "09:00"))
        .unwrap_err();
    assert_matches!(
        err,
        AppointmentError::DuplicateBooking { existing_appointment_id } if existing_appointment_id == first.id
    );

    // Cancelling the original frees the tuple.
    service
        .update_appointment(
            first.id,
            AppointmentPatch {
                status: Some(AppointmentStatus::Cancelled),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
    let rebooked = service
        .create_appointment(booking("9999999999", "2027-01-10", "09:00"))
        .unwrap();
    assert_ne!(rebooked.id, first.id);
}

#[test]
fn same_phone_different_time_is_allowed() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    service
        .create_appointment(booking("9999999999", "2027-01-10", "09:00"))
        .unwrap();
    service
        .create_appointment(booking("9999999999", "2027-01-10", "09:15"))
        .unwrap();
    service
        .create_appointment(booking("9999999999", "2027-01-11", "09:00"))
        .unwrap();
    assert_eq!(service.stats().total, 3);
}

#[test]
fn ids_are_monotonic_and_period_is_derived_from_time() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let morning = service
        .create_appointment(booking("9000000001", "2027-01-10", "09:00"))
        .unwrap();
    let afternoon = service
        .create_appointment(booking("9000000002", "2027-01-10", "14:30"))
        .unwrap();
    assert_eq!(morning.id, 1);
    assert_eq!(afternoon.id, 2);
    assert_eq!(morning.period, Period::Am);
    assert_eq!(afternoon.period, Period::Pm);
    assert_eq!(afternoon.date_time, "2027-01-10 14:30 PM");
}

#[test]
fn list_filters_and_sorts_newest_first() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    service
        .create_appointment(booking("9000000001", "2027-01-10", "09:00"))
        .unwrap();
    service
        .create_appointment(booking("9000000002", "2027-01-11", "09:00"))
        .unwrap();
    let third = service
        .create_appointment(booking("9000000003", "2027-01-10", "10:00"))
        .unwrap();
    service
        .update_appointment(
            third.id,
            AppointmentPatch {
                status: Some(AppointmentStatus::Confirmed),
                ..Default::default()
            },
        )
        .unwrap();

    let all = service.list_appointments(&AppointmentFilters::default());
    assert_eq!(all.len(), 3);
    // Newest createdAt first.
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let on_tenth = service.list_appointments(&AppointmentFilters {
        date: Some("2027-01-10".to_string()),
        ..Default::default()
    });
    assert_eq!(on_tenth.len(), 2);

    let confirmed = service.list_appointments(&AppointmentFilters {
        status: Some(AppointmentStatus::Confirmed),
        ..Default::default()
    });
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, third.id);
}

#[test]
fn update_merges_and_refreshes_updated_at() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let created = service
        .create_appointment(booking("9000000001", "2027-01-10", "09:00"))
        .unwrap();
    let updated = service
        .update_appointment(
            created.id,
            AppointmentPatch {
                notes: Some("bring previous reports".to_string()),
                time: Some("10:00".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.notes, "bring previous reports");
    assert_eq!(updated.time, "10:00");
    assert_eq!(updated.name, "Asha Sharma");
    assert!(updated.updated_at >= created.updated_at);

    assert!(service
        .update_appointment(999, AppointmentPatch::default())
        .unwrap()
        .is_none());
}

#[test]
fn delete_returns_false_for_missing_id() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let created = service
        .create_appointment(booking("9000000001", "2027-01-10", "09:00"))
        .unwrap();
    assert!(!service.delete_appointment(999).unwrap());
    assert!(service.delete_appointment(created.id).unwrap());
    assert!(service.get_appointment(created.id).is_none());
}

#[test]
fn check_appointment_matches_with_and_without_time() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let created = service
        .create_appointment(booking("9999999999", "2027-01-10", "09:00"))
        .unwrap();

    let by_date = service.check_appointment("9999999999", "2027-01-10", None);
    assert!(by_date.has_existing);
    assert_eq!(by_date.appointment.unwrap().id, created.id);

    assert!(!service
        .check_appointment("9999999999", "2027-01-10", Some("10:00"))
        .has_existing);
    assert!(!service
        .check_appointment("8888888888", "2027-01-10", None)
        .has_existing);

    // Cancelled bookings are invisible to the check.
    service
        .update_appointment(
            created.id,
            AppointmentPatch {
                status: Some(AppointmentStatus::Cancelled),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(!service
        .check_appointment("9999999999", "2027-01-10", None)
        .has_existing);
}

#[test]
fn stats_count_every_status_over_full_collection() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let statuses = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ];
    for (index, status) in statuses.iter().enumerate() {
        let created = service
            .create_appointment(booking(
                &format!("90000000{:02}", index),
                "2027-01-10",
                &format!("{:02}:00", 9 + index),
            ))
            .unwrap();
        service
            .update_appointment(
                created.id,
                AppointmentPatch {
                    status: Some(*status),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    let stats = service.stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.confirmed, 2);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.completed, 1);
}
