// Service-level coverage for booking, cancellation and calendar queries.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use uuid::Uuid;

use appointment_cell::models::{AppointmentError, BookAppointmentRequest};
use appointment_cell::services::{BookingService, CalendarService};
use shared_models::{AppointmentStatus, Professional};
use shared_store::MarketplaceStore;

fn sample_store() -> Arc<MarketplaceStore> {
    Arc::new(MarketplaceStore::with_sample_data())
}

async fn first_professional(store: &Arc<MarketplaceStore>) -> Professional {
    store.professionals.snapshot().await.into_iter().next().unwrap()
}

fn draft(professional_id: Uuid) -> BookAppointmentRequest {
    BookAppointmentRequest {
        professional_id,
        date: Utc::now().date_naive() + Duration::days(7),
        time: "10:00".to_string(),
        modality: "Online".to_string(),
        reason: Some("Primera consulta".to_string()),
    }
}

#[tokio::test]
async fn booking_appends_exactly_one_upcoming_appointment() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let professional = first_professional(&store).await;
    let before = store.appointments.len().await;

    let request = draft(professional.id);
    let (appointment, confirmation) = booking.book_appointment(request.clone()).await.unwrap();

    assert_eq!(store.appointments.len().await, before + 1);
    assert_eq!(appointment.status, AppointmentStatus::Upcoming);
    assert_eq!(appointment.professional, professional.name);
    assert_eq!(appointment.specialty, professional.specialty);
    assert_eq!(appointment.date, request.date);
    assert_eq!(appointment.time, request.time);
    assert_eq!(appointment.modality, request.modality);

    assert_eq!(confirmation.title, "¡Cita reservada!");
    assert!(confirmation.description.contains(&professional.name));
    assert!(confirmation.description.contains("a las 10:00"));
}

#[tokio::test]
async fn booked_record_does_not_carry_the_draft_reason() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let professional = first_professional(&store).await;

    let (appointment, _) = booking.book_appointment(draft(professional.id)).await.unwrap();

    let json = serde_json::to_value(&appointment).unwrap();
    assert!(json.get("reason").is_none());
}

#[tokio::test]
async fn booking_rejects_unknown_professional() {
    let store = sample_store();
    let booking = BookingService::new(&store);

    let result = booking.book_appointment(draft(Uuid::new_v4())).await;
    assert_matches!(result, Err(AppointmentError::ProfessionalNotFound));
}

#[tokio::test]
async fn booking_rejects_past_dates_but_allows_today() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let professional = first_professional(&store).await;

    let mut request = draft(professional.id);
    request.date = Utc::now().date_naive() - Duration::days(1);
    assert_matches!(
        booking.book_appointment(request).await,
        Err(AppointmentError::DateInPast)
    );

    let mut request = draft(professional.id);
    request.date = Utc::now().date_naive();
    assert!(booking.book_appointment(request).await.is_ok());
}

#[tokio::test]
async fn booking_requires_a_listed_time_slot() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let professional = first_professional(&store).await;

    let mut request = draft(professional.id);
    request.time = String::new();
    assert_matches!(
        booking.book_appointment(request).await,
        Err(AppointmentError::MissingTime)
    );

    let mut request = draft(professional.id);
    request.time = "13:00".to_string(); // not in the fixed slot list
    assert_matches!(
        booking.book_appointment(request).await,
        Err(AppointmentError::InvalidTimeSlot(_))
    );
}

#[tokio::test]
async fn booking_rejects_modalities_the_professional_does_not_offer() {
    let store = sample_store();
    let booking = BookingService::new(&store);

    // Dr. Carlos Méndez is Online-only in the sample directory.
    let carlos = store
        .professionals
        .find(|p| p.name == "Dr. Carlos Méndez")
        .await
        .unwrap();

    let mut request = draft(carlos.id);
    request.modality = "Presencial".to_string();
    assert_matches!(
        booking.book_appointment(request).await,
        Err(AppointmentError::UnsupportedModality(_))
    );
}

#[tokio::test]
async fn cancel_flips_only_the_target_record() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let calendar = CalendarService::new(&store);

    let upcoming = calendar.upcoming_appointments().await;
    let target = upcoming[0].clone();
    let before = calendar.list_appointments(None).await;

    let cancelled = booking.cancel_appointment(target.id).await.unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    let after = calendar.list_appointments(None).await;
    assert_eq!(after.len(), before.len());
    for (was, now) in before.iter().zip(after.iter()) {
        if was.id == target.id {
            assert_eq!(now.status, AppointmentStatus::Cancelled);
        } else {
            assert_eq!(now.status, was.status);
        }
    }
}

#[tokio::test]
async fn cancelling_twice_is_an_idempotent_no_op() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let calendar = CalendarService::new(&store);

    let target = calendar.upcoming_appointments().await[0].clone();
    booking.cancel_appointment(target.id).await.unwrap();

    let again = booking.cancel_appointment(target.id).await.unwrap();
    assert_eq!(again.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn cancelling_a_completed_appointment_leaves_it_completed() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let calendar = CalendarService::new(&store);

    let completed = calendar
        .list_appointments(Some(AppointmentStatus::Completed))
        .await[0]
        .clone();

    let unchanged = booking.cancel_appointment(completed.id).await.unwrap();
    assert_eq!(unchanged.status, AppointmentStatus::Completed);
}

#[tokio::test]
async fn cancelling_an_unknown_id_is_not_found() {
    let store = sample_store();
    let booking = BookingService::new(&store);

    assert_matches!(
        booking.cancel_appointment(Uuid::new_v4()).await,
        Err(AppointmentError::NotFound)
    );
}

#[tokio::test]
async fn upcoming_appointments_sort_ascending_by_date() {
    let store = sample_store();
    let calendar = CalendarService::new(&store);

    let upcoming = calendar.upcoming_appointments().await;
    assert!(!upcoming.is_empty());
    assert!(upcoming.iter().all(|a| a.status == AppointmentStatus::Upcoming));
    assert!(upcoming.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[tokio::test]
async fn calendar_day_selection_matches_dates_only() {
    let store = sample_store();
    let calendar = CalendarService::new(&store);

    let all = calendar.list_appointments(None).await;
    let date = all[0].date;
    let on_day = calendar.appointments_on(date).await;

    assert!(!on_day.is_empty());
    assert!(on_day.iter().all(|a| a.date == date));

    let expected = all.iter().filter(|a| a.date == date).count();
    assert_eq!(on_day.len(), expected);
}

#[tokio::test]
async fn stats_count_every_status() {
    let store = sample_store();
    let booking = BookingService::new(&store);
    let calendar = CalendarService::new(&store);

    let stats = calendar.stats().await;
    assert_eq!(stats.upcoming, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.cancelled, 0);
    assert_eq!(stats.total, 4);

    let target = calendar.upcoming_appointments().await[0].clone();
    booking.cancel_appointment(target.id).await.unwrap();

    let stats = calendar.stats().await;
    assert_eq!(stats.upcoming, 2);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.total, 4);
}
