use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::AppointmentStatus;
use shared_store::MarketplaceStore;

use crate::models::{AppointmentError, BookAppointmentRequest, AVAILABLE_TIMES};
use crate::services::{BookingService, CalendarService};

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarDayQuery {
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<MarketplaceStore>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(&store);

    let (appointment, confirmation) =
        booking.book_appointment(request).await.map_err(|e| match e {
            AppointmentError::ProfessionalNotFound => AppError::NotFound(e.to_string()),
            AppointmentError::MissingTime
            | AppointmentError::DateInPast
            | AppointmentError::InvalidTimeSlot(_)
            | AppointmentError::UnsupportedModality(_) => AppError::ValidationError(e.to_string()),
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!({
        "appointment": appointment,
        "confirmation": confirmation
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(store): State<Arc<MarketplaceStore>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let calendar = CalendarService::new(&store);
    let appointments = calendar.list_appointments(query.status).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn upcoming_appointments(
    State(store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    let calendar = CalendarService::new(&store);
    let appointments = calendar.upcoming_appointments().await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn appointments_on_date(
    State(store): State<Arc<MarketplaceStore>>,
    Query(query): Query<CalendarDayQuery>,
) -> Result<Json<Value>, AppError> {
    let calendar = CalendarService::new(&store);
    let appointments = calendar.appointments_on(query.date).await;

    Ok(Json(json!({
        "date": query.date,
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn appointment_stats(
    State(store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    let calendar = CalendarService::new(&store);
    let stats = calendar.stats().await;

    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn available_slots(
    State(_store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "available_times": AVAILABLE_TIMES,
        "total": AVAILABLE_TIMES.len()
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(store): State<Arc<MarketplaceStore>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(&store);

    let appointment = booking
        .cancel_appointment(appointment_id)
        .await
        .map_err(|e| match e {
            AppointmentError::NotFound => AppError::NotFound(e.to_string()),
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!(appointment)))
}
