use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{
    AppointmentsByPatientQuery, CreateAppointmentRequest, CreateDoctorRequest,
    DeleteAppointmentRequest, PatientNameUpdate, UpdatePatientNameRequest,
};
use crate::router::SchedulingState;

// ==============================================================================
// QUERIES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<SchedulingState>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.read().await.list_doctors();
    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor_by_id(
    State(state): State<SchedulingState>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.read().await.get_doctor_by_id(doctor_id)?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<SchedulingState>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.read().await.list_appointments();
    debug!("Returning {} appointments", appointments.len());
    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn list_appointments_by_patient(
    State(state): State<SchedulingState>,
    Query(query): Query<AppointmentsByPatientQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = state
        .read()
        .await
        .list_appointments_by_patient(&query.patient_name);
    Ok(Json(json!(appointments)))
}

// ==============================================================================
// MUTATIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<SchedulingState>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.write().await.register_doctor(request)?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<SchedulingState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.write().await.book_appointment(request)?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<SchedulingState>,
    Path((doctor_id, slot)): Path<(i32, i32)>,
) -> Result<Json<Value>, AppError> {
    let request = DeleteAppointmentRequest { doctor_id, slot };
    let freed = state.write().await.cancel_appointment(request)?;
    Ok(Json(json!({ "slot": freed })))
}

#[axum::debug_handler]
pub async fn update_patient_name(
    State(state): State<SchedulingState>,
    Path((doctor_id, slot)): Path<(i32, i32)>,
    Json(update): Json<PatientNameUpdate>,
) -> Result<Json<Value>, AppError> {
    let request = UpdatePatientNameRequest {
        doctor_id,
        slot,
        patient_name: update.patient_name,
    };
    let appointment = state.write().await.rename_patient_on_appointment(request)?;
    Ok(Json(json!(appointment)))
}
