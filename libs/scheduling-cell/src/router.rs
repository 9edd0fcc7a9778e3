use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put, delete},
};
use tokio::sync::RwLock;

use crate::handlers;
use crate::services::SchedulingStore;

pub type SchedulingState = Arc<RwLock<SchedulingStore>>;

pub fn scheduling_routes(state: SchedulingState) -> Router {
    Router::new()
        // Doctors
        .route("/doctors", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/doctors/{id}", get(handlers::get_doctor_by_id))

        // Appointments
        .route("/appointments", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/appointments/by-patient", get(handlers::list_appointments_by_patient))
        .route("/appointments/{doctor_id}/{slot}", delete(handlers::delete_appointment))
        .route("/appointments/{doctor_id}/{slot}/patient-name", put(handlers::update_patient_name))
        .with_state(state)
}
