use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Doctor with ID - {doctor_id} not found")]
    NotFound { doctor_id: i32 },

    #[error("Slot {slot} is invalid")]
    InvalidSlot { slot: i32 },

    #[error("Slot {slot} is unavailable")]
    SlotUnavailable { slot: i32 },

    #[error("Appointment with slot - {slot} not found")]
    AppointmentNotFound { doctor_id: i32, slot: i32 },

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("No {kind} ids left to assign")]
    IdSpaceExhausted { kind: &'static str },
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        let message = err.to_string();
        match err {
            SchedulingError::NotFound { .. } | SchedulingError::AppointmentNotFound { .. } => {
                AppError::NotFound(message)
            }
            SchedulingError::InvalidSlot { .. } => AppError::BadRequest(message),
            SchedulingError::SlotUnavailable { .. } => AppError::Conflict(message),
            SchedulingError::InvalidSeed(_) | SchedulingError::IdSpaceExhausted { .. } => {
                AppError::Internal(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            SchedulingError::NotFound { doctor_id: 99 }.to_string(),
            "Doctor with ID - 99 not found"
        );
        assert_eq!(SchedulingError::InvalidSlot { slot: 16 }.to_string(), "Slot 16 is invalid");
        assert_eq!(SchedulingError::SlotUnavailable { slot: 5 }.to_string(), "Slot 5 is unavailable");
        assert_eq!(
            SchedulingError::AppointmentNotFound { doctor_id: 1, slot: 3 }.to_string(),
            "Appointment with slot - 3 not found"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let not_found: AppError = SchedulingError::AppointmentNotFound { doctor_id: 1, slot: 3 }.into();
        assert!(matches!(not_found, AppError::NotFound(_)));

        let invalid: AppError = SchedulingError::InvalidSlot { slot: -1 }.into();
        assert!(matches!(invalid, AppError::BadRequest(_)));

        let taken: AppError = SchedulingError::SlotUnavailable { slot: 3 }.into();
        assert!(matches!(taken, AppError::Conflict(_)));

        let exhausted: AppError = SchedulingError::IdSpaceExhausted { kind: "doctor" }.into();
        assert!(matches!(exhausted, AppError::Internal(_)));
    }
}
