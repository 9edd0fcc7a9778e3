use serde::{Deserialize, Serialize};

pub const MIN_SLOT: i32 = 0;
pub const MAX_SLOT: i32 = 15;

pub fn is_valid_slot(slot: i32) -> bool {
    (MIN_SLOT..=MAX_SLOT).contains(&slot)
}

/// Every slot a doctor could offer, in ascending order.
pub fn all_slots() -> Vec<i32> {
    (MIN_SLOT..=MAX_SLOT).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: i32,
    pub doctor_name: String,
    pub speciality: String,
    pub clinic: String,
    pub slots_available: Vec<i32>,
    pub appointments: Vec<Appointment>,
}

impl Doctor {
    /// A doctor with an empty slot pool and no appointments.
    pub fn new(
        doctor_id: i32,
        doctor_name: impl Into<String>,
        speciality: impl Into<String>,
        clinic: impl Into<String>,
    ) -> Self {
        Self {
            doctor_id,
            doctor_name: doctor_name.into(),
            speciality: speciality.into(),
            clinic: clinic.into(),
            slots_available: Vec::new(),
            appointments: Vec::new(),
        }
    }

    pub fn with_slots(mut self, slots: impl IntoIterator<Item = i32>) -> Self {
        self.slots_available = slots.into_iter().collect();
        self
    }

    pub fn is_slot_available(&self, slot: i32) -> bool {
        self.slots_available.contains(&slot)
    }

    pub fn booked_slots(&self) -> impl Iterator<Item = i32> + '_ {
        self.appointments.iter().map(|a| a.slot)
    }

    pub fn appointment_at(&self, slot: i32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.slot == slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: i32,
    pub slot: i32,
    pub doctor_id: i32,
    pub patient_name: String,
}

// Request DTOs, one per mutating operation

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub doctor_name: String,
    pub speciality: String,
    pub clinic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i32,
    pub slot: i32,
    pub patient_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAppointmentRequest {
    pub doctor_id: i32,
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePatientNameRequest {
    pub doctor_id: i32,
    pub slot: i32,
    pub patient_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsByPatientQuery {
    pub patient_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientNameUpdate {
    pub patient_name: String,
}
