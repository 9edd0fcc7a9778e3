use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::SchedulingError;
use crate::models::{
    is_valid_slot, Appointment, CreateAppointmentRequest, CreateDoctorRequest,
    DeleteAppointmentRequest, Doctor, UpdatePatientNameRequest,
};

pub type Result<T> = std::result::Result<T, SchedulingError>;

/// In-memory registry of doctors, their open slots and their bookings.
///
/// For every doctor the available slots and the booked slots are disjoint and
/// both stay inside `MIN_SLOT..=MAX_SLOT`. Each mutation validates first and
/// only then touches state, so a rejected call leaves the store unchanged.
#[derive(Debug, Clone)]
pub struct SchedulingStore {
    doctors: Vec<Doctor>,
    // `None` once the id space is used up.
    next_doctor_id: Option<i32>,
    next_appointment_id: Option<i32>,
}

impl Default for SchedulingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingStore {
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            next_doctor_id: Some(1),
            next_appointment_id: Some(1),
        }
    }

    /// Builds a store over pre-built doctor records, rejecting fixtures that
    /// break the slot invariants.
    pub fn with_doctors(doctors: Vec<Doctor>) -> Result<Self> {
        validate_fixtures(&doctors)?;

        let next_doctor_id = doctors
            .iter()
            .map(|d| d.doctor_id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| invalid_seed(format!("doctor id {} leaves no room for new doctors", i32::MAX)))?;
        let next_appointment_id = doctors
            .iter()
            .flat_map(|d| d.appointments.iter().map(|a| a.appointment_id))
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| invalid_seed(format!("appointment id {} leaves no room for new bookings", i32::MAX)))?;

        debug!("Scheduling store created with {} doctors", doctors.len());

        Ok(Self {
            doctors,
            next_doctor_id: Some(next_doctor_id),
            next_appointment_id: Some(next_appointment_id),
        })
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        debug!("Listing {} doctors", self.doctors.len());
        self.doctors.clone()
    }

    /// All appointments, doctors in registration order, each doctor's
    /// bookings in the order they were made.
    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments().cloned().collect()
    }

    /// Exact, case-sensitive match. No match is an empty list.
    pub fn list_appointments_by_patient(&self, patient_name: &str) -> Vec<Appointment> {
        debug!("Listing appointments for patient {}", patient_name);
        self.appointments()
            .filter(|a| a.patient_name == patient_name)
            .cloned()
            .collect()
    }

    pub fn get_doctor_by_id(&self, doctor_id: i32) -> Result<Doctor> {
        let index = self.doctor_index(doctor_id)?;
        Ok(self.doctors[index].clone())
    }

    pub fn register_doctor(&mut self, request: CreateDoctorRequest) -> Result<Doctor> {
        let doctor_id = mint_id(&mut self.next_doctor_id, "doctor")?;
        let doctor = Doctor::new(
            doctor_id,
            request.doctor_name,
            request.speciality,
            request.clinic,
        );

        info!("Registered doctor {} ({})", doctor.doctor_id, doctor.doctor_name);
        self.doctors.push(doctor.clone());
        Ok(doctor)
    }

    pub fn book_appointment(&mut self, request: CreateAppointmentRequest) -> Result<Appointment> {
        let index = self.doctor_index(request.doctor_id)?;

        if !is_valid_slot(request.slot) {
            warn!("Rejected booking for doctor {}: slot {} out of range", request.doctor_id, request.slot);
            return Err(SchedulingError::InvalidSlot { slot: request.slot });
        }
        if !self.doctors[index].is_slot_available(request.slot) {
            warn!("Rejected booking for doctor {}: slot {} unavailable", request.doctor_id, request.slot);
            return Err(SchedulingError::SlotUnavailable { slot: request.slot });
        }

        let appointment = Appointment {
            appointment_id: mint_id(&mut self.next_appointment_id, "appointment")?,
            slot: request.slot,
            doctor_id: request.doctor_id,
            patient_name: request.patient_name,
        };

        let doctor = &mut self.doctors[index];
        doctor.slots_available.retain(|&slot| slot != appointment.slot);
        doctor.appointments.push(appointment.clone());

        info!(
            "Booked appointment {} with doctor {} at slot {}",
            appointment.appointment_id, appointment.doctor_id, appointment.slot
        );
        Ok(appointment)
    }

    /// Cancels the booking at the slot and returns the freed slot, which is
    /// offered again ahead of the doctor's other open slots.
    pub fn cancel_appointment(&mut self, request: DeleteAppointmentRequest) -> Result<i32> {
        let index = self.doctor_index(request.doctor_id)?;
        let doctor = &mut self.doctors[index];

        let position = doctor
            .appointments
            .iter()
            .position(|a| a.slot == request.slot)
            .ok_or_else(|| {
                warn!("No appointment to cancel for doctor {} at slot {}", request.doctor_id, request.slot);
                SchedulingError::AppointmentNotFound {
                    doctor_id: request.doctor_id,
                    slot: request.slot,
                }
            })?;

        let cancelled = doctor.appointments.remove(position);
        doctor.slots_available.insert(0, cancelled.slot);

        info!(
            "Cancelled appointment {} with doctor {} at slot {}",
            cancelled.appointment_id, cancelled.doctor_id, cancelled.slot
        );
        Ok(cancelled.slot)
    }

    pub fn rename_patient_on_appointment(
        &mut self,
        request: UpdatePatientNameRequest,
    ) -> Result<Appointment> {
        let index = self.doctor_index(request.doctor_id)?;

        let appointment = self.doctors[index]
            .appointments
            .iter_mut()
            .find(|a| a.slot == request.slot)
            .ok_or(SchedulingError::AppointmentNotFound {
                doctor_id: request.doctor_id,
                slot: request.slot,
            })?;

        appointment.patient_name = request.patient_name;

        info!("Renamed patient on appointment {}", appointment.appointment_id);
        Ok(appointment.clone())
    }

    fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.doctors.iter().flat_map(|d| d.appointments.iter())
    }

    fn doctor_index(&self, doctor_id: i32) -> Result<usize> {
        self.doctors
            .iter()
            .position(|d| d.doctor_id == doctor_id)
            .ok_or(SchedulingError::NotFound { doctor_id })
    }
}

fn validate_fixtures(doctors: &[Doctor]) -> Result<()> {
    let mut doctor_ids = HashSet::new();
    let mut appointment_ids = HashSet::new();

    for doctor in doctors {
        if !doctor_ids.insert(doctor.doctor_id) {
            return Err(invalid_seed(format!("duplicate doctor id {}", doctor.doctor_id)));
        }

        let mut available = HashSet::new();
        for &slot in &doctor.slots_available {
            if !is_valid_slot(slot) {
                return Err(invalid_seed(format!("doctor {} offers out-of-range slot {}", doctor.doctor_id, slot)));
            }
            if !available.insert(slot) {
                return Err(invalid_seed(format!("doctor {} offers slot {} twice", doctor.doctor_id, slot)));
            }
        }

        let mut booked = HashSet::new();
        for appointment in &doctor.appointments {
            if appointment.doctor_id != doctor.doctor_id {
                return Err(invalid_seed(format!(
                    "appointment {} belongs to doctor {} but is listed under doctor {}",
                    appointment.appointment_id, appointment.doctor_id, doctor.doctor_id
                )));
            }
            if !appointment_ids.insert(appointment.appointment_id) {
                return Err(invalid_seed(format!("duplicate appointment id {}", appointment.appointment_id)));
            }
            if !is_valid_slot(appointment.slot) {
                return Err(invalid_seed(format!(
                    "appointment {} uses out-of-range slot {}",
                    appointment.appointment_id, appointment.slot
                )));
            }
            if available.contains(&appointment.slot) {
                return Err(invalid_seed(format!(
                    "doctor {} slot {} is both available and booked",
                    doctor.doctor_id, appointment.slot
                )));
            }
            if !booked.insert(appointment.slot) {
                return Err(invalid_seed(format!(
                    "doctor {} slot {} is booked twice",
                    doctor.doctor_id, appointment.slot
                )));
            }
        }
    }

    Ok(())
}

/// Hands out the counter's id and advances it. Once `i32::MAX` has been
/// issued the counter is spent and every later call fails.
fn mint_id(counter: &mut Option<i32>, kind: &'static str) -> Result<i32> {
    let id = counter.ok_or_else(|| {
        warn!("No {} ids left to assign", kind);
        SchedulingError::IdSpaceExhausted { kind }
    })?;
    *counter = id.checked_add(1);
    Ok(id)
}

fn invalid_seed(message: String) -> SchedulingError {
    SchedulingError::InvalidSeed(message)
}
