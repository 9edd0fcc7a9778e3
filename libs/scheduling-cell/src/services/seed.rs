use crate::error::SchedulingError;
use crate::models::{all_slots, Doctor};
use crate::services::store::SchedulingStore;

/// The demo roster the API starts with when seeding is enabled.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Stephen Strange", "Mystic Arts", "Sanctum Sanctorum")
            .with_slots([0, 1, 3, 9, 15]),
        Doctor::new(2, "Bruce Banner", "Anger Management", "Dayton").with_slots(all_slots()),
        Doctor::new(3, "Jane Foster", "Cancer Treatment", "New Asgard")
            .with_slots([1, 13, 4, 11]),
        Doctor::new(4, "Reed Richards", "Muscle Elasticity", "Baxter Building")
            .with_slots([10, 11, 13, 1, 8]),
    ]
}

pub fn seeded_store() -> Result<SchedulingStore, SchedulingError> {
    SchedulingStore::with_doctors(seed_doctors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i32> = seed_doctors().iter().map(|d| d.doctor_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_seed_slot_pools() {
        let doctors = seed_doctors();

        assert_eq!(doctors[0].slots_available, vec![0, 1, 3, 9, 15]);
        assert_eq!(doctors[1].slots_available, (0..=15).collect::<Vec<_>>());
        assert_eq!(doctors[2].slots_available, vec![1, 13, 4, 11]);
        assert_eq!(doctors[3].slots_available, vec![10, 11, 13, 1, 8]);
        assert!(doctors.iter().all(|d| d.appointments.is_empty()));
    }

    #[test]
    fn test_seed_passes_validation() {
        let store = seeded_store().unwrap();
        assert_eq!(store.list_doctors().len(), 4);
        assert!(store.list_appointments().is_empty());
    }
}
