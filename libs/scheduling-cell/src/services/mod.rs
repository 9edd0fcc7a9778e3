pub mod seed;
pub mod store;

pub use seed::{seed_doctors, seeded_store};
pub use store::SchedulingStore;
