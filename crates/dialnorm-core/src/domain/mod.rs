pub mod phone;
pub mod seed;

pub use phone::{is_normalized, normalize_phone, NormalizedSet};
pub use seed::{SeedList, DEFAULT_SEED_NUMBERS};
