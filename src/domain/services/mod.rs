mod facility_finder;

pub use facility_finder::{FacilityFinder, DEFAULT_NAMES};
