//! Facility Finder - Synthesized nearby-parking enrichment
//!
//! Derives a pseudo-random but fully deterministic set of parking facilities
//! from a resolved address. A real deployment would query a places API;
//! here the listings are synthesized so that the same address always yields
//! the same answer.

use crate::domain::entities::{AddressRecord, FacilityListing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// The fixed pool of fictitious facility names.
pub const DEFAULT_NAMES: [&str; 10] = [
    "Estacionamento Central",
    "Park & Go",
    "Estacione Aqui",
    "Parking 24h",
    "Vaga Fácil",
    "EstacionaBem",
    "Vaga Segura",
    "AutoPark",
    "Garagem Expressa",
    "Estacionamento Rápido",
];

/// Synthesizes 1-5 parking facilities for a resolved address.
///
/// Determinism contract: the random generator is freshly seeded from the
/// address on every call ([`FacilityFinder::seed_for`]), so no generator
/// state is shared between requests and repeated calls for the same
/// (state, street-name-length) pair produce identical listings.
pub struct FacilityFinder {
    names: Vec<String>,
    /// Distance steps; each step is 100 meters
    distance_steps: RangeInclusive<u32>,
    spaces: RangeInclusive<u32>,
    hourly_price: RangeInclusive<u32>,
}

impl FacilityFinder {
    pub fn new(
        names: Vec<String>,
        distance_steps: RangeInclusive<u32>,
        spaces: RangeInclusive<u32>,
        hourly_price: RangeInclusive<u32>,
    ) -> Self {
        Self {
            names,
            distance_steps,
            spaces,
            hourly_price,
        }
    }

    /// Seed derived from the address: sum of the state code's character
    /// codes plus the character length of the street name.
    pub fn seed_for(record: &AddressRecord) -> u64 {
        let state_sum: u64 = record.state.chars().map(|c| c as u64).sum();
        state_sum + record.street.chars().count() as u64
    }

    /// Synthesize the facility listings for an address.
    ///
    /// Picks a uniform count in [1, 5], samples that many names without
    /// replacement (output keeps the sampling order), then draws distance,
    /// available spaces and hourly price independently per listing.
    pub fn find_nearby(&self, record: &AddressRecord) -> Vec<FacilityListing> {
        let mut rng = StdRng::seed_from_u64(Self::seed_for(record));

        let count = rng.gen_range(1..=5usize).min(self.names.len());
        let picked = rand::seq::index::sample(&mut rng, self.names.len(), count);

        picked
            .iter()
            .map(|i| FacilityListing {
                name: self.names[i].clone(),
                distance_m: rng.gen_range(self.distance_steps.clone()) * 100,
                available_spaces: rng.gen_range(self.spaces.clone()),
                hourly_price: rng.gen_range(self.hourly_price.clone()),
            })
            .collect()
    }
}

impl Default for FacilityFinder {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            1..=20,
            0..=30,
            5..=20,
        )
    }
}
