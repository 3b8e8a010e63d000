use rand::Rng;
use wayfare_shared::CabinClass;

use crate::aircraft::AircraftSpec;

/// Seat availability for generated flights, derived from a target load factor.
#[derive(Debug, Clone, Copy)]
pub struct InventoryManager {
    load_factor: f64,
}

impl InventoryManager {
    pub fn new(load_factor: f64) -> Self {
        let load_factor = if load_factor.is_finite() {
            load_factor.clamp(0.0, 1.0)
        } else {
            0.7
        };
        Self { load_factor }
    }

    /// Seats left once the jittered load factor is applied to the cabin.
    pub fn remaining(&self, capacity: u32, jitter: f64) -> u32 {
        let sold_share = (self.load_factor * jitter).clamp(0.0, 1.0);
        let remaining = (capacity as f64 * (1.0 - sold_share)).floor();
        (remaining as u32).min(capacity)
    }

    /// Zero for unknown aircraft and cabins the aircraft does not fit.
    pub fn available_seats<R: Rng + ?Sized>(
        &self,
        aircraft: Option<&AircraftSpec>,
        class: CabinClass,
        rng: &mut R,
    ) -> u32 {
        let capacity = match aircraft {
            Some(spec) => spec.seats(class),
            None => return 0,
        };
        if capacity == 0 {
            return 0;
        }
        let jitter = rng.gen_range(0.8..=1.2);
        self.remaining(capacity, jitter)
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new(0.7)
    }
}
