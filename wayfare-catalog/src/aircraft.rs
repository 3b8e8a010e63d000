use serde::Serialize;
use wayfare_shared::CabinClass;

/// Installed seats per cabin. Zero means the cabin is not fitted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClassSeats {
    pub economy: u32,
    pub premium_economy: u32,
    pub business: u32,
    pub first: u32,
}

impl ClassSeats {
    pub fn get(&self, class: CabinClass) -> u32 {
        match class {
            CabinClass::Economy => self.economy,
            CabinClass::PremiumEconomy => self.premium_economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AircraftSpec {
    pub name: &'static str,
    pub seats: ClassSeats,
    pub max_range_km: u32,
    pub wide_body: bool,
}

impl AircraftSpec {
    pub fn seats(&self, class: CabinClass) -> u32 {
        self.seats.get(class)
    }

    pub fn can_fly(&self, distance_km: u32) -> bool {
        self.max_range_km >= distance_km
    }
}

const fn spec(
    name: &'static str,
    seats: [u32; 4],
    max_range_km: u32,
    wide_body: bool,
) -> AircraftSpec {
    AircraftSpec {
        name,
        seats: ClassSeats {
            economy: seats[0],
            premium_economy: seats[1],
            business: seats[2],
            first: seats[3],
        },
        max_range_km,
        wide_body,
    }
}

pub static AIRCRAFT: &[AircraftSpec] = &[
    spec("A320", [150, 0, 12, 0], 6_100, false),
    spec("737-800", [162, 0, 12, 0], 5_400, false),
    spec("A330-300", [250, 21, 36, 0], 11_750, true),
    spec("787-9", [216, 28, 30, 0], 14_000, true),
    spec("A350-900", [253, 24, 42, 0], 15_000, true),
    spec("777-300ER", [264, 48, 42, 8], 13_650, true),
    spec("A380-800", [399, 56, 76, 14], 15_200, true),
];

pub fn aircraft_spec(name: &str) -> Option<&'static AircraftSpec> {
    AIRCRAFT.iter().find(|a| a.name == name)
}
