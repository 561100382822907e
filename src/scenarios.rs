//! Predefined reactor scenarios, from a cautious backyard tank up to a
//! well-tuned large installation.

use crate::params::ReactorParams;

/// 2 m², 10 g/m²/day, 70% uptime
pub fn conservative_small() -> ReactorParams {
    ReactorParams {
        area_m2: 2.0,
        productivity_g_m2_day: 10.0,
        co2_per_biomass: 1.8,
        uptime_fraction: 0.7,
    }
}

/// 4 m², 20 g/m²/day, 80% uptime
pub fn realistic_medium() -> ReactorParams {
    ReactorParams {
        area_m2: 4.0,
        productivity_g_m2_day: 20.0,
        co2_per_biomass: 1.8,
        uptime_fraction: 0.8,
    }
}

/// 8 m², 27 g/m²/day, 85% uptime
pub fn optimized_large() -> ReactorParams {
    ReactorParams {
        area_m2: 8.0,
        productivity_g_m2_day: 27.0,
        co2_per_biomass: 1.8,
        uptime_fraction: 0.85,
    }
}
