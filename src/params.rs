//! Value objects describing one reactor and its clean-energy supply.
//!
//! All parameters are plain real numbers. Fractions are conceptually in
//! [0, 1] but nothing here enforces ranges; physically nonsensical inputs
//! flow through the model arithmetic unchanged.

use serde::{Deserialize, Serialize};

/// Physical parameters of a single household algae bio-reactor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReactorParams {
    /// Illuminated reactor area [m²]
    pub area_m2: f64,
    /// Dry biomass productivity [g/m²/day]
    pub productivity_g_m2_day: f64,
    /// CO₂ fixed per gram of dry biomass [g CO₂ / g biomass]
    pub co2_per_biomass: f64,
    /// Fraction of the year the system is actually running
    /// (0.7 = 70% of the year)
    pub uptime_fraction: f64,
}

impl Default for ReactorParams {
    fn default() -> Self {
        Self {
            area_m2: 4.0,
            productivity_g_m2_day: 20.0,
            co2_per_biomass: 1.8,
            uptime_fraction: 0.7,
        }
    }
}

/// Clean energy available to one reactor for lighting enhancement.
///
/// Whatever is not spent on LEDs is assumed to go to pumps and mixing,
/// which this model does not track further.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyParams {
    /// Clean energy available per reactor per year (wave, solar, ...) [kWh]
    pub clean_kwh_per_year: f64,
    /// Fraction (0–1) of that energy spent on LED lighting
    pub lighting_fraction: f64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            clean_kwh_per_year: 0.0,
            lighting_fraction: 0.0,
        }
    }
}
