// ============================================================================
// Reactor CO₂ Model
//
// Annualized steady-state CO₂ fixation for one reactor:
//
//   CO₂_kg = (A · P · k · 365 · uptime) / 1000
//
//   A = area [m²], P = productivity [g biomass/m²/day],
//   k = CO₂ fixed per gram biomass, uptime = operating fraction of the year
//
// The clean-energy variant adds a flat CO₂ credit for LED lighting powered
// by wave/solar energy. This is an additive approximation, not a change to
// the underlying productivity rate.
// ============================================================================

use crate::params::{EnergyParams, ReactorParams};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Extra CO₂ captured per kWh spent on lighting [kg CO₂/kWh].
pub const DEFAULT_EXTRA_CO2_PER_KWH: f64 = 0.086;

/// Typical US household annual emissions ballpark [t CO₂/yr].
pub const DEFAULT_HOUSEHOLD_EMISSIONS_TONS: f64 = 48.0;

/// CO₂ removed per year by a single reactor [kg].
///
/// No bounds checks: negative or zero inputs propagate mathematically
/// (negative area yields negative CO₂, which is a valid output here,
/// not an error).
pub fn annual_co2_kg(params: &ReactorParams) -> f64 {
    let grams_co2_per_year = params.area_m2
        * params.productivity_g_m2_day
        * params.co2_per_biomass
        * DAYS_PER_YEAR
        * params.uptime_fraction;
    grams_co2_per_year / 1000.0 // g -> kg
}

/// CO₂ removed per year [kg] with clean-energy lighting enhancement.
///
/// Base photosynthetic capture plus `lighting_kwh × extra_co2_per_kwh`,
/// where `lighting_kwh = clean_kwh_per_year × lighting_fraction`.
pub fn annual_co2_kg_with_clean_energy(
    params: &ReactorParams,
    energy: &EnergyParams,
    extra_co2_per_kwh: f64,
) -> f64 {
    let base_co2_kg = annual_co2_kg(params);
    let lighting_kwh_per_year = energy.clean_kwh_per_year * energy.lighting_fraction;
    let extra_co2_kg = lighting_kwh_per_year * extra_co2_per_kwh;
    base_co2_kg + extra_co2_kg
}

/// Percentage of one household's annual emissions offset by one reactor.
///
/// Returns 0.0 when the household figure is zero or negative rather than
/// dividing by it.
pub fn percent_of_household_emissions(
    params: &ReactorParams,
    household_emissions_tons_per_year: f64,
) -> f64 {
    if household_emissions_tons_per_year <= 0.0 {
        return 0.0;
    }
    let reactor_tons = annual_co2_kg(params) / 1000.0;
    100.0 * reactor_tons / household_emissions_tons_per_year
}
