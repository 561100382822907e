// ============================================================================
// Fuel & Climate Converter
//
// Downstream chain from fixed CO₂ to a net climate effect:
//
//   CO₂ fixed → dry biomass → lipids → fuel liters
//   → avoided fossil CO₂  (fuel substitutes for fossil diesel)
//   → processing emissions (extraction/refining energy, if any)
//
//   net_climate_effect = co2_fixed + avoided_co2 - process_emissions
//
// The net-effect formula credits the same biomass twice on purpose: once for
// direct capture and once for fossil-fuel substitution when burned as fuel.
// Implemented exactly as modeled upstream; not "corrected" here.
// ============================================================================

use serde::{Deserialize, Serialize};

/// CO₂ fixed per kg of dry algal biomass [kg CO₂ / kg biomass].
pub const DEFAULT_CO2_PER_KG_BIOMASS: f64 = 1.8;

/// Parameters for converting algal biomass into liquid fuel and estimating
/// avoided fossil CO₂ emissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelParams {
    /// Fraction (0–1) of dry biomass that is convertible lipid/oil.
    /// 0.3 is optimistic but plausible for high-lipid strains.
    pub lipid_fraction: f64,
    /// Fraction (0–1) of lipids that end up as usable fuel
    pub conversion_efficiency: f64,
    /// Density of the produced fuel [kg/L]; biodiesel is ~0.88
    pub fuel_density_kg_per_l: f64,
    /// CO₂ emitted by burning 1 L of fossil diesel [kg CO₂/L]
    pub co2_kg_per_liter_fossil: f64,
    /// Processing energy (extraction, refining) per liter of fuel [kWh/L]
    pub process_energy_kwh_per_liter: f64,
    /// CO₂ intensity of the processing energy [kg CO₂/kWh];
    /// ~0.0 when powered by wave/solar
    pub process_co2_kg_per_kwh: f64,
}

impl Default for FuelParams {
    fn default() -> Self {
        Self {
            lipid_fraction: 0.30,
            conversion_efficiency: 0.80,
            fuel_density_kg_per_l: 0.88,
            co2_kg_per_liter_fossil: 2.6,
            process_energy_kwh_per_liter: 0.0,
            process_co2_kg_per_kwh: 0.0,
        }
    }
}

/// One year's fuel-and-climate outcome for a single reactor. Snapshot of a
/// single computation; every field is per reactor per year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelResult {
    pub co2_fixed_kg: f64,
    pub biomass_kg: f64,
    pub fuel_liters: f64,
    pub avoided_co2_kg: f64,
    pub process_emissions_kg: f64,
    pub net_climate_effect_kg: f64,
}

/// Fixed CO₂ [kg] → dry algal biomass [kg], or 0.0 if the conversion
/// ratio is not positive.
pub fn biomass_kg_from_co2(co2_kg: f64, co2_per_kg_biomass: f64) -> f64 {
    if co2_per_kg_biomass <= 0.0 {
        return 0.0;
    }
    co2_kg / co2_per_kg_biomass
}

/// Dry biomass [kg] → fuel [L].
///
/// `lipid_fraction` and `conversion_efficiency` are clamped to [0, 1] before
/// use — the only defensive range-limiting anywhere in the model. Density is
/// not clamped, only checked for non-positivity (0.0 returned).
pub fn fuel_liters_from_biomass(biomass_kg: f64, fuel_params: &FuelParams) -> f64 {
    let lipid_fraction = fuel_params.lipid_fraction.clamp(0.0, 1.0);
    let conversion_eff = fuel_params.conversion_efficiency.clamp(0.0, 1.0);

    let lipids_kg = biomass_kg * lipid_fraction * conversion_eff;
    if fuel_params.fuel_density_kg_per_l <= 0.0 {
        return 0.0;
    }
    lipids_kg / fuel_params.fuel_density_kg_per_l
}

/// Fossil CO₂ not emitted because this fuel substitutes for fossil diesel [kg].
pub fn avoided_co2_kg_from_fuel(fuel_liters: f64, fuel_params: &FuelParams) -> f64 {
    fuel_liters * fuel_params.co2_kg_per_liter_fossil
}

/// CO₂ emitted by the processing energy for this fuel, if any [kg].
pub fn process_emissions_kg_from_fuel(fuel_liters: f64, fuel_params: &FuelParams) -> f64 {
    let kwh = fuel_liters * fuel_params.process_energy_kwh_per_liter;
    kwh * fuel_params.process_co2_kg_per_kwh
}

/// Run the full chain for one reactor-year of fixed CO₂.
pub fn fuel_and_climate_effect_for_reactor(
    co2_fixed_kg: f64,
    fuel_params: &FuelParams,
    co2_per_kg_biomass: f64,
) -> FuelResult {
    let biomass_kg = biomass_kg_from_co2(co2_fixed_kg, co2_per_kg_biomass);
    let fuel_liters = fuel_liters_from_biomass(biomass_kg, fuel_params);
    let avoided_co2_kg = avoided_co2_kg_from_fuel(fuel_liters, fuel_params);
    let process_emissions_kg = process_emissions_kg_from_fuel(fuel_liters, fuel_params);

    let net_climate_effect_kg = co2_fixed_kg + avoided_co2_kg - process_emissions_kg;

    FuelResult {
        co2_fixed_kg,
        biomass_kg,
        fuel_liters,
        avoided_co2_kg,
        process_emissions_kg,
        net_climate_effect_kg,
    }
}
