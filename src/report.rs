//! Console report sections. Pure text presentation; every number printed
//! here comes from the calculation modules.

use crate::fleet::{fleet_co2_tons_per_year, fleet_co2_tons_with_clean_energy};
use crate::fuel::{FuelParams, FuelResult};
use crate::params::{EnergyParams, ReactorParams};
use crate::reactor::{
    annual_co2_kg, annual_co2_kg_with_clean_energy, percent_of_household_emissions,
};

/// Base (sunlight-only) section: reactor parameters, per-reactor capture,
/// household offset, and fleet total.
pub fn print_base_report(
    params: &ReactorParams,
    households: u64,
    household_emissions_tons: f64,
) {
    let per_reactor_kg = annual_co2_kg(params);
    let total_tons = fleet_co2_tons_per_year(params, households);
    let percent_offset = percent_of_household_emissions(params, household_emissions_tons);

    println!("=== Backyard / Ocean Algae Bio-Engine CO₂ Model ===");
    println!();
    println!("Reactor parameters:");
    println!("  Area:              {:.2} m²", params.area_m2);
    println!("  Productivity:      {:.1} g/m²/day", params.productivity_g_m2_day);
    println!("  CO₂ per biomass:   {:.2} g CO₂ / g biomass", params.co2_per_biomass);
    println!("  Uptime:            {:.1} %", params.uptime_fraction * 100.0);
    println!();
    println!("Sunlight-only (no clean-energy lighting):");
    println!("  Per reactor:       {per_reactor_kg:.2} kg CO₂ / year");
    println!(
        "  Offset vs household emissions ({household_emissions_tons:.1} t/yr): {percent_offset:.3} %"
    );
    println!("  Fleet ({households} reactors): {total_tons:.3} tons CO₂ / year");
    println!();
}

/// Clean-energy section: base vs. lighting-boosted figures, per reactor and
/// for the fleet.
pub fn print_clean_energy_report(
    params: &ReactorParams,
    energy: &EnergyParams,
    households: u64,
    extra_co2_per_kwh: f64,
) {
    let base_per_reactor_kg = annual_co2_kg(params);
    let boosted_per_reactor_kg =
        annual_co2_kg_with_clean_energy(params, energy, extra_co2_per_kwh);
    let base_fleet_tons = fleet_co2_tons_per_year(params, households);
    let boosted_fleet_tons =
        fleet_co2_tons_with_clean_energy(params, energy, households, extra_co2_per_kwh);

    println!("=== Clean Energy Mode (Wave/Solar-Powered) ===");
    println!();
    println!("Clean energy per reactor: {:.1} kWh/year", energy.clean_kwh_per_year);
    println!("Lighting fraction:        {:.1} %", energy.lighting_fraction * 100.0);
    println!("Extra CO₂ per kWh (lighting): {extra_co2_per_kwh:.3} kg/kWh");
    println!();
    println!("Per reactor:");
    println!("  Base (sunlight only):  {base_per_reactor_kg:.2} kg CO₂ / year");
    println!("  With clean energy:     {boosted_per_reactor_kg:.2} kg CO₂ / year");
    println!(
        "  Extra from lighting:   {:.2} kg CO₂ / year",
        boosted_per_reactor_kg - base_per_reactor_kg
    );
    println!();
    println!("Fleet (reactors = {households}):");
    println!("  Base:                  {base_fleet_tons:.3} tons CO₂ / year");
    println!("  With clean energy:     {boosted_fleet_tons:.3} tons CO₂ / year");
    println!(
        "  Extra from lighting:   {:.3} tons CO₂ / year",
        boosted_fleet_tons - base_fleet_tons
    );
    println!();
}

/// Fuel section: per-reactor chain plus fleet totals (liters, and kg→tons
/// for the CO₂ figures).
pub fn print_fuel_report(result: &FuelResult, fuel_params: &FuelParams, households: u64) {
    let fleet = households as f64;

    println!("=== Fuel Mode: Biomass → Fuel → Avoided CO₂ ===");
    println!();
    println!("Fuel parameters:");
    println!("  Lipid fraction:            {:.1} %", fuel_params.lipid_fraction * 100.0);
    println!(
        "  Conversion efficiency:     {:.1} %",
        fuel_params.conversion_efficiency * 100.0
    );
    println!("  Fuel density:              {:.2} kg/L", fuel_params.fuel_density_kg_per_l);
    println!(
        "  Fossil CO₂ per liter:      {:.2} kg CO₂/L",
        fuel_params.co2_kg_per_liter_fossil
    );
    println!(
        "  Process energy per liter:  {:.2} kWh/L",
        fuel_params.process_energy_kwh_per_liter
    );
    println!(
        "  Process CO₂ intensity:     {:.3} kg CO₂/kWh",
        fuel_params.process_co2_kg_per_kwh
    );
    println!();
    println!("Per reactor (per year):");
    println!("  CO₂ fixed:                 {:.2} kg", result.co2_fixed_kg);
    println!("  Biomass produced:          {:.2} kg", result.biomass_kg);
    println!("  Fuel produced:             {:.2} L", result.fuel_liters);
    println!("  Avoided fossil CO₂:        {:.2} kg", result.avoided_co2_kg);
    println!("  Processing emissions:      {:.2} kg", result.process_emissions_kg);
    println!("  Net climate effect:        {:.2} kg", result.net_climate_effect_kg);
    println!();
    println!("Fleet (reactors = {households}):");
    println!("  Fuel produced:             {:.2} L/year", result.fuel_liters * fleet);
    println!(
        "  Avoided fossil CO₂:        {:.3} t/year",
        result.avoided_co2_kg * fleet / 1000.0
    );
    println!(
        "  Processing emissions:      {:.3} t/year",
        result.process_emissions_kg * fleet / 1000.0
    );
    println!(
        "  Net climate effect:        {:.3} t/year",
        result.net_climate_effect_kg * fleet / 1000.0
    );
    println!();
}
