//! Backyard / ocean algae bio-engine CO₂ model.
//!
//! Three composable calculation stages, each a set of pure functions over
//! immutable parameter records:
//! - Reactor CO₂ model (reactor module): annual fixation for one reactor,
//!   optionally boosted by clean-energy LED lighting
//! - Fleet aggregation (fleet module): N identical reactors, kg → tons
//! - Fuel & climate conversion (fuel module): biomass → fuel → avoided
//!   fossil CO₂ → net climate effect
//!
//! Data flows one way: reactor → fleet / fuel. All values are steady-state
//! annualized rates; nothing here iterates over time or holds state.

pub mod fleet;
pub mod fuel;
pub mod params;
pub mod reactor;
pub mod report;
pub mod scenarios;

pub use fleet::{fleet_co2_tons_per_year, fleet_co2_tons_with_clean_energy};
pub use fuel::{fuel_and_climate_effect_for_reactor, FuelParams, FuelResult};
pub use params::{EnergyParams, ReactorParams};
pub use reactor::{
    annual_co2_kg, annual_co2_kg_with_clean_energy, percent_of_household_emissions,
};
