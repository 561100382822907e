//! Fleet aggregation: scale one reactor's annual figure to N identical
//! units and convert kg → metric tons. Households are treated as a count of
//! identical reactors, not a population with individual variation.

use crate::params::{EnergyParams, ReactorParams};
use crate::reactor::{annual_co2_kg, annual_co2_kg_with_clean_energy};

/// Total CO₂ for a fleet of identical reactors [metric tons/yr].
pub fn fleet_co2_tons_per_year(params: &ReactorParams, households: u64) -> f64 {
    annual_co2_kg(params) * households as f64 / 1000.0 // kg -> tons
}

/// Fleet total [metric tons/yr] with the clean-energy lighting credit applied
/// to every unit.
pub fn fleet_co2_tons_with_clean_energy(
    params: &ReactorParams,
    energy: &EnergyParams,
    households: u64,
    extra_co2_per_kwh: f64,
) -> f64 {
    let per_reactor_kg = annual_co2_kg_with_clean_energy(params, energy, extra_co2_per_kwh);
    per_reactor_kg * households as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::DEFAULT_EXTRA_CO2_PER_KWH;

    const TOL: f64 = 1e-9;

    fn realistic_medium() -> ReactorParams {
        ReactorParams {
            area_m2: 4.0,
            productivity_g_m2_day: 20.0,
            co2_per_biomass: 1.8,
            uptime_fraction: 0.8,
        }
    }

    #[test]
    fn test_fleet_of_100() {
        // 42.048 kg * 100 / 1000 = 4.2048 t/yr
        let tons = fleet_co2_tons_per_year(&realistic_medium(), 100);
        assert!((tons - 4.2048).abs() < TOL, "got {tons}");
    }

    #[test]
    fn test_fleet_scales_linearly() {
        let params = realistic_medium();
        let per_reactor_kg = annual_co2_kg(&params);
        for n in [0u64, 1, 7, 1000] {
            let tons = fleet_co2_tons_per_year(&params, n);
            assert!(
                (tons - per_reactor_kg * n as f64 / 1000.0).abs() < TOL,
                "fleet total must be n × single-reactor output (n = {n})"
            );
        }
    }

    #[test]
    fn test_empty_fleet_is_zero() {
        assert_eq!(fleet_co2_tons_per_year(&realistic_medium(), 0), 0.0);
    }

    #[test]
    fn test_fleet_clean_energy_matches_per_reactor() {
        let params = realistic_medium();
        let energy = EnergyParams {
            clean_kwh_per_year: 800.0,
            lighting_fraction: 0.25,
        };
        let fleet = fleet_co2_tons_with_clean_energy(
            &params,
            &energy,
            50,
            DEFAULT_EXTRA_CO2_PER_KWH,
        );
        let per_kg =
            annual_co2_kg_with_clean_energy(&params, &energy, DEFAULT_EXTRA_CO2_PER_KWH);
        assert!((fleet - per_kg * 50.0 / 1000.0).abs() < TOL);
    }
}
