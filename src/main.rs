// ============================================================================
// Algae Bio-Engine CLI — assembles parameter records from flags and prints
// the sectioned report. All domain arithmetic lives in the library; this
// file only maps arguments to params and picks which sections to show.
// ============================================================================

use clap::{Parser, ValueEnum};

use algae_bioengine::fuel::{
    fuel_and_climate_effect_for_reactor, FuelParams, DEFAULT_CO2_PER_KG_BIOMASS,
};
use algae_bioengine::params::{EnergyParams, ReactorParams};
use algae_bioengine::reactor::{
    annual_co2_kg, annual_co2_kg_with_clean_energy, DEFAULT_EXTRA_CO2_PER_KWH,
    DEFAULT_HOUSEHOLD_EMISSIONS_TONS,
};
use algae_bioengine::report;
use algae_bioengine::scenarios;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Backyard / Ocean Algae Bio-Engine CO₂ Reduction Model"
)]
struct Cli {
    /// Use a predefined reactor scenario (individual reactor flags override
    /// its fields)
    #[arg(long, value_enum)]
    scenario: Option<ScenarioArg>,

    /// Number of households / reactors
    #[arg(long, default_value_t = 1)]
    households: u64,

    /// Reactor area in square meters (m²)
    #[arg(long = "area-m2")]
    area_m2: Option<f64>,

    /// Biomass productivity in g/m²/day
    #[arg(long)]
    productivity: Option<f64>,

    /// Uptime fraction (0.0–1.0, default 0.7 if not using a scenario)
    #[arg(long)]
    uptime: Option<f64>,

    /// CO₂ fixed per gram biomass (g CO₂ / g biomass, default 1.8)
    #[arg(long = "co2-per-gram")]
    co2_per_gram: Option<f64>,

    /// Average household annual emissions in tons CO₂
    #[arg(long, default_value_t = DEFAULT_HOUSEHOLD_EMISSIONS_TONS)]
    household_emissions: f64,

    /// Enable clean energy mode (wave/solar/etc powering lighting)
    #[arg(long)]
    use_clean_energy: bool,

    /// Clean energy available per reactor per year (kWh)
    #[arg(long, default_value_t = 0.0)]
    clean_kwh_per_year: f64,

    /// Fraction (0–1) of clean kWh used for LEDs (rest assumed for
    /// pumps/mixing)
    #[arg(long, default_value_t = 0.0)]
    lighting_fraction: f64,

    /// Extra CO₂ captured (kg) per kWh used on lighting
    #[arg(long, default_value_t = DEFAULT_EXTRA_CO2_PER_KWH)]
    extra_co2_per_kwh: f64,

    /// Enable fuel mode: convert biomass into fuel and estimate avoided CO₂
    #[arg(long)]
    use_fuel: bool,

    /// Fraction of biomass that is lipid/oil (0–1)
    #[arg(long, default_value_t = 0.30)]
    lipid_fraction: f64,

    /// Fraction of lipids converted into usable fuel (0–1)
    #[arg(long, default_value_t = 0.80)]
    fuel_conversion_efficiency: f64,

    /// Fuel density in kg/L (0.88 for biodiesel)
    #[arg(long, default_value_t = 0.88)]
    fuel_density_kg_per_l: f64,

    /// CO₂ emitted by burning 1 L of fossil diesel (kg CO₂/L)
    #[arg(long, default_value_t = 2.6)]
    fossil_co2_per_liter: f64,

    /// kWh of processing energy needed per liter of algal fuel
    #[arg(long, default_value_t = 0.0)]
    process_energy_kwh_per_liter: f64,

    /// CO₂ intensity of processing energy (kg CO₂/kWh, 0.0 for clean power)
    #[arg(long, default_value_t = 0.0)]
    process_co2_kg_per_kwh: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenarioArg {
    #[value(name = "conservative_small")]
    ConservativeSmall,
    #[value(name = "realistic_medium")]
    RealisticMedium,
    #[value(name = "optimized_large")]
    OptimizedLarge,
}

impl ScenarioArg {
    fn params(self) -> ReactorParams {
        match self {
            ScenarioArg::ConservativeSmall => scenarios::conservative_small(),
            ScenarioArg::RealisticMedium => scenarios::realistic_medium(),
            ScenarioArg::OptimizedLarge => scenarios::optimized_large(),
        }
    }
}

fn build_reactor_params(cli: &Cli) -> ReactorParams {
    // Scenario supplies the baseline; individual flags win over it.
    // Without a scenario, unsupplied fields fall back to the stock defaults.
    let base = match cli.scenario {
        Some(scenario) => scenario.params(),
        None => ReactorParams::default(),
    };
    ReactorParams {
        area_m2: cli.area_m2.unwrap_or(base.area_m2),
        productivity_g_m2_day: cli.productivity.unwrap_or(base.productivity_g_m2_day),
        co2_per_biomass: cli.co2_per_gram.unwrap_or(base.co2_per_biomass),
        uptime_fraction: cli.uptime.unwrap_or(base.uptime_fraction),
    }
}

fn build_energy_params(cli: &Cli) -> EnergyParams {
    EnergyParams {
        clean_kwh_per_year: cli.clean_kwh_per_year,
        lighting_fraction: cli.lighting_fraction,
    }
}

fn build_fuel_params(cli: &Cli) -> FuelParams {
    FuelParams {
        lipid_fraction: cli.lipid_fraction,
        conversion_efficiency: cli.fuel_conversion_efficiency,
        fuel_density_kg_per_l: cli.fuel_density_kg_per_l,
        co2_kg_per_liter_fossil: cli.fossil_co2_per_liter,
        process_energy_kwh_per_liter: cli.process_energy_kwh_per_liter,
        process_co2_kg_per_kwh: cli.process_co2_kg_per_kwh,
    }
}

fn main() {
    let cli = Cli::parse();
    let params = build_reactor_params(&cli);

    report::print_base_report(&params, cli.households, cli.household_emissions);

    // The fuel chain consumes the boosted capture figure when clean energy
    // is enabled, otherwise the sunlight-only figure.
    let mut per_reactor_co2_kg = annual_co2_kg(&params);

    if cli.use_clean_energy {
        let energy = build_energy_params(&cli);
        report::print_clean_energy_report(
            &params,
            &energy,
            cli.households,
            cli.extra_co2_per_kwh,
        );
        per_reactor_co2_kg =
            annual_co2_kg_with_clean_energy(&params, &energy, cli.extra_co2_per_kwh);
    }

    if cli.use_fuel {
        let fuel_params = build_fuel_params(&cli);
        let result = fuel_and_climate_effect_for_reactor(
            per_reactor_co2_kg,
            &fuel_params,
            DEFAULT_CO2_PER_KG_BIOMASS,
        );
        report::print_fuel_report(&result, &fuel_params, cli.households);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("algae-bioengine").chain(args.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn test_defaults_without_scenario() {
        let params = build_reactor_params(&cli(&[]));
        assert_eq!(params.area_m2, 4.0);
        assert_eq!(params.productivity_g_m2_day, 20.0);
        assert_eq!(params.co2_per_biomass, 1.8);
        assert_eq!(params.uptime_fraction, 0.7);
    }

    #[test]
    fn test_scenario_preset() {
        let params = build_reactor_params(&cli(&["--scenario", "optimized_large"]));
        assert_eq!(params.area_m2, 8.0);
        assert_eq!(params.productivity_g_m2_day, 27.0);
        assert_eq!(params.uptime_fraction, 0.85);
    }

    #[test]
    fn test_flag_overrides_scenario_field() {
        let params = build_reactor_params(&cli(&[
            "--scenario",
            "conservative_small",
            "--area-m2",
            "6.5",
        ]));
        assert_eq!(params.area_m2, 6.5);
        // untouched fields keep the preset values
        assert_eq!(params.productivity_g_m2_day, 10.0);
        assert_eq!(params.uptime_fraction, 0.7);
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let result = Cli::try_parse_from(["algae-bioengine", "--scenario", "galactic_huge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let result = Cli::try_parse_from(["algae-bioengine", "--area-m2", "four"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fuel_params_from_flags() {
        let fuel = build_fuel_params(&cli(&[
            "--use-fuel",
            "--lipid-fraction",
            "0.25",
            "--fossil-co2-per-liter",
            "2.9",
        ]));
        assert_eq!(fuel.lipid_fraction, 0.25);
        assert_eq!(fuel.conversion_efficiency, 0.80);
        assert_eq!(fuel.co2_kg_per_liter_fossil, 2.9);
    }
}
