//! Comparison metric derivations.
//!
//! Fixed-ratio conversions from raw water/energy totals to everyday units.
//! Every divisor is a non-zero constant, so none of these can fail.

use crate::tiers::ResourceTotals;

/// Volume of an Olympic swimming pool (L).
pub const OLYMPIC_POOL_LITERS: f64 = 2_500_000.0;

/// Average household electricity use per year (kWh).
pub const HOUSE_KWH_PER_YEAR: f64 = 3_500.0;

/// Grid emission factor (kg CO2 per kWh).
pub const CO2_KG_PER_KWH: f64 = 0.5;

/// CO2 absorbed by one tree per year (kg).
pub const TREE_CO2_KG_PER_YEAR: f64 = 22.0;

/// Energy to fully charge a smartphone (kWh).
pub const PHONE_CHARGE_KWH: f64 = 0.012;

/// Electric car consumption (kWh per km).
pub const EV_KWH_PER_KM: f64 = 0.2;

/// CO2 of one New York to Los Angeles flight (kg).
pub const FLIGHT_NY_LA_CO2_KG: f64 = 900.0;

/// Water used by one shower (L).
pub const SHOWER_LITERS: f64 = 50.0;

pub fn olympic_pools(water_liters: f64) -> f64 {
    water_liters / OLYMPIC_POOL_LITERS
}

pub fn houses_powered_per_year(energy_kwh: f64) -> f64 {
    energy_kwh / HOUSE_KWH_PER_YEAR
}

pub fn co2_kg(energy_kwh: f64) -> f64 {
    energy_kwh * CO2_KG_PER_KWH
}

pub fn trees_needed(co2_kg: f64) -> f64 {
    co2_kg / TREE_CO2_KG_PER_YEAR
}

pub fn phone_charges(energy_kwh: f64) -> f64 {
    energy_kwh / PHONE_CHARGE_KWH
}

pub fn driving_km(energy_kwh: f64) -> f64 {
    energy_kwh / EV_KWH_PER_KM
}

pub fn flights_equivalent(co2_kg: f64) -> f64 {
    co2_kg / FLIGHT_NY_LA_CO2_KG
}

pub fn showers_equivalent(water_liters: f64) -> f64 {
    water_liters / SHOWER_LITERS
}

/// Every comparison metric for one water/energy total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonBundle {
    pub olympic_pools: f64,
    pub houses_powered_per_year: f64,
    /// Kilograms of CO2, not tonnes.
    pub co2_kg: f64,
    pub trees_needed: f64,
    pub phone_charges: f64,
    pub driving_km: f64,
    pub flights_equivalent: f64,
    pub showers_equivalent: f64,
}

impl ComparisonBundle {
    pub fn from_totals(totals: &ResourceTotals) -> Self {
        let co2 = co2_kg(totals.energy_kwh);
        ComparisonBundle {
            olympic_pools: olympic_pools(totals.water_liters),
            houses_powered_per_year: houses_powered_per_year(totals.energy_kwh),
            co2_kg: co2,
            trees_needed: trees_needed(co2),
            phone_charges: phone_charges(totals.energy_kwh),
            driving_km: driving_km(totals.energy_kwh),
            flights_equivalent: flights_equivalent(co2),
            showers_equivalent: showers_equivalent(totals.water_liters),
        }
    }
}

/// FFI entry point for [`ComparisonBundle::from_totals`].
pub fn compare_totals(totals: &ResourceTotals) -> ComparisonBundle {
    ComparisonBundle::from_totals(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_totals() {
        let bundle = ComparisonBundle::from_totals(&ResourceTotals::ZERO);
        assert_eq!(bundle.olympic_pools, 0.0);
        assert_eq!(bundle.houses_powered_per_year, 0.0);
        assert_eq!(bundle.co2_kg, 0.0);
        assert_eq!(bundle.trees_needed, 0.0);
        assert_eq!(bundle.phone_charges, 0.0);
        assert_eq!(bundle.driving_km, 0.0);
        assert_eq!(bundle.flights_equivalent, 0.0);
        assert_eq!(bundle.showers_equivalent, 0.0);
    }

    #[test]
    fn test_co2_is_in_kilograms() {
        let bundle = ComparisonBundle::from_totals(&ResourceTotals {
            water_liters: 0.0,
            energy_kwh: 1_000.0,
        });
        assert_eq!(bundle.co2_kg, 500.0);
        assert_eq!(bundle.trees_needed, 500.0 / 22.0);
    }

    #[test]
    fn test_ratios() {
        assert_eq!(olympic_pools(1_000_000_000.0), 400.0);
        assert_eq!(houses_powered_per_year(7_000.0), 2.0);
        assert_eq!(co2_kg(10.0), 5.0);
        assert_eq!(trees_needed(44.0), 2.0);
        assert_eq!(driving_km(10.0), 50.0);
        assert_eq!(flights_equivalent(1_800.0), 2.0);
        assert_eq!(showers_equivalent(1_825.0), 36.5);
        assert!((phone_charges(1.2) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_bundle_chains_co2() {
        let totals = ResourceTotals {
            water_liters: 25_000_000_000.0,
            energy_kwh: 250_000_000.0,
        };
        let bundle = ComparisonBundle::from_totals(&totals);

        assert_eq!(bundle.olympic_pools, 10_000.0);
        assert_eq!(bundle.co2_kg, 125_000_000.0);
        assert_eq!(bundle.trees_needed, bundle.co2_kg / 22.0);
        assert_eq!(bundle.flights_equivalent, bundle.co2_kg / 900.0);
        assert!((bundle.houses_powered_per_year - 71_428.571_428).abs() < 1e-3);
    }

    #[test]
    fn test_compare_totals_matches_bundle() {
        let totals = ResourceTotals {
            water_liters: 9_125.0,
            energy_kwh: 83.95,
        };
        assert_eq!(compare_totals(&totals), ComparisonBundle::from_totals(&totals));
    }
}
