//! Global extrapolation calculator.
//!
//! Projects a single per-event rate across an assumed worldwide population
//! of active users. The user count is expressed in millions.

use crate::comparisons::ComparisonBundle;
use crate::tiers::{
    rate_for_prompt_length, text_length, trend_image_rate, ResourceRate, ResourceTotals,
};

/// Default assumed active users, in millions.
pub const DEFAULT_GLOBAL_USERS_MILLIONS: u32 = 500;

const USERS_PER_MILLION: f64 = 1_000_000.0;

/// Where the projected per-event rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionSource {
    /// The free-text prompt typed by the user, five-tier model.
    RealPrompt,
    /// The fixed trend-image rate.
    TrendImage,
}

/// A world-scale projection and its comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalReport {
    pub source: ProjectionSource,
    pub per_event: ResourceRate,
    pub users_millions: u32,
    pub total: ResourceTotals,
    pub comparisons: ComparisonBundle,
}

impl GlobalReport {
    pub fn compute(source: ProjectionSource, per_event: ResourceRate, users_millions: u32) -> Self {
        let total = project(per_event, users_millions);
        GlobalReport {
            source,
            per_event,
            users_millions,
            total,
            comparisons: ComparisonBundle::from_totals(&total),
        }
    }
}

/// `rate × users_millions × 1,000,000`, one event per user.
pub fn project(rate: ResourceRate, users_millions: u32) -> ResourceTotals {
    rate.times(users_millions as f64).scaled(USERS_PER_MILLION)
}

pub fn real_prompt_report(text: &str, users_millions: u32) -> GlobalReport {
    GlobalReport::compute(
        ProjectionSource::RealPrompt,
        rate_for_prompt_length(text_length(text)),
        users_millions,
    )
}

pub fn trend_image_report(users_millions: u32) -> GlobalReport {
    GlobalReport::compute(ProjectionSource::TrendImage, trend_image_rate(), users_millions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_prompt_scenario() {
        let text = "a".repeat(600);
        let report = real_prompt_report(&text, DEFAULT_GLOBAL_USERS_MILLIONS);

        assert_eq!(report.source, ProjectionSource::RealPrompt);
        assert_eq!(report.per_event, ResourceRate::new(2.0, 0.015));
        assert_eq!(report.total.water_liters, 1_000_000_000.0);
        assert_eq!(report.comparisons.olympic_pools, 400.0);
        assert!((report.total.energy_kwh - 7_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_trend_image_scenario() {
        let report = trend_image_report(500);

        assert_eq!(report.source, ProjectionSource::TrendImage);
        assert_eq!(report.total.water_liters, 25_000_000_000.0);
        assert_eq!(report.total.energy_kwh, 250_000_000.0);
        assert_eq!(report.comparisons.olympic_pools, 10_000.0);
        assert_eq!(report.comparisons.co2_kg, 125_000_000.0);
    }

    #[test]
    fn test_project_scaling() {
        let rate = ResourceRate::new(0.5, 0.003);
        let total = project(rate, 500);
        assert_eq!(total.water_liters, 0.5 * 500.0 * 1_000_000.0);
        assert_eq!(total.energy_kwh, 0.003 * 500.0 * 1_000_000.0);
    }

    #[test]
    fn test_doubling_users_doubles_total() {
        for rate in [
            ResourceRate::new(0.2, 0.001),
            ResourceRate::new(3.0, 0.025),
            trend_image_rate(),
        ] {
            let single = project(rate, 250);
            let double = project(rate, 500);
            assert_eq!(double.water_liters, single.water_liters * 2.0);
            assert_eq!(double.energy_kwh, single.energy_kwh * 2.0);
        }
    }

    #[test]
    fn test_empty_prompt_projects_zero() {
        let report = real_prompt_report("", 500);
        assert_eq!(report.total, ResourceTotals::ZERO);
        assert_eq!(report.comparisons.trees_needed, 0.0);
    }

    #[test]
    fn test_zero_users_projects_zero() {
        let report = trend_image_report(0);
        assert_eq!(report.total, ResourceTotals::ZERO);
    }

    #[test]
    fn test_long_prompt_uses_extended_tier() {
        let text = "x".repeat(1001);
        let report = real_prompt_report(&text, 1);
        assert_eq!(report.per_event, ResourceRate::new(3.0, 0.025));
        assert_eq!(report.total.water_liters, 3_000_000.0);
    }
}
