//! Per-query calculator.
//!
//! Pure functions from a usage profile to prompt, image and combined totals
//! over every horizon. Inputs are plain data; nothing is cached between calls.

use crate::comparisons::ComparisonBundle;
use crate::tiers::{rate_for_prompt_length_capped, ImageQuality, ResourceRate, ResourceTotals};

pub const DAYS_PER_MONTH: u32 = 30;
pub const DAYS_PER_YEAR: u32 = 365;

/// Time window over which totals are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    Event,
    Day,
    Month,
    Year,
}

impl Horizon {
    /// Number of days covered, `None` for a single event.
    pub fn days(&self) -> Option<u32> {
        match self {
            Horizon::Event => None,
            Horizon::Day => Some(1),
            Horizon::Month => Some(DAYS_PER_MONTH),
            Horizon::Year => Some(DAYS_PER_YEAR),
        }
    }
}

/// Current input state of a calculator session.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageProfile {
    pub prompt_length: u32,
    pub prompts_per_day: u32,
    pub image_quality: ImageQuality,
    pub images_per_day: u32,
    pub trend_image_enabled: bool,
    pub real_prompt_text: String,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            prompt_length: 100,
            prompts_per_day: 10,
            image_quality: ImageQuality::Medium,
            images_per_day: 5,
            trend_image_enabled: false,
            real_prompt_text: String::new(),
        }
    }
}

/// Totals for one activity channel (prompts or images).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelTotals {
    pub per_event: ResourceRate,
    pub daily: ResourceTotals,
    pub monthly: ResourceTotals,
    pub yearly: ResourceTotals,
}

impl ChannelTotals {
    /// Scale a per-event rate by a daily event count.
    pub fn compute(rate: ResourceRate, events_per_day: u32) -> Self {
        let daily = rate.times(events_per_day as f64);
        ChannelTotals {
            per_event: rate,
            daily,
            monthly: daily.scaled(DAYS_PER_MONTH as f64),
            yearly: daily.scaled(DAYS_PER_YEAR as f64),
        }
    }

    /// Totals over `horizon`: the per-event rate, or the daily totals
    /// scaled by the horizon's day count.
    pub fn at(&self, horizon: Horizon) -> ResourceTotals {
        match horizon.days() {
            None => self.per_event.times(1.0),
            Some(days) => self.daily.scaled(days as f64),
        }
    }
}

/// Prompt and image totals summed horizon by horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedTotals {
    pub daily: ResourceTotals,
    pub monthly: ResourceTotals,
    pub yearly: ResourceTotals,
}

impl CombinedTotals {
    /// Each horizon is summed independently rather than rescaled from the
    /// daily sum.
    pub fn compute(prompts: &ChannelTotals, images: &ChannelTotals) -> Self {
        CombinedTotals {
            daily: prompts.daily + images.daily,
            monthly: prompts.monthly + images.monthly,
            yearly: prompts.yearly + images.yearly,
        }
    }
}

/// Full per-query result for a usage profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageReport {
    pub prompts: ChannelTotals,
    pub images: ChannelTotals,
    pub combined: CombinedTotals,
    /// Derived from the yearly combined totals.
    pub comparisons: ComparisonBundle,
}

impl UsageReport {
    pub fn compute(profile: &UsageProfile) -> Self {
        let prompts = prompt_totals(profile);
        let images = image_totals(profile);
        let combined = CombinedTotals::compute(&prompts, &images);

        UsageReport {
            prompts,
            images,
            combined,
            comparisons: ComparisonBundle::from_totals(&combined.yearly),
        }
    }

    pub fn combined_at(&self, horizon: Horizon) -> ResourceTotals {
        match horizon {
            Horizon::Event => self.prompts.at(Horizon::Event) + self.images.at(Horizon::Event),
            Horizon::Day => self.combined.daily,
            Horizon::Month => self.combined.monthly,
            Horizon::Year => self.combined.yearly,
        }
    }
}

pub fn prompt_totals(profile: &UsageProfile) -> ChannelTotals {
    ChannelTotals::compute(
        rate_for_prompt_length_capped(profile.prompt_length),
        profile.prompts_per_day,
    )
}

pub fn image_totals(profile: &UsageProfile) -> ChannelTotals {
    ChannelTotals::compute(profile.image_quality.rate(), profile.images_per_day)
}

/// FFI entry point for [`UsageReport::compute`].
pub fn compute_usage_report(profile: &UsageProfile) -> UsageReport {
    UsageReport::compute(profile)
}
