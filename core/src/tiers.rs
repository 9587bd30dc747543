//! Tiered cost model.
//!
//! Maps a scalar magnitude (prompt length in characters, or a discrete image
//! quality level) to the water and energy cost of one unit of activity.
//! All coefficients are fixed illustrative constants.
//!
//! Two prompt tiering schemes coexist: the free-text calculator uses five
//! tiers (with a separate tier above 1000 characters), while the usage-profile
//! calculator caps at four. They are kept as separate functions because each
//! calculator flow depends on its own table.

/// Cost of one unit of activity (one prompt, one image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceRate {
    pub water_liters_per_event: f64,
    pub energy_kwh_per_event: f64,
}

impl ResourceRate {
    pub const ZERO: ResourceRate = ResourceRate::new(0.0, 0.0);

    pub const fn new(water_liters_per_event: f64, energy_kwh_per_event: f64) -> Self {
        Self {
            water_liters_per_event,
            energy_kwh_per_event,
        }
    }

    /// Totals for `events` occurrences of this activity.
    pub fn times(&self, events: f64) -> ResourceTotals {
        ResourceTotals {
            water_liters: self.water_liters_per_event * events,
            energy_kwh: self.energy_kwh_per_event * events,
        }
    }
}

/// Water and energy accumulated over some horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceTotals {
    pub water_liters: f64,
    pub energy_kwh: f64,
}

impl ResourceTotals {
    pub const ZERO: ResourceTotals = ResourceTotals {
        water_liters: 0.0,
        energy_kwh: 0.0,
    };

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            water_liters: self.water_liters * factor,
            energy_kwh: self.energy_kwh * factor,
        }
    }
}

impl std::ops::Add for ResourceTotals {
    type Output = ResourceTotals;

    fn add(self, rhs: Self) -> Self::Output {
        ResourceTotals {
            water_liters: self.water_liters + rhs.water_liters,
            energy_kwh: self.energy_kwh + rhs.energy_kwh,
        }
    }
}

/// Trend images analyse user photos and iterate before the final result,
/// costing roughly 5-10x a standard generation.
const TREND_IMAGE_RATE: ResourceRate = ResourceRate::new(50.0, 0.5);

/// Classification of prompt length ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PromptTier {
    /// 0 characters
    Empty,
    /// 1-50 characters
    Short,
    /// 51-200 characters
    Medium,
    /// 201-500 characters
    Long,
    /// 501-1000 characters (anything above 500 in the capped scheme)
    VeryLong,
    /// 1000+ characters
    Extended,
}

impl PromptTier {
    /// Five-tier classification used for free-text prompts.
    pub fn classify(length: u32) -> Self {
        match length {
            0 => PromptTier::Empty,
            1..=50 => PromptTier::Short,
            51..=200 => PromptTier::Medium,
            201..=500 => PromptTier::Long,
            501..=1000 => PromptTier::VeryLong,
            _ => PromptTier::Extended,
        }
    }

    /// Four-tier classification used by the usage-profile calculator.
    /// Everything above 500 characters lands in `VeryLong`.
    pub fn classify_capped(length: u32) -> Self {
        match Self::classify(length) {
            PromptTier::Extended => PromptTier::VeryLong,
            tier => tier,
        }
    }

    pub fn rate(&self) -> ResourceRate {
        match self {
            PromptTier::Empty => ResourceRate::ZERO,
            PromptTier::Short => ResourceRate::new(0.2, 0.001),
            PromptTier::Medium => ResourceRate::new(0.5, 0.003),
            PromptTier::Long => ResourceRate::new(1.0, 0.007),
            PromptTier::VeryLong => ResourceRate::new(2.0, 0.015),
            PromptTier::Extended => ResourceRate::new(3.0, 0.025),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptTier::Empty => "Empty",
            PromptTier::Short => "Short",
            PromptTier::Medium => "Medium",
            PromptTier::Long => "Long",
            PromptTier::VeryLong => "Very Long",
            PromptTier::Extended => "Extended",
        }
    }
}

/// Image generation quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageQuality {
    Low,
    Medium,
    High,
}

impl ImageQuality {
    pub const ALL: [ImageQuality; 3] = [
        ImageQuality::Low,
        ImageQuality::Medium,
        ImageQuality::High,
    ];

    pub fn rate(&self) -> ResourceRate {
        match self {
            ImageQuality::Low => ResourceRate::new(2.0, 0.02),
            ImageQuality::Medium => ResourceRate::new(4.0, 0.04),
            ImageQuality::High => ResourceRate::new(8.0, 0.08),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageQuality::Low => "low",
            ImageQuality::Medium => "medium",
            ImageQuality::High => "high",
        }
    }
}

/// Per-prompt rate for free text, five tiers.
pub fn rate_for_prompt_length(length: u32) -> ResourceRate {
    PromptTier::classify(length).rate()
}

/// Per-prompt rate for the usage-profile calculator, four tiers.
pub fn rate_for_prompt_length_capped(length: u32) -> ResourceRate {
    PromptTier::classify_capped(length).rate()
}

pub fn rate_for_image_quality(quality: ImageQuality) -> ResourceRate {
    quality.rate()
}

pub fn trend_image_rate() -> ResourceRate {
    TREND_IMAGE_RATE
}

/// Length of free text as the UI measures it: UTF-16 code units.
pub fn text_length(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_is_free() {
        assert_eq!(rate_for_prompt_length(0), ResourceRate::ZERO);
        assert_eq!(rate_for_prompt_length_capped(0), ResourceRate::ZERO);
    }

    #[test]
    fn test_short_tier() {
        for length in 1..=50 {
            assert_eq!(rate_for_prompt_length(length), ResourceRate::new(0.2, 0.001));
            assert_eq!(
                rate_for_prompt_length_capped(length),
                ResourceRate::new(0.2, 0.001)
            );
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PromptTier::classify(50), PromptTier::Short);
        assert_eq!(PromptTier::classify(51), PromptTier::Medium);
        assert_eq!(PromptTier::classify(200), PromptTier::Medium);
        assert_eq!(PromptTier::classify(201), PromptTier::Long);
        assert_eq!(PromptTier::classify(500), PromptTier::Long);
        assert_eq!(PromptTier::classify(501), PromptTier::VeryLong);
        assert_eq!(PromptTier::classify(1000), PromptTier::VeryLong);
        assert_eq!(PromptTier::classify(1001), PromptTier::Extended);
        assert_ne!(rate_for_prompt_length(50), rate_for_prompt_length(51));
    }

    #[test]
    fn test_capped_scheme_has_no_extended_tier() {
        assert_eq!(PromptTier::classify_capped(1001), PromptTier::VeryLong);
        assert_eq!(PromptTier::classify_capped(u32::MAX), PromptTier::VeryLong);
        assert_eq!(
            rate_for_prompt_length_capped(5000),
            ResourceRate::new(2.0, 0.015)
        );
        assert_eq!(rate_for_prompt_length(5000), ResourceRate::new(3.0, 0.025));
    }

    #[test]
    fn test_schemes_agree_up_to_1000() {
        for length in 0..=1000 {
            assert_eq!(
                rate_for_prompt_length(length),
                rate_for_prompt_length_capped(length)
            );
        }
    }

    #[test]
    fn test_prompt_rate_monotonic() {
        let mut prev = ResourceRate::ZERO;
        for length in 0..=2000 {
            let rate = rate_for_prompt_length(length);
            assert!(rate.water_liters_per_event >= prev.water_liters_per_event);
            assert!(rate.energy_kwh_per_event >= prev.energy_kwh_per_event);
            prev = rate;
        }

        let mut prev = ResourceRate::ZERO;
        for length in 0..=2000 {
            let rate = rate_for_prompt_length_capped(length);
            assert!(rate.water_liters_per_event >= prev.water_liters_per_event);
            assert!(rate.energy_kwh_per_event >= prev.energy_kwh_per_event);
            prev = rate;
        }
    }

    #[test]
    fn test_image_quality_rates() {
        assert_eq!(
            rate_for_image_quality(ImageQuality::Low),
            ResourceRate::new(2.0, 0.02)
        );
        assert_eq!(
            rate_for_image_quality(ImageQuality::Medium),
            ResourceRate::new(4.0, 0.04)
        );
        assert_eq!(
            rate_for_image_quality(ImageQuality::High),
            ResourceRate::new(8.0, 0.08)
        );
    }

    #[test]
    fn test_image_quality_distinct_nonzero_and_monotonic() {
        let rates: Vec<_> = ImageQuality::ALL.iter().map(|q| q.rate()).collect();
        for rate in &rates {
            assert!(rate.water_liters_per_event > 0.0);
            assert!(rate.energy_kwh_per_event > 0.0);
        }
        for pair in rates.windows(2) {
            assert!(pair[1].water_liters_per_event > pair[0].water_liters_per_event);
            assert!(pair[1].energy_kwh_per_event > pair[0].energy_kwh_per_event);
        }
    }

    #[test]
    fn test_trend_image_rate() {
        let rate = trend_image_rate();
        assert_eq!(rate, ResourceRate::new(50.0, 0.5));

        let normal = ImageQuality::Medium.rate();
        let ratio = rate.water_liters_per_event / normal.water_liters_per_event;
        assert!(ratio > 5.0);
    }

    #[test]
    fn test_text_length_counts_utf16_units() {
        assert_eq!(text_length(""), 0);
        assert_eq!(text_length("hello"), 5);
        assert_eq!(text_length("água"), 4);
        assert_eq!(text_length("🌍"), 2);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(PromptTier::VeryLong.label(), "Very Long");
        assert_eq!(ImageQuality::High.label(), "high");
    }
}
