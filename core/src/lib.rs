pub mod calculator;
pub mod comparisons;
pub mod error;
pub mod facts;
pub mod format;
pub mod global;
pub mod input;
pub mod session;
pub mod tiers;

uniffi::include_scaffolding!("footprint");

pub use calculator::{
    compute_usage_report, ChannelTotals, CombinedTotals, Horizon, UsageProfile, UsageReport,
};
pub use comparisons::{compare_totals, ComparisonBundle};
pub use error::InputError;
pub use facts::{
    affected_cities, find_city, global_stats, social_impacts, DatacenterCity, GlobalStats,
    SocialImpact,
};
pub use format::{format_large_number, format_number, format_with_separator, NumberLocale};
pub use global::{project, real_prompt_report, trend_image_report, GlobalReport, ProjectionSource};
pub use input::{clamp_count, parse_count, parse_image_quality, parse_user_count_millions};
pub use session::{CalculatorSession, EngineSettings};
pub use tiers::{
    rate_for_image_quality, rate_for_prompt_length, rate_for_prompt_length_capped, text_length,
    trend_image_rate, ImageQuality, PromptTier, ResourceRate, ResourceTotals,
};
