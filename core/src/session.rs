//! Calculator session: the single owner of the current input state.
//!
//! Mutators replace one input field; accessors recompute their result from
//! the current state on every call, so a reader never observes a partially
//! updated derivation.
//!
//! # Example
//!
//! ```
//! use footprint_compute::{CalculatorSession, ImageQuality};
//!
//! let session = CalculatorSession::with_defaults();
//! session.set_prompt_length(100);
//! session.set_prompts_per_day(10);
//! session.set_image_quality(ImageQuality::Medium);
//! session.set_images_per_day(0);
//!
//! let report = session.usage_report();
//! assert!((report.combined.yearly.water_liters - 1825.0).abs() < 1e-9);
//!
//! session.set_real_prompt_text("a".repeat(600));
//! let global = session.real_prompt_report();
//! assert_eq!(global.comparisons.olympic_pools, 400.0);
//! ```

use std::sync::{Mutex, MutexGuard};

use crate::calculator::{ChannelTotals, Horizon, UsageProfile, UsageReport};
use crate::error::InputError;
use crate::facts::{self, CityId, DatacenterCity};
use crate::format::{self, NumberLocale};
use crate::global::{self, GlobalReport, DEFAULT_GLOBAL_USERS_MILLIONS};
use crate::tiers::{text_length, ImageQuality, PromptTier, ResourceTotals};

/// Session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub locale: NumberLocale,
    /// Assumed active users worldwide, in millions.
    pub global_users_millions: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            global_users_millions: DEFAULT_GLOBAL_USERS_MILLIONS,
        }
    }
}

#[derive(Debug, Clone)]
struct SessionState {
    profile: UsageProfile,
    global_users_millions: u32,
    selected_city: Option<CityId>,
}

#[derive(Debug)]
pub struct CalculatorSession {
    locale: NumberLocale,
    state: Mutex<SessionState>,
}

impl CalculatorSession {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            locale: settings.locale,
            state: Mutex::new(SessionState {
                profile: UsageProfile::default(),
                global_users_millions: settings.global_users_millions,
                selected_city: None,
            }),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineSettings::default())
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // Mutations are single field writes; poisoned state is still whole.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // Mutators

    pub fn set_prompt_length(&self, length: u32) {
        tracing::debug!(
            length,
            tier = PromptTier::classify_capped(length).label(),
            "prompt length updated"
        );
        self.state().profile.prompt_length = length;
    }

    pub fn set_prompts_per_day(&self, count: u32) {
        tracing::debug!(count, "prompts per day updated");
        self.state().profile.prompts_per_day = count;
    }

    pub fn set_image_quality(&self, quality: ImageQuality) {
        tracing::debug!(quality = quality.label(), "image quality updated");
        self.state().profile.image_quality = quality;
    }

    pub fn set_images_per_day(&self, count: u32) {
        tracing::debug!(count, "images per day updated");
        self.state().profile.images_per_day = count;
    }

    pub fn set_real_prompt_text(&self, text: String) {
        let length = text_length(&text);
        tracing::debug!(
            length,
            tier = PromptTier::classify(length).label(),
            "real prompt updated"
        );
        self.state().profile.real_prompt_text = text;
    }

    pub fn set_global_user_count(&self, users_millions: u32) {
        tracing::debug!(users_millions, "global user count updated");
        self.state().global_users_millions = users_millions;
    }

    pub fn set_trend_image_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "trend image toggled");
        self.state().profile.trend_image_enabled = enabled;
    }

    // Accessors

    pub fn profile(&self) -> UsageProfile {
        self.state().profile.clone()
    }

    pub fn global_user_count(&self) -> u32 {
        self.state().global_users_millions
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn usage_report(&self) -> UsageReport {
        UsageReport::compute(&self.state().profile)
    }

    pub fn prompt_totals(&self) -> ChannelTotals {
        self.usage_report().prompts
    }

    pub fn image_totals(&self) -> ChannelTotals {
        self.usage_report().images
    }

    pub fn combined_totals_at(&self, horizon: Horizon) -> ResourceTotals {
        self.usage_report().combined_at(horizon)
    }

    pub fn real_prompt_length(&self) -> u32 {
        text_length(&self.state().profile.real_prompt_text)
    }

    pub fn real_prompt_report(&self) -> GlobalReport {
        let state = self.state();
        global::real_prompt_report(&state.profile.real_prompt_text, state.global_users_millions)
    }

    pub fn trend_image_report(&self) -> GlobalReport {
        global::trend_image_report(self.state().global_users_millions)
    }

    /// Trend-image projection while the toggle is on, real prompt otherwise.
    pub fn active_report(&self) -> GlobalReport {
        let state = self.state();
        if state.profile.trend_image_enabled {
            global::trend_image_report(state.global_users_millions)
        } else {
            global::real_prompt_report(&state.profile.real_prompt_text, state.global_users_millions)
        }
    }

    // Catalogue selection

    pub fn select_city(&self, id: &str) -> Result<DatacenterCity, InputError> {
        let city = facts::find_city(id)?;
        tracing::debug!(city = id, "city selected");
        self.state().selected_city = Some(CityId(city.id.clone()));
        Ok(city)
    }

    pub fn clear_selection(&self) {
        self.state().selected_city = None;
    }

    pub fn selected_city(&self) -> Option<DatacenterCity> {
        let selected = self.state().selected_city.clone()?;
        facts::find_city(&selected.0).ok()
    }

    // Formatting with the session locale

    pub fn format_large(&self, value: f64) -> String {
        format::format_large_number(value, self.locale)
    }

    pub fn format_grouped(&self, value: f64) -> String {
        format::format_with_separator(value, self.locale)
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}
