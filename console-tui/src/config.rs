//! Console preferences and platform settings, stored through the
//! [`SettingsProvider`].

use std::time::Duration;

use console_lib::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

use crate::settings::{Setting, SettingsError, SettingsProvider};

/// Preferences for the console itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Rows per page on list pages.
    pub page_size: usize,
    pub sidebar_collapsed: bool,
    /// Interval between ticks that expire toasts.
    pub tick_rate_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sidebar_collapsed: false,
            tick_rate_ms: 250,
        }
    }
}

impl Setting for ConsoleConfig {
    const KEY: &'static str = "console.config";
}

impl ConsoleConfig {
    pub async fn load(provider: &SettingsProvider) -> Result<Self, SettingsError> {
        let config: Self = provider.load().await?;
        log::debug!("Loaded console config: {:?}", config);
        Ok(config)
    }

    pub async fn save(&self, provider: &SettingsProvider) -> Result<(), SettingsError> {
        provider.store(self).await
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Page size with zero treated as one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

pub const TIMEZONES: &[(&str, &str)] = &[
    ("asia-kolkata", "Asia/Kolkata (IST)"),
    ("utc", "UTC"),
    ("america-new-york", "America/New_York (EST)"),
];

pub const CURRENCIES: &[(&str, &str)] = &[("inr", "INR (₹)"), ("usd", "USD ($)"), ("eur", "EUR (€)")];

pub const BACKUP_TIMES: &[(&str, &str)] = &[
    ("00:00", "12:00 AM"),
    ("02:00", "2:00 AM"),
    ("04:00", "4:00 AM"),
];

pub const BACKUP_RETENTION_DAYS: &[u32] = &[7, 14, 30, 90];
pub const SESSION_TIMEOUT_MINUTES: &[u32] = &[30, 60, 120, 480];
pub const AUDIT_RETENTION_DAYS: &[u32] = &[30, 90, 180, 365];
pub const MESSAGE_RETENTION_DAYS: &[u32] = &[30, 90, 180];
pub const WEBHOOK_RETENTION_DAYS: &[u32] = &[7, 14, 30];

/// Platform-wide policies edited on the Settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSettings {
    pub platform_name: String,
    pub support_email: String,
    pub timezone: String,
    pub currency: String,
    pub auto_backup: bool,
    pub backup_time: String,
    pub backup_retention_days: u32,
    pub mfa_required: bool,
    pub session_timeout_minutes: u32,
    pub ip_allowlist: bool,
    pub audit_retention_days: u32,
    pub message_retention_days: u32,
    pub webhook_retention_days: u32,
    pub webhook_alerts: bool,
    pub queue_alerts: bool,
    pub new_tenant_alerts: bool,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            platform_name: "BizGrow360".into(),
            support_email: "support@bizgrow360.com".into(),
            timezone: "asia-kolkata".into(),
            currency: "inr".into(),
            auto_backup: true,
            backup_time: "02:00".into(),
            backup_retention_days: 30,
            mfa_required: true,
            session_timeout_minutes: 60,
            ip_allowlist: false,
            audit_retention_days: 90,
            message_retention_days: 90,
            webhook_retention_days: 30,
            webhook_alerts: true,
            queue_alerts: true,
            new_tenant_alerts: true,
        }
    }
}

impl Setting for PlatformSettings {
    const KEY: &'static str = "platform.settings";
}

impl PlatformSettings {
    pub async fn load(provider: &SettingsProvider) -> Result<Self, SettingsError> {
        provider.load().await
    }

    pub async fn save(&self, provider: &SettingsProvider) -> Result<(), SettingsError> {
        log::info!("Saving platform settings");
        provider.store(self).await
    }
}

/// Human label for a minutes value ("30 minutes", "1 hour", "8 hours").
pub fn minutes_label(minutes: u32) -> String {
    match minutes {
        60 => "1 hour".to_string(),
        m if m % 60 == 0 => format!("{} hours", m / 60),
        m => format!("{} minutes", m),
    }
}

/// Human label for a day count ("30 days", "1 year").
pub fn days_label(days: u32) -> String {
    match days {
        365 => "1 year".to_string(),
        d => format!("{} days", d),
    }
}

/// Label for a coded option, falling back to the code itself.
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// The option after (or before) `current`, wrapping. Unknown values restart
/// at the first option.
pub fn cycle<T: PartialEq + Clone>(options: &[T], current: &T, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    options.get(next).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(minutes_label(30), "30 minutes");
        assert_eq!(minutes_label(60), "1 hour");
        assert_eq!(minutes_label(480), "8 hours");
        assert_eq!(days_label(365), "1 year");
        assert_eq!(days_label(14), "14 days");
        assert_eq!(option_label(TIMEZONES, "utc"), "UTC");
        assert_eq!(option_label(TIMEZONES, "mars"), "mars");
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(SESSION_TIMEOUT_MINUTES, &480, true), Some(30));
        assert_eq!(cycle(SESSION_TIMEOUT_MINUTES, &30, false), Some(480));
        assert_eq!(cycle(SESSION_TIMEOUT_MINUTES, &45, true), Some(30));
        assert_eq!(cycle::<u32>(&[], &1, true), None);
    }
}
