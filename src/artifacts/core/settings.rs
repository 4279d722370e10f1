//! Environment-driven settings
//!
//! Read once at startup:
//!
//! - `GITLET_COMMIT_DATE`: timestamp for new commits (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`)
//! - `NO_PAGER`: disables the pager for history listings

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local};
use derive_new::new;
use is_terminal::IsTerminal;

pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";
pub const NO_PAGER_ENV: &str = "NO_PAGER";

const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Settings {
    /// Pinned timestamp for new commits; the wall clock is used when absent
    commit_date: Option<DateTime<FixedOffset>>,
    /// Whether long output goes through the pager
    pager: bool,
}

impl Settings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var(COMMIT_DATE_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(Self::parse_commit_date(&value)?),
            _ => None,
        };
        let pager = std::env::var_os(NO_PAGER_ENV).is_none() && std::io::stdout().is_terminal();

        Ok(Settings { commit_date, pager })
    }

    fn parse_commit_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let value = value.trim();

        DateTime::parse_from_rfc2822(value)
            .or_else(|_| DateTime::parse_from_str(value, COMMIT_DATE_FORMAT))
            .with_context(|| format!("Invalid {} value: {}", COMMIT_DATE_ENV, value))
    }

    /// Timestamp for a commit created now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    pub fn use_pager(&self) -> bool {
        self.pager
    }
}
