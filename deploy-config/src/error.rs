//! Structured validation errors for deployment configuration.
//!
//! Every failure is detected at construction time and surfaced to the
//! caller; nothing here retries or degrades. Where a config has several
//! independent fields (the core security parameters), violations are
//! accumulated into a [`ConfigErrors`] report so operators see the whole
//! problem list at once instead of fixing fields one run at a time.

use std::fmt;

use lattice_domains::InvalidTagError;
use thiserror::Error;

use crate::InvalidAddressError;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A mandatory field is absent or empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// An address string failed format validation.
    #[error("invalid address for {field}: {source}")]
    InvalidAddress {
        field: &'static str,
        source: InvalidAddressError,
    },

    /// A timelock or delay is negative.
    #[error("invalid duration for {field}: {value}s")]
    InvalidDuration { field: &'static str, value: i64 },

    /// The watcher set contains a repeated address. Silently deduplicating
    /// would mask operator error, so this is fatal.
    #[error("duplicate watcher: {address}")]
    DuplicateWatcher { address: crate::Address },

    /// A gas budget is zero or negative where positivity is required.
    #[error("invalid gas budget for {field}: {value}")]
    InvalidGasBudget { field: &'static str, value: i64 },

    /// The chain's domain tag could not be encoded.
    #[error("invalid domain tag: {0}")]
    InvalidDomainTag(#[from] InvalidTagError),

    /// A value is permitted by the base rules but rejected by the active
    /// validation policy (e.g. an empty watcher set in prod).
    #[error("policy violation for {field}: {reason}")]
    PolicyViolation { field: &'static str, reason: String },
}

/// One or more validation failures, reported together.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<ConfigError> {
        self.0
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration error(s): ", self.0.len())?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{e}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl From<ConfigError> for ConfigErrors {
    fn from(e: ConfigError) -> Self {
        ConfigErrors(vec![e])
    }
}

/// Collects violations during a validation pass. Internal to the builders;
/// converts into a `Result` once every rule has run.
#[derive(Debug, Default)]
pub(crate) struct ErrorList(Vec<ConfigError>);

impl ErrorList {
    pub(crate) fn push(&mut self, e: ConfigError) {
        self.0.push(e);
    }

    /// `Ok(value)` if no violations were recorded, otherwise every recorded
    /// violation, in rule order.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ConfigErrors> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ConfigErrors(self.0))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_joins_all_errors() {
        let errors: ConfigErrors = {
            let mut list = ErrorList::default();
            list.push(ConfigError::MissingRequiredField { field: "updater" });
            list.push(ConfigError::InvalidDuration {
                field: "recovery_timelock",
                value: -1,
            });
            list.finish(()).unwrap_err()
        };

        let report = errors.to_string();
        assert!(report.starts_with("2 configuration error(s): "));
        assert!(report.contains("missing required field: updater"));
        assert!(report.contains("invalid duration for recovery_timelock: -1s"));
    }

    #[test]
    fn empty_list_finishes_ok() {
        let list = ErrorList::default();
        assert_eq!(list.finish(7), Ok(7));
    }
}
