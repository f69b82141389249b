//! The bridge core's security and operational parameters for one chain.
//!
//! The core contracts are guarded by an updater/watcher model: a single
//! updater submits message roots, watchers may challenge a fraudulent root
//! during the optimistic window, and a recovery manager can replace a
//! compromised updater after a timelock. This module validates the full
//! parameter set before any of it reaches the deployment pipeline,
//! accumulating every violation so operators see the whole problem list in
//! one report.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, ConfigErrors, ErrorList},
    Address, Environment,
};

/// Validated security parameters for one chain's bridge core.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CoreSecurityConfig {
    /// Deployment tier. Downstream policy keys off this; it is not
    /// validated further here.
    pub environment: Environment,

    /// Entity authorized to submit message roots.
    pub updater: Address,

    /// Entity authorized to initiate and execute a recovery takeover of the
    /// updater role.
    pub recovery_manager: Address,

    /// Seconds that must elapse between a recovery request and its
    /// execution. Long enough for watchers to detect and react to a
    /// malicious recovery attempt.
    pub recovery_timelock: u64,

    /// Seconds a submitted root must wait, unchallenged, before it is
    /// final. Zero means finality is immediate upon submission.
    pub optimistic_seconds: u64,

    /// Addresses authorized to challenge fraudulent updater submissions
    /// during the optimistic window. Duplicate-free; operator order
    /// preserved.
    pub watchers: Vec<Address>,

    /// Governance address with override authority, when configured.
    pub governor: Option<Address>,

    /// Gas budget for processing one inbound message.
    pub process_gas: Option<u64>,

    /// Gas held in reserve for safety during message processing.
    pub reserve_gas: Option<u64>,
}

/// Raw, unvalidated input for a [`CoreSecurityConfig`].
///
/// Addresses arrive as strings and quantities as signed integers so that
/// malformed and negative operator input is representable here and rejected
/// by [`build`](CoreConf::build) with a structured report, rather than
/// being unrepresentable or silently clamped.
#[derive(Debug, Clone, Default)]
pub struct CoreConf {
    pub environment: Environment,
    pub updater: Option<String>,
    pub recovery_manager: Option<String>,
    pub recovery_timelock: i64,
    pub optimistic_seconds: i64,
    pub watchers: Vec<String>,
    pub governor: Option<String>,
    pub process_gas: Option<i64>,
    pub reserve_gas: Option<i64>,
}

/// What the validator tolerates beyond the hard rules.
///
/// A zero recovery timelock and an empty watcher set are permitted by the
/// base rules but leave the deployment without fraud detection or without a
/// watcher reaction window. Whether that is acceptable depends on the tier:
/// [`for_environment`](Policy::for_environment) is strict for `prod` and
/// permissive elsewhere, and callers can override either way with
/// [`CoreConf::build_with_policy`]. Permissive acceptance of a weak posture
/// is logged, never silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub allow_empty_watchers: bool,
    pub allow_zero_recovery_timelock: bool,
}

impl Policy {
    /// Accept weak-but-legal postures, with a warning.
    pub fn permissive() -> Self {
        Policy {
            allow_empty_watchers: true,
            allow_zero_recovery_timelock: true,
        }
    }

    /// Reject weak postures as [`ConfigError::PolicyViolation`]s.
    pub fn strict() -> Self {
        Policy {
            allow_empty_watchers: false,
            allow_zero_recovery_timelock: false,
        }
    }

    /// Strict for `prod`, permissive for every other tier.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Prod => Policy::strict(),
            Environment::Dev | Environment::Staging => Policy::permissive(),
        }
    }
}

impl CoreConf {
    /// Validate with the policy derived from the configured environment.
    pub fn build(self) -> Result<CoreSecurityConfig, ConfigErrors> {
        let policy = Policy::for_environment(self.environment);
        self.build_with_policy(policy)
    }

    /// Validate every rule and produce a [`CoreSecurityConfig`], or a
    /// report carrying every violated rule.
    ///
    /// Rules: updater and recovery manager present and well-formed; both
    /// durations non-negative; every watcher well-formed with no
    /// duplicates; an optional governor well-formed; `process_gas` positive
    /// and `reserve_gas` non-negative when supplied; plus whatever the
    /// `policy` adds. Pure data validation, no side effects beyond a
    /// warning log under a permissive policy.
    pub fn build_with_policy(self, policy: Policy) -> Result<CoreSecurityConfig, ConfigErrors> {
        let mut errors = ErrorList::default();

        let updater = required_address(&mut errors, "updater", self.updater.as_deref());
        let recovery_manager =
            required_address(&mut errors, "recovery_manager", self.recovery_manager.as_deref());
        let governor = optional_address(&mut errors, "governor", self.governor.as_deref());

        let recovery_timelock =
            duration(&mut errors, "recovery_timelock", self.recovery_timelock);
        let optimistic_seconds =
            duration(&mut errors, "optimistic_seconds", self.optimistic_seconds);

        let mut watchers = Vec::with_capacity(self.watchers.len());
        for raw in &self.watchers {
            let address = required_address(&mut errors, "watchers", Some(raw.as_str()));
            if watchers.contains(&address) {
                errors.push(ConfigError::DuplicateWatcher { address });
            } else {
                watchers.push(address);
            }
        }

        let process_gas = gas(&mut errors, "process_gas", self.process_gas, 1);
        let reserve_gas = gas(&mut errors, "reserve_gas", self.reserve_gas, 0);

        if watchers.is_empty() {
            if policy.allow_empty_watchers {
                tracing::warn!(
                    environment = %self.environment,
                    "empty watcher set: no fraud-detection capability"
                );
            } else {
                errors.push(ConfigError::PolicyViolation {
                    field: "watchers",
                    reason: "watcher set must be non-empty under a strict policy".to_string(),
                });
            }
        }

        if self.recovery_timelock == 0 {
            if policy.allow_zero_recovery_timelock {
                tracing::warn!(
                    environment = %self.environment,
                    "zero recovery timelock: watchers have no reaction window"
                );
            } else {
                errors.push(ConfigError::PolicyViolation {
                    field: "recovery_timelock",
                    reason: "recovery timelock must be non-zero under a strict policy".to_string(),
                });
            }
        }

        errors.finish(CoreSecurityConfig {
            environment: self.environment,
            updater,
            recovery_manager,
            recovery_timelock,
            optimistic_seconds,
            watchers,
            governor,
            process_gas,
            reserve_gas,
        })
    }
}

/// Parse a required address field, recording the violation on failure. The
/// returned placeholder never escapes: a recorded violation fails the whole
/// build.
fn required_address(errors: &mut ErrorList, field: &'static str, value: Option<&str>) -> Address {
    match value {
        None | Some("") => {
            errors.push(ConfigError::MissingRequiredField { field });
            Address::default()
        }
        Some(s) => s.parse().unwrap_or_else(|source| {
            errors.push(ConfigError::InvalidAddress { field, source });
            Address::default()
        }),
    }
}

fn optional_address(
    errors: &mut ErrorList,
    field: &'static str,
    value: Option<&str>,
) -> Option<Address> {
    let s = value?;
    match s.parse() {
        Ok(address) => Some(address),
        Err(source) => {
            errors.push(ConfigError::InvalidAddress { field, source });
            None
        }
    }
}

fn duration(errors: &mut ErrorList, field: &'static str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        errors.push(ConfigError::InvalidDuration { field, value });
        0
    })
}

fn gas(
    errors: &mut ErrorList,
    field: &'static str,
    value: Option<i64>,
    min: i64,
) -> Option<u64> {
    let value = value?;
    if value < min {
        errors.push(ConfigError::InvalidGasBudget { field, value });
        None
    } else {
        // min >= 0, so the cast is lossless
        Some(value as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const UPDATER: &str = "0xdb2091535eb0ee447ce170ddc0403bef3526dd81";
    const MANAGER: &str = "0x3d9330014952bf0a3863fe5db6d89fbfa29930b9";
    const WATCHER_A: &str = "0xee42e86c2fc121ba46d75daf3939d5d683c87c81";
    const WATCHER_B: &str = "0x20aa9cb8a29d4e84d4915b0902bd4e7d9f926c81";

    fn celo() -> CoreConf {
        CoreConf {
            environment: Environment::Dev,
            updater: Some(UPDATER.to_string()),
            recovery_manager: Some(MANAGER.to_string()),
            recovery_timelock: 86_400,
            optimistic_seconds: 10_800,
            watchers: vec![WATCHER_A.to_string()],
            governor: None,
            process_gas: Some(850_000),
            reserve_gas: Some(15_000),
        }
    }

    #[test]
    fn valid_config_builds() {
        let core = celo().build().unwrap();

        assert_eq!(core.updater, UPDATER.parse().unwrap());
        assert_eq!(core.recovery_manager, MANAGER.parse().unwrap());
        assert_eq!(core.recovery_timelock, 86_400);
        assert_eq!(core.optimistic_seconds, 10_800);
        assert_eq!(core.watchers, vec![WATCHER_A.parse().unwrap()]);
        assert_eq!(core.governor, None);
        assert_eq!(core.process_gas, Some(850_000));
        assert_eq!(core.reserve_gas, Some(15_000));
    }

    #[test]
    fn distinct_watchers_validate() {
        let conf = CoreConf {
            watchers: vec![WATCHER_A.to_string(), WATCHER_B.to_string()],
            ..celo()
        };

        let core = conf.build().unwrap();
        assert_eq!(core.watchers.len(), 2);
    }

    #[test]
    fn duplicate_watcher_is_fatal() {
        let conf = CoreConf {
            watchers: vec![WATCHER_A.to_string(), WATCHER_A.to_string()],
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ConfigError::DuplicateWatcher {
                address: WATCHER_A.parse().unwrap(),
            }],
        );
    }

    #[test]
    fn duplicate_detection_ignores_case() {
        let conf = CoreConf {
            watchers: vec![WATCHER_A.to_string(), WATCHER_A.to_uppercase().replace("0X", "0x")],
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert!(matches!(
            errors.errors(),
            [ConfigError::DuplicateWatcher { .. }],
        ));
    }

    #[test]
    fn negative_timelock_names_only_that_field() {
        let conf = CoreConf {
            recovery_timelock: -1,
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ConfigError::InvalidDuration {
                field: "recovery_timelock",
                value: -1,
            }],
        );
    }

    #[test]
    fn negative_optimistic_seconds_is_fatal() {
        let conf = CoreConf {
            optimistic_seconds: -10,
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ConfigError::InvalidDuration {
                field: "optimistic_seconds",
                value: -10,
            }],
        );
    }

    #[test]
    fn violations_accumulate() {
        let conf = CoreConf {
            updater: None,
            optimistic_seconds: -1,
            process_gas: Some(0),
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ConfigError::MissingRequiredField { field: "updater" },
                ConfigError::InvalidDuration {
                    field: "optimistic_seconds",
                    value: -1,
                },
                ConfigError::InvalidGasBudget {
                    field: "process_gas",
                    value: 0,
                },
            ],
        );
    }

    #[test]
    fn malformed_addresses_name_their_field() {
        let conf = CoreConf {
            updater: Some("0xnot-an-address".to_string()),
            governor: Some("0x1234".to_string()),
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        let fields: Vec<_> = errors
            .errors()
            .iter()
            .map(|e| match e {
                ConfigError::InvalidAddress { field, .. } => *field,
                other => panic!("unexpected error: {other}"),
            })
            .collect();

        assert_eq!(fields, vec!["updater", "governor"]);
    }

    #[test]
    fn zero_gas_budget_is_fatal() {
        let conf = CoreConf {
            process_gas: Some(0),
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ConfigError::InvalidGasBudget {
                field: "process_gas",
                value: 0,
            }],
        );
    }

    #[test]
    fn negative_reserve_gas_is_fatal() {
        let conf = CoreConf {
            reserve_gas: Some(-5),
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ConfigError::InvalidGasBudget {
                field: "reserve_gas",
                value: -5,
            }],
        );
    }

    #[test]
    fn zero_reserve_gas_is_allowed() {
        let conf = CoreConf {
            reserve_gas: Some(0),
            ..celo()
        };

        assert_eq!(conf.build().unwrap().reserve_gas, Some(0));
    }

    #[test]
    fn omitted_gas_budgets_are_allowed() {
        let conf = CoreConf {
            process_gas: None,
            reserve_gas: None,
            ..celo()
        };

        let core = conf.build().unwrap();
        assert_eq!(core.process_gas, None);
        assert_eq!(core.reserve_gas, None);
    }

    #[test]
    fn prod_rejects_empty_watcher_set() {
        let conf = CoreConf {
            environment: Environment::Prod,
            watchers: vec![],
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert!(matches!(
            errors.errors(),
            [ConfigError::PolicyViolation {
                field: "watchers",
                ..
            }],
        ));
    }

    #[test]
    fn dev_accepts_empty_watcher_set() {
        let conf = CoreConf {
            watchers: vec![],
            ..celo()
        };

        assert!(conf.build().unwrap().watchers.is_empty());
    }

    #[test]
    fn prod_rejects_zero_recovery_timelock() {
        let conf = CoreConf {
            environment: Environment::Prod,
            recovery_timelock: 0,
            ..celo()
        };

        let errors = conf.build().unwrap_err();
        assert!(matches!(
            errors.errors(),
            [ConfigError::PolicyViolation {
                field: "recovery_timelock",
                ..
            }],
        ));
    }

    #[test]
    fn explicit_policy_overrides_environment() {
        let strict_dev = CoreConf {
            watchers: vec![],
            ..celo()
        };
        let _ = strict_dev
            .build_with_policy(Policy::strict())
            .expect_err("strict policy accepted empty watcher set");

        let permissive_prod = CoreConf {
            environment: Environment::Prod,
            watchers: vec![],
            recovery_timelock: 0,
            ..celo()
        };
        let _ = permissive_prod
            .build_with_policy(Policy::permissive())
            .expect("permissive policy rejected weak posture");
    }
}
