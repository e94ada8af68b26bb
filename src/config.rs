// Engine configuration
//
// Layered value-type configuration: a defaults struct plus an all-optional
// overrides struct, merged by a pure function. Overrides can be sourced
// from TAB_ENGINE_* environment variables.

use crate::bill::tip::TipPolicy;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Base configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDefaults {
    /// Lowest gratuity a tip change may settle at, in cents.
    pub tip_floor: Money,
    /// Highest accepted exact tip, in cents. Validated, never clamped.
    pub tip_ceiling: Money,
    /// Gratuity percent preselected before the guest picks one.
    pub default_gratuity_percent: i64,
    /// Seconds between simulated bill-update deliveries in demo mode.
    pub stage_interval_secs: u64,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        EngineDefaults {
            tip_floor: Money::ZERO,
            tip_ceiling: Money::from_cents(crate::validation::MAX_EXACT_TIP_CENTS),
            default_gratuity_percent: 20,
            stage_interval_secs: 15,
        }
    }
}

/// Optional overrides layered over [`EngineDefaults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOverrides {
    pub tip_floor: Option<Money>,
    pub tip_ceiling: Option<Money>,
    pub default_gratuity_percent: Option<i64>,
    pub stage_interval_secs: Option<u64>,
}

impl EngineOverrides {
    /// Read overrides from `TAB_ENGINE_*` environment variables.
    /// Unset or unparseable variables leave the default in place.
    pub fn from_env() -> Self {
        EngineOverrides {
            tip_floor: env_i64("TAB_ENGINE_TIP_FLOOR_CENTS").map(Money::from_cents),
            tip_ceiling: env_i64("TAB_ENGINE_TIP_CEILING_CENTS").map(Money::from_cents),
            default_gratuity_percent: env_i64("TAB_ENGINE_DEFAULT_GRATUITY_PERCENT"),
            stage_interval_secs: env_i64("TAB_ENGINE_STAGE_INTERVAL_SECS")
                .and_then(|v| u64::try_from(v).ok()),
        }
    }
}

fn env_i64(key: &str) -> Option<i64> {
    std::env::var(key).ok().and_then(|raw| raw.parse().ok())
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub tip_floor: Money,
    pub tip_ceiling: Money,
    pub default_gratuity_percent: i64,
    pub stage_interval_secs: u64,
}

impl EngineConfig {
    /// Merge overrides over defaults. Pure: same inputs, same output.
    pub fn resolve(defaults: EngineDefaults, overrides: EngineOverrides) -> Self {
        EngineConfig {
            tip_floor: overrides.tip_floor.unwrap_or(defaults.tip_floor),
            tip_ceiling: overrides.tip_ceiling.unwrap_or(defaults.tip_ceiling),
            default_gratuity_percent: overrides
                .default_gratuity_percent
                .unwrap_or(defaults.default_gratuity_percent),
            stage_interval_secs: overrides
                .stage_interval_secs
                .unwrap_or(defaults.stage_interval_secs),
        }
    }

    pub fn tip_policy(&self) -> TipPolicy {
        TipPolicy {
            minimum: self.tip_floor,
            maximum: self.tip_ceiling,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::resolve(EngineDefaults::default(), EngineOverrides::default())
    }
}
