use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::consts::TICKS_PER_SECOND;

pub const SEED_VAR: &str = "CIRCUIT_SNAKE_SEED";
pub const TPS_VAR: &str = "CIRCUIT_SNAKE_TPS";

/// Runtime overrides. Board geometry stays fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub seed: u64,
    pub ticks_per_second: u32,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::parse(env::var(SEED_VAR).ok(), env::var(TPS_VAR).ok())
    }

    /// Missing or invalid values fall back to a random seed and the default tick rate.
    pub fn parse(seed: Option<String>, ticks_per_second: Option<String>) -> Self {
        let seed = seed
            .and_then(|v| {
                let parsed = v.trim().parse::<u64>().ok();
                if parsed.is_none() {
                    warn!(var = SEED_VAR, value = %v, "ignoring invalid seed");
                }
                parsed
            })
            .unwrap_or_else(rand::random);
        let ticks_per_second = ticks_per_second
            .and_then(|v| {
                let parsed = v.trim().parse::<u32>().ok().filter(|t| *t > 0);
                if parsed.is_none() {
                    warn!(var = TPS_VAR, value = %v, "ignoring invalid tick rate");
                }
                parsed
            })
            .unwrap_or(TICKS_PER_SECOND);
        Settings {
            seed,
            ticks_per_second,
        }
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
