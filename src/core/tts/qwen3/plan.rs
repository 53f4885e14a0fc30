//! Model attempt plan: which models are tried, and how many times each.

use serde::Serialize;

use super::config::EngineConfig;

/// One model and its attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptTier {
    pub model: String,
    pub attempts: u32,
}

/// Ordered attempt tiers: the primary model with its retry budget, then an
/// optional fallback model with a single attempt.
///
/// Blank model ids never produce a tier, and the fallback tier is only added
/// when it names a different model than the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ModelAttemptPlan {
    tiers: Vec<AttemptTier>,
}

/// Attempts granted to the fallback model.
pub const FALLBACK_ATTEMPTS: u32 = 1;

impl ModelAttemptPlan {
    pub fn new(primary: &str, max_retries: u32, fallback: Option<&str>) -> Self {
        let primary = primary.trim();
        let mut tiers = Vec::with_capacity(2);

        if !primary.is_empty() {
            tiers.push(AttemptTier {
                model: primary.to_string(),
                attempts: max_retries.max(1),
            });
        }

        if let Some(fallback) = fallback.map(str::trim)
            && !fallback.is_empty()
            && fallback != primary
        {
            tiers.push(AttemptTier {
                model: fallback.to_string(),
                attempts: FALLBACK_ATTEMPTS,
            });
        }

        Self { tiers }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.model_name(),
            config.max_retries(),
            config.fallback_model(),
        )
    }

    #[inline]
    pub fn tiers(&self) -> &[AttemptTier] {
        &self.tiers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Upper bound on backend calls for one request.
    pub fn total_attempts(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.attempts).sum()
    }

    /// Model ids in attempt order.
    pub fn models(&self) -> Vec<&str> {
        self.tiers.iter().map(|tier| tier.model.as_str()).collect()
    }
}
