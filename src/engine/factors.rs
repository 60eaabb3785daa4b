use std::collections::BTreeMap;

use super::error::ScoreError;

/// Named numeric inputs describing one entity's risk-relevant attributes.
/// Built by the caller per evaluation; never mutated by the engine.
pub type FactorSet = BTreeMap<String, f64>;

/// Named multipliers applied to factors by the advanced model.
pub type WeightSet = BTreeMap<String, f64>;

/// Weights seeded under the "advanced" name when no override is configured.
/// Kept literal so documented example scores stay reproducible.
pub fn default_weights() -> WeightSet {
    WeightSet::from([
        ("factor1".to_string(), 0.5),
        ("factor2".to_string(), 1.5),
        ("factor3".to_string(), 2.0),
    ])
}

/// Structural check shared by every model. Flatness is already guaranteed by
/// the `FactorSet` type, so only emptiness can go wrong here.
pub fn validate_factors(factors: &FactorSet) -> Result<(), ScoreError> {
    if factors.is_empty() {
        return Err(ScoreError::Validation(
            "factors must be a non-empty flat mapping".to_string(),
        ));
    }
    Ok(())
}
