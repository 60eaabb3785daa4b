use super::error::ScoreError;
use super::factors::{validate_factors, FactorSet, WeightSet};

/// A swappable scoring strategy.
///
/// Implementations are pure functions of the input factors and their own
/// construction-time configuration, so a model placed in a registry can be
/// shared freely across evaluations. Mutating a registered model in place is
/// not supported; register a replacement instead.
pub trait RiskModel: Send + Sync {
    /// Check the factor set before any arithmetic runs.
    ///
    /// The default is the shared structural check (non-empty); models with
    /// extra requirements layer them on top.
    fn validate(&self, factors: &FactorSet) -> Result<(), ScoreError> {
        validate_factors(factors)
    }

    /// Compute a risk score for the given factor set. Each model defines its
    /// own scale; no bounded range is enforced.
    fn calculate_risk(&self, factors: &FactorSet) -> Result<f64, ScoreError>;
}

/// Arithmetic mean of all factor values.
pub struct SimpleModel;

impl RiskModel for SimpleModel {
    fn calculate_risk(&self, factors: &FactorSet) -> Result<f64, ScoreError> {
        self.validate(factors)?;
        let sum: f64 = factors.values().sum();
        Ok(sum / factors.len() as f64)
    }
}

/// Weighted mean: sum(value x weight) / sum(weights).
///
/// Weights are fixed at construction for the model's lifetime.
pub struct AdvancedModel {
    weights: WeightSet,
}

impl AdvancedModel {
    pub fn new(weights: WeightSet) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }
}

impl RiskModel for AdvancedModel {
    fn validate(&self, factors: &FactorSet) -> Result<(), ScoreError> {
        validate_factors(factors)?;
        // Count comparison only, not key-set equality: mismatched names with
        // matching counts pass here and fail at weight lookup instead.
        if factors.len() != self.weights.len() {
            return Err(ScoreError::Validation(
                "factor count does not match weight count".to_string(),
            ));
        }
        Ok(())
    }

    fn calculate_risk(&self, factors: &FactorSet) -> Result<f64, ScoreError> {
        self.validate(factors)?;

        let mut weighted_sum = 0.0;
        for (name, value) in factors {
            let weight = self
                .weights
                .get(name)
                .ok_or_else(|| ScoreError::MissingWeight(name.clone()))?;
            weighted_sum += value * weight;
        }

        let total_weight: f64 = self.weights.values().sum();
        Ok(weighted_sum / total_weight)
    }
}

/// Signature for caller-supplied scoring logic.
pub type ScoreFn = dyn Fn(&FactorSet) -> Result<f64, ScoreError> + Send + Sync;

/// Caller-supplied scoring function behind the common validation contract.
///
/// The function is owned for the model's lifetime and never rebound. Errors
/// it returns propagate to the caller unchanged.
pub struct CustomModel {
    calculate: Box<ScoreFn>,
}

impl CustomModel {
    pub fn new<F>(calculate: F) -> Self
    where
        F: Fn(&FactorSet) -> Result<f64, ScoreError> + Send + Sync + 'static,
    {
        Self {
            calculate: Box::new(calculate),
        }
    }
}

impl RiskModel for CustomModel {
    fn calculate_risk(&self, factors: &FactorSet) -> Result<f64, ScoreError> {
        self.validate(factors)?;
        (self.calculate)(factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn factors(pairs: &[(&str, f64)]) -> FactorSet {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_simple_model_mean() {
        let model = SimpleModel;
        let score = model.calculate_risk(&factors(&[("a", 10.0), ("b", 20.0)])).unwrap();
        assert_eq!(score, 15.0);
    }

    #[test]
    fn test_simple_model_single_factor() {
        let model = SimpleModel;
        let score = model.calculate_risk(&factors(&[("only", 42.0)])).unwrap();
        assert_eq!(score, 42.0);
    }

    #[test]
    fn test_simple_model_negative_values() {
        let model = SimpleModel;
        let score = model
            .calculate_risk(&factors(&[("a", -10.0), ("b", 10.0)]))
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_simple_model_empty_factors() {
        let model = SimpleModel;
        let result = model.calculate_risk(&FactorSet::new());
        assert!(matches!(result, Err(ScoreError::Validation(_))));
    }

    #[test]
    fn test_advanced_model_worked_example() {
        // Default weights over {factor1:5, factor2:10, factor3:10}:
        // (5*0.5 + 10*1.5 + 10*2.0) / 4.0 = 9.375
        let model = AdvancedModel::new(crate::engine::default_weights());
        let input = factors(&[("factor1", 5.0), ("factor2", 10.0), ("factor3", 10.0)]);
        let score = model.calculate_risk(&input).unwrap();
        assert_eq!(score, 9.375);
    }

    #[test]
    fn test_advanced_model_exposes_weights() {
        let model = AdvancedModel::new(crate::engine::default_weights());
        assert_eq!(model.weights().len(), 3);
        assert_eq!(model.weights()["factor2"], 1.5);
    }

    #[test]
    fn test_advanced_model_count_mismatch() {
        let model = AdvancedModel::new(crate::engine::default_weights());
        let input = factors(&[("factor1", 5.0), ("factor2", 10.0)]);
        let result = model.calculate_risk(&input);
        assert!(matches!(result, Err(ScoreError::Validation(_))));
    }

    #[test]
    fn test_advanced_model_empty_factors() {
        let model = AdvancedModel::new(FactorSet::new());
        let result = model.calculate_risk(&FactorSet::new());
        // Emptiness is rejected before the count check ever runs
        assert!(matches!(result, Err(ScoreError::Validation(_))));
    }

    #[test]
    fn test_advanced_model_unknown_factor_name() {
        // Same count as the weight set, different names: passes the count
        // check, fails at weight lookup
        let model = AdvancedModel::new(crate::engine::default_weights());
        let input = factors(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        let result = model.calculate_risk(&input);
        assert!(matches!(result, Err(ScoreError::MissingWeight(name)) if name == "x"));
    }

    #[test]
    fn test_advanced_model_zero_weight_allowed() {
        let weights = factors(&[("a", 0.0), ("b", 1.0)]);
        let model = AdvancedModel::new(weights);
        let score = model
            .calculate_risk(&factors(&[("a", 100.0), ("b", 10.0)]))
            .unwrap();
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_advanced_model_negative_weight_flips_sign() {
        let weights = factors(&[("a", -1.0), ("b", 2.0)]);
        let model = AdvancedModel::new(weights);
        let score = model
            .calculate_risk(&factors(&[("a", 10.0), ("b", 5.0)]))
            .unwrap();
        // (-10 + 10) / 1 = 0
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_custom_model_delegates() {
        let model = CustomModel::new(|factors: &FactorSet| {
            Ok(factors.values().fold(f64::MIN, |max, v| max.max(*v)))
        });
        let score = model
            .calculate_risk(&factors(&[("a", 3.0), ("b", 7.0)]))
            .unwrap();
        assert_eq!(score, 7.0);
    }

    #[test]
    fn test_custom_model_base_validation_still_applies() {
        let model = CustomModel::new(|_: &FactorSet| Ok(1.0));
        let result = model.calculate_risk(&FactorSet::new());
        assert!(matches!(result, Err(ScoreError::Validation(_))));
    }

    #[test]
    fn test_custom_model_error_passthrough() {
        let model = CustomModel::new(|_: &FactorSet| Err(anyhow!("model exploded").into()));
        let result = model.calculate_risk(&factors(&[("a", 1.0)]));
        match result {
            Err(ScoreError::Custom(e)) => assert_eq!(e.to_string(), "model exploded"),
            other => panic!("expected custom error, got {:?}", other),
        }
    }
}
