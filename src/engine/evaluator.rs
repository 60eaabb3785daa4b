use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::error::ScoreError;
use super::factors::{FactorSet, WeightSet};
use super::model::RiskModel;
use super::registry::ModelRegistry;

/// One entry per entity: a score or that entity's own failure. Entries are
/// never dropped or coerced; callers inspect each outcome.
pub type BatchResults = BTreeMap<String, Result<f64, ScoreError>>;

/// Evaluates entities against models resolved from an owned registry.
pub struct RiskEvaluator {
    registry: ModelRegistry,
}

impl RiskEvaluator {
    /// Evaluator over a registry seeded with the stock models. `default_weights`
    /// overrides the advanced model's weight set.
    pub fn new(default_weights: Option<WeightSet>) -> Self {
        Self {
            registry: ModelRegistry::with_defaults(default_weights),
        }
    }

    /// Evaluator over a caller-built registry.
    pub fn with_registry(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Register an additional model on the owned registry.
    pub fn register_model(&mut self, name: impl Into<String>, model: Arc<dyn RiskModel>) {
        self.registry.register(name, model);
    }

    /// Score one entity with the named model.
    ///
    /// Registry and model errors propagate unchanged; there is no local
    /// recovery on this path.
    pub fn evaluate(
        &self,
        entity_id: &str,
        model_name: &str,
        factors: &FactorSet,
    ) -> Result<f64, ScoreError> {
        debug!(entity = entity_id, model = model_name, "evaluating risk");
        let model = self.registry.get(model_name)?;
        let score = model.calculate_risk(factors)?;
        info!(entity = entity_id, model = model_name, score, "risk evaluated");
        Ok(score)
    }

    /// Score a batch of entities with the same model.
    ///
    /// A failure for one entity is recorded as that entity's result and the
    /// rest of the batch continues; the output always holds exactly one entry
    /// per input entity.
    pub fn evaluate_batch(
        &self,
        entities: &BTreeMap<String, FactorSet>,
        model_name: &str,
    ) -> BatchResults {
        let mut results = BatchResults::new();
        for (entity_id, factors) in entities {
            let outcome = self.evaluate(entity_id, model_name, factors);
            if let Err(ref e) = outcome {
                error!(entity = %entity_id, "evaluation failed: {}", e);
            }
            results.insert(entity_id.clone(), outcome);
        }
        results
    }
}
