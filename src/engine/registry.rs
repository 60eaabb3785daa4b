use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::ScoreError;
use super::factors::{default_weights, WeightSet};
use super::model::{AdvancedModel, RiskModel, SimpleModel};

/// Named collection of interchangeable risk models.
///
/// Each registry is an owned value, constructor-injected where needed, so
/// independently configured registries can coexist in one process.
pub struct ModelRegistry {
    models: HashMap<String, Arc<dyn RiskModel>>,
}

impl ModelRegistry {
    /// Empty registry with nothing seeded.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Registry seeded with the stock `"simple"` and `"advanced"` models.
    /// `weights` overrides the advanced model's default weight set.
    pub fn with_defaults(weights: Option<WeightSet>) -> Self {
        let mut registry = Self::new();
        registry.register("simple", Arc::new(SimpleModel));
        registry.register(
            "advanced",
            Arc::new(AdvancedModel::new(weights.unwrap_or_else(default_weights))),
        );
        registry
    }

    /// Install a model under `name`.
    ///
    /// Re-registering an existing name discards the previous model. That is
    /// a warning, not an error.
    pub fn register(&mut self, name: impl Into<String>, model: Arc<dyn RiskModel>) {
        let name = name.into();
        if self.models.contains_key(&name) {
            warn!(model = %name, "model already registered, overwriting");
        } else {
            debug!(model = %name, "model registered");
        }
        self.models.insert(name, model);
    }

    /// Look up a model by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn RiskModel>, ScoreError> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| ScoreError::ModelNotFound(name.to_string()))
    }

    /// Registered model names, sorted for stable display.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_defaults(None)
    }
}
