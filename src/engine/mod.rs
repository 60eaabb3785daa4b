pub mod error;
pub mod evaluator;
pub mod factors;
pub mod model;
pub mod registry;

pub use error::ScoreError;
pub use evaluator::{BatchResults, RiskEvaluator};
pub use factors::{default_weights, FactorSet, WeightSet};
pub use model::{AdvancedModel, CustomModel, RiskModel, SimpleModel};
pub use registry::ModelRegistry;
