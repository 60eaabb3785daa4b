use serde::{Deserialize, Serialize};

use crate::engine::WeightSet;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weight overrides for the seeded "advanced" model. Absent means the
    /// stock defaults apply.
    #[serde(default)]
    pub default_weights: Option<WeightSet>,
}
