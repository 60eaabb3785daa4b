use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::engine::FactorSet;

/// Batch input: entity id mapped to its factor set.
pub type EntityBatch = BTreeMap<String, FactorSet>;

/// Load a batch of entities from a YAML or JSON file.
///
/// Expected shape:
/// ```yaml
/// acct-1: { factor1: 5, factor2: 10, factor3: 10 }
/// acct-2: { factor1: 2, factor2: 4, factor3: 6 }
/// ```
pub fn load_entities(path: &Path) -> Result<EntityBatch> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entities file at {}", path.display()))?;
    crate::config::parse_document(path, &content)
}

/// Parse repeated `name=value` command-line arguments into a factor set.
pub fn parse_factor_args(args: &[String]) -> Result<FactorSet> {
    let mut factors = FactorSet::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("Invalid factor '{}': expected name=value", arg))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid numeric value in factor '{}'", arg))?;
        factors.insert(name.trim().to_string(), value);
    }
    Ok(factors)
}
