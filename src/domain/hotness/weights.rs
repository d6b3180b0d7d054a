use std::collections::HashMap;

/// Weight applied to sources missing from the table
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.8;

const BUILTIN_SOURCE_WEIGHTS: &[(&str, f64)] = &[
    ("腾讯新闻", 1.0),
    ("网易新闻", 0.9),
    ("新浪新闻", 0.9),
    ("央视新闻", 1.1),
];

/// Immutable source-name to weight table used by the scorer.
///
/// Starts from the built-in table; deployments may override or extend it
/// through configuration before the engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceWeights {
    weights: HashMap<String, f64>,
    default_weight: f64,
}

impl SourceWeights {
    pub fn new(default_weight: f64) -> Self {
        let weights = BUILTIN_SOURCE_WEIGHTS
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect();

        Self {
            weights,
            default_weight,
        }
    }

    pub fn with_override(mut self, source: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(source.into(), weight);
        self
    }

    pub fn weight_for(&self, source: &str) -> f64 {
        self.weights
            .get(source)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Parse `name=weight,name=weight` overrides.
    /// Weights must be finite and non-negative.
    pub fn parse_overrides(raw: &str) -> Result<Vec<(String, f64)>, String> {
        raw.split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, weight) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("source weight '{}' is not in name=weight form", pair))?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(format!("source weight '{}' has an empty name", pair));
                }
                let weight = parse_weight(weight.trim())
                    .map_err(|e| format!("source weight for '{}': {}", name, e))?;
                Ok((name.to_string(), weight))
            })
            .collect()
    }
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_WEIGHT)
    }
}

/// Parse a single weight value, rejecting NaN, infinities and negatives
pub fn parse_weight(raw: &str) -> Result<f64, String> {
    let weight: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("'{}' must be a finite, non-negative number", raw));
    }
    Ok(weight)
}
