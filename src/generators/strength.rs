// src/generators/strength.rs
use crate::models::{GenerationConfig, StrengthLabel};
use super::password::alphabet;

/// Rate a configuration. Only the config matters, never the generated string.
pub fn classify(config: &GenerationConfig) -> StrengthLabel {
    if config.length < 8 {
        return StrengthLabel::Weak;
    }
    if config.length < 12 || (!config.include_numbers && !config.include_symbols) {
        return StrengthLabel::Medium;
    }
    StrengthLabel::Strong
}

// Bits of entropy for a uniformly sampled password under this config
pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    let pool = alphabet(config).len() as f64;
    config.length as f64 * pool.log2()
}
