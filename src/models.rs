// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::generators::GeneratorError;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 32;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Build a config, rejecting lengths outside `MIN_LENGTH..=MAX_LENGTH`.
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Result<Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidConfig {
                length,
                min: MIN_LENGTH,
                max: Some(MAX_LENGTH),
            });
        }

        Ok(Self {
            length,
            include_numbers,
            include_symbols,
        })
    }

    /// Same as `new` but pulls the length into range, like a slider would.
    pub fn clamped(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            include_numbers,
            include_symbols,
        }
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    // Width of the strength bar, in percent
    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthLabel::Weak => 33,
            StrengthLabel::Medium => 66,
            StrengthLabel::Strong => 100,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Snapshot of everything the display surface shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub password: String,
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub strength: StrengthLabel,
    pub fill_percent: u8,
    pub entropy_bits: f64,
    pub copied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_lengths() {
        assert!(GenerationConfig::new(5, true, true).is_err());
        assert!(GenerationConfig::new(33, false, false).is_err());
        assert!(GenerationConfig::new(6, false, false).is_ok());
        assert!(GenerationConfig::new(32, true, false).is_ok());
    }

    #[test]
    fn clamped_pulls_length_into_range() {
        assert_eq!(GenerationConfig::clamped(0, true, true).length, MIN_LENGTH);
        assert_eq!(GenerationConfig::clamped(100, true, true).length, MAX_LENGTH);
        assert_eq!(GenerationConfig::clamped(20, true, true).length, 20);
    }

    #[test]
    fn default_matches_initial_widget_state() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert!(config.include_numbers);
        assert!(config.include_symbols);
    }

    #[test]
    fn fill_percent_is_exact() {
        assert_eq!(StrengthLabel::Weak.fill_percent(), 33);
        assert_eq!(StrengthLabel::Medium.fill_percent(), 66);
        assert_eq!(StrengthLabel::Strong.fill_percent(), 100);
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
    }
}
