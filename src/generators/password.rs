// src/generators/password.rs
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::GeneratorError;
use crate::models::GenerationConfig;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"`~@#$%^&*_-+=";

/// Source of uniform floats in `[0, 1)`.
///
/// Implementations are not required to honour the upper bound; the generator
/// clamps whatever comes back.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded when a seed is given, thread-local otherwise.
pub fn build_rng(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            log::info!("Using seeded generator");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

/// Characters eligible for sampling, in a fixed order: upper, lower,
/// then digits and symbols when enabled.
pub fn alphabet(config: &GenerationConfig) -> Vec<u8> {
    let mut chars = Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len() + NUMBERS.len() + SYMBOLS.len());

    chars.extend_from_slice(UPPERCASE);
    chars.extend_from_slice(LOWERCASE);
    if config.include_numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if config.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

// Map a unit float onto an index, never past the end
fn sample_index(r: f64, len: usize) -> usize {
    let scaled = (r * len as f64).floor();
    // NaN and negatives saturate to 0 on the cast
    (scaled as usize).min(len - 1)
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> Result<String, GeneratorError> {
        if config.length < 1 {
            return Err(GeneratorError::InvalidConfig {
                length: config.length,
                min: 1,
                max: None,
            });
        }

        let chars = alphabet(config);

        let password: String = (0..config.length)
            .map(|_| chars[sample_index(rng.next_unit(), chars.len())] as char)
            .collect();

        log::debug!(
            "Generated password: length={}, numbers={}, symbols={}, alphabet={}",
            config.length,
            config.include_numbers,
            config.include_symbols,
            chars.len()
        );

        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
