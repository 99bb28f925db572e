// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::{build_rng, PasswordGenerator, RandomSource};
pub use strength::{classify, entropy_bits};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// `max` is `None` when only the lower bound applies.
    #[error("Invalid config: length {length} {}", describe_bounds(.min, .max))]
    InvalidConfig {
        length: usize,
        min: usize,
        max: Option<usize>,
    },
}

fn describe_bounds(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) => format!("is outside {}..={}", min, max),
        None => format!("must be at least {}", min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_states_the_bounds_that_apply() {
        let ranged = GeneratorError::InvalidConfig { length: 40, min: 6, max: Some(32) };
        assert_eq!(ranged.to_string(), "Invalid config: length 40 is outside 6..=32");

        let open = GeneratorError::InvalidConfig { length: 0, min: 1, max: None };
        assert_eq!(open.to_string(), "Invalid config: length 0 must be at least 1");
    }
}
