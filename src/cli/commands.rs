// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::GeneratorError;
use crate::models::GenerationConfig;

/// Length and character-class options shared by the one-shot commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Password length (6-32)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include numbers (0-9)
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave numbers out
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include symbols (`~@#$%^&*_-+=)
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave symbols out
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,
}

impl ConfigArgs {
    // Apply the flags on top of the configured defaults
    pub fn resolve(&self, defaults: GenerationConfig) -> Result<GenerationConfig, GeneratorError> {
        let include_numbers = pick(self.numbers, self.no_numbers, defaults.include_numbers);
        let include_symbols = pick(self.symbols, self.no_symbols, defaults.include_symbols);

        GenerationConfig::new(
            self.length.unwrap_or(defaults.length),
            include_numbers,
            include_symbols,
        )
    }
}

fn pick(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        default
    }
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        count: u16,

        /// Copy the last password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate a configuration without generating anything
    Strength {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Interactive generator (default)
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> GenerationConfig {
        GenerationConfig { length: 12, include_numbers: true, include_symbols: false }
    }

    #[test]
    fn empty_args_use_defaults() {
        let resolved = ConfigArgs::default().resolve(defaults()).unwrap();
        assert_eq!(resolved, defaults());
    }

    #[test]
    fn flags_override_defaults() {
        let args = ConfigArgs {
            length: Some(8),
            no_numbers: true,
            symbols: true,
            ..Default::default()
        };
        let resolved = args.resolve(defaults()).unwrap();
        assert_eq!(resolved.length, 8);
        assert!(!resolved.include_numbers);
        assert!(resolved.include_symbols);
    }

    #[test]
    fn out_of_range_length_is_invalid() {
        let args = ConfigArgs { length: Some(40), ..Default::default() };
        assert!(matches!(
            args.resolve(defaults()),
            Err(GeneratorError::InvalidConfig { length: 40, min: 6, max: Some(32) })
        ));
    }
}
