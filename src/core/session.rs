// src/core/session.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::generators::{classify, entropy_bits, GeneratorError, PasswordGenerator, RandomSource};
use crate::models::{clamp_length, GenerationConfig, SessionView, StrengthLabel};

/// Owns the generator state: config, current password and the transient
/// "copied" flag. Every setter regenerates.
pub struct GeneratorSession<R: RandomSource> {
    config: GenerationConfig,
    password: String,
    generator: PasswordGenerator,
    rng: R,
    copied: Arc<AtomicBool>,
    pending_revert: Option<JoinHandle<()>>,
    copy_reset: Duration,
}

impl<R: RandomSource> GeneratorSession<R> {
    pub fn new(config: GenerationConfig, rng: R, copy_reset: Duration) -> Result<Self, GeneratorError> {
        let config = GenerationConfig::new(config.length, config.include_numbers, config.include_symbols)?;

        let mut session = Self {
            config,
            password: String::new(),
            generator: PasswordGenerator::new(),
            rng,
            copied: Arc::new(AtomicBool::new(false)),
            pending_revert: None,
            copy_reset,
        };
        session.regenerate()?;

        Ok(session)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn strength(&self) -> StrengthLabel {
        classify(&self.config)
    }

    /// Slider semantics: out-of-range values are pulled to the nearest bound.
    pub fn set_length(&mut self, length: usize) -> Result<(), GeneratorError> {
        let clamped = clamp_length(length);
        if clamped != length {
            log::debug!("Length {} clamped to {}", length, clamped);
        }
        self.config.length = clamped;
        self.regenerate()
    }

    pub fn set_include_numbers(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.config.include_numbers = enabled;
        self.regenerate()
    }

    pub fn set_include_symbols(&mut self, enabled: bool) -> Result<(), GeneratorError> {
        self.config.include_symbols = enabled;
        self.regenerate()
    }

    pub fn toggle_numbers(&mut self) -> Result<(), GeneratorError> {
        self.set_include_numbers(!self.config.include_numbers)
    }

    pub fn toggle_symbols(&mut self) -> Result<(), GeneratorError> {
        self.set_include_symbols(!self.config.include_symbols)
    }

    /// Draw a fresh password from the current config, even if nothing changed.
    pub fn regenerate(&mut self) -> Result<(), GeneratorError> {
        self.password = self.generator.generate(&self.config, &mut self.rng)?;
        self.cancel_revert();
        self.copied.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Copy the current password. The copied flag is only raised when the
    /// write succeeds, and drops again after `copy_reset`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn copy<W: ClipboardWriter + ?Sized>(&mut self, writer: &mut W) -> Result<(), ClipboardError> {
        if let Err(e) = writer.write_text(&self.password) {
            log::warn!("Clipboard write failed: {}", e);
            return Err(e);
        }

        self.cancel_revert();
        self.copied.store(true, Ordering::SeqCst);

        let copied = Arc::clone(&self.copied);
        let delay = self.copy_reset;
        self.pending_revert = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            copied.store(false, Ordering::SeqCst);
        }));

        log::info!("Password copied to clipboard; indicator resets in {} ms", delay.as_millis());
        Ok(())
    }

    pub fn copy_reset(&self) -> Duration {
        self.copy_reset
    }

    pub fn view(&self) -> SessionView {
        let strength = self.strength();
        SessionView {
            password: self.password().to_owned(),
            length: self.config.length,
            include_numbers: self.config.include_numbers,
            include_symbols: self.config.include_symbols,
            strength,
            fill_percent: strength.fill_percent(),
            entropy_bits: entropy_bits(&self.config),
            copied: self.is_copied(),
        }
    }

    fn cancel_revert(&mut self) {
        if let Some(handle) = self.pending_revert.take() {
            handle.abort();
        }
    }
}

impl<R: RandomSource> Drop for GeneratorSession<R> {
    fn drop(&mut self) {
        self.cancel_revert();
    }
}
