//! Shared helpers for the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::generators::RandomSource;
use crate::models::GenerationConfig;

/// Replays a fixed list of unit values, cycling when exhausted.
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        ScriptedSource { values: values.to_vec(), pos: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

/// Clipboard double that records writes, or fails every write.
#[derive(Clone, Default)]
pub struct MockClipboard {
    pub contents: Arc<Mutex<Option<String>>>,
    pub writes: Arc<AtomicUsize>,
    pub fail: bool,
}

impl MockClipboard {
    pub fn failing() -> Self {
        MockClipboard { fail: true, ..Default::default() }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClipboardError::Write("clipboard unavailable".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

pub fn config(length: usize, numbers: bool, symbols: bool) -> GenerationConfig {
    GenerationConfig {
        length,
        include_numbers: numbers,
        include_symbols: symbols,
    }
}

/// Global `log` sink that keeps every record for inspection.
pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

/// Install the capturing logger (first call wins) and return it.
pub fn capture_logs() -> &'static CaptureLogger {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    &CAPTURE
}
