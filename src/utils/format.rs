// src/utils/format.rs

// Proportional fill bar, e.g. 66% of 12 cells -> "████████░░░░"
pub fn render_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn format_entropy(bits: f64) -> String {
    format!("{:.1} bits", bits)
}
