// src/cli/handlers.rs
use console::style;
use serde_json::json;
use std::error::Error;

use crate::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::core::GeneratorSession;
use crate::generators::{build_rng, classify, entropy_bits};
use crate::models::{GenerationConfig, SessionView, StrengthLabel};
use crate::utils::{format_entropy, on_off, render_bar};
use super::ConfigArgs;

const BAR_WIDTH: usize = 24;

pub fn styled_label(label: StrengthLabel) -> String {
    let text = style(label.to_string()).bold();
    match label {
        StrengthLabel::Weak => text.red().to_string(),
        StrengthLabel::Medium => text.yellow().to_string(),
        StrengthLabel::Strong => text.green().to_string(),
    }
}

// Strength line plus the proportional fill bar
pub fn render_strength(label: StrengthLabel, bits: f64) -> String {
    format!(
        "Password Strength: {} ({})\n[{}] {}%",
        styled_label(label),
        format_entropy(bits),
        render_bar(label.fill_percent(), BAR_WIDTH),
        label.fill_percent()
    )
}

pub fn render_view(view: &SessionView) -> String {
    let copied = if view.copied {
        format!("  {}", style("✅ Copied").green())
    } else {
        String::new()
    };

    format!(
        "🔑 {}{}\n📏 Length: {}   🔢 Numbers: {}   🔣 Symbols: {}\n{}",
        style(&view.password).cyan().bold(),
        copied,
        view.length,
        on_off(view.include_numbers),
        on_off(view.include_symbols),
        render_strength(view.strength, view.entropy_bits)
    )
}

// Print a failed JSON response, or hand the error back in text mode
fn fail(json_mode: bool, message: String) -> Result<(), Box<dyn Error>> {
    if json_mode {
        println!("{}", json!({ "success": false, "error": message }));
        Ok(())
    } else {
        Err(message.into())
    }
}

pub async fn handle_generate(
    config_args: &ConfigArgs,
    count: u16,
    copy: bool,
    json_mode: bool,
    seed: Option<u64>,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let generation = match config_args.resolve(config.generation_defaults()) {
        Ok(generation) => generation,
        Err(e) => return fail(json_mode, e.to_string()),
    };

    log::info!(
        "Generating {} password(s): length={}, numbers={}, symbols={}",
        count,
        generation.length,
        generation.include_numbers,
        generation.include_symbols
    );

    let mut session = GeneratorSession::new(generation, build_rng(seed), config.copy_reset)?;
    let mut views = Vec::with_capacity(count as usize);
    for i in 0..count {
        if i > 0 {
            session.regenerate()?;
        }
        views.push(session.view());
    }

    let mut copy_error = None;
    if copy {
        if let Err(e) = session.copy(&mut SystemClipboard::new()) {
            copy_error = Some(e.to_string());
        }
    }

    if json_mode {
        let response = json!({
            "success": copy_error.is_none(),
            "passwords": views,
            "copied": session.is_copied(),
            "error": copy_error,
        });
        println!("{}", response);
    } else {
        for view in &views {
            println!("{}", render_view(view));
            println!();
        }
        match &copy_error {
            Some(e) => eprintln!("❌ Failed to copy to clipboard: {}", e),
            None if copy => println!("📋 Copied to clipboard"),
            None => {}
        }
    }

    // Some platforms drop clipboard ownership on exit; hold it until the indicator resets
    if session.is_copied() {
        tokio::time::sleep(session.copy_reset()).await;
    }

    Ok(())
}

pub fn handle_strength(config_args: &ConfigArgs, json_mode: bool, config: &Config) -> Result<(), Box<dyn Error>> {
    let generation: GenerationConfig = match config_args.resolve(config.generation_defaults()) {
        Ok(generation) => generation,
        Err(e) => return fail(json_mode, e.to_string()),
    };

    let label = classify(&generation);
    let bits = entropy_bits(&generation);
    log::info!("Classified length={} as {}", generation.length, label);

    if json_mode {
        println!(
            "{}",
            json!({
                "success": true,
                "config": generation,
                "strength": label,
                "fill_percent": label.fill_percent(),
                "entropy_bits": bits,
            })
        );
    } else {
        println!("{}", render_strength(label, bits));
    }

    Ok(())
}
