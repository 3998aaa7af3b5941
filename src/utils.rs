//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Local};
use unicode_segmentation::UnicodeSegmentation;

/// Format an optional money amount as `12,345.00`. Missing amounts render as
/// zero.
pub fn format_amount(amount: Option<f64>) -> String {
    let value = amount.unwrap_or(0.0);
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}.{}", grouped, cents)
    } else {
        format!("{}.{}", grouped, cents)
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Up to two initials from a student name, grapheme-safe.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

// Helper function to truncate text with ellipsis
pub fn truncate_text(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        text.to_string()
    } else {
        format!("{}...", graphemes[..max_graphemes].concat())
    }
}

/// Short "Last updated" label for a list refresh.
pub fn format_refreshed_at(at: &DateTime<Local>) -> String {
    format!("Last updated {}", at.format("%H:%M:%S"))
}
