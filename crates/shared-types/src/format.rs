//! Shared formatting utilities for dashboard figures.
//!
//! Output follows en-US grouping (`12,023`) without external crate
//! dependencies.

/// Insert thousands separators: `892902` -> `"892,902"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Currency amount with a code prefix: `"GHS 1,245,300"`.
pub fn format_currency(code: &str, value: u64) -> String {
    if code.is_empty() {
        return format_thousands(value);
    }
    format!("{code} {}", format_thousands(value))
}

/// Clamp a percentage into 0..=100 for bar widths.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// First letters of the first two words, uppercased, for avatar fallbacks.
///
/// Falls back to the first two characters for single-word names.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let initials: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}
