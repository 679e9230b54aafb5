//! Fixed-width text helpers for monospaced output

/// Truncate to at most `width` characters
///
/// Counts characters, not bytes, so multi-byte input can never be split
/// inside a code point.
pub fn truncate_chars(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Split into fixed-width chunks with no word awareness
///
/// The last chunk may be shorter; an empty string produces no chunks at
/// all. Concatenating the chunks reproduces the input.
pub fn wrap_chunks(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Format a monetary value: `$` plus the amount with thousands separators
/// and exactly two decimals.
pub fn format_money(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Render with two decimals and a comma every three integer digits.
fn group_thousands(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}
