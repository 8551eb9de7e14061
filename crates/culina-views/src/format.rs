//! Text helpers for markup generators.

/// Escape text for interpolation into markup (text or attribute position).
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an ingredient quantity: whole numbers without a decimal point,
/// fractions trimmed to at most two decimals, `None` as nothing.
#[must_use]
pub fn format_quantity(quantity: Option<f64>) -> String {
    let Some(q) = quantity else {
        return String::new();
    };
    if (q - q.round()).abs() < 1e-9 {
        return format!("{}", q.round() as i64);
    }
    let mut s = format!("{q:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(escape("mac & \"cheese\" <3"), "mac &amp; &quot;cheese&quot; &lt;3");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_format_whole_quantity() {
        assert_eq!(format_quantity(Some(8.0)), "8");
        assert_eq!(format_quantity(Some(16.0)), "16");
    }

    #[test]
    fn test_format_fractional_quantity() {
        assert_eq!(format_quantity(Some(0.5)), "0.5");
        assert_eq!(format_quantity(Some(1.25)), "1.25");
        assert_eq!(format_quantity(Some(1.0 / 3.0)), "0.33");
    }

    #[test]
    fn test_format_missing_quantity() {
        assert_eq!(format_quantity(None), "");
    }
}
