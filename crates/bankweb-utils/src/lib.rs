//! Utility functions and helpers

/// Format a run of digits with a thousands separator
///
/// A leading `-` is kept in front of the grouped digits.
pub fn format_number<T: ToString>(n: T, separator: &str) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let mut groups: Vec<String> = Vec::new();
    let chars: Vec<char> = digits.chars().collect();
    for chunk in chars.rchunks(3) {
        groups.push(chunk.iter().collect());
    }
    groups.reverse();

    format!("{}{}", sign, groups.join(separator))
}

/// Escape text for safe interpolation into HTML
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5250, ","), "5,250");
        assert_eq!(format_number(999, ","), "999");
        assert_eq!(format_number(1234567, ","), "1,234,567");
        assert_eq!(format_number(-3500, ","), "-3,500");
        assert_eq!(format_number(0, ","), "0");
        assert_eq!(format_number(1000000, "."), "1.000.000");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("checking"), "Checking");
        assert_eq!(capitalize("Active"), "Active");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
