//! HTML escaping and double-escape detection

/// Escape the five HTML-significant characters
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fallback safety net against double-escaping: true if the value contains
/// an HTML entity (`&name;` or `&#digits;`), meaning it was already escaped
/// upstream. The explicit raw-field allow-list is the primary escaping
/// decision; markup-shaped values under ordinary keys still get escaped.
pub(crate) fn contains_entity(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'&' {
            let rest = &bytes[i + 1..];
            if let Some(stripped) = rest.strip_prefix(b"#") {
                let digits = stripped.iter().take_while(|b| b.is_ascii_digit()).count();
                if digits > 0 && stripped.get(digits) == Some(&b';') {
                    return true;
                }
            } else {
                let letters = rest.iter().take_while(|b| b.is_ascii_alphabetic()).count();
                if letters > 0 && rest.get(letters) == Some(&b';') {
                    return true;
                }
            }
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_significant_chars() {
        assert_eq!(
            escape_html(r#"a & <b> "c" 'd'"#),
            "a &amp; &lt;b&gt; &quot;c&quot; &#039;d&#039;"
        );
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_entity_detection() {
        assert!(contains_entity("fish &amp; chips"));
        assert!(contains_entity("deg &#176; sign"));
        assert!(!contains_entity("AT&T and R&D"));
        assert!(!contains_entity("&; and &# alone"));
        assert!(!contains_entity("<b>bare markup</b>"));
    }
}
