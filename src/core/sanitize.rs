// src/core/sanitize.rs

/// Keep ASCII letters and digits, spaces, underscores and hyphens; trim the result.
pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .filter(|&ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '_' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}
