// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to single spaces and trim.
/// Cell text from the ranking table tends to carry stray newlines and
/// non-breaking padding.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
