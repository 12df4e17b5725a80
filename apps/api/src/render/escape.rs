//! LaTeX escaping for user-supplied prose.
//!
//! Single pass over the original characters, so escape sequences inserted for
//! one character are never themselves re-escaped (a naive sequential
//! replace loop corrupts `^` and `~`, whose replacements contain braces).
//!
//! NOT idempotent: escaping already-escaped text escapes the backslashes and
//! braces again. Callers apply it exactly once per field.

/// Maps markup-control characters to their literal-rendering escape sequence
/// and folds smart typographic quotes to plain ASCII quotes. Deterministic.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            _ => out.push(c),
        }
    }
    out
}
