//! Terminal output helpers.

/// Strip control characters that could mangle a terminal or smuggle escape
/// sequences out of untrusted transcript content. Newlines and tabs survive.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
