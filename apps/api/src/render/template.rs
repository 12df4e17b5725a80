//! Literal-marker template assembly.
//!
//! Markers are plain substrings, not a template language — they are chosen
//! so they cannot occur naturally in the template (`% INSERT_…` comments).
//! A blank fragment deliberately leaves its marker untouched so a missing
//! section stays visible in the assembled source instead of vanishing.

/// Marker strings recognized by the base template, in render order.
pub const MARKER_PERSONAL_INFO: &str = "% INSERT_PERSONAL_INFO";
pub const MARKER_EXPERIENCES: &str = "% INSERT_EXPERIENCES";
pub const MARKER_EDUCATION: &str = "% INSERT_EDUCATION";
pub const MARKER_PROJECTS: &str = "% INSERT_PROJECTS";
pub const MARKER_SKILLS: &str = "% INSERT_SKILLS";

/// Substitutes each non-blank fragment for EVERY literal occurrence of its
/// marker. Blank fragments (empty after trimming) skip substitution.
pub fn assemble(template: &str, fragments: &[(&str, String)]) -> String {
    let mut document = template.to_string();
    for (marker, fragment) in fragments {
        if fragment.trim().is_empty() {
            continue;
        }
        document = document.replace(marker, fragment);
    }
    document
}
