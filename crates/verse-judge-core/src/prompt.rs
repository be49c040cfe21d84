//! Prompt rendering
//!
//! Templates are opaque: only the three known placeholders are replaced and
//! everything else, including unrelated braces, is copied byte for byte.
//! Substituted text is never scanned again, so a poem that happens to contain
//! `{translation}` stays as written.

use crate::rubric::Rubric;

const SOURCE_SLOT: &str = "{source}";
const TRANSLATION_SLOT: &str = "{translation}";
const SCORE_SLOT: &str = "{score}";

/// Render a rubric template against one (source, translation) pair.
///
/// The trailing `{score}` slot is left empty for the judge to fill.
pub fn render(template: &str, source: &str, translation: &str) -> String {
    let mut out = String::with_capacity(template.len() + source.len() + translation.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let (value, consumed) = if tail.starts_with(SOURCE_SLOT) {
            (source, SOURCE_SLOT.len())
        } else if tail.starts_with(TRANSLATION_SLOT) {
            (translation, TRANSLATION_SLOT.len())
        } else if tail.starts_with(SCORE_SLOT) {
            ("", SCORE_SLOT.len())
        } else {
            ("{", 1)
        };

        out.push_str(value);
        rest = &tail[consumed..];
    }
    out.push_str(rest);

    out
}

/// Render the prompt for `rubric`.
pub fn build(rubric: Rubric, source: &str, translation: &str) -> String {
    render(rubric.template(), source, translation)
}
