use crate::{
    tiles::source::{TileProvider, X_PLACEHOLDER, Y_PLACEHOLDER, ZOOM_PLACEHOLDER},
    MapError, Result,
};

/// Request placeholders, checked in this order, and their engine equivalents
const PLACEHOLDERS: [(&str, &str); 3] = [
    ("{0}", ZOOM_PLACEHOLDER),
    ("{1}", X_PLACEHOLDER),
    ("{2}", Y_PLACEHOLDER),
];

/// Turns a request overlay pattern into a tile provider.
///
/// The pattern must contain `{0}` (zoom), `{1}` (x) and `{2}` (y). The
/// provider is named after the rewritten pattern, so patterns that rewrite
/// to the same string share a name.
pub fn overlay_to_provider(pattern: &str) -> Result<TileProvider> {
    for (placeholder, _) in PLACEHOLDERS {
        if !pattern.contains(placeholder) {
            return Err(MapError::MissingPlaceholder {
                placeholder: placeholder.to_string(),
                pattern: pattern.to_string(),
            });
        }
    }

    Ok(TileProvider::new(rewrite_placeholders(pattern)))
}

/// Resolves every overlay pattern in order. Duplicates are kept.
pub fn translate_overlays<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<TileProvider>> {
    patterns
        .iter()
        .map(|pattern| overlay_to_provider(pattern.as_ref()))
        .collect()
}

/// Replaces every `{0}`, `{1}` and `{2}` in a single left-to-right pass
fn rewrite_placeholders(pattern: &str) -> String {
    let mut rewritten = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        rewritten.push_str(&rest[..start]);
        rest = &rest[start..];

        match PLACEHOLDERS.iter().find(|(from, _)| rest.starts_with(from)) {
            Some((from, to)) => {
                rewritten.push_str(to);
                rest = &rest[from.len()..];
            }
            None => {
                rewritten.push('{');
                rest = &rest[1..];
            }
        }
    }

    rewritten.push_str(rest);
    rewritten
}
