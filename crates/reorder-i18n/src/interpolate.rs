#![forbid(unsafe_code)]

//! `{name}` placeholder substitution.
//!
//! Substitution is a single left-to-right pass: every occurrence of a known
//! placeholder is replaced, unknown placeholders are copied through, and
//! substituted values are never scanned again.

/// Replace `{name}` tokens in `template` with the matching value from `args`.
///
/// ```
/// use reorder_i18n::interpolate;
///
/// let text = interpolate("Draggable item {index} of {total}", &[("index", "2"), ("total", "5")]);
/// assert_eq!(text, "Draggable item 2 of 5");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let value = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
