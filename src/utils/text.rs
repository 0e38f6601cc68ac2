//! Text measurement for attribute values
//!
//! Values arrive with search highlighting already applied (`<b>` around the
//! matched terms) and HTML-escaped. Column weights are based on the length of
//! the plain value, so the markup must not count.

const HIGHLIGHT_TAGS: [&str; 2] = ["<b>", "</b>"];

const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"];

/// Character length of a value without highlight markup
///
/// Highlight tags are matched case-insensitively and dropped; each of the
/// basic HTML entities counts as one character.
pub fn raw_value_length(value: &str) -> usize {
    let mut count = 0;
    let mut rest = value;

    'scan: while !rest.is_empty() {
        for tag in HIGHLIGHT_TAGS {
            if starts_with_ignore_ascii_case(rest, tag) {
                rest = &rest[tag.len()..];
                continue 'scan;
            }
        }

        for entity in ENTITIES {
            if rest.starts_with(entity) {
                count += 1;
                rest = &rest[entity.len()..];
                continue 'scan;
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        count += 1;
        rest = &rest[ch.len_utf8()..];
    }

    count
}

// `prefix` is ASCII, so a byte match ends on a char boundary
fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
