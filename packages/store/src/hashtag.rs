//! Hashtag extraction from free-form video descriptions.

use std::collections::BTreeSet;

/// Normalize a tag for comparison: lowercase with a single leading `#`.
///
/// Returns `None` when nothing taggable remains.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let body = raw.trim().trim_start_matches('#');
    if body.is_empty() || !body.chars().all(is_tag_char) {
        return None;
    }
    Some(format!("#{}", body.to_lowercase()))
}

/// Distinct, normalized hashtags appearing in `text`.
///
/// A tag is `#` followed by one or more alphanumeric or `_` characters.
pub fn extract_hashtags(text: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '#' {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !is_tag_char(next) {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }
        if let Some(tag) = normalize_tag(&text[start..end]) {
            tags.insert(tag);
        }
    }

    tags
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
