//! Ordering of puzzle URLs by their encoded suffix code.
//!
//! Puzzle images are named `...-xxxx.jpg` where `xxxx` is a fixed-width
//! alphabetic code; sorting on that code puts the pieces in place. The key
//! is the four characters just before the last four (the extension).

/// Minimum length for which [`sort_key`] yields the full four-character code.
pub const MIN_KEYED_LEN: usize = 8;

/// Returns the characters at offsets `[-8, -4)` from the end of `url`.
///
/// Offsets count characters, not bytes. Shorter inputs clamp to the start
/// of the string: 5..=7 characters yield the leading `len - 4`, and 4 or
/// fewer yield `""`.
pub fn sort_key(url: &str) -> &str {
    let len = url.chars().count();
    let start = len.saturating_sub(8);
    let end = len.saturating_sub(4);
    let byte_at = |n: usize| url.char_indices().nth(n).map_or(url.len(), |(i, _)| i);
    &url[byte_at(start)..byte_at(end)]
}

/// Sorts `urls` ascending by [`sort_key`]; equal keys fall back to the full URL.
pub fn order_urls(urls: &mut [String]) {
    for url in urls.iter() {
        if url.chars().count() < MIN_KEYED_LEN {
            tracing::warn!(url = %url, "url shorter than {} chars; sort key clamped", MIN_KEYED_LEN);
        }
    }
    urls.sort_by(|a, b| sort_key(a).cmp(sort_key(b)).then_with(|| a.cmp(b)));
}
