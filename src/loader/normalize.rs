use lazy_static::lazy_static;
use regex::Regex;

/// Marker the export tool prepends to timestamps.
pub const TIMESTAMP_MARKER: &str = "— \n";

pub struct FieldNormalizer;

impl FieldNormalizer {
    /// Strips surrounding whitespace and wrapping quotation marks from a
    /// markup cell, e.g. `"\"Half-Life\" "` becomes `Half-Life`.
    pub fn markup_name(value: &str) -> String {
        value
            .trim()
            .trim_matches(|c: char| QUOTES.contains(&c))
            .trim()
            .to_owned()
    }

    /// True if `value` is a link rather than a display name.
    pub fn looks_like_url(value: &str) -> bool {
        lazy_static! {
            static ref URL: Regex = Regex::new(r"(?i)^([a-z][a-z0-9+.-]*://|www\.)").unwrap();
        }
        URL.is_match(value.trim())
    }

    /// Derives a display name from the last non-empty path segment of `url`,
    /// e.g. `https://store.steampowered.com/app/220/Half_Life_2/` gives
    /// `Half Life 2`.
    pub fn name_from_url(url: &str) -> Option<String> {
        lazy_static! {
            static ref SEPARATORS: Regex = Regex::new(r"[_-]+").unwrap();
        }

        let url = url.split(['?', '#']).next().unwrap_or_default();
        let path = match url.find("://") {
            Some(pos) => {
                let rest = &url[pos + 3..];
                rest.find('/').map(|i| &rest[i..]).unwrap_or_default()
            }
            None => url,
        };
        let segment = path.split('/').rev().find(|s| !s.trim().is_empty())?;

        let name = SEPARATORS.replace_all(segment, " ");
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        match name.is_empty() {
            true => None,
            false => Some(name),
        }
    }

    /// Removes the export marker from the start of a timestamp.
    pub fn timestamp(value: &str) -> &str {
        value.strip_prefix(TIMESTAMP_MARKER).unwrap_or(value)
    }
}

const QUOTES: &[char] = &['"', '\'', '“', '”'];
