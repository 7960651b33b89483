use crate::core::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

// source labels use an en-dash, hand-written answer files tend to use a hyphen
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[–-]").expect("valid separator regex"));

/// Extracts the leading ordinal from a label like `"3 – once per week"`.
///
/// Whatever precedes the first en-dash or hyphen must be a decimal integer,
/// optionally surrounded by whitespace.
pub fn extract_number(label: &str) -> Result<u8, ParseError> {
    let Some(separator) = SEPARATOR_RE.find(label) else {
        return Err(ParseError::MissingSeparator(label.to_string()));
    };

    let prefix = label[..separator.start()].trim();
    if prefix.is_empty() {
        return Err(ParseError::EmptyPrefix(label.to_string()));
    }

    prefix
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidPrefix(label.to_string()))
}
