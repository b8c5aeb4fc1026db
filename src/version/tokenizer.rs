//! Version string tokenizer
//!
//! Parsing happens in two stages: the whole input is validated against the
//! version grammar first, and only then are the tokens converted to integers.
//!
//! Grammar: `""` or `digits('.'digits)*`

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::error::VersionError;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)*$").unwrap());

/// Split a version string into its dot-separated tokens.
///
/// The empty string is valid and yields no tokens.
pub fn tokenize(input: &str) -> Result<Vec<&str>, VersionError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    if !VERSION_RE.is_match(input) {
        debug!("Rejected version string '{}'", input);
        return Err(VersionError::InvalidVersionFormat(input.to_string()));
    }

    Ok(input.split('.').collect())
}

/// Parse a version string into its integer components, in order.
pub fn parse_components(input: &str) -> Result<Vec<u64>, VersionError> {
    tokenize(input)?
        .into_iter()
        .map(|token| {
            token.parse::<u64>().map_err(|e| {
                debug!("Component '{}' of '{}' out of range: {}", token, input, e);
                VersionError::InvalidVersionFormat(input.to_string())
            })
        })
        .collect()
}
