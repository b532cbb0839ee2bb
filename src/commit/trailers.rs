// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `Signed-off-by:` trailer extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches `Signed-off-by: <value>` lines anywhere in the message,
    /// case-insensitively.
    static ref SIGNED_OFF_BY: Regex = Regex::new(r"(?im)^signed-off-by:(.*)$").unwrap();
}

/// Extract all `Signed-off-by:` trailer values from a raw commit message.
///
/// Values are trimmed of surrounding whitespace. An absence of trailers is
/// not an error; the returned list is simply empty.
pub fn signed_off_by_values(raw: &str) -> Vec<String> {
    SIGNED_OFF_BY
        .captures_iter(raw)
        .map(|captures| captures[1].trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
