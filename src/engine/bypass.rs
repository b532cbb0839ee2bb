// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bypass-pattern matching.

use crate::commit::signed_off_by_values;

use super::options::BypassMode;

/// Find the first pattern that matches the raw message under the given mode.
///
/// Patterns are tested in the order given; the list order decides which
/// pattern surfaces in the bypass message.
pub fn first_match<'a>(raw: &str, patterns: &[&'a str], mode: BypassMode) -> Option<&'a str> {
    match mode {
        BypassMode::Substring => patterns.iter().copied().find(|pattern| raw.contains(pattern)),
        BypassMode::Trailer => {
            let trailers = signed_off_by_values(raw);
            patterns
                .iter()
                .copied()
                .find(|pattern| trailers.iter().any(|value| value.contains(pattern)))
        }
    }
}
