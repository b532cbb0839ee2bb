// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration and the starter file written by `lintgate init`.

use super::schema::LintgateConfig;

/// The default configuration.
pub fn default_config() -> LintgateConfig {
    LintgateConfig::default()
}

/// Starter configuration template for `lintgate init`.
pub fn starter_toml() -> &'static str {
    r#"# lintgate configuration
# https://github.com/eshanized/lintgate

# Set to "never" to disable the gate entirely.
condition = "always"

[delegation]
# Commits matching any of these patterns skip the rules below.
bypass_patterns = ["dependabot[bot]", "renovate[bot]"]

# "substring" matches anywhere in the raw message;
# "trailer" matches only Signed-off-by: trailer values.
bypass_mode = "substring"

# Rules enforced, in order, when no bypass pattern matched.
# The first failing rule decides the verdict.

[[delegation.rules_to_enforce]]
source = "builtin"
rule = "header-max-length"
options = 72

[[delegation.rules_to_enforce]]
source = "builtin"
rule = "body-leading-blank"
"#
}
