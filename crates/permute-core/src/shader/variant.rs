// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// One compile-time configuration of a shader program.
///
/// The content is an opaque configuration string handed verbatim to the
/// external compiler as its preprocessor-definition list — by convention a
/// semicolon-separated list of `SYMBOL=VALUE` pairs, e.g.
/// `"COLOR=2;USE_TEX0"`. The empty string is a valid variant (no defines).
///
/// Configs are immutable; the full variant set is fixed before a build
/// run starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantConfig(String);

impl VariantConfig {
    /// Creates a variant configuration from a defines string.
    pub fn new(defines: impl Into<String>) -> Self {
        Self(defines.into())
    }

    /// The raw defines string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for the base variant (no preprocessor definitions).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for VariantConfig {
    fn from(defines: &str) -> Self {
        Self::new(defines)
    }
}

impl fmt::Display for VariantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<base>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_a_valid_variant() {
        let base = VariantConfig::new("");
        assert!(base.is_empty());
        assert_eq!(base.as_str(), "");
        assert_eq!(format!("{base}"), "<base>");
    }

    #[test]
    fn config_content_is_opaque_and_preserved() {
        let cfg = VariantConfig::new("COLOR=2;USE_TEX0");
        assert_eq!(cfg.as_str(), "COLOR=2;USE_TEX0");
        assert_eq!(format!("{cfg}"), "COLOR=2;USE_TEX0");
    }
}
