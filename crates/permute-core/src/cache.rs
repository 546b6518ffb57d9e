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

//! Deterministic cache keys and artifact paths.
//!
//! The cache has no manifest: an artifact's path is a pure function of
//! (cache directory, program name, cache key, stage), and the existence
//! of that path is the index. The key algorithm is fixed for the
//! lifetime of a cache directory; changing it silently invalidates every
//! existing entry.

use crate::shader::{ShaderStage, VariantConfig};
use std::fmt;
use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// Default namespace directory for cached artifacts, relative to the
/// working directory of the build run.
pub const DEFAULT_CACHE_DIR: &str = "shader_cache";

/// A short, stable identifier for one variant configuration.
///
/// Derived from the configuration string's bytes with xxh3-64. Distinct
/// configurations could in principle collide, but at 64 bits the risk is
/// negligible against realistic variant counts, so no config string is
/// stored alongside the artifact for verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Derives the key for a variant configuration.
    ///
    /// Pure and total: every string (including the empty base variant)
    /// yields a key, identically across calls, runs, and processes.
    pub fn derive(config: &VariantConfig) -> Self {
        Self(xxh3_64(config.as_str().as_bytes()))
    }

    /// The raw key value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Maps (program name, key, stage) to the cached artifact's path under
/// `cache_dir`, pattern `<name>.<key>.<vert|frag>.bin`.
///
/// Pure: no filesystem access, no dependence on call order or prior
/// state.
pub fn artifact_path(
    cache_dir: &Path,
    program_name: &str,
    key: CacheKey,
    stage: ShaderStage,
) -> PathBuf {
    cache_dir.join(format!("{program_name}.{key}.{}.bin", stage.file_tag()))
}
