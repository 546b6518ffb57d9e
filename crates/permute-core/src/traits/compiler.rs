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

use crate::error::CompileError;
use crate::shader::{TargetBackend, VariantConfig};
use std::fmt::Debug;
use std::path::Path;

/// Describes one compilation of one (stage, variant) pair.
///
/// The stage is not carried here: implementations infer it from the
/// source file's suffix convention and must decline (with
/// [`CompileError::UnrecognizedStage`]) when the name matches neither
/// stage, rather than guessing.
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    /// The shader source file (`*.vert.*` or `*.frag.*`).
    pub source_path: &'a Path,
    /// Include-search directory passed to the compiler.
    pub include_dir: &'a Path,
    /// Where the compiled artifact must be written on success.
    pub output_path: &'a Path,
    /// The backend selecting platform identifier and target profile.
    pub backend: TargetBackend,
    /// The variant's preprocessor-definition list.
    pub config: &'a VariantConfig,
}

/// The external shader compiler, as a capability.
///
/// Implementations may shell out to a subprocess, link a compiler
/// library directly, or call a remote build service; the build layer
/// depends only on this contract.
pub trait ShaderCompiler: Send + Sync + Debug {
    /// Compiles one (stage, variant) pair.
    ///
    /// ## Returns
    /// `Ok(())` iff the compiler reported success, in which case exactly
    /// one artifact file exists at `request.output_path`. On error the
    /// output file may be absent or stale; callers must not assume it
    /// exists.
    ///
    /// ## Errors
    /// * `CompileError` - If the stage cannot be inferred from the source
    ///   name, the compiler cannot be launched, or it exits nonzero.
    ///   A single failure is terminal for this pair; there is no retry.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<(), CompileError>;
}
