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

//! The variant build orchestrator: drives key derivation, compilation,
//! artifact loading, and linking for every variant of one shader
//! program.

use crate::linker::link_program;
use crate::loader::load_shader;
use permute_core::cache::{artifact_path, CacheKey};
use permute_core::error::{BuildError, CompileError};
use permute_core::shader::{ProgramHandle, ShaderStage, TargetBackend, VariantConfig, VariantTable};
use permute_core::traits::{CompileRequest, GraphicsDevice, ShaderCompiler};
use std::path::{Path, PathBuf};

/// The fixed inputs of one build run: one shader program, one backend,
/// one cache namespace. The variant set is passed separately to
/// [`VariantBuilder::build`].
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Logical program name, the first component of artifact file names.
    pub program_name: String,
    /// The vertex-stage source (`*.vert.*`).
    pub vertex_source: PathBuf,
    /// The fragment-stage source (`*.frag.*`).
    pub fragment_source: PathBuf,
    /// Include-search directory for the compiler.
    pub include_dir: PathBuf,
    /// Namespace directory for cached artifacts.
    pub cache_dir: PathBuf,
    /// Backend selecting platform and target profiles.
    pub backend: TargetBackend,
}

impl BuildRequest {
    /// The cached-artifact path for `stage` under this request's
    /// namespace and program name.
    fn artifact(&self, key: CacheKey, stage: ShaderStage) -> PathBuf {
        artifact_path(&self.cache_dir, &self.program_name, key, stage)
    }
}

/// Sequentially builds a [`VariantTable`] from an ordered variant set.
///
/// Variants are mutually independent; a failure in one never blocks the
/// rest of the run. Each failed variant's slot holds
/// [`ProgramHandle::INVALID`] and the reason lands in the build log.
#[derive(Debug)]
pub struct VariantBuilder<C: ShaderCompiler> {
    compiler: C,
}

impl<C: ShaderCompiler> VariantBuilder<C> {
    /// Creates a builder driving the given compiler backend.
    pub fn new(compiler: C) -> Self {
        Self { compiler }
    }

    /// Builds every variant in order and returns the resulting table.
    ///
    /// The table has exactly one entry per input variant, in input
    /// order. Every entry is either a fully linked program (both stages
    /// compiled, loaded, and linked) or the invalid sentinel; consumers
    /// must check validity before drawing with an entry.
    pub fn build(
        &self,
        device: &dyn GraphicsDevice,
        request: &BuildRequest,
        variants: &[VariantConfig],
    ) -> VariantTable {
        log::info!(
            "Building {} variant(s) of '{}' for {}",
            variants.len(),
            request.program_name,
            request.backend
        );

        let mut programs = Vec::with_capacity(variants.len());
        for (index, config) in variants.iter().enumerate() {
            match self.build_variant(device, request, config) {
                Ok(program) => {
                    log::debug!("Variant {index} ({config}) ready: {program:?}");
                    programs.push(program);
                }
                Err(err) => {
                    // Per-variant isolation: report and keep going, so one
                    // bad permutation cannot block the others.
                    log::warn!("Variant {index} ({config}) unavailable: {err}");
                    programs.push(ProgramHandle::INVALID);
                }
            }
        }

        VariantTable::from_parts(variants.to_vec(), programs)
    }

    /// Compiles every variant into the cache without loading or linking.
    ///
    /// Used by front ends that have no graphics runtime (the standalone
    /// cache-population tool). Returns one result per variant, in input
    /// order.
    pub fn compile_only(
        &self,
        request: &BuildRequest,
        variants: &[VariantConfig],
    ) -> Vec<Result<(), CompileError>> {
        variants
            .iter()
            .map(|config| self.compile_stages(request, config).map(|_| ()))
            .collect()
    }

    /// Runs the full pipeline for one variant.
    fn build_variant(
        &self,
        device: &dyn GraphicsDevice,
        request: &BuildRequest,
        config: &VariantConfig,
    ) -> Result<ProgramHandle, BuildError> {
        let (vertex_artifact, fragment_artifact) = self.compile_stages(request, config)?;

        let vertex = load_shader(device, &vertex_artifact)?;
        let fragment = match load_shader(device, &fragment_artifact) {
            Ok(handle) => handle,
            Err(err) => {
                // The vertex stage was already registered; without a
                // program to adopt it, release it here or it leaks.
                device.destroy_shader(vertex);
                return Err(err.into());
            }
        };

        let program = link_program(device, vertex, Some(fragment))?;
        Ok(program)
    }

    /// Compiles both stages of one variant into the cache, returning the
    /// artifact paths on success.
    fn compile_stages(
        &self,
        request: &BuildRequest,
        config: &VariantConfig,
    ) -> Result<(PathBuf, PathBuf), CompileError> {
        let key = CacheKey::derive(config);
        let vertex_artifact = request.artifact(key, ShaderStage::Vertex);
        let fragment_artifact = request.artifact(key, ShaderStage::Fragment);

        self.compile_one(request, &request.vertex_source, &vertex_artifact, config)?;
        self.compile_one(request, &request.fragment_source, &fragment_artifact, config)?;
        Ok((vertex_artifact, fragment_artifact))
    }

    fn compile_one(
        &self,
        request: &BuildRequest,
        source: &Path,
        output: &Path,
        config: &VariantConfig,
    ) -> Result<(), CompileError> {
        self.compiler.compile(&CompileRequest {
            source_path: source,
            include_dir: &request.include_dir,
            output_path: output,
            backend: request.backend,
            config,
        })
    }
}
