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

//! # Permute Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for the shader-variant build pipeline.
//!
//! This crate defines the "common language" of the pipeline: stage and
//! backend enums, variant configurations, deterministic cache keys and
//! artifact paths, opaque resource handles, and the capability traits
//! ([`ShaderCompiler`], [`GraphicsDevice`]) that the `permute-infra` and
//! `permute-build` crates implement and drive. It performs no I/O itself.

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod shader;
pub mod traits;

pub use cache::{artifact_path, CacheKey, DEFAULT_CACHE_DIR};
pub use error::{BuildError, CompileError, LinkError, LoadError};
pub use shader::{
    ProgramHandle, ShaderHandle, ShaderStage, TargetBackend, VariantConfig, VariantTable,
};
pub use traits::{CompileRequest, GraphicsDevice, ShaderCompiler};
