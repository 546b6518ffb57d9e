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

//! # Permute Build
//!
//! The driving layer of the variant pipeline: loads compiled artifacts
//! into the graphics runtime, links them into pipeline programs, and
//! orchestrates the whole per-variant compile-cache-load-link run.
//!
//! Everything here is generic over the [`ShaderCompiler`] and
//! [`GraphicsDevice`] contracts from `permute-core`; no concrete backend
//! is referenced.
//!
//! [`ShaderCompiler`]: permute_core::traits::ShaderCompiler
//! [`GraphicsDevice`]: permute_core::traits::GraphicsDevice

#![warn(missing_docs)]

pub mod linker;
pub mod loader;
pub mod orchestrator;

pub use linker::link_program;
pub use loader::load_shader;
pub use orchestrator::{BuildRequest, VariantBuilder};
