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

//! Shader-side core types: stages, backends, variant configurations,
//! opaque resource handles, and the variant table.

pub mod handle;
pub mod stage;
pub mod table;
pub mod variant;

pub use handle::{ProgramHandle, ShaderHandle};
pub use stage::{ShaderStage, TargetBackend};
pub use table::VariantTable;
pub use variant::VariantConfig;
