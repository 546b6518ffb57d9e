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

use crate::error::{LinkError, LoadError};
use crate::shader::{ProgramHandle, ShaderHandle};
use std::fmt::Debug;

/// The narrow slice of the graphics runtime the build pipeline consumes.
///
/// A device is an explicit context object handed to every component that
/// registers resources — never ambient global state. It must be
/// initialized before the first call and torn down only after every
/// handle it issued has been destroyed.
pub trait GraphicsDevice: Send + Sync + Debug {
    /// Registers compiled artifact bytes as a shader object.
    ///
    /// Ownership of `data` passes to the runtime; the caller retains no
    /// reference to the buffer.
    ///
    /// ## Returns
    /// A `Result` containing the handle of the new shader object.
    ///
    /// ## Errors
    /// * `LoadError` - If the runtime rejects the artifact bytes.
    fn create_shader(&self, data: Vec<u8>) -> Result<ShaderHandle, LoadError>;

    /// Attaches a human-readable debug name to a shader object, visible
    /// in runtime diagnostics. Best-effort; has no failure mode.
    fn set_debug_name(&self, handle: ShaderHandle, name: &str);

    /// Links shader stages into one pipeline program.
    ///
    /// The fragment stage is optional (vertex-only pipelines). The
    /// runtime consumes both shader handles whether or not linking
    /// succeeds — they are released together with the program and must
    /// not be destroyed separately afterwards.
    ///
    /// ## Returns
    /// A `Result` containing the handle of the linked program.
    ///
    /// ## Errors
    /// * `LinkError` - If the runtime's link step fails.
    fn create_program(
        &self,
        vertex: ShaderHandle,
        fragment: Option<ShaderHandle>,
    ) -> Result<ProgramHandle, LinkError>;

    /// Destroys a shader object that was never handed to
    /// [`create_program`](Self::create_program).
    fn destroy_shader(&self, handle: ShaderHandle);

    /// Destroys a linked program and the shader objects it consumed.
    fn destroy_program(&self, handle: ProgramHandle);
}
