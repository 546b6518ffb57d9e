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

//! Links loaded shader stages into pipeline programs.

use permute_core::error::LinkError;
use permute_core::shader::{ProgramHandle, ShaderHandle};
use permute_core::traits::GraphicsDevice;

/// Combines a vertex stage and an optional fragment stage into one
/// linked program.
///
/// A valid vertex handle is required; the fragment stage may be absent
/// for vertex-only pipelines. This is a thin combinator: all validation
/// beyond the vertex-handle check is delegated to the device's own link
/// step. The device consumes both shader handles either way.
pub fn link_program(
    device: &dyn GraphicsDevice,
    vertex: ShaderHandle,
    fragment: Option<ShaderHandle>,
) -> Result<ProgramHandle, LinkError> {
    if !vertex.is_valid() {
        return Err(LinkError::InvalidVertexStage);
    }
    device.create_program(vertex, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use permute_core::error::LoadError;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct LinkOnlyDevice {
        linked: Mutex<Vec<(ShaderHandle, Option<ShaderHandle>)>>,
    }

    impl GraphicsDevice for LinkOnlyDevice {
        fn create_shader(&self, _data: Vec<u8>) -> Result<ShaderHandle, LoadError> {
            unreachable!("linker tests never load");
        }

        fn set_debug_name(&self, _handle: ShaderHandle, _name: &str) {}

        fn create_program(
            &self,
            vertex: ShaderHandle,
            fragment: Option<ShaderHandle>,
        ) -> Result<ProgramHandle, LinkError> {
            let mut linked = self.linked.lock().unwrap();
            let handle = ProgramHandle(linked.len() as u16);
            linked.push((vertex, fragment));
            Ok(handle)
        }

        fn destroy_shader(&self, _handle: ShaderHandle) {}
        fn destroy_program(&self, _handle: ProgramHandle) {}
    }

    #[test]
    fn links_vertex_and_fragment_pair() {
        let device = LinkOnlyDevice::default();
        let program = link_program(&device, ShaderHandle(0), Some(ShaderHandle(1))).unwrap();
        assert!(program.is_valid());
        assert_eq!(
            device.linked.lock().unwrap()[0],
            (ShaderHandle(0), Some(ShaderHandle(1)))
        );
    }

    #[test]
    fn vertex_only_pipelines_are_allowed() {
        let device = LinkOnlyDevice::default();
        assert!(link_program(&device, ShaderHandle(3), None).is_ok());
    }

    #[test]
    fn invalid_vertex_handle_is_rejected_before_the_device() {
        let device = LinkOnlyDevice::default();
        let err = link_program(&device, ShaderHandle::INVALID, Some(ShaderHandle(0))).unwrap_err();
        assert!(matches!(err, LinkError::InvalidVertexStage));
        assert!(device.linked.lock().unwrap().is_empty());
    }
}
