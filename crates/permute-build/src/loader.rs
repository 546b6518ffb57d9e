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

//! Loads compiled shader artifacts from the cache into the graphics
//! runtime.

use permute_core::error::LoadError;
use permute_core::shader::ShaderHandle;
use permute_core::traits::GraphicsDevice;
use std::fs;
use std::path::Path;

/// Reads the artifact at `path` and registers it with the device as a
/// shader object, with the path attached as its debug name.
///
/// The buffer handed to the device is the file content plus one trailing
/// zero byte: some backends embed printable shader text in the artifact,
/// and the extra byte keeps the blob treatable as a null-terminated
/// string regardless of its actual encoding. Ownership of the buffer
/// passes to the device.
pub fn load_shader(device: &dyn GraphicsDevice, path: &Path) -> Result<ShaderHandle, LoadError> {
    let bytes = fs::read(path).map_err(|err| LoadError::Read {
        path: path.display().to_string(),
        details: err.to_string(),
    })?;

    let mut data = Vec::with_capacity(bytes.len() + 1);
    data.extend_from_slice(&bytes);
    data.push(0);

    let handle = device.create_shader(data)?;
    device.set_debug_name(handle, &path.display().to_string());
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use permute_core::error::LinkError;
    use permute_core::shader::ProgramHandle;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingDevice {
        shaders: Mutex<Vec<(Vec<u8>, String)>>,
    }

    impl GraphicsDevice for RecordingDevice {
        fn create_shader(&self, data: Vec<u8>) -> Result<ShaderHandle, LoadError> {
            let mut shaders = self.shaders.lock().unwrap();
            let handle = ShaderHandle(shaders.len() as u16);
            shaders.push((data, String::new()));
            Ok(handle)
        }

        fn set_debug_name(&self, handle: ShaderHandle, name: &str) {
            self.shaders.lock().unwrap()[handle.0 as usize].1 = name.to_string();
        }

        fn create_program(
            &self,
            _vertex: ShaderHandle,
            _fragment: Option<ShaderHandle>,
        ) -> Result<ProgramHandle, LinkError> {
            unreachable!("loader tests never link");
        }

        fn destroy_shader(&self, _handle: ShaderHandle) {}
        fn destroy_program(&self, _handle: ProgramHandle) {}
    }

    #[test]
    fn loads_artifact_with_trailing_zero_and_debug_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"compiled-blob").unwrap();

        let device = RecordingDevice::default();
        let handle = load_shader(&device, file.path()).unwrap();
        assert!(handle.is_valid());

        let shaders = device.shaders.lock().unwrap();
        let (data, name) = &shaders[handle.0 as usize];
        assert_eq!(data.as_slice(), b"compiled-blob\0");
        assert_eq!(name, &file.path().display().to_string());
    }

    #[test]
    fn missing_artifact_is_a_read_error() {
        let device = RecordingDevice::default();
        let err = load_shader(&device, Path::new("no/such/artifact.vert.bin")).unwrap_err();
        match err {
            LoadError::Read { path, .. } => assert!(path.ends_with("artifact.vert.bin")),
            other => panic!("expected Read error, got {other:?}"),
        }
        assert!(device.shaders.lock().unwrap().is_empty());
    }
}
