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

//! Shader stages and target backends, with the naming and profile
//! conventions the external compiler expects.

use std::fmt;
use std::path::Path;

/// One pipeline phase of a shader program, compiled as a separate artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex-processing stage.
    Vertex,
    /// The fragment (pixel) stage.
    Fragment,
}

impl ShaderStage {
    /// Infers the stage from a shader source file name.
    ///
    /// Sources follow the suffix convention `*.vert.*` for vertex shaders
    /// and `*.frag.*` for fragment shaders. Returns `None` when neither
    /// suffix matches; callers must decline to compile rather than guess.
    pub fn from_source_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.contains(".vert.") {
            Some(Self::Vertex)
        } else if name.contains(".frag.") {
            Some(Self::Fragment)
        } else {
            None
        }
    }

    /// The stage tag used in cached artifact file names (`vert` / `frag`).
    pub fn file_tag(&self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }

    /// The stage name passed to the external compiler's `--type` flag.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

/// The graphics backend a variant is compiled for.
///
/// The backend selects both the `--platform` identifier and the
/// per-stage `--profile` string handed to the external compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetBackend {
    /// Direct3D 11 (HLSL shader-model 5 profiles).
    Direct3D11,
    /// OpenGL (GLSL profile `120` for both stages).
    OpenGl,
}

impl TargetBackend {
    /// The platform identifier for the compiler's `--platform` flag.
    pub fn platform_name(&self) -> &'static str {
        match self {
            Self::Direct3D11 => "windows",
            Self::OpenGl => "linux",
        }
    }

    /// The target profile string for the given stage.
    ///
    /// Direct3D distinguishes vertex and pixel profiles; GLSL uses a
    /// single version string for both stages.
    pub fn profile(&self, stage: ShaderStage) -> &'static str {
        match (self, stage) {
            (Self::Direct3D11, ShaderStage::Vertex) => "vs_5_0",
            (Self::Direct3D11, ShaderStage::Fragment) => "ps_5_0",
            (Self::OpenGl, _) => "120",
        }
    }
}

impl fmt::Display for TargetBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct3D11 => f.write_str("Direct3D11"),
            Self::OpenGl => f.write_str("OpenGL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn stage_inferred_from_suffix_convention() {
        assert_eq!(
            ShaderStage::from_source_path(Path::new("shaders/uberprogram.vert.sc")),
            Some(ShaderStage::Vertex)
        );
        assert_eq!(
            ShaderStage::from_source_path(Path::new("shaders/uberprogram.frag.sc")),
            Some(ShaderStage::Fragment)
        );
    }

    #[test]
    fn unrecognized_suffix_yields_none() {
        assert_eq!(
            ShaderStage::from_source_path(Path::new("shaders/uberprogram.comp.sc")),
            None
        );
        assert_eq!(ShaderStage::from_source_path(Path::new("readme.txt")), None);
    }

    #[test]
    fn profiles_per_backend_and_stage() {
        assert_eq!(TargetBackend::Direct3D11.profile(ShaderStage::Vertex), "vs_5_0");
        assert_eq!(
            TargetBackend::Direct3D11.profile(ShaderStage::Fragment),
            "ps_5_0"
        );
        assert_eq!(TargetBackend::OpenGl.profile(ShaderStage::Vertex), "120");
        assert_eq!(TargetBackend::OpenGl.profile(ShaderStage::Fragment), "120");
    }

    #[test]
    fn platform_names() {
        assert_eq!(TargetBackend::Direct3D11.platform_name(), "windows");
        assert_eq!(TargetBackend::OpenGl.platform_name(), "linux");
    }
}
