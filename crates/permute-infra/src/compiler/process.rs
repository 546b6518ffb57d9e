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

//! A [`ShaderCompiler`] that shells out to an external compiler
//! executable (a `shaderc`-style command-line tool).

use permute_core::error::CompileError;
use permute_core::shader::ShaderStage;
use permute_core::traits::{CompileRequest, ShaderCompiler};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Fixed optimization level for every invocation.
const OPT_LEVEL: &str = "3";

/// Drives an external shader-compiler executable, one blocking process
/// per (stage, variant) pair.
///
/// The tool contract: `-f <src> -i <include> -o <out> --platform <id>
/// --type <vertex|fragment> --profile <str> -O 3 --define <defs>`,
/// success signaled by a zero exit status. No timeout is imposed; a hung
/// compiler blocks the build run.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
    tool: PathBuf,
}

impl ProcessCompiler {
    /// Creates a compiler invoking the given executable, resolved
    /// through `PATH` if not an explicit path.
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// The executable this compiler invokes.
    pub fn tool(&self) -> &PathBuf {
        &self.tool
    }

    /// Builds the full argument list for one invocation.
    fn argv(request: &CompileRequest<'_>, stage: ShaderStage) -> Vec<OsString> {
        let backend = request.backend;
        vec![
            OsString::from("-f"),
            request.source_path.into(),
            OsString::from("-i"),
            request.include_dir.into(),
            OsString::from("-o"),
            request.output_path.into(),
            OsString::from("--platform"),
            OsString::from(backend.platform_name()),
            OsString::from("--type"),
            OsString::from(stage.tool_name()),
            OsString::from("--profile"),
            OsString::from(backend.profile(stage)),
            OsString::from("-O"),
            OsString::from(OPT_LEVEL),
            OsString::from("--define"),
            OsString::from(request.config.as_str()),
        ]
    }
}

impl ShaderCompiler for ProcessCompiler {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<(), CompileError> {
        // Never guess the stage: an unrecognized source name declines here.
        let stage = ShaderStage::from_source_path(request.source_path).ok_or_else(|| {
            CompileError::UnrecognizedStage {
                path: request.source_path.display().to_string(),
            }
        })?;

        // The tool writes the artifact itself but expects the directory
        // to exist.
        if let Some(parent) = request.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| CompileError::Launch {
                    tool: self.tool.display().to_string(),
                    details: err.to_string(),
                })?;
            }
        }

        let args = Self::argv(request, stage);
        log::debug!(
            "ProcessCompiler: {} {}",
            self.tool.display(),
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.tool)
            .args(&args)
            .status()
            .map_err(|err| CompileError::Launch {
                tool: self.tool.display().to_string(),
                details: err.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed {
                tool: self.tool.display().to_string(),
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permute_core::shader::{TargetBackend, VariantConfig};
    use std::path::Path;

    fn request<'a>(
        source: &'a Path,
        output: &'a Path,
        backend: TargetBackend,
        config: &'a VariantConfig,
    ) -> CompileRequest<'a> {
        CompileRequest {
            source_path: source,
            include_dir: Path::new("src"),
            output_path: output,
            backend,
            config,
        }
    }

    #[test]
    fn argv_for_d3d11_vertex_stage() {
        let config = VariantConfig::new("COLOR=1");
        let req = request(
            Path::new("shaders/cube.vert.sc"),
            Path::new("shader_cache/cube.vert.bin"),
            TargetBackend::Direct3D11,
            &config,
        );
        let args = ProcessCompiler::argv(&req, ShaderStage::Vertex);
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "-f",
                "shaders/cube.vert.sc",
                "-i",
                "src",
                "-o",
                "shader_cache/cube.vert.bin",
                "--platform",
                "windows",
                "--type",
                "vertex",
                "--profile",
                "vs_5_0",
                "-O",
                "3",
                "--define",
                "COLOR=1",
            ]
        );
    }

    #[test]
    fn argv_for_opengl_fragment_stage_uses_glsl_profile() {
        let config = VariantConfig::new("");
        let req = request(
            Path::new("shaders/cube.frag.sc"),
            Path::new("shader_cache/cube.frag.bin"),
            TargetBackend::OpenGl,
            &config,
        );
        let args = ProcessCompiler::argv(&req, ShaderStage::Fragment);
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(&args[6..12], &["--platform", "linux", "--type", "fragment", "--profile", "120"]);
        // The empty base variant still passes an (empty) define list.
        assert_eq!(&args[14..], &["--define", ""]);
    }

    #[test]
    fn unrecognized_source_name_declines_before_spawning() {
        let config = VariantConfig::new("");
        let compiler = ProcessCompiler::new("this-tool-must-not-run");
        let req = request(
            Path::new("shaders/cube.geom.sc"),
            Path::new("shader_cache/cube.geom.bin"),
            TargetBackend::OpenGl,
            &config,
        );
        match compiler.compile(&req) {
            Err(CompileError::UnrecognizedStage { path }) => {
                assert!(path.ends_with("cube.geom.sc"));
            }
            other => panic!("expected UnrecognizedStage, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_status_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = VariantConfig::new("COLOR=2");
        let out = dir.path().join("cache/cube.vert.bin");
        let compiler = ProcessCompiler::new("true");
        let req = request(
            Path::new("shaders/cube.vert.sc"),
            &out,
            TargetBackend::OpenGl,
            &config,
        );
        assert!(compiler.compile(&req).is_ok());
        // Output directory was prepared for the tool.
        assert!(out.parent().unwrap().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_status_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = VariantConfig::new("");
        let out = dir.path().join("cube.frag.bin");
        let compiler = ProcessCompiler::new("false");
        let req = request(
            Path::new("shaders/cube.frag.sc"),
            &out,
            TargetBackend::OpenGl,
            &config,
        );
        match compiler.compile(&req) {
            Err(CompileError::Failed { code, .. }) => assert_eq!(code, Some(1)),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
