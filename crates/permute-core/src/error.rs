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

//! Defines the hierarchy of error types for the variant build pipeline.
//!
//! None of these errors escape a build run: the orchestrator degrades
//! every per-variant failure to the invalid-handle sentinel and keeps
//! going. The types exist so that each step can report precisely what
//! went wrong to the build log.

use std::fmt;

/// An error from one invocation of the external shader compiler.
#[derive(Debug)]
pub enum CompileError {
    /// The source file name matched neither the vertex nor the fragment
    /// suffix convention; the invoker declines rather than guessing.
    UnrecognizedStage {
        /// The offending source path.
        path: String,
    },
    /// The compiler process could not be started (or its output
    /// directory could not be prepared).
    Launch {
        /// The compiler executable that was being invoked.
        tool: String,
        /// The underlying OS error.
        details: String,
    },
    /// The compiler ran and reported failure (nonzero status).
    Failed {
        /// The compiler executable that was invoked.
        tool: String,
        /// The exit code, or `None` if the process died to a signal.
        code: Option<i32>,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnrecognizedStage { path } => {
                write!(
                    f,
                    "'{path}' matches neither the *.vert.* nor *.frag.* naming convention"
                )
            }
            CompileError::Launch { tool, details } => {
                write!(f, "Failed to launch shader compiler '{tool}': {details}")
            }
            CompileError::Failed { tool, code } => match code {
                Some(code) => write!(f, "Shader compiler '{tool}' exited with status {code}"),
                None => write!(f, "Shader compiler '{tool}' was terminated by a signal"),
            },
        }
    }
}

impl std::error::Error for CompileError {}

/// An error while loading a compiled artifact into the graphics runtime.
#[derive(Debug)]
pub enum LoadError {
    /// The artifact file could not be opened or read.
    Read {
        /// The artifact path that failed to load.
        path: String,
        /// The underlying I/O error.
        details: String,
    },
    /// The graphics runtime rejected the artifact bytes.
    Device {
        /// Error detail from the runtime.
        details: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, details } => {
                write!(f, "Failed to read shader artifact '{path}': {details}")
            }
            LoadError::Device { details } => {
                write!(f, "Graphics runtime rejected shader artifact: {details}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// An error while linking loaded stages into a pipeline program.
#[derive(Debug)]
pub enum LinkError {
    /// The vertex-stage handle was the invalid sentinel; a program
    /// cannot be linked without one.
    InvalidVertexStage,
    /// The graphics runtime's link step failed.
    Device {
        /// Error detail from the runtime.
        details: String,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::InvalidVertexStage => {
                write!(f, "Cannot link a program without a valid vertex stage")
            }
            LinkError::Device { details } => write!(f, "Program link failed: {details}"),
        }
    }
}

impl std::error::Error for LinkError {}

/// Any failure in one variant's build, compile through link.
///
/// Carried only between pipeline steps; the orchestrator converts it to
/// the invalid slot and a warning in the build log.
#[derive(Debug)]
pub enum BuildError {
    /// A stage failed to compile.
    Compile(CompileError),
    /// A compiled artifact failed to load.
    Load(LoadError),
    /// The loaded stages failed to link.
    Link(LinkError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Compile(err) => write!(f, "Compile step failed: {err}"),
            BuildError::Load(err) => write!(f, "Load step failed: {err}"),
            BuildError::Link(err) => write!(f, "Link step failed: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Compile(err) => Some(err),
            BuildError::Load(err) => Some(err),
            BuildError::Link(err) => Some(err),
        }
    }
}

impl From<CompileError> for BuildError {
    fn from(err: CompileError) -> Self {
        BuildError::Compile(err)
    }
}

impl From<LoadError> for BuildError {
    fn from(err: LoadError) -> Self {
        BuildError::Load(err)
    }
}

impl From<LinkError> for BuildError {
    fn from(err: LinkError) -> Self {
        BuildError::Link(err)
    }
}
