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

//! Opaque handles issued by the graphics runtime.
//!
//! Both handle types reserve `u16::MAX` as an explicit "not available"
//! sentinel, distinct from every valid handle value. Failure anywhere in
//! the build pipeline degrades to the sentinel rather than raising; every
//! consumer must check [`is_valid`](ShaderHandle::is_valid) before use.

/// An opaque handle for one loaded compiled shader artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(pub u16);

impl ShaderHandle {
    /// The invalid sentinel, signaling "no usable shader".
    pub const INVALID: Self = Self(u16::MAX);

    /// `true` unless this is the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

/// An opaque handle for a linked (vertex, fragment) pipeline program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramHandle(pub u16);

impl ProgramHandle {
    /// The invalid sentinel, signaling "no usable program".
    pub const INVALID: Self = Self(u16::MAX);

    /// `true` unless this is the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}
