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

use crate::shader::{ProgramHandle, VariantConfig};
use crate::traits::GraphicsDevice;

/// The ordered result of one variant build run.
///
/// One entry per input variant, index-addressable in input order. Built
/// once at startup and read-only during rendering. Every entry is either
/// a fully linked program or [`ProgramHandle::INVALID`] — a partially
/// built program (one stage of two) is never exposed.
///
/// Consumers query by index and must skip invalid entries at draw time;
/// at shutdown the owner releases the table through [`release`].
///
/// [`release`]: VariantTable::release
#[derive(Debug)]
pub struct VariantTable {
    entries: Vec<(VariantConfig, ProgramHandle)>,
}

impl VariantTable {
    /// Builds a table from parallel config and program sequences.
    ///
    /// # Panics
    /// Panics if the two sequences disagree in length; the variant set
    /// and the program set must describe the same build run.
    pub fn from_parts(configs: Vec<VariantConfig>, programs: Vec<ProgramHandle>) -> Self {
        assert_eq!(
            configs.len(),
            programs.len(),
            "variant configs and program handles must agree in length"
        );
        Self {
            entries: configs.into_iter().zip(programs).collect(),
        }
    }

    /// Number of variants in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` for an empty variant set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The program handle for the variant at `index`, if in range.
    ///
    /// The returned handle may be [`ProgramHandle::INVALID`]; check
    /// validity before drawing with it.
    pub fn program(&self, index: usize) -> Option<ProgramHandle> {
        self.entries.get(index).map(|(_, program)| *program)
    }

    /// The configuration of the variant at `index`, if in range.
    pub fn config(&self, index: usize) -> Option<&VariantConfig> {
        self.entries.get(index).map(|(config, _)| config)
    }

    /// Iterates entries in variant order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantConfig, ProgramHandle)> {
        self.entries.iter().map(|(config, program)| (config, *program))
    }

    /// Number of entries holding a valid program.
    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, program)| program.is_valid())
            .count()
    }

    /// Destroys every valid program in the table and marks its slot
    /// invalid. Must be called before the device is torn down; leaked
    /// handles are a resource-lifecycle defect.
    pub fn release(&mut self, device: &dyn GraphicsDevice) {
        for (_, program) in &mut self.entries {
            if program.is_valid() {
                device.destroy_program(*program);
                *program = ProgramHandle::INVALID;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs(defines: &[&str]) -> Vec<VariantConfig> {
        defines.iter().map(|d| VariantConfig::new(*d)).collect()
    }

    #[test]
    fn table_preserves_variant_order() {
        let table = VariantTable::from_parts(
            configs(&["", "COLOR=1"]),
            vec![ProgramHandle(0), ProgramHandle::INVALID],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.program(0), Some(ProgramHandle(0)));
        assert_eq!(table.program(1), Some(ProgramHandle::INVALID));
        assert_eq!(table.config(1).map(VariantConfig::as_str), Some("COLOR=1"));
        assert_eq!(table.program(2), None);
        assert_eq!(table.valid_count(), 1);
    }

    #[test]
    #[should_panic(expected = "must agree in length")]
    fn mismatched_lengths_are_rejected_at_construction() {
        let _ = VariantTable::from_parts(configs(&["", "COLOR=1"]), vec![ProgramHandle(0)]);
    }
}
