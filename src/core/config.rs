// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Emulator configuration
//!
//! Carries the tunables a host embedding the core needs but that the core
//! itself has no opinion about: memory size/placement and the clock ratio
//! that determines how many instructions make up one `step`/`synchronize`
//! batch. None of this is required to drive a `Cpu` directly — it exists so
//! hosts that prefer a config file over literal constructor arguments have
//! somewhere to put them.

use serde::{Deserialize, Serialize};

use super::error::{EmulatorError, Result};

/// Default memory size: 1 MiB.
pub const DEFAULT_MEMORY_SIZE: u32 = 1024 * 1024;

/// Default memory base address.
pub const DEFAULT_BASE_ADDRESS: u32 = 0;

/// Default CPU clock, in Hz (12.5 MHz).
pub const DEFAULT_CPU_FREQUENCY_HZ: u32 = 12_500_000;

/// Default host synchronize tick, in Hz (1 kHz).
pub const DEFAULT_SYNC_FREQUENCY_HZ: u32 = 1_000;

/// Emulator configuration
///
/// Deserializable from TOML via [`EmulatorConfig::from_toml_str`] for hosts
/// that want to externalize these values instead of hardcoding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Memory size in bytes. Must be a multiple of 4.
    pub memory_size: u32,

    /// Memory base address.
    pub base_address: u32,

    /// CPU clock, in Hz.
    pub cpu_frequency_hz: u32,

    /// Host synchronize tick, in Hz.
    pub sync_frequency_hz: u32,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE,
            base_address: DEFAULT_BASE_ADDRESS,
            cpu_frequency_hz: DEFAULT_CPU_FREQUENCY_HZ,
            sync_frequency_hz: DEFAULT_SYNC_FREQUENCY_HZ,
        }
    }
}

impl EmulatorConfig {
    /// Number of instructions per synchronize batch: `CPU_FREQ / SYNC_FREQ`.
    ///
    /// This is the `B` a host alternates `cpu.step(B)` and `memory.synchronize()`
    /// with (see the concurrency model).
    pub fn batch_size(&self) -> u32 {
        self.cpu_frequency_hz / self.sync_frequency_hz
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| EmulatorError::Io(e.to_string()))
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }
}
