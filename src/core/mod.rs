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

//! Core emulation components
//!
//! This module contains the MIPS-1 fetch-decode-execute engine:
//! - [`cpu`]: the execution unit, decoder, and CPU facade ([`Cpu`])
//! - [`memory`]: word-addressable RAM with memory-mapped I/O bindings
//!   ([`Memory`])
//! - [`loader`]: the program binary format (big-endian 32-bit words)
//! - [`error`]: the error taxonomy shared by every fallible operation
//! - [`config`]: ambient host-facing tunables (memory size, clock ratio)

pub mod config;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;

pub use config::EmulatorConfig;
pub use cpu::Cpu;
pub use error::{EmulatorError, Result};
pub use memory::Memory;
