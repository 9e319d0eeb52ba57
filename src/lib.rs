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

//! Embedded MIPS-1 fetch-decode-execute core with memory-mapped I/O bindings.
//!
//! This crate is the hardware-facing core of a simulated step-motor robot: a
//! fetch-decode-execute engine for a MIPS-1 instruction subset ([`core::cpu`])
//! paired with a word-addressable memory ([`core::memory`]) that exposes
//! memory-mapped I/O through a binding/synchronize mechanism. The graphical
//! world, robot physics, assembler, and host event loop are external
//! collaborators driving this core through [`core::cpu::Cpu::step`] and
//! [`core::memory::Memory::synchronize`]; none of them live in this crate.
//!
//! # Example
//!
//! ```
//! use trimps_core::core::cpu::Cpu;
//!
//! let mut cpu = Cpu::new();
//! cpu.load_bytes(&[0x34, 0x01, 0x00, 0x19], 0).unwrap(); // ORI $1, $0, 25
//! cpu.step(1).unwrap();
//! assert_eq!(cpu.reg(1), 25);
//! ```

pub mod core;
