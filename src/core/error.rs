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

//! Emulator error types

use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Emulator error types
///
/// Decoder and loader errors are fatal to the operation that raised them; the
/// caller decides whether to stop the simulation or surface it to a host UI.
/// Out-of-range memory accesses and R[0] writes are never represented here —
/// those are absorbed silently per the memory and register-file contracts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmulatorError {
    /// Binary file length was zero or not a multiple of 4 bytes.
    #[error("binary is not a positive multiple of 4 bytes (got {size} bytes)")]
    BadBinary {
        /// Length of the offending file, in bytes.
        size: usize,
    },

    /// `program_start` (or a `set_pc` target) was not 4-byte aligned.
    #[error("address 0x{address:08X} is not 4-byte aligned")]
    BadAlignment {
        /// The misaligned address.
        address: u32,
    },

    /// Decoder encountered an opcode outside the supported set.
    #[error("bad opcode in word 0x{word:08X} at pc=0x{pc:08X}")]
    BadOpcode {
        /// Program counter of the offending instruction.
        pc: u32,
        /// The full instruction word that failed to decode.
        word: u32,
    },

    /// R-type instruction with a `funct` outside the supported set.
    #[error("bad funct 0x{funct:02X} at pc=0x{pc:08X}")]
    BadFunct {
        /// Program counter of the offending instruction.
        pc: u32,
        /// The unsupported function code.
        funct: u8,
    },

    /// `step()` was called before a program was loaded.
    #[error("step() called before a program was loaded")]
    NoProgram,

    /// A negative address was passed to a memory accessor.
    #[error("negative address {address} passed to a memory accessor")]
    AddressDomain {
        /// The offending (negative) address.
        address: i64,
    },

    /// Underlying file I/O failed while loading a binary.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EmulatorError {
    fn from(err: std::io::Error) -> Self {
        EmulatorError::Io(err.to_string())
    }
}
