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

//! Program loading
//!
//! A program binary is a contiguous sequence of big-endian 32-bit instruction
//! words: no header, no metadata. Loading only parses the words and sets the
//! CPU's program/program_start/PC — it never touches memory or the register
//! file.
//!
//! # Example
//!
//! ```
//! use trimps_core::core::loader::parse_program;
//!
//! let bytes = [0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00];
//! let words = parse_program(&bytes).unwrap();
//! assert_eq!(words, vec![0x0000_0000, 0x0800_0000]);
//! ```

use super::error::{EmulatorError, Result};

/// Parse a raw binary into big-endian 32-bit instruction words.
///
/// `data.len()` must be a positive multiple of 4; otherwise returns
/// [`EmulatorError::BadBinary`].
pub fn parse_program(data: &[u8]) -> Result<Vec<u32>> {
    if data.is_empty() || data.len() % 4 != 0 {
        log::error!(
            "program binary length {} is not a positive multiple of 4",
            data.len()
        );
        return Err(EmulatorError::BadBinary { size: data.len() });
    }

    let words = data
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    log::debug!("parsed program: {} words", data.len() / 4);
    Ok(words)
}

/// Read a program binary from a file and parse it into instruction words.
pub fn load_program_file(path: &std::path::Path) -> Result<Vec<u32>> {
    let data = std::fs::read(path)?;
    parse_program(&data)
}

/// Validate that `program_start` is 4-byte aligned.
pub fn check_alignment(program_start: u32) -> Result<()> {
    if program_start % 4 != 0 {
        log::error!("program_start 0x{:08X} is not 4-byte aligned", program_start);
        return Err(EmulatorError::BadAlignment {
            address: program_start,
        });
    }
    Ok(())
}
