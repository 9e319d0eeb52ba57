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

//! CPU (MIPS-1 subset) emulation
//!
//! # Example
//! ```
//! use trimps_core::core::cpu::Cpu;
//!
//! let mut cpu = Cpu::new();
//! assert_eq!(cpu.reg(0), 0); // r0 is always 0
//! ```

pub mod decode;
mod instructions;

use std::fmt;
use std::path::Path;

use decode::{decode, Instruction};

use super::config::EmulatorConfig;
use super::error::{EmulatorError, Result};
use super::loader::{check_alignment, load_program_file, parse_program};
use super::memory::Memory;

/// A MIPS-1 fetch-decode-execute core.
///
/// Owns its [`Memory`] directly rather than threading a bus object through
/// every call.
pub struct Cpu {
    /// General purpose registers (R0-R31). R0 is hardwired to zero.
    registers: [u32; 32],

    /// Program counter: a 4-aligned byte address.
    pc: u32,

    /// Raw instruction words as loaded, or `None` before the first load.
    /// Decoding happens lazily, once per fetch, in [`Cpu::run_instruction`].
    program: Option<Vec<u32>>,

    /// Byte address the program was loaded at.
    program_start: u32,

    /// The memory this CPU executes against.
    memory: Memory,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a CPU with a default 1 MiB memory at base address 0.
    pub fn new() -> Self {
        Self::with_memory(Memory::new(Memory::DEFAULT_SIZE, 0))
    }

    /// Construct a CPU against a caller-supplied memory.
    pub fn with_memory(memory: Memory) -> Self {
        Self {
            registers: [0u32; 32],
            pc: 0,
            program: None,
            program_start: 0,
            memory,
        }
    }

    /// Construct a CPU whose memory is sized and placed per `config`
    /// (`config.memory_size`/`config.base_address`), for hosts that
    /// externalize those knobs instead of hardcoding `Memory::new` calls.
    pub fn with_config(config: &EmulatorConfig) -> Self {
        Self::with_memory(Memory::new(config.memory_size, config.base_address))
    }

    /// Read a general purpose register. R0 always reads as 0.
    #[inline]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.registers[index as usize]
        }
    }

    /// Write a general purpose register. Writes to R0 are silently suppressed.
    #[inline]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.registers[index as usize] = value;
        }
    }

    /// Shared access to the underlying memory (for host-side `bind`/inspection).
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to the underlying memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Current program counter.
    pub fn get_pc(&self) -> u32 {
        self.pc
    }

    /// Set the program counter directly. `addr` must be 4-aligned.
    pub fn set_pc(&mut self, addr: u32) -> Result<()> {
        check_alignment(addr)?;
        self.pc = addr;
        Ok(())
    }

    /// Load a program from a file. Does not clear memory or registers.
    pub fn load(&mut self, path: &Path, program_start: u32) -> Result<()> {
        let words = load_program_file(path)?;
        self.load_words(words, program_start)
    }

    /// Load a program from raw binary bytes. Does not clear memory or registers.
    pub fn load_bytes(&mut self, data: &[u8], program_start: u32) -> Result<()> {
        let words = parse_program(data)?;
        self.load_words(words, program_start)
    }

    fn load_words(&mut self, words: Vec<u32>, program_start: u32) -> Result<()> {
        check_alignment(program_start)?;
        log::debug!(
            "program loaded: {} words at program_start=0x{:08X}",
            words.len(),
            program_start
        );
        self.program = Some(words);
        self.program_start = program_start;
        self.pc = program_start;
        Ok(())
    }

    /// Fetch the instruction word at the current PC. Addresses before or past
    /// the loaded program fetch as `0x00000000`, which decodes as a NOP
    /// (SLL $0, $0, 0) since R0 writes are suppressed.
    fn fetch(&self) -> u32 {
        let Some(program) = self.program.as_ref() else {
            return 0;
        };
        let offset = self.pc as i64 - self.program_start as i64;
        if offset < 0 {
            return 0;
        }
        let index = (offset / 4) as usize;
        program.get(index).copied().unwrap_or(0)
    }

    /// Execute exactly `count` instructions.
    ///
    /// Raises [`EmulatorError::NoProgram`] if no program has been loaded.
    /// Does not call `memory.synchronize()`; that is the caller's
    /// responsibility, per the step/synchronize protocol.
    pub fn step(&mut self, count: usize) -> Result<()> {
        if self.program.is_none() {
            log::error!("step() called before a program was loaded");
            return Err(EmulatorError::NoProgram);
        }
        for _ in 0..count {
            let word = self.fetch();
            self.run_instruction(word)?;
        }
        Ok(())
    }

    /// Decode and execute a single caller-supplied word against current
    /// state, advancing the PC exactly as if the word had been fetched.
    /// Intended for unit testing individual instructions in isolation.
    pub fn execute(&mut self, word: u32) -> Result<()> {
        self.run_instruction(word)
    }

    fn run_instruction(&mut self, word: u32) -> Result<()> {
        let instr = decode(word, self.pc)?;

        match instr {
            Instruction::R {
                rs,
                rt,
                rd,
                shamt,
                funct,
            } => {
                self.execute_r(rs, rt, rd, shamt, funct)?;
                self.pc = self.pc.wrapping_add(4);
            }
            Instruction::I { op, rs, rt, immed } => {
                self.execute_i(op, rs, rt, immed)?;
                self.pc = self.pc.wrapping_add(4);
            }
            Instruction::J { addr } => {
                self.op_j(addr)?;
            }
        }

        Ok(())
    }

    fn execute_r(&mut self, rs: u8, rt: u8, rd: u8, shamt: u8, funct: u8) -> Result<()> {
        match funct {
            0x20 => self.op_add(rs, rt, rd),
            0x22 => self.op_sub(rs, rt, rd),
            0x24 => self.op_and(rs, rt, rd),
            0x25 => self.op_or(rs, rt, rd),
            0x27 => self.op_xor(rs, rt, rd),
            0x00 => self.op_sll(rt, rd, shamt),
            0x02 => self.op_srl(rt, rd, shamt),
            0x2A => self.op_slt(rs, rt, rd),
            _ => {
                log::error!("bad funct 0x{:02X} at pc=0x{:08X}", funct, self.pc);
                Err(EmulatorError::BadFunct { pc: self.pc, funct })
            }
        }
    }

    fn execute_i(&mut self, op: u8, rs: u8, rt: u8, immed: u16) -> Result<()> {
        match op {
            0x08 => self.op_addi(rs, rt, immed),
            0x0C => self.op_andi(rs, rt, immed),
            0x0D => self.op_ori(rs, rt, immed),
            0x23 => self.op_lw(rs, rt, immed),
            0x2B => self.op_sw(rs, rt, immed),
            0x04 => self.op_beq(rs, rt, immed),
            // decode() only ever produces these six I-type opcodes.
            _ => unreachable!("decode() restricts I-type op to the supported set"),
        }
    }
}

impl fmt::Display for Cpu {
    /// Textual dump of PC and all 32 registers, for debugging. Format is not
    /// part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC: 0x{:08X}", self.pc)?;
        for (i, reg) in self.registers.iter().enumerate() {
            write!(f, "R{:<2}=0x{:08X} ", i, reg)?;
            if i % 4 == 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_config_sizes_and_places_memory() {
        let config = EmulatorConfig {
            memory_size: 256,
            base_address: 0x1000,
            ..EmulatorConfig::default()
        };
        let cpu = Cpu::with_config(&config);
        assert_eq!(cpu.memory().size(), 256);
        assert_eq!(cpu.memory().base_address(), 0x1000);
    }

    #[test]
    fn r0_is_hardwired_to_zero() {
        let mut cpu = Cpu::new();
        cpu.set_reg(0, 0xDEAD_BEEF);
        assert_eq!(cpu.reg(0), 0);
    }

    #[test]
    fn set_reg_stores_nonzero_registers() {
        let mut cpu = Cpu::new();
        cpu.set_reg(5, 42);
        assert_eq!(cpu.reg(5), 42);
    }

    #[test]
    fn step_before_load_raises_no_program() {
        let mut cpu = Cpu::new();
        let result = cpu.step(1);
        assert!(matches!(result, Err(EmulatorError::NoProgram)));
    }

    #[test]
    fn fetch_past_end_is_treated_as_nop() {
        let mut cpu = Cpu::new();
        // Single NOP-equivalent word (OR $0,$0,$0), program_start = 0.
        cpu.load_bytes(&[0x00, 0x00, 0x00, 0x25], 0).unwrap();
        cpu.step(5).unwrap(); // runs well past the 1-word program
        assert_eq!(cpu.get_pc(), 20);
        assert_eq!(cpu.reg(0), 0);
    }

    #[test]
    fn set_pc_rejects_misaligned_address() {
        let mut cpu = Cpu::new();
        let result = cpu.set_pc(3);
        assert!(matches!(
            result,
            Err(EmulatorError::BadAlignment { address: 3 })
        ));
    }

    #[test]
    fn load_does_not_clear_registers_or_memory() {
        let mut cpu = Cpu::new();
        cpu.set_reg(4, 0x1234);
        cpu.memory_mut().set_byte(0, 0xAB).unwrap();
        cpu.load_bytes(&[0, 0, 0, 0], 0).unwrap();
        assert_eq!(cpu.reg(4), 0x1234);
        assert_eq!(cpu.memory().get_ubyte(0).unwrap(), 0xAB);
    }
}
