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

use super::super::decode::sext;
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Load Instructions ===

    /// LW: R[rt] = mem.get_sword(R[rs] + sext(immed)), stored as a 32-bit
    /// bit pattern (the sign of the memory word has no effect on the
    /// register store; `get_sword`/`get_uword` only differ in their return
    /// type, not their bits).
    pub(crate) fn op_lw(&mut self, rs: u8, rt: u8, immed: u16) -> Result<()> {
        let addr = self.reg(rs).wrapping_add(sext(immed) as u32);
        let value = self.memory.get_sword(addr as i64)? as u32;
        self.set_reg(rt, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Cpu;

    #[test]
    fn lw_reads_word_at_base_plus_offset() {
        let mut cpu = Cpu::new();
        cpu.memory_mut().set_word(0x10, 0xDEAD_BEEF).unwrap();
        cpu.set_reg(1, 0x0C);
        cpu.op_lw(1, 2, 4).unwrap(); // addr = R[1] + 4 = 0x10
        assert_eq!(cpu.reg(2), 0xDEAD_BEEF);
    }

    #[test]
    fn lw_out_of_range_reads_zero() {
        let mut cpu = Cpu::new();
        cpu.set_reg(1, 0x00FF_FFFF);
        cpu.op_lw(1, 2, 0).unwrap();
        assert_eq!(cpu.reg(2), 0);
    }

    #[test]
    fn lw_honors_negative_sign_extended_offset() {
        let mut cpu = Cpu::new();
        cpu.memory_mut().set_word(0x10, 0x1111_2222).unwrap();
        cpu.set_reg(1, 0x14);
        cpu.op_lw(1, 2, 0xFFFC).unwrap(); // sext(0xFFFC) == -4
        assert_eq!(cpu.reg(2), 0x1111_2222);
    }
}
