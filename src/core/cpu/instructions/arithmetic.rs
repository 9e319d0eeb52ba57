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
    // === Arithmetic Instructions ===

    /// ADD: R[rd] = R[rs] + R[rt], reduced modulo 2^32.
    ///
    /// No overflow trap — this core does not implement exceptions.
    pub(crate) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_add(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// SUB: R[rd] = R[rs] - R[rt], reduced modulo 2^32.
    pub(crate) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_sub(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// ADDI: R[rt] = R[rs] + sext(immed), reduced modulo 2^32.
    pub(crate) fn op_addi(&mut self, rs: u8, rt: u8, immed: u16) -> Result<()> {
        let result = self.reg(rs).wrapping_add(sext(immed) as u32);
        self.set_reg(rt, result);
        Ok(())
    }

    /// SLT: R[rd] = 1 if R[rs] < R[rt] else 0.
    ///
    /// Compares the stored register values as unsigned, not the canonical
    /// MIPS signed compare — preserved from the source this core is modeled
    /// on.
    pub(crate) fn op_slt(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = if self.reg(rs) < self.reg(rt) { 1 } else { 0 };
        self.set_reg(rd, result);
        Ok(())
    }
}
