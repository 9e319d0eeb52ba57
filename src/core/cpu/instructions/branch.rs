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
    // === Branch Instructions ===

    /// BEQ: if R[rs] == R[rt], add `4 * sext(immed)` to PC.
    ///
    /// This only applies the branch displacement; the uniform PC+4 that
    /// follows every non-jump instruction is applied by the caller. A taken
    /// branch with `immed = 0xFFFF` (sext = -1) displaces PC by -4, and the
    /// subsequent +4 lands back where it started. No delay slot.
    pub(crate) fn op_beq(&mut self, rs: u8, rt: u8, immed: u16) -> Result<()> {
        if self.reg(rs) == self.reg(rt) {
            let offset = sext(immed).wrapping_mul(4);
            self.pc = self.pc.wrapping_add(offset as u32);
        }
        Ok(())
    }
}
