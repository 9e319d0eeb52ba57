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
    // === Store Instructions ===

    /// SW: mem.set_word(R[rs] + sext(immed), R[rt]).
    pub(crate) fn op_sw(&mut self, rs: u8, rt: u8, immed: u16) -> Result<()> {
        let addr = self.reg(rs).wrapping_add(sext(immed) as u32);
        let value = self.reg(rt);
        self.memory.set_word(addr as i64, value)?;
        Ok(())
    }
}
