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

//! Memory-mapped I/O bindings
//!
//! A [`Binding`] associates an address and bitmask with an externally owned
//! callback. Bindings whose address falls inside RAM share the RAM byte at
//! that address as their shadow; bindings whose address falls outside RAM
//! carry their own latched byte, since there is no RAM cell backing them.
//! `Memory::bind` decides which case applies at registration time.

/// A single memory-mapped I/O binding.
///
/// `callback` is invoked once per `synchronize()`, even for ports outside RAM
/// bounds, since those ports own their value and have no other way to change.
pub struct Binding {
    /// Address this binding is registered at.
    pub(super) address: u32,

    /// Bits of the shadow byte this binding is responsible for.
    pub(super) bitmask: u8,

    /// `callback(in_byte) -> Option<out_byte>`. `None` means "no change".
    pub(super) callback: Box<dyn FnMut(u8) -> Option<u8>>,

    /// `Some(byte)` when `address` lies outside RAM (a pure port that owns
    /// its value); `None` when it lies inside RAM (shares the RAM byte).
    pub(super) latched: Option<u8>,
}

impl Binding {
    pub(super) fn new(
        address: u32,
        bitmask: u8,
        callback: Box<dyn FnMut(u8) -> Option<u8>>,
        in_ram: bool,
    ) -> Self {
        Self {
            address,
            bitmask,
            callback,
            latched: if in_ram { None } else { Some(0) },
        }
    }

    /// Address this binding responds to.
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Bitmask of the bits this binding owns.
    pub fn bitmask(&self) -> u8 {
        self.bitmask
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("address", &self.address)
            .field("bitmask", &self.bitmask)
            .field("latched", &self.latched)
            .finish()
    }
}
