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

//! Instruction implementations, organized by instruction category.
//!
//! Dispatch (opcode/funct -> handler) lives on [`super::Cpu`] itself; these
//! submodules only carry the `impl Cpu { fn op_* }` bodies.

mod arithmetic;
mod branch;
mod jump;
mod load;
mod logical;
mod shift;
mod store;
