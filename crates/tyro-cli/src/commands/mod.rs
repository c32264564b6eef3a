// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! CLI command implementations.

pub mod check;
pub mod phase;
pub mod pipeline;
pub mod tools;
