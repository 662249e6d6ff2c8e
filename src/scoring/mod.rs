// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! `core` holds the cosine math and the fixed thresholds; `ranking` holds the
//! stable top-K selection both rankers share.

mod core;
pub mod ranking;

pub use core::*;
