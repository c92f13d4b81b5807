// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types used across the event pipeline.
//!
//! - Token types, raw amounts and decimals
//! - Normalized amounts, unit prices and USD values
//! - Coin metadata resolved from the metadata service

pub mod metadata;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
