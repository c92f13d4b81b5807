// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for the DCA and DeFi suite packages.
//!
//! This module handles:
//! - The declarative table of event kinds, counters, records and gauges
//! - Decoded event structures as delivered by the upstream decoder
//! - Record assembly with exact decimal rendering
//! - The shared processing pipeline and NDJSON replay

pub mod catalog;
pub mod decoded;
pub mod pipeline;
pub mod record;
pub mod replay;

pub use catalog::{EventKind, EventSpec, GaugeSpec, LegRole, RecordLayout};
pub use decoded::{AssetLeg, DecodedEvent, EventId, EventPayload};
pub use pipeline::EventPipeline;
pub use record::{AssetEntry, EventRecord, FieldValue, PricedLeg};
pub use replay::{replay, ReplaySummary};
