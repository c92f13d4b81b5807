// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoded event structures consumed by the pipeline
//!
//! Subscription and binary decoding happen upstream; events arrive here as
//! JSON objects tagged by `kind`:
//!
//! ```json
//! {"kind":"send","sender":"0xabc","timestamp":"2024-06-01T12:00:00Z",
//!  "id":{"event_seq":"0","tx_digest":"9xQ..."},
//!  "coin_type":"2::sui::SUI","amount":"1500000000"}
//! ```
//!
//! Coin types may omit the `0x` prefix; raw amounts may be strings or
//! unsigned integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{EventKind, LegRole};
use crate::{EventError, TokenAmount, TokenType};

/// Position of an event in the chain history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventId {
    pub event_seq: String,
    pub tx_digest: String,
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.event_seq, self.tx_digest)
    }
}

/// One decoded on-chain event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedEvent {
    /// Transaction sender
    pub sender: String,
    /// Checkpoint timestamp, used as the pricing instant
    pub timestamp: DateTime<Utc>,
    pub id: EventId,
    #[serde(flatten)]
    pub payload: EventPayload,
}

impl DecodedEvent {
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}

/// DCA order creation (`Start` and `StartV2` share this shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaStart {
    pub dca: String,
    pub delegatee: String,
    pub input: TokenType,
    pub output: TokenType,
    #[serde(deserialize_with = "crate::types::tokens::deserialize_integer")]
    pub every: u64,
    #[serde(deserialize_with = "crate::types::tokens::deserialize_integer")]
    pub time_scale: u8,
    pub input_amount: TokenAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaDestroy {
    pub dca: String,
    pub input: TokenType,
    pub output: TokenType,
}

/// DCA trade execution; `fee` is denominated in the output coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaResolve {
    pub dca: String,
    pub input: TokenType,
    pub output: TokenType,
    pub fee: TokenAmount,
    pub input_amount: TokenAmount,
    pub output_amount: TokenAmount,
}

/// Parallel arrays of coin types and raw amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinList {
    pub coin_types: Vec<TokenType>,
    pub amounts: Vec<TokenAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpCoin {
    pub lp_coin_type: TokenType,
    pub lp_coin_amount: TokenAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpCoinType {
    pub lp_coin_type: TokenType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinAmount {
    pub coin_type: TokenType,
    pub amount: TokenAmount,
}

/// Protocol fee; `event_type` names the event that charged it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCharged {
    pub coin_type: TokenType,
    pub amount: TokenAmount,
    pub event_type: String,
}

impl FeeCharged {
    /// Second `::` segment of `event_type`, if present
    ///
    /// `8ddd...::events_lend::LendEvent` yields `events_lend`.
    pub fn label(&self) -> Option<&str> {
        self.event_type.split("::").nth(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub coin_in_type: TokenType,
    pub coin_out_type: TokenType,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
}

/// Kind-specific body of a decoded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    DcaStart(DcaStart),
    DcaStartV2(DcaStart),
    DcaDestroy(DcaDestroy),
    DcaResolve(DcaResolve),
    AmmAddLiquidity(CoinList),
    AmmRemoveLiquidity(CoinList),
    ClmmCreatePosition(CoinList),
    ClmmIncreasePosition(CoinList),
    ClmmDecreasePosition(CoinList),
    ClmmClosePosition(CoinList),
    ClmmHarvestPosition(CoinList),
    FarmDeposit(LpCoin),
    FarmWithdraw(LpCoin),
    FarmHarvest(CoinList),
    FarmRelock(LpCoinType),
    Fee(FeeCharged),
    LendLend(CoinAmount),
    LendBorrow(CoinAmount),
    LendRepay(CoinAmount),
    LendWithdraw(CoinAmount),
    Send(CoinAmount),
    Swap(Swap),
}

/// One (coin type, raw amount) pair to resolve and price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLeg {
    pub role: LegRole,
    pub token: TokenType,
    pub raw: TokenAmount,
}

impl AssetLeg {
    fn new(role: LegRole, token: &TokenType, raw: &TokenAmount) -> Self {
        Self {
            role,
            token: token.clone(),
            raw: raw.clone(),
        }
    }
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::DcaStart(_) => EventKind::DcaStart,
            EventPayload::DcaStartV2(_) => EventKind::DcaStartV2,
            EventPayload::DcaDestroy(_) => EventKind::DcaDestroy,
            EventPayload::DcaResolve(_) => EventKind::DcaResolve,
            EventPayload::AmmAddLiquidity(_) => EventKind::AmmAddLiquidity,
            EventPayload::AmmRemoveLiquidity(_) => EventKind::AmmRemoveLiquidity,
            EventPayload::ClmmCreatePosition(_) => EventKind::ClmmCreatePosition,
            EventPayload::ClmmIncreasePosition(_) => EventKind::ClmmIncreasePosition,
            EventPayload::ClmmDecreasePosition(_) => EventKind::ClmmDecreasePosition,
            EventPayload::ClmmClosePosition(_) => EventKind::ClmmClosePosition,
            EventPayload::ClmmHarvestPosition(_) => EventKind::ClmmHarvestPosition,
            EventPayload::FarmDeposit(_) => EventKind::FarmDeposit,
            EventPayload::FarmWithdraw(_) => EventKind::FarmWithdraw,
            EventPayload::FarmHarvest(_) => EventKind::FarmHarvest,
            EventPayload::FarmRelock(_) => EventKind::FarmRelock,
            EventPayload::Fee(_) => EventKind::Fee,
            EventPayload::LendLend(_) => EventKind::LendLend,
            EventPayload::LendBorrow(_) => EventKind::LendBorrow,
            EventPayload::LendRepay(_) => EventKind::LendRepay,
            EventPayload::LendWithdraw(_) => EventKind::LendWithdraw,
            EventPayload::Send(_) => EventKind::Send,
            EventPayload::Swap(_) => EventKind::Swap,
        }
    }

    /// Assets to price, in record order
    ///
    /// List events yield one input leg per entry in input order; a length
    /// mismatch between `coin_types` and `amounts` rejects the event. DCA
    /// resolve yields fee (output coin), input, output.
    pub fn legs(&self) -> Result<Vec<AssetLeg>, EventError> {
        let legs = match self {
            EventPayload::DcaStart(_)
            | EventPayload::DcaStartV2(_)
            | EventPayload::DcaDestroy(_)
            | EventPayload::FarmRelock(_) => Vec::new(),
            EventPayload::DcaResolve(e) => vec![
                AssetLeg::new(LegRole::Fee, &e.output, &e.fee),
                AssetLeg::new(LegRole::Input, &e.input, &e.input_amount),
                AssetLeg::new(LegRole::Output, &e.output, &e.output_amount),
            ],
            EventPayload::AmmAddLiquidity(list)
            | EventPayload::AmmRemoveLiquidity(list)
            | EventPayload::ClmmCreatePosition(list)
            | EventPayload::ClmmIncreasePosition(list)
            | EventPayload::ClmmDecreasePosition(list)
            | EventPayload::ClmmClosePosition(list)
            | EventPayload::ClmmHarvestPosition(list)
            | EventPayload::FarmHarvest(list) => {
                if list.coin_types.len() != list.amounts.len() {
                    return Err(EventError::length_mismatch(
                        self.kind().as_str(),
                        list.coin_types.len(),
                        list.amounts.len(),
                    ));
                }
                list.coin_types
                    .iter()
                    .zip(&list.amounts)
                    .map(|(token, raw)| AssetLeg::new(LegRole::Input, token, raw))
                    .collect()
            }
            EventPayload::FarmDeposit(e) | EventPayload::FarmWithdraw(e) => {
                vec![AssetLeg::new(LegRole::Input, &e.lp_coin_type, &e.lp_coin_amount)]
            }
            EventPayload::Fee(e) => vec![AssetLeg::new(LegRole::Input, &e.coin_type, &e.amount)],
            EventPayload::LendLend(e)
            | EventPayload::LendBorrow(e)
            | EventPayload::LendRepay(e)
            | EventPayload::LendWithdraw(e)
            | EventPayload::Send(e) => vec![AssetLeg::new(LegRole::Input, &e.coin_type, &e.amount)],
            EventPayload::Swap(e) => vec![
                AssetLeg::new(LegRole::Input, &e.coin_in_type, &e.amount_in),
                AssetLeg::new(LegRole::Output, &e.coin_out_type, &e.amount_out),
            ],
        };
        Ok(legs)
    }

    /// Unpriced attributes that open the record
    pub(crate) fn leading_attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            EventPayload::DcaStart(e) | EventPayload::DcaStartV2(e) => vec![
                ("dca", e.dca.clone()),
                ("delegatee", e.delegatee.clone()),
                ("input", e.input.to_string()),
                ("output", e.output.to_string()),
                ("every", e.every.to_string()),
                ("time_scale", e.time_scale.to_string()),
                ("input_amount", e.input_amount.to_string()),
            ],
            EventPayload::DcaDestroy(e) => vec![
                ("dca", e.dca.clone()),
                ("input", e.input.to_string()),
                ("output", e.output.to_string()),
            ],
            EventPayload::DcaResolve(e) => vec![
                ("dca", e.dca.clone()),
                ("input", e.input.to_string()),
                ("output", e.output.to_string()),
            ],
            EventPayload::FarmRelock(e) => vec![("coin_type", e.lp_coin_type.to_string())],
            _ => Vec::new(),
        }
    }

    /// Label attached to fee records
    pub(crate) fn fee_label(&self) -> Option<&str> {
        match self {
            EventPayload::Fee(e) => e.label(),
            _ => None,
        }
    }
}
