//! Declarative table of supported event kinds
//!
//! Every on-chain event kind maps to a counter name, a record name, a record
//! layout and the gauges recorded per priced leg. The pipeline consumes this
//! table; adding a kind means adding a row here and a payload variant.

use std::fmt;

/// Which leg of an event a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegRole {
    /// Asset entering the protocol (deposits, sells, single-asset events)
    Input,
    /// Asset leaving the protocol (swap output, DCA output)
    Output,
    /// DCA resolve fee, denominated in the output token
    Fee,
}

/// Shape of the emitted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// Attributes only, nothing priced (DCA start/destroy)
    Plain,
    /// A coin type and the sender, nothing else (farm relock)
    TypeOnly,
    /// One priced asset
    Single,
    /// Distinct input and output assets (swap)
    Pair,
    /// Ordered list of priced assets plus event identity
    List,
    /// DCA resolve: fee, input and output with the resolution timestamp
    Resolve,
}

/// Gauge pair recorded for every leg with a given role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeSpec {
    pub role: LegRole,
    /// Gauge receiving the normalized amount
    pub amount: &'static str,
    /// Gauge receiving the USD value
    pub usd: &'static str,
}

/// Row of the event table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpec {
    /// Counter incremented once per processed event
    pub counter: &'static str,
    /// Name of the emitted record
    pub record: &'static str,
    pub layout: RecordLayout,
    /// Gauges in emission order
    pub gauges: &'static [GaugeSpec],
}

/// Suite events share one naming scheme: gauges are prefixed with the record name.
macro_rules! suite_spec {
    ($layout:ident, $counter:literal, $record:literal) => {
        EventSpec {
            counter: $counter,
            record: $record,
            layout: RecordLayout::$layout,
            gauges: &[GaugeSpec {
                role: LegRole::Input,
                amount: concat!("total_", $record, "_input_amount"),
                usd: concat!("total_", $record, "_input_amount_usd"),
            }],
        }
    };
}

static DCA_START: EventSpec = EventSpec {
    counter: "dca_start",
    record: "dca_start",
    layout: RecordLayout::Plain,
    gauges: &[],
};

static DCA_DESTROY: EventSpec = EventSpec {
    counter: "dca_destroy",
    record: "dca_destroy",
    layout: RecordLayout::Plain,
    gauges: &[],
};

static DCA_RESOLVE: EventSpec = EventSpec {
    counter: "dca_resolve",
    record: "dca_resolve",
    layout: RecordLayout::Resolve,
    gauges: &[
        GaugeSpec {
            role: LegRole::Fee,
            amount: "normalized_total_fee_amount",
            usd: "normalized_total_fee_amount_usd",
        },
        GaugeSpec {
            role: LegRole::Input,
            amount: "total_input_amount",
            usd: "total_input_amount_usd",
        },
        GaugeSpec {
            role: LegRole::Output,
            amount: "total_output_amount",
            usd: "total_output_amount_usd",
        },
    ],
};

static AMM_ADD_LIQUIDITY: EventSpec =
    suite_spec!(List, "events_amm_add_liquidity", "amm_add_liquidity");
static AMM_REMOVE_LIQUIDITY: EventSpec =
    suite_spec!(List, "events_amm_remove_liquidity", "amm_remove_liquidity");
static CLMM_CREATE_POSITION: EventSpec =
    suite_spec!(List, "events_clmm_create_position", "clmm_create_position");
static CLMM_INCREASE_POSITION: EventSpec =
    suite_spec!(List, "events_clmm_increase_position", "clmm_increase_position");
static CLMM_DECREASE_POSITION: EventSpec =
    suite_spec!(List, "events_clmm_decrease_position", "clmm_decrease_position");
static CLMM_CLOSE_POSITION: EventSpec =
    suite_spec!(List, "events_clmm_close_position", "clmm_close_position");
static CLMM_HARVEST_POSITION: EventSpec =
    suite_spec!(List, "events_clmm_harvest_position", "clmm_harvest_position");
static FARM_DEPOSIT: EventSpec = suite_spec!(Single, "events_farm_deposit", "farm_deposit");
static FARM_WITHDRAW: EventSpec = suite_spec!(Single, "events_farm_withdraw", "farm_withdraw");
static FARM_HARVEST: EventSpec = suite_spec!(List, "events_farm_harvest", "farm_harvest");
static FEE: EventSpec = suite_spec!(Single, "events_fee_fee", "fee");
static LEND_LEND: EventSpec = suite_spec!(Single, "events_lend_lend", "lend_lend");
static LEND_BORROW: EventSpec = suite_spec!(Single, "events_lend_borrow", "lend_borrow");
static LEND_REPAY: EventSpec = suite_spec!(Single, "events_lend_repay", "lend_repay");
static LEND_WITHDRAW: EventSpec = suite_spec!(Single, "events_lend_withdraw", "lend_withdraw");
static SEND: EventSpec = suite_spec!(Single, "events_send_send", "send");

static FARM_RELOCK: EventSpec = EventSpec {
    counter: "events_farm_relock",
    record: "farm_relock",
    layout: RecordLayout::TypeOnly,
    gauges: &[],
};

static SWAP: EventSpec = EventSpec {
    counter: "events_swap_swap",
    record: "swap",
    layout: RecordLayout::Pair,
    gauges: &[
        GaugeSpec {
            role: LegRole::Input,
            amount: "total_swap_input_amount",
            usd: "total_swap_input_amount_usd",
        },
        GaugeSpec {
            role: LegRole::Output,
            amount: "total_swap_output_amount",
            usd: "total_swap_output_amount_usd",
        },
    ],
};

/// Supported on-chain event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DcaStart,
    DcaStartV2,
    DcaDestroy,
    DcaResolve,
    AmmAddLiquidity,
    AmmRemoveLiquidity,
    ClmmCreatePosition,
    ClmmIncreasePosition,
    ClmmDecreasePosition,
    ClmmClosePosition,
    ClmmHarvestPosition,
    FarmDeposit,
    FarmWithdraw,
    FarmHarvest,
    FarmRelock,
    Fee,
    LendLend,
    LendBorrow,
    LendRepay,
    LendWithdraw,
    Send,
    Swap,
}

impl EventKind {
    pub const ALL: [EventKind; 22] = [
        EventKind::DcaStart,
        EventKind::DcaStartV2,
        EventKind::DcaDestroy,
        EventKind::DcaResolve,
        EventKind::AmmAddLiquidity,
        EventKind::AmmRemoveLiquidity,
        EventKind::ClmmCreatePosition,
        EventKind::ClmmIncreasePosition,
        EventKind::ClmmDecreasePosition,
        EventKind::ClmmClosePosition,
        EventKind::ClmmHarvestPosition,
        EventKind::FarmDeposit,
        EventKind::FarmWithdraw,
        EventKind::FarmHarvest,
        EventKind::FarmRelock,
        EventKind::Fee,
        EventKind::LendLend,
        EventKind::LendBorrow,
        EventKind::LendRepay,
        EventKind::LendWithdraw,
        EventKind::Send,
        EventKind::Swap,
    ];

    /// Wire name, as found in the `kind` field of a decoded event
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventKind::DcaStart => "dca_start",
            EventKind::DcaStartV2 => "dca_start_v2",
            EventKind::DcaDestroy => "dca_destroy",
            EventKind::DcaResolve => "dca_resolve",
            EventKind::AmmAddLiquidity => "amm_add_liquidity",
            EventKind::AmmRemoveLiquidity => "amm_remove_liquidity",
            EventKind::ClmmCreatePosition => "clmm_create_position",
            EventKind::ClmmIncreasePosition => "clmm_increase_position",
            EventKind::ClmmDecreasePosition => "clmm_decrease_position",
            EventKind::ClmmClosePosition => "clmm_close_position",
            EventKind::ClmmHarvestPosition => "clmm_harvest_position",
            EventKind::FarmDeposit => "farm_deposit",
            EventKind::FarmWithdraw => "farm_withdraw",
            EventKind::FarmHarvest => "farm_harvest",
            EventKind::FarmRelock => "farm_relock",
            EventKind::Fee => "fee",
            EventKind::LendLend => "lend_lend",
            EventKind::LendBorrow => "lend_borrow",
            EventKind::LendRepay => "lend_repay",
            EventKind::LendWithdraw => "lend_withdraw",
            EventKind::Send => "send",
            EventKind::Swap => "swap",
        }
    }

    /// Table row for this kind
    pub fn spec(&self) -> &'static EventSpec {
        match self {
            EventKind::DcaStart | EventKind::DcaStartV2 => &DCA_START,
            EventKind::DcaDestroy => &DCA_DESTROY,
            EventKind::DcaResolve => &DCA_RESOLVE,
            EventKind::AmmAddLiquidity => &AMM_ADD_LIQUIDITY,
            EventKind::AmmRemoveLiquidity => &AMM_REMOVE_LIQUIDITY,
            EventKind::ClmmCreatePosition => &CLMM_CREATE_POSITION,
            EventKind::ClmmIncreasePosition => &CLMM_INCREASE_POSITION,
            EventKind::ClmmDecreasePosition => &CLMM_DECREASE_POSITION,
            EventKind::ClmmClosePosition => &CLMM_CLOSE_POSITION,
            EventKind::ClmmHarvestPosition => &CLMM_HARVEST_POSITION,
            EventKind::FarmDeposit => &FARM_DEPOSIT,
            EventKind::FarmWithdraw => &FARM_WITHDRAW,
            EventKind::FarmHarvest => &FARM_HARVEST,
            EventKind::FarmRelock => &FARM_RELOCK,
            EventKind::Fee => &FEE,
            EventKind::LendLend => &LEND_LEND,
            EventKind::LendBorrow => &LEND_BORROW,
            EventKind::LendRepay => &LEND_REPAY,
            EventKind::LendWithdraw => &LEND_WITHDRAW,
            EventKind::Send => &SEND,
            EventKind::Swap => &SWAP,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
