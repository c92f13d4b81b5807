//! Well-known addresses and constants
//!
//! This module centralizes the package addresses, service endpoints and
//! defaults used throughout the crate.

/// On-chain packages whose events this crate maps to metrics.
pub mod packages {
    /// Dollar-cost-averaging order package
    pub const DCA: &str = "0x0db109c281e8ab325493cb5b47425f1e32082358e28fcb2366c01e7929690cfe";

    /// First checkpoint carrying DCA events
    pub const DCA_START_CHECKPOINT: u64 = 50_462_430;

    /// Multi-module DeFi suite package (AMM, CLMM, farm, lend, fee, send, swap)
    pub const SUITE: &str = "0x8ddd1b220d6102f90af76422b9fcdd2f43eafb72cece36a367746d280f76208f";

    /// First checkpoint carrying suite events
    pub const SUITE_START_CHECKPOINT: u64 = 86_586_044;
}

/// Default endpoints and lookup parameters.
pub mod defaults {
    use std::time::Duration;

    use crate::TokenDecimals;

    /// Coin metadata service
    pub const METADATA_API_URL: &str = "https://api.patara.app";

    /// Historical price service
    pub const PRICE_API_URL: &str = "https://app.sentio.xyz";

    /// Network identifier passed to the price service
    pub const PRICE_NETWORK: &str = "sui_mainnet";

    /// Accepted distance between the event timestamp and a quote
    pub const PRICE_TOLERANCE_DAYS: i64 = 1;

    /// Decimals substituted when metadata lookup fails
    pub const FALLBACK_DECIMALS: TokenDecimals = TokenDecimals::SUI;

    /// Client-side timeout for both HTTP services
    pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
}
