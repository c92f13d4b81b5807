// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for sui-defi-metrics integration tests
//!
//! Provides mock metadata sources and price oracles so the pipeline can be
//! exercised without network access, plus a minimal HTTP stub for the HTTP
//! clients.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sui_defi_metrics::{
    EventPipeline, InMemorySink, MemoryMetadataCache, MetadataCache, MetadataError,
    MetadataSource, PriceError, PriceOracle, PriceOracleClient, PriceQuote, TokenDecimals,
    TokenMetadata, TokenMetadataResolver, TokenPrice, TokenType,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const SUI: &str = "0x2::sui::SUI";
pub const USDC: &str = "0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC";
pub const DEEP: &str = "0xdeeb7a4662eec9f2f3def03fb937a663dddaa2e215b8078a284d026b7946c270::deep::DEEP";

pub fn token(s: &str) -> TokenType {
    TokenType::new(s)
}

pub fn price(s: &str) -> TokenPrice {
    TokenPrice::from_str(s).unwrap()
}

pub fn decimal(s: &str) -> bigdecimal::BigDecimal {
    bigdecimal::BigDecimal::from_str(s).unwrap()
}

/// Mock MetadataSource with a fixed decimals table
///
/// Tokens missing from the table fail with `MetadataError::Unavailable`.
/// Every call is recorded.
#[derive(Default)]
pub struct MockMetadataSource {
    decimals: HashMap<TokenType, TokenDecimals>,
    calls: Mutex<Vec<TokenType>>,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: &str, decimals: u8) -> Self {
        self.decimals
            .insert(TokenType::new(token), TokenDecimals::new(decimals));
        self
    }

    pub fn calls(&self) -> Vec<TokenType> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    async fn fetch(&self, token: &TokenType) -> Result<TokenMetadata, MetadataError> {
        self.calls.lock().unwrap().push(token.clone());
        self.decimals
            .get(token)
            .copied()
            .map(TokenMetadata::new)
            .ok_or_else(|| MetadataError::unavailable(token.as_str(), "not in mock table"))
    }

    fn name(&self) -> &'static str {
        "MockMetadataSource"
    }
}

/// Mock PriceOracle with a fixed price table
///
/// Tokens missing from the table have no quote; tokens marked failing return
/// an error. Quotes are stamped with the requested time.
#[derive(Default)]
pub struct MockPriceOracle {
    prices: HashMap<TokenType, TokenPrice>,
    failing: HashSet<TokenType>,
    requests: Mutex<Vec<(String, TokenType, DateTime<Utc>)>>,
}

impl MockPriceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: &str, unit_price: &str) -> Self {
        self.prices.insert(TokenType::new(token), price(unit_price));
        self
    }

    pub fn failing(mut self, token: &str) -> Self {
        self.failing.insert(TokenType::new(token));
        self
    }

    pub fn requests(&self) -> Vec<(String, TokenType, DateTime<Utc>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceOracle for MockPriceOracle {
    async fn quote(
        &self,
        network: &str,
        token: &TokenType,
        at: DateTime<Utc>,
        _tolerance: chrono::Duration,
    ) -> Result<Option<PriceQuote>, PriceError> {
        self.requests
            .lock()
            .unwrap()
            .push((network.to_string(), token.clone(), at));
        if self.failing.contains(token) {
            return Err(PriceError::Status {
                token: token.to_string(),
                status: 503,
            });
        }
        Ok(self
            .prices
            .get(token)
            .map(|p| PriceQuote::new(p.clone(), at)))
    }

    fn name(&self) -> &'static str {
        "MockPriceOracle"
    }
}

/// Pipeline wired to mocks and an in-memory sink
pub struct TestPipeline {
    pub pipeline: EventPipeline,
    pub sink: Arc<InMemorySink>,
    pub metadata: Arc<MockMetadataSource>,
    pub oracle: Arc<MockPriceOracle>,
    pub cache: Arc<MemoryMetadataCache>,
}

pub fn test_pipeline(metadata: MockMetadataSource, oracle: MockPriceOracle) -> TestPipeline {
    let metadata = Arc::new(metadata);
    let oracle = Arc::new(oracle);
    let cache = Arc::new(MemoryMetadataCache::new());
    let sink = Arc::new(InMemorySink::new());

    let resolver = TokenMetadataResolver::new(metadata.clone(), cache.clone() as Arc<dyn MetadataCache>);
    let prices = PriceOracleClient::new(oracle.clone(), "sui_mainnet");
    let pipeline = EventPipeline::new(resolver, prices, sink.clone(), sink.clone());

    TestPipeline {
        pipeline,
        sink,
        metadata,
        oracle,
        cache,
    }
}

pub const TIMESTAMP: &str = "2024-06-01T12:00:00Z";

/// Decoded event JSON with a standard header and the given kind fields
pub fn event_json(kind: &str, fields: Value) -> String {
    let mut event = json!({
        "kind": kind,
        "sender": "0xa11ce",
        "timestamp": TIMESTAMP,
        "id": { "event_seq": "7", "tx_digest": "HXzVkeQpLLyY1m4V8ttVf5i1pfZ2mUAh9kQdLXD5aJzK" },
    });
    if let (Some(target), Value::Object(extra)) = (event.as_object_mut(), fields) {
        target.extend(extra);
    }
    event.to_string()
}

pub fn decode(kind: &str, fields: Value) -> sui_defi_metrics::DecodedEvent {
    serde_json::from_str(&event_json(kind, fields)).unwrap()
}

/// Strip the `0x` prefix the way decoded events carry coin types
pub fn bare(token: &str) -> &str {
    token.trim_start_matches("0x")
}

/// Minimal HTTP/1.1 server answering every request through `respond`
///
/// Each connection serves one request and is closed. Request heads (request
/// line plus headers) are recorded in arrival order.
pub struct HttpStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl HttpStub {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let respond = Arc::new(respond);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let recorded = recorded.clone();
                let respond = respond.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => n,
                        };
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let head = String::from_utf8_lossy(&buf).to_string();
                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    recorded.lock().unwrap().push(head);

                    let (status, body) = respond(&request_line);
                    let response = format!(
                        "HTTP/1.1 {status} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Base URL where nothing is listening
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
