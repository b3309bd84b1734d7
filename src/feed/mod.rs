use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use sha2::{Digest, Sha256};
use url::Url;

use crate::logging::{debug, enabled, info, obj, v_num, v_str, Domain, Level};

pub mod geojson;

pub use geojson::{Feature, FeatureRecord, FeedDocument};

/// Where the raw feed bytes come from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Single GET with no retry and no timeout.
pub struct HttpFeed {
    client: Client,
    url: Url,
}

impl HttpFeed {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn with_client(url: Url, client: Client) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()?;
        let body = resp.bytes().await.context("reading feed body")?;
        Ok(body.to_vec())
    }
}

/// In-memory payload, served as-is.
pub struct StaticFeed {
    body: Vec<u8>,
}

impl StaticFeed {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.body.clone())
    }
}

/// A parsed feed plus the digest of the bytes it came from.
#[derive(Debug, Clone)]
pub struct LoadedFeed {
    pub document: FeedDocument,
    pub sha256: String,
    pub bytes: usize,
}

pub fn payload_sha256(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

pub fn parse_feed(body: &[u8]) -> Result<FeedDocument> {
    serde_json::from_slice(body).context("feed is not a GeoJSON FeatureCollection")
}

/// Fetch and parse once. Any failure is returned to the caller untouched.
pub async fn load_feed(source: &dyn FeedSource) -> Result<LoadedFeed> {
    let origin = source.describe();
    info(Domain::Feed, "fetch_start", obj(&[("source", v_str(&origin))]));

    let body = source.fetch().await?;
    let sha256 = payload_sha256(&body);
    let document = parse_feed(&body)?;

    info(
        Domain::Feed,
        "fetch_done",
        obj(&[
            ("source", v_str(&origin)),
            ("bytes", v_num(body.len() as f64)),
            ("sha256", v_str(&sha256)),
            ("features", v_num(document.features.len() as f64)),
        ]),
    );
    if enabled(Level::Debug) {
        debug(
            Domain::Feed,
            "features",
            obj(&[(
                "features",
                serde_json::to_value(&document.features).unwrap_or(Value::Null),
            )]),
        );
    }

    Ok(LoadedFeed {
        document,
        sha256,
        bytes: body.len(),
    })
}
