//! HTTP implementation of the chain-client capability.
//!
//! Talks JSON over HTTP to a signing-capable client gateway:
//!
//! - `GET  {base}/contracts/{address}/entrypoints` -> normalized schema
//! - `POST {base}/contracts/{address}/calls`       -> operation receipt
//! - `POST {base}/originations`                    -> origination receipt
//!
//! The gateway owns key handling, fee/gas computation, and the node wire
//! protocol; this client only shapes requests and surfaces rejections.

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tez_types::{EntrypointSchema, ParamValue, Receipt};

use crate::compile::ContractArtifacts;
use crate::schema::parse_schema;
use crate::signer::SignerKey;
use crate::ChainClient;

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// JSON-over-HTTP chain client.
#[derive(Clone)]
pub struct HttpChainClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpChainClient {
    /// Create a client with default timeouts.
    pub fn new(endpoint: &str) -> Self {
        Self::with_timeouts(
            endpoint,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new()
                .timeout(timeout)
                .timeout_connect(connect_timeout)
                .build(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!(%url, "gateway GET");
        self.agent
            .get(&url)
            .call()
            .map_err(|e| anyhow!("gateway request failed: {}", e))?
            .into_json()
            .map_err(|e| anyhow!("failed to parse gateway response: {}", e))
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!(%url, "gateway POST");
        self.agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| anyhow!("gateway request failed: {}", e))?
            .into_json()
            .map_err(|e| anyhow!("failed to parse gateway response: {}", e))
    }
}

impl ChainClient for HttpChainClient {
    fn entrypoint_schema(&self, address: &str) -> Result<EntrypointSchema> {
        let value = self.get(&format!("/contracts/{address}/entrypoints"))?;
        parse_schema(&value)
    }

    fn invoke(
        &self,
        address: &str,
        entrypoint: &str,
        params: &[ParamValue],
        amount: u64,
        signer: &SignerKey,
    ) -> Result<Receipt> {
        let body = serde_json::json!({
            "entrypoint": entrypoint,
            "parameters": params,
            "amount": amount,
            "signer": signer.secret(),
        });
        let value = self.post(&format!("/contracts/{address}/calls"), &body)?;
        Ok(Receipt(value))
    }

    fn originate(
        &self,
        artifacts: &ContractArtifacts,
        balance: u64,
        signer: &SignerKey,
    ) -> Result<Receipt> {
        let body = serde_json::json!({
            "code": artifacts.code,
            "storage": artifacts.storage,
            "balance": balance,
            "signer": signer.secret(),
        });
        let value = self.post("/originations", &body)?;
        Ok(Receipt(value))
    }
}
