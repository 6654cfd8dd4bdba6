use std::time::Duration;

use anyhow::{anyhow, Context};
use serde_json::Value;

use crate::typesense::NodeConfig;

const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for the Typesense cluster API, used to list collections.
///
/// Built once at startup and read-only afterwards. Requests are tried
/// against the configured nodes in order; the first node that answers
/// successfully wins.
pub struct TypesenseClient {
    nodes: Vec<NodeConfig>,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl TypesenseClient {
    pub fn new(nodes: Vec<NodeConfig>, api_key: &str, verify_ssl: bool) -> anyhow::Result<TypesenseClient> {
        let http = reqwest::blocking::Client::builder()
            .timeout(CONNECTION_TIMEOUT)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .context("failed to build the Typesense HTTP client")?;
        Ok(TypesenseClient {
            nodes,
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Retrieve the collection descriptors from the first reachable node.
    pub fn list_collections(&self) -> anyhow::Result<Vec<Value>> {
        let mut last_error = anyhow!("no Typesense nodes configured");
        for node in &self.nodes {
            let url = format!(
                "{}://{}:{}/collections",
                node.protocol, node.host, node.port
            );
            match self.fetch_collections(&url) {
                Ok(collections) => return Ok(collections),
                Err(err) => {
                    log::debug!("Node {url} did not answer: {err:#}");
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }

    fn fetch_collections(&self, url: &str) -> anyhow::Result<Vec<Value>> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} returned an error status"))?;
        response
            .json::<Vec<Value>>()
            .with_context(|| format!("response from {url} is not a JSON array"))
    }
}
