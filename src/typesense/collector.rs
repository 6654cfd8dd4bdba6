use std::time::Duration;

use anyhow::Context;
use serde_json::{Map, Value};

use crate::prom::GaugeFamily;
use crate::typesense::{NodeConfig, TypesenseClient};

const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Gathers metrics from a Typesense cluster on every scrape of the
/// `/metrics` endpoint, so the scraper always sees live data instead of a
/// snapshot from a background polling loop.
///
/// Read-only after construction; a failing upstream source never aborts the
/// other extractors nor the scrape itself.
pub struct TypesenseCollector {
    api_key: String,
    metrics_url: String,
    stats_url: String,
    debug_url: String,
    http: reqwest::blocking::Client,
    client: TypesenseClient,
}

impl TypesenseCollector {
    pub fn new(
        api_key: &str,
        metrics_url: &str,
        stats_url: &str,
        debug_url: &str,
        nodes: Vec<NodeConfig>,
        verify_ssl: bool,
    ) -> anyhow::Result<TypesenseCollector> {
        let http = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .context("failed to build the metrics HTTP client")?;
        let client = TypesenseClient::new(nodes, api_key, verify_ssl)?;
        Ok(TypesenseCollector {
            api_key: api_key.to_string(),
            metrics_url: metrics_url.to_string(),
            stats_url: stats_url.to_string(),
            debug_url: debug_url.to_string(),
            http,
            client,
        })
    }

    /// Run all extractors in a fixed order and concatenate their families.
    /// Invoked once per scrape.
    pub fn collect(&self) -> Vec<GaugeFamily> {
        let mut families = Vec::new();
        families.extend(self.collect_metrics_json());
        families.extend(self.collect_stats_json());
        families.extend(self.collect_debug_json());
        families.extend(self.collect_collections());
        families
    }

    /// `/metrics.json`: every numeric field becomes one unlabeled gauge.
    fn collect_metrics_json(&self) -> Vec<GaugeFamily> {
        match self.fetch_json(&self.metrics_url) {
            Ok(data) => flat_families(&data, "Typesense metric"),
            Err(err) => {
                log::error!("Could not fetch {}: {err:#}", self.metrics_url);
                Vec::new()
            }
        }
    }

    /// `/stats.json`: numeric top-level fields plus the per-endpoint
    /// `latency_ms` and `requests_per_second` maps.
    fn collect_stats_json(&self) -> Vec<GaugeFamily> {
        match self.fetch_json(&self.stats_url) {
            Ok(data) => stats_families(&data),
            Err(err) => {
                log::error!("Could not fetch {}: {err:#}", self.stats_url);
                Vec::new()
            }
        }
    }

    /// `/debug`: same flat extraction as `/metrics.json`. In practice only
    /// the `state` field is numeric, so this yields a single gauge.
    fn collect_debug_json(&self) -> Vec<GaugeFamily> {
        match self.fetch_json(&self.debug_url) {
            Ok(data) => flat_families(&data, "Typesense debug"),
            Err(err) => {
                log::error!("Could not fetch {}: {err:#}", self.debug_url);
                Vec::new()
            }
        }
    }

    /// Collection listing via the cluster client: one labeled gauge with
    /// the document count of each collection.
    fn collect_collections(&self) -> Vec<GaugeFamily> {
        match self.client.list_collections() {
            Ok(collections) => vec![collections_family(&collections)],
            Err(err) => {
                log::error!("Could not fetch collections: {err:#}");
                Vec::new()
            }
        }
    }

    fn fetch_json(&self, url: &str) -> anyhow::Result<Map<String, Value>> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} returned an error status"))?;
        let value: Value = response
            .json()
            .with_context(|| format!("response from {url} is not valid JSON"))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!("response from {url} is not a JSON object"),
        }
    }
}

/// One unlabeled family per numeric field, in document order. Non-numeric
/// fields are skipped silently.
fn flat_families(data: &Map<String, Value>, help_prefix: &str) -> Vec<GaugeFamily> {
    data.iter()
        .filter_map(|(key, value)| {
            let value = coerce_f64(value)?;
            Some(GaugeFamily::value(
                &sanitize_metric_name(key),
                &format!("{help_prefix}: {key}"),
                value,
            ))
        })
        .collect()
}

/// Scalar fields first (document order), then the labeled latency and
/// requests-per-second families when their maps are present.
fn stats_families(data: &Map<String, Value>) -> Vec<GaugeFamily> {
    let mut families: Vec<GaugeFamily> = data
        .iter()
        .filter(|(_, value)| !value.is_object())
        .filter_map(|(key, value)| {
            let value = coerce_f64(value)?;
            Some(GaugeFamily::value(
                &sanitize_metric_name(key),
                &format!("Typesense stats: {key}"),
                value,
            ))
        })
        .collect();

    if let Some(latency_map) = data.get("latency_ms").and_then(Value::as_object) {
        families.push(endpoint_family(
            "typesense_latency_ms",
            "Latency in milliseconds by endpoint",
            latency_map,
        ));
    }
    if let Some(rps_map) = data.get("requests_per_second").and_then(Value::as_object) {
        families.push(endpoint_family(
            "typesense_requests_per_second",
            "Requests per second by endpoint",
            rps_map,
        ));
    }
    families
}

/// One labeled family with a sample per numeric map entry; the map key is
/// used verbatim as the `endpoint` label value.
fn endpoint_family(name: &str, help: &str, map: &Map<String, Value>) -> GaugeFamily {
    let mut family = GaugeFamily::with_labels(name, help, &["endpoint"]);
    for (endpoint, value) in map {
        if let Some(value) = coerce_f64(value) {
            family.add_sample(vec![endpoint.clone()], value);
        }
    }
    family
}

/// The single `typesense_collection_documents` family, labeled by
/// collection name. Always yielded, even for an empty collection list.
fn collections_family(collections: &[Value]) -> GaugeFamily {
    let mut family = GaugeFamily::with_labels(
        "typesense_collection_documents",
        "Number of documents in each Typesense collection",
        &["collection_name"],
    );
    for collection in collections {
        let name = collection
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        // Unlike everywhere else, an unparsable document count becomes 0.0
        // instead of dropping the sample.
        let documents = collection
            .get("num_documents")
            .and_then(coerce_f64)
            .unwrap_or(0.0);
        family.add_sample(vec![name.to_string()], documents);
    }
    family
}

/// Turn a raw document key into a valid metric name in the `typesense`
/// namespace: `.` and `-` become `_`, and the namespace prefix is added
/// unless already present. Idempotent.
fn sanitize_metric_name(name: &str) -> String {
    let sanitized = name.replace(['.', '-'], "_");
    if sanitized.starts_with("typesense_") {
        sanitized
    } else {
        format!("typesense_{sanitized}")
    }
}

/// Coerce a JSON value to a finite float, accepting native numbers and
/// numeric-looking strings. Anything else yields `None`.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
