use clap::Parser;
use clap::ValueHint;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Typesense API key
    ///
    /// The API key used to authenticate against the Typesense cluster.
    #[arg(long, env = "TYPESENSE_API_KEY", default_value = "", hide_env_values = true)]
    pub typesense_api_key: String,

    /// URL for /metrics.json
    ///
    /// The Typesense endpoint serving the flat system/process metrics document.
    #[arg(long, env="TYPESENSE_METRICS_URL", value_hint=ValueHint::Url, default_value="https://localhost:8108/metrics.json")]
    pub typesense_metrics_url: String,

    /// URL for /stats.json
    ///
    /// The Typesense endpoint serving request statistics, including the
    /// per-endpoint latency and requests-per-second maps.
    #[arg(long, env="TYPESENSE_STATS_URL", value_hint=ValueHint::Url, default_value="https://localhost:8108/stats.json")]
    pub typesense_stats_url: String,

    /// URL for /debug
    ///
    /// The Typesense endpoint serving the node state document.
    #[arg(long, env="TYPESENSE_DEBUG_URL", value_hint=ValueHint::Url, default_value="https://localhost:8108/debug")]
    pub typesense_debug_url: String,

    /// Comma-separated 'host:port' list of Typesense nodes
    ///
    /// Used to list collections; the port defaults to 8108 when omitted.
    #[arg(long, env="TYPESENSE_NODES", value_hint=ValueHint::Other, default_value="localhost:8108")]
    pub typesense_nodes: String,

    /// Verify TLS certificates when talking to the cluster
    #[arg(long, env = "VERIFY_SSL")]
    pub verify: bool,

    /// Port on which to expose the /metrics endpoint
    #[arg(short, long, env="EXPORTER_PORT", value_hint=ValueHint::Other, default_value="8000")]
    pub port: u16,

    /// Set the logging level
    ///
    /// Set the logging level to use when logging to the console
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="INFO")]
    pub loglevel: log::LevelFilter,
}
