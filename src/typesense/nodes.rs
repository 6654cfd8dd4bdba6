/// One Typesense node as taken from the connection string.
///
/// Port stays a string: it is only ever interpolated back into a URL, and
/// the connection string is passed through without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub host: String,
    pub port: String,
    pub protocol: String,
}

const DEFAULT_PORT: &str = "8108";

/// Parse a comma-separated list of `host` or `host:port` entries.
///
/// Entries are trimmed and empty ones skipped. A missing port defaults to
/// `8108`. The protocol is uniform across all nodes and comes from the
/// caller, never from the string itself.
pub fn parse_nodes_from_str(nodes_str: &str, default_protocol: &str) -> Vec<NodeConfig> {
    nodes_str
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (host, port) = match entry.split_once(':') {
                Some((host, port)) => (host, port),
                None => (entry, DEFAULT_PORT),
            };
            NodeConfig {
                host: host.to_string(),
                port: port.to_string(),
                protocol: default_protocol.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(host: &str, port: &str, protocol: &str) -> NodeConfig {
        NodeConfig {
            host: host.to_string(),
            port: port.to_string(),
            protocol: protocol.to_string(),
        }
    }

    #[test]
    fn single_node_with_port() {
        assert_eq!(
            parse_nodes_from_str("localhost:8108", "https"),
            vec![node("localhost", "8108", "https")]
        );
    }

    #[test]
    fn multiple_nodes_keep_input_order() {
        assert_eq!(
            parse_nodes_from_str("host1:8108,host2:8109", "https"),
            vec![node("host1", "8108", "https"), node("host2", "8109", "https")]
        );
    }

    #[test]
    fn missing_port_defaults_to_8108() {
        assert_eq!(
            parse_nodes_from_str("localhost", "https"),
            vec![node("localhost", "8108", "https")]
        );
    }

    #[test]
    fn protocol_comes_from_the_caller() {
        assert_eq!(
            parse_nodes_from_str("localhost:8108", "http"),
            vec![node("localhost", "8108", "http")]
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        assert_eq!(
            parse_nodes_from_str(" host1 , , host2:9000 ,", "https"),
            vec![node("host1", "8108", "https"), node("host2", "9000", "https")]
        );
        assert!(parse_nodes_from_str("", "https").is_empty());
        assert!(parse_nodes_from_str(" , ", "https").is_empty());
    }

    #[test]
    fn only_the_first_colon_splits() {
        assert_eq!(
            parse_nodes_from_str("host:8108:extra", "https"),
            vec![node("host", "8108:extra", "https")]
        );
    }
}
