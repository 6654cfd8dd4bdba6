mod nodes;
pub use self::nodes::parse_nodes_from_str;
pub use self::nodes::NodeConfig;

mod client;
pub use self::client::TypesenseClient;

mod collector;
pub use self::collector::TypesenseCollector;
