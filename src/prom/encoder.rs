use std::fmt::Write;

use crate::prom::GaugeFamily;

/// Render families in the Prometheus text exposition format (version 0.0.4).
///
/// Every family is emitted as a `# HELP` line, a `# TYPE <name> gauge` line
/// and one sample line per sample. A family with label names renders its
/// samples as `name{label="value"} v`, an unlabeled family as `name v`.
pub fn encode(families: &[GaugeFamily]) -> String {
    let mut out = String::new();
    for family in families {
        let _ = writeln!(out, "# HELP {} {}", family.name, escape_help(&family.help));
        let _ = writeln!(out, "# TYPE {} gauge", family.name);
        for sample in &family.samples {
            if family.label_names.is_empty() {
                let _ = writeln!(out, "{} {}", family.name, sample.value);
            } else {
                let labels = family
                    .label_names
                    .iter()
                    .zip(&sample.label_values)
                    .map(|(name, value)| format!("{name}=\"{}\"", escape_label_value(value)))
                    .collect::<Vec<_>>()
                    .join(",");
                let _ = writeln!(out, "{}{{{labels}}} {}", family.name, sample.value);
            }
        }
    }
    out
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prom::GaugeFamily;

    #[test]
    fn encodes_unlabeled_family() {
        let family = GaugeFamily::value("typesense_uptime", "Uptime in seconds", 42.0);
        let text = encode(&[family]);
        assert_eq!(
            text,
            "# HELP typesense_uptime Uptime in seconds\n\
             # TYPE typesense_uptime gauge\n\
             typesense_uptime 42\n"
        );
    }

    #[test]
    fn encodes_labeled_family() {
        let mut family = GaugeFamily::with_labels(
            "typesense_latency_ms",
            "Latency in milliseconds by endpoint",
            &["endpoint"],
        );
        family.add_sample(vec!["GET /health".to_string()], 0.5);
        family.add_sample(vec!["GET /status".to_string()], 1.5);
        let text = encode(&[family]);
        assert!(text.contains("# TYPE typesense_latency_ms gauge"));
        assert!(text.contains("typesense_latency_ms{endpoint=\"GET /health\"} 0.5"));
        assert!(text.contains("typesense_latency_ms{endpoint=\"GET /status\"} 1.5"));
    }

    #[test]
    fn escapes_label_values_and_help() {
        let mut family =
            GaugeFamily::with_labels("typesense_collection_documents", "line\nbreak", &["collection_name"]);
        family.add_sample(vec!["quo\"te\\slash".to_string()], 1.0);
        let text = encode(&[family]);
        assert!(text.contains("# HELP typesense_collection_documents line\\nbreak"));
        assert!(text.contains("{collection_name=\"quo\\\"te\\\\slash\"} 1"));
    }

    #[test]
    fn encodes_families_in_order() {
        let first = GaugeFamily::value("typesense_a", "a", 1.0);
        let second = GaugeFamily::value("typesense_b", "b", 2.0);
        let text = encode(&[first, second]);
        let a = text.find("typesense_a 1").unwrap();
        let b = text.find("typesense_b 2").unwrap();
        assert!(a < b);
    }

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }
}
