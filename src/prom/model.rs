/// A single gauge value, optionally carrying one label value per label
/// name declared on the owning family.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSample {
    pub label_values: Vec<String>,
    pub value: f64,
}

/// A named group of gauge samples sharing one help string and one set of
/// label dimensions. Unlabeled families hold samples with no label values.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeFamily {
    pub name: String,
    pub help: String,
    pub label_names: Vec<String>,
    pub samples: Vec<GaugeSample>,
}

impl GaugeFamily {
    /// An empty family with label dimensions, to be filled with `add_sample`.
    pub fn with_labels(name: &str, help: &str, label_names: &[&str]) -> GaugeFamily {
        GaugeFamily {
            name: name.to_string(),
            help: help.to_string(),
            label_names: label_names.iter().map(|s| (*s).to_string()).collect(),
            samples: Vec::new(),
        }
    }

    /// An unlabeled family holding exactly one sample.
    pub fn value(name: &str, help: &str, value: f64) -> GaugeFamily {
        GaugeFamily {
            name: name.to_string(),
            help: help.to_string(),
            label_names: Vec::new(),
            samples: vec![GaugeSample {
                label_values: Vec::new(),
                value,
            }],
        }
    }

    /// Append one sample; `label_values` must match `label_names` in order.
    pub fn add_sample(&mut self, label_values: Vec<String>, value: f64) {
        self.samples.push(GaugeSample {
            label_values,
            value,
        });
    }
}
