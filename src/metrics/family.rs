/// One labeled gauge value within a family
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// Label values, in the order of the family's label names
    pub label_values: Vec<String>,

    /// The gauge value
    pub value: f64,
}

/// A named, documented group of gauge samples sharing one label schema
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    /// Metric name, `<scope>_<measurement>_<unit>`
    pub name: String,

    /// Help text shown on the scrape endpoint
    pub help: String,

    /// Label keys shared by every sample
    pub label_names: Vec<String>,

    /// Samples in insertion order
    pub samples: Vec<MetricSample>,
}

impl MetricFamily {
    /// Creates an empty gauge family
    pub fn gauge(name: impl Into<String>, help: impl Into<String>, label_names: &[&str]) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            label_names: label_names.iter().map(|l| l.to_string()).collect(),
            samples: Vec::new(),
        }
    }

    /// Creates an unlabeled gauge family holding a single value
    pub fn single(name: impl Into<String>, help: impl Into<String>, value: f64) -> Self {
        let mut family = Self::gauge(name, help, &[]);
        family.add_sample(&[], value);
        family
    }

    /// Appends a sample; `label_values` must line up with the label names
    pub fn add_sample(&mut self, label_values: &[&str], value: f64) {
        debug_assert_eq!(label_values.len(), self.label_names.len());
        self.samples.push(MetricSample {
            label_values: label_values.iter().map(|v| v.to_string()).collect(),
            value,
        });
    }

    /// Looks up the value of the sample with exactly these label values
    pub fn value_for(&self, label_values: &[&str]) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.label_values.iter().map(String::as_str).eq(label_values.iter().copied()))
            .map(|s| s.value)
    }
}
