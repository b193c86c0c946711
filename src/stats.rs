use statrs::statistics::{Data, Median};

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub cnt: usize,
    pub avg: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Summarises millisecond samples. `None` for an empty set; the standard
/// deviation is the sample (n - 1) one and is 0 for a single sample.
pub fn statistics_from_samples(samples: &[f64]) -> Option<Statistics> {
    if samples.is_empty() {
        return None;
    }

    let cnt = samples.len();
    let std_dev = match cnt {
        1 => 0.0,
        _ => statrs::statistics::Statistics::std_dev(samples.iter()),
    };

    Some(Statistics {
        cnt,
        avg: statrs::statistics::Statistics::mean(samples.iter()),
        median: Data::new(samples.to_vec()).median(),
        min: statrs::statistics::Statistics::min(samples.iter()),
        max: statrs::statistics::Statistics::max(samples.iter()),
        std_dev,
    })
}
