//! Descriptive statistics over recorded scores. The summary mirrors the
//! familiar `describe()` layout (count, mean, std, min, quartiles, max) and
//! the histogram feeds the bar chart in the statistics panel.

/// Number of bars drawn in the score histogram.
pub const HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; undefined for a single score.
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ScoreSummary {
    /// Summarize the given scores. Returns `None` when there is nothing to
    /// summarize so callers can show a "no data" notice instead.
    pub fn from_scores<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted: Vec<f64> = scores.into_iter().collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let squares: f64 = sorted.iter().map(|score| (score - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let std = match self.std {
            Some(std) => format!("{std:.2}"),
            None => "-".to_string(),
        };
        vec![
            ("count", self.count.to_string()),
            ("mean", format!("{:.2}", self.mean)),
            ("std", std),
            ("min", format!("{:.2}", self.min)),
            ("25%", format!("{:.2}", self.q1)),
            ("50%", format!("{:.2}", self.median)),
            ("75%", format!("{:.2}", self.q3)),
            ("max", format!("{:.2}", self.max)),
        ]
    }
}

/// Linear interpolation between closest ranks over already sorted data.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

impl HistogramBin {
    /// Short label for the bar, using the lower edge.
    pub fn label(&self) -> String {
        format!("{:.0}", self.lower)
    }
}

/// Split the scores into `bins` equal-width buckets spanning the observed
/// range. The final bucket includes its upper edge. A single distinct value
/// gets a unit-wide range centred on it.
pub fn histogram(scores: &[f64], bins: usize) -> Vec<HistogramBin> {
    if scores.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut low = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }
    let width = (high - low) / bins as f64;

    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|idx| HistogramBin {
            lower: low + width * idx as f64,
            upper: low + width * (idx + 1) as f64,
            count: 0,
        })
        .collect();

    for score in scores {
        let idx = (((score - low) / width).floor() as usize).min(bins - 1);
        result[idx].count += 1;
    }

    result
}
