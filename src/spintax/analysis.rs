//! Diversity analysis of rendered spuns
//!
//! Generates a run of spuns from one masterspin and scores each new spun
//! against every earlier one, keeping the maximum similarity per metric.
//! The per-iteration maxima show how quickly a masterspin exhausts its
//! variation: once they saturate near `1.0`, new spuns are near-duplicates
//! of earlier ones. Consumes rendered output only; nothing feeds back into
//! parsing or spinning.

use rand::Rng;
use serde::Serialize;

use crate::spintax::parser::DEFAULT_DELIMITER;
use crate::spintax::similarity::{
    cosine_similarity, jaccard_similarity, jaro_winkler_similarity, whitespace_tokens,
};
use crate::spintax::spin::Spin;

/// Maximum similarity of one spun against all spuns generated before it
#[derive(Debug, Clone, Serialize)]
pub struct DiversityPoint {
    /// Zero-based generation index
    pub iteration: usize,
    pub max_jaccard: f64,
    pub max_cosine: f64,
    pub max_jaro_winkler: f64,
}

/// Per-metric distribution summary
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl MetricSummary {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in values {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }
        if count == 0 {
            return Self {
                min: 0.0,
                mean: 0.0,
                max: 0.0,
            };
        }
        Self {
            min,
            mean: sum / count as f64,
            max,
        }
    }
}

/// The full diversity run: one point per generated spun
#[derive(Debug, Clone, Serialize)]
pub struct DiversityReport {
    pub points: Vec<DiversityPoint>,
}

impl DiversityReport {
    pub fn jaccard_summary(&self) -> MetricSummary {
        MetricSummary::of(self.points.iter().map(|p| p.max_jaccard))
    }

    pub fn cosine_summary(&self) -> MetricSummary {
        MetricSummary::of(self.points.iter().map(|p| p.max_cosine))
    }

    pub fn jaro_winkler_summary(&self) -> MetricSummary {
        MetricSummary::of(self.points.iter().map(|p| p.max_jaro_winkler))
    }

    /// Render the report as a plain-text table with per-metric summaries
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("iteration  jaccard  cosine  jaro-winkler\n");
        for point in &self.points {
            out.push_str(&format!(
                "{:>9}   {:.4}  {:.4}        {:.4}\n",
                point.iteration, point.max_jaccard, point.max_cosine, point.max_jaro_winkler
            ));
        }
        for (name, summary) in [
            ("jaccard", self.jaccard_summary()),
            ("cosine", self.cosine_summary()),
            ("jaro-winkler", self.jaro_winkler_summary()),
        ] {
            out.push_str(&format!(
                "{}: min {:.4}  mean {:.4}  max {:.4}\n",
                name, summary.min, summary.mean, summary.max
            ));
        }
        out
    }
}

/// Generate `iterations` spuns and score each against its predecessors.
pub fn duplicate_evolution<R: Rng>(
    spin: &Spin,
    iterations: usize,
    rng: &mut R,
) -> DiversityReport {
    let mut spuns: Vec<String> = Vec::new();
    let mut points = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        let new_spun = spin.unspin_with(DEFAULT_DELIMITER, rng);
        let new_tokens = whitespace_tokens(&new_spun);

        let mut point = DiversityPoint {
            iteration,
            max_jaccard: 0.0,
            max_cosine: 0.0,
            max_jaro_winkler: 0.0,
        };
        for spun in &spuns {
            let tokens = whitespace_tokens(spun);
            point.max_jaccard = point.max_jaccard.max(jaccard_similarity(&new_tokens, &tokens));
            point.max_cosine = point.max_cosine.max(cosine_similarity(&new_tokens, &tokens));
            point.max_jaro_winkler = point
                .max_jaro_winkler
                .max(jaro_winkler_similarity(&new_tokens, &tokens));
        }

        points.push(point);
        spuns.push(new_spun);
    }

    DiversityReport { points }
}
