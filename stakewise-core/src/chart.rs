//! Chart series — label/value/color tuples for an external charting surface.
//!
//! A series is rebuilt from scratch for every result. The rendering surface
//! owns whatever chart handle it keeps and replaces it on each new series.

use serde::{Deserialize, Serialize};

use crate::domain::{AllocationSummary, SizingResult};

/// Colors handed out when no palette is configured.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8BC34A", "#C9CBCF",
];

pub const CASH_IN_HAND_LABEL: &str = "Cash in Hand";

/// Ordered, non-empty list of colors assigned by index modulo length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Returns `None` for an empty color list.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build a series from `(label, value)` pairs, coloring by position.
    pub fn from_pairs<I, S>(pairs: I, palette: &Palette) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let points = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| ChartPoint {
                label: label.into(),
                value,
                color: palette.color(i).to_string(),
            })
            .collect();
        Self { points }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plain-text table, one point per line.
    pub fn to_text(&self) -> String {
        let width = self
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for p in &self.points {
            out.push_str(&format!("{:<width$}  {:>14.2}  {}\n", p.label, p.value, p.color));
        }
        out
    }
}

/// Convert a result into chart-ready points.
pub trait ToSeries {
    fn to_series(&self, palette: &Palette) -> ChartSeries;
}

impl ToSeries for SizingResult {
    /// Fixed categories: risk, reward, quantity, capital spent.
    fn to_series(&self, palette: &Palette) -> ChartSeries {
        ChartSeries::from_pairs(
            [
                ("Risk", self.risk_amount),
                ("Reward", self.reward_amount),
                ("Quantity", self.quantity as f64),
                ("Capital Spent", self.total_spent),
            ],
            palette,
        )
    }
}

impl ToSeries for AllocationSummary {
    /// One point per line, plus cash in hand when positive.
    fn to_series(&self, palette: &Palette) -> ChartSeries {
        let lines = self
            .lines
            .iter()
            .map(|l| (l.company_name.clone(), l.investment_value));
        let cash = self
            .has_cash_in_hand()
            .then(|| (CASH_IN_HAND_LABEL.to_string(), self.cash_in_hand));
        ChartSeries::from_pairs(lines.chain(cash), palette)
    }
}
