//! Result formatting — numeric results projected to labeled text.
//!
//! Nothing here computes or rounds the underlying values. Money is rendered
//! with a fixed number of decimals, share counts with none.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AllocationSummary, SizingResult};

/// Digit grouping for the integer part of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// `1234567.00`
    #[default]
    None,
    /// `1,234,567.00`
    Western,
    /// `12,34,567.00` (lakh/crore)
    Indian,
}

/// Currency and locale signal supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub currency_symbol: String,
    pub grouping: DigitGrouping,
    pub money_decimals: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            grouping: DigitGrouping::None,
            money_decimals: 2,
        }
    }
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    let breaks: Vec<usize> = match grouping {
        DigitGrouping::None => return digits.to_string(),
        DigitGrouping::Western => (1..len).filter(|i| (len - i) % 3 == 0).collect(),
        DigitGrouping::Indian => {
            if len <= 3 {
                Vec::new()
            } else {
                let head = len - 3;
                (1..head).filter(|i| (head - i) % 2 == 0).chain([head]).collect()
            }
        }
    };

    let mut out = String::with_capacity(len + breaks.len());
    for (i, ch) in digits.chars().enumerate() {
        if breaks.contains(&i) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_number(value: f64, decimals: usize, grouping: DigitGrouping) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };
    let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Render a money amount, e.g. `₹40000.00` or `-₹1,250.50`.
pub fn format_money(value: f64, config: &FormatConfig) -> String {
    let number = format_number(value, config.money_decimals, config.grouping);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{}{}", config.currency_symbol, abs),
        None => format!("{}{}", config.currency_symbol, number),
    }
}

/// Render a whole share count.
pub fn format_shares(quantity: u64, config: &FormatConfig) -> String {
    group_digits(&quantity.to_string(), config.grouping)
}

/// One labeled line of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Displayable summary of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    /// Plain text with labels padded into a column.
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count() + 1)
            .max()
            .unwrap_or(0);

        let mut out = format!("=== {} ===\n", self.title);
        for row in &self.rows {
            let label = format!("{}:", row.label);
            out.push_str(&format!("{label:<width$} {}\n", row.value));
        }
        out
    }

    /// HTML fragment with every user-supplied string escaped.
    pub fn to_html(&self) -> String {
        let mut out = format!(
            "<div class=\"summary\">\n<h3>{}</h3>\n<ul>\n",
            escape_html(&self.title)
        );
        for row in &self.rows {
            out.push_str(&format!(
                "<li><strong>{}:</strong> {}</li>\n",
                escape_html(&row.label),
                escape_html(&row.value)
            ));
        }
        out.push_str("</ul>\n</div>\n");
        out
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Project a result into a [`Summary`].
pub trait Summarize {
    fn summarize(&self, config: &FormatConfig) -> Summary;
}

impl Summarize for SizingResult {
    fn summarize(&self, config: &FormatConfig) -> Summary {
        Summary {
            title: "Position Size".to_string(),
            rows: vec![
                SummaryRow::new("Risk per Share", format_money(self.risk_per_share, config)),
                SummaryRow::new("Risk Amount", format_money(self.risk_amount, config)),
                SummaryRow::new("Quantity to Buy", format_shares(self.quantity, config)),
                SummaryRow::new("Total Amount Spent", format_money(self.total_spent, config)),
                SummaryRow::new("Reward Amount", format_money(self.reward_amount, config)),
            ],
        }
    }
}

impl Summarize for AllocationSummary {
    fn summarize(&self, config: &FormatConfig) -> Summary {
        let mut rows: Vec<SummaryRow> = self
            .lines
            .iter()
            .map(|line| {
                SummaryRow::new(
                    format!("{} ({})", line.company_name, line.sector),
                    format!(
                        "{} shares @ {} = {}",
                        format_shares(line.shares_to_buy, config),
                        format_money(line.share_price, config),
                        format_money(line.investment_value, config)
                    ),
                )
            })
            .collect();

        rows.push(SummaryRow::new(
            "Total Allocated",
            format_money(self.total_allocated, config),
        ));
        if self.has_cash_in_hand() {
            rows.push(SummaryRow::new(
                "Cash in Hand",
                format_money(self.cash_in_hand, config),
            ));
        }

        Summary {
            title: "Portfolio Allocation".to_string(),
            rows,
        }
    }
}

/// Format any summarizable result.
pub fn format_summary<T: Summarize>(result: &T, config: &FormatConfig) -> Summary {
    result.summarize(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AllocationLine;

    fn grouped(grouping: DigitGrouping) -> FormatConfig {
        FormatConfig {
            grouping,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn money_has_two_decimals() {
        let config = FormatConfig::default();
        assert_eq!(format_money(40_000.0, &config), "₹40000.00");
        assert_eq!(format_money(2.005, &config), "₹2.00");
        assert_eq!(format_money(-8000.5, &config), "-₹8000.50");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        let config = FormatConfig::default();
        assert_eq!(format_money(-0.001, &config), "₹0.00");
    }

    #[test]
    fn western_grouping() {
        let config = grouped(DigitGrouping::Western);
        assert_eq!(format_money(1_234_567.891, &config), "₹1,234,567.89");
        assert_eq!(format_money(999.0, &config), "₹999.00");
        assert_eq!(format_shares(1000, &config), "1,000");
    }

    #[test]
    fn indian_grouping() {
        let config = grouped(DigitGrouping::Indian);
        assert_eq!(format_money(1_234_567.0, &config), "₹12,34,567.00");
        assert_eq!(format_money(100_000.0, &config), "₹1,00,000.00");
        assert_eq!(format_money(1000.0, &config), "₹1,000.00");
        assert_eq!(format_money(512.0, &config), "₹512.00");
    }

    #[test]
    fn custom_currency_symbol() {
        let config = FormatConfig {
            currency_symbol: "$".into(),
            ..FormatConfig::default()
        };
        assert_eq!(format_money(12.5, &config), "$12.50");
    }

    #[test]
    fn sizing_summary_rows() {
        let result = SizingResult {
            risk_per_share: 5.0,
            risk_amount: 2000.0,
            quantity: 400,
            total_spent: 40_000.0,
            reward_amount: 8000.0,
            clamped: false,
        };
        let summary = result.summarize(&FormatConfig::default());
        let values: Vec<&str> = summary.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["₹5.00", "₹2000.00", "400", "₹40000.00", "₹8000.00"]
        );
    }

    #[test]
    fn allocation_summary_lists_cash_only_when_positive() {
        let mut allocation = AllocationSummary {
            lines: vec![AllocationLine {
                sector: "Pharma".into(),
                company_name: "Cipla".into(),
                share_price: 50.0,
                shares_to_buy: 100,
                investment_value: 5000.0,
            }],
            total_capital: 10_000.0,
            total_allocated: 5000.0,
            cash_in_hand: 5000.0,
        };

        let summary = format_summary(&allocation, &FormatConfig::default());
        assert_eq!(summary.rows[0].label, "Cipla (Pharma)");
        assert_eq!(summary.rows[0].value, "100 shares @ ₹50.00 = ₹5000.00");
        assert_eq!(summary.rows.last().unwrap().label, "Cash in Hand");

        allocation.cash_in_hand = 0.0;
        let summary = format_summary(&allocation, &FormatConfig::default());
        assert!(summary.rows.iter().all(|r| r.label != "Cash in Hand"));
    }

    #[test]
    fn text_rendering_aligns_values() {
        let summary = Summary {
            title: "T".into(),
            rows: vec![SummaryRow::new("A", "1"), SummaryRow::new("Longer", "2")],
        };
        assert_eq!(summary.to_text(), "=== T ===\nA:      1\nLonger: 2\n");
    }

    #[test]
    fn html_rendering_escapes_company_names() {
        let summary = Summary {
            title: "Portfolio Allocation".into(),
            rows: vec![SummaryRow::new("<script>alert('x')</script>", "1 & 2")],
        };
        let html = summary.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("1 &amp; 2"));
    }
}
