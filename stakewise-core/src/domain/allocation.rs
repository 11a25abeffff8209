//! Sector/company allocation records.

use serde::{Deserialize, Serialize};

/// One company row inside a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub share_price: f64,
}

impl Company {
    pub fn new(name: impl Into<String>, share_price: f64) -> Self {
        Self {
            name: name.into(),
            share_price,
        }
    }

    /// A row takes part in allocation only with a name and a positive price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.share_price.is_finite() && self.share_price > 0.0
    }
}

/// A sector and the company rows the user filled in for it.
///
/// `declared_companies` is the count the user asked for, which may exceed the
/// number of rows actually populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub declared_companies: usize,
    pub companies: Vec<Company>,
}

impl Sector {
    pub fn new(name: impl Into<String>, declared_companies: usize, companies: Vec<Company>) -> Self {
        Self {
            name: name.into(),
            declared_companies,
            companies,
        }
    }

    /// Sector with one declared slot per company row.
    pub fn from_companies(name: impl Into<String>, companies: Vec<Company>) -> Self {
        let declared = companies.len();
        Self::new(name, declared, companies)
    }

    /// Number of slots the sector budget is split into.
    ///
    /// Uses the declared count, so empty or invalid rows still consume their
    /// share. Never smaller than the number of rows present, which keeps each
    /// row inside its slice of the sector budget.
    pub fn budget_slots(&self) -> usize {
        self.declared_companies.max(self.companies.len())
    }

    pub fn valid_companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter().filter(|c| c.is_valid())
    }
}

/// Capital and the sector tree to split it across.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub total_capital: f64,
    pub sectors: Vec<Sector>,
}

impl AllocationRequest {
    pub fn new(total_capital: f64, sectors: Vec<Sector>) -> Self {
        Self {
            total_capital,
            sectors,
        }
    }

    /// Equal-weight share of capital per sector. Zero when there are no sectors.
    pub fn sector_budget(&self) -> f64 {
        if self.sectors.is_empty() {
            return 0.0;
        }
        self.total_capital / self.sectors.len() as f64
    }

    pub fn has_valid_company(&self) -> bool {
        self.sectors.iter().any(|s| s.valid_companies().next().is_some())
    }
}

/// Purchase recommendation for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub sector: String,
    pub company_name: String,
    pub share_price: f64,
    pub shares_to_buy: u64,
    /// `shares_to_buy * share_price`.
    pub investment_value: f64,
}

/// Full allocation outcome, lines in sector-then-company order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub lines: Vec<AllocationLine>,
    pub total_capital: f64,
    pub total_allocated: f64,
    pub cash_in_hand: f64,
}

impl AllocationSummary {
    /// Cash in hand is only reported as its own line when something is left.
    pub fn has_cash_in_hand(&self) -> bool {
        self.cash_in_hand > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_validity() {
        assert!(Company::new("Infosys", 1500.0).is_valid());
        assert!(!Company::new("", 1500.0).is_valid());
        assert!(!Company::new("   ", 1500.0).is_valid());
        assert!(!Company::new("Infosys", 0.0).is_valid());
        assert!(!Company::new("Infosys", -3.0).is_valid());
        assert!(!Company::new("Infosys", f64::NAN).is_valid());
    }

    #[test]
    fn budget_slots_prefer_declared_count() {
        let sector = Sector::new("IT", 3, vec![Company::new("TCS", 10.0)]);
        assert_eq!(sector.budget_slots(), 3);
    }

    #[test]
    fn budget_slots_never_below_rows_present() {
        let sector = Sector::new(
            "IT",
            1,
            vec![Company::new("TCS", 10.0), Company::new("Wipro", 5.0)],
        );
        assert_eq!(sector.budget_slots(), 2);
    }

    #[test]
    fn sector_budget_splits_evenly() {
        let request = AllocationRequest::new(
            90_000.0,
            vec![
                Sector::from_companies("A", vec![]),
                Sector::from_companies("B", vec![]),
                Sector::from_companies("C", vec![]),
            ],
        );
        assert_eq!(request.sector_budget(), 30_000.0);
        assert!(!request.has_valid_company());
    }
}
