//! Equal-weight allocator
//!
//! Capital is split evenly across sectors, then evenly across each sector's
//! declared company slots, then floored into whole shares.

use tracing::{debug, trace};

use crate::allocators::Allocator;
use crate::domain::{whole_units, AllocationLine, AllocationRequest, AllocationSummary};
use crate::error::{EmptyReason, EngineError};

/// Equal-weight sector → company allocator
///
/// # Formula
/// ```text
/// sector_budget      = capital / sectors
/// per_company_budget = sector_budget / declared_companies
/// shares             = floor(per_company_budget / share_price)
/// cash_in_hand       = capital - sum(shares * share_price)
/// ```
///
/// A sector declaring more companies than it has valid rows leaves the unused
/// slots as cash in hand; the remainder is not handed to sibling companies.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWeightAllocator;

impl EqualWeightAllocator {
    fn validate(request: &AllocationRequest) -> Result<(), EngineError> {
        if !request.total_capital.is_finite() {
            return Err(EngineError::invalid(
                "total_capital",
                "must be a finite number",
            ));
        }
        if request.total_capital <= 0.0 {
            return Err(EngineError::invalid(
                "total_capital",
                "must be greater than zero",
            ));
        }
        if request.sectors.is_empty() {
            return Err(EngineError::EmptyPortfolio(EmptyReason::NoSectors));
        }
        if !request.has_valid_company() {
            return Err(EngineError::EmptyPortfolio(EmptyReason::NoValidCompanies));
        }
        Ok(())
    }
}

impl Allocator for EqualWeightAllocator {
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationSummary, EngineError> {
        Self::validate(request)?;

        let sector_budget = request.sector_budget();
        let mut lines = Vec::new();
        let mut total_allocated = 0.0;

        for sector in &request.sectors {
            let slots = sector.budget_slots();
            if slots == 0 {
                debug!(sector = %sector.name, "sector has no company slots, budget left as cash");
                continue;
            }
            let per_company_budget = sector_budget / slots as f64;

            for company in &sector.companies {
                if !company.is_valid() {
                    debug!(
                        sector = %sector.name,
                        company = %company.name,
                        share_price = company.share_price,
                        "skipping company row without a name or positive price"
                    );
                    continue;
                }

                let shares_to_buy = whole_units(per_company_budget, company.share_price);
                let investment_value = shares_to_buy as f64 * company.share_price;
                total_allocated += investment_value;
                trace!(
                    company = %company.name,
                    shares_to_buy,
                    investment_value,
                    "allocated"
                );

                lines.push(AllocationLine {
                    sector: sector.name.clone(),
                    company_name: company.name.clone(),
                    share_price: company.share_price,
                    shares_to_buy,
                    investment_value,
                });
            }
        }

        let cash_in_hand = (request.total_capital - total_allocated).max(0.0);

        Ok(AllocationSummary {
            lines,
            total_capital: request.total_capital,
            total_allocated,
            cash_in_hand,
        })
    }

    fn name(&self) -> &str {
        "EqualWeight"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Company, Sector};

    #[test]
    fn test_three_sectors_fully_invested() {
        let request = AllocationRequest::new(
            90_000.0,
            vec![
                Sector::from_companies("Banking", vec![Company::new("HDFC", 100.0)]),
                Sector::from_companies("IT", vec![Company::new("TCS", 200.0)]),
                Sector::from_companies("Energy", vec![Company::new("ONGC", 300.0)]),
            ],
        );

        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        let shares: Vec<u64> = summary.lines.iter().map(|l| l.shares_to_buy).collect();
        assert_eq!(shares, vec![300, 150, 100]);
        assert_eq!(summary.total_allocated, 90_000.0);
        assert_eq!(summary.cash_in_hand, 0.0);
        assert!(!summary.has_cash_in_hand());
    }

    #[test]
    fn test_unfilled_row_becomes_cash() {
        let request = AllocationRequest::new(
            10_000.0,
            vec![Sector::new("Pharma", 2, vec![Company::new("Cipla", 50.0)])],
        );

        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].shares_to_buy, 100);
        assert_eq!(summary.lines[0].investment_value, 5000.0);
        assert_eq!(summary.cash_in_hand, 5000.0);
    }

    #[test]
    fn test_invalid_rows_are_skipped_not_fatal() {
        let request = AllocationRequest::new(
            12_000.0,
            vec![Sector::from_companies(
                "Auto",
                vec![
                    Company::new("Tata Motors", 100.0),
                    Company::new("", 50.0),
                    Company::new("Maruti", 0.0),
                    Company::new("Bajaj", -10.0),
                ],
            )],
        );

        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].company_name, "Tata Motors");
        // 12,000 / 4 slots = 3,000 → 30 shares
        assert_eq!(summary.lines[0].shares_to_buy, 30);
        assert_eq!(summary.cash_in_hand, 9000.0);
    }

    #[test]
    fn test_expensive_share_gets_zero_line() {
        let request = AllocationRequest::new(
            1000.0,
            vec![Sector::from_companies("Index", vec![Company::new("MRF", 100_000.0)])],
        );

        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        assert_eq!(summary.lines[0].shares_to_buy, 0);
        assert_eq!(summary.lines[0].investment_value, 0.0);
        assert_eq!(summary.cash_in_hand, 1000.0);
    }

    #[test]
    fn test_order_is_sector_then_company() {
        let request = AllocationRequest::new(
            40_000.0,
            vec![
                Sector::from_companies(
                    "B",
                    vec![Company::new("b1", 10.0), Company::new("b2", 10.0)],
                ),
                Sector::from_companies(
                    "A",
                    vec![Company::new("a1", 10.0), Company::new("a2", 10.0)],
                ),
            ],
        );

        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        let names: Vec<&str> = summary.lines.iter().map(|l| l.company_name.as_str()).collect();
        assert_eq!(names, vec!["b1", "b2", "a1", "a2"]);
    }

    #[test]
    fn test_no_sectors_is_empty_portfolio() {
        let err = EqualWeightAllocator
            .allocate(&AllocationRequest::new(1000.0, vec![]))
            .unwrap_err();
        assert_eq!(err, EngineError::EmptyPortfolio(EmptyReason::NoSectors));
    }

    #[test]
    fn test_no_valid_company_is_empty_portfolio() {
        let request = AllocationRequest::new(
            1000.0,
            vec![Sector::new("Empty", 3, vec![Company::new("", 0.0)])],
        );
        let err = EqualWeightAllocator.allocate(&request).unwrap_err();
        assert_eq!(err, EngineError::EmptyPortfolio(EmptyReason::NoValidCompanies));
    }

    #[test]
    fn test_non_positive_capital_is_invalid() {
        let request = AllocationRequest::new(
            0.0,
            vec![Sector::from_companies("IT", vec![Company::new("TCS", 10.0)])],
        );
        let err = EqualWeightAllocator.allocate(&request).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_zero_slot_sector_keeps_budget_as_cash() {
        let request = AllocationRequest::new(
            2000.0,
            vec![
                Sector::new("Declared none", 0, vec![]),
                Sector::from_companies("IT", vec![Company::new("TCS", 100.0)]),
            ],
        );
        let summary = EqualWeightAllocator.allocate(&request).unwrap();
        assert_eq!(summary.total_allocated, 1000.0);
        assert_eq!(summary.cash_in_hand, 1000.0);
    }
}
