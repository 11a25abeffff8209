//! Untrusted form input.
//!
//! Form controls hand over text. These string-typed mirrors are parsed into
//! domain values here, so the calculators only ever see numbers. Sizing forms
//! fail on the first bad field; allocation forms drop bad company rows.

use serde::{Deserialize, Deserializer};

use crate::domain::{AllocationRequest, Company, Sector, SizingInput};
use crate::error::EngineError;

/// Accept a form value written as text or as a bare number.
fn raw_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

/// Parse a numeric field. Blank, non-numeric, NaN and infinite are rejected.
pub fn parse_number(field: &str, raw: &str) -> Result<f64, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid(field, "is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| EngineError::invalid(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(EngineError::invalid(field, "must be a finite number"));
    }
    Ok(value)
}

fn parse_count(field: &str, raw: &str) -> Result<usize, EngineError> {
    raw.trim().parse().map_err(|_| {
        EngineError::invalid(field, format!("'{}' is not a whole number", raw.trim()))
    })
}

/// Raw position-sizer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SizingForm {
    #[serde(default, deserialize_with = "raw_text")]
    pub entry_price: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub stop_loss: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub target_price: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub risk_percentage: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub total_capital: String,
}

impl SizingForm {
    /// Parse every field, all or nothing.
    pub fn parse(&self) -> Result<SizingInput, EngineError> {
        SizingInput::new(
            parse_number("entry_price", &self.entry_price)?,
            parse_number("stop_loss", &self.stop_loss)?,
            parse_number("target_price", &self.target_price)?,
            parse_number("risk_percentage", &self.risk_percentage)?,
            parse_number("total_capital", &self.total_capital)?,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub share_price: String,
}

impl CompanyForm {
    /// `None` for a row without a name or a usable positive price.
    pub fn parse(&self) -> Option<Company> {
        let name = self.name.trim();
        let share_price = parse_number("share_price", &self.share_price).ok()?;
        let company = Company::new(name, share_price);
        company.is_valid().then_some(company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectorForm {
    #[serde(default)]
    pub name: String,
    /// Blank means one slot per company row.
    #[serde(default, deserialize_with = "raw_text")]
    pub declared_companies: String,
    #[serde(default)]
    pub companies: Vec<CompanyForm>,
}

/// Raw portfolio-allocator form: capital plus the sector/company tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AllocationForm {
    #[serde(default, deserialize_with = "raw_text")]
    pub total_capital: String,
    #[serde(default)]
    pub sectors: Vec<SectorForm>,
}

impl AllocationForm {
    /// Parse the tree into an [`AllocationRequest`].
    ///
    /// Capital and declared counts must parse. Invalid company rows are
    /// dropped but still count toward the sector's declared slots.
    pub fn parse(&self) -> Result<AllocationRequest, EngineError> {
        let total_capital = parse_number("total_capital", &self.total_capital)?;
        if total_capital <= 0.0 {
            return Err(EngineError::invalid(
                "total_capital",
                "must be greater than zero",
            ));
        }

        let mut sectors = Vec::with_capacity(self.sectors.len());
        for (i, form) in self.sectors.iter().enumerate() {
            let declared_companies = if form.declared_companies.trim().is_empty() {
                form.companies.len()
            } else {
                parse_count(
                    &format!("sectors[{i}].declared_companies"),
                    &form.declared_companies,
                )?
            };
            let name = match form.name.trim() {
                "" => format!("Sector {}", i + 1),
                n => n.to_string(),
            };
            let companies = form.companies.iter().filter_map(CompanyForm::parse).collect();
            sectors.push(Sector::new(name, declared_companies, companies));
        }

        Ok(AllocationRequest::new(total_capital, sectors))
    }
}
