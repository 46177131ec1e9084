//! Monthly financial snapshot of one household
//!
//! All amounts are plain currency units stored as `f64`. Goal requirements are
//! `target / months` and rarely land on whole cents, and the stress score must
//! agree exactly with the analysis service that computes it in floating point.

use serde::{Deserialize, Serialize};

/// The monthly financial state of one household
///
/// Missing fields deserialize to zero. Negative values are tolerated on input
/// but every computation goes through [`FinancialSnapshot::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub income: f64,
    pub rent: f64,
    pub utilities: f64,
    pub transport_cost: f64,
    pub food: f64,
    pub debt: f64,
    pub subscriptions: f64,
    pub emergency_savings: f64,
    pub savings: f64,
}

/// Clamp a single amount to the non-negative range, mapping NaN to zero
pub fn non_negative(amount: f64) -> f64 {
    // f64::max returns the non-NaN operand
    amount.max(0.0)
}

impl FinancialSnapshot {
    /// Copy of this snapshot with every field clamped to `>= 0`
    pub fn clamped(&self) -> Self {
        Self {
            income: non_negative(self.income),
            rent: non_negative(self.rent),
            utilities: non_negative(self.utilities),
            transport_cost: non_negative(self.transport_cost),
            food: non_negative(self.food),
            debt: non_negative(self.debt),
            subscriptions: non_negative(self.subscriptions),
            emergency_savings: non_negative(self.emergency_savings),
            savings: non_negative(self.savings),
        }
    }

    /// rent + utilities + transport + food + debt + subscriptions
    pub fn total_expenses(&self) -> f64 {
        self.rent + self.utilities + self.transport_cost + self.food + self.debt + self.subscriptions
    }

    /// Liquidity pool: emergency savings plus general savings
    pub fn total_buffer(&self) -> f64 {
        self.emergency_savings + self.savings
    }

    /// Non-discretionary commitments (rent + subscriptions)
    pub fn fixed_commitments(&self) -> f64 {
        self.rent + self.subscriptions
    }

    /// Income left after fixed commitments. May be negative.
    pub fn safe_available(&self) -> f64 {
        self.income - self.fixed_commitments()
    }

    /// Set a field by its CLI/display name
    ///
    /// Accepts both snake_case and camelCase names plus a few short aliases.
    pub fn set_field(&mut self, field: &str, value: f64) -> Result<(), String> {
        let slot = match field.trim().to_lowercase().replace('-', "_").as_str() {
            "income" => &mut self.income,
            "rent" | "housing" => &mut self.rent,
            "utilities" => &mut self.utilities,
            "transport" | "transport_cost" | "transportcost" => &mut self.transport_cost,
            "food" => &mut self.food,
            "debt" => &mut self.debt,
            "subscriptions" | "subs" => &mut self.subscriptions,
            "emergency" | "emergency_savings" | "emergencysavings" => &mut self.emergency_savings,
            "savings" => &mut self.savings,
            other => return Err(format!("Unknown snapshot field: {}", other)),
        };
        *slot = value;
        Ok(())
    }

    /// Field names paired with their values, in display order
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("income", self.income),
            ("rent", self.rent),
            ("utilities", self.utilities),
            ("transport", self.transport_cost),
            ("food", self.food),
            ("debt", self.debt),
            ("subscriptions", self.subscriptions),
            ("emergency_savings", self.emergency_savings),
            ("savings", self.savings),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinancialSnapshot {
        FinancialSnapshot {
            income: 4000.0,
            rent: 1200.0,
            utilities: 200.0,
            transport_cost: 300.0,
            food: 500.0,
            debt: 100.0,
            subscriptions: 50.0,
            emergency_savings: 0.0,
            savings: 600.0,
        }
    }

    #[test]
    fn test_totals() {
        let s = sample();
        assert_eq!(s.total_expenses(), 2350.0);
        assert_eq!(s.total_buffer(), 600.0);
        assert_eq!(s.fixed_commitments(), 1250.0);
        assert_eq!(s.safe_available(), 2750.0);
    }

    #[test]
    fn test_clamped_zeroes_negatives_and_nan() {
        let mut s = sample();
        s.rent = -500.0;
        s.debt = f64::NAN;
        let c = s.clamped();
        assert_eq!(c.rent, 0.0);
        assert_eq!(c.debt, 0.0);
        assert_eq!(c.income, 4000.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let s: FinancialSnapshot = serde_json::from_str(r#"{"income": 3000, "transportCost": 120}"#).unwrap();
        assert_eq!(s.income, 3000.0);
        assert_eq!(s.transport_cost, 120.0);
        assert_eq!(s.food, 0.0);
        assert_eq!(s.savings, 0.0);
    }

    #[test]
    fn test_set_field_aliases() {
        let mut s = FinancialSnapshot::default();
        s.set_field("transport-cost", 90.0).unwrap();
        s.set_field("emergencySavings", 1000.0).unwrap();
        s.set_field("Housing", 800.0).unwrap();
        assert_eq!(s.transport_cost, 90.0);
        assert_eq!(s.emergency_savings, 1000.0);
        assert_eq!(s.rent, 800.0);
        assert!(s.set_field("pets", 10.0).is_err());
    }
}
