//! Income tax calculation functionality.

use rust_decimal::Decimal;

use super::rates::INCOME_TAX_RATE;
use crate::models::AuditStep;

/// The result of calculating income tax.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The tax withheld.
    pub tax_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates income tax on the taxable amount (pre-tax pay less penalty).
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(Decimal::from(10000), 6);
/// assert_eq!(result.tax_amount, Decimal::from(1300));
/// ```
pub fn calculate_income_tax(taxable_amount: Decimal, step_number: u32) -> IncomeTaxResult {
    let tax_amount = taxable_amount * INCOME_TAX_RATE;

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "taxable_amount": taxable_amount.normalize().to_string(),
            "rate": INCOME_TAX_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_amount": tax_amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            taxable_amount.round_dp(2).normalize(),
            INCOME_TAX_RATE.normalize(),
            tax_amount.round_dp(2).normalize()
        ),
    };

    IncomeTaxResult {
        tax_amount,
        audit_step,
    }
}
