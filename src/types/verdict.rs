//! Per-transaction outcome

use super::product::Price;
use std::fmt;

/// Outcome of evaluating one transaction
///
/// `Display` renders the line shown to the customer: the total, or
/// `staff call:` followed by `1` (invalid code) and/or `2` (invalid weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every scan validated; amount payable
    Total(Price),

    /// At least one anomaly; a staff member must assist
    StaffCall {
        invalid_code: bool,
        invalid_weight: bool,
    },
}

impl Verdict {
    /// Build the verdict from a transaction's accumulated state
    pub fn from_flags(total: Price, invalid_code: bool, invalid_weight: bool) -> Self {
        if invalid_code || invalid_weight {
            Verdict::StaffCall {
                invalid_code,
                invalid_weight,
            }
        } else {
            Verdict::Total(total)
        }
    }

    pub fn is_staff_call(&self) -> bool {
        matches!(self, Verdict::StaffCall { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Total(total) => write!(f, "{}", total),
            Verdict::StaffCall {
                invalid_code,
                invalid_weight,
            } => {
                f.write_str("staff call:")?;
                if *invalid_code {
                    f.write_str(" 1")?;
                }
                if *invalid_weight {
                    f.write_str(" 2")?;
                }
                Ok(())
            }
        }
    }
}
