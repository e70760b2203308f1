//! Coupon code lookup.
//!
//! The storefront honors a fixed set of demo codes. A match is purely
//! informational: the reported percentage is shown to the user but never
//! feeds the order summary.

/// Known codes and their discount percentages.
const VALID_COUPONS: [(&str, u8); 4] = [
    ("SOAP10", 10),
    ("BUBBLE20", 20),
    ("LATHER15", 15),
    ("WELCOME", 5),
];

/// Result of checking a user-entered coupon code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponCheck {
    /// A known code, with its normalized form and discount percentage.
    Valid { code: String, percent: u8 },
    /// Not a known code.
    Invalid,
}

impl CouponCheck {
    /// Check if the code was recognized.
    pub fn is_valid(&self) -> bool {
        matches!(self, CouponCheck::Valid { .. })
    }
}

/// Look up a user-entered code, ignoring surrounding whitespace and case.
pub fn check(input: &str) -> CouponCheck {
    let code = input.trim().to_uppercase();
    match VALID_COUPONS.iter().find(|(known, _)| *known == code) {
        Some((known, percent)) => CouponCheck::Valid {
            code: (*known).to_string(),
            percent: *percent,
        },
        None => CouponCheck::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        assert_eq!(
            check("SOAP10"),
            CouponCheck::Valid {
                code: "SOAP10".to_string(),
                percent: 10
            }
        );
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let checked = check("  soap10  ");
        assert!(checked.is_valid());
        assert_eq!(
            checked,
            CouponCheck::Valid {
                code: "SOAP10".to_string(),
                percent: 10
            }
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(check("ZZZZ"), CouponCheck::Invalid);
        assert!(!check("").is_valid());
    }

    #[test]
    fn test_all_demo_codes() {
        for (code, percent) in [("BUBBLE20", 20), ("LATHER15", 15), ("WELCOME", 5)] {
            match check(code) {
                CouponCheck::Valid { percent: p, .. } => assert_eq!(p, percent),
                CouponCheck::Invalid => panic!("{code} should be valid"),
            }
        }
    }
}
