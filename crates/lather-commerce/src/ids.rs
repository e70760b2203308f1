//! Newtype ID for catalog products.
//!
//! The catalog keys products by a small integer; wrapping it keeps a
//! product id from being confused with a quantity or a step number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product's numeric identifier, unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Get the raw numeric id.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId(7)), "7");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId(1), ProductId::from(1));
        assert_ne!(ProductId(1), ProductId(2));
    }
}
