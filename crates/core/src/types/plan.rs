//! Pricing plan names.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The name of a pricing plan, as shown on the pricing card (e.g. `"Pro"`).
///
/// Plan names are the grouping key for cart line items. Any string is
/// accepted: names the catalog does not know about are priced at zero rather
/// than rejected. Deserialized names are trimmed the same way as
/// [`PlanName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlanName(String);

impl PlanName {
    /// The free tier.
    pub const FREE: &'static str = "Free";
    /// The individual paid tier.
    pub const PRO: &'static str = "Pro";
    /// The team tier.
    pub const BUSINESS: &'static str = "Business";

    /// Create a plan name, trimming surrounding whitespace.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_owned())
    }

    /// Returns the plan name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlanName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<PlanName> for String {
    fn from(name: PlanName) -> Self {
        name.0
    }
}

impl AsRef<str> for PlanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PlanName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlanName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_card_heading_text() {
        assert_eq!(PlanName::new("  Pro\n"), PlanName::PRO);
    }

    #[test]
    fn test_is_case_sensitive() {
        assert_ne!(PlanName::new("pro"), PlanName::new(PlanName::PRO));
    }

    #[test]
    fn test_deserialize_trims() {
        let name: PlanName = serde_json::from_str("\" Pro\\n\"").unwrap();
        assert_eq!(name, PlanName::PRO);
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Pro\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(PlanName::from("Business").to_string(), "Business");
    }
}
