//! Static plan catalog.
//!
//! Maps the plan names shown on the pricing cards to their monthly price.
//! Unknown names are priced at zero instead of failing, so a mislabelled
//! pricing card still produces a usable cart line.

use billease_core::{PlanName, Price};

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: PlanName,
    pub price: Price,
}

/// Read-only lookup from plan name to unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Build a catalog from `(name, price)` pairs, kept in display order.
    ///
    /// A name listed twice keeps its first price.
    #[must_use]
    pub fn new(plans: impl IntoIterator<Item = (PlanName, Price)>) -> Self {
        let mut rows: Vec<Plan> = Vec::new();
        for (name, price) in plans {
            if rows.iter().all(|row| row.name != name) {
                rows.push(Plan { name, price });
            }
        }
        Self { plans: rows }
    }

    /// Unit price for `name`, or zero if the catalog does not list it.
    #[must_use]
    pub fn price_of(&self, name: &PlanName) -> Price {
        self.get(name).map_or(Price::ZERO, |plan| plan.price)
    }

    /// Look up a plan by name.
    #[must_use]
    pub fn get(&self, name: &PlanName) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.name == name)
    }

    /// Returns `true` if the catalog lists `name`.
    #[must_use]
    pub fn contains(&self, name: &PlanName) -> bool {
        self.get(name).is_some()
    }

    /// All plans in display order.
    pub fn plans(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }
}

impl Default for PlanCatalog {
    /// The BillEase pricing table: Free, Pro ($9.99) and Business ($29.99).
    fn default() -> Self {
        Self::new([
            (PlanName::new(PlanName::FREE), Price::ZERO),
            (PlanName::new(PlanName::PRO), Price::from_cents(999)),
            (PlanName::new(PlanName::BUSINESS), Price::from_cents(2999)),
        ])
    }
}
