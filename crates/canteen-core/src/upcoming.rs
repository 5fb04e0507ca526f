//! Tomorrow's planning: pre-selections seen by staff.

use crate::catalog::contains_ignore_case;
use crate::fixtures::{MealPeriod, PreSelection};
use std::collections::BTreeMap;

/// Meal-period filter of the staff upcoming screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    Only(MealPeriod),
}

impl PeriodFilter {
    /// Filters in chip order: all, breakfast, lunch, dinner.
    pub const CHIPS: [PeriodFilter; 4] = [
        Self::All,
        Self::Only(MealPeriod::Breakfast),
        Self::Only(MealPeriod::Lunch),
        Self::Only(MealPeriod::Dinner),
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "allMeals",
            Self::Only(period) => period.label_key(),
        }
    }

    pub fn matches(self, period: MealPeriod) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => p == period,
        }
    }

    /// Next chip, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0);
        Self::CHIPS[(index + 1) % Self::CHIPS.len()]
    }
}

/// Pre-selections matching the period filter and requester-name query.
pub fn filter_preselections<'p>(
    preselections: &'p [PreSelection],
    period: PeriodFilter,
    query: &str,
) -> Vec<&'p PreSelection> {
    preselections
        .iter()
        .filter(|p| period.matches(p.period) && contains_ignore_case(p.requester, query))
        .collect()
}

/// Header figures of the staff upcoming screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanningSummary {
    pub total_orders: usize,
    pub total_meals: u32,
    pub meals_by_period: BTreeMap<MealPeriod, u32>,
}

pub fn summarize(preselections: &[PreSelection]) -> PlanningSummary {
    let mut summary = PlanningSummary {
        total_orders: preselections.len(),
        ..Default::default()
    };
    for p in preselections {
        summary.total_meals += p.quantity;
        *summary.meals_by_period.entry(p.period).or_insert(0) += p.quantity;
    }
    summary
}
