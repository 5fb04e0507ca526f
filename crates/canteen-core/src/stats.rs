//! Aggregates for the staff statistics screen.

use crate::error::Error;
use crate::fixtures::{FixtureStore, Money, Order, OrderStatus, Product, RevenuePoint};
use crate::orders;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// Granularity of the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenuePeriod {
    #[default]
    Month,
    Year,
}

impl RevenuePeriod {
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Month => Self::Year,
            Self::Year => Self::Month,
        }
    }

    pub fn series(self, store: &FixtureStore) -> &[RevenuePoint] {
        match self {
            Self::Month => store.monthly_revenue(),
            Self::Year => store.yearly_revenue(),
        }
    }
}

impl FromStr for RevenuePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(Error::UnknownPeriod(s.to_string())),
        }
    }
}

/// Quantity of one product across a set of orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    pub product: Product,
    pub quantity: u32,
}

/// Today's figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub total_orders: usize,
    pub total_revenue: Money,
    pub most_ordered: Vec<ItemCount>,
    /// Orders per pickup hour, ascending by hour.
    pub orders_by_hour: Vec<(u32, usize)>,
    /// Counts over every fixture order, not only today's.
    pub status_breakdown: Vec<(OrderStatus, usize)>,
    pub avg_wait_minutes: u32,
}

impl DailyStats {
    pub fn compute(store: &FixtureStore) -> Self {
        let today = orders::on_date(store.orders(), store.reference_date());
        Self {
            total_orders: today.len(),
            total_revenue: today.iter().map(|o| o.total_price()).sum(),
            most_ordered: most_ordered(&today),
            orders_by_hour: orders_by_hour(&today),
            status_breakdown: status_breakdown(store.orders()),
            avg_wait_minutes: store.avg_wait_minutes(),
        }
    }
}

/// Products by quantity ordered, highest first; ties by English name.
pub fn most_ordered(orders: &[&Order]) -> Vec<ItemCount> {
    let mut counts: HashMap<&str, ItemCount> = HashMap::new();
    for line in orders.iter().flat_map(|o| o.lines.iter()) {
        counts
            .entry(line.product.id)
            .or_insert(ItemCount {
                product: line.product,
                quantity: 0,
            })
            .quantity += line.quantity;
    }
    let mut items: Vec<ItemCount> = counts.into_values().collect();
    items.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.product.name.en.cmp(b.product.name.en))
    });
    items
}

pub fn orders_by_hour(orders: &[&Order]) -> Vec<(u32, usize)> {
    let mut by_hour: BTreeMap<u32, usize> = BTreeMap::new();
    for hour in orders.iter().filter_map(|o| o.pickup_hour()) {
        *by_hour.entry(hour).or_insert(0) += 1;
    }
    by_hour.into_iter().collect()
}

pub fn status_breakdown(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::ALL
        .iter()
        .map(|&status| (status, orders::with_status(orders, status).len()))
        .collect()
}
