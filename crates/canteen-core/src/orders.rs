//! Order list filtering for the history and order screens.

use crate::catalog::contains_ignore_case;
use crate::fixtures::{Order, OrderStatus};
use crate::session::Role;
use chrono::NaiveDate;

/// Orders whose status is exactly `status`.
pub fn with_status(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders.iter().filter(|o| o.status == status).collect()
}

/// Orders listed under a status tab for `role`.
pub fn in_tab(orders: &[Order], tab: OrderStatus, role: Role) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.status.in_tab(tab, role))
        .collect()
}

/// Orders placed on `date`.
pub fn on_date(orders: &[Order], date: NaiveDate) -> Vec<&Order> {
    orders.iter().filter(|o| o.date == date).collect()
}

/// Orders whose requester name contains `query`, ignoring case.
pub fn search_requester<'o>(orders: &[&'o Order], query: &str) -> Vec<&'o Order> {
    orders
        .iter()
        .copied()
        .filter(|o| contains_ignore_case(o.requester, query))
        .collect()
}

/// Number of orders per tab, in tab order.
pub fn tab_counts(orders: &[Order], role: Role) -> Vec<(OrderStatus, usize)> {
    OrderStatus::tabs(role)
        .iter()
        .map(|&tab| (tab, in_tab(orders, tab, role).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;

    fn ids(orders: &[&Order]) -> Vec<&'static str> {
        orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_with_status() {
        let store = FixtureStore::load();
        assert_eq!(ids(&with_status(store.orders(), OrderStatus::Pending)), ["1", "4"]);
        assert_eq!(ids(&with_status(store.orders(), OrderStatus::Accepted)), ["2", "5"]);
        assert!(with_status(store.orders(), OrderStatus::Refused).is_empty());
    }

    #[test]
    fn test_today_orders() {
        let store = FixtureStore::load();
        let today = on_date(store.orders(), store.reference_date());
        assert_eq!(ids(&today), ["1", "2", "4", "5"]);
    }

    #[test]
    fn test_search_requester() {
        let store = FixtureStore::load();
        let all: Vec<&Order> = store.orders().iter().collect();
        assert_eq!(ids(&search_requester(&all, "sara")), ["2"]);
        assert_eq!(ids(&search_requester(&all, "")).len(), 5);
        assert!(search_requester(&all, "nobody").is_empty());
    }

    #[test]
    fn test_tab_counts_per_role() {
        let store = FixtureStore::load();
        let student = tab_counts(store.orders(), Role::Student);
        assert_eq!(
            student,
            vec![
                (OrderStatus::Pending, 2),
                (OrderStatus::Accepted, 2),
                (OrderStatus::Paid, 1),
                (OrderStatus::Cancelled, 0),
            ]
        );
        let staff = tab_counts(store.orders(), Role::Staff);
        assert_eq!(staff[2], (OrderStatus::Refused, 0));
    }

    #[test]
    fn test_only_pending_orders_are_actionable() {
        let store = FixtureStore::load();
        for order in store.orders() {
            assert_eq!(order.is_actionable(), order.status == OrderStatus::Pending);
        }
    }
}
