//! `canteen orders`: print orders as the staff order screen lists them.

use anyhow::{Context, Result};
use canteen_core::orders::{on_date, search_requester};
use canteen_core::{FixtureStore, Locale, Order, OrderStatus, Role, SessionContext};
use serde::Serialize;

/// Filters accepted by the command.
#[derive(Debug, Default)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub today: bool,
}

#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    #[serde(flatten)]
    order: &'a Order,
    total_items: u32,
    total_price: canteen_core::Money,
}

pub fn select<'s>(store: &'s FixtureStore, query: &OrderQuery) -> Vec<&'s Order> {
    let mut orders: Vec<&Order> = if query.today {
        on_date(store.orders(), store.reference_date())
    } else {
        store.orders().iter().collect()
    };
    if let Some(status) = query.status {
        orders.retain(|o| o.status == status);
    }
    search_requester(&orders, query.search.as_deref().unwrap_or_default())
}

pub fn run(store: &FixtureStore, locale: Locale, query: OrderQuery, json: bool) -> Result<()> {
    let session = SessionContext::new().with_locale(locale);
    let orders = select(store, &query);

    if json {
        let rows: Vec<OrderRow> = orders
            .iter()
            .map(|order| OrderRow {
                order,
                total_items: order.total_items(),
                total_price: order.total_price(),
            })
            .collect();
        let text = serde_json::to_string_pretty(&rows).context("Failed to encode orders")?;
        println!("{text}");
        return Ok(());
    }

    if orders.is_empty() {
        println!("{}", session.t("noOrders"));
        return Ok(());
    }
    for order in orders {
        println!(
            "#{:<3} {:<16} {} {:>2} {:>7}  {}  {:<10} {}",
            order.id,
            order.requester,
            order.date,
            order.total_items(),
            order.total_price(),
            order.pickup_time,
            session.t(order.status.label_key(Role::Staff)),
            session.t(order.fulfillment.label_key()),
        );
        for line in &order.lines {
            println!(
                "      {}x {}",
                line.quantity,
                session.product_name(&line.product)
            );
        }
    }
    Ok(())
}
