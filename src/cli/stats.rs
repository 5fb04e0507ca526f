//! `canteen stats`: print the staff statistics.

use anyhow::{Context, Result};
use canteen_core::{DailyStats, FixtureStore, Locale, RevenuePeriod, RevenuePoint, Role, SessionContext};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    today: DailyStats,
    period: RevenuePeriod,
    revenue: &'a [RevenuePoint],
}

pub fn run(store: &FixtureStore, locale: Locale, period: RevenuePeriod, json: bool) -> Result<()> {
    let session = SessionContext::new().with_locale(locale);
    let report = StatsReport {
        today: DailyStats::compute(store),
        period,
        revenue: period.series(store),
    };

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode stats")?;
        println!("{text}");
        return Ok(());
    }

    let today = &report.today;
    println!("{}: {}", session.t("totalOrders"), today.total_orders);
    println!("{}: {}", session.t("totalRevenue"), today.total_revenue);
    println!(
        "{}: {} {}",
        session.t("avgWaitTime"),
        today.avg_wait_minutes,
        session.t("minutes")
    );

    println!("\n{}", session.t("mostOrdered"));
    for item in &today.most_ordered {
        println!("  {:>2}x {}", item.quantity, session.product_name(&item.product));
    }

    println!("\n{}", session.t("ordersByHour"));
    for (hour, count) in &today.orders_by_hour {
        println!("  {hour:02}:00  {}", "#".repeat(*count));
    }

    println!("\n{}", session.t("orderStatus"));
    for (status, count) in &today.status_breakdown {
        println!("  {:<10} {count}", session.t(status.label_key(Role::Staff)));
    }

    println!(
        "\n{} ({})",
        session.t("revenue"),
        session.t(period.label_key())
    );
    for point in report.revenue {
        println!(
            "  {:<5} {:>6}  {} {}",
            point.label,
            point.revenue,
            point.customers,
            session.t("customers")
        );
    }
    Ok(())
}
