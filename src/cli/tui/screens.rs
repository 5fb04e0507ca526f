//! One renderer per screen of the bottom navigation

use canteen_core::catalog::home_suggestions;
use canteen_core::orders::tab_counts;
use canteen_core::upcoming::{summarize, PeriodFilter};
use canteen_core::{
    DailyStats, MealPeriod, Order, OrderStatus, Product, RevenuePeriod, Role, Screen, StaffScreen,
    StudentScreen,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::app::App;
use super::theme::Palette;
use super::ui::alignment;

/// Widest bar of the stats charts, in cells.
const BAR_WIDTH: usize = 24;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match app.screen {
        Screen::Student(StudentScreen::Home) => draw_student_home(frame, app, palette, area),
        Screen::Student(StudentScreen::History) | Screen::Staff(StaffScreen::Orders) => {
            draw_order_tabs(frame, app, palette, area)
        }
        Screen::Student(StudentScreen::Upcoming) => draw_student_upcoming(frame, app, palette, area),
        Screen::Staff(StaffScreen::Home) => draw_staff_home(frame, app, palette, area),
        Screen::Staff(StaffScreen::Products) => draw_staff_products(frame, app, palette, area),
        Screen::Staff(StaffScreen::Upcoming) => draw_staff_upcoming(frame, app, palette, area),
        Screen::Staff(StaffScreen::Stats) => draw_stats(frame, app, palette, area),
    }
}

/// Split `area` into a fixed header of `header` lines and the list below.
fn split(area: Rect, header: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header), Constraint::Min(3)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_header(frame: &mut Frame, app: &App, lines: Vec<Line<'_>>, area: Rect) {
    frame.render_widget(Paragraph::new(lines).alignment(alignment(app)), area);
}

/// Pad with trailing spaces, or truncate, to `width` display cells.
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Filter chips; `active` is highlighted.
fn chips<'a>(labels: Vec<String>, active: usize, palette: &Palette) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.into_iter().enumerate() {
        let style = if i == active {
            palette.selected()
        } else {
            palette.muted()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn hints<'a>(app: &App, keys: &[(&str, &'static str)], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(format!("[{key}] "), palette.title()));
        spans.push(Span::styled(format!("{}  ", app.session.t(label)), palette.muted()));
    }
    Line::from(spans)
}

/// Render rows as a selectable list, or `empty_key` when there are none.
fn draw_list(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    title: &str,
    rows: Vec<ListItem<'_>>,
    empty_key: &'static str,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(format!(" {title} "));

    if rows.is_empty() {
        let empty = Paragraph::new(app.session.t(empty_key))
            .style(palette.muted())
            .alignment(alignment(app))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = app.view.selected.min(rows.len() - 1);
    let list = List::new(rows)
        .block(block)
        .highlight_style(palette.selected())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn product_row<'a>(app: &App, product: &Product, show_category: bool) -> ListItem<'a> {
    let mut text = format!(
        "{} {:>7}",
        pad(app.session.product_name(product), 28),
        product.price
    );
    if show_category {
        if let Ok(category) = app.store.category(product.category) {
            text.push_str("  ");
            text.push_str(app.session.category_name(category));
        }
    }
    ListItem::new(text)
}

fn order_row<'a>(app: &App, order: &Order, palette: &Palette) -> ListItem<'a> {
    let role = app.session.role();
    let products = order
        .lines
        .iter()
        .map(|line| format!("{}x {}", line.quantity, app.session.product_name(&line.product)))
        .collect::<Vec<_>>()
        .join(", ");
    let head = match role {
        Role::Student => format!("#{:<3} {} ", order.id, order.date),
        Role::Staff => format!("#{:<3} {} ", order.id, pad(order.requester, 14)),
    };
    let line = Line::from(vec![
        Span::raw(head),
        Span::raw(format!("{} ", pad(&products, 30))),
        Span::raw(format!("{:>7} ", order.total_price())),
        Span::raw(format!("{} ", order.pickup_time)),
        Span::styled(
            pad(app.session.t(order.status.label_key(role)), 12),
            palette.status(order.status),
        ),
        Span::styled(app.session.t(order.fulfillment.label_key()), palette.muted()),
    ]);
    ListItem::new(line)
}

fn category_chips<'a>(app: &App, palette: &Palette) -> Line<'a> {
    let categories = app.store.categories();
    let mut labels = vec![app.session.t("all").to_string()];
    labels.extend(categories.iter().map(|c| app.session.category_name(c).to_string()));
    let active = app
        .view
        .category
        .and_then(|id| categories.iter().position(|c| c.id == id))
        .map_or(0, |i| i + 1);
    chips(labels, active, palette)
}

// ── student ─────────────────────────────────────────────────────────────

fn draw_student_home(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let t = |key: &'static str| app.session.t(key);
    let profile = app.store.profile();
    let suggestions = home_suggestions(&app.store)
        .iter()
        .map(|p| app.session.product_name(p))
        .collect::<Vec<_>>()
        .join(" \u{00b7} ");

    let (header, body) = split(area, 5);
    draw_header(
        frame,
        app,
        vec![
            Line::from(vec![
                Span::styled(profile.name, palette.title()),
                Span::raw(format!("  {}: {}", t("creditBalance"), profile.credit_balance)),
            ]),
            Line::from(Span::styled(t("suggestions"), palette.muted())),
            Line::from(suggestions),
            Line::from(Span::styled(t("categories"), palette.muted())),
            category_chips(app, palette),
        ],
        header,
    );

    let rows = app
        .products_view()
        .into_iter()
        .map(|p| product_row(app, p, false))
        .collect();
    draw_list(frame, app, palette, t("products"), rows, "noProducts", body);
}

fn draw_student_upcoming(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let t = |key: &'static str| app.session.t(key);
    let windows: Vec<Span> = MealPeriod::ALL
        .iter()
        .map(|period| Span::raw(format!("{} {}   ", t(period.label_key()), period.window())))
        .collect();

    let (header, body) = split(area, 3);
    draw_header(
        frame,
        app,
        vec![
            Line::from(Span::styled(t("tomorrowMenu"), palette.title())),
            Line::from(Span::styled(t("changeUntilMidnight"), palette.muted())),
            Line::from(windows),
        ],
        header,
    );

    let rows = app
        .products_view()
        .into_iter()
        .map(|p| product_row(app, p, false))
        .collect();
    draw_list(frame, app, palette, t("preSelect"), rows, "noProducts", body);
}

/// Status tabs with counts over the order list; shared by student history
/// and staff orders.
fn draw_order_tabs(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let role = app.session.role();
    let labels = tab_counts(app.store.orders(), role)
        .into_iter()
        .map(|(status, count)| format!("{} ({count})", app.session.t(status.label_key(role))))
        .collect();
    let tabs = OrderStatus::tabs(role);
    let active = app.view.tab % tabs.len();

    let hint = match role {
        Role::Student => hints(app, &[("c", "cancel")], palette),
        Role::Staff => hints(app, &[("Enter", "accept")], palette),
    };

    let (header, body) = split(area, 2);
    draw_header(frame, app, vec![chips(labels, active, palette), hint], header);

    let rows = app
        .orders_view()
        .into_iter()
        .map(|o| order_row(app, o, palette))
        .collect();
    let title = match role {
        Role::Student => app.session.t("history"),
        Role::Staff => app.session.t("allOrders"),
    };
    draw_list(frame, app, palette, title, rows, "noOrders", body);
}

// ── staff ───────────────────────────────────────────────────────────────

fn draw_staff_home(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (header, body) = split(area, 1);
    let hint = hints(
        app,
        &[("Enter", "accept"), ("/", "search")],
        palette,
    );
    draw_header(frame, app, vec![hint], header);

    let rows = app
        .orders_view()
        .into_iter()
        .map(|o| order_row(app, o, palette))
        .collect();
    draw_list(
        frame,
        app,
        palette,
        app.session.t("ordersOfTheDay"),
        rows,
        "noOrders",
        body,
    );
}

fn draw_staff_products(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (header, body) = split(area, 2);
    let hint = hints(
        app,
        &[("n", "addNew"), ("Enter", "edit"), ("d", "delete")],
        palette,
    );
    draw_header(frame, app, vec![category_chips(app, palette), hint], header);

    let rows = app
        .products_view()
        .into_iter()
        .map(|p| product_row(app, p, true))
        .collect();
    draw_list(
        frame,
        app,
        palette,
        app.session.t("products"),
        rows,
        "noProducts",
        body,
    );
}

fn draw_staff_upcoming(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let t = |key: &'static str| app.session.t(key);
    let summary = summarize(app.store.preselections());
    let per_period: Vec<Span> = MealPeriod::ALL
        .iter()
        .map(|period| {
            let meals = summary.meals_by_period.get(period).copied().unwrap_or(0);
            Span::raw(format!("{}: {meals}   ", t(period.label_key())))
        })
        .collect();
    let labels = PeriodFilter::CHIPS
        .iter()
        .map(|chip| t(chip.label_key()).to_string())
        .collect();
    let active = PeriodFilter::CHIPS
        .iter()
        .position(|c| *c == app.view.period)
        .unwrap_or(0);

    let (header, body) = split(area, 5);
    draw_header(
        frame,
        app,
        vec![
            Line::from(Span::styled(t("tomorrowPlanned"), palette.title())),
            Line::from(format!(
                "{}: {}   {}: {}",
                t("allOrders"),
                summary.total_orders,
                t("totalMeals"),
                summary.total_meals
            )),
            Line::from(per_period),
            chips(labels, active, palette),
            hints(app, &[("n", "addNew"), ("e", "edit"), ("d", "delete")], palette),
        ],
        header,
    );

    let rows = app
        .preselections_view()
        .into_iter()
        .map(|p| {
            let mark = if app.is_editing(p) { '\u{270e}' } else { ' ' };
            ListItem::new(format!(
                "{mark} {} {}x {} {} {}",
                pad(p.requester, 16),
                p.quantity,
                pad(app.session.product_name(&p.meal), 24),
                pad(t(p.period.label_key()), 14),
                p.time_slot,
            ))
        })
        .collect();
    draw_list(frame, app, palette, t("upcoming"), rows, "noOrders", body);
}

fn draw_stats(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let t = |key: &'static str| app.session.t(key);
    let stats = DailyStats::compute(&app.store);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut left = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", t("totalOrders")), palette.muted()),
            Span::styled(stats.total_orders.to_string(), bold),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t("totalRevenue")), palette.muted()),
            Span::styled(stats.total_revenue.to_string(), bold),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t("avgWaitTime")), palette.muted()),
            Span::styled(format!("{} {}", stats.avg_wait_minutes, t("minutes")), bold),
        ]),
        Line::from(""),
        Line::from(Span::styled(t("mostOrdered"), palette.title())),
    ];
    left.extend(stats.most_ordered.iter().take(5).map(|item| {
        Line::from(format!(
            "{} {}x",
            pad(app.session.product_name(&item.product), 24),
            item.quantity
        ))
    }));
    left.push(Line::from(""));
    left.push(Line::from(Span::styled(t("ordersByHour"), palette.title())));
    let busiest = stats.orders_by_hour.iter().map(|(_, n)| *n).max().unwrap_or(0);
    left.extend(stats.orders_by_hour.iter().map(|(hour, count)| {
        Line::from(vec![
            Span::raw(format!("{hour:02}h ")),
            Span::styled(bar(*count, busiest), Style::default().fg(palette.accent)),
            Span::raw(format!(" {count}")),
        ])
    }));
    frame.render_widget(
        Paragraph::new(left)
            .alignment(alignment(app))
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", t("stats")))),
        columns[0],
    );

    let mut right = vec![Line::from(Span::styled(t("orderStatus"), palette.title()))];
    right.extend(stats.status_breakdown.iter().map(|(status, count)| {
        Line::from(vec![
            Span::styled(pad(t(status.label_key(Role::Staff)), 14), palette.status(*status)),
            Span::raw(count.to_string()),
        ])
    }));
    right.push(Line::from(""));

    let periods = [RevenuePeriod::Month, RevenuePeriod::Year];
    let active = periods.iter().position(|p| *p == app.view.revenue).unwrap_or(0);
    right.push(Line::from(vec![Span::styled(
        format!("{}  ", t("revenue")),
        palette.title(),
    )]));
    right.push(chips(
        periods.iter().map(|p| t(p.label_key()).to_string()).collect(),
        active,
        palette,
    ));
    let series = app.view.revenue.series(&app.store);
    let top = series.iter().map(|p| p.revenue as usize).max().unwrap_or(0);
    right.extend(series.iter().map(|point| {
        Line::from(vec![
            Span::raw(format!("{} ", pad(point.label, 5))),
            Span::styled(bar(point.revenue as usize, top), Style::default().fg(palette.accent)),
            Span::raw(format!(" {}  {} {}", point.revenue, point.customers, t("customers"))),
        ])
    }));
    frame.render_widget(
        Paragraph::new(right)
            .alignment(alignment(app))
            .block(Block::default().borders(Borders::ALL)),
        columns[1],
    );
}

/// Horizontal bar scaled so `max` fills [`BAR_WIDTH`].
fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value * BAR_WIDTH).div_ceil(max);
    let mut out = "\u{2588}".repeat(filled);
    out.push_str(&" ".repeat(BAR_WIDTH - filled));
    out
}
