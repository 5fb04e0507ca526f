//! Integration tests for Canteen
//!
//! These tests drive canteen-core the way the front end does:
//! - auth + view: sign-in and screen selection per role
//! - session + i18n: locale switches across catalog and notifications
//! - catalog/orders/upcoming/stats: per-screen data from the fixture store
//! - actions: simulated operations reported to a notifier

use canteen_core::catalog::{self, NameMatch, ProductFilter};
use canteen_core::orders;
use canteen_core::upcoming::{self, PeriodFilter};
use canteen_core::{
    nav_screens, select_screen, sign_in, Actions, DailyStats, FixtureStore, Locale, LoginForm,
    MealPeriod, Money, Notification, NotificationLevel, OrderDraft, OrderStatus, PlannedMealForm,
    ProductForm, RevenuePeriod, Role, Screen, SessionContext, StaffScreen, StudentScreen,
    ValidationError,
};

fn signed_in(username: &str) -> SessionContext {
    let mut session = SessionContext::new();
    sign_in(&mut session, &LoginForm::new(username, "secret")).unwrap();
    session
}

// ============================================================================
// Sign-in and Navigation
// ============================================================================

#[test]
fn test_student_flow_lands_on_student_screens() {
    let session = signed_in("sara");
    assert_eq!(session.role(), Role::Student);

    let screens: Vec<&str> = nav_screens(session.role())
        .iter()
        .map(|s| s.page_id())
        .collect();
    assert_eq!(screens, ["home", "history", "upcoming"]);

    // Staff pages are not reachable from the student navigation.
    assert_eq!(
        select_screen(session.role(), "stats"),
        Screen::Student(StudentScreen::Home)
    );
}

#[test]
fn test_staff_flow_lands_on_staff_screens() {
    let session = signed_in("ADMIN");
    assert_eq!(session.role(), Role::Staff);
    assert_eq!(nav_screens(Role::Staff).len(), 5);
    assert_eq!(
        select_screen(session.role(), "stats"),
        Screen::Staff(StaffScreen::Stats)
    );
}

#[test]
fn test_rejected_sign_in_keeps_session() {
    let mut session = SessionContext::new().with_locale(Locale::Ar);
    let err = sign_in(&mut session, &LoginForm::new("", "pw")).unwrap_err();
    assert_eq!(err, ValidationError::MissingCredentials);
    assert_eq!(session.role(), Role::Student);
    assert_eq!(session.locale(), Locale::Ar);
    assert_eq!(session.t(err.message_key()), "يرجى ملء جميع الحقول");
}

// ============================================================================
// Catalog and Orders
// ============================================================================

#[test]
fn test_menu_follows_locale() {
    let store = FixtureStore::load();
    let mut session = signed_in("sara");

    let pizzas = ProductFilter::new(session.locale())
        .with_category(Some("pizza-pasta"))
        .apply(store.products());
    assert_eq!(pizzas.len(), 3);

    session.set_locale(Locale::Fr);
    let names: Vec<&str> = pizzas.iter().map(|p| session.product_name(p)).collect();
    assert!(names.contains(&"Pizza Margherita"));

    // The French query only matches on the French names.
    let found = catalog::search(store.products(), "poulet", session.locale());
    assert_eq!(found.len(), 1);
    session.set_locale(Locale::En);
    assert!(catalog::search(store.products(), "poulet", session.locale()).is_empty());

    let any = ProductFilter::new(Locale::En)
        .with_query("poulet")
        .with_names(NameMatch::AnyLocale)
        .apply(store.products());
    assert_eq!(any.len(), 1);
}

#[test]
fn test_order_tabs_per_role() {
    let store = FixtureStore::load();
    let student: Vec<(OrderStatus, usize)> = orders::tab_counts(store.orders(), Role::Student);
    assert_eq!(
        student,
        vec![
            (OrderStatus::Pending, 2),
            (OrderStatus::Accepted, 2),
            (OrderStatus::Paid, 1),
            (OrderStatus::Cancelled, 0),
        ]
    );

    let staff = orders::tab_counts(store.orders(), Role::Staff);
    assert_eq!(staff[2], (OrderStatus::Refused, 0));

    let today = orders::on_date(store.orders(), store.reference_date());
    let found = orders::search_requester(&today, "ALI");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].requester, "Ahmed Ali");
}

#[test]
fn test_daily_stats_and_revenue() {
    let store = FixtureStore::load();
    let stats = DailyStats::compute(&store);
    assert_eq!(stats.total_orders, 4);
    assert_eq!(stats.total_revenue, Money::from_cents(6250));
    assert_eq!(stats.avg_wait_minutes, 15);
    assert_eq!(RevenuePeriod::Month.series(&store).len(), 12);
    assert_eq!(RevenuePeriod::Year.series(&store).len(), 6);
}

#[test]
fn test_tomorrow_planning() {
    let store = FixtureStore::load();
    let summary = upcoming::summarize(store.preselections());
    assert_eq!(summary.total_orders, 5);
    assert_eq!(summary.total_meals, 7);
    assert_eq!(summary.meals_by_period.get(&MealPeriod::Lunch), Some(&5));

    let breakfast = upcoming::filter_preselections(
        store.preselections(),
        PeriodFilter::Only(MealPeriod::Breakfast),
        "",
    );
    assert_eq!(breakfast.len(), 1);
    assert_eq!(breakfast[0].requester, "Youssef Amin");
}

// ============================================================================
// Actions and Notifications
// ============================================================================

#[test]
fn test_student_order_notifications_follow_locale() {
    let store = FixtureStore::load();
    let mut session = signed_in("sara");
    let mut sink: Vec<Notification> = Vec::new();

    let mut draft = OrderDraft::new(*store.product("11").unwrap());
    draft.quantity.increment();
    assert_eq!(draft.total(), Money::from_cents(1500));

    Actions::new(&session, &mut sink).confirm_order(&draft);
    session.set_locale(Locale::Fr);
    Actions::new(&session, &mut sink).confirm_order(&draft);

    let messages: Vec<&str> = sink.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Order confirmed for 2x Caesar Salad",
            "Commande confirmée : 2x Salade César"
        ]
    );
}

#[test]
fn test_staff_order_handling() {
    let store = FixtureStore::load();
    let session = signed_in("admin");
    let mut sink: Vec<Notification> = Vec::new();
    let order = store.order("1").unwrap();

    let mut actions = Actions::new(&session, &mut sink);
    assert!(actions.suggest_time(order, None).is_err());
    actions.suggest_time(order, Some("13:30")).unwrap();
    actions.accept_order(order);
    actions.refuse_order(order);

    let levels: Vec<NotificationLevel> = sink.iter().map(|n| n.level).collect();
    assert_eq!(
        levels,
        [
            NotificationLevel::Error,
            NotificationLevel::Success,
            NotificationLevel::Success,
            NotificationLevel::Error,
        ]
    );
    assert_eq!(sink[2].message, "Order from Ahmed Ali accepted for 12:30");
}

#[test]
fn test_product_and_menu_management() {
    let store = FixtureStore::load();
    let session = signed_in("admin");
    let mut sink: Vec<Notification> = Vec::new();
    let mut actions = Actions::new(&session, &mut sink);

    let blank = ProductForm::blank(&store);
    assert!(actions.submit_product(&blank, None).is_err());

    let pizza = store.product("7").unwrap();
    let form = ProductForm::from_product(pizza);
    let updated = actions.submit_product(&form, Some(pizza)).unwrap();
    assert_eq!(updated.message, "Product \"Margherita Pizza\" updated successfully!");

    let mut meal = PlannedMealForm::new(&store);
    meal.period = MealPeriod::Dinner;
    let added = actions.add_planned_meal(&store, &meal).unwrap();
    assert_eq!(added.message, "Added Espresso to Dinner menu");

    meal.product_id = "404".into();
    assert!(actions.add_planned_meal(&store, &meal).is_err());
}

#[test]
fn test_planned_changes_saved_in_locale() {
    let store = FixtureStore::load();
    let mut session = signed_in("admin");
    let mut sink: Vec<Notification> = Vec::new();
    let row = &store.preselections()[1];

    Actions::new(&session, &mut sink).save_planned_changes(row);
    session.set_locale(Locale::Fr);
    Actions::new(&session, &mut sink).save_planned_changes(row);

    assert!(sink.iter().all(|n| n.level == NotificationLevel::Success));
    assert_eq!(sink[0].message, "Changes saved");
    assert_eq!(sink[1].message, "Modifications enregistrées");
}
