//! Fixture store
//!
//! Hard-coded records that populate every screen: categories, products,
//! orders, tomorrow's suggestions and pre-selections, revenue history and
//! the demo student profile. The store is built once and only ever read.

use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::session::Role;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A name in each supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedName {
    pub en: &'static str,
    pub fr: &'static str,
    pub ar: &'static str,
}

impl LocalizedName {
    pub const fn new(en: &'static str, fr: &'static str, ar: &'static str) -> Self {
        Self { en, fr, ar }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Fr => self.fr,
            Locale::Ar => self.ar,
        }
    }

    /// Iterate over the three localized forms.
    pub fn all(&self) -> [&'static str; 3] {
        [self.en, self.fr, self.ar]
    }
}

/// Amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * u64::from(rhs))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::default(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: LocalizedName,
    /// Catalog key of the category label.
    pub label_key: &'static str,
}

/// Menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: LocalizedName,
    pub price: Money,
    pub category: &'static str,
    pub image: &'static str,
}

/// Order lifecycle.
///
/// A student order starts `Pending`; staff move it to `Accepted` or
/// `Refused`, an accepted order becomes `Paid`, and a student may cancel it
/// while pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Paid,
    Refused,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::Paid,
        Self::Refused,
        Self::Cancelled,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Paid => "paid",
            Self::Refused => "refused",
            Self::Cancelled => "cancelled",
        }
    }

    /// Catalog key of the status label; students see accepted orders as confirmed.
    pub fn label_key(self, role: Role) -> &'static str {
        match (self, role) {
            (Self::Accepted, Role::Student) => "confirmed",
            _ => self.code(),
        }
    }

    /// Status tabs shown on the order list of each role.
    pub fn tabs(role: Role) -> &'static [OrderStatus] {
        match role {
            Role::Student => &[Self::Pending, Self::Accepted, Self::Paid, Self::Cancelled],
            Role::Staff => &[Self::Pending, Self::Accepted, Self::Refused, Self::Cancelled],
        }
    }

    /// Whether an order with this status is listed under `tab`.
    ///
    /// Students have no refused tab, so refused orders show as cancelled.
    pub fn in_tab(self, tab: OrderStatus, role: Role) -> bool {
        self == tab || (role == Role::Student && tab == Self::Cancelled && self == Self::Refused)
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" | "confirmed" => Ok(Self::Accepted),
            "paid" => Ok(Self::Paid),
            "refused" => Ok(Self::Refused),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where the order is eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    #[default]
    #[serde(rename = "eatin")]
    EatIn,
    Takeaway,
}

impl Fulfillment {
    pub fn label_key(self) -> &'static str {
        match self {
            Self::EatIn => "eatIn",
            Self::Takeaway => "takeAway",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::EatIn => Self::Takeaway,
            Self::Takeaway => Self::EatIn,
        }
    }
}

/// One product line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: &'static str,
    pub requester: &'static str,
    pub lines: Vec<OrderLine>,
    pub pickup_time: &'static str,
    pub status: OrderStatus,
    pub fulfillment: Fulfillment,
    pub date: NaiveDate,
}

impl Order {
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Hour component of the pickup time, if it parses.
    pub fn pickup_hour(&self) -> Option<u32> {
        self.pickup_time.split(':').next()?.parse().ok()
    }

    /// Only pending orders can still be accepted, refused or cancelled.
    pub fn is_actionable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Meal service periods used for tomorrow's planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub const ALL: [MealPeriod; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfastPeriod",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Serving window, as shown on the student upcoming screen.
    pub fn window(self) -> &'static str {
        match self {
            Self::Breakfast => "08:00 - 10:00",
            Self::Lunch => "12:00 - 15:00",
            Self::Dinner => "18:00 - 21:00",
        }
    }
}

impl FromStr for MealPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(Error::UnknownMealPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        })
    }
}

/// A student's choice for tomorrow, as seen by staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreSelection {
    pub id: &'static str,
    pub requester: &'static str,
    pub meal: Product,
    pub time_slot: &'static str,
    pub period: MealPeriod,
    pub quantity: u32,
}

/// One bar of the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub label: &'static str,
    pub revenue: u32,
    pub customers: u32,
}

/// The signed-in student shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub name: &'static str,
    pub credit_balance: Money,
}

/// All fixture data.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    categories: Vec<Category>,
    products: Vec<Product>,
    orders: Vec<Order>,
    tomorrow_suggestions: Vec<Product>,
    preselections: Vec<PreSelection>,
    monthly_revenue: Vec<RevenuePoint>,
    yearly_revenue: Vec<RevenuePoint>,
    profile: StudentProfile,
    reference_date: NaiveDate,
    avg_wait_minutes: u32,
}

impl FixtureStore {
    /// Build the demo data set.
    pub fn load() -> Self {
        let categories = categories();
        let products = products();
        let p = |index: usize| products[index];

        let orders = vec![
            Order {
                id: "1",
                requester: "Ahmed Ali",
                lines: vec![line(p(6), 1), line(p(1), 1)],
                pickup_time: "12:30",
                status: OrderStatus::Pending,
                fulfillment: Fulfillment::EatIn,
                date: date(2025, 11, 9),
            },
            Order {
                id: "2",
                requester: "Sara Ben",
                lines: vec![line(p(9), 2), line(p(12), 2)],
                pickup_time: "13:00",
                status: OrderStatus::Accepted,
                fulfillment: Fulfillment::Takeaway,
                date: date(2025, 11, 9),
            },
            Order {
                id: "3",
                requester: "Mohamed Kadi",
                lines: vec![line(p(10), 1)],
                pickup_time: "12:15",
                status: OrderStatus::Paid,
                fulfillment: Fulfillment::EatIn,
                date: date(2025, 11, 8),
            },
            Order {
                id: "4",
                requester: "Leila Hassan",
                lines: vec![line(p(7), 1), line(p(3), 1)],
                pickup_time: "14:00",
                status: OrderStatus::Pending,
                fulfillment: Fulfillment::Takeaway,
                date: date(2025, 11, 9),
            },
            Order {
                id: "5",
                requester: "Youssef Amin",
                lines: vec![line(p(8), 1)],
                pickup_time: "13:30",
                status: OrderStatus::Accepted,
                fulfillment: Fulfillment::EatIn,
                date: date(2025, 11, 9),
            },
        ];

        let tomorrow_suggestions = vec![p(6), p(7), p(8), p(9), p(10)];
        let s = |index: usize| tomorrow_suggestions[index];

        let preselections = vec![
            preselection("1", "Ahmed Ali", s(0), "12:30", MealPeriod::Lunch, 1),
            preselection("2", "Sara Ben", s(1), "13:00", MealPeriod::Lunch, 2),
            preselection("3", "Mohamed Kadi", s(2), "13:30", MealPeriod::Lunch, 1),
            preselection("4", "Leila Hassan", s(3), "12:00", MealPeriod::Lunch, 1),
            preselection("5", "Youssef Amin", s(0), "09:00", MealPeriod::Breakfast, 2),
        ];

        Self {
            categories,
            products,
            orders,
            tomorrow_suggestions,
            preselections,
            monthly_revenue: monthly_revenue(),
            yearly_revenue: yearly_revenue(),
            profile: StudentProfile {
                name: "Ahmed Ali",
                credit_balance: Money::from_cents(12_550),
            },
            reference_date: date(2025, 11, 9),
            avg_wait_minutes: 15,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn tomorrow_suggestions(&self) -> &[Product] {
        &self.tomorrow_suggestions
    }

    pub fn preselections(&self) -> &[PreSelection] {
        &self.preselections
    }

    pub fn monthly_revenue(&self) -> &[RevenuePoint] {
        &self.monthly_revenue
    }

    pub fn yearly_revenue(&self) -> &[RevenuePoint] {
        &self.yearly_revenue
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// The day the fixture orders treat as "today".
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn avg_wait_minutes(&self) -> u32 {
        self.avg_wait_minutes
    }

    pub fn product(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::UnknownProduct(id.to_string()))
    }

    pub fn category(&self, id: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::UnknownCategory(id.to_string()))
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::load()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn line(product: Product, quantity: u32) -> OrderLine {
    OrderLine { product, quantity }
}

fn preselection(
    id: &'static str,
    requester: &'static str,
    meal: Product,
    time_slot: &'static str,
    period: MealPeriod,
    quantity: u32,
) -> PreSelection {
    PreSelection {
        id,
        requester,
        meal,
        time_slot,
        period,
        quantity,
    }
}

fn categories() -> Vec<Category> {
    let c = |id, label_key, en, fr, ar| Category {
        id,
        name: LocalizedName::new(en, fr, ar),
        label_key,
    };
    vec![
        c("hot-drinks", "hotDrinks", "Hot Drinks", "Boissons chaudes", "مشروبات ساخنة"),
        c("cold-drinks", "coldDrinks", "Cold Drinks", "Boissons froides", "مشروبات باردة"),
        c("cakes-desserts", "cakesDesserts", "Cakes & Desserts", "Gâteaux & desserts", "كعك وحلويات"),
        c("breakfast", "breakfast", "Breakfast", "Petit déjeuner", "فطور"),
        c("pizza-pasta", "pizzaPasta", "Pizza & Pasta", "Pizza & pâtes", "بيتزا ومعكرونة"),
        c("dishes", "dishes", "Main Dishes", "Plats", "أطباق رئيسية"),
        c("sandwiches", "sandwiches", "Sandwiches", "Sandwiches", "ساندويتشات"),
        c("salads", "salads", "Salads", "Salades", "سلطات"),
        c("dairy", "dairy", "Dairy", "Laitage", "ألبان"),
        c("snacks", "snacks", "Snacks", "Snacks", "وجبات خفيفة"),
    ]
}

fn products() -> Vec<Product> {
    let p = |id, en, fr, ar, cents, category, image| Product {
        id,
        name: LocalizedName::new(en, fr, ar),
        price: Money::from_cents(cents),
        category,
        image,
    };
    vec![
        p("1", "Espresso", "Espresso", "إسبريسو", 250, "hot-drinks",
          "https://images.unsplash.com/photo-1510591509098-f4fdc6d0ff04?w=400"),
        p("2", "Cappuccino", "Cappuccino", "كابتشينو", 350, "hot-drinks",
          "https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=400"),
        p("3", "Fresh Orange Juice", "Jus d'orange frais", "عصير برتقال طازج", 400, "cold-drinks",
          "https://images.unsplash.com/photo-1600271886742-f049cd451bba?w=400"),
        p("4", "Iced Tea", "Thé glacé", "شاي مثلج", 250, "cold-drinks",
          "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=400"),
        p("5", "Chocolate Cake", "Gâteau au chocolat", "كعكة الشوكولاتة", 500, "cakes-desserts",
          "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400"),
        p("6", "Croissant", "Croissant", "كرواسون", 200, "breakfast",
          "https://images.unsplash.com/photo-1555507036-ab1f4038808a?w=400"),
        p("7", "Margherita Pizza", "Pizza Margherita", "بيتزا مارغريتا", 850, "pizza-pasta",
          "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=400"),
        p("8", "Spaghetti Carbonara", "Spaghetti Carbonara", "سباغيتي كاربونارا", 900, "pizza-pasta",
          "https://images.unsplash.com/photo-1612874742237-6526221588e3?w=400"),
        p("9", "Grilled Chicken", "Poulet grillé", "دجاج مشوي", 1200, "dishes",
          "https://images.unsplash.com/photo-1598103442097-8b74394b95c6?w=400"),
        p("10", "Beef Burger", "Burger au bœuf", "برجر لحم", 1000, "sandwiches",
          "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400"),
        p("11", "Caesar Salad", "Salade César", "سلطة سيزر", 750, "salads",
          "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=400"),
        p("12", "Yogurt", "Yaourt", "زبادي", 200, "dairy",
          "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400"),
        p("13", "French Fries", "Frites", "بطاطس مقلية", 350, "snacks",
          "https://images.unsplash.com/photo-1576107232684-1279f390859f?w=400"),
        p("14", "Cheese Pizza", "Pizza au fromage", "بيتزا جبن", 900, "pizza-pasta",
          "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400"),
        p("15", "Club Sandwich", "Club Sandwich", "كلوب ساندويتش", 800, "sandwiches",
          "https://images.unsplash.com/photo-1528735602780-2552fd46c7af?w=400"),
    ]
}

fn monthly_revenue() -> Vec<RevenuePoint> {
    [
        ("Jan", 4200, 85),
        ("Feb", 3800, 78),
        ("Mar", 5100, 102),
        ("Apr", 4900, 98),
        ("May", 5400, 108),
        ("Jun", 4600, 92),
        ("Jul", 3200, 64),
        ("Aug", 3500, 70),
        ("Sep", 5800, 116),
        ("Oct", 6100, 122),
        ("Nov", 5900, 118),
        ("Dec", 4800, 96),
    ]
    .into_iter()
    .map(|(label, revenue, customers)| RevenuePoint {
        label,
        revenue,
        customers,
    })
    .collect()
}

fn yearly_revenue() -> Vec<RevenuePoint> {
    [
        ("2020", 42000, 840),
        ("2021", 48500, 970),
        ("2022", 54200, 1084),
        ("2023", 59800, 1196),
        ("2024", 63400, 1268),
        ("2025", 58600, 1172),
    ]
    .into_iter()
    .map(|(label, revenue, customers)| RevenuePoint {
        label,
        revenue,
        customers,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_sizes() {
        let store = FixtureStore::load();
        assert_eq!(store.categories().len(), 10);
        assert_eq!(store.products().len(), 15);
        assert_eq!(store.orders().len(), 5);
        assert_eq!(store.tomorrow_suggestions().len(), 5);
        assert_eq!(store.preselections().len(), 5);
        assert_eq!(store.monthly_revenue().len(), 12);
        assert_eq!(store.yearly_revenue().len(), 6);
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        let store = FixtureStore::load();
        for product in store.products() {
            assert!(
                store.category(product.category).is_ok(),
                "product {} has unknown category {}",
                product.id,
                product.category
            );
        }
    }

    #[test]
    fn test_order_totals() {
        let store = FixtureStore::load();
        let order = store.order("2").expect("fixture order");
        // 2x Beef Burger + 2x French Fries
        assert_eq!(order.total_items(), 4);
        assert_eq!(order.total_price(), Money::from_cents(2700));
        assert_eq!(order.pickup_hour(), Some(13));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(850).to_string(), "8.50");
        assert_eq!(Money::from_cents(12_550).to_string(), "125.50");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_status_vocabulary() {
        assert_eq!("confirmed".parse::<OrderStatus>().ok(), Some(OrderStatus::Accepted));
        assert_eq!("ACCEPTED".parse::<OrderStatus>().ok(), Some(OrderStatus::Accepted));
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Accepted.label_key(Role::Student), "confirmed");
        assert_eq!(OrderStatus::Accepted.label_key(Role::Staff), "accepted");
    }

    #[test]
    fn test_refused_orders_show_as_cancelled_to_students() {
        assert!(OrderStatus::Refused.in_tab(OrderStatus::Cancelled, Role::Student));
        assert!(!OrderStatus::Refused.in_tab(OrderStatus::Cancelled, Role::Staff));
        assert!(OrderStatus::Refused.in_tab(OrderStatus::Refused, Role::Staff));
    }

    #[test]
    fn test_unknown_lookups() {
        let store = FixtureStore::load();
        assert_eq!(
            store.product("99").unwrap_err(),
            Error::UnknownProduct("99".into())
        );
        assert!(store.category("soups").is_err());
        assert!(store.order("42").is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let json = serde_json::to_string(&Fulfillment::EatIn).unwrap();
        assert_eq!(json, "\"eatin\"");
    }
}
