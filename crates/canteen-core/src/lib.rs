//! Canteen Core - Campus Restaurant Domain
//!
//! This crate provides everything the canteen front-end shows, without any
//! terminal code:
//! - Fixtures: products, categories, orders, pre-selections and revenue history
//! - Session: active locale, theme and role, with message lookup
//! - I18n: the English, French and Arabic message catalog
//! - View: role and page id to screen selection
//! - Catalog/Orders/Upcoming/Stats: per-screen filtering and aggregates
//! - Auth: demo sign-in
//! - Forms/Actions: dialog state and simulated actions with notifications
//!
//! ## Usage
//!
//! ```
//! use canteen_core::{select_screen, FixtureStore, Locale, Role, Screen, SessionContext};
//!
//! let store = FixtureStore::load();
//! let mut session = SessionContext::new();
//! session.set_locale(Locale::Fr);
//!
//! let product = store.product("7").unwrap();
//! assert_eq!(session.product_name(product), "Pizza Margherita");
//! assert_eq!(select_screen(Role::Staff, "nope"), Screen::home(Role::Staff));
//! ```

#![forbid(unsafe_code)]

pub mod actions;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod i18n;
pub mod orders;
pub mod session;
pub mod stats;
pub mod upcoming;
pub mod view;

pub use actions::{Actions, Notification, NotificationLevel, Notifier};
pub use auth::{role_for, sign_in, LoginForm};
pub use catalog::{NameMatch, ProductFilter};
pub use error::{Error, Result, ValidationError};
pub use fixtures::{
    Category, FixtureStore, Fulfillment, LocalizedName, MealPeriod, Money, Order, OrderLine,
    OrderStatus, PreSelection, Product, RevenuePoint, StudentProfile,
};
pub use forms::{OrderDraft, PlannedMealForm, PreSelectDraft, ProductForm, Quantity};
pub use i18n::{detect_locale, translate, translate_with, Locale};
pub use session::{Role, SessionContext, Theme};
pub use stats::{DailyStats, ItemCount, RevenuePeriod};
pub use upcoming::{PeriodFilter, PlanningSummary};
pub use view::{nav_screens, select_screen, Screen, StaffScreen, StudentScreen};
