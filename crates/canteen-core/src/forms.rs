//! Form state behind the order, pre-selection and product dialogs.

use crate::error::ValidationError;
use crate::fixtures::{FixtureStore, Fulfillment, MealPeriod, Money, Product};

/// Pickup time preselected in every dialog.
pub const DEFAULT_SLOT: &str = "12:00";

/// Half-hour slots from `first_hour`:00 to `last_hour`:00 inclusive.
pub fn time_slots(first_hour: u32, last_hour: u32) -> Vec<String> {
    (first_hour..=last_hour)
        .flat_map(|h| {
            let half = (h < last_hour).then(|| format!("{h:02}:30"));
            std::iter::once(format!("{h:02}:00")).chain(half)
        })
        .collect()
}

/// Slots offered when ordering for today.
pub fn order_slots() -> Vec<String> {
    time_slots(8, 18)
}

/// Slots offered when pre-selecting for tomorrow.
pub fn preselect_slots() -> Vec<String> {
    time_slots(8, 20)
}

/// Quantity stepper; never goes below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

/// Move a slot selection by `delta` positions within `slots`, clamped.
pub fn step_slot(slots: &[String], current: &str, delta: isize) -> String {
    let index = slots.iter().position(|s| s == current).unwrap_or(0);
    let last = slots.len().saturating_sub(1);
    let next = index.saturating_add_signed(delta).min(last);
    slots.get(next).cloned().unwrap_or_else(|| current.to_string())
}

/// Student order dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub product: Product,
    pub quantity: Quantity,
    pub pickup_time: String,
    pub fulfillment: Fulfillment,
}

impl OrderDraft {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::default(),
            pickup_time: DEFAULT_SLOT.to_string(),
            fulfillment: Fulfillment::EatIn,
        }
    }

    pub fn total(&self) -> Money {
        self.product.price * self.quantity.get()
    }
}

/// Student pre-selection dialog for tomorrow's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreSelectDraft {
    pub product: Product,
    pub quantity: Quantity,
    pub preferred_time: String,
}

impl PreSelectDraft {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::default(),
            preferred_time: DEFAULT_SLOT.to_string(),
        }
    }
}

/// Staff add/edit product dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name_en: String,
    pub name_fr: String,
    pub name_ar: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    /// Empty form with the first category preselected.
    pub fn blank(store: &FixtureStore) -> Self {
        Self {
            category: store
                .categories()
                .first()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Form prefilled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name_en: product.name.en.to_string(),
            name_fr: product.name.fr.to_string(),
            name_ar: product.name.ar.to_string(),
            price: product.price.to_string(),
            category: product.category.to_string(),
            image: product.image.to_string(),
        }
    }

    /// English name, price and category are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("name_en", &self.name_en),
            ("price", &self.price),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// Staff "add meal to tomorrow's menu" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMealForm {
    pub product_id: String,
    pub period: MealPeriod,
}

impl PlannedMealForm {
    pub fn new(store: &FixtureStore) -> Self {
        Self {
            product_id: store
                .products()
                .first()
                .map(|p| p.id.to_string())
                .unwrap_or_default(),
            period: MealPeriod::Lunch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_slots() {
        let slots = order_slots();
        assert_eq!(slots.len(), 21);
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots[1], "08:30");
        assert_eq!(slots.last().map(String::as_str), Some("18:00"));
        assert!(slots.iter().any(|s| s == DEFAULT_SLOT));
    }

    #[test]
    fn test_preselect_slots_run_to_eight() {
        let slots = preselect_slots();
        assert_eq!(slots.len(), 25);
        assert_eq!(slots.last().map(String::as_str), Some("20:00"));
    }

    #[test]
    fn test_quantity_never_below_one() {
        let mut q = Quantity::default();
        q.decrement();
        assert_eq!(q.get(), 1);
        q.increment();
        q.increment();
        assert_eq!(q.get(), 3);
        q.decrement();
        assert_eq!(q.get(), 2);
    }

    #[test]
    fn test_step_slot_clamps() {
        let slots = order_slots();
        assert_eq!(step_slot(&slots, "12:00", 1), "12:30");
        assert_eq!(step_slot(&slots, "08:00", -1), "08:00");
        assert_eq!(step_slot(&slots, "18:00", 3), "18:00");
    }

    #[test]
    fn test_order_draft_total() {
        let store = FixtureStore::load();
        let mut draft = OrderDraft::new(*store.product("7").unwrap());
        draft.quantity.increment();
        assert_eq!(draft.total(), Money::from_cents(1700));
        assert_eq!(draft.pickup_time, "12:00");
        assert_eq!(draft.fulfillment, Fulfillment::EatIn);
    }

    #[test]
    fn test_product_form_validation() {
        let store = FixtureStore::load();
        let form = ProductForm::blank(&store);
        assert_eq!(form.category, "hot-drinks");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["name_en", "price"]))
        );

        let form = ProductForm::from_product(store.product("11").unwrap());
        assert_eq!(form.price, "7.50");
        assert_eq!(form.validate(), Ok(()));

        let form = ProductForm {
            category: String::new(),
            ..form
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["category"]))
        );
    }

    #[test]
    fn test_planned_meal_defaults() {
        let store = FixtureStore::load();
        let form = PlannedMealForm::new(&store);
        assert_eq!(form.product_id, "1");
        assert_eq!(form.period, MealPeriod::Lunch);
    }
}
