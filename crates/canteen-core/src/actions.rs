//! Simulated actions
//!
//! Nothing here changes a fixture. Every action produces a [`Notification`]
//! in the session's locale, forwards it to the [`Notifier`] and returns it.

use crate::error::{Error, ValidationError};
use crate::fixtures::{FixtureStore, Order, PreSelection, Product};
use crate::forms::{OrderDraft, PlannedMealForm, PreSelectDraft, ProductForm};
use crate::i18n::Locale;
use crate::session::SessionContext;
use serde::Serialize;
use tracing::{debug, warn};

/// Severity of a notification toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Receives notifications produced by actions.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Runs actions against a session and reports them to a notifier.
pub struct Actions<'a, N: Notifier + ?Sized> {
    session: &'a SessionContext,
    notifier: &'a mut N,
}

impl<'a, N: Notifier + ?Sized> Actions<'a, N> {
    pub fn new(session: &'a SessionContext, notifier: &'a mut N) -> Self {
        Self { session, notifier }
    }

    fn emit(&mut self, notification: Notification) -> Notification {
        debug!(level = ?notification.level, message = %notification.message, "notify");
        self.notifier.notify(notification.clone());
        notification
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        warn!(error = %err, "action rejected");
        let message = self.session.t(err.message_key()).to_string();
        self.emit(Notification::error(message));
        err
    }

    /// Student confirms an order for today.
    pub fn confirm_order(&mut self, draft: &OrderDraft) -> Notification {
        let message = self.session.t_with(
            "orderConfirmedFor",
            &[
                ("quantity", &draft.quantity.get().to_string()),
                ("product", self.session.product_name(&draft.product)),
            ],
        );
        self.emit(Notification::success(message))
    }

    /// Student pre-selects a meal for tomorrow.
    pub fn preselect(&mut self, draft: &PreSelectDraft) -> Notification {
        let message = self.session.t_with(
            "preSelectedFor",
            &[
                ("quantity", &draft.quantity.get().to_string()),
                ("product", self.session.product_name(&draft.product)),
                ("time", &draft.preferred_time),
            ],
        );
        self.emit(Notification::success(message))
    }

    /// Student cancels one of their orders.
    pub fn cancel_order(&mut self, order: &Order) -> Notification {
        let message = self.session.t_with("orderCancelled", &[("id", order.id)]);
        self.emit(Notification::success(message))
    }

    pub fn accept_order(&mut self, order: &Order) -> Notification {
        let message = self.session.t_with(
            "orderAcceptedFor",
            &[("name", order.requester), ("time", order.pickup_time)],
        );
        self.emit(Notification::success(message))
    }

    pub fn refuse_order(&mut self, order: &Order) -> Notification {
        let message = self
            .session
            .t_with("orderRefusedFor", &[("name", order.requester)]);
        self.emit(Notification::error(message))
    }

    /// Propose another pickup slot to the student. A slot must be chosen.
    pub fn suggest_time(
        &mut self,
        order: &Order,
        slot: Option<&str>,
    ) -> Result<Notification, ValidationError> {
        let Some(slot) = slot.filter(|s| !s.is_empty()) else {
            return Err(self.reject(ValidationError::MissingTimeSlot));
        };
        debug!(order = order.id, slot, "suggesting pickup time");
        let message = self.session.t_with("suggestedTimeSent", &[("time", slot)]);
        Ok(self.emit(Notification::success(message)))
    }

    /// Submit the product form; `editing` is the product being edited, if any.
    pub fn submit_product(
        &mut self,
        form: &ProductForm,
        editing: Option<&Product>,
    ) -> Result<Notification, ValidationError> {
        if let Err(err) = form.validate() {
            return Err(self.reject(err));
        }
        let name = form_name(form, self.session.locale());
        let key = if editing.is_some() {
            "productUpdated"
        } else {
            "productAdded"
        };
        let message = self.session.t_with(key, &[("name", name)]);
        Ok(self.emit(Notification::success(message)))
    }

    pub fn delete_product(&mut self, product: &Product) -> Notification {
        let message = self
            .session
            .t_with("productDeleted", &[("name", self.session.product_name(product))]);
        self.emit(Notification::error(message))
    }

    /// Add a product to one of tomorrow's meal periods.
    pub fn add_planned_meal(
        &mut self,
        store: &FixtureStore,
        form: &PlannedMealForm,
    ) -> Result<Notification, Error> {
        let product = store.product(&form.product_id)?;
        let message = self.session.t_with(
            "mealAdded",
            &[
                ("product", self.session.product_name(product)),
                ("period", self.session.t(form.period.label_key())),
            ],
        );
        Ok(self.emit(Notification::success(message)))
    }

    pub fn remove_planned_meal(&mut self, product: &Product) -> Notification {
        let message = self
            .session
            .t_with("mealRemoved", &[("product", self.session.product_name(product))]);
        self.emit(Notification::error(message))
    }

    /// Leave edit mode on a planned row.
    pub fn save_planned_changes(&mut self, preselection: &PreSelection) -> Notification {
        debug!(preselection = preselection.id, "saving planned changes");
        let message = self.session.t("changesSaved");
        self.emit(Notification::success(message))
    }
}

/// Name typed for the active locale, falling back to English.
fn form_name(form: &ProductForm, locale: Locale) -> &str {
    let localized = match locale {
        Locale::En => &form.name_en,
        Locale::Fr => &form.name_fr,
        Locale::Ar => &form.name_ar,
    };
    if localized.is_empty() {
        &form.name_en
    } else {
        localized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MealPeriod;
    use mockall::predicate::eq;

    fn order(store: &FixtureStore, id: &str) -> Order {
        store.order(id).cloned().unwrap()
    }

    #[test]
    fn test_confirm_order_forwards_to_notifier() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let mut draft = OrderDraft::new(*store.product("7").unwrap());
        draft.quantity.increment();

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notification::success(
                "Order confirmed for 2x Margherita Pizza",
            )))
            .times(1)
            .return_const(());

        let n = Actions::new(&session, &mut notifier).confirm_order(&draft);
        assert_eq!(n.level, NotificationLevel::Success);
    }

    #[test]
    fn test_refuse_is_error_level() {
        let store = FixtureStore::load();
        let session = SessionContext::new().with_locale(Locale::Fr);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.is_error() && n.message == "Commande de Sara Ben refusée")
            .times(1)
            .return_const(());

        Actions::new(&session, &mut notifier).refuse_order(&order(&store, "2"));
    }

    #[test]
    fn test_accept_uses_pickup_time() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let mut sink = Vec::new();
        let n = Actions::new(&session, &mut sink).accept_order(&order(&store, "1"));
        assert_eq!(n.message, "Order from Ahmed Ali accepted for 12:30");
        assert_eq!(sink, vec![n]);
    }

    #[test]
    fn test_suggest_time_requires_slot() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let o = order(&store, "4");

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.is_error() && n.message == "Please select a time slot")
            .times(2)
            .return_const(());
        let mut actions = Actions::new(&session, &mut notifier);
        assert_eq!(
            actions.suggest_time(&o, None),
            Err(ValidationError::MissingTimeSlot)
        );
        assert_eq!(
            actions.suggest_time(&o, Some("")),
            Err(ValidationError::MissingTimeSlot)
        );

        let mut sink = Vec::new();
        let n = Actions::new(&session, &mut sink)
            .suggest_time(&o, Some("15:30"))
            .unwrap();
        assert_eq!(n.message, "Suggested time 15:30 sent to student");
    }

    #[test]
    fn test_submit_product() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let mut sink = Vec::new();

        let blank = ProductForm::blank(&store);
        let err = Actions::new(&session, &mut sink)
            .submit_product(&blank, None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields(_)));
        assert_eq!(sink.len(), 1);
        assert!(sink[0].is_error());
        assert_eq!(sink[0].message, "Please fill in required fields");

        let product = store.product("11").unwrap();
        let form = ProductForm::from_product(product);
        let n = Actions::new(&session, &mut sink)
            .submit_product(&form, Some(product))
            .unwrap();
        assert_eq!(n.message, "Product \"Caesar Salad\" updated successfully!");

        let form = ProductForm {
            name_en: "Lentil Soup".into(),
            price: "3.00".into(),
            ..ProductForm::blank(&store)
        };
        let fr = SessionContext::new().with_locale(Locale::Fr);
        let n = Actions::new(&fr, &mut sink)
            .submit_product(&form, None)
            .unwrap();
        assert_eq!(n.message, "Produit « Lentil Soup » ajouté avec succès !");
    }

    #[test]
    fn test_delete_and_remove_are_error_level() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let product = store.product("1").unwrap();
        let mut sink = Vec::new();
        let mut actions = Actions::new(&session, &mut sink);
        assert!(actions.delete_product(product).is_error());
        assert!(actions.remove_planned_meal(product).is_error());
        assert_eq!(sink[0].message, "Deleted Espresso");
        assert_eq!(sink[1].message, "Espresso removed from menu");
    }

    #[test]
    fn test_save_planned_changes_is_success() {
        let store = FixtureStore::load();
        let session = SessionContext::new().with_locale(Locale::Ar);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notification::success("تم حفظ التغييرات")))
            .times(1)
            .return_const(());

        let n = Actions::new(&session, &mut notifier)
            .save_planned_changes(&store.preselections()[0]);
        assert!(!n.is_error());
    }

    #[test]
    fn test_add_planned_meal() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let mut sink = Vec::new();
        let form = PlannedMealForm {
            product_id: "9".into(),
            period: MealPeriod::Dinner,
        };
        let n = Actions::new(&session, &mut sink)
            .add_planned_meal(&store, &form)
            .unwrap();
        assert_eq!(n.message, "Added Grilled Chicken to Dinner menu");

        let missing = PlannedMealForm {
            product_id: "99".into(),
            ..form
        };
        let err = Actions::new(&session, &mut sink)
            .add_planned_meal(&store, &missing)
            .unwrap_err();
        assert_eq!(err.code(), "unknown_product");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_cancel_and_preselect() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let mut sink = Vec::new();
        let mut actions = Actions::new(&session, &mut sink);
        let n = actions.cancel_order(&order(&store, "1"));
        assert_eq!(n.message, "Order #1 cancelled");

        let mut draft = PreSelectDraft::new(store.tomorrow_suggestions()[0]);
        draft.preferred_time = "13:00".into();
        let n = actions.preselect(&draft);
        assert_eq!(
            n.message,
            "Pre-selected 1x Margherita Pizza for tomorrow at 13:00"
        );
    }
}
