//! TUI application state management

use super::command::CommandRegistry;
use canteen_core::catalog::{self, NameMatch, ProductFilter};
use canteen_core::forms::{order_slots, preselect_slots, step_slot, DEFAULT_SLOT};
use canteen_core::orders;
use canteen_core::upcoming::{self, PeriodFilter};
use canteen_core::{
    auth, nav_screens, select_screen, Actions, FixtureStore, LoginForm, Notification, Notifier,
    Order, OrderDraft, OrderStatus, PlannedMealForm, PreSelectDraft, PreSelection, Product,
    ProductForm, RevenuePeriod, Screen, SessionContext, StaffScreen, StudentScreen,
    ValidationError,
};
use ratatui::style::Style;
use std::collections::VecDeque;
use tracing::{debug, info};
use tui_textarea::TextArea;

/// Toasts kept on screen at once; older ones are dropped.
const MAX_TOASTS: usize = 3;

/// A notification with its remaining lifetime in ticks.
pub struct Toast {
    pub notification: Notification,
    remaining: u16,
}

/// Notification toasts shown above the bottom navigation.
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: u16,
}

impl Toasts {
    pub fn new(ttl: u16) -> Self {
        Self {
            items: VecDeque::new(),
            ttl: ttl.max(1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|t| &t.notification)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Age every toast by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.items {
            toast.remaining = toast.remaining.saturating_sub(1);
        }
        self.items.retain(|t| t.remaining > 0);
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            notification,
            remaining: self.ttl,
        });
    }
}

/// Login form field with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

pub struct LoginState {
    pub username: TextArea<'static>,
    pub password: TextArea<'static>,
    pub focus: LoginField,
    /// Last rejection, shown inline in the active locale.
    pub error: Option<ValidationError>,
}

impl LoginState {
    pub fn new() -> Self {
        let mut password = text_input("");
        password.set_mask_char('\u{2022}');
        Self {
            username: text_input(""),
            password,
            focus: LoginField::Username,
            error: None,
        }
    }

    pub fn form(&self) -> LoginForm {
        LoginForm::new(first_line(&self.username), first_line(&self.password))
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_mut(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields of the product dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    NameEn,
    NameFr,
    NameAr,
    Price,
    Category,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        Self::NameEn,
        Self::NameFr,
        Self::NameAr,
        Self::Price,
        Self::Category,
        Self::Image,
    ];

    /// Index into [`ProductEditor::texts`]; the category is a picker.
    fn text_slot(self) -> Option<usize> {
        match self {
            Self::NameEn => Some(0),
            Self::NameFr => Some(1),
            Self::NameAr => Some(2),
            Self::Price => Some(3),
            Self::Category => None,
            Self::Image => Some(4),
        }
    }
}

/// Add/edit product dialog state.
pub struct ProductEditor {
    pub editing: Option<Product>,
    pub texts: [TextArea<'static>; 5],
    /// Index into the fixture categories.
    pub category: usize,
    field: usize,
}

impl ProductEditor {
    pub fn new(store: &FixtureStore, editing: Option<Product>) -> Self {
        let form = match &editing {
            Some(product) => ProductForm::from_product(product),
            None => ProductForm::blank(store),
        };
        let category = store
            .categories()
            .iter()
            .position(|c| c.id == form.category)
            .unwrap_or(0);
        let texts = [
            &form.name_en,
            &form.name_fr,
            &form.name_ar,
            &form.price,
            &form.image,
        ]
        .map(|value| text_input(value));
        Self {
            editing,
            texts,
            category,
            field: 0,
        }
    }

    pub fn field(&self) -> ProductField {
        ProductField::ALL[self.field]
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % ProductField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + ProductField::ALL.len() - 1) % ProductField::ALL.len();
    }

    pub fn text(&self, field: ProductField) -> Option<&TextArea<'static>> {
        field.text_slot().map(|i| &self.texts[i])
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut TextArea<'static>> {
        self.field().text_slot().map(|i| &mut self.texts[i])
    }

    pub fn cycle_category(&mut self, store: &FixtureStore, delta: isize) {
        let len = store.categories().len();
        if len > 0 {
            self.category = wrap(self.category, delta, len);
        }
    }

    pub fn form(&self, store: &FixtureStore) -> ProductForm {
        let value = |i: usize| first_line(&self.texts[i]);
        ProductForm {
            name_en: value(0),
            name_fr: value(1),
            name_ar: value(2),
            price: value(3),
            category: store
                .categories()
                .get(self.category)
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            image: value(4),
        }
    }
}

/// Modal dialog over the body.
pub enum Dialog {
    Order(OrderDraft),
    PreSelect(PreSelectDraft),
    /// Staff accept/refuse/suggest-time on a pending order.
    OrderAction {
        order: Order,
        slot: Option<String>,
    },
    Product(ProductEditor),
    PlannedMeal(PlannedMealForm),
    /// Asks before a delete or removal is reported.
    ConfirmDelete(PendingDelete),
    Help,
}

/// What a confirmed delete dialog acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingDelete {
    Product(Product),
    PlannedMeal(Product),
}

/// What the keyboard currently edits.
pub enum InputMode {
    Normal,
    Search(TextArea<'static>),
    Command(TextArea<'static>),
}

/// Per-screen state; reset whenever the screen changes.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub query: String,
    pub selected: usize,
    pub category: Option<&'static str>,
    pub tab: usize,
    pub period: PeriodFilter,
    pub revenue: RevenuePeriod,
    /// Planned rows currently in edit mode, by id.
    pub editing: Vec<&'static str>,
}

/// Main application state.
pub struct App {
    pub session: SessionContext,
    pub store: FixtureStore,
    pub signed_in: bool,
    pub screen: Screen,
    pub view: ScreenState,
    pub login: LoginState,
    pub dialog: Option<Dialog>,
    pub input: InputMode,
    pub toasts: Toasts,
    pub should_quit: bool,
    commands: CommandRegistry,
}

impl App {
    pub fn new(session: SessionContext, store: FixtureStore, toast_ticks: u16) -> Self {
        let screen = Screen::home(session.role());
        Self {
            session,
            store,
            signed_in: false,
            screen,
            view: ScreenState::default(),
            login: LoginState::new(),
            dialog: None,
            input: InputMode::Normal,
            toasts: Toasts::new(toast_ticks),
            should_quit: false,
            commands: CommandRegistry::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.notify(notification);
    }

    /// Called once per event-loop tick.
    pub fn tick(&mut self) {
        self.toasts.tick();
    }

    // ── session ─────────────────────────────────────────────────────────

    pub fn submit_login(&mut self) {
        let form = self.login.form();
        match auth::sign_in(&mut self.session, &form) {
            Ok(role) => {
                self.signed_in = true;
                self.login = LoginState::new();
                self.show(Screen::home(role));
            }
            Err(err) => self.login.error = Some(err),
        }
    }

    pub fn sign_out(&mut self) {
        info!(role = %self.session.role(), "signed out");
        self.signed_in = false;
        self.dialog = None;
        self.input = InputMode::Normal;
        self.show(Screen::home(self.session.role()));
    }

    pub fn cycle_locale(&mut self) {
        self.session.set_locale(self.session.locale().next());
    }

    pub fn toggle_theme(&mut self) {
        self.session.toggle_theme();
    }

    // ── navigation ──────────────────────────────────────────────────────

    fn show(&mut self, screen: Screen) {
        debug!(page = screen.page_id(), "show screen");
        self.screen = screen;
        self.view = ScreenState::default();
        self.dialog = None;
    }

    /// Navigate by page id; unknown ids land on the role's home screen.
    pub fn navigate_page(&mut self, page_id: &str) {
        self.show(select_screen(self.session.role(), page_id));
    }

    /// Move along the bottom navigation, wrapping around.
    pub fn step_screen(&mut self, delta: isize) {
        let screens = nav_screens(self.session.role());
        let current = screens.iter().position(|s| *s == self.screen).unwrap_or(0);
        self.show(screens[wrap(current, delta, screens.len())]);
    }

    // ── screen data ─────────────────────────────────────────────────────

    /// Status of the active order tab.
    pub fn current_tab(&self) -> OrderStatus {
        let tabs = OrderStatus::tabs(self.session.role());
        tabs[self.view.tab % tabs.len()]
    }

    pub fn products_view(&self) -> Vec<&Product> {
        let names = match self.screen {
            Screen::Student(StudentScreen::Home) => NameMatch::AnyLocale,
            _ => NameMatch::Locale(self.session.locale()),
        };
        match self.screen {
            Screen::Student(StudentScreen::Home) | Screen::Staff(StaffScreen::Products) => {
                ProductFilter::new(self.session.locale())
                    .with_category(self.view.category)
                    .with_query(&self.view.query)
                    .with_names(names)
                    .apply(self.store.products())
            }
            Screen::Student(StudentScreen::Upcoming) => catalog::search(
                self.store.tomorrow_suggestions(),
                &self.view.query,
                self.session.locale(),
            ),
            _ => Vec::new(),
        }
    }

    pub fn orders_view(&self) -> Vec<&Order> {
        let listed = match self.screen {
            Screen::Staff(StaffScreen::Home) => {
                orders::on_date(self.store.orders(), self.store.reference_date())
            }
            Screen::Student(StudentScreen::History) | Screen::Staff(StaffScreen::Orders) => {
                orders::in_tab(self.store.orders(), self.current_tab(), self.session.role())
            }
            _ => Vec::new(),
        };
        orders::search_requester(&listed, &self.view.query)
    }

    pub fn preselections_view(&self) -> Vec<&PreSelection> {
        match self.screen {
            Screen::Staff(StaffScreen::Upcoming) => upcoming::filter_preselections(
                self.store.preselections(),
                self.view.period,
                &self.view.query,
            ),
            _ => Vec::new(),
        }
    }

    /// Number of selectable rows on the current screen.
    pub fn row_count(&self) -> usize {
        match self.screen {
            Screen::Student(StudentScreen::Home | StudentScreen::Upcoming)
            | Screen::Staff(StaffScreen::Products) => self.products_view().len(),
            Screen::Student(StudentScreen::History)
            | Screen::Staff(StaffScreen::Home | StaffScreen::Orders) => self.orders_view().len(),
            Screen::Staff(StaffScreen::Upcoming) => self.preselections_view().len(),
            Screen::Staff(StaffScreen::Stats) => 0,
        }
    }

    fn selected_product(&self) -> Option<Product> {
        self.products_view().get(self.view.selected).map(|p| **p)
    }

    fn selected_order(&self) -> Option<Order> {
        self.orders_view()
            .get(self.view.selected)
            .map(|o| (*o).clone())
    }

    fn selected_preselection(&self) -> Option<PreSelection> {
        self.preselections_view()
            .get(self.view.selected)
            .map(|p| **p)
    }

    // ── list controls ───────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.view.selected = (self.view.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.view.selected = self.view.selected.saturating_sub(1);
    }

    /// Left/right: category, status tab, meal period or revenue period.
    pub fn cycle_filter(&mut self, delta: isize) {
        match self.screen {
            Screen::Student(StudentScreen::Home) | Screen::Staff(StaffScreen::Products) => {
                let categories = self.store.categories();
                let current = self
                    .view
                    .category
                    .and_then(|id| categories.iter().position(|c| c.id == id))
                    .map_or(0, |i| i + 1);
                let next = wrap(current, delta, categories.len() + 1);
                self.view.category = next.checked_sub(1).map(|i| categories[i].id);
            }
            Screen::Student(StudentScreen::History) | Screen::Staff(StaffScreen::Orders) => {
                let len = OrderStatus::tabs(self.session.role()).len();
                self.view.tab = wrap(self.view.tab, delta, len);
            }
            Screen::Staff(StaffScreen::Upcoming) => {
                let chips = PeriodFilter::CHIPS;
                let current = chips.iter().position(|c| *c == self.view.period).unwrap_or(0);
                self.view.period = chips[wrap(current, delta, chips.len())];
            }
            Screen::Staff(StaffScreen::Stats) => {
                self.view.revenue = self.view.revenue.toggled();
            }
            Screen::Student(StudentScreen::Upcoming) | Screen::Staff(StaffScreen::Home) => {}
        }
        self.view.selected = 0;
    }

    pub fn set_query(&mut self, query: String) {
        self.view.query = query;
        self.view.selected = 0;
    }

    // ── input modes ─────────────────────────────────────────────────────

    pub fn start_search(&mut self) {
        if self.supports_search() {
            self.input = InputMode::Search(text_input(&self.view.query));
        }
    }

    pub fn supports_search(&self) -> bool {
        !matches!(self.screen, Screen::Staff(StaffScreen::Stats))
    }

    pub fn start_command(&mut self) {
        self.input = InputMode::Command(text_input(""));
    }

    pub fn run_command(&mut self, line: &str) {
        let registry = self.commands.clone();
        if let Err(err) = registry.handle(self, line) {
            self.notify(Notification::error(err.to_string()));
        }
    }

    pub fn command_suggestions(&self, input: &str) -> Vec<&'static str> {
        self.commands.get_suggestions(input)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.names().collect()
    }

    // ── actions ─────────────────────────────────────────────────────────

    /// Enter on the selected row.
    pub fn activate(&mut self) {
        self.dialog = match self.screen {
            Screen::Student(StudentScreen::Home) => {
                self.selected_product().map(|p| Dialog::Order(OrderDraft::new(p)))
            }
            Screen::Student(StudentScreen::Upcoming) => self
                .selected_product()
                .map(|p| Dialog::PreSelect(PreSelectDraft::new(p))),
            Screen::Staff(StaffScreen::Home | StaffScreen::Orders) => self
                .selected_order()
                .filter(Order::is_actionable)
                .map(|order| Dialog::OrderAction { order, slot: None }),
            Screen::Staff(StaffScreen::Products) => self
                .selected_product()
                .map(|p| Dialog::Product(ProductEditor::new(&self.store, Some(p)))),
            _ => None,
        };
    }

    /// Open the "add" dialog of the staff products or upcoming screen.
    pub fn add_new(&mut self) {
        self.dialog = match self.screen {
            Screen::Staff(StaffScreen::Products) => {
                Some(Dialog::Product(ProductEditor::new(&self.store, None)))
            }
            Screen::Staff(StaffScreen::Upcoming) => {
                Some(Dialog::PlannedMeal(PlannedMealForm::new(&self.store)))
            }
            _ => None,
        };
    }

    /// Ask to delete the selected product or remove the selected planned meal.
    pub fn delete_selected(&mut self) {
        let pending = match self.screen {
            Screen::Staff(StaffScreen::Products) => {
                self.selected_product().map(PendingDelete::Product)
            }
            Screen::Staff(StaffScreen::Upcoming) => self
                .selected_preselection()
                .map(|p| PendingDelete::PlannedMeal(p.meal)),
            _ => None,
        };
        if let Some(pending) = pending {
            self.dialog = Some(Dialog::ConfirmDelete(pending));
        }
    }

    /// Toggle edit mode on the selected planned row; leaving it saves.
    pub fn toggle_edit_selected(&mut self) {
        if self.screen != Screen::Staff(StaffScreen::Upcoming) {
            return;
        }
        let Some(preselection) = self.selected_preselection() else {
            return;
        };
        if let Some(i) = self.view.editing.iter().position(|id| *id == preselection.id) {
            self.view.editing.remove(i);
            Actions::new(&self.session, &mut self.toasts).save_planned_changes(&preselection);
        } else {
            self.view.editing.push(preselection.id);
        }
    }

    pub fn is_editing(&self, preselection: &PreSelection) -> bool {
        self.view.editing.contains(&preselection.id)
    }

    /// Student cancels the selected pending order.
    pub fn cancel_selected(&mut self) {
        if self.screen != Screen::Student(StudentScreen::History) {
            return;
        }
        if let Some(order) = self.selected_order().filter(Order::is_actionable) {
            Actions::new(&self.session, &mut self.toasts).cancel_order(&order);
        }
    }

    /// Confirm the open dialog. It closes unless the submission was rejected.
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        let mut actions = Actions::new(&self.session, &mut self.toasts);
        let keep_open = match &dialog {
            Dialog::Order(draft) => {
                actions.confirm_order(draft);
                false
            }
            Dialog::PreSelect(draft) => {
                actions.preselect(draft);
                false
            }
            Dialog::OrderAction { order, slot } => {
                actions.suggest_time(order, slot.as_deref()).is_err()
            }
            Dialog::Product(editor) => actions
                .submit_product(&editor.form(&self.store), editor.editing.as_ref())
                .is_err(),
            Dialog::PlannedMeal(form) => actions.add_planned_meal(&self.store, form).is_err(),
            Dialog::ConfirmDelete(PendingDelete::Product(product)) => {
                actions.delete_product(product);
                false
            }
            Dialog::ConfirmDelete(PendingDelete::PlannedMeal(product)) => {
                actions.remove_planned_meal(product);
                false
            }
            Dialog::Help => false,
        };
        if keep_open {
            self.dialog = Some(dialog);
        }
    }

    pub fn accept_dialog_order(&mut self) {
        if let Some(Dialog::OrderAction { order, .. }) = self.dialog.take() {
            Actions::new(&self.session, &mut self.toasts).accept_order(&order);
        }
    }

    pub fn refuse_dialog_order(&mut self) {
        if let Some(Dialog::OrderAction { order, .. }) = self.dialog.take() {
            Actions::new(&self.session, &mut self.toasts).refuse_order(&order);
        }
    }

    /// Left/right inside a dialog: time slot or meal period.
    pub fn step_dialog(&mut self, delta: isize) {
        match &mut self.dialog {
            Some(Dialog::Order(draft)) => {
                draft.pickup_time = step_slot(&order_slots(), &draft.pickup_time, delta);
            }
            Some(Dialog::PreSelect(draft)) => {
                draft.preferred_time = step_slot(&preselect_slots(), &draft.preferred_time, delta);
            }
            Some(Dialog::OrderAction { slot, .. }) => {
                // The first step only reveals the default slot.
                let next = match slot.as_deref() {
                    None => DEFAULT_SLOT.to_string(),
                    Some(current) => step_slot(&order_slots(), current, delta),
                };
                *slot = Some(next);
            }
            Some(Dialog::Product(editor)) if editor.field() == ProductField::Category => {
                editor.cycle_category(&self.store, delta);
            }
            Some(Dialog::PlannedMeal(form)) => {
                let periods = canteen_core::MealPeriod::ALL;
                let current = periods.iter().position(|p| *p == form.period).unwrap_or(0);
                form.period = periods[wrap(current, delta, periods.len())];
            }
            _ => {}
        }
    }

    /// Up/down in the planned-meal dialog picks the product.
    pub fn step_planned_product(&mut self, delta: isize) {
        if let Some(Dialog::PlannedMeal(form)) = &mut self.dialog {
            let products = self.store.products();
            let current = products
                .iter()
                .position(|p| p.id == form.product_id)
                .unwrap_or(0);
            if let Some(product) = products.get(wrap(current, delta, products.len())) {
                form.product_id = product.id.to_string();
            }
        }
    }

    pub fn adjust_quantity(&mut self, increase: bool) {
        let quantity = match &mut self.dialog {
            Some(Dialog::Order(draft)) => &mut draft.quantity,
            Some(Dialog::PreSelect(draft)) => &mut draft.quantity,
            _ => return,
        };
        if increase {
            quantity.increment();
        } else {
            quantity.decrement();
        }
    }

    pub fn toggle_fulfillment(&mut self) {
        if let Some(Dialog::Order(draft)) = &mut self.dialog {
            draft.fulfillment = draft.fulfillment.toggled();
        }
    }
}

/// `(index + delta) mod len`, for `len > 0`.
fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

fn first_line(textarea: &TextArea<'_>) -> String {
    textarea.lines().first().cloned().unwrap_or_default()
}

/// Single-line input prefilled with `value`.
pub fn text_input(value: &str) -> TextArea<'static> {
    let mut ta = TextArea::new(vec![value.to_string()]);
    ta.set_cursor_line_style(Style::default());
    ta.move_cursor(tui_textarea::CursorMove::End);
    ta
}
