//! Crossterm event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::{App, Dialog, InputMode, ProductField};

/// Poll crossterm events and update app state.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    // Age notification toasts.
    app.tick();

    Ok(())
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // ── Keys that work everywhere ───────────────────────────────
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return;
        }
        (_, KeyCode::F(2)) => {
            app.cycle_locale();
            return;
        }
        (_, KeyCode::F(3)) => {
            app.toggle_theme();
            return;
        }
        _ => {}
    }

    if !app.signed_in {
        handle_login_key(app, key);
    } else if app.dialog.is_some() {
        handle_dialog_key(app, key);
    } else if matches!(app.input, InputMode::Search(_)) {
        handle_search_key(app, key);
    } else if matches!(app.input, InputMode::Command(_)) {
        handle_command_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus();
        }
        KeyCode::Enter => app.submit_login(),
        _ => {
            app.login.focused_mut().input(Event::Key(key));
        }
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::F(4) => app.sign_out(),

        // ── Navigation ─────────────────────────────────────────
        KeyCode::Tab => app.step_screen(1),
        KeyCode::BackTab => app.step_screen(-1),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            let screens = canteen_core::nav_screens(app.session.role());
            if let Some(screen) = screens.get(index) {
                app.navigate_page(screen.page_id());
            }
        }

        // ── Lists and filters ──────────────────────────────────
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_filter(-1),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_filter(1),
        KeyCode::Esc => app.set_query(String::new()),

        // ── Actions ────────────────────────────────────────────
        KeyCode::Enter => app.activate(),
        KeyCode::Char('n') => app.add_new(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('e') => app.toggle_edit_selected(),
        KeyCode::Char('c') => app.cancel_selected(),

        // ── Input modes ────────────────────────────────────────
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char(':') => app.start_command(),
        KeyCode::Char('?') => app.dialog = Some(Dialog::Help),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.input = InputMode::Normal,
        KeyCode::Esc => {
            app.input = InputMode::Normal;
            app.set_query(String::new());
        }
        _ => {
            if let InputMode::Search(textarea) = &mut app.input {
                textarea.input(Event::Key(key));
                let query = textarea.lines().first().cloned().unwrap_or_default();
                app.set_query(query);
            }
        }
    }
}

fn handle_command_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input = InputMode::Normal,
        KeyCode::Enter => {
            let line = match &app.input {
                InputMode::Command(textarea) => textarea.lines().join(" "),
                _ => String::new(),
            };
            app.input = InputMode::Normal;
            app.run_command(&line);
        }
        KeyCode::Tab => {
            if let InputMode::Command(textarea) = &app.input {
                let typed = textarea.lines().join(" ");
                if let Some(name) = app.command_suggestions(&typed).first() {
                    app.input = InputMode::Command(super::app::text_input(&format!("{name} ")));
                }
            }
        }
        _ => {
            if let InputMode::Command(textarea) = &mut app.input {
                textarea.input(Event::Key(key));
            }
        }
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc || matches!(app.dialog, Some(Dialog::Help)) {
        app.dialog = None;
        return;
    }

    // The product dialog routes typing into its text fields. Left/right
    // step the category picker and move the cursor everywhere else.
    if let Some(Dialog::Product(editor)) = &app.dialog {
        let on_category = editor.field() == ProductField::Category;
        match key.code {
            KeyCode::Enter => app.confirm_dialog(),
            KeyCode::Left if on_category => app.step_dialog(-1),
            KeyCode::Right if on_category => app.step_dialog(1),
            _ => {
                if let Some(Dialog::Product(editor)) = &mut app.dialog {
                    match key.code {
                        KeyCode::Tab | KeyCode::Down => editor.next_field(),
                        KeyCode::BackTab | KeyCode::Up => editor.prev_field(),
                        _ => {
                            if let Some(textarea) = editor.focused_text_mut() {
                                textarea.input(Event::Key(key));
                            }
                        }
                    }
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.confirm_dialog(),
        KeyCode::Left => app.step_dialog(-1),
        KeyCode::Right => app.step_dialog(1),
        KeyCode::Up => app.step_planned_product(-1),
        KeyCode::Down => app.step_planned_product(1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_quantity(true),
        KeyCode::Char('-') => app.adjust_quantity(false),
        KeyCode::Char('t') => app.toggle_fulfillment(),
        KeyCode::Char('a') => app.accept_dialog_order(),
        KeyCode::Char('r') => app.refuse_dialog_order(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canteen_core::{FixtureStore, Locale, Role, Screen, SessionContext, StudentScreen};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(SessionContext::new(), FixtureStore::load(), 5)
    }

    #[test]
    fn test_login_by_keyboard() {
        let mut app = app();
        type_text(&mut app, "ahmed");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");
        press(&mut app, KeyCode::Enter);
        assert!(app.signed_in);
        assert_eq!(app.session.role(), Role::Student);
        assert_eq!(app.screen, Screen::Student(StudentScreen::Home));
    }

    #[test]
    fn test_language_switch_on_login() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.session.locale(), Locale::Fr);
        assert!(!app.signed_in);
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = app();
        app.signed_in = true;
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "pizza");
        assert_eq!(app.view.query, "pizza");
        assert_eq!(app.products_view().len(), 2);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.input, InputMode::Normal));
        assert_eq!(app.view.query, "pizza");
        press(&mut app, KeyCode::Esc);
        assert!(app.view.query.is_empty());
    }

    #[test]
    fn test_command_line() {
        let mut app = app();
        app.signed_in = true;
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "page history");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Student(StudentScreen::History));

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "bogus");
        press(&mut app, KeyCode::Enter);
        assert!(app.toasts.iter().last().unwrap().is_error());
    }

    #[test]
    fn test_dialog_escape_and_help() {
        let mut app = app();
        app.signed_in = true;
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.dialog, Some(Dialog::Order(_))));
        press(&mut app, KeyCode::Esc);
        assert!(app.dialog.is_none());

        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.dialog, Some(Dialog::Help)));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_product_dialog_typing() {
        let mut app = app();
        app.session.set_role(Role::Staff);
        app.signed_in = true;
        app.navigate_page("products");
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Soup");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3.00");
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_none());
        assert_eq!(
            app.toasts.iter().last().unwrap().message,
            "Product \"Soup\" added successfully!"
        );
    }

    #[test]
    fn test_product_dialog_arrows_move_cursor() {
        let mut app = app();
        app.session.set_role(Role::Staff);
        app.signed_in = true;
        app.navigate_page("products");
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Soup");
        press(&mut app, KeyCode::Left);
        type_text(&mut app, "X");
        let Some(Dialog::Product(editor)) = &app.dialog else {
            panic!("product dialog closed");
        };
        assert_eq!(editor.texts[0].lines()[0], "SouXp");
        let category = editor.category;

        // On the category picker the arrows still cycle categories.
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Right);
        let Some(Dialog::Product(editor)) = &app.dialog else {
            panic!("product dialog closed");
        };
        assert_eq!(editor.field(), ProductField::Category);
        assert_ne!(editor.category, category);
    }

    #[test]
    fn test_delete_key_asks_first() {
        let mut app = app();
        app.session.set_role(Role::Staff);
        app.signed_in = true;
        app.navigate_page("products");
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.dialog, Some(Dialog::ConfirmDelete(_))));
        press(&mut app, KeyCode::Esc);
        assert!(app.dialog.is_none());
        assert!(app.toasts.is_empty());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_none());
        assert_eq!(app.toasts.iter().last().unwrap().message, "Deleted Espresso");
    }

    #[test]
    fn test_edit_key_on_planned_rows() {
        let mut app = app();
        app.session.set_role(Role::Staff);
        app.signed_in = true;
        app.navigate_page("upcoming");
        press(&mut app, KeyCode::Char('e'));
        assert!(app.toasts.is_empty());
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.toasts.iter().last().unwrap().message, "Changes saved");
    }
}
