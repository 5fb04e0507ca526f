//! TUI rendering with ratatui

use canteen_core::{nav_screens, Role};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::{
    App, Dialog, InputMode, LoginField, PendingDelete, ProductEditor, ProductField,
};
use super::screens;
use super::theme::Palette;

/// Main draw function: login form or the signed-in layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.session.theme());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    if !app.signed_in {
        draw_login(frame, app, &palette);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top bar
            Constraint::Min(5),    // screen body
            Constraint::Length(app.toasts.len() as u16),
            Constraint::Length(1), // search / command line
            Constraint::Length(1), // bottom navigation
        ])
        .split(frame.area());

    draw_top_bar(frame, app, &palette, outer[0]);
    screens::draw(frame, app, &palette, outer[1]);
    draw_toasts(frame, app, &palette, outer[2]);
    draw_input(frame, app, &palette, outer[3]);
    draw_nav(frame, app, &palette, outer[4]);

    if let Some(dialog) = &app.dialog {
        draw_dialog(frame, app, dialog, &palette);
    }
}

/// Text alignment for the active locale's writing direction.
pub fn alignment(app: &App) -> Alignment {
    if app.session.locale().is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn role_label(app: &App) -> &'static str {
    match app.session.role() {
        Role::Student => app.session.t("studentRole"),
        Role::Staff => app.session.t("staffRole"),
    }
}

// ── login ───────────────────────────────────────────────────────────────

fn draw_login(frame: &mut Frame, app: &App, palette: &Palette) {
    let t = |key: &'static str| app.session.t(key);
    let area = centered(frame.area(), 50, 20);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" {} ", t("appTitle")))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block.style(palette.base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(1), // submit hint
            Constraint::Min(4),    // demo info
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(t("universityRestaurant"), palette.title())),
        Line::from(Span::styled(t("signInToContinue"), palette.muted())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let fields = [
        (LoginField::Username, &app.login.username, "username", "enterUsername"),
        (LoginField::Password, &app.login.password, "password", "enterPassword"),
    ];
    for (row, (field, textarea, label, placeholder)) in fields.into_iter().enumerate() {
        let focused = app.login.focus == field;
        let mut textarea = textarea.clone();
        textarea.set_placeholder_text(t(placeholder));
        textarea.set_placeholder_style(palette.muted());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(palette.accent)
                } else {
                    palette.muted()
                })
                .title(format!(" {} ", t(label))),
        );
        if !focused {
            textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&textarea, rows[1 + row]);
    }

    if let Some(err) = &app.login.error {
        let error = Paragraph::new(t(err.message_key()))
            .style(Style::default().fg(palette.error))
            .alignment(Alignment::Center);
        frame.render_widget(error, rows[3]);
    }

    let submit = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", palette.title()),
        Span::raw(t("signIn")),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(submit, rows[4]);

    let demo = Paragraph::new(vec![
        Line::from(Span::styled(t("demoInfo"), palette.muted())),
        Line::from(t("demoAdmin")),
        Line::from(t("demoStudent")),
        Line::from(Span::styled(
            format!(
                "[F2] {}: {}  [F3] {}: {}",
                t("language"),
                app.session.locale().native_name(),
                t("theme"),
                t(app.session.theme().label_key()),
            ),
            palette.muted(),
        )),
    ])
    .alignment(alignment(app))
    .wrap(Wrap { trim: true });
    frame.render_widget(demo, rows[5]);
}

// ── top bar ─────────────────────────────────────────────────────────────

fn draw_top_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let t = |key: &'static str| app.session.t(key);
    let left = vec![
        Span::styled(format!(" {} ", t("appTitle")), palette.selected()),
        Span::raw(format!(" {} ", role_label(app))),
    ];
    let right = format!(
        "{} [F2] \u{00b7} {} [F3] \u{00b7} {} [F4] ",
        app.session.locale().native_name(),
        t(app.session.theme().label_key()),
        t("signOut"),
    );

    // Pad by display width so Arabic and accented labels line up.
    let used: usize = left.iter().map(|s| s.content.width()).sum::<usize>() + right.width();
    let padding = (area.width as usize).saturating_sub(used);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right, palette.muted()));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.surface).fg(palette.fg));
    frame.render_widget(bar, area);
}

// ── toasts, input line and navigation ───────────────────────────────────

fn draw_toasts(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = app
        .toasts
        .iter()
        .map(|n| Line::from(Span::styled(format!(" {} ", n.message), palette.notification(n.level))))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (prefix, textarea) = match &app.input {
        InputMode::Normal => {
            let hint = Paragraph::new(format!(
                "? {}  / {}  : {}  q {}",
                app.session.t("keyboardShortcuts"),
                app.session.t("search"),
                app.session.t("commands"),
                app.session.t("quit"),
            ))
            .style(palette.muted())
            .alignment(alignment(app));
            frame.render_widget(hint, area);
            return;
        }
        InputMode::Search(textarea) => ("/", textarea),
        InputMode::Command(textarea) => (":", textarea),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(10), Constraint::Length(30)])
        .split(area);
    frame.render_widget(Paragraph::new(prefix).style(palette.title()), chunks[0]);
    frame.render_widget(textarea, chunks[1]);

    if let InputMode::Command(textarea) = &app.input {
        let typed = textarea.lines().join(" ");
        let suggestions = app.command_suggestions(&typed);
        if !suggestions.is_empty() && !typed.is_empty() {
            let line = Paragraph::new(format!("Tab: {}", suggestions.join(" ")))
                .style(palette.muted());
            frame.render_widget(line, chunks[2]);
        }
    }
}

fn draw_nav(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let screens = nav_screens(app.session.role());
    let mut spans = Vec::with_capacity(screens.len() * 2);
    for (i, screen) in screens.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, app.session.t(screen.label_key()));
        let style = if *screen == app.screen {
            palette.selected()
        } else {
            palette.muted()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    let nav = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.surface))
        .alignment(Alignment::Center);
    frame.render_widget(nav, area);
}

// ── dialogs ─────────────────────────────────────────────────────────────

fn draw_dialog(frame: &mut Frame, app: &App, dialog: &Dialog, palette: &Palette) {
    let t = |key: &'static str| app.session.t(key);
    let (title, height) = match dialog {
        Dialog::Order(_) => (t("order").to_string(), 10),
        Dialog::PreSelect(_) => (t("preSelect").to_string(), 9),
        Dialog::OrderAction { order, .. } => (format!("#{} {}", order.id, order.requester), 10),
        Dialog::Product(editor) if editor.editing.is_some() => (t("edit").to_string(), 22),
        Dialog::Product(_) => (t("addNew").to_string(), 22),
        Dialog::PlannedMeal(_) => (t("tomorrowPlanned").to_string(), 8),
        Dialog::ConfirmDelete(_) => (t("delete").to_string(), 6),
        Dialog::Help => (t("keyboardShortcuts").to_string(), 20),
    };

    let area = centered(frame.area(), 56, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" {title} "))
        .style(Style::default().bg(palette.surface).fg(palette.fg));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    if let Dialog::Product(editor) = dialog {
        draw_product_editor(frame, app, editor, palette, inner);
        return;
    }

    let lines = match dialog {
        Dialog::Order(draft) => vec![
            Line::from(Span::styled(app.session.product_name(&draft.product), palette.title())),
            Line::from(""),
            field_line(t("quantity"), format!("- {} +", draft.quantity.get()), palette),
            field_line(t("pickupTime"), format!("< {} >", draft.pickup_time), palette),
            field_line("[t]", t(draft.fulfillment.label_key()).to_string(), palette),
            field_line(t("total"), draft.total().to_string(), palette),
            Line::from(""),
            actions_line(&[("Enter", t("confirm")), ("Esc", t("cancel"))], palette),
        ],
        Dialog::PreSelect(draft) => vec![
            Line::from(Span::styled(app.session.product_name(&draft.product), palette.title())),
            Line::from(""),
            field_line(t("quantity"), format!("- {} +", draft.quantity.get()), palette),
            field_line(t("pickupTime"), format!("< {} >", draft.preferred_time), palette),
            Line::from(""),
            actions_line(&[("Enter", t("preSelect")), ("Esc", t("cancel"))], palette),
        ],
        Dialog::OrderAction { order, slot } => {
            let mut lines: Vec<Line> = order
                .lines
                .iter()
                .map(|line| {
                    Line::from(format!(
                        "{}x {}",
                        line.quantity,
                        app.session.product_name(&line.product)
                    ))
                })
                .collect();
            lines.push(field_line(t("pickupTime"), order.pickup_time.to_string(), palette));
            let slot = match slot {
                Some(slot) => format!("< {slot} >"),
                None => "< --:-- >".to_string(),
            };
            lines.push(field_line(t("suggestTime"), slot, palette));
            lines.push(actions_line(
                &[
                    ("a", t("accept")),
                    ("r", t("refuse")),
                    ("Enter", t("suggestTime")),
                    ("Esc", t("cancel")),
                ],
                palette,
            ));
            lines
        }
        Dialog::PlannedMeal(form) => {
            let product = app
                .store
                .product(&form.product_id)
                .map(|p| app.session.product_name(p))
                .unwrap_or_default();
            vec![
                field_line(t("productName"), format!("\u{2191} {product} \u{2193}"), palette),
                field_line(t("category"), format!("< {} >", t(form.period.label_key())), palette),
                Line::from(""),
                actions_line(&[("Enter", t("addNew")), ("Esc", t("cancel"))], palette),
            ]
        }
        Dialog::ConfirmDelete(pending) => {
            let question = match pending {
                PendingDelete::Product(product) => app
                    .session
                    .t_with("confirmDelete", &[("name", app.session.product_name(product))]),
                PendingDelete::PlannedMeal(product) => app.session.t_with(
                    "confirmRemoveMeal",
                    &[("product", app.session.product_name(product))],
                ),
            };
            vec![
                Line::from(question),
                Line::from(""),
                actions_line(&[("Enter", t("delete")), ("Esc", t("cancel"))], palette),
            ]
        }
        Dialog::Help => help_lines(app, palette),
        Dialog::Product(_) => Vec::new(),
    };

    let body = Paragraph::new(lines)
        .alignment(alignment(app))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

fn draw_product_editor(
    frame: &mut Frame,
    app: &App,
    editor: &ProductEditor,
    palette: &Palette,
    area: Rect,
) {
    let t = |key: &'static str| app.session.t(key);
    let mut constraints = vec![Constraint::Length(3); ProductField::ALL.len()];
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, field) in ProductField::ALL.into_iter().enumerate() {
        let focused = editor.field() == field;
        let label = match field {
            ProductField::NameEn => format!("{} (EN) *", t("productName")),
            ProductField::NameFr => format!("{} (FR)", t("productName")),
            ProductField::NameAr => format!("{} (AR)", t("productName")),
            ProductField::Price => format!("{} *", t("price")),
            ProductField::Category => format!("{} *", t("category")),
            ProductField::Image => t("image").to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(palette.accent)
            } else {
                palette.muted()
            })
            .title(format!(" {label} "));

        match editor.text(field) {
            Some(textarea) => {
                let mut textarea = textarea.clone();
                textarea.set_block(block);
                if !focused {
                    textarea.set_cursor_style(Style::default());
                }
                frame.render_widget(&textarea, rows[row]);
            }
            None => {
                let name = app
                    .store
                    .categories()
                    .get(editor.category)
                    .map(|c| app.session.category_name(c))
                    .unwrap_or_default();
                let picker = Paragraph::new(format!("< {name} >")).block(block);
                frame.render_widget(picker, rows[row]);
            }
        }
    }

    let hint = actions_line(&[("Enter", t("save")), ("Esc", t("cancel"))], palette);
    frame.render_widget(Paragraph::new(hint), rows[ProductField::ALL.len()]);
}

fn help_lines<'a>(app: &'a App, palette: &Palette) -> Vec<Line<'a>> {
    let t = |key: &'static str| app.session.t(key);
    let keys: [(&str, &str); 13] = [
        ("Tab / 1-5", t("navigate")),
        ("\u{2191}\u{2193} j k", t("navigate")),
        ("\u{2190}\u{2192} h l", t("filter")),
        ("Enter", t("confirm")),
        ("n", t("addNew")),
        ("e", t("edit")),
        ("d", t("delete")),
        ("c", t("cancel")),
        ("/", t("search")),
        ("F2", t("language")),
        ("F3", t("theme")),
        ("F4", t("signOut")),
        ("q", t("quit")),
    ];
    let mut lines: Vec<Line> = keys
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!("{key:<12}"), palette.title()),
                Span::raw(*label),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", t("commands")), palette.title()),
        Span::raw(
            app.command_names()
                .iter()
                .map(|name| format!(":{name}"))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    ]));
    lines
}

fn field_line<'a>(label: &str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), palette.muted()),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn actions_line<'a>(actions: &[(&str, &str)], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, label) in actions {
        spans.push(Span::styled(format!("[{key}] "), palette.title()));
        spans.push(Span::raw(format!("{label}  ")));
    }
    Line::from(spans)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canteen_core::{FixtureStore, Locale, SessionContext};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_centered_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 80, 40), area);
    }

    #[test]
    fn test_login_screen_is_localized() {
        let mut app = App::new(SessionContext::new(), FixtureStore::load(), 3);
        assert!(render(&app).contains("Sign in to continue"));
        app.session.set_locale(Locale::Fr);
        assert!(render(&app).contains("Connectez-vous pour continuer"));
    }

    #[test]
    fn test_signed_in_layout() {
        let mut app = App::new(SessionContext::new(), FixtureStore::load(), 3);
        app.signed_in = true;
        let screen = render(&app);
        assert!(screen.contains("Espresso"));
        assert!(screen.contains("History"));

        app.dialog = Some(Dialog::Help);
        assert!(render(&app).contains(":lang"));
    }

    #[test]
    fn test_delete_dialog_asks_in_locale() {
        let store = FixtureStore::load();
        let product = *store.product("1").unwrap();
        let mut app = App::new(SessionContext::new(), store, 3);
        app.signed_in = true;
        app.dialog = Some(Dialog::ConfirmDelete(PendingDelete::Product(product)));
        assert!(render(&app).contains("Are you sure you want to delete Espresso?"));

        app.session.set_locale(Locale::Fr);
        app.dialog = Some(Dialog::ConfirmDelete(PendingDelete::PlannedMeal(product)));
        assert!(render(&app).contains("Retirer Espresso du menu de demain ?"));
    }
}
