//! TUI colon command registry and handler

use crate::cli::tui::app::{App, Dialog};
use anyhow::{bail, Result};
use canteen_core::{Locale, Theme};

/// A colon command definition.
#[derive(Clone)]
pub struct Command {
    pub name: &'static str,
    pub handler: fn(&mut App, &[&str]) -> Result<()>,
}

#[derive(Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.commands.push(Command {
            name: "help",
            handler: |app, _| {
                app.dialog = Some(Dialog::Help);
                Ok(())
            },
        });

        self.commands.push(Command {
            name: "lang",
            handler: |app, args| {
                match args.first() {
                    Some(code) => app.session.set_locale(code.parse::<Locale>()?),
                    None => app.cycle_locale(),
                }
                Ok(())
            },
        });

        self.commands.push(Command {
            name: "theme",
            handler: |app, args| {
                match args.first() {
                    Some(name) => {
                        let theme: Theme = name.parse()?;
                        if theme != app.session.theme() {
                            app.toggle_theme();
                        }
                    }
                    None => app.toggle_theme(),
                }
                Ok(())
            },
        });

        self.commands.push(Command {
            name: "page",
            handler: |app, args| {
                if !app.signed_in {
                    bail!("sign in first");
                }
                app.navigate_page(args.first().copied().unwrap_or("home"));
                Ok(())
            },
        });

        self.commands.push(Command {
            name: "logout",
            handler: |app, _| {
                if app.signed_in {
                    app.sign_out();
                }
                Ok(())
            },
        });

        self.commands.push(Command {
            name: "quit",
            handler: |app, _| {
                app.should_quit = true;
                Ok(())
            },
        });
    }

    pub fn handle(&self, app: &mut App, input: &str) -> Result<()> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((first, args)) = parts.split_first() else {
            return Ok(());
        };

        let cmd_name = first.strip_prefix(':').unwrap_or(*first);

        match self.commands.iter().find(|c| c.name == cmd_name) {
            Some(cmd) => (cmd.handler)(app, args),
            None => bail!("unknown command: :{cmd_name}"),
        }
    }

    /// Command names starting with the typed prefix.
    pub fn get_suggestions(&self, input: &str) -> Vec<&'static str> {
        let search = input.trim_start_matches(':');
        if search.contains(' ') {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|c| c.name.starts_with(search))
            .map(|c| c.name)
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
