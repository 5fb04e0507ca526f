//! Light and dark color palettes

use canteen_core::{NotificationLevel, OrderStatus, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Brand green used for accents in both themes.
const BRAND: Color = Color::Rgb(60, 173, 42);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(18, 18, 18),
                surface: Color::Rgb(32, 32, 32),
                fg: Color::White,
                muted: Color::DarkGray,
                accent: BRAND,
                error: Color::Rgb(239, 68, 68),
                warning: Color::Rgb(234, 179, 8),
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                surface: Color::Rgb(235, 235, 235),
                fg: Color::Black,
                muted: Color::Gray,
                accent: BRAND,
                error: Color::Rgb(220, 38, 38),
                warning: Color::Rgb(202, 138, 4),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Highlight of the selected row, chip or tab.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, status: OrderStatus) -> Style {
        let color = match status {
            OrderStatus::Pending => self.warning,
            OrderStatus::Accepted | OrderStatus::Paid => self.accent,
            OrderStatus::Refused => self.error,
            OrderStatus::Cancelled => self.muted,
        };
        Style::default().fg(color)
    }

    pub fn notification(&self, level: NotificationLevel) -> Style {
        let color = match level {
            NotificationLevel::Success => self.accent,
            NotificationLevel::Error => self.error,
        };
        Style::default()
            .bg(self.surface)
            .fg(color)
            .add_modifier(Modifier::BOLD)
    }
}
