//! Theme Engine: light/dark/system theme selection and the CSS variables a UI shell applies.

use std::collections::HashMap;

use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    /// The concrete theme in effect, with `System` resolved.
    fn effective_theme(&self) -> ThemeMode;
    /// Switches to the opposite of the effective theme and returns it.
    fn toggle(&mut self) -> ThemeMode;
    fn detect_system_theme(&self) -> ThemeMode;
    fn get_css_variables(&self) -> HashMap<String, String>;
}

struct Palette {
    background: &'static str,
    card: &'static str,
    foreground: &'static str,
    muted_foreground: &'static str,
    border: &'static str,
    primary: &'static str,
    destructive: &'static str,
}

const DARK: Palette = Palette {
    background: "#0a0a0a",
    card: "#171717",
    foreground: "#fafafa",
    muted_foreground: "#a3a3a3",
    border: "#262626",
    primary: "#fafafa",
    destructive: "#dc2626",
};

const LIGHT: Palette = Palette {
    background: "#ffffff",
    card: "#ffffff",
    foreground: "#0a0a0a",
    muted_foreground: "#737373",
    border: "#e5e5e5",
    primary: "#171717",
    destructive: "#ef4444",
};

pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode) -> Self {
        Self { current_theme: mode }
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn effective_theme(&self) -> ThemeMode {
        match self.current_theme {
            ThemeMode::System => self.detect_system_theme(),
            other => other,
        }
    }

    fn toggle(&mut self) -> ThemeMode {
        let next = match self.effective_theme() {
            ThemeMode::Dark => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
        self.current_theme = next;
        next
    }

    fn detect_system_theme(&self) -> ThemeMode {
        // Desktop preference is only visible through GTK_THEME here.
        match std::env::var("GTK_THEME") {
            Ok(gtk_theme) if gtk_theme.to_lowercase().contains("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    fn get_css_variables(&self) -> HashMap<String, String> {
        let (palette, scheme) = match self.effective_theme() {
            ThemeMode::Dark => (&DARK, "dark"),
            _ => (&LIGHT, "light"),
        };
        let mut vars = HashMap::new();
        vars.insert("--background".into(), palette.background.into());
        vars.insert("--card".into(), palette.card.into());
        vars.insert("--foreground".into(), palette.foreground.into());
        vars.insert("--muted-foreground".into(), palette.muted_foreground.into());
        vars.insert("--border".into(), palette.border.into());
        vars.insert("--primary".into(), palette.primary.into());
        vars.insert("--destructive".into(), palette.destructive.into());
        vars.insert("color-scheme".into(), scheme.into());
        vars
    }
}
