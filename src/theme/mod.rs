pub mod color;

use serde::{Deserialize, Serialize};

pub use color::{ColorPalette, HomeColors, OrderFormColors, ThemeColors};

/// Main theme management structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Create a new professional dark theme
    pub fn professional_dark() -> Self {
        Self {
            name: "Professional Dark".to_string(),
            description: "Clean, minimalistic dark theme".to_string(),
            colors: ThemeColors::professional_dark(),
        }
    }

    /// Create a high contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            description: "High contrast theme for better accessibility".to_string(),
            colors: ThemeColors::high_contrast(),
        }
    }

    /// Create a Gruvbox dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            description: "Retro groove dark theme with warm, earthy colors".to_string(),
            colors: ThemeColors::gruvbox_dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

/// Registry of the built-in themes
#[derive(Debug)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = vec![
            Theme::gruvbox_dark(),
            Theme::professional_dark(),
            Theme::high_contrast(),
        ];

        Self {
            current_theme: themes[0].name.clone(),
            themes,
        }
    }

    /// Get the currently active theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name == self.current_theme)
            .unwrap_or(&self.themes[0])
    }

    /// Switch to a different theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        if self.themes.iter().any(|t| t.name == theme_name) {
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", theme_name))
        }
    }

    /// Get list of available themes
    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Resolve a configured theme name, falling back to the default
    pub fn resolve(theme_name: &str) -> Theme {
        let mut manager = Self::new();
        if let Err(e) = manager.set_theme(theme_name) {
            tracing::warn!("{}, using {}", e, manager.current_theme().name);
        }
        manager.current_theme().clone()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(ThemeManager::resolve("Neon Pink").name, "Gruvbox Dark");
        assert_eq!(ThemeManager::resolve("High Contrast").name, "High Contrast");
    }

    #[test]
    fn set_theme_rejects_unknown_names() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_theme("Professional Dark").is_ok());
        assert_eq!(manager.current_theme().name, "Professional Dark");
        assert!(manager.set_theme("Solarized").is_err());
        assert_eq!(manager.available_themes().len(), 3);
    }
}
