use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base color palette shared by every screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // Special purpose colors
    pub accent: Color,
    pub disabled: Color,
}

/// Complete theme color scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,
    pub home: HomeColors,
    pub order_form: OrderFormColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeColors {
    pub title: Color,
    pub crust: Color,
    pub cheese: Color,
    pub topping: Color,
    pub hint: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFormColors {
    pub label: Color,
    pub input: Color,
    pub field_error: Color,
    pub checkbox_checked: Color,
    pub checkbox_unchecked: Color,
    pub submit_enabled: Color,
    pub submit_disabled: Color,
    pub success_banner: Color,
    pub failure_banner: Color,
}

impl ThemeColors {
    fn from_palette(palette: ColorPalette, home: HomeColors) -> Self {
        let order_form = OrderFormColors {
            label: palette.text_secondary,
            input: palette.text_primary,
            field_error: palette.error,
            checkbox_checked: palette.accent,
            checkbox_unchecked: palette.text_muted,
            submit_enabled: palette.success,
            submit_disabled: palette.disabled,
            success_banner: palette.success,
            failure_banner: palette.error,
        };

        Self {
            palette,
            home,
            order_form,
        }
    }

    /// Professional dark theme colors
    pub fn professional_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(16, 16, 20),

            text_primary: Color::Rgb(224, 224, 230),
            text_secondary: Color::Rgb(160, 160, 168),
            text_muted: Color::Rgb(112, 112, 120),
            text_inverse: Color::Rgb(16, 16, 20),

            border: Color::Rgb(64, 64, 72),
            border_focused: Color::Rgb(88, 166, 255),
            selection: Color::Rgb(88, 166, 255),

            success: Color::Rgb(76, 175, 80),
            error: Color::Rgb(244, 67, 54),

            accent: Color::Rgb(88, 166, 255),
            disabled: Color::Rgb(96, 96, 104),
        };

        let home = HomeColors {
            title: palette.accent,
            crust: Color::Rgb(205, 133, 63),
            cheese: Color::Rgb(255, 213, 79),
            topping: Color::Rgb(229, 57, 53),
            hint: palette.text_muted,
        };

        Self::from_palette(palette, home)
    }

    /// High contrast theme for accessibility
    pub fn high_contrast() -> Self {
        let palette = ColorPalette {
            background: Color::Black,

            text_primary: Color::White,
            text_secondary: Color::Rgb(200, 200, 200),
            text_muted: Color::Rgb(160, 160, 160),
            text_inverse: Color::Black,

            border: Color::Rgb(128, 128, 128),
            border_focused: Color::Yellow,
            selection: Color::Yellow,

            success: Color::Green,
            error: Color::Red,

            accent: Color::Yellow,
            disabled: Color::Rgb(80, 80, 80),
        };

        let home = HomeColors {
            title: Color::Yellow,
            crust: Color::White,
            cheese: Color::Yellow,
            topping: Color::Red,
            hint: palette.text_muted,
        };

        Self::from_palette(palette, home)
    }

    /// Gruvbox dark theme - authentic retro groove colors
    pub fn gruvbox_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(40, 40, 40), // #282828 - dark0

            text_primary: Color::Rgb(235, 219, 178), // #ebdbb2 - light1
            text_secondary: Color::Rgb(213, 196, 161), // #d5c4a1 - light2
            text_muted: Color::Rgb(189, 174, 147),   // #bdae93 - light3
            text_inverse: Color::Rgb(40, 40, 40),    // #282828 - dark0

            border: Color::Rgb(102, 92, 84), // #665c54 - dark4
            border_focused: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            selection: Color::Rgb(131, 165, 152), // #83a598 - bright_blue

            success: Color::Rgb(152, 151, 26), // #98971a - bright_green
            error: Color::Rgb(204, 36, 29),    // #cc241d - bright_red

            accent: Color::Rgb(250, 189, 47), // #fabd2f - bright_yellow
            disabled: Color::Rgb(146, 131, 116), // #928374 - gray
        };

        let home = HomeColors {
            title: Color::Rgb(250, 189, 47),  // #fabd2f - bright_yellow
            crust: Color::Rgb(214, 93, 14),   // #d65d0e - orange
            cheese: Color::Rgb(215, 153, 33), // #d79921 - yellow
            topping: Color::Rgb(251, 73, 52), // #fb4934 - bright_red
            hint: palette.text_muted,
        };

        Self::from_palette(palette, home)
    }
}
