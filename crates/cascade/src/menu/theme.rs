//! Named theme values for the dropdown menu.
//!
//! The menu never paints from raw literals; everything visual it colors comes
//! from here. Defaults reproduce the classic appearance: white strip, 90%
//! white highlight for the open column, 30% black backdrop.

use cascade_render::{Color, Font, FontFamily};

/// Colors and type used by [`DropDownMenu`](crate::menu::DropDownMenu).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTheme {
    /// Background of a column plate when its column is closed.
    pub plate: Color,
    /// Background of a column plate while its column is open; also the
    /// highlight behind the currently selected row.
    pub plate_selected: Color,
    /// Column title text color.
    pub text: Color,
    /// Indicator triangle fill color.
    pub indicator: Color,
    /// Row list background.
    pub row_background: Color,
    /// Row text color.
    pub row_text: Color,
    /// Row separator and strip hairline color.
    pub separator: Color,
    /// Backdrop color at full opacity; its alpha is the fully-open opacity.
    pub backdrop: Color,
    /// Font for column titles and row text.
    pub font: Font,
}

impl MenuTheme {
    /// Set the title/row text color (builder pattern).
    pub fn with_text(mut self, color: Color) -> Self {
        self.text = color;
        self.row_text = color;
        self
    }

    /// Set the indicator color (builder pattern).
    pub fn with_indicator(mut self, color: Color) -> Self {
        self.indicator = color;
        self
    }

    /// Set the font (builder pattern).
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the backdrop color, alpha included (builder pattern).
    pub fn with_backdrop(mut self, color: Color) -> Self {
        self.backdrop = color;
        self
    }
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            plate: Color::WHITE,
            plate_selected: Color::from_rgb(0.9, 0.9, 0.9),
            text: Color::BLACK,
            indicator: Color::BLACK,
            row_background: Color::WHITE,
            row_text: Color::BLACK,
            separator: Color::LIGHT_GRAY,
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            font: Font::new(FontFamily::SansSerif, 14.0),
        }
    }
}
