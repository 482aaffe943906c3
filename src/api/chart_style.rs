use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{Color, Gradient};

/// Host-selected appearance mode. The build path takes this explicitly so a
/// frame is a pure function of view state plus scheme, with no ambient
/// environment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Style contract for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: Color,
    pub accent_color: Color,
    pub gradient: Gradient,
    pub text_color: Color,
    pub legend_text_color: Color,
    pub grid_line_color: Color,
    pub drop_shadow_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            accent_color: palette::ORANGE_START,
            gradient: gradients::ORANGE,
            text_color: Color::BLACK,
            legend_text_color: Color::rgb(0.5, 0.5, 0.5),
            grid_line_color: palette::GRID_LIGHT,
            drop_shadow_color: Color::rgb(0.5, 0.5, 0.5),
        }
    }
}

impl ChartStyle {
    /// Counterpart style applied when the host reports a dark scheme and the
    /// caller supplied no explicit dark variant.
    #[must_use]
    pub fn dark_default() -> Self {
        Self {
            background_color: Color::BLACK,
            accent_color: palette::ORANGE_START,
            gradient: gradients::ORANGE,
            text_color: Color::WHITE,
            legend_text_color: Color::WHITE,
            grid_line_color: palette::GRID_DARK,
            drop_shadow_color: Color::rgb(0.5, 0.5, 0.5),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.background_color.validate()?;
        self.accent_color.validate()?;
        self.gradient.validate()?;
        self.text_color.validate()?;
        self.legend_text_color.validate()?;
        self.grid_line_color.validate()?;
        self.drop_shadow_color.validate()
    }
}

/// Named colors shared by the bundled styles and gradients.
pub mod palette {
    use crate::render::Color;

    pub const ORANGE_START: Color = Color::rgb(0.925, 0.137, 0.004);
    pub const ORANGE_END: Color = Color::rgb(1.0, 0.471, 0.173);
    pub const PURPLE: Color = Color::rgb(0.482, 0.459, 1.0);
    pub const NEON_BLUE: Color = Color::rgb(0.435, 0.918, 1.0);
    pub const UPPER_BLUE: Color = Color::rgb(0.761, 0.91, 1.0);
    pub const LOWER_BLUE: Color = Color::rgb(0.945, 0.976, 1.0);
    pub const GREEN_START: Color = Color::rgb(0.043, 0.804, 0.969);
    pub const GREEN_END: Color = Color::rgb(0.102, 0.71, 0.188);
    pub const PINK: Color = Color::rgb(1.0, 0.341, 0.651);
    pub const LEGEND_TEXT: Color = Color::rgb(0.655, 0.651, 0.659);
    pub const DARK_PURPLE: Color = Color::rgb(0.106, 0.125, 0.369);
    pub const GRID_LIGHT: Color = Color::rgb(0.91, 0.91, 0.91);
    pub const GRID_DARK: Color = Color::rgb(0.24, 0.24, 0.24);
}

/// Ready-made series gradients.
pub mod gradients {
    use crate::render::Gradient;

    use super::palette;

    pub const ORANGE: Gradient = Gradient::new(palette::ORANGE_START, palette::ORANGE_END);
    pub const BLUE: Gradient = Gradient::new(palette::PURPLE, palette::NEON_BLUE);
    pub const GREEN: Gradient = Gradient::new(palette::GREEN_START, palette::GREEN_END);
    pub const SKY_BLUE: Gradient = Gradient::new(palette::LOWER_BLUE, palette::UPPER_BLUE);
    pub const PURPLE: Gradient = Gradient::new(palette::PURPLE, palette::UPPER_BLUE);
    pub const PURPLE_PINK: Gradient = Gradient::new(palette::PURPLE, palette::PINK);
    pub const NEON_PURPLE: Gradient = Gradient::new(palette::NEON_BLUE, palette::PURPLE);
    pub const ORANGE_PINK: Gradient = Gradient::new(palette::ORANGE_START, palette::PINK);
}
