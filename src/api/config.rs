use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::{ChartLayout, ChartStyle, ValueFormat};

/// Construction-time setup for a [`super::ChartView`].
///
/// Serializable so hosts can persist and reload chart setup; validation
/// happens when the view is built, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    pub title: Option<String>,
    pub legend: Option<String>,
    pub style: ChartStyle,
    /// Applied for [`super::ColorScheme::Dark`]; a bundled dark style is
    /// substituted when absent.
    pub dark_style: Option<ChartStyle>,
    /// `printf`-style numeric display format, parsed at view construction.
    pub value_specifier: String,
    pub layout: ChartLayout,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: None,
            legend: None,
            style: ChartStyle::default(),
            dark_style: None,
            value_specifier: ValueFormat::DEFAULT_SPECIFIER.to_owned(),
            layout: ChartLayout::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_dark_style(mut self, style: ChartStyle) -> Self {
        self.dark_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_value_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.value_specifier = specifier.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }
}
