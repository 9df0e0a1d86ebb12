//! Styling types shared by every chart

use olympics_config::GraphSettings;
use serde::{Deserialize, Serialize};

/// Color scheme for charts that color by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// D3 category10
    Default,
    /// Ten-step Viridis sequence
    Viridis,
    /// ColorBrewer Set1
    Set1,
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl FontConfig {
    /// Borrowed form plotters accepts wherever it takes a font
    pub fn as_font(&self) -> (&str, u32) {
        (self.family.as_str(), self.size)
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 15,
            right: 20,
            bottom: 45,
            left: 60,
        }
    }
}

/// Styling applied to every panel of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub background_color: String,
    pub figure_title_font: FontConfig,
    pub title_font: FontConfig,
    pub axis_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
    pub show_grid: bool,
    /// Shown in place of a chart that has nothing to plot
    pub no_data_label: String,
    /// Value label of a bar whose value is unknown
    pub missing_value_label: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            figure_title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 22,
            },
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 16,
            },
            axis_font: FontConfig::default(),
            label_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 12,
            },
            margins: MarginConfig::default(),
            show_grid: true,
            no_data_label: "No data".to_string(),
            missing_value_label: "n/a".to_string(),
        }
    }
}

impl From<&GraphSettings> for StyleConfig {
    fn from(settings: &GraphSettings) -> Self {
        let font = |size: u32| FontConfig {
            family: settings.font_family.clone(),
            size,
        };
        Self {
            background_color: settings.background_color.clone(),
            figure_title_font: font(settings.font_size + 8),
            title_font: font(settings.font_size + 2),
            axis_font: font(settings.font_size),
            label_font: font(settings.font_size.saturating_sub(2).max(8)),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_settings() {
        let settings = GraphSettings {
            font_family: "Helvetica".to_string(),
            font_size: 12,
            background_color: "#FAFAFA".to_string(),
            ..GraphSettings::default()
        };
        let style = StyleConfig::from(&settings);

        assert_eq!(style.background_color, "#FAFAFA");
        assert_eq!(style.title_font.as_font(), ("Helvetica", 14));
        assert_eq!(style.figure_title_font.size, 20);
        assert_eq!(style.label_font.size, 10);
    }
}
