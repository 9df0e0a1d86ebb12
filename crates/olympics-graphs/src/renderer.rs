//! Chart rendering trait shared by every chart primitive

use crate::palette;
use crate::{ColorScheme, StyleConfig};
use olympics_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Something that can draw itself into one panel of a figure
pub trait GraphRenderer {
    /// Draw into `area` under the panel `title`
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        style: &StyleConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static;

    /// True when there is nothing to plot
    fn is_empty(&self) -> bool;

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        let named: &[&str] = match scheme {
            ColorScheme::Default => &palette::CATEGORY10,
            ColorScheme::Viridis => &palette::VIRIDIS,
            ColorScheme::Set1 => &palette::SET1,
            ColorScheme::Custom(colors) => {
                return colors
                    .iter()
                    .map(|color_str| self.parse_color(color_str))
                    .collect()
            }
        };
        named.iter().map(|color_str| self.parse_color(color_str)).collect()
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        parse_hex_color(color_str).unwrap_or(RGBColor(0, 0, 0))
    }
}

/// Parse `#RRGGBB`
pub fn parse_hex_color(color_str: &str) -> Option<RGBColor> {
    let hex = color_str.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Cycle through `colors`; black when the palette is empty
pub fn pick(colors: &[RGBColor], index: usize) -> RGBColor {
    if colors.is_empty() {
        RGBColor(0, 0, 0)
    } else {
        colors[index % colors.len()]
    }
}

/// Draws the panel title and a centered placeholder in place of a chart
pub fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    message: &str,
    style: &StyleConfig,
) -> Result<()>
where
    DB::ErrorType: std::error::Error + Send + Sync + 'static,
{
    let body = area.titled(title, style.title_font.as_font())?;
    let (width, height) = body.dim_in_pixel();
    let font = style.axis_font.as_font().into_font().color(&RGBColor(128, 128, 128));
    let x = (width as i32 / 2) - (message.chars().count() as i32 * style.axis_font.size as i32 / 4);
    body.draw(&Text::new(message.to_string(), (x.max(0), height as i32 / 2), font))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl GraphRenderer for MockRenderer {
        fn draw<DB: DrawingBackend>(
            &self,
            _area: &DrawingArea<DB, Shift>,
            _title: &str,
            _style: &StyleConfig,
        ) -> Result<()>
        where
            DB::ErrorType: std::error::Error + Send + Sync + 'static,
        {
            Ok(())
        }

        fn is_empty(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#DABE1E"), RGBColor(218, 190, 30));
        assert_eq!(renderer.parse_color("#c0c0c0"), RGBColor(192, 192, 192));
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#12345"), RGBColor(0, 0, 0));
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_color_schemes() {
        let renderer = MockRenderer;

        assert_eq!(renderer.get_colors(&ColorScheme::Default).len(), 8);
        assert_eq!(renderer.get_colors(&ColorScheme::Viridis).len(), 10);
        assert_eq!(renderer.get_colors(&ColorScheme::Set1)[0], RGBColor(228, 26, 28));

        let custom = ColorScheme::Custom(vec!["#808080".to_string(), "#FFA500".to_string()]);
        assert_eq!(
            renderer.get_colors(&custom),
            vec![RGBColor(128, 128, 128), RGBColor(255, 165, 0)]
        );
    }

    #[test]
    fn test_pick_cycles() {
        let colors = [RGBColor(1, 1, 1), RGBColor(2, 2, 2)];
        assert_eq!(pick(&colors, 3), RGBColor(2, 2, 2));
        assert_eq!(pick(&[], 3), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_mock_renderer_reports_empty() {
        assert!(MockRenderer.is_empty());
    }
}
