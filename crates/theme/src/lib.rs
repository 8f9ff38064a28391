pub mod colors;
pub mod font;
pub mod gradient;
pub mod style;

pub use colors::{hex_to_rgba, Color};
pub use font::{classify_font_family, Font, FontDesign, FontWeight};
pub use gradient::{gradient_points, LinearGradient, UnitPoint};
pub use style::{Background, Border, Highlight, Shadow};

use hw_config::StyleConfig;
use serde::Serialize;

/// Compiled theme derived from a resolved [`StyleConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: unreadable color strings
/// come out as opaque black.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary:        Color,
    pub secondary:      Color,
    pub text:           Color,
    pub text_secondary: Color,
    pub background:     Color,
    pub border_color:   Color,

    pub title_font:   Font,
    pub body_font:    Font,
    pub caption_font: Font,

    pub corner_radius: f32,
    pub border_width:  f32,
    /// Shadow color before the per-layout offset is applied.  Transparent when
    /// shadows are disabled.
    pub shadow_color:  Color,
    pub shadow_radius: f32,

    /// `None` when the gradient is disabled or has no stops.
    pub gradient: Option<LinearGradient>,
    /// Layers drawn under the content.
    pub backdrop: Background,
}

impl Theme {
    /// Build a [`Theme`] from a resolved style.
    pub fn from_config(cfg: &StyleConfig) -> Self {
        let design = classify_font_family(&cfg.font_family);
        let corner_radius = cfg.corner_radius as f32;

        let gradient = (cfg.gradient_enabled && !cfg.gradient_colors.is_empty())
            .then(|| LinearGradient::from_hex_stops(cfg.gradient_colors.as_slice(), cfg.gradient_angle));

        let background   = Color::from_hex(&cfg.background_color);
        let border_color = Color::from_hex(&cfg.border_color);

        let backdrop = if cfg.is_liquid_glass() {
            Background::Glass {
                material_opacity: cfg.background_opacity as f32,
                fallback_fill:    background.with_opacity(cfg.background_opacity as f32),
                blur_radius:      cfg.blur_radius.map_or(style::DEFAULT_GLASS_BLUR, |b| b as f32),
                gradient:         gradient.clone(),
                highlight: cfg.highlights_enabled.then(|| Highlight {
                    center:     UnitPoint::TOP_LEADING,
                    color:      Color::WHITE.with_opacity(cfg.highlights_opacity as f32),
                    fade_to:    Color::CLEAR,
                    end_radius: style::HIGHLIGHT_END_RADIUS,
                }),
                border: cfg.border_enabled.then(|| Border {
                    color: border_color.with_opacity(cfg.border_opacity as f32),
                    width: cfg.border_width as f32,
                }),
                corner_radius,
            }
        } else {
            Background::Flat {
                fill: background.with_opacity(cfg.background_opacity as f32),
                corner_radius,
            }
        };

        Self {
            primary:        Color::from_hex(&cfg.primary_color),
            secondary:      Color::from_hex(&cfg.secondary_color),
            text:           Color::from_hex(&cfg.text_color),
            text_secondary: Color::from_hex(&cfg.text_secondary_color),
            background,
            border_color,
            title_font:   Font::new(cfg.title_size as f32, FontWeight::Semibold, design),
            body_font:    Font::new(cfg.body_size as f32, FontWeight::Regular, design),
            caption_font: Font::new(cfg.caption_size as f32, FontWeight::Regular, design),
            corner_radius,
            border_width:  cfg.border_width as f32,
            shadow_color:  Color::BLACK.with_opacity(cfg.effective_shadow_opacity() as f32),
            shadow_radius: cfg.shadow_radius as f32,
            gradient,
            backdrop,
        }
    }

    /// Container shadow offset downward by `y_offset` points.
    pub fn shadow(&self, y_offset: f32) -> Shadow {
        Shadow {
            color:  self.shadow_color,
            radius: self.shadow_radius,
            y_offset,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default_preset())
    }
}
