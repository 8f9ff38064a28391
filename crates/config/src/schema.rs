use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Name of the built-in flat style.
pub const DEFAULT_STYLE: &str = "default";
/// Name of the built-in frosted-glass style.  Any other name renders flat.
pub const LIQUID_GLASS_STYLE: &str = "liquidGlass";

/// Fully resolved visual style for one widget.
///
/// Produced by [`crate::resolve`]; every field is set once resolution is done.
/// Colors are kept as the hex strings found in the document and are parsed at
/// render time by `hw-theme`.  Opacities and sizes are passed through as given,
/// without clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Style identity, e.g. `"default"`, `"liquidGlass"` or a user-defined name.
    pub style_name: String,

    // ── Background ────────────────────────────────────────────────────────────
    pub background_color:   String,
    /// Background opacity (0.0 – 1.0).
    pub background_opacity: f64,
    /// Blur radius for the frosted fallback fill, `None` = renderer default.
    pub blur_radius:        Option<f64>,

    // ── Geometry ──────────────────────────────────────────────────────────────
    pub corner_radius: f64,

    // ── Typography ────────────────────────────────────────────────────────────
    /// Free-form family name, classified into a font design at render time.
    pub font_family:  String,
    pub title_size:   f64,
    pub body_size:    f64,
    pub caption_size: f64,

    // ── Palette ───────────────────────────────────────────────────────────────
    pub primary_color:        String,
    pub secondary_color:      String,
    pub text_color:           String,
    pub text_secondary_color: String,

    // ── Shadow ────────────────────────────────────────────────────────────────
    pub shadow_enabled: bool,
    pub shadow_opacity: f64,
    pub shadow_radius:  f64,

    // ── Border ────────────────────────────────────────────────────────────────
    pub border_enabled: bool,
    pub border_width:   f64,
    pub border_color:   String,
    pub border_opacity: f64,

    // ── Gradient ──────────────────────────────────────────────────────────────
    pub gradient_enabled: bool,
    /// Ordered hex color stops.
    pub gradient_colors:  Vec<String>,
    /// Angle in degrees; 0 runs left to right.
    pub gradient_angle:   f64,

    // ── Highlights ────────────────────────────────────────────────────────────
    pub highlights_enabled: bool,
    pub highlights_opacity: f64,
}

impl StyleConfig {
    /// `true` only for the exact name `"liquidGlass"`.
    pub fn is_liquid_glass(&self) -> bool {
        self.style_name == LIQUID_GLASS_STYLE
    }

    /// Opacity of the widget drop shadow: `shadow_opacity` when shadows are
    /// enabled, otherwise fully transparent.
    pub fn effective_shadow_opacity(&self) -> f64 {
        if self.shadow_enabled {
            self.shadow_opacity
        } else {
            0.0
        }
    }

    /// Render this style back into the nested document shape stored under
    /// `styles.<name>`.  Resolving the result yields an equal `StyleConfig`.
    pub fn to_document(&self) -> Value {
        let mut background = json!({
            "color":   self.background_color,
            "opacity": self.background_opacity,
        });
        if let Some(blur) = self.blur_radius {
            background["blurRadius"] = json!(blur);
        }

        json!({
            "styleName":    self.style_name,
            "background":   background,
            "cornerRadius": self.corner_radius,
            "typography": {
                "fontFamily":  self.font_family,
                "titleSize":   self.title_size,
                "bodySize":    self.body_size,
                "captionSize": self.caption_size,
            },
            "colors": {
                "primary":       self.primary_color,
                "secondary":     self.secondary_color,
                "text":          self.text_color,
                "textSecondary": self.text_secondary_color,
            },
            "shadows": {
                "enabled": self.shadow_enabled,
                "opacity": self.shadow_opacity,
                "radius":  self.shadow_radius,
            },
            "border": {
                "enabled": self.border_enabled,
                "width":   self.border_width,
                "color":   self.border_color,
                "opacity": self.border_opacity,
            },
            "gradient": {
                "enabled": self.gradient_enabled,
                "colors":  self.gradient_colors,
                "angle":   self.gradient_angle,
            },
            "highlights": {
                "enabled": self.highlights_enabled,
                "opacity": self.highlights_opacity,
            },
        })
    }
}
