//! The two default tables used during resolution.
//!
//! - [`field`]: literal fallbacks applied one field at a time when a style
//!   sub-document exists but leaves a field out.
//! - Presets ([`StyleConfig::default_preset`], [`StyleConfig::liquid_glass_preset`]):
//!   complete styles used when no style sub-document can be found at all.
//!
//! The two tables disagree on purpose in places (e.g. the gradient angle), so
//! they must not be merged.

use crate::schema::{StyleConfig, DEFAULT_STYLE, LIQUID_GLASS_STYLE};
use hw_core::SizeClass;

/// Per-field literal fallbacks.
pub mod field {
    pub const STYLE_NAME: &str = super::DEFAULT_STYLE;

    pub const BACKGROUND_COLOR:   &str = "#FFFFFF";
    pub const BACKGROUND_OPACITY: f64  = 1.0;

    pub const CORNER_RADIUS: f64 = 16.0;

    pub const FONT_FAMILY:  &str = "SF Pro";
    pub const TITLE_SIZE:   f64  = 20.0;
    pub const BODY_SIZE:    f64  = 14.0;
    pub const CAPTION_SIZE: f64  = 12.0;

    pub const PRIMARY_COLOR:        &str = "#007AFF";
    pub const SECONDARY_COLOR:      &str = "#5856D6";
    pub const TEXT_COLOR:           &str = "#000000";
    pub const TEXT_SECONDARY_COLOR: &str = "#8E8E93";

    pub const SHADOW_ENABLED: bool = true;
    pub const SHADOW_OPACITY: f64  = 0.1;
    pub const SHADOW_RADIUS:  f64  = 8.0;

    pub const BORDER_ENABLED: bool = false;
    pub const BORDER_WIDTH:   f64  = 0.0;
    pub const BORDER_COLOR:   &str = "#FFFFFF";
    pub const BORDER_OPACITY: f64  = 0.0;

    pub const GRADIENT_ENABLED: bool = false;
    pub const GRADIENT_ANGLE:   f64  = 135.0;

    pub const HIGHLIGHTS_ENABLED: bool = false;
    pub const HIGHLIGHTS_OPACITY: f64  = 0.0;
}

impl StyleConfig {
    /// Built-in flat style.
    pub fn default_preset() -> Self {
        Self {
            style_name:           DEFAULT_STYLE.to_string(),
            background_color:     "#FFFFFF".to_string(),
            background_opacity:   1.0,
            blur_radius:          None,
            corner_radius:        16.0,
            font_family:          "SF Pro".to_string(),
            title_size:           20.0,
            body_size:            14.0,
            caption_size:         12.0,
            primary_color:        "#007AFF".to_string(),
            secondary_color:      "#5856D6".to_string(),
            text_color:           "#000000".to_string(),
            text_secondary_color: "#8E8E93".to_string(),
            shadow_enabled:       true,
            shadow_opacity:       0.1,
            shadow_radius:        8.0,
            border_enabled:       false,
            border_width:         0.0,
            border_color:         "#FFFFFF".to_string(),
            border_opacity:       0.0,
            gradient_enabled:     false,
            gradient_colors:      Vec::new(),
            gradient_angle:       0.0,
            highlights_enabled:   false,
            highlights_opacity:   0.0,
        }
    }

    /// Built-in frosted-glass style.
    pub fn liquid_glass_preset() -> Self {
        Self {
            style_name:           LIQUID_GLASS_STYLE.to_string(),
            background_color:     "#FFFFFF".to_string(),
            background_opacity:   0.85,
            blur_radius:          Some(20.0),
            corner_radius:        20.0,
            font_family:          "SF Pro Rounded".to_string(),
            title_size:           22.0,
            body_size:            15.0,
            caption_size:         13.0,
            primary_color:        "#00D9FF".to_string(),
            secondary_color:      "#FF6B9D".to_string(),
            text_color:           "#FFFFFF".to_string(),
            text_secondary_color: "#FFFFFF80".to_string(),
            shadow_enabled:       true,
            shadow_opacity:       0.2,
            shadow_radius:        12.0,
            border_enabled:       true,
            border_width:         1.5,
            border_color:         "#FFFFFF".to_string(),
            border_opacity:       0.3,
            gradient_enabled:     true,
            gradient_colors:      vec!["#00D9FF20".to_string(), "#FF6B9D20".to_string()],
            gradient_angle:       135.0,
            highlights_enabled:   true,
            highlights_opacity:   0.4,
        }
    }

    /// Preset used for `size` when nothing else resolves: small widgets stay
    /// flat, medium and large ones get the glass look.
    pub fn preset_for(size: SizeClass) -> Self {
        match size {
            SizeClass::Small => Self::default_preset(),
            SizeClass::Medium | SizeClass::Large => Self::liquid_glass_preset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_selection_by_size() {
        assert_eq!(StyleConfig::preset_for(SizeClass::Small), StyleConfig::default_preset());
        assert_eq!(StyleConfig::preset_for(SizeClass::Medium), StyleConfig::liquid_glass_preset());
        assert_eq!(StyleConfig::preset_for(SizeClass::Large), StyleConfig::liquid_glass_preset());
    }

    #[test]
    fn presets_carry_their_own_names() {
        assert!(!StyleConfig::default_preset().is_liquid_glass());
        assert!(StyleConfig::liquid_glass_preset().is_liquid_glass());
    }

    #[test]
    fn field_table_and_default_preset_differ_on_gradient_angle() {
        assert_eq!(field::GRADIENT_ANGLE, 135.0);
        assert_eq!(StyleConfig::default_preset().gradient_angle, 0.0);
    }
}
