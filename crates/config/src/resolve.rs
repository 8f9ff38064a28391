use crate::defaults::field;
use crate::document::{RawDocument, Section};
use crate::schema::StyleConfig;
use hw_core::{SizeClass, DEFAULT_REFRESH_INTERVAL_SECS};
use tracing::debug;

/// Resolve the style for a widget of `size`.
///
/// Fallback tiers, in order:
/// 1. no document, or no `styles` / `widgets` mapping → size preset;
/// 2. no `widgets.<size>.style` name, or no `styles.<name>` mapping → size preset;
/// 3. otherwise the style sub-document, with every missing or mistyped field
///    taking its literal default from [`field`].
///
/// Never fails: a widget with the wrong look is better than a blank one.
pub fn resolve(doc: Option<&RawDocument>, size: SizeClass) -> StyleConfig {
    match doc.and_then(|d| style_section(d, size)) {
        Some(section) => StyleConfig::from_section(section),
        None => {
            debug!("No style resolvable for {size} widget; using size preset.");
            StyleConfig::preset_for(size)
        }
    }
}

/// Seconds between refreshes for a widget of `size`
/// (`widgets.<size>.refreshInterval`, default one hour).
pub fn refresh_interval(doc: Option<&RawDocument>, size: SizeClass) -> u64 {
    doc.and_then(|d| d.root().section("widgets"))
        .and_then(|widgets| widgets.section(size.key()))
        .and_then(|widget| widget.whole_number("refreshInterval"))
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
}

fn text(sec: Option<Section<'_>>, key: &str, default: &str) -> String {
    sec.and_then(|s| s.string(key)).unwrap_or(default).to_string()
}

fn number(sec: Option<Section<'_>>, key: &str, default: f64) -> f64 {
    sec.and_then(|s| s.number(key)).unwrap_or(default)
}

fn flag(sec: Option<Section<'_>>, key: &str, default: bool) -> bool {
    sec.and_then(|s| s.bool(key)).unwrap_or(default)
}

fn style_section(doc: &RawDocument, size: SizeClass) -> Option<Section<'_>> {
    let root = doc.root();
    let styles = root.section("styles")?;
    let widgets = root.section("widgets")?;

    let name = widgets.section(size.key())?.string("style")?;
    let section = styles.section(name);
    if section.is_none() {
        debug!("Style '{name}' named by {size} widget is not defined.");
    }
    section
}

impl StyleConfig {
    /// Build a style from a `styles.<name>` sub-document, filling gaps with
    /// the per-field literals (not a preset).
    pub fn from_section(s: Section<'_>) -> Self {
        let background = s.section("background");
        let typography = s.section("typography");
        let colors     = s.section("colors");
        let shadows    = s.section("shadows");
        let border     = s.section("border");
        let gradient   = s.section("gradient");
        let highlights = s.section("highlights");

        Self {
            style_name:           text(Some(s), "styleName", field::STYLE_NAME),
            background_color:     text(background, "color", field::BACKGROUND_COLOR),
            background_opacity:   number(background, "opacity", field::BACKGROUND_OPACITY),
            blur_radius:          background.and_then(|b| b.number("blurRadius")),
            corner_radius:        number(Some(s), "cornerRadius", field::CORNER_RADIUS),
            font_family:          text(typography, "fontFamily", field::FONT_FAMILY),
            title_size:           number(typography, "titleSize", field::TITLE_SIZE),
            body_size:            number(typography, "bodySize", field::BODY_SIZE),
            caption_size:         number(typography, "captionSize", field::CAPTION_SIZE),
            primary_color:        text(colors, "primary", field::PRIMARY_COLOR),
            secondary_color:      text(colors, "secondary", field::SECONDARY_COLOR),
            text_color:           text(colors, "text", field::TEXT_COLOR),
            text_secondary_color: text(colors, "textSecondary", field::TEXT_SECONDARY_COLOR),
            shadow_enabled:       flag(shadows, "enabled", field::SHADOW_ENABLED),
            shadow_opacity:       number(shadows, "opacity", field::SHADOW_OPACITY),
            shadow_radius:        number(shadows, "radius", field::SHADOW_RADIUS),
            border_enabled:       flag(border, "enabled", field::BORDER_ENABLED),
            border_width:         number(border, "width", field::BORDER_WIDTH),
            border_color:         text(border, "color", field::BORDER_COLOR),
            border_opacity:       number(border, "opacity", field::BORDER_OPACITY),
            gradient_enabled:     flag(gradient, "enabled", field::GRADIENT_ENABLED),
            gradient_colors:      gradient.and_then(|g| g.string_list("colors")).unwrap_or_default(),
            gradient_angle:       number(gradient, "angle", field::GRADIENT_ANGLE),
            highlights_enabled:   flag(highlights, "enabled", field::HIGHLIGHTS_ENABLED),
            highlights_opacity:   number(highlights, "opacity", field::HIGHLIGHTS_OPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> RawDocument {
        RawDocument::from_value(value).unwrap()
    }

    fn field_defaults() -> StyleConfig {
        let empty = serde_json::Map::new();
        StyleConfig::from_section(Section::new(&empty))
    }

    #[test]
    fn no_document_uses_size_preset() {
        assert_eq!(resolve(None, SizeClass::Small), StyleConfig::default_preset());
        assert_eq!(resolve(None, SizeClass::Medium), StyleConfig::liquid_glass_preset());
        assert_eq!(resolve(None, SizeClass::Large), StyleConfig::liquid_glass_preset());
    }

    #[test]
    fn missing_size_key_uses_size_preset() {
        let d = doc(json!({
            "widgets": { "small": { "style": "mine" } },
            "styles":  { "mine": { "cornerRadius": 4 } },
        }));
        assert_eq!(resolve(Some(&d), SizeClass::Large), StyleConfig::liquid_glass_preset());
        assert_eq!(resolve(Some(&d), SizeClass::Small).corner_radius, 4.0);
    }

    #[test]
    fn undefined_style_uses_size_preset_not_field_defaults() {
        let d = doc(json!({
            "widgets": { "medium": { "style": "custom" } },
            "styles":  {},
        }));
        let resolved = resolve(Some(&d), SizeClass::Medium);
        assert_eq!(resolved, StyleConfig::liquid_glass_preset());
        assert_ne!(resolved, field_defaults());
    }

    #[test]
    fn missing_styles_mapping_uses_size_preset() {
        let d = doc(json!({ "widgets": { "small": { "style": "default" } } }));
        assert_eq!(resolve(Some(&d), SizeClass::Small), StyleConfig::default_preset());
    }

    #[test]
    fn non_string_style_name_uses_size_preset() {
        let d = doc(json!({
            "widgets": { "large": { "style": 7 } },
            "styles":  { "7": { "cornerRadius": 1 } },
        }));
        assert_eq!(resolve(Some(&d), SizeClass::Large), StyleConfig::liquid_glass_preset());
    }

    #[test]
    fn empty_style_takes_field_literals() {
        let d = doc(json!({
            "widgets": { "medium": { "style": "bare" } },
            "styles":  { "bare": {} },
        }));
        let resolved = resolve(Some(&d), SizeClass::Medium);

        assert_eq!(resolved.style_name, "default");
        assert_eq!(resolved.corner_radius, 16.0);
        assert_eq!(resolved.gradient_angle, 135.0);
        assert_eq!(resolved.shadow_opacity, 0.1);
        assert_eq!(resolved.blur_radius, None);
        assert!(resolved.gradient_colors.is_empty());
    }

    #[test]
    fn explicit_fields_override_literals_independently() {
        let d = doc(json!({
            "widgets": { "small": { "style": "sunset" } },
            "styles": {
                "sunset": {
                    "styleName": "sunset",
                    "background": { "color": "#FF8800", "blurRadius": 6 },
                    "typography": { "fontFamily": "New York Serif", "titleSize": 24 },
                    "shadows": { "enabled": false },
                    "gradient": { "enabled": true, "colors": ["#FF0000", "#0000FF"], "angle": 90 },
                    "highlights": { "opacity": "bright" },
                }
            },
        }));
        let resolved = resolve(Some(&d), SizeClass::Small);

        assert_eq!(resolved.style_name, "sunset");
        assert_eq!(resolved.background_color, "#FF8800");
        assert_eq!(resolved.background_opacity, 1.0);
        assert_eq!(resolved.blur_radius, Some(6.0));
        assert_eq!(resolved.font_family, "New York Serif");
        assert_eq!(resolved.title_size, 24.0);
        assert_eq!(resolved.body_size, 14.0);
        assert!(!resolved.shadow_enabled);
        assert_eq!(resolved.shadow_radius, 8.0);
        assert_eq!(resolved.gradient_colors, vec!["#FF0000", "#0000FF"]);
        assert_eq!(resolved.gradient_angle, 90.0);
        assert_eq!(resolved.highlights_opacity, 0.0);
        assert_eq!(resolved.primary_color, "#007AFF");
        assert!(!resolved.is_liquid_glass());
    }

    #[test]
    fn opacities_are_not_clamped() {
        let d = doc(json!({
            "widgets": { "small": { "style": "loud" } },
            "styles":  { "loud": { "background": { "opacity": 5.0 } } },
        }));
        assert_eq!(resolve(Some(&d), SizeClass::Small).background_opacity, 5.0);
    }

    #[test]
    fn resolution_is_idempotent() {
        let d = doc(json!({
            "widgets": { "large": { "style": "glass" } },
            "styles":  { "glass": { "styleName": "liquidGlass", "cornerRadius": 28 } },
        }));
        assert_eq!(resolve(Some(&d), SizeClass::Large), resolve(Some(&d), SizeClass::Large));
    }

    #[test]
    fn document_form_resolves_back_to_same_style() {
        let preset = StyleConfig::liquid_glass_preset();
        let d = doc(json!({
            "widgets": { "small": { "style": "glass" } },
            "styles":  { "glass": preset.to_document() },
        }));
        assert_eq!(resolve(Some(&d), SizeClass::Small), preset);
    }

    #[test]
    fn refresh_interval_fallbacks() {
        let d = doc(json!({
            "widgets": {
                "small":  { "refreshInterval": 900 },
                "medium": { "refreshInterval": "soon" },
                "large":  { "refreshInterval": -60 },
            }
        }));
        assert_eq!(refresh_interval(Some(&d), SizeClass::Small), 900);
        assert_eq!(refresh_interval(Some(&d), SizeClass::Medium), 3600);
        assert_eq!(refresh_interval(Some(&d), SizeClass::Large), 3600);
        assert_eq!(refresh_interval(None, SizeClass::Small), 3600);
    }
}
