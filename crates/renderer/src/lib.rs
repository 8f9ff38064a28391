//! Layout engine for the home-screen widget.
//!
//! Turns content plus a compiled [`Theme`] into a declarative node tree for
//! one of three fixed templates:
//! - small:  icon, title and subtitle stacked
//! - medium: icon column beside title, subtitle and body
//! - large:  header row with time, divider, body, subtitle footer

pub mod large;
pub mod medium;
pub mod node;
pub mod small;

pub use node::{Alignment, Node};

use chrono::{DateTime, Local};
use hw_config::StyleConfig;
use hw_core::{SizeClass, WidgetContent};
use hw_theme::{Background, Shadow, Theme};
use serde::Serialize;

/// A fully composed widget, ready for a drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetLayout {
    pub size:          SizeClass,
    pub width:         f32,
    pub height:        f32,
    pub padding:       f32,
    /// Everything is clipped to a continuous rounded rectangle of this radius.
    pub corner_radius: f32,
    pub background:    Background,
    pub shadow:        Shadow,
    pub content:       Node,
}

/// Compose the template for `size`.
pub fn compose(
    size: SizeClass,
    content: &WidgetContent,
    theme: &Theme,
    now: DateTime<Local>,
) -> WidgetLayout {
    let (width, height) = size.dimensions();

    let (padding, shadow_y, node) = match size {
        SizeClass::Small  => (small::padding(theme), 2.0, small::compose(content, theme)),
        SizeClass::Medium => (medium::PADDING, 4.0, medium::compose(content, theme)),
        SizeClass::Large  => (large::PADDING, 4.0, large::compose(content, theme, now)),
    };

    WidgetLayout {
        size,
        width,
        height,
        padding,
        corner_radius: theme.corner_radius,
        background:    theme.backdrop.clone(),
        shadow:        theme.shadow(shadow_y),
        content:       node,
    }
}

/// Compile `style` and compose in one step.
pub fn render(
    size: SizeClass,
    content: &WidgetContent,
    style: &StyleConfig,
    now: DateTime<Local>,
) -> WidgetLayout {
    compose(size, content, &Theme::from_config(style), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 12, 5, 0).unwrap()
    }

    fn children(node: &Node) -> &[Node] {
        match node {
            Node::VStack { children, .. } | Node::HStack { children, .. } => children,
            other => panic!("not a stack: {other:?}"),
        }
    }

    #[test]
    fn small_padding_follows_corner_radius() {
        let content = WidgetContent::sample();
        let flat = render(SizeClass::Small, &content, &StyleConfig::default_preset(), noon());
        let glass = render(SizeClass::Small, &content, &StyleConfig::liquid_glass_preset(), noon());

        assert_eq!(flat.padding, 12.0);
        assert_eq!(glass.padding, 16.0);
        assert_eq!(flat.shadow.y_offset, 2.0);
    }

    #[test]
    fn small_omits_missing_fields() {
        let content = WidgetContent {
            title: Some("Only title".into()),
            subtitle: Some(String::new()),
            ..Default::default()
        };
        let layout = render(SizeClass::Small, &content, &StyleConfig::default_preset(), noon());

        let kids = children(&layout.content);
        assert_eq!(kids.len(), 2);
        assert!(matches!(kids[0], Node::Spacer));
        assert!(layout.content.find_text("Only title").is_some());
    }

    #[test]
    fn medium_uses_body_size_for_subtitle() {
        let style = StyleConfig::liquid_glass_preset();
        let layout = render(SizeClass::Medium, &WidgetContent::sample(), &style, noon());

        let Some(Node::Text { font, line_limit, .. }) =
            layout.content.find_text("Welcome to Super Home Widget")
        else {
            panic!("subtitle missing");
        };
        assert_eq!(font.size, 15.0);
        assert_eq!(*line_limit, 1);
        assert_eq!(layout.padding, 16.0);
        assert!(layout.background.is_glass());
    }

    #[test]
    fn large_has_bold_title_and_timestamp() {
        let layout = render(
            SizeClass::Large,
            &WidgetContent::sample(),
            &StyleConfig::default_preset(),
            noon(),
        );

        let Some(Node::Text { font, .. }) = layout.content.find_text("Hello Widget") else {
            panic!("title missing");
        };
        assert_eq!(font.weight, hw_theme::FontWeight::Bold);
        assert!(layout.content.find_text("12:05").is_some());
        assert_eq!(layout.padding, 20.0);
        assert_eq!((layout.width, layout.height), (329.0, 345.0));
    }

    #[test]
    fn large_skips_empty_strings() {
        let content = WidgetContent {
            title:    Some(String::new()),
            body:     Some(String::new()),
            subtitle: Some("Footer".into()),
            ..Default::default()
        };
        let layout = render(SizeClass::Large, &content, &StyleConfig::default_preset(), noon());

        let kids = children(&layout.content);
        let header = children(&kids[0]);
        assert_eq!(header.len(), 2);
        assert!(matches!(header[0], Node::Spacer));
        assert!(children(&kids[2]).is_empty());
        assert!(layout.content.find_text("").is_none());
        assert!(layout.content.find_text("Footer").is_some());
    }

    #[test]
    fn layout_serializes_for_previews() {
        let layout = render(
            SizeClass::Medium,
            &WidgetContent::sample(),
            &StyleConfig::liquid_glass_preset(),
            noon(),
        );
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["size"], "medium");
        assert_eq!(json["background"]["kind"], "glass");
        assert_eq!(json["content"]["node"], "hStack");
    }
}
