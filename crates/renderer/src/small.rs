use crate::node::{Alignment, Node};
use hw_core::WidgetContent;
use hw_theme::Theme;

const SPACING:   f32 = 8.0;
const ICON_SIZE: f32 = 32.0;

/// Padding grows with rounder corners so content clears the curve.
pub fn padding(theme: &Theme) -> f32 {
    if theme.corner_radius > 16.0 { 16.0 } else { 12.0 }
}

/// Icon on top, then title and subtitle pushed to the bottom.
pub fn compose(content: &WidgetContent, theme: &Theme) -> Node {
    let mut children = Vec::with_capacity(4);

    if let Some(icon) = content.icon_name.as_deref() {
        children.push(Node::icon(icon, ICON_SIZE, theme.primary));
    }
    children.push(Node::Spacer);
    if let Some(title) = content.title() {
        children.push(Node::text(title, theme.title_font, theme.text, 1, 0.8));
    }
    if let Some(subtitle) = content.subtitle() {
        children.push(Node::text(subtitle, theme.caption_font, theme.text_secondary, 1, 0.8));
    }

    Node::VStack {
        alignment: Alignment::Center,
        spacing: SPACING,
        children,
    }
}
