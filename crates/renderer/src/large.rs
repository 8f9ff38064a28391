use crate::node::{Alignment, Node};
use chrono::{DateTime, Local};
use hw_core::WidgetContent;
use hw_theme::{FontWeight, Theme};

pub const PADDING: f32 = 20.0;

const SPACING:         f32 = 12.0;
const BODY_SPACING:    f32 = 8.0;
const ICON_SIZE:       f32 = 24.0;
const DIVIDER_OPACITY: f32 = 0.3;

/// Header row (icon, title, time), divider, body, and a subtitle footer.
///
/// An empty title, body or subtitle is left out like a missing one; the time
/// and divider are always present.
pub fn compose(content: &WidgetContent, theme: &Theme, now: DateTime<Local>) -> Node {
    let mut header = Vec::with_capacity(4);
    if let Some(icon) = content.icon_name.as_deref() {
        header.push(Node::icon(icon, ICON_SIZE, theme.primary));
    }
    if let Some(title) = content.title() {
        let font = theme.title_font.with_weight(FontWeight::Bold);
        header.push(Node::text(title, font, theme.text, 1, 1.0));
    }
    header.push(Node::Spacer);
    header.push(Node::text(
        &now.format("%H:%M").to_string(),
        theme.caption_font,
        theme.text_secondary,
        1,
        1.0,
    ));

    let body = Node::VStack {
        alignment: Alignment::Leading,
        spacing:   BODY_SPACING,
        children:  content
            .body()
            .map(|body| Node::text(body, theme.body_font, theme.text, 4, 1.0))
            .into_iter()
            .collect(),
    };

    let mut children = vec![
        Node::HStack { spacing: 8.0, children: header },
        Node::Divider { color: theme.text_secondary.with_opacity(DIVIDER_OPACITY) },
        body,
        Node::Spacer,
    ];
    if let Some(subtitle) = content.subtitle() {
        children.push(Node::text(subtitle, theme.caption_font, theme.text_secondary, 2, 0.8));
    }

    Node::VStack {
        alignment: Alignment::Leading,
        spacing: SPACING,
        children,
    }
}
