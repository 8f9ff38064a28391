use crate::node::{Alignment, Node};
use hw_core::WidgetContent;
use hw_theme::Theme;

pub const PADDING: f32 = 16.0;

const SPACING:      f32 = 16.0;
const TEXT_SPACING: f32 = 6.0;
const ICON_SIZE:    f32 = 40.0;
const ICON_COLUMN:  f32 = 80.0;

/// Icon column on the left, title / subtitle / body on the right.
pub fn compose(content: &WidgetContent, theme: &Theme) -> Node {
    let icon_column = Node::VStack {
        alignment: Alignment::Center,
        spacing:   0.0,
        children:  content
            .icon_name
            .as_deref()
            .map(|icon| Node::icon(icon, ICON_SIZE, theme.primary))
            .into_iter()
            .collect(),
    };

    let mut text = Vec::with_capacity(4);
    if let Some(title) = content.title() {
        text.push(Node::text(title, theme.title_font, theme.text, 1, 0.8));
    }
    if let Some(subtitle) = content.subtitle() {
        text.push(Node::text(subtitle, theme.body_font, theme.text_secondary, 1, 0.8));
    }
    if let Some(body) = content.body() {
        text.push(Node::text(body, theme.caption_font, theme.text_secondary, 2, 0.7));
    }
    text.push(Node::Spacer);

    Node::HStack {
        spacing: SPACING,
        children: vec![
            Node::Frame { width: ICON_COLUMN, child: Box::new(icon_column) },
            Node::VStack {
                alignment: Alignment::Leading,
                spacing:   TEXT_SPACING,
                children:  text,
            },
            Node::Spacer,
        ],
    }
}
