use hw_theme::{Color, Font, FontWeight};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Leading,
    Center,
}

/// One element of a composed widget layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Node {
    VStack {
        alignment: Alignment,
        spacing:   f32,
        children:  Vec<Node>,
    },
    HStack {
        spacing:  f32,
        children: Vec<Node>,
    },
    /// Fixed-width column around `child`.
    Frame {
        width: f32,
        child: Box<Node>,
    },
    /// SF-Symbols style glyph, looked up by name.
    Icon {
        name:   String,
        size:   f32,
        weight: FontWeight,
        color:  Color,
    },
    Text {
        text:       String,
        font:       Font,
        color:      Color,
        line_limit: u8,
        /// Smallest scale factor the text may shrink to before truncating.
        min_scale:  f32,
    },
    Divider {
        color: Color,
    },
    Spacer,
}

impl Node {
    pub fn icon(name: &str, size: f32, color: Color) -> Self {
        Self::Icon {
            name: name.to_string(),
            size,
            weight: FontWeight::Medium,
            color,
        }
    }

    pub fn text(text: &str, font: Font, color: Color, line_limit: u8, min_scale: f32) -> Self {
        Self::Text {
            text: text.to_string(),
            font,
            color,
            line_limit,
            min_scale,
        }
    }

    /// Depth-first search for the first text node; handy for previews and tests.
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        match self {
            Self::Text { text, .. } if text == needle => Some(self),
            Self::VStack { children, .. } | Self::HStack { children, .. } => {
                children.iter().find_map(|c| c.find_text(needle))
            }
            Self::Frame { child, .. } => child.find_text(needle),
            _ => None,
        }
    }
}
