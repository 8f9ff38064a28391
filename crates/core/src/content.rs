use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-instance data displayed by the widget.
///
/// Every field is optional; an absent field is simply omitted from the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetContent {
    pub title:       Option<String>,
    pub subtitle:    Option<String>,
    pub body:        Option<String>,
    pub image_url:   Option<String>,
    pub icon_name:   Option<String>,
    pub custom_data: Option<Map<String, Value>>,
}

impl WidgetContent {
    /// Read content from a loosely-typed mapping.  A field holding a value of
    /// the wrong type is treated as absent rather than rejected.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            title:       text("title"),
            subtitle:    text("subtitle"),
            body:        text("body"),
            image_url:   text("imageUrl"),
            icon_name:   text("iconName"),
            custom_data: map.get("customData").and_then(Value::as_object).cloned(),
        }
    }

    /// Sample content shown when neither the host nor the config supplied any.
    pub fn sample() -> Self {
        Self {
            title:     Some("Hello Widget".to_string()),
            subtitle:  Some("Welcome to Super Home Widget".to_string()),
            body:      Some("This is an example widget content.".to_string()),
            icon_name: Some("star.fill".to_string()),
            ..Self::default()
        }
    }

    /// Title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Subtitle, if present and non-empty.
    pub fn subtitle(&self) -> Option<&str> {
        non_empty(&self.subtitle)
    }

    /// Body text, if present and non-empty.
    pub fn body(&self) -> Option<&str> {
        non_empty(&self.body)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
