use serde::Serialize;

/// Closed set of font designs a family name can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontDesign {
    Rounded,
    Monospaced,
    Serif,
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// A system font at a given size, weight and design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size:   f32,
    pub weight: FontWeight,
    pub design: FontDesign,
}

impl Font {
    pub fn new(size: f32, weight: FontWeight, design: FontDesign) -> Self {
        Self { size, weight, design }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Map a free-form family name onto a [`FontDesign`].
///
/// Case-insensitive substring checks for `rounded`, `mono` and `serif`, in
/// that order.  "Mono Serif" is therefore monospaced, and "Sans Serif" is serif.
pub fn classify_font_family(name: &str) -> FontDesign {
    let name = name.to_lowercase();

    if name.contains("rounded") {
        FontDesign::Rounded
    } else if name.contains("mono") {
        FontDesign::Monospaced
    } else if name.contains("serif") {
        FontDesign::Serif
    } else {
        FontDesign::Default
    }
}
