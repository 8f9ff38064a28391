use crate::colors::Color;
use crate::gradient::{LinearGradient, UnitPoint};
use serde::Serialize;

/// Blur applied to the glass fallback fill when the style names none.
pub const DEFAULT_GLASS_BLUR: f32 = 20.0;
/// Radius at which the glass highlight fades out.
pub const HIGHLIGHT_END_RADIUS: f32 = 200.0;

/// Drop shadow cast by the widget container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color:    Color,
    pub radius:   f32,
    /// Vertical offset in points (positive = downward).
    pub y_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

/// Radial white glow used by the glass theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Highlight {
    pub center:     UnitPoint,
    /// Color at `center`.
    pub color:      Color,
    /// Color reached at `end_radius`.
    pub fade_to:    Color,
    pub end_radius: f32,
}

/// Background layers drawn beneath the widget content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Background {
    /// Solid rounded fill.
    Flat {
        fill:          Color,
        corner_radius: f32,
    },
    /// Frosted material with optional overlays, painted bottom to top.
    Glass {
        /// Opacity of the system material layer.
        material_opacity: f32,
        /// Fill used where no system material is available, blurred by `blur_radius`.
        fallback_fill:    Color,
        blur_radius:      f32,
        gradient:         Option<LinearGradient>,
        highlight:        Option<Highlight>,
        border:           Option<Border>,
        corner_radius:    f32,
    },
}

impl Background {
    pub fn is_glass(&self) -> bool {
        matches!(self, Self::Glass { .. })
    }
}
