use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Series,
    Markers,
    Tooltip,
}

impl CanvasLayerKind {
    /// Bottom-to-top paint order; the tooltip overlay is always on top.
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Background,
        Self::Grid,
        Self::Axis,
        Self::Series,
        Self::Markers,
        Self::Tooltip,
    ];

    #[must_use]
    pub fn svg_group_id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Axis => "axis",
            Self::Series => "series",
            Self::Markers => "markers",
            Self::Tooltip => "tooltip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn tooltip_layer_paints_last() {
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.last(),
            Some(&CanvasLayerKind::Tooltip)
        );
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.first(),
            Some(&CanvasLayerKind::Background)
        );
    }
}
