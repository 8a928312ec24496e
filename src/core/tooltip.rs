use serde::{Deserialize, Serialize};

use crate::core::types::{PixelPoint, PlotRect};
use crate::error::{ChartError, ChartResult};

/// Fixed tooltip dimensions and the gap kept between box and anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: 132.0,
            height: 44.0,
            gap: 10.0,
        }
    }
}

impl TooltipLayout {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || !self.gap.is_finite() {
            return Err(ChartError::InvalidConfig(
                "tooltip layout values must be finite".to_owned(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 || self.gap < 0.0 {
            return Err(ChartError::InvalidConfig(
                "tooltip size must be > 0 and gap >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Tooltip geometry for one frame, derived from the active point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub box_x: f64,
    pub box_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Places the tooltip above `anchor`, horizontally centred and clamped into
/// `[plot.left, plot.right - width]`.
///
/// The box is not clamped vertically, so anchors near the top edge produce a
/// box above the plot.
#[must_use]
pub fn position(
    anchor: Option<PixelPoint>,
    plot: PlotRect,
    layout: TooltipLayout,
) -> Option<TooltipBox> {
    let anchor = anchor?;
    let max_x = plot.right - layout.width;
    let centred = anchor.x - layout.width / 2.0;
    let box_x = if max_x < plot.left {
        plot.left
    } else {
        centred.clamp(plot.left, max_x)
    };

    Some(TooltipBox {
        anchor_x: anchor.x,
        anchor_y: anchor.y,
        box_x,
        box_y: anchor.y - layout.gap - layout.height,
        width: layout.width,
        height: layout.height,
    })
}

#[cfg(test)]
mod tests {
    use super::{TooltipLayout, position};
    use crate::core::types::{PixelPoint, PlotRect};

    const PLOT: PlotRect = PlotRect::new(20.0, 10.0, 420.0, 210.0);
    const LAYOUT: TooltipLayout = TooltipLayout {
        width: 100.0,
        height: 30.0,
        gap: 8.0,
    };

    #[test]
    fn nothing_active_yields_no_box() {
        assert!(position(None, PLOT, LAYOUT).is_none());
    }

    #[test]
    fn box_is_centred_above_anchor() {
        let tooltip = position(Some(PixelPoint::new(200.0, 100.0)), PLOT, LAYOUT).expect("box");
        assert_eq!(tooltip.box_x, 150.0);
        assert_eq!(tooltip.box_y, 62.0);
        assert_eq!(tooltip.anchor_x, 200.0);
    }

    #[test]
    fn box_clamps_to_left_edge() {
        let tooltip = position(Some(PixelPoint::new(40.0, 100.0)), PLOT, LAYOUT).expect("box");
        assert_eq!(tooltip.box_x, PLOT.left);
    }

    #[test]
    fn box_clamps_to_right_edge() {
        let tooltip = position(Some(PixelPoint::new(415.0, 100.0)), PLOT, LAYOUT).expect("box");
        assert_eq!(tooltip.box_x, PLOT.right - LAYOUT.width);
    }

    #[test]
    fn box_near_top_is_not_clamped_vertically() {
        let tooltip = position(Some(PixelPoint::new(200.0, 12.0)), PLOT, LAYOUT).expect("box");
        assert!(tooltip.box_y < PLOT.top);
    }

    #[test]
    fn box_wider_than_plot_pins_to_left() {
        let narrow = PlotRect::new(0.0, 0.0, 60.0, 60.0);
        let tooltip = position(Some(PixelPoint::new(30.0, 30.0)), narrow, LAYOUT).expect("box");
        assert_eq!(tooltip.box_x, 0.0);
    }
}
