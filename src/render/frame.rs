use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives of one paint layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass, already in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        if let Some(index) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[index];
        }
        self.layers.push(LayerPrimitives::empty(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_path(&mut self, kind: CanvasLayerKind, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.paths.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }
}
