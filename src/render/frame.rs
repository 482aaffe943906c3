use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Paint order of one chart frame, bottom to top.
///
/// The overlay layer exists so the magnifier box and its value lines paint
/// over the series polylines instead of being interleaved with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Header,
    Grid,
    Series,
    Indicator,
    Overlay,
}

impl LayerKind {
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Background,
        Self::Header,
        Self::Grid,
        Self::Series,
        Self::Indicator,
        Self::Overlay,
    ];
}

/// Primitives of one z-layer. Within a layer, rects paint first, then lines,
/// then texts, so a box always sits below its own labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: LayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameLayer {
    #[must_use]
    fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are stored in canonical paint order and always all present; an
/// unused layer stays empty. Renderers draw layers front to back of the
/// `layers` slice without reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    layers: Vec<FrameLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: LayerKind::CANONICAL_ORDER
                .into_iter()
                .map(FrameLayer::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layers(&self) -> &[FrameLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &FrameLayer {
        &self.layers[kind as usize]
    }

    #[must_use]
    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut FrameLayer {
        &mut self.layers[kind as usize]
    }

    pub fn push_rect(&mut self, kind: LayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: LayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_text(&mut self, kind: LayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn with_rect(mut self, kind: LayerKind, rect: RectPrimitive) -> Self {
        self.push_rect(kind, rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, kind: LayerKind, line: LinePrimitive) -> Self {
        self.push_line(kind, line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: LayerKind, text: TextPrimitive) -> Self {
        self.push_text(kind, text);
        self
    }

    /// All rect primitives in paint order across layers.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    /// All line primitives in paint order across layers.
    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    /// All text primitives in paint order across layers.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
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
        self.layers.iter().all(FrameLayer::is_empty)
    }
}
