use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without
/// producing any output.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.line_count();
        self.last_path_count = frame.path_count();
        self.last_circle_count = frame.circle_count();
        self.last_text_count = frame.text_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
