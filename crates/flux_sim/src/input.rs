use bevy::prelude::*;
use flux_core::{FieldConfig, FrameInput};

/// Latest pointer and scroll values, written from window events and read by
/// the field tick. No queueing: every sample overwrites the previous one.
///
/// The native window has no page, so scrolling moves through a virtual
/// document of `document_height` pixels, `viewport_height` of which are
/// visible.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputSampler {
    pointer: [f32; 2],
    scroll_offset: f32,
    document_height: f32,
    viewport_height: f32,
}

impl InputSampler {
    pub fn new(document_height: f32, viewport_height: f32) -> Self {
        Self {
            pointer: [0.0, 0.0],
            scroll_offset: 0.0,
            document_height,
            viewport_height,
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.document_height, config.viewport_height)
    }

    /// Map a cursor position (pixels, origin top-left) to [-1, 1] on both
    /// axes with +y up. Degenerate windows keep the previous value.
    pub fn sample_pointer(&mut self, cursor: Vec2, window_size: Vec2) {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return;
        }
        self.pointer = [
            (cursor.x / window_size.x) * 2.0 - 1.0,
            -(cursor.y / window_size.y) * 2.0 + 1.0,
        ];
    }

    /// Move down the page by `delta` pixels (negative scrolls up)
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
    }

    /// Visible height changed (window resize); keeps the offset in range
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn pointer(&self) -> [f32; 2] {
        self.pointer
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// offset / (document − viewport), or 0 for pages shorter than the window
    pub fn scroll_progress(&self) -> f32 {
        let range = self.document_height - self.viewport_height;
        if range > 0.0 {
            self.scroll_offset / range
        } else {
            0.0
        }
    }

    pub fn frame_input(&self) -> FrameInput {
        FrameInput::new(self.pointer[0], self.pointer[1], self.scroll_progress())
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default())
    }
}
