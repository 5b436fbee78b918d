//! Text measurement for bubble sizing.
//!
//! Bubble heights depend on how much vertical space a piece of text takes once
//! wrapped to a fixed width. This module provides a backend-agnostic trait for
//! that query. Core sizing must not depend on any specific text engine;
//! `chatkit-text` implements [`TextMeasurer`] on top of `cosmic-text`.

use crate::content::{FontWeight, StyledText};

/// Request to measure styled text wrapped to a maximum width.
#[derive(Debug, Clone)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    pub weight: FontWeight,
    /// Width the text wraps at. Height is unconstrained.
    pub max_width: f32,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn from_styled_text(text: &'a StyledText, max_width: f32) -> Self {
        Self {
            text: &text.text,
            font_size: text.style.font_size,
            weight: text.style.weight,
            max_width,
        }
    }
}

/// Measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Backend-agnostic text measurement.
///
/// Implementors must wrap at word boundaries and apply font leading exactly as
/// the host renderer will when drawing: the returned height is used verbatim to
/// size the bubble, so any mismatch clips text or leaves empty space.
///
/// Sizing calls this repeatedly with unrelated inputs and does not cache.
pub trait TextMeasurer {
    /// Measure the bounding box of `request.text` wrapped to `request.max_width`.
    ///
    /// Excludes any insets (those are added by the sizing rules).
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Headless measurer with a fixed advance per character and a fixed line height.
///
/// Wraps greedily at spaces; a word longer than a line is broken at the line
/// edge. Useful where no font is available, and deterministic enough for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Advance of one character as a multiple of the font size
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size
    pub line_height_ratio: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }

    /// Number of wrapped lines `text` occupies at `max_width`.
    pub fn line_count(&self, text: &str, font_size: f32, max_width: f32) -> usize {
        let advance = (self.advance_ratio * font_size).max(f32::EPSILON);
        let per_line = ((max_width / advance).floor() as usize).max(1);

        text.split('\n')
            .map(|paragraph| wrapped_lines(paragraph, per_line))
            .sum()
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.5, 1.2)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        if request.text.is_empty() {
            return IntrinsicSize::zero();
        }

        let lines = self.line_count(request.text, request.font_size, request.max_width);
        let advance = self.advance_ratio * request.font_size;
        let longest = request
            .text
            .split('\n')
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(0) as f32;

        IntrinsicSize::new(
            (longest * advance).min(request.max_width.max(0.0)),
            lines as f32 * self.line_height_ratio * request.font_size,
        )
    }
}

/// Greedy word wrap of one paragraph, counting lines of at most `per_line` chars.
fn wrapped_lines(paragraph: &str, per_line: usize) -> usize {
    let mut lines = 1;
    let mut used = 0;

    for word in paragraph.split(' ') {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };

        if needed <= per_line {
            used = needed;
            continue;
        }

        // Spaces past the end of a full line hang instead of wrapping
        if len == 0 {
            continue;
        }

        if used > 0 {
            lines += 1;
        }
        // Overlong words spill onto as many lines as they need
        lines += len.saturating_sub(1) / per_line;
        used = match len % per_line {
            0 if len > 0 => per_line,
            rest => rest,
        };
    }

    lines
}
