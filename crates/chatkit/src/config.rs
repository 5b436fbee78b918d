//! Layout and presentation constants used by the sizing rules.

use crate::color::Color;
use crate::content::{FontWeight, TextStyle};
use crate::geometry::{BubbleSize, Insets};

/// Constants shared by every bubble sizing rule.
///
/// The defaults reproduce the host cells' layout. Cells draw with the same
/// insets, so values changed here must be changed there too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingConfig {
    /// Horizontal space taken by avatar, bubble margins and tail, subtracted
    /// from the viewport width to get the bubble width
    pub side_padding: f32,
    /// Bubble width of an audio item with neither image nor text
    pub audio_only_width: f32,
    /// Preview image height as a fraction of its width (4:3 -> 0.75)
    pub image_aspect: f32,
    /// Height of the playback control strip of audio items
    pub audio_control_height: f32,
    /// Padding around primary text
    pub text_inset: Insets,
    /// Padding around the call-to-action text of templates
    pub secondary_inset: Insets,
    /// Separator line color between sub-regions
    pub line_color: Color,
    /// Style applied to the primary text of audio and template items
    pub primary_text_style: TextStyle,
    /// Style applied to template action text
    pub action_text_style: TextStyle,
    /// Width of photo and video thumbnail bubbles
    pub media_width: f32,
    /// Size of location bubbles
    pub location_size: BubbleSize,
}

impl SizingConfig {
    pub fn new() -> Self {
        Self {
            side_padding: 95.0,
            audio_only_width: 160.0,
            image_aspect: 3.0 / 4.0,
            audio_control_height: 40.0,
            text_inset: Insets::symmetric(12.0, 8.0),
            secondary_inset: Insets::symmetric(12.0, 14.0),
            line_color: Color::rgb8(204, 204, 204),
            primary_text_style: TextStyle::new(16.0, FontWeight::Regular, Color::light_gray()),
            action_text_style: TextStyle::new(18.0, FontWeight::Medium, Color::primary()),
            media_width: 240.0,
            location_size: BubbleSize::square(240.0),
        }
    }

    pub fn with_side_padding(mut self, padding: f32) -> Self {
        self.side_padding = padding;
        self
    }

    pub fn with_audio_only_width(mut self, width: f32) -> Self {
        self.audio_only_width = width;
        self
    }

    pub fn with_image_aspect(mut self, aspect: f32) -> Self {
        self.image_aspect = aspect;
        self
    }

    pub fn with_audio_control_height(mut self, height: f32) -> Self {
        self.audio_control_height = height;
        self
    }

    pub fn with_text_inset(mut self, inset: Insets) -> Self {
        self.text_inset = inset;
        self
    }

    pub fn with_secondary_inset(mut self, inset: Insets) -> Self {
        self.secondary_inset = inset;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_primary_text_style(mut self, style: TextStyle) -> Self {
        self.primary_text_style = style;
        self
    }

    pub fn with_action_text_style(mut self, style: TextStyle) -> Self {
        self.action_text_style = style;
        self
    }

    pub fn with_media_width(mut self, width: f32) -> Self {
        self.media_width = width;
        self
    }

    pub fn with_location_size(mut self, size: BubbleSize) -> Self {
        self.location_size = size;
        self
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::new()
    }
}
