use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::content::StyledText;
use crate::geometry::{BubbleSize, Insets};
use crate::items::{AudioItem, MediaItem, StyledTextItem};
use crate::media::{DurationLookup, Image};
use crate::sizing::{SizingContext, WidthRule};

/// Layout of an audio bubble: preview image, caption and playback control
/// stacked top to bottom with no gaps.
///
/// Built once and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioGeometry {
    pub primary_text: StyledText,
    pub text_inset: Insets,
    pub accent_line_color: Color,
    /// 0 without an image, otherwise 3/4 of the bubble width
    pub preview_image_height: f32,
    /// 0 without text, otherwise the rounded up measured caption plus insets
    pub text_area_height: f32,
    pub audio_control_size: BubbleSize,
    /// Bubble width by the sum of the three region heights
    pub total_size: BubbleSize,
}

impl AudioGeometry {
    pub fn build(has_image: bool, text: &str, ctx: &mut SizingContext<'_>) -> Self {
        let config = ctx.config;
        let primary_text = StyledText::new(text, config.primary_text_style);

        let width = ctx.bubble_width(WidthRule::Audio {
            has_image,
            has_text: !primary_text.is_empty(),
        });
        let preview_image_height = ctx.image_height(has_image, width);
        let text_area_height = ctx.text_area_height(Some(&primary_text), config.text_inset, width);
        let audio_control_size = BubbleSize::new(width, config.audio_control_height);

        let total_size = BubbleSize::new(
            width,
            preview_image_height + text_area_height + audio_control_size.height,
        );

        log::debug!(
            "audio bubble {}x{} (image {}, text {}, control {})",
            total_size.width,
            total_size.height,
            preview_image_height,
            text_area_height,
            audio_control_size.height
        );

        Self {
            primary_text,
            text_inset: config.text_inset,
            accent_line_color: config.line_color,
            preview_image_height,
            text_area_height,
            audio_control_size,
            total_size,
        }
    }

    pub fn bubble_width(&self) -> f32 {
        self.total_size.width
    }
}

/// Audio clip message content.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioContent {
    pub url: Option<String>,
    pub image: Option<Image>,
    pub placeholder_image: Image,
    pub audio_url: PathBuf,
    /// Seconds, as reported by the duration lookup
    pub audio_duration: f32,
    geometry: AudioGeometry,
}

impl AudioContent {
    /// Measure the caption and look up the clip duration.
    ///
    /// Blocks on `durations`, which may parse the media file. Build off the
    /// interactive path, or pass a [`KnownDuration`](crate::KnownDuration).
    pub fn new(
        image: Option<Image>,
        text: &str,
        audio_url: impl Into<PathBuf>,
        ctx: &mut SizingContext<'_>,
        durations: &mut dyn DurationLookup,
    ) -> Self {
        let audio_url = audio_url.into();
        let geometry = AudioGeometry::build(image.is_some(), text, ctx);
        let audio_duration = durations.duration(&audio_url);

        Self {
            url: None,
            image,
            placeholder_image: Image::empty(),
            audio_url,
            audio_duration,
            geometry,
        }
    }

    pub fn with_placeholder(mut self, placeholder: Image) -> Self {
        self.placeholder_image = placeholder;
        self
    }

    pub fn geometry(&self) -> &AudioGeometry {
        &self.geometry
    }
}

impl MediaItem for AudioContent {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    fn placeholder_image(&self) -> &Image {
        &self.placeholder_image
    }

    fn size(&self) -> BubbleSize {
        self.geometry.total_size
    }
}

impl StyledTextItem for AudioContent {
    fn text(&self) -> &StyledText {
        &self.geometry.primary_text
    }

    fn text_inset(&self) -> Insets {
        self.geometry.text_inset
    }

    fn line_color(&self) -> Color {
        self.geometry.accent_line_color
    }

    fn image_height(&self) -> f32 {
        self.geometry.preview_image_height
    }

    fn text_area_height(&self) -> f32 {
        self.geometry.text_area_height
    }
}

impl AudioItem for AudioContent {
    fn audio_url(&self) -> &Path {
        &self.audio_url
    }

    fn audio_duration(&self) -> f32 {
        self.audio_duration
    }

    fn audio_control_size(&self) -> BubbleSize {
        self.geometry.audio_control_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizingConfig;
    use crate::measure::FixedAdvanceMeasurer;
    use crate::media::KnownDuration;
    use crate::sizing::tests::StubMeasurer;

    fn build(
        image: Option<Image>,
        text: &str,
        viewport: f32,
        measurer: &mut dyn crate::TextMeasurer,
    ) -> AudioContent {
        let config = SizingConfig::default();
        let mut ctx = SizingContext::new(viewport, &config, measurer);
        AudioContent::new(image, text, "clip.m4a", &mut ctx, &mut KnownDuration(3.5))
    }

    #[test]
    fn test_text_without_image() {
        let mut measurer = StubMeasurer::new(18.0);
        let item = build(None, "Listen to this", 375.0, &mut measurer);
        let geometry = item.geometry();

        assert_eq!(geometry.bubble_width(), 280.0);
        assert_eq!(geometry.preview_image_height, 0.0);
        assert_eq!(geometry.text_area_height, 34.0);
        assert_eq!(geometry.audio_control_size, BubbleSize::new(280.0, 40.0));
        assert_eq!(geometry.total_size, BubbleSize::new(280.0, 74.0));
        assert_eq!(measurer.widths, vec![256.0]);
    }

    #[test]
    fn test_bare_audio_uses_fixed_width() {
        let mut measurer = StubMeasurer::new(18.0);
        let item = build(None, "", 375.0, &mut measurer);
        let geometry = item.geometry();

        assert_eq!(geometry.bubble_width(), 160.0);
        assert_eq!(geometry.preview_image_height, 0.0);
        assert_eq!(geometry.text_area_height, 0.0);
        assert_eq!(geometry.total_size, BubbleSize::new(160.0, 40.0));
        assert!(measurer.widths.is_empty());
    }

    #[test]
    fn test_image_and_text_stack() {
        let mut measurer = StubMeasurer::new(18.0);
        let item = build(Some(Image::new(800, 600)), "caption", 375.0, &mut measurer);

        assert_eq!(item.image_height(), 210.0);
        assert_eq!(item.text_area_height(), 34.0);
        assert_eq!(item.size(), BubbleSize::new(280.0, 284.0));
        assert_eq!(item.image_area_size(), BubbleSize::new(280.0, 210.0));
    }

    #[test]
    fn test_total_height_is_sum_of_regions() {
        let mut measurer = FixedAdvanceMeasurer::default();
        let texts = ["", "short", "a somewhat longer caption that wraps onto more lines"];

        for viewport in [0.0, 120.0, 320.0, 375.0, 768.0] {
            for text in texts {
                for image in [None, Some(Image::new(10, 10))] {
                    let item = build(image, text, viewport, &mut measurer);
                    let g = item.geometry();
                    assert_eq!(
                        g.total_size.height,
                        g.preview_image_height + g.text_area_height + 40.0
                    );
                    assert_eq!(g.audio_control_size.width, g.total_size.width);
                }
            }
        }
    }

    #[test]
    fn test_applies_fixed_presentation() {
        let mut measurer = StubMeasurer::new(18.0);
        let item = build(None, "hello", 375.0, &mut measurer);
        let config = SizingConfig::default();

        assert_eq!(item.text().style, config.primary_text_style);
        assert_eq!(item.text().style.font_size, 16.0);
        assert_eq!(item.text_inset(), Insets::trbl(8.0, 12.0, 8.0, 12.0));
        assert_eq!(item.line_color(), Color::rgb8(204, 204, 204));
    }

    #[test]
    fn test_records_duration_and_url() {
        let mut measurer = StubMeasurer::new(18.0);
        let item = build(None, "", 375.0, &mut measurer);
        assert_eq!(item.audio_duration(), 3.5);
        assert_eq!(item.audio_url(), Path::new("clip.m4a"));
    }

    #[test]
    fn test_overridden_config() {
        let config = SizingConfig::default()
            .with_side_padding(40.0)
            .with_audio_control_height(56.0);
        let mut measurer = StubMeasurer::new(18.0);
        let mut ctx = SizingContext::new(375.0, &config, &mut measurer);
        let geometry = AudioGeometry::build(false, "x", &mut ctx);

        assert_eq!(geometry.total_size, BubbleSize::new(335.0, 34.0 + 56.0));
    }
}
