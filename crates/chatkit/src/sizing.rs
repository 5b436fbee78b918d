//! Sizing rules shared by the compound bubble layouts.
//!
//! Every rule degrades to zero for missing input instead of failing: no image
//! gives no image area, empty text gives no text area, a viewport narrower than
//! the side padding gives a zero width bubble.

use crate::config::SizingConfig;
use crate::content::StyledText;
use crate::geometry::Insets;
use crate::measure::{MeasureTextRequest, TextMeasurer};

/// Inputs shared by every geometry builder: where the bubble will be laid out
/// and how to measure text there.
///
/// Geometry is computed once from `viewport_width`; when the viewport changes
/// the caller builds new content with a new context.
pub struct SizingContext<'a> {
    pub viewport_width: f32,
    pub config: &'a SizingConfig,
    pub measurer: &'a mut dyn TextMeasurer,
}

impl<'a> SizingContext<'a> {
    pub fn new(
        viewport_width: f32,
        config: &'a SizingConfig,
        measurer: &'a mut dyn TextMeasurer,
    ) -> Self {
        Self {
            viewport_width,
            config,
            measurer,
        }
    }

    pub fn bubble_width(&self, rule: WidthRule) -> f32 {
        bubble_width(self.viewport_width, rule, self.config)
    }

    pub fn image_height(&self, has_image: bool, bubble_width: f32) -> f32 {
        image_height(has_image, bubble_width, self.config)
    }

    pub fn text_area_height(
        &mut self,
        text: Option<&StyledText>,
        inset: Insets,
        max_width: f32,
    ) -> f32 {
        text_area_height(text, inset, max_width, &mut *self.measurer)
    }
}

/// Which width rule a bubble follows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthRule {
    /// Viewport width minus the side padding
    Standard,
    /// As `Standard`, unless the item is a bare audio control (no image and no
    /// text), which gets the fixed audio-only width
    Audio { has_image: bool, has_text: bool },
}

impl WidthRule {
    pub const fn is_audio_only(&self) -> bool {
        matches!(
            self,
            WidthRule::Audio {
                has_image: false,
                has_text: false
            }
        )
    }
}

/// Width of a bubble laid out in a viewport of `viewport_width`.
///
/// ```
/// # use chatkit::{bubble_width, SizingConfig, WidthRule};
/// let config = SizingConfig::default();
/// assert_eq!(bubble_width(375.0, WidthRule::Standard, &config), 280.0);
///
/// let bare_audio = WidthRule::Audio { has_image: false, has_text: false };
/// assert_eq!(bubble_width(1024.0, bare_audio, &config), 160.0);
/// ```
pub fn bubble_width(viewport_width: f32, rule: WidthRule, config: &SizingConfig) -> f32 {
    if rule.is_audio_only() {
        return config.audio_only_width;
    }

    (viewport_width - config.side_padding).max(0.0)
}

/// Height of the preview image area.
///
/// Width drives height through the fixed aspect ratio; the source image's own
/// proportions are ignored, so the host crops or letterboxes.
pub fn image_height(has_image: bool, bubble_width: f32, config: &SizingConfig) -> f32 {
    if !has_image {
        return 0.0;
    }

    bubble_width * config.image_aspect
}

/// Height of a text area: measured text plus vertical insets, rounded up.
///
/// Text wraps at `max_width` minus the horizontal insets. Rounding is always
/// up so the area can never clip the text it holds.
pub fn text_area_height<M: TextMeasurer + ?Sized>(
    text: Option<&StyledText>,
    inset: Insets,
    max_width: f32,
    measurer: &mut M,
) -> f32 {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return 0.0;
    };

    let wrap_width = (max_width - inset.get_horizontal()).max(0.0);
    let measured = measurer.measure_text(MeasureTextRequest::from_styled_text(text, wrap_width));

    (measured.height + inset.get_vertical()).ceil()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::TextStyle;
    use crate::measure::{FixedAdvanceMeasurer, IntrinsicSize};

    /// Reports the same height for any text and records the widths it was asked for.
    pub(crate) struct StubMeasurer {
        pub height: f32,
        pub widths: Vec<f32>,
    }

    impl StubMeasurer {
        pub(crate) fn new(height: f32) -> Self {
            Self {
                height,
                widths: Vec::new(),
            }
        }
    }

    impl TextMeasurer for StubMeasurer {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            self.widths.push(request.max_width);
            IntrinsicSize::new(request.max_width, self.height)
        }
    }

    #[test]
    fn test_standard_width_subtracts_padding() {
        let config = SizingConfig::default();
        assert_eq!(bubble_width(375.0, WidthRule::Standard, &config), 280.0);
        assert_eq!(bubble_width(414.0, WidthRule::Standard, &config), 319.0);
    }

    #[test]
    fn test_narrow_viewport_clamps_to_zero() {
        let config = SizingConfig::default();
        assert_eq!(bubble_width(50.0, WidthRule::Standard, &config), 0.0);
    }

    #[test]
    fn test_audio_only_width_ignores_viewport() {
        let config = SizingConfig::default();
        let rule = WidthRule::Audio {
            has_image: false,
            has_text: false,
        };
        for viewport in [0.0, 320.0, 375.0, 2048.0] {
            assert_eq!(bubble_width(viewport, rule, &config), 160.0);
        }
    }

    #[test]
    fn test_audio_with_content_uses_standard_width() {
        let config = SizingConfig::default();
        let with_text = WidthRule::Audio {
            has_image: false,
            has_text: true,
        };
        let with_image = WidthRule::Audio {
            has_image: true,
            has_text: false,
        };
        assert_eq!(bubble_width(375.0, with_text, &config), 280.0);
        assert_eq!(bubble_width(375.0, with_image, &config), 280.0);
    }

    #[test]
    fn test_image_height_is_three_quarters() {
        let config = SizingConfig::default();
        for width in [0.0, 1.0, 160.0, 280.0, 319.0, 1000.5] {
            assert_eq!(image_height(true, width, &config), width * 0.75);
            assert_eq!(image_height(false, width, &config), 0.0);
        }
    }

    #[test]
    fn test_empty_text_has_no_area() {
        let mut measurer = StubMeasurer::new(18.0);
        let inset = Insets::trbl(8.0, 12.0, 8.0, 12.0);
        let empty = StyledText::plain("");

        assert_eq!(text_area_height(None, inset, 280.0, &mut measurer), 0.0);
        assert_eq!(
            text_area_height(Some(&empty), inset, 280.0, &mut measurer),
            0.0
        );
        assert!(measurer.widths.is_empty());
    }

    #[test]
    fn test_text_area_adds_insets_and_wraps_inside_them() {
        let mut measurer = StubMeasurer::new(18.0);
        let inset = Insets::trbl(8.0, 12.0, 8.0, 12.0);
        let text = StyledText::plain("hi");

        assert_eq!(
            text_area_height(Some(&text), inset, 280.0, &mut measurer),
            34.0
        );
        assert_eq!(measurer.widths, vec![256.0]);
    }

    #[test]
    fn test_text_area_rounds_up() {
        let mut measurer = StubMeasurer::new(25.2);
        let inset = Insets::trbl(8.0, 12.0, 8.0, 12.0);
        let text = StyledText::plain("hi");

        // 25.2 + 16 = 41.2 -> 42
        assert_eq!(
            text_area_height(Some(&text), inset, 280.0, &mut measurer),
            42.0
        );
    }

    #[test]
    fn test_text_area_grows_with_line_count() {
        let mut measurer = FixedAdvanceMeasurer::default();
        let inset = Insets::trbl(8.0, 12.0, 8.0, 12.0);
        let style = TextStyle::default();

        let mut previous = 0.0;
        let mut text = String::new();
        for _ in 0..40 {
            text.push_str("lorem ipsum ");
            let styled = StyledText::new(text.clone(), style);
            let height = text_area_height(Some(&styled), inset, 120.0, &mut measurer);
            assert!(height >= previous);
            previous = height;
        }
        assert!(previous > 100.0);
    }
}
