use crate::color::Color;
use crate::content::StyledText;
use crate::geometry::{BubbleSize, Insets};
use crate::items::{MediaItem, StyledTextItem, TemplateItem};
use crate::media::Image;
use crate::sizing::{SizingContext, WidthRule};

/// Layout of a template card: preview image, body text and an optional
/// call-to-action line stacked top to bottom with no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateGeometry {
    pub primary_text: StyledText,
    /// `None` when the card was built without action text
    pub secondary_action_text: Option<StyledText>,
    pub text_inset: Insets,
    pub secondary_inset: Insets,
    pub line_color: Color,
    pub preview_image_height: f32,
    pub text_area_height: f32,
    /// 0 when the action text is missing or empty
    pub secondary_area_height: f32,
    pub total_size: BubbleSize,
}

impl TemplateGeometry {
    pub fn build(
        has_image: bool,
        text: &str,
        action_text: Option<&str>,
        ctx: &mut SizingContext<'_>,
    ) -> Self {
        let config = ctx.config;

        // Styles are applied before measuring; height depends on font metrics
        let primary_text = StyledText::new(text, config.primary_text_style);
        let secondary_action_text =
            action_text.map(|action| StyledText::new(action, config.action_text_style));

        let width = ctx.bubble_width(WidthRule::Standard);
        let preview_image_height = ctx.image_height(has_image, width);
        let text_area_height = ctx.text_area_height(Some(&primary_text), config.text_inset, width);
        let secondary_area_height = ctx.text_area_height(
            secondary_action_text.as_ref(),
            config.secondary_inset,
            width,
        );

        let total_size = BubbleSize::new(
            width,
            preview_image_height + text_area_height + secondary_area_height,
        );

        log::debug!(
            "template bubble {}x{} (image {}, text {}, action {})",
            total_size.width,
            total_size.height,
            preview_image_height,
            text_area_height,
            secondary_area_height
        );

        Self {
            primary_text,
            secondary_action_text,
            text_inset: config.text_inset,
            secondary_inset: config.secondary_inset,
            line_color: config.line_color,
            preview_image_height,
            text_area_height,
            secondary_area_height,
            total_size,
        }
    }

    pub fn bubble_width(&self) -> f32 {
        self.total_size.width
    }
}

/// Call-to-action card message content.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContent {
    pub url: Option<String>,
    pub image: Option<Image>,
    pub placeholder_image: Image,
    geometry: TemplateGeometry,
}

impl TemplateContent {
    pub fn new(
        image: Option<Image>,
        text: &str,
        action_text: Option<&str>,
        ctx: &mut SizingContext<'_>,
    ) -> Self {
        let geometry = TemplateGeometry::build(image.is_some(), text, action_text, ctx);

        Self {
            url: None,
            image,
            placeholder_image: Image::empty(),
            geometry,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: Image) -> Self {
        self.placeholder_image = placeholder;
        self
    }

    pub fn geometry(&self) -> &TemplateGeometry {
        &self.geometry
    }
}

impl MediaItem for TemplateContent {
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

impl StyledTextItem for TemplateContent {
    fn text(&self) -> &StyledText {
        &self.geometry.primary_text
    }

    fn text_inset(&self) -> Insets {
        self.geometry.text_inset
    }

    fn line_color(&self) -> Color {
        self.geometry.line_color
    }

    fn image_height(&self) -> f32 {
        self.geometry.preview_image_height
    }

    fn text_area_height(&self) -> f32 {
        self.geometry.text_area_height
    }
}

impl TemplateItem for TemplateContent {
    fn action_text(&self) -> Option<&StyledText> {
        self.geometry.secondary_action_text.as_ref()
    }

    fn secondary_inset(&self) -> Insets {
        self.geometry.secondary_inset
    }

    fn secondary_area_height(&self) -> f32 {
        self.geometry.secondary_area_height
    }
}
