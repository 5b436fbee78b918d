//! Capability traits shared by media-like content, and the simple media items.
//!
//! The traits nest from the narrowest capability outwards so consumers can ask
//! for only what they use:
//!
//! - [`MediaItem`]: a sized bubble with an optional image and a placeholder
//! - [`StyledTextItem`]: adds a text area under the image
//! - [`AudioItem`] / [`TemplateItem`]: kind-specific regions

use std::path::Path;

use crate::color::Color;
use crate::config::SizingConfig;
use crate::content::StyledText;
use crate::geometry::{BubbleSize, Insets};
use crate::media::Image;

/// A bubble showing (possibly remote) media.
pub trait MediaItem {
    /// Remote location of the media, if it is not loaded yet
    fn url(&self) -> Option<&str>;
    fn image(&self) -> Option<&Image>;
    /// Shown while `image` is missing
    fn placeholder_image(&self) -> &Image;
    /// Size of the whole bubble
    fn size(&self) -> BubbleSize;
}

/// Media with a styled text area stacked under the preview image.
pub trait StyledTextItem: MediaItem {
    fn text(&self) -> &StyledText;
    fn text_inset(&self) -> Insets;
    /// Separator color between stacked regions
    fn line_color(&self) -> Color;
    /// Height of the preview image area, 0 without an image
    fn image_height(&self) -> f32;
    /// Height of the primary text area, 0 without text
    fn text_area_height(&self) -> f32;

    /// Size of the preview image area
    fn image_area_size(&self) -> BubbleSize {
        BubbleSize::new(self.size().width, self.image_height())
    }
}

/// Audio clip with optional preview image and caption.
pub trait AudioItem: StyledTextItem {
    fn audio_url(&self) -> &Path;
    /// Clip duration in seconds
    fn audio_duration(&self) -> f32;
    /// Size of the playback control strip
    fn audio_control_size(&self) -> BubbleSize;
}

/// Card with optional image, body text and call-to-action text.
pub trait TemplateItem: StyledTextItem {
    fn action_text(&self) -> Option<&StyledText>;
    fn secondary_inset(&self) -> Insets;
    /// Height of the call-to-action area, 0 without action text
    fn secondary_area_height(&self) -> f32;
}

/// Photo or video thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContent {
    pub url: Option<String>,
    pub image: Option<Image>,
    pub placeholder_image: Image,
    pub size: BubbleSize,
}

impl ImageContent {
    /// Image bubble at the configured media width and the fixed aspect ratio
    pub fn new(image: Image, config: &SizingConfig) -> Self {
        let width = config.media_width;
        Self {
            url: None,
            image: Some(image),
            placeholder_image: Image::empty(),
            size: BubbleSize::new(width, width * config.image_aspect),
        }
    }

    /// Media not downloaded yet; the placeholder is shown until it is
    pub fn remote(url: impl Into<String>, placeholder: Image, config: &SizingConfig) -> Self {
        let width = config.media_width;
        Self {
            url: Some(url.into()),
            image: None,
            placeholder_image: placeholder,
            size: BubbleSize::new(width, width * config.image_aspect),
        }
    }

    pub fn with_placeholder(mut self, placeholder: Image) -> Self {
        self.placeholder_image = placeholder;
        self
    }
}

impl MediaItem for ImageContent {
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
        self.size
    }
}

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map snapshot of a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationContent {
    pub location: Coordinate,
    pub size: BubbleSize,
}

impl LocationContent {
    pub fn new(location: Coordinate, config: &SizingConfig) -> Self {
        Self {
            location,
            size: config.location_size,
        }
    }
}

/// Shared contact card. Sized natively by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactContent {
    pub display_name: String,
    pub initials: String,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
}

impl ContactContent {
    pub fn new(display_name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            initials: initials.into(),
            phone_numbers: Vec::new(),
            emails: Vec::new(),
        }
    }

    pub fn with_phone_numbers(mut self, numbers: Vec<String>) -> Self {
        self.phone_numbers = numbers;
        self
    }

    pub fn with_emails(mut self, emails: Vec<String>) -> Self {
        self.emails = emails;
        self
    }
}
