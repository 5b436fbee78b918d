//! Text measurement for `chatkit` bubbles.
//!
//! The `cosmic` feature provides [`cosmic::CosmicMeasurer`], which wraps text
//! at word boundaries with `cosmic-text` and reports the height of the laid
//! out block. Fonts come from the system font database.
//!
//! Heights are only as accurate as the match between the fonts loaded here and
//! the fonts the host renderer draws with. Load the renderer's fonts through
//! [`cosmic::CosmicMeasurer::font_system_mut`] when they differ.

#![deny(warnings)]

use chatkit::{IntrinsicSize, MeasureTextRequest, TextMeasurer};

/// Line height as a multiple of the font size, matching the renderer's default leading.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// A convenient concrete measurer selection.
///
/// Currently only cosmic-text is supported.
pub enum Measurer {
    #[cfg(feature = "cosmic")]
    Cosmic(cosmic::CosmicMeasurer),
}

impl Measurer {
    /// Create a default measurer.
    ///
    /// With the `cosmic` feature enabled, this loads the system fonts.
    #[cfg(feature = "cosmic")]
    pub fn new_default() -> Self {
        Self::Cosmic(cosmic::CosmicMeasurer::new_default())
    }
}

impl TextMeasurer for Measurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        match self {
            #[cfg(feature = "cosmic")]
            Self::Cosmic(measurer) => measurer.measure_text(request),
        }
    }
}

#[cfg(feature = "cosmic")]
pub mod cosmic {
    //! `cosmic-text` implementation of text measurement.

    use super::DEFAULT_LINE_HEIGHT;

    use chatkit::{IntrinsicSize, MeasureTextRequest, TextMeasurer};
    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight, Wrap};

    /// Concrete measurer backed by `cosmic-text`.
    pub struct CosmicMeasurer {
        font_system: FontSystem,
        line_height: f32,
    }

    impl CosmicMeasurer {
        /// Create the measurer and load the system fonts.
        pub fn new_default() -> Self {
            let font_system = FontSystem::new();
            log::info!(
                "Loaded {} font faces for text measurement",
                font_system.db().len()
            );

            Self {
                font_system,
                line_height: DEFAULT_LINE_HEIGHT,
            }
        }

        /// Set the line height as a multiple of the font size
        pub fn with_line_height(mut self, line_height: f32) -> Self {
            self.line_height = line_height;
            self
        }

        /// Access the underlying `FontSystem` if callers want to load more fonts.
        pub fn font_system_mut(&mut self) -> &mut FontSystem {
            &mut self.font_system
        }
    }

    impl TextMeasurer for CosmicMeasurer {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            if request.text.is_empty() {
                return IntrinsicSize::zero();
            }

            let metrics = Metrics::new(request.font_size, request.font_size * self.line_height);
            let mut buffer = Buffer::new(&mut self.font_system, metrics);

            // Constrain the width only; height must never truncate the layout.
            buffer.set_wrap(&mut self.font_system, Wrap::Word);
            buffer.set_size(&mut self.font_system, Some(request.max_width), None);

            let attrs = Attrs::new()
                .family(Family::SansSerif)
                .weight(Weight(request.weight.value()));

            buffer.set_text(
                &mut self.font_system,
                request.text,
                &attrs,
                Shaping::Advanced,
                None,
            );
            buffer.shape_until_scroll(&mut self.font_system, false);

            // Each layout run is one visual line.
            let (width, height) = buffer
                .layout_runs()
                .fold((0.0f32, 0.0f32), |(width, height), run| {
                    (width.max(run.line_w), height.max(run.line_top + run.line_height))
                });

            IntrinsicSize::new(width, height)
        }
    }
}
