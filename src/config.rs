//! Carousel configuration: the user-facing option record and partial
//! updates merged onto it.

use serde::{Deserialize, Serialize};

// Default values for user-supplied options
pub const DEFAULT_PREFIX: &str = "carousel";
pub const DEFAULT_AUTOPLAY_SPEED_MS: u32 = 3_000;

/// Direction the autoplay timer advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoplayDirection {
    /// Each tick runs the forward ("next") transition.
    Ltr,
    /// Each tick runs the backward ("prev") transition.
    Rtl,
}

/// Full option record for one carousel instance.
///
/// Replaced as a whole on every reconfiguration; the active-slide
/// cursor lives in the controller, not here. Serde names are the
/// camelCase option names a JS caller passes, and omitted fields take
/// the values from [`CarouselOptions::default`].
///
/// From Rust, use struct-update syntax:
///
/// ```
/// use karussell::CarouselOptions;
///
/// let opts = CarouselOptions {
///     items_per_slide: 3,
///     items_per_scroll: 3,
///     ..CarouselOptions::default()
/// };
/// assert_eq!(opts.prefix, "carousel");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Class-name namespace used for element discovery and for the
    /// controls the carousel creates.
    pub prefix: String,
    /// Slide shown after construction and after every reconfiguration.
    /// Clamped down to the last slide if it names a position beyond it.
    pub initial_slide: usize,
    /// Items visible at once.
    pub items_per_slide: usize,
    /// Items advanced per navigation step.
    pub items_per_scroll: usize,
    /// Render prev/next arrow controls.
    pub show_arrows: bool,
    /// Render the dot indicator strip.
    pub show_dots: bool,
    /// Navigate with the left/right arrow keys.
    pub enable_arrow_keys_nav: bool,
    /// Wrap around at the first/last slide.
    pub enable_cycle_nav: bool,
    /// Advance automatically on a timer.
    pub enable_autoplay: bool,
    /// Autoplay tick interval in milliseconds.
    pub autoplay_speed: u32,
    /// Which transition the autoplay tick invokes.
    pub autoplay_dir: AutoplayDirection,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        CarouselOptions {
            prefix: DEFAULT_PREFIX.to_string(),
            initial_slide: 0,
            items_per_slide: 1,
            items_per_scroll: 1,
            show_arrows: true,
            show_dots: true,
            enable_arrow_keys_nav: true,
            enable_cycle_nav: true,
            enable_autoplay: true,
            autoplay_speed: DEFAULT_AUTOPLAY_SPEED_MS,
            autoplay_dir: AutoplayDirection::Ltr,
        }
    }
}

/// Partial override merged onto an existing option record.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsPatch {
    pub prefix: Option<String>,
    pub initial_slide: Option<usize>,
    pub items_per_slide: Option<usize>,
    pub items_per_scroll: Option<usize>,
    pub show_arrows: Option<bool>,
    pub show_dots: Option<bool>,
    pub enable_arrow_keys_nav: Option<bool>,
    pub enable_cycle_nav: Option<bool>,
    pub enable_autoplay: Option<bool>,
    pub autoplay_speed: Option<u32>,
    pub autoplay_dir: Option<AutoplayDirection>,
}

impl OptionsPatch {
    /// Produce a new full record from `base` plus this override.
    pub fn apply(&self, base: &CarouselOptions) -> CarouselOptions {
        CarouselOptions {
            prefix: self.prefix.clone().unwrap_or_else(|| base.prefix.clone()),
            initial_slide: self.initial_slide.unwrap_or(base.initial_slide),
            items_per_slide: self.items_per_slide.unwrap_or(base.items_per_slide),
            items_per_scroll: self.items_per_scroll.unwrap_or(base.items_per_scroll),
            show_arrows: self.show_arrows.unwrap_or(base.show_arrows),
            show_dots: self.show_dots.unwrap_or(base.show_dots),
            enable_arrow_keys_nav: self
                .enable_arrow_keys_nav
                .unwrap_or(base.enable_arrow_keys_nav),
            enable_cycle_nav: self.enable_cycle_nav.unwrap_or(base.enable_cycle_nav),
            enable_autoplay: self.enable_autoplay.unwrap_or(base.enable_autoplay),
            autoplay_speed: self.autoplay_speed.unwrap_or(base.autoplay_speed),
            autoplay_dir: self.autoplay_dir.unwrap_or(base.autoplay_dir),
        }
    }
}
