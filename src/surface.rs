//! Rendering-surface contract between the controller and the document.

use crate::error::CarouselError;

/// Structural elements one carousel instance operates on.
///
/// Discovered once at construction; `items` is re-queried on every
/// update cycle since the host page may add or remove slides.
#[derive(Debug, Clone)]
pub struct ElementSet<E> {
    /// Outermost element; parent of the dot strip.
    pub container: E,
    /// Viewport element the arrows attach to; its width drives the
    /// item width.
    pub content: E,
    /// Sliding strip holding all items.
    pub track: E,
    /// Slide items inside the track.
    pub items: Vec<E>,
}

/// Previous/next arrow controls created by the surface.
#[derive(Debug, Clone)]
pub struct ArrowPair<E> {
    pub prev: E,
    pub next: E,
}

/// Dot indicator strip created by the surface.
#[derive(Debug, Clone)]
pub struct DotStrip<E> {
    pub wrap: E,
    pub dots: Vec<E>,
}

/// Everything the controller needs from the document.
///
/// `Listener` and `Timer` are RAII handles: dropping a listener
/// detaches it, dropping a timer cancels the interval, which is how
/// the controller keeps its at-most-one invariants. [`DomSurface`]
/// implements this over `web-sys`; tests drive the controller through
/// a recording mock instead.
///
/// [`DomSurface`]: crate::DomSurface
pub trait Surface {
    /// Element handle. Compared by identity for dot lookup.
    type Element: Clone + PartialEq;
    /// Attached event listener; detaches on drop.
    type Listener;
    /// Running interval; cancelled on drop.
    type Timer;

    /// Locate the structural element set for `prefix`.
    fn discover(&self, prefix: &str) -> Result<ElementSet<Self::Element>, CarouselError>;

    /// Create prev/next arrows attached to `content`.
    fn create_arrows(&self, content: &Self::Element, prefix: &str) -> ArrowPair<Self::Element>;

    /// Create a strip of `count` dots attached to `container`.
    fn create_dots(
        &self,
        container: &Self::Element,
        prefix: &str,
        count: usize,
    ) -> DotStrip<Self::Element>;

    /// Detach an element (and its children) from the document. No-op if
    /// already detached.
    fn remove(&self, el: &Self::Element);

    /// Set an explicit min-width in px on each item.
    fn set_min_width(&self, items: &[Self::Element], px: f64);

    /// Set the horizontal translation of the track in px.
    fn set_track_offset(&self, track: &Self::Element, px: f64);

    /// Toggle the disabled visual/interaction state of a control.
    fn set_disabled(&self, el: &Self::Element, disabled: bool);

    /// Mark exactly the dot at `active` as the current one.
    fn set_active_dot(&self, dots: &[Self::Element], active: usize);

    /// Marker class identifying dots, used to filter delegated clicks.
    fn dot_class(&self, prefix: &str) -> String;

    /// Whether `el` carries `class`.
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;

    /// Current content width in px.
    fn measure_content_width(&self, content: &Self::Element) -> f64;

    /// Slide items currently inside the track.
    fn track_items(&self, track: &Self::Element) -> Vec<Self::Element>;

    /// Attach a click listener to `el`; the handler receives the event
    /// target so a strip listener can tell dots from gaps.
    fn on_click(
        &self,
        el: &Self::Element,
        handler: Box<dyn FnMut(Option<Self::Element>)>,
    ) -> Self::Listener;

    /// Attach a document-level keydown listener; the handler receives
    /// the key string of the event.
    fn on_keydown(&self, handler: Box<dyn FnMut(&str)>) -> Self::Listener;

    /// Start a repeating interval firing `tick` every `ms` milliseconds.
    fn start_interval(&self, ms: u32, tick: Box<dyn FnMut()>) -> Self::Timer;
}
