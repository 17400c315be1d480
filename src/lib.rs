//! karussell — a small carousel widget controller for the browser.
//!
//! Given a container/content/track element structure identified by a
//! class-name prefix, the controller manages which slide is visible,
//! creates arrow and dot navigation, and advances on an autoplay
//! interval. The slide state machine is generic over a [`Surface`], so
//! the core runs (and its tests run) without a browser; [`DomSurface`]
//! binds it to the real document.
//!
//! ```no_run
//! use karussell::{Carousel, CarouselOptions, DomSurface};
//!
//! # fn main() -> Result<(), karussell::CarouselError> {
//! let carousel = Carousel::new(
//!     DomSurface::new(),
//!     CarouselOptions {
//!         items_per_slide: 3,
//!         items_per_scroll: 3,
//!         ..CarouselOptions::default()
//!     },
//! )?;
//! carousel.next();
//! # Ok(())
//! # }
//! ```

use wasm_bindgen::prelude::*;

mod carousel;
mod config;
mod dom;
mod error;
mod layout;
mod surface;
mod validate;

pub use carousel::Carousel;
pub use config::{AutoplayDirection, CarouselOptions, OptionsPatch};
pub use dom::{DomListener, DomSurface};
pub use error::CarouselError;
pub use layout::Layout;
pub use surface::{ArrowPair, DotStrip, ElementSet, Surface};
pub use validate::{check_options, check_update};

/// Install the panic hook so controller panics show up in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ── JS boundary ─────────────────────────────────────────────────────

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The carousel as seen from JavaScript.
///
/// Wraps [`Carousel`] over [`DomSurface`]; options cross the boundary
/// as plain objects carrying the camelCase field names, with omitted
/// fields taking their defaults.
#[wasm_bindgen(js_name = Carousel)]
pub struct JsCarousel {
    inner: Carousel<DomSurface>,
}

#[wasm_bindgen(js_class = Carousel)]
impl JsCarousel {
    /// `new Carousel(options?)`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsCarousel, JsValue> {
        let opts: CarouselOptions = if options.is_undefined() || options.is_null() {
            CarouselOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| to_js_err(format!("invalid options: {}", e)))?
        };
        let inner = Carousel::new(DomSurface::new(), opts).map_err(to_js_err)?;
        Ok(JsCarousel { inner })
    }

    /// Merge a partial options object and re-run the update cycle.
    /// Throws without touching the running carousel when the new
    /// configuration is rejected.
    #[wasm_bindgen(js_name = updateParams)]
    pub fn update_params(&self, patch: JsValue) -> Result<(), JsValue> {
        let patch: OptionsPatch = if patch.is_undefined() || patch.is_null() {
            OptionsPatch::default()
        } else {
            serde_wasm_bindgen::from_value(patch)
                .map_err(|e| to_js_err(format!("invalid options: {}", e)))?
        };
        self.inner.update(patch).map_err(to_js_err)
    }

    pub fn next(&self) {
        self.inner.next();
    }

    pub fn prev(&self) {
        self.inner.prev();
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, slide: usize) {
        self.inner.go_to(slide);
    }

    #[wasm_bindgen(getter, js_name = activeSlide)]
    pub fn active_slide(&self) -> usize {
        self.inner.active_slide()
    }

    #[wasm_bindgen(getter, js_name = slidesCount)]
    pub fn slides_count(&self) -> usize {
        self.inner.slides_count()
    }

    /// Cancel autoplay, detach all listeners, and remove the created
    /// controls.
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}
