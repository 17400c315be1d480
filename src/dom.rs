//! `web-sys` implementation of the rendering surface.
//!
//! Element lookup and created controls follow one class-name
//! convention derived from the configured prefix: `{p}`, `{p}-content`,
//! `{p}-track`, arrows `{p}-arrow-prev` / `{p}-arrow-next`, dot strip
//! `{p}-dots` with `{p}-dot` buttons. The active dot carries the
//! `is-active` state class and `aria-current`.

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::error::CarouselError;
use crate::surface::{ArrowPair, DotStrip, ElementSet, Surface};

/// Rendering surface backed by the real document.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Surface over the page document.
    pub fn new() -> DomSurface {
        DomSurface {
            document: gloo_utils::document(),
        }
    }

    /// Surface over an explicitly injected document (e.g. an iframe).
    /// The keydown listener attaches to this document as well.
    pub fn with_document(document: Document) -> DomSurface {
        DomSurface { document }
    }

    fn query(&self, class: &str) -> Result<HtmlElement, CarouselError> {
        let selector = format!(".{}", class);
        self.document
            .query_selector(&selector)
            .map_err(|_| CarouselError::Dom(format!("bad selector {:?}", selector)))?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(CarouselError::MissingElement { selector })
    }

    fn make_button(&self, classes: &str, label: &str, text: &str) -> HtmlElement {
        let el: HtmlElement = self
            .document
            .create_element("button")
            .unwrap()
            .unchecked_into();
        el.set_class_name(classes);
        let _ = el.set_attribute("type", "button");
        let _ = el.set_attribute("aria-label", label);
        if !text.is_empty() {
            el.set_text_content(Some(text));
        }
        el
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        DomSurface::new()
    }
}

/// Attached DOM listener; detaches and frees its closure on drop.
pub struct DomListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

fn listen(
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
) -> DomListener {
    let _ = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref());
    DomListener {
        target,
        kind,
        callback,
    }
}

impl Surface for DomSurface {
    type Element = HtmlElement;
    type Listener = DomListener;
    type Timer = Interval;

    fn discover(&self, prefix: &str) -> Result<ElementSet<HtmlElement>, CarouselError> {
        let container = self.query(prefix)?;
        let content = self.query(&format!("{}-content", prefix))?;
        let track = self.query(&format!("{}-track", prefix))?;
        let items = self.track_items(&track);
        Ok(ElementSet {
            container,
            content,
            track,
            items,
        })
    }

    fn create_arrows(&self, content: &HtmlElement, prefix: &str) -> ArrowPair<HtmlElement> {
        let prev = self.make_button(
            &format!("{0}-arrow {0}-arrow-prev", prefix),
            "Previous slide",
            "\u{2039}",
        );
        let next = self.make_button(
            &format!("{0}-arrow {0}-arrow-next", prefix),
            "Next slide",
            "\u{203a}",
        );
        let _ = content.append_child(&prev);
        let _ = content.append_child(&next);
        ArrowPair { prev, next }
    }

    fn create_dots(
        &self,
        container: &HtmlElement,
        prefix: &str,
        count: usize,
    ) -> DotStrip<HtmlElement> {
        let wrap: HtmlElement = self
            .document
            .create_element("div")
            .unwrap()
            .unchecked_into();
        wrap.set_class_name(&format!("{}-dots", prefix));
        let mut dots = Vec::with_capacity(count);
        for i in 0..count {
            let dot = self.make_button(&self.dot_class(prefix), &format!("Go to slide {}", i + 1), "");
            let _ = wrap.append_child(&dot);
            dots.push(dot);
        }
        let _ = container.append_child(&wrap);
        DotStrip { wrap, dots }
    }

    fn remove(&self, el: &HtmlElement) {
        el.remove();
    }

    fn set_min_width(&self, items: &[HtmlElement], px: f64) {
        for item in items {
            let _ = item.style().set_property("min-width", &format!("{}px", px));
        }
    }

    fn set_track_offset(&self, track: &HtmlElement, px: f64) {
        let _ = track
            .style()
            .set_property("transform", &format!("translateX({}px)", px));
    }

    fn set_disabled(&self, el: &HtmlElement, disabled: bool) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }

    fn set_active_dot(&self, dots: &[HtmlElement], active: usize) {
        for (i, dot) in dots.iter().enumerate() {
            if i == active {
                let _ = dot.class_list().add_1("is-active");
                let _ = dot.set_attribute("aria-current", "true");
            } else {
                let _ = dot.class_list().remove_1("is-active");
                let _ = dot.remove_attribute("aria-current");
            }
        }
    }

    fn dot_class(&self, prefix: &str) -> String {
        format!("{}-dot", prefix)
    }

    fn has_class(&self, el: &HtmlElement, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn measure_content_width(&self, content: &HtmlElement) -> f64 {
        content.client_width() as f64
    }

    fn track_items(&self, track: &HtmlElement) -> Vec<HtmlElement> {
        let children = track.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn on_click(
        &self,
        el: &HtmlElement,
        mut handler: Box<dyn FnMut(Option<HtmlElement>)>,
    ) -> DomListener {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            handler(target);
        }) as Box<dyn FnMut(Event)>);
        listen(EventTarget::from(el.clone()), "click", callback)
    }

    fn on_keydown(&self, mut handler: Box<dyn FnMut(&str)>) -> DomListener {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                handler(&key_event.key());
            }
        }) as Box<dyn FnMut(Event)>);
        listen(EventTarget::from(self.document.clone()), "keydown", callback)
    }

    fn start_interval(&self, ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(ms, tick)
    }
}
