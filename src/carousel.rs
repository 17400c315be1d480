//! The carousel controller: slide-position state machine, navigation
//! chrome refresh, autoplay lifecycle, and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::{AutoplayDirection, CarouselOptions, OptionsPatch};
use crate::error::CarouselError;
use crate::layout::Layout;
use crate::surface::{ArrowPair, DotStrip, ElementSet, Surface};
use crate::validate;

const KEY_PREV: &str = "ArrowLeft";
const KEY_NEXT: &str = "ArrowRight";

/// One carousel instance bound to a discovered element set.
///
/// All state lives behind a shared cell so event handlers hold weak
/// references to it; dropping the controller (or calling
/// [`dispose`](Carousel::dispose)) is enough to silence every handler.
pub struct Carousel<S: Surface + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

struct Inner<S: Surface> {
    surface: S,
    opts: CarouselOptions,
    layout: Layout,
    active_slide: usize,
    els: ElementSet<S::Element>,
    arrows: Option<ArrowPair<S::Element>>,
    dots: Option<DotStrip<S::Element>>,
    autoplay: Option<S::Timer>,
    keydown: Option<S::Listener>,
    nav_listeners: Vec<S::Listener>,
}

impl<S: Surface + 'static> Carousel<S> {
    /// Validate `opts`, discover the element set, and run the first
    /// update cycle. Nothing is left attached on error.
    pub fn new(surface: S, opts: CarouselOptions) -> Result<Self, CarouselError> {
        validate::check_options(&opts)?;
        let els = surface.discover(&opts.prefix)?;
        info!(
            "carousel {:?}: discovered {} items",
            opts.prefix,
            els.items.len()
        );
        let layout = Layout::derive(&opts, 0.0, els.items.len());
        let inner = Rc::new(RefCell::new(Inner {
            surface,
            opts,
            layout,
            active_slide: 0,
            els,
            arrows: None,
            dots: None,
            autoplay: None,
            keydown: None,
            nav_listeners: Vec::new(),
        }));
        run_update_cycle(&inner);
        Ok(Carousel { inner })
    }

    /// Merge `patch` onto the current options and re-run the full
    /// update cycle. On error the previous options, chrome, listeners,
    /// and timer all stay live.
    pub fn update(&self, patch: OptionsPatch) -> Result<(), CarouselError> {
        let next = {
            let inner = self.inner.borrow();
            let next = patch.apply(&inner.opts);
            validate::check_update(&inner.opts, &next)?;
            next
        };
        self.inner.borrow_mut().opts = next;
        run_update_cycle(&self.inner);
        Ok(())
    }

    /// Advance one slide forward, cancelling autoplay. Wraps when
    /// cyclic navigation is on; no-op at the last slide otherwise.
    pub fn next(&self) {
        step_next(&self.inner, true);
    }

    /// Advance one slide back, cancelling autoplay. Wraps when cyclic
    /// navigation is on; no-op at the first slide otherwise.
    pub fn prev(&self) {
        step_prev(&self.inner, true);
    }

    /// Jump to `slide`, cancelling autoplay. Out of range is ignored.
    pub fn go_to(&self, slide: usize) {
        let inner = &mut *self.inner.borrow_mut();
        if slide >= inner.layout.slides_count {
            warn!(
                "goTo({}) ignored: only {} slides",
                slide, inner.layout.slides_count
            );
            return;
        }
        inner.autoplay = None;
        set_active_slide(inner, slide);
    }

    /// Currently active slide index.
    pub fn active_slide(&self) -> usize {
        self.inner.borrow().active_slide
    }

    /// Number of navigable positions.
    pub fn slides_count(&self) -> usize {
        self.inner.borrow().layout.slides_count
    }

    /// Current option record.
    pub fn options(&self) -> CarouselOptions {
        self.inner.borrow().opts.clone()
    }

    /// Tear the instance down: cancel autoplay, detach every listener,
    /// and remove the created controls. Idempotent.
    pub fn dispose(&self) {
        let inner = &mut *self.inner.borrow_mut();
        inner.autoplay.take();
        inner.keydown.take();
        inner.nav_listeners.clear();
        remove_chrome(inner);
        debug!("carousel {:?} disposed", inner.opts.prefix);
    }
}

/// Full update cycle: derive, refresh chrome, set the initial slide,
/// restart autoplay, rebind handlers. Runs on construction and after
/// every accepted reconfiguration.
fn run_update_cycle<S: Surface + 'static>(rc: &Rc<RefCell<Inner<S>>>) {
    {
        let inner = &mut *rc.borrow_mut();
        recalc_layout(inner);
        refresh_chrome(inner);
        let initial = inner.layout.clamp_initial(inner.opts.initial_slide);
        set_active_slide(inner, initial);
    }
    restart_autoplay(rc);
    attach_handlers(rc);
}

/// Reset the cursor and recompute the derived layout from live
/// geometry. Runs before any render decision.
fn recalc_layout<S: Surface>(inner: &mut Inner<S>) {
    inner.active_slide = 0;
    inner.els.items = inner.surface.track_items(&inner.els.track);
    let width = inner.surface.measure_content_width(&inner.els.content);
    inner.layout = Layout::derive(&inner.opts, width, inner.els.items.len());
    debug!(
        "layout: item_width={:.2}px items={} slides={}",
        inner.layout.item_width, inner.layout.items_count, inner.layout.slides_count
    );
}

/// Remove any previously created arrows and dots, recreate them while
/// still warranted, and push the per-item min-width.
fn refresh_chrome<S: Surface>(inner: &mut Inner<S>) {
    remove_chrome(inner);
    let warranted = inner.layout.needs_chrome(inner.opts.items_per_slide);
    if inner.opts.show_arrows && warranted {
        inner.arrows = Some(
            inner
                .surface
                .create_arrows(&inner.els.content, &inner.opts.prefix),
        );
    }
    if inner.opts.show_dots && warranted {
        inner.dots = Some(inner.surface.create_dots(
            &inner.els.container,
            &inner.opts.prefix,
            inner.layout.slides_count,
        ));
    }
    inner
        .surface
        .set_min_width(&inner.els.items, inner.layout.item_width);
}

/// Detach created arrows and dots, if any.
fn remove_chrome<S: Surface>(inner: &mut Inner<S>) {
    if let Some(arrows) = inner.arrows.take() {
        inner.surface.remove(&arrows.prev);
        inner.surface.remove(&arrows.next);
    }
    if let Some(dots) = inner.dots.take() {
        inner.surface.remove(&dots.wrap);
    }
}

/// Move the cursor and push track offset, arrow disabled state, and
/// the active dot out to the surface.
fn set_active_slide<S: Surface>(inner: &mut Inner<S>, slide: usize) {
    inner.active_slide = slide;
    let last = inner.layout.slides_count - 1;
    let offset = inner.layout.track_offset(&inner.opts, slide);
    inner.surface.set_track_offset(&inner.els.track, offset);
    if let Some(arrows) = &inner.arrows {
        let cycle = inner.opts.enable_cycle_nav;
        inner.surface.set_disabled(&arrows.prev, !cycle && slide == 0);
        inner
            .surface
            .set_disabled(&arrows.next, !cycle && slide == last);
    }
    if let Some(dots) = &inner.dots {
        inner.surface.set_active_dot(&dots.dots, slide);
    }
    debug!("slide {}/{} at {:.2}px", slide, last, offset);
}

/// Forward transition. `user` marks the autoplay-cancelling path;
/// timer ticks come through with `user == false` so a tick never drops
/// its own interval.
fn step_next<S: Surface>(rc: &Rc<RefCell<Inner<S>>>, user: bool) {
    let inner = &mut *rc.borrow_mut();
    let last = inner.layout.slides_count - 1;
    if !inner.opts.enable_cycle_nav && inner.active_slide == last {
        debug!("next ignored at last slide");
        return;
    }
    if user {
        inner.autoplay = None;
    }
    let target = if inner.active_slide == last {
        0
    } else {
        inner.active_slide + 1
    };
    set_active_slide(inner, target);
}

/// Backward transition, symmetric to [`step_next`].
fn step_prev<S: Surface>(rc: &Rc<RefCell<Inner<S>>>, user: bool) {
    let inner = &mut *rc.borrow_mut();
    if !inner.opts.enable_cycle_nav && inner.active_slide == 0 {
        debug!("prev ignored at first slide");
        return;
    }
    if user {
        inner.autoplay = None;
    }
    let target = if inner.active_slide == 0 {
        inner.layout.slides_count - 1
    } else {
        inner.active_slide - 1
    };
    set_active_slide(inner, target);
}

/// Delegated dot-strip click: filter to actual dots by marker class,
/// resolve the clicked dot to its index by element identity, and jump
/// there. Always cancels autoplay.
fn dot_click<S: Surface>(rc: &Rc<RefCell<Inner<S>>>, target: Option<S::Element>) {
    let inner = &mut *rc.borrow_mut();
    let Some(target) = target else { return };
    let slide = {
        let Some(dots) = &inner.dots else { return };
        let marker = inner.surface.dot_class(&inner.opts.prefix);
        if !inner.surface.has_class(&target, &marker) {
            return;
        }
        match dots.dots.iter().position(|dot| *dot == target) {
            Some(idx) => idx,
            None => return,
        }
    };
    inner.autoplay = None;
    set_active_slide(inner, slide);
}

/// Arrow-key navigation, routed through the cancelling path.
fn key_nav<S: Surface>(rc: &Rc<RefCell<Inner<S>>>, key: &str) {
    let enabled = rc.borrow().opts.enable_arrow_keys_nav;
    if !enabled {
        return;
    }
    match key {
        KEY_PREV => step_prev(rc, true),
        KEY_NEXT => step_next(rc, true),
        _ => {}
    }
}

/// Drop any running interval, then start a fresh one when autoplay is
/// enabled.
fn restart_autoplay<S: Surface + 'static>(rc: &Rc<RefCell<Inner<S>>>) {
    let inner = &mut *rc.borrow_mut();
    inner.autoplay = None;
    if !inner.opts.enable_autoplay {
        return;
    }
    let dir = inner.opts.autoplay_dir;
    let weak = Rc::downgrade(rc);
    let timer = inner.surface.start_interval(
        inner.opts.autoplay_speed,
        Box::new(move || {
            if let Some(rc) = weak.upgrade() {
                match dir {
                    AutoplayDirection::Ltr => step_next(&rc, false),
                    AutoplayDirection::Rtl => step_prev(&rc, false),
                }
            }
        }),
    );
    inner.autoplay = Some(timer);
}

/// Rebind all event handlers. Previous listeners are dropped first, so
/// however many times the cycle runs the document sees exactly one
/// keydown listener and each control exactly one click listener.
fn attach_handlers<S: Surface + 'static>(rc: &Rc<RefCell<Inner<S>>>) {
    let inner = &mut *rc.borrow_mut();
    inner.nav_listeners.clear();
    inner.keydown = None;

    if let Some(arrows) = &inner.arrows {
        let weak = Rc::downgrade(rc);
        inner.nav_listeners.push(inner.surface.on_click(
            &arrows.prev,
            Box::new(move |_| {
                if let Some(rc) = weak.upgrade() {
                    step_prev(&rc, true);
                }
            }),
        ));
        let weak = Rc::downgrade(rc);
        inner.nav_listeners.push(inner.surface.on_click(
            &arrows.next,
            Box::new(move |_| {
                if let Some(rc) = weak.upgrade() {
                    step_next(&rc, true);
                }
            }),
        ));
    }

    if let Some(dots) = &inner.dots {
        let weak = Rc::downgrade(rc);
        inner.nav_listeners.push(inner.surface.on_click(
            &dots.wrap,
            Box::new(move |target| {
                if let Some(rc) = weak.upgrade() {
                    dot_click(&rc, target);
                }
            }),
        ));
    }

    let weak = Rc::downgrade(rc);
    inner.keydown = Some(inner.surface.on_keydown(Box::new(move |key| {
        if let Some(rc) = weak.upgrade() {
            key_nav(&rc, key);
        }
    })));
}
