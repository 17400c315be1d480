//! Derived layout parameters and track-offset math.

use crate::config::CarouselOptions;

/// Layout values recomputed from live geometry on every update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Width of a single item in px (content width / items per slide).
    pub item_width: f64,
    /// Number of slide items currently in the DOM.
    pub items_count: usize,
    /// Number of discrete navigable positions.
    pub slides_count: usize,
}

impl Layout {
    /// Recompute all derived values from the current options and the
    /// measured content geometry.
    pub fn derive(opts: &CarouselOptions, content_width: f64, items_count: usize) -> Layout {
        let item_width = content_width / opts.items_per_slide as f64;
        // One slide always exists; extra slides cover the items that do
        // not fit the first view, one scroll step at a time.
        let slides_count = if items_count > opts.items_per_slide {
            1 + (items_count - opts.items_per_slide).div_ceil(opts.items_per_scroll)
        } else {
            1
        };
        Layout {
            item_width,
            items_count,
            slides_count,
        }
    }

    /// Horizontal track offset in px for `active_slide`.
    ///
    /// Interior slides scroll by whole steps. The last slide instead
    /// pins the view to the trailing edge so a final partial group of
    /// items stays fully visible; the jump into it may therefore be
    /// shorter than the regular step.
    pub fn track_offset(&self, opts: &CarouselOptions, active_slide: usize) -> f64 {
        if active_slide == 0 {
            0.0
        } else if active_slide == self.slides_count - 1 {
            -(self.items_count as f64 * self.item_width)
                + opts.items_per_slide as f64 * self.item_width
        } else {
            -(active_slide as f64) * (opts.items_per_scroll as f64 * self.item_width)
        }
    }

    /// Clamp a requested initial slide down to the last valid position.
    pub fn clamp_initial(&self, requested: usize) -> usize {
        requested.min(self.slides_count - 1)
    }

    /// Arrows and dots are only warranted when not every item fits in
    /// one view.
    pub fn needs_chrome(&self, items_per_slide: usize) -> bool {
        items_per_slide < self.items_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(per_slide: usize, per_scroll: usize) -> CarouselOptions {
        CarouselOptions {
            items_per_slide: per_slide,
            items_per_scroll: per_scroll,
            ..CarouselOptions::default()
        }
    }

    #[test]
    fn slides_count_formula() {
        // 1 + ceil((items - per_slide) / per_scroll)
        assert_eq!(Layout::derive(&opts(3, 3), 360.0, 10).slides_count, 4);
        assert_eq!(Layout::derive(&opts(3, 3), 360.0, 9).slides_count, 3);
        assert_eq!(Layout::derive(&opts(1, 1), 360.0, 5).slides_count, 5);
        assert_eq!(Layout::derive(&opts(2, 1), 360.0, 5).slides_count, 4);
    }

    #[test]
    fn single_slide_when_everything_fits() {
        assert_eq!(Layout::derive(&opts(3, 3), 360.0, 3).slides_count, 1);
        assert_eq!(Layout::derive(&opts(5, 1), 360.0, 3).slides_count, 1);
        assert_eq!(Layout::derive(&opts(1, 1), 360.0, 0).slides_count, 1);
    }

    #[test]
    fn item_width_divides_content() {
        let layout = Layout::derive(&opts(3, 3), 360.0, 10);
        assert_eq!(layout.item_width, 120.0);
    }

    #[test]
    fn offsets_for_ten_items_three_per_slide() {
        let o = opts(3, 3);
        let layout = Layout::derive(&o, 360.0, 10);
        // w = 120: slides 0..=3 sit at 0, -3w, -6w, -7w (last one pinned,
        // not -9w).
        assert_eq!(layout.track_offset(&o, 0), 0.0);
        assert_eq!(layout.track_offset(&o, 1), -360.0);
        assert_eq!(layout.track_offset(&o, 2), -720.0);
        assert_eq!(layout.track_offset(&o, 3), -840.0);
    }

    #[test]
    fn last_slide_pins_to_trailing_edge() {
        let o = opts(4, 2);
        let layout = Layout::derive(&o, 400.0, 7);
        let last = layout.slides_count - 1;
        assert_eq!(
            layout.track_offset(&o, last),
            -((layout.items_count - o.items_per_slide) as f64 * layout.item_width)
        );
    }

    #[test]
    fn first_slide_offset_is_zero() {
        let o = opts(2, 2);
        let layout = Layout::derive(&o, 200.0, 8);
        assert_eq!(layout.track_offset(&o, 0), 0.0);
    }

    #[test]
    fn clamp_initial_only_clamps_down() {
        let layout = Layout::derive(&opts(3, 3), 360.0, 10);
        assert_eq!(layout.clamp_initial(99), 3);
        assert_eq!(layout.clamp_initial(2), 2);
        assert_eq!(layout.clamp_initial(0), 0);
    }

    #[test]
    fn chrome_only_when_items_overflow_one_view() {
        let layout = Layout::derive(&opts(3, 3), 360.0, 10);
        assert!(layout.needs_chrome(3));
        let snug = Layout::derive(&opts(3, 3), 360.0, 3);
        assert!(!snug.needs_chrome(3));
    }
}
