//! Horizontal scroller for the trending strip.
//!
//! Units are whatever the front end measures the strip in (terminal
//! columns for the TUI). The scroller never touches rendering; it owns the
//! offset, the animation target and the swipe gesture.

use crate::config::GalleryConfig;
use serde::{Deserialize, Serialize};

/// Right-edge slack when deciding whether more content is hidden
const EDGE_TOLERANCE: f32 = 1.0;

/// Fraction of the remaining distance covered per animation tick
const EASE_FACTOR: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Wide,
    /// Narrow or touch layout: bigger steps, no side buttons
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    pub wide_fraction: f32,
    pub narrow_fraction: f32,
    pub swipe_threshold: f32,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            wide_fraction: 0.5,
            narrow_fraction: 0.75,
            swipe_threshold: 50.0,
        }
    }
}

impl From<&GalleryConfig> for GallerySettings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            wide_fraction: config.wide_fraction,
            narrow_fraction: config.narrow_fraction,
            swipe_threshold: config.swipe_threshold,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Touch {
    start: f32,
    position: f32,
}

#[derive(Debug, Clone)]
pub struct GalleryScroller {
    settings: GallerySettings,
    layout: Layout,
    offset: f32,
    target: f32,
    scroll_width: f32,
    client_width: f32,
    can_scroll_left: bool,
    can_scroll_right: bool,
    touch: Option<Touch>,
}

impl GalleryScroller {
    #[must_use]
    pub fn new(settings: GallerySettings) -> Self {
        Self {
            settings,
            layout: Layout::Wide,
            offset: 0.0,
            target: 0.0,
            scroll_width: 0.0,
            client_width: 0.0,
            can_scroll_left: false,
            can_scroll_right: true,
            touch: None,
        }
    }

    /// Recompute edge flags from the container's current geometry.
    ///
    /// Called on every scroll event and whenever the content changes.
    /// An externally driven scroll also cancels any running animation.
    pub fn update_metrics(&mut self, offset: f32, scroll_width: f32, client_width: f32) {
        self.apply_metrics(offset, scroll_width, client_width);
        self.target = self.offset;
    }

    /// Keep the current offset but re-measure the container (resize, new content)
    pub fn resize(&mut self, scroll_width: f32, client_width: f32) {
        self.apply_metrics(self.offset, scroll_width, client_width);
        self.target = self.target.clamp(0.0, self.max_offset());
    }

    fn apply_metrics(&mut self, offset: f32, scroll_width: f32, client_width: f32) {
        self.scroll_width = scroll_width;
        self.client_width = client_width;
        self.offset = offset.clamp(0.0, self.max_offset());
        self.can_scroll_left = self.offset > 0.0;
        self.can_scroll_right = self.offset < scroll_width - client_width - EDGE_TOLERANCE;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn can_scroll_left(&self) -> bool {
        self.can_scroll_left
    }

    #[must_use]
    pub fn can_scroll_right(&self) -> bool {
        self.can_scroll_right
    }

    /// Side buttons are only offered on wide layouts
    #[must_use]
    pub fn show_buttons(&self) -> bool {
        self.layout == Layout::Wide
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.target - self.offset).abs() > f32::EPSILON
    }

    fn max_offset(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    fn step(&self) -> f32 {
        let fraction = match self.layout {
            Layout::Wide => self.settings.wide_fraction,
            Layout::Narrow => self.settings.narrow_fraction,
        };
        self.client_width * fraction
    }

    /// Start a smooth scroll by one step. Returns the signed distance requested.
    pub fn scroll(&mut self, direction: Direction) -> f32 {
        let delta = match direction {
            Direction::Left => -self.step(),
            Direction::Right => self.step(),
        };
        self.target = (self.target + delta).clamp(0.0, self.max_offset());
        delta
    }

    /// Advance the animation one frame. Returns `true` if the offset moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let remaining = self.target - self.offset;
        let next = if remaining.abs() <= 1.0 {
            self.target
        } else {
            self.offset + remaining * EASE_FACTOR
        };
        self.apply_metrics(next, self.scroll_width, self.client_width);
        true
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch = Some(Touch {
            start: x,
            position: x,
        });
    }

    pub fn touch_move(&mut self, x: f32) {
        if let Some(touch) = self.touch.as_mut() {
            touch.position = x;
        }
    }

    /// Finish a gesture. A drag past the threshold scrolls one step in the
    /// direction of travel of the content; smaller drags do nothing.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let touch = self.touch.take()?;
        let travelled = touch.start - touch.position;
        let direction = if travelled > self.settings.swipe_threshold {
            Direction::Right
        } else if travelled < -self.settings.swipe_threshold {
            Direction::Left
        } else {
            return None;
        };
        self.scroll(direction);
        Some(direction)
    }
}

impl Default for GalleryScroller {
    fn default() -> Self {
        Self::new(GallerySettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(scroller: &mut GalleryScroller) {
        for _ in 0..100 {
            if !scroller.tick() {
                break;
            }
        }
    }

    #[test]
    fn test_edge_flags() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 300.0, 100.0);
        assert!(!scroller.can_scroll_left());
        assert!(scroller.can_scroll_right());

        scroller.update_metrics(199.5, 300.0, 100.0);
        assert!(scroller.can_scroll_left());
        assert!(!scroller.can_scroll_right());
    }

    #[test]
    fn test_content_narrower_than_view() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 80.0, 100.0);
        assert!(!scroller.can_scroll_left());
        assert!(!scroller.can_scroll_right());
    }

    #[test]
    fn test_scroll_step_depends_on_layout() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 1000.0, 100.0);
        assert!((scroller.scroll(Direction::Right) - 50.0).abs() < f32::EPSILON);

        scroller.set_layout(Layout::Narrow);
        assert!((scroller.scroll(Direction::Left) + 75.0).abs() < f32::EPSILON);
        assert!(!scroller.show_buttons());
    }

    #[test]
    fn test_scroll_animates_to_target() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 1000.0, 100.0);
        scroller.scroll(Direction::Right);
        assert!(scroller.is_animating());
        assert!(scroller.tick());
        assert!(scroller.offset() > 0.0 && scroller.offset() < 50.0);
        settle(&mut scroller);
        assert!((scroller.offset() - 50.0).abs() < f32::EPSILON);
        assert!(scroller.can_scroll_left());
    }

    #[test]
    fn test_scroll_target_is_clamped() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 120.0, 100.0);
        scroller.scroll(Direction::Right);
        settle(&mut scroller);
        assert!((scroller.offset() - 20.0).abs() < f32::EPSILON);
        assert!(!scroller.can_scroll_right());
    }

    #[test]
    fn test_resize_keeps_animation_target_in_range() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 1000.0, 100.0);
        scroller.scroll(Direction::Right);
        scroller.resize(130.0, 100.0);
        settle(&mut scroller);
        assert!((scroller.offset() - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_swipe_left_scrolls_right() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 1000.0, 100.0);
        scroller.touch_start(200.0);
        scroller.touch_move(120.0);
        assert_eq!(scroller.touch_end(), Some(Direction::Right));
        assert!(scroller.is_animating());
    }

    #[test]
    fn test_swipe_right_scrolls_left() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(500.0, 1000.0, 100.0);
        scroller.touch_start(10.0);
        scroller.touch_move(90.0);
        assert_eq!(scroller.touch_end(), Some(Direction::Left));
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut scroller = GalleryScroller::default();
        scroller.update_metrics(0.0, 1000.0, 100.0);
        scroller.touch_start(100.0);
        scroller.touch_move(60.0);
        assert_eq!(scroller.touch_end(), None);
        assert!(!scroller.is_animating());
        assert_eq!(scroller.touch_end(), None);
    }
}
