//! Property tests for the page window calculator

use crate::window::{PageSlot, compact_window, effective_total_pages, fixed_window};
use proptest::prelude::*;

fn page_and_total() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=500).prop_flat_map(|total| (1..=total, Just(total)))
}

proptest! {
    #[test]
    fn windows_tolerate_any_current_page(
        current in 0u32..=u32::MAX / 2,
        total in 1u32..=500,
        width in 1u32..=9,
    ) {
        let clamped = current.clamp(1, total);
        let window = fixed_window(current, total, width);
        prop_assert_eq!(window.len() as u32, width.min(total));
        prop_assert!(window.contains(&clamped));
        prop_assert!(*window.last().unwrap() <= total);

        let slots = compact_window(current, total);
        prop_assert!(slots.contains(&PageSlot::Page(clamped)));
    }

    #[test]
    fn fixed_window_is_contiguous_and_in_range(
        (current, total) in page_and_total(),
        width in 1u32..=9,
    ) {
        let window = fixed_window(current, total, width);
        prop_assert_eq!(window.len() as u32, width.min(total));
        prop_assert!(window.contains(&current));
        prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(window[0] >= 1);
        prop_assert!(*window.last().unwrap() <= total);
    }

    #[test]
    fn compact_window_is_ascending_with_edge_ellipses(
        (current, total) in page_and_total(),
    ) {
        let slots = compact_window(current, total);
        prop_assert!(slots.contains(&PageSlot::Page(current)));

        let pages: Vec<u32> = slots.iter().filter_map(|s| s.page()).collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(pages.iter().all(|p| (1..=total).contains(p)));

        let ellipses = slots.iter().filter(|s| **s == PageSlot::Ellipsis).count();
        prop_assert!(ellipses <= 2);
        for (i, slot) in slots.iter().enumerate() {
            if *slot == PageSlot::Ellipsis {
                prop_assert!(i == 0 || i == slots.len() - 1);
            }
        }
    }

    #[test]
    fn windows_are_idempotent(
        (current, total) in page_and_total(),
        width in 1u32..=9,
    ) {
        prop_assert_eq!(fixed_window(current, total, width), fixed_window(current, total, width));
        prop_assert_eq!(compact_window(current, total), compact_window(current, total));
    }

    #[test]
    fn effective_total_stays_in_bounds(total in 0u32..100_000, cap in 1u32..1_000) {
        let effective = effective_total_pages(total, cap);
        prop_assert!(effective >= 1);
        prop_assert!(effective <= cap);
    }
}
