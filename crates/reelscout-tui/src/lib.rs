//! Widgets for the reelscout terminal browser.
//!
//! Kept in a library so they can be unit tested without a terminal.

pub mod widgets;
