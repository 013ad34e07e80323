//! Dark violet theme colors

use ratatui::style::Color;

pub const BG: Color = Color::Rgb(0x03, 0x00, 0x14);
pub const SURFACE: Color = Color::Rgb(0x0f, 0x0d, 0x23);
pub const SURFACE_HIGH: Color = Color::Rgb(0x22, 0x1f, 0x3d);

pub const ON_SURFACE: Color = Color::Rgb(0xce, 0xce, 0xfb);
pub const SUBTEXT: Color = Color::Rgb(0xa8, 0xb5, 0xdb);
pub const OUTLINE: Color = Color::Rgb(0x4a, 0x47, 0x6b);

pub const PRIMARY: Color = Color::Rgb(0xab, 0x8b, 0xff);
pub const PRIMARY_CONTAINER: Color = Color::Rgb(0xd6, 0xc7, 0xff);

pub const RATING: Color = Color::Rgb(0xff, 0xd9, 0x66);

pub const ERROR: Color = Color::Rgb(0xff, 0xb4, 0xab);
