//! Controller-agnostic command definitions
//!
//! This module defines the small set of command bytes shared across the
//! common monochrome OLED controller families (SSD1305/1306/1309, SH1106/7).
//! Controller-specific initialization sequences are out of scope for this
//! core and belong to display-specific layers built on top of it; those
//! layers send their own bytes through
//! [`Display::send_command_list`](crate::Display::send_command_list).

/// Set contrast command (0x81)
///
/// Followed by one data byte: the contrast level, 0x00 to 0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Normal display mode command (0xA6)
///
/// RAM bit 1 lights the pixel. This is the power-on default on the common
/// controller families.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display mode command (0xA7)
///
/// RAM bit 0 lights the pixel. Takes effect immediately without touching
/// display RAM or the framebuffer.
pub const INVERT_DISPLAY: u8 = 0xA7;
