// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Addressing windows and clipping

use crate::Rotation;
use crate::Variant;

/// A rectangle in logical pixel coordinates, bounds included
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Window {
    /// First column
    pub x0: u16,

    /// First row
    pub y0: u16,

    /// Last column
    pub x1: u16,

    /// Last row
    pub y1: u16,
}

impl Window {
    /// Create a window from its corners
    #[must_use]
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the window width
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.x1.saturating_sub(self.x0).saturating_add(1)
    }

    /// Get the window height
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.y1.saturating_sub(self.y0).saturating_add(1)
    }

    /// Get the number of pixels in the window
    #[must_use]
    pub fn pixel_count(&self) -> u32 {
        u32::from(self.width()) * u32::from(self.height())
    }
}

/// Geometry of a display: native and logical size, frame buffer offsets and rotation
///
/// The logical size is the size after rotation, and all drawing operations
/// are clipped against it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DisplayState {
    /// Width in portrait orientation
    native_width: u16,

    /// Height in portrait orientation
    native_height: u16,

    /// Width after rotation
    width: u16,

    /// Height after rotation
    height: u16,

    /// Column offset added to every addressing window
    col_start: u16,

    /// Row offset added to every addressing window
    row_start: u16,

    /// Current rotation
    rotation: Rotation,
}

impl DisplayState {
    /// Create a state for a panel variant of the given native size, not rotated
    #[must_use]
    pub const fn new(variant: Variant, native_width: u16, native_height: u16) -> Self {
        Self {
            native_width,
            native_height,
            width: native_width,
            height: native_height,
            col_start: variant.col_start(),
            row_start: variant.row_start(),
            rotation: Rotation::Rotate0,
        }
    }

    /// Get the width after rotation
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height after rotation
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the column offset
    #[must_use]
    pub const fn col_start(&self) -> u16 {
        self.col_start
    }

    /// Get the row offset
    #[must_use]
    pub const fn row_start(&self) -> u16 {
        self.row_start
    }

    /// Get the current rotation
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation, updating the logical size
    pub fn rotate(&mut self, rotation: Rotation) {
        let (width, height) = rotation.logical_size(self.native_width, self.native_height);
        self.rotation = rotation;
        self.width = width;
        self.height = height;
    }

    /// Check whether a point lies on the screen
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get the window written when drawing a single pixel
    ///
    /// The window extends one pixel past the point in both directions, only
    /// its start address is used.
    #[must_use]
    pub fn pixel_window(&self, x: u16, y: u16) -> Option<Window> {
        self.contains(x, y)
            .then(|| Window::new(x, y, x.saturating_add(1), y.saturating_add(1)))
    }

    /// Clip a rectangle against the screen
    ///
    /// A rectangle starting outside the screen or having no area yields
    /// nothing, a rectangle crossing the right or bottom edge is truncated.
    #[must_use]
    pub fn clip(&self, x: u16, y: u16, width: u16, height: u16) -> Option<Window> {
        if !self.contains(x, y) || width == 0 || height == 0 {
            return None;
        }

        let width = width.min(self.width - x);
        let height = height.min(self.height - y);
        Some(Window::new(x, y, x + width - 1, y + height - 1))
    }

    /// Get the window covering the whole screen
    #[must_use]
    pub fn screen(&self) -> Option<Window> {
        self.clip(0, 0, self.width, self.height)
    }

    /// Get the arguments of the column address set command for a window
    #[must_use]
    pub fn column_arguments(&self, window: &Window) -> [u8; 4] {
        address_range(window.x0, window.x1, self.col_start)
    }

    /// Get the arguments of the row address set command for a window
    #[must_use]
    pub fn row_arguments(&self, window: &Window) -> [u8; 4] {
        address_range(window.y0, window.y1, self.row_start)
    }
}

/// Encode an offset address range as two big-endian words
fn address_range(start: u16, end: u16, offset: u16) -> [u8; 4] {
    let [start_high, start_low] = start.saturating_add(offset).to_be_bytes();
    let [end_high, end_low] = end.saturating_add(offset).to_be_bytes();
    [start_high, start_low, end_high, end_low]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_tab() -> DisplayState {
        DisplayState::new(Variant::RedTab, 128, 160)
    }

    #[test]
    fn pixel_inside_screen() {
        let state = red_tab();
        assert_eq!(state.pixel_window(0, 0), Some(Window::new(0, 0, 1, 1)));
        assert_eq!(
            state.pixel_window(127, 159),
            Some(Window::new(127, 159, 128, 160))
        );
    }

    #[test]
    fn pixel_outside_screen() {
        let state = red_tab();
        assert_eq!(state.pixel_window(128, 0), None);
        assert_eq!(state.pixel_window(0, 160), None);
        assert_eq!(state.pixel_window(u16::MAX, u16::MAX), None);
    }

    #[test]
    fn clip_inside_screen() {
        let window = red_tab().clip(10, 20, 30, 40);
        assert_eq!(window, Some(Window::new(10, 20, 39, 59)));
        assert_eq!(window.map(|window| window.pixel_count()), Some(1200));
    }

    #[test]
    fn clip_truncates_both_axes() {
        let window = red_tab().clip(120, 150, 20, 20);
        assert_eq!(window, Some(Window::new(120, 150, 127, 159)));
        assert_eq!(window.map(|window| (window.width(), window.height())), Some((8, 10)));
    }

    #[test]
    fn clip_truncates_huge_sizes() {
        let window = red_tab().clip(1, 1, u16::MAX, u16::MAX);
        assert_eq!(window, Some(Window::new(1, 1, 127, 159)));
    }

    #[test]
    fn clip_rejects_start_outside_screen() {
        assert_eq!(red_tab().clip(128, 0, 1, 1), None);
        assert_eq!(red_tab().clip(0, 160, 1, 1), None);
    }

    #[test]
    fn clip_rejects_empty_rectangles() {
        assert_eq!(red_tab().clip(0, 0, 0, 10), None);
        assert_eq!(red_tab().clip(0, 0, 10, 0), None);
    }

    #[test]
    fn clip_follows_rotation() {
        let mut state = red_tab();
        state.rotate(Rotation::Rotate90);
        assert_eq!((state.width(), state.height()), (160, 128));
        assert_eq!(state.clip(150, 0, 20, 200), Some(Window::new(150, 0, 159, 127)));
        assert_eq!(state.clip(0, 128, 1, 1), None);

        state.rotate(Rotation::Rotate180);
        assert_eq!((state.width(), state.height()), (128, 160));
    }

    #[test]
    fn screen_window() {
        assert_eq!(red_tab().screen(), Some(Window::new(0, 0, 127, 159)));
        assert_eq!(red_tab().screen().map(|window| window.pixel_count()), Some(128 * 160));
    }

    #[test]
    fn green_tab_offsets_addresses() {
        let state = DisplayState::new(Variant::GreenTab, 128, 160);
        let window = Window::new(0, 0, 127, 159);
        assert_eq!(state.column_arguments(&window), [0, 2, 0, 129]);
        assert_eq!(state.row_arguments(&window), [0, 1, 0, 160]);
    }

    #[test]
    fn red_tab_addresses_are_not_offset() {
        let state = red_tab();
        let window = Window::new(5, 6, 7, 8);
        assert_eq!(state.column_arguments(&window), [0, 5, 0, 7]);
        assert_eq!(state.row_arguments(&window), [0, 6, 0, 8]);
    }
}
