//! Graphics support via embedded-graphics
//!
//! This module implements
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) for
//! [`Display`], so the whole embedded-graphics primitive set (lines, shapes,
//! text, images) renders into the packed framebuffer through the single
//! pixel-write primitive.
//!
//! The draw target reports the *logical* (rotated) size, and negative or
//! out-of-range coordinates are skipped, matching the tolerant bounds
//! behavior of the pixel primitives themselves.

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};
use embedded_hal::digital::OutputPin;

use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, RST> DrawTarget for Display<I, RST>
where
    I: DisplayInterface,
    RST: OutputPin,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }
        Ok(())
    }
}

impl<I, RST> OriginDimensions for Display<I, RST>
where
    I: DisplayInterface,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};
    use crate::display::NoReset;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn bind(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_command_list(&mut self, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface, NoReset> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface, config, None);
        display.init(&mut NoopDelay, false).unwrap();
        display
    }

    #[test]
    fn test_size_is_logical() {
        let display = test_display(Rotation::Rotate0);
        assert_eq!(display.size(), Size::new(128, 64));

        let display = test_display(Rotation::Rotate90);
        assert_eq!(display.size(), Size::new(64, 128));
    }

    #[test]
    fn test_draw_iter_sets_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        display
            .draw_iter([Pixel(Point::new(2, 3), Color::On)])
            .unwrap();
        assert!(display.get_pixel(2, 3));
        assert!(!display.get_pixel(3, 2));
    }

    #[test]
    fn test_draw_iter_skips_negative_and_out_of_range() {
        let mut display = test_display(Rotation::Rotate0);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Color::On),
                Pixel(Point::new(0, -5), Color::On),
                Pixel(Point::new(128, 0), Color::On),
                Pixel(Point::new(0, 64), Color::On),
            ])
            .unwrap();
        assert!(display.buffer().unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_rectangle_renders() {
        let mut display = test_display(Rotation::Rotate0);
        Rectangle::new(Point::new(8, 8), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut display)
            .unwrap();

        for y in 8..12 {
            for x in 8..12 {
                assert!(display.get_pixel(x, y), "({x},{y})");
            }
        }
        assert!(!display.get_pixel(7, 8));
        assert!(!display.get_pixel(12, 8));
    }

    #[test]
    fn test_binary_color_draws_through_conversion() {
        use embedded_graphics::pixelcolor::BinaryColor;

        let mut display = test_display(Rotation::Rotate0);
        display
            .draw_iter([Pixel(Point::new(4, 4), BinaryColor::On.into())])
            .unwrap();
        assert!(display.get_pixel(4, 4));

        display
            .draw_iter([Pixel(Point::new(4, 4), BinaryColor::Off.into())])
            .unwrap();
        assert!(!display.get_pixel(4, 4));
    }

    #[test]
    fn test_invert_color_toggles_through_draw_target() {
        let mut display = test_display(Rotation::Rotate0);
        let pixel = [Pixel(Point::new(1, 1), Color::Invert)];
        display.draw_iter(pixel).unwrap();
        assert!(display.get_pixel(1, 1));
        display.draw_iter(pixel).unwrap();
        assert!(!display.get_pixel(1, 1));
    }
}
