//! Core display surface and lifecycle
//!
//! [`Display`] ties the packed framebuffer to a transport binding. Callers
//! draw into the buffer through the pixel primitives (directly or via
//! `embedded-graphics`), then a display-specific layer reads
//! [`Display::buffer`] and pushes it to hardware through
//! [`Display::send_data`].
//!
//! [`Display::init`] must succeed exactly once before any drawing: it
//! allocates the framebuffer, binds the transport (probing I2C), optionally
//! hard-resets the panel, and clears the buffer. Before a successful init,
//! pixel writes are no-ops and pixel reads return off.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::debug;

use crate::color::Color;
use crate::command::{INVERT_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Placeholder reset pin for displays wired without one
///
/// Use as the type parameter when constructing a [`Display`] with
/// `reset: None`:
///
/// ```
/// use mono_oled::NoReset;
///
/// let reset: Option<NoReset> = None;
/// # let _ = reset;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReset;

impl embedded_hal::digital::ErrorType for NoReset {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoReset {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Framebuffer-backed driver core for a monochrome OLED
///
/// ## Type Parameters
///
/// * `I` - Transport binding implementing [`DisplayInterface`]
/// * `RST` - Reset pin implementing [`OutputPin`]; use [`NoReset`] when the
///   panel has no reset line
pub struct Display<I, RST>
where
    I: DisplayInterface,
    RST: OutputPin,
{
    /// Transport binding, fixed at construction
    interface: I,
    /// Dimensions and rotation
    config: Config,
    /// Optional reset pin (active low)
    reset: Option<RST>,
    /// Packed pixel buffer; `None` until `init` succeeds
    framebuffer: Option<Framebuffer>,
}

impl<I, RST> Display<I, RST>
where
    I: DisplayInterface,
    RST: OutputPin,
{
    /// Create a new display surface
    ///
    /// The framebuffer is not allocated and the transport is not probed
    /// until [`init`](Self::init).
    pub fn new(interface: I, config: Config, reset: Option<RST>) -> Self {
        Self {
            interface,
            config,
            reset,
            framebuffer: None,
        }
    }

    /// Allocate the framebuffer and bind the transport
    ///
    /// Must be called exactly once before any drawing operation. When
    /// `perform_reset` is true and a reset pin was supplied, the panel is
    /// hard-reset after the transport binds. With multiple displays sharing
    /// one reset line, pass true only for the first.
    ///
    /// On failure nothing is exposed as initialized; the call may be retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the framebuffer cannot be allocated,
    /// or [`Error::Interface`] if the transport handshake fails.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D, perform_reset: bool) -> DisplayResult<I> {
        let mut framebuffer = match self.framebuffer.take() {
            Some(fb) => fb,
            None => Framebuffer::new(self.config.dimensions)?,
        };

        self.interface.bind().map_err(Error::Interface)?;

        if perform_reset {
            self.hardware_reset(delay);
        }

        framebuffer.clear();
        self.framebuffer = Some(framebuffer);

        debug!(
            "display initialized: {}x{}, {} byte framebuffer",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.dimensions.buffer_size()
        );
        Ok(())
    }

    /// Whether [`init`](Self::init) has succeeded
    pub fn is_initialized(&self) -> bool {
        self.framebuffer.is_some()
    }

    /// Drive the reset pin through the panel's power-on waveform
    ///
    /// High for 1ms while VDD settles, low for 10ms to reset, then high for
    /// 10ms to come out of reset. Blocking; a no-op without a reset pin.
    ///
    /// Reset pin errors are deliberately ignored: the waveform runs to
    /// completion regardless, and a controller that never saw the pulse
    /// surfaces as a bus failure on the next command instead.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) {
        let Some(rst) = self.reset.as_mut() else {
            return;
        };
        debug!("hard-resetting display");
        let _ = rst.set_high();
        delay.delay_ms(1);
        let _ = rst.set_low();
        delay.delay_ms(10);
        let _ = rst.set_high();
        delay.delay_ms(10);
    }

    /// Set, clear or invert a single pixel in the framebuffer
    ///
    /// Coordinates are logical (rotation applied); out-of-bounds writes are
    /// silent no-ops, as are writes before a successful init. No hardware
    /// access happens here.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let rotation = self.config.rotation;
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.set_pixel(x, y, color, rotation);
        }
    }

    /// Whether the framebuffer pixel at logical (x, y) is lit
    ///
    /// Out-of-bounds reads (and reads before init) return `false`.
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        self.framebuffer
            .as_ref()
            .is_some_and(|fb| fb.get_pixel(x, y, self.config.rotation))
    }

    /// Set every framebuffer pixel to off
    ///
    /// Buffer memory only; the panel is untouched until the next transfer.
    pub fn clear(&mut self) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.clear();
        }
    }

    /// Logical width in pixels under the current rotation
    pub fn width(&self) -> u32 {
        u32::from(self.config.logical_dimensions().width)
    }

    /// Logical height in pixels under the current rotation
    pub fn height(&self) -> u32 {
        u32::from(self.config.logical_dimensions().height)
    }

    /// Physical panel dimensions, independent of rotation
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Change the caller-facing rotation
    ///
    /// Affects the coordinate mapping of subsequent pixel operations only;
    /// existing buffer contents are not remapped.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.config.rotation = rotation;
    }

    /// The display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Direct read access to the packed framebuffer
    ///
    /// `None` before a successful init. The layout is column-major bytes
    /// with 8 vertically stacked pixels per byte, LSB = lowest row of the
    /// page; bulk transfers must preserve this bit order exactly.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.framebuffer.as_ref().map(Framebuffer::data)
    }

    /// Direct write access to the packed framebuffer
    ///
    /// `None` before a successful init. No copy is made; callers must
    /// respect the packing format.
    pub fn buffer_mut(&mut self) -> Option<&mut [u8]> {
        self.framebuffer.as_mut().map(Framebuffer::data_mut)
    }

    /// Send a single command byte through the transport
    ///
    /// Exposed for display-specific layers that own their controller's
    /// command set.
    pub fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface.send_command(command).map_err(Error::Interface)
    }

    /// Send a burst of command bytes through the transport
    pub fn send_command_list(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command_list(commands)
            .map_err(Error::Interface)
    }

    /// Send pixel data bytes through the transport
    pub fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Enable or disable the panel's hardware invert mode
    ///
    /// Immediate effect on the glass; the framebuffer is not modified. With
    /// invert enabled, off pixels light up and lit pixels go dark.
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Set the panel contrast (brightness) level
    ///
    /// Immediate effect on the glass; the framebuffer is not modified.
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.send_command_list(&[SET_CONTRAST, level])
    }

    /// Release the transport binding and reset pin
    pub fn release(self) -> (I, Option<RST>) {
        (self.interface, self.reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Command(u8),
        CommandList(Vec<u8>),
        Data(Vec<u8>),
    }

    #[derive(Debug)]
    struct MockInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
        fail_bind: bool,
    }

    impl MockInterface {
        fn new(sent: &Rc<RefCell<Vec<Sent>>>) -> Self {
            Self {
                sent: Rc::clone(sent),
                fail_bind: false,
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn bind(&mut self) -> Result<(), Self::Error> {
            if self.fail_bind {
                return Err(MockError);
            }
            Ok(())
        }

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.sent.borrow_mut().push(Sent::Command(command));
            Ok(())
        }

        fn send_command_list(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            self.sent
                .borrow_mut()
                .push(Sent::CommandList(commands.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.sent.borrow_mut().push(Sent::Data(data.to_vec()));
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ResetEvent {
        Rst(bool),
        DelayNs(u32),
    }

    struct LogResetPin {
        events: Rc<RefCell<Vec<ResetEvent>>>,
    }

    impl embedded_hal::digital::ErrorType for LogResetPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for LogResetPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.events.borrow_mut().push(ResetEvent::Rst(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.events.borrow_mut().push(ResetEvent::Rst(true));
            Ok(())
        }
    }

    struct LogDelay {
        events: Rc<RefCell<Vec<ResetEvent>>>,
    }

    impl DelayNs for LogDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.events.borrow_mut().push(ResetEvent::DelayNs(ns));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.events
                .borrow_mut()
                .push(ResetEvent::DelayNs(ms * 1_000_000));
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn config_128x64(rotation: Rotation) -> Config {
        Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap()
    }

    fn test_display(rotation: Rotation) -> (Display<MockInterface, NoReset>, Rc<RefCell<Vec<Sent>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let display = Display::new(MockInterface::new(&sent), config_128x64(rotation), None);
        (display, sent)
    }

    #[test]
    fn test_init_allocates_and_clears_the_framebuffer() {
        let (mut display, _) = test_display(Rotation::Rotate0);
        assert!(!display.is_initialized());
        assert!(display.buffer().is_none());

        display.init(&mut NoopDelay, false).unwrap();
        assert!(display.is_initialized());
        let buffer = display.buffer().unwrap();
        assert_eq!(buffer.len(), 128 * 64 / 8);
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_init_bind_failure_leaves_display_unusable() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let mut interface = MockInterface::new(&sent);
        interface.fail_bind = true;
        let mut display: Display<_, NoReset> =
            Display::new(interface, config_128x64(Rotation::Rotate0), None);

        assert!(matches!(
            display.init(&mut NoopDelay, true),
            Err(Error::Interface(MockError))
        ));
        assert!(!display.is_initialized());
        assert!(display.buffer().is_none());
        assert!(!display.get_pixel(0, 0));
    }

    #[test]
    fn test_pixel_ops_before_init_are_safe_noops() {
        let (mut display, _) = test_display(Rotation::Rotate0);
        display.set_pixel(0, 0, Color::On);
        display.clear();
        assert!(!display.get_pixel(0, 0));
    }

    #[test]
    fn test_reinit_reuses_the_buffer() {
        let (mut display, _) = test_display(Rotation::Rotate0);
        display.init(&mut NoopDelay, false).unwrap();
        display.set_pixel(1, 1, Color::On);

        display.init(&mut NoopDelay, false).unwrap();
        // Re-init clears rather than leaking stale pixels
        assert!(!display.get_pixel(1, 1));
    }

    #[test]
    fn test_hardware_reset_waveform() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sent = Rc::new(RefCell::new(Vec::new()));
        let rst = LogResetPin {
            events: Rc::clone(&events),
        };
        let mut delay = LogDelay {
            events: Rc::clone(&events),
        };
        let mut display = Display::new(
            MockInterface::new(&sent),
            config_128x64(Rotation::Rotate0),
            Some(rst),
        );

        display.hardware_reset(&mut delay);

        let events = events.borrow();
        assert_eq!(
            &events[..],
            &[
                ResetEvent::Rst(true),
                ResetEvent::DelayNs(1_000_000),
                ResetEvent::Rst(false),
                ResetEvent::DelayNs(10_000_000),
                ResetEvent::Rst(true),
                ResetEvent::DelayNs(10_000_000),
            ]
        );
    }

    #[test]
    fn test_logical_dimensions_follow_rotation() {
        let (mut display, _) = test_display(Rotation::Rotate0);
        assert_eq!((display.width(), display.height()), (128, 64));

        display.set_rotation(Rotation::Rotate90);
        assert_eq!((display.width(), display.height()), (64, 128));
        assert_eq!(display.rotation(), Rotation::Rotate90);

        // Physical dimensions and buffer size never change
        assert_eq!(display.dimensions(), Dimensions::new(128, 64).unwrap());
    }

    #[test]
    fn test_rotated_pixel_lands_in_physical_buffer() {
        let (mut display, _) = test_display(Rotation::Rotate90);
        display.init(&mut NoopDelay, false).unwrap();

        display.set_pixel(0, 0, Color::On);
        assert!(display.get_pixel(0, 0));
        assert_eq!(display.buffer().unwrap()[127], 0x01);
    }

    #[test]
    fn test_invert_sends_mode_commands() {
        let (mut display, sent) = test_display(Rotation::Rotate0);
        display.invert(true).unwrap();
        display.invert(false).unwrap();

        let sent = sent.borrow();
        assert_eq!(&sent[..], &[Sent::Command(0xA7), Sent::Command(0xA6)]);
    }

    #[test]
    fn test_set_contrast_sends_command_list() {
        let (mut display, sent) = test_display(Rotation::Rotate0);
        display.set_contrast(0x8F).unwrap();

        let sent = sent.borrow();
        assert_eq!(&sent[..], &[Sent::CommandList(alloc::vec![0x81, 0x8F])]);
    }

    #[test]
    fn test_send_data_passes_through() {
        let (mut display, sent) = test_display(Rotation::Rotate0);
        display.send_data(&[0x12, 0x34]).unwrap();

        let sent = sent.borrow();
        assert_eq!(&sent[..], &[Sent::Data(alloc::vec![0x12, 0x34])]);
    }
}
