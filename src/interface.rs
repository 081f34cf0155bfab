//! Transport abstraction
//!
//! This module provides the [`DisplayInterface`] trait and its three
//! bindings for talking to a monochrome OLED controller:
//!
//! - [`I2cInterface`]: addressed I2C, commands framed with a `0x00` control
//!   byte and pixel data with `0x40`, each burst a single bus transaction.
//! - [`SpiInterface`]: hardware SPI via an [`SpiDevice`], with a
//!   data/command GPIO. Chip-select framing is the device's transaction
//!   discipline.
//! - [`SoftSpiInterface`]: bit-banged mode-0 SPI over four GPIOs for boards
//!   without a free SPI peripheral.
//!
//! The binding is chosen once at construction and fixed for the object's
//! lifetime. All writes are blocking and delivered in program order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mono_oled::{DisplayInterface, I2cInterface, DEFAULT_I2C_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_I2C_ADDRESS);
//!
//! // Probe the bus; failure here must abort display initialization
//! let _ = interface.bind();
//!
//! // One transaction: control byte 0x00, then the command byte
//! let _ = interface.send_command(0xA6);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Control byte marking the following I2C bytes as commands (Co=0, D/C=0)
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte marking the following I2C bytes as pixel data (Co=0, D/C=1)
const CONTROL_DATA: u8 = 0x40;

/// Default I2C address used by most monochrome OLED modules
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Trait for the transport binding to an OLED controller
///
/// Abstracts "send a command byte", "send a command list" and "send pixel
/// data" over the physical bus so that [`Display`](crate::display::Display)
/// never re-checks which binding it holds.
///
/// ## Implementing
///
/// For most hardware, use one of [`I2cInterface`], [`SpiInterface`] or
/// [`SoftSpiInterface`]. Implement this trait yourself for unusual wiring
/// (e.g. inverted data/command polarity or a parallel bus).
pub trait DisplayInterface {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Bind to the bus, probing it where the transport allows
    ///
    /// For I2C this performs an address handshake; a missing device surfaces
    /// here rather than on the first command. For SPI there is nothing to
    /// probe and this settles the data/command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the handshake or GPIO access fails. A failure must
    /// abort display initialization.
    fn bind(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write or GPIO access fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a list of command bytes as one burst
    ///
    /// Over I2C the whole list travels in a single transaction behind one
    /// control byte; over SPI the data/command line is asserted once for the
    /// burst.
    ///
    /// # Errors
    ///
    /// Returns an error if any byte fails to send.
    fn send_command_list(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send pixel data bytes to the controller
    ///
    /// Used by bulk operations such as full-frame transfers.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write or GPIO access fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<CommErr, PinErr> {
    /// Bus communication error
    Comm(CommErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<CommErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<CommErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Comm(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<CommErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<CommErr, PinErr> {}

/// Addressed I2C binding
///
/// Owns the bus handle and the 7-bit device address. Every command or data
/// burst is a single addressed transaction carrying the appropriate control
/// byte, so interleaving with other bus users cannot split a burst.
pub struct I2cInterface<I2C> {
    /// I2C bus handle
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create a new I2C binding
    ///
    /// # Arguments
    ///
    /// * `i2c` - Bus handle implementing [`I2c`]
    /// * `address` - 7-bit device address, typically [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The device address this binding talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus handle
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn bind(&mut self) -> InterfaceResult<(), Self::Error> {
        // Address handshake: an empty write gets an ACK from a present
        // device and a NACK error otherwise.
        self.i2c.write(self.address, &[])
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn send_command_list(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.transaction(
            self.address,
            &mut [
                Operation::Write(&[CONTROL_COMMAND]),
                Operation::Write(commands),
            ],
        )
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

/// Hardware SPI binding
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]; chip-select assertion
///   and release around each burst is its transaction discipline
/// * `DC` - Data/command pin implementing [`OutputPin`] (low = command,
///   high = data)
pub struct SpiInterface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/command select pin
    dc: DC,
}

impl<SPI: SpiDevice, DC: OutputPin> SpiInterface<SPI, DC> {
    /// Create a new hardware SPI binding
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Release the SPI device and data/command pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn bind(&mut self) -> InterfaceResult<(), Self::Error> {
        // The pin is already a typed output under embedded-hal; park it in
        // command mode so the first burst starts from a known level.
        self.dc.set_low().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Comm)
    }

    fn send_command_list(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(commands).map_err(InterfaceError::Comm)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Comm)
    }
}

/// Software (bit-banged) SPI binding
///
/// Shifts bytes out MSB-first in SPI mode 0 over plain GPIOs, for boards
/// where no hardware SPI peripheral is free. Chip select brackets each
/// command or data burst.
///
/// All four pins must share one error type, mirroring how a board crate
/// hands out its GPIOs.
pub struct SoftSpiInterface<MOSI, SCK, CS, DC> {
    /// Data out pin
    mosi: MOSI,
    /// Clock pin
    sck: SCK,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/command select pin
    dc: DC,
}

impl<MOSI, SCK, CS, DC, PinErr> SoftSpiInterface<MOSI, SCK, CS, DC>
where
    MOSI: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new software SPI binding
    pub fn new(mosi: MOSI, sck: SCK, cs: CS, dc: DC) -> Self {
        Self { mosi, sck, cs, dc }
    }

    /// Release the four pins
    pub fn release(self) -> (MOSI, SCK, CS, DC) {
        (self.mosi, self.sck, self.cs, self.dc)
    }

    /// Shift one byte out, MSB first, mode 0 (clock idles low)
    fn write_byte(&mut self, byte: u8) -> InterfaceResult<(), PinErr> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.mosi.set_high()?;
            } else {
                self.mosi.set_low()?;
            }
            self.sck.set_high()?;
            self.sck.set_low()?;
        }
        Ok(())
    }

    /// Run a chip-select-framed burst of bytes with the given D/C level
    fn burst(&mut self, data_mode: bool, bytes: &[u8]) -> InterfaceResult<(), PinErr> {
        self.cs.set_low()?;
        if data_mode {
            self.dc.set_high()?;
        } else {
            self.dc.set_low()?;
        }
        let result = bytes.iter().try_for_each(|&byte| self.write_byte(byte));
        self.cs.set_high()?;
        result
    }
}

impl<MOSI, SCK, CS, DC, PinErr> DisplayInterface for SoftSpiInterface<MOSI, SCK, CS, DC>
where
    MOSI: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = PinErr;

    fn bind(&mut self) -> InterfaceResult<(), Self::Error> {
        // Idle levels for mode 0: clock low, chip deselected
        self.sck.set_low()?;
        self.cs.set_high()?;
        self.dc.set_low()
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.burst(false, &[command])
    }

    fn send_command_list(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.burst(false, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.burst(true, data)
    }
}
