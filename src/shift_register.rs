//! Output driver for a chain of latched shift registers
//!
//! The panel is driven by 32 daisy-chained 8-bit shift registers. A frame
//! is clocked in over SPI while the outputs are blanked, then latched.

use core::fmt;

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::OutputDriver;
use crate::frame::FrameBuffer;

/// Error raised while pushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRegisterError<S, P> {
    Spi(S),
    Pin(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for ShiftRegisterError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(err) => write!(f, "spi transfer failed: {err:?}"),
            Self::Pin(err) => write!(f, "control pin failed: {err:?}"),
        }
    }
}

/// Shift register chain with a latch line and an active-low output enable
pub struct ShiftRegisterDriver<SPI, LE, OE> {
    spi: SPI,
    latch: LE,
    output_enable: OE,
    output_enabled: bool,
}

impl<SPI, LE, OE> ShiftRegisterDriver<SPI, LE, OE>
where
    SPI: SpiBus,
    LE: OutputPin,
    OE: OutputPin<Error = LE::Error>,
{
    pub const fn new(spi: SPI, latch: LE, output_enable: OE) -> Self {
        Self {
            spi,
            latch,
            output_enable,
            output_enabled: true,
        }
    }

    pub const fn output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Blank or unblank the panel without touching the latched data
    pub fn set_output_enabled(
        &mut self,
        enabled: bool,
    ) -> Result<(), ShiftRegisterError<SPI::Error, LE::Error>> {
        self.output_enabled = enabled;
        let result = if enabled {
            self.output_enable.set_low()
        } else {
            self.output_enable.set_high()
        };
        result.map_err(ShiftRegisterError::Pin)
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, LE, OE) {
        (self.spi, self.latch, self.output_enable)
    }
}

impl<SPI, LE, OE> OutputDriver for ShiftRegisterDriver<SPI, LE, OE>
where
    SPI: SpiBus,
    LE: OutputPin,
    OE: OutputPin<Error = LE::Error>,
{
    type Error = ShiftRegisterError<SPI::Error, LE::Error>;

    fn write(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.output_enable
            .set_high()
            .map_err(ShiftRegisterError::Pin)?;
        self.latch.set_low().map_err(ShiftRegisterError::Pin)?;

        self.spi
            .write(frame.as_bytes())
            .map_err(ShiftRegisterError::Spi)?;
        self.spi.flush().map_err(ShiftRegisterError::Spi)?;

        self.latch.set_high().map_err(ShiftRegisterError::Pin)?;
        if self.output_enabled {
            self.output_enable
                .set_low()
                .map_err(ShiftRegisterError::Pin)?;
        }
        Ok(())
    }
}
