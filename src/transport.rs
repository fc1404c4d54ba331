//! Raw byte transfer between the driver and the bus.
//!
//! The register protocol only ever needs two primitives: send some bytes and wait for the bus
//! to go idle, or clock in some bytes. Both report how many bytes were actually moved, so a
//! misbehaving bus shows up as a short count instead of going unnoticed.

use crate::hal::spi::SpiBus;

/// Blocking byte transfer used by [`Cc1100`](crate::Cc1100).
///
/// Implemented for any [`SpiBus`] through [`SpiTransport`]. Implement it directly to put the
/// driver on top of a bus that can report partial transfers, or on a simulated chip.
pub trait Transport {
    /// Bus error type.
    type Error;

    /// Sends `bytes` and blocks until the bus is idle.
    ///
    /// Returns the number of bytes sent.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Clocks out don't-care bytes while capturing `buf.len()` response bytes.
    ///
    /// Returns the number of bytes received.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// [`Transport`] over an `embedded-hal` SPI bus.
///
/// Chip select is not part of the bus; the driver drives it itself. Configure the bus with
/// [`SPI_MODE`](crate::SPI_MODE), 8 bit words and a clock around
/// [`SPI_FREQUENCY_HZ`](crate::SPI_FREQUENCY_HZ).
#[derive(Debug)]
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI> SpiTransport<SPI> {
    /// Wraps a configured SPI bus.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Gives back the bus.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus> Transport for SpiTransport<SPI> {
    type Error = SPI::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.spi.write(bytes)?;
        // Busy wait until the last frame has left the shift register.
        self.spi.flush()?;
        Ok(bytes.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.spi.read(buf)?;
        Ok(buf.len())
    }
}
