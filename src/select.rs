//! Chip select handling.

use crate::hal::delay::DelayNs;
use crate::hal::digital::OutputPin;

/// Drives the active low chip select line of the radio.
///
/// Enabling the chip waits the settle delay before returning so the first clock edge of a
/// transaction never comes too early. Disabling is immediate.
#[derive(Debug)]
pub struct ChipSelect<NCS> {
    ncs: NCS,
    settle_delay_us: u32,
}

impl<NCS, PinErr> ChipSelect<NCS>
where
    NCS: OutputPin<Error = PinErr>,
{
    /// Wraps a chip select pin. The pin is left untouched.
    pub fn new(ncs: NCS, settle_delay_us: u32) -> Self {
        Self {
            ncs,
            settle_delay_us,
        }
    }

    /// Asserts chip select and waits for the chip to settle.
    pub fn enable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PinErr> {
        self.ncs.set_low()?;
        delay.delay_us(self.settle_delay_us);
        Ok(())
    }

    /// Deasserts chip select.
    pub fn disable(&mut self) -> Result<(), PinErr> {
        self.ncs.set_high()
    }

    /// Gives back the pin.
    pub fn release(self) -> NCS {
        self.ncs
    }
}
