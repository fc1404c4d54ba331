//! CC1100/CC2500 register access.

use crate::config::{Config, ShortReadPolicy};
use crate::error::TransferError;
use crate::hal::delay::DelayNs;
use crate::hal::digital::OutputPin;
use crate::hal::spi::SpiBus;
use crate::register::{
    Register, StatusRegister, Strobe, ADDRESS_MASK, READ_BURST, READ_SINGLE, WRITE_BURST,
};
use crate::select::ChipSelect;
use crate::status::{FifoBytes, MarcState};
use crate::transport::{SpiTransport, Transport};
use core::fmt;

/// Converts the cycle count taken by [`Cc1100::wait()`] into milliseconds.
///
/// Anything below 1000 cycles rounds up to a full millisecond, longer waits are truncated to
/// whole milliseconds.
///
/// # Examples
/// ```
/// assert_eq!(cc1100::cycles_to_ms(30), 1);
/// assert_eq!(cc1100::cycles_to_ms(1500), 1);
/// assert_eq!(cc1100::cycles_to_ms(2500), 2);
/// ```
pub const fn cycles_to_ms(cycles: u32) -> u32 {
    if cycles < 1000 {
        1
    } else {
        cycles / 1000
    }
}

/// The CC1100/CC2500 driver type.
///
/// Owns the transport, the chip select pin and a delay, so every instance is independent of
/// any other radio on the board. All operations block until their transaction is finished and
/// leave chip select deasserted when they return, whether they succeed or not.
///
/// # Examples
/// ```ignore
/// use cc1100::{Cc1100, Config, Strobe};
///
/// let mut radio = Cc1100::new(spi, ncs, delay, Config::default())?;
/// radio.powerup_reset()?;
/// radio.command(Strobe::SIDLE)?;
/// ```
pub struct Cc1100<T, NCS, D> {
    transport: T,
    // SPI Chip Select Pin, active low
    cs: ChipSelect<NCS>,
    delay: D,
    config: Config,
}

impl<SPI, NCS, D, PinErr> Cc1100<SpiTransport<SPI>, NCS, D>
where
    SPI: SpiBus,
    NCS: OutputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Creates a new driver on an SPI bus.
    ///
    /// The bus must already be configured with [`SPI_MODE`](crate::SPI_MODE). The chip
    /// select pin is driven high, the chip itself is not touched; call
    /// [`powerup_reset()`](#method.powerup_reset) to bring it into a known state.
    pub fn new(
        spi: SPI,
        ncs: NCS,
        delay: D,
        config: Config,
    ) -> Result<Self, TransferError<SPI::Error, PinErr>> {
        Self::with_transport(SpiTransport::new(spi), ncs, delay, config)
    }
}

impl<T, NCS, D, SPIErr, PinErr> Cc1100<T, NCS, D>
where
    T: Transport<Error = SPIErr>,
    NCS: OutputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Creates a new driver on any [`Transport`].
    pub fn with_transport(
        transport: T,
        ncs: NCS,
        delay: D,
        config: Config,
    ) -> Result<Self, TransferError<SPIErr, PinErr>> {
        let mut chip = Cc1100 {
            transport,
            cs: ChipSelect::new(ncs, config.settle_delay_us),
            delay,
            config,
        };
        chip.set_ncs_high()?;
        Ok(chip)
    }

    /// Releases the transport, the chip select pin and the delay.
    pub fn release(self) -> (T, NCS, D) {
        (self.transport, self.cs.release(), self.delay)
    }

    /// Manual power-on reset.
    ///
    /// Pulses chip select with the waits from [`ResetTiming`](crate::ResetTiming) and issues
    /// the `SRES` strobe. Use this after power up before touching any register.
    pub fn powerup_reset(&mut self) -> Result<(), TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("powerup_reset()");
        let timing = self.config.reset_timing;
        self.set_ncs_high()?;
        self.wait(timing.before_pulse);
        self.set_ncs_low()?;
        self.wait(timing.pulse);
        self.set_ncs_high()?;
        self.wait(timing.after_pulse);
        self.command(Strobe::SRES)
    }

    /// Writes `value` to the register at `addr`.
    pub fn write_register(
        &mut self,
        addr: u8,
        value: u8,
    ) -> Result<(), TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write_register(0x{:02x}, 0x{:02x})", addr, value);
        let frame = [addr & ADDRESS_MASK, value];
        self.transaction(|t| t.write(&frame))?;
        Ok(())
    }

    /// Writes `buf` to consecutive registers, the first one being at `addr`.
    ///
    /// The chip increments the address after every byte. Bursts to the FIFO address stay on
    /// the FIFO, so [`MAX_BURST_LEN`](crate::MAX_BURST_LEN) bytes is the longest useful burst.
    pub fn write_burst(
        &mut self,
        addr: u8,
        buf: &[u8],
    ) -> Result<(), TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write_burst(0x{:02x}, {:02x})", addr, buf);
        let header = [(addr & ADDRESS_MASK) | WRITE_BURST];
        self.transaction(|t| {
            t.write(&header)?;
            if !buf.is_empty() {
                t.write(buf)?;
            }
            Ok(())
        })
    }

    /// Reads the register at `addr`.
    pub fn read_register(&mut self, addr: u8) -> Result<u8, TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read_register(0x{:02x})", addr);
        self.read_frame((addr & ADDRESS_MASK) | READ_SINGLE, &mut [0u8]).map(|v| v[0])
    }

    /// Fills `buf` from consecutive registers, the first one being at `addr`.
    ///
    /// Reading more than [`MAX_BURST_LEN`](crate::MAX_BURST_LEN) bytes wraps around the
    /// register space or drains past the end of the RX FIFO.
    pub fn read_burst(
        &mut self,
        addr: u8,
        buf: &mut [u8],
    ) -> Result<(), TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read_burst(0x{:02x}, {})", addr, buf.len());
        self.read_frame((addr & ADDRESS_MASK) | READ_BURST, buf)?;
        Ok(())
    }

    /// Reads the status register at `addr`.
    ///
    /// Status registers share their addresses with the command strobes; they are read with the
    /// burst flag set, which is what tells them apart.
    pub fn read_status(&mut self, addr: u8) -> Result<u8, TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read_status(0x{:02x})", addr);
        self.read_frame((addr & ADDRESS_MASK) | READ_BURST, &mut [0u8]).map(|v| v[0])
    }

    /// Sends the command strobe at `addr`.
    pub fn strobe(&mut self, addr: u8) -> Result<(), TransferError<SPIErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("strobe(0x{:02x})", addr);
        let header = [addr & ADDRESS_MASK];
        self.transaction(|t| t.write(&header))?;
        Ok(())
    }

    /// Blocks for `cycles`, converted to milliseconds by [`cycles_to_ms()`].
    pub fn wait(&mut self, cycles: u32) {
        self.delay.delay_ms(cycles_to_ms(cycles));
    }

    /// Writes `value` to a configuration register.
    ///
    /// # Examples
    /// ```ignore
    /// radio.write_reg(Register::CHANNR, 5)?;
    /// ```
    pub fn write_reg(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), TransferError<SPIErr, PinErr>> {
        self.write_register(register.addr(), value)
    }

    /// Reads a configuration register.
    pub fn read_reg(&mut self, register: Register) -> Result<u8, TransferError<SPIErr, PinErr>> {
        self.read_register(register.addr())
    }

    /// Reads a status register.
    pub fn status(
        &mut self,
        register: StatusRegister,
    ) -> Result<u8, TransferError<SPIErr, PinErr>> {
        self.read_status(register.addr())
    }

    /// Sends a command strobe.
    pub fn command(&mut self, strobe: Strobe) -> Result<(), TransferError<SPIErr, PinErr>> {
        self.strobe(strobe.opcode())
    }

    /// Part number of the chip.
    pub fn part_number(&mut self) -> Result<u8, TransferError<SPIErr, PinErr>> {
        self.status(StatusRegister::PARTNUM)
    }

    /// Silicon version of the chip.
    pub fn version(&mut self) -> Result<u8, TransferError<SPIErr, PinErr>> {
        self.status(StatusRegister::VERSION)
    }

    /// Current state of the main radio control state machine.
    pub fn marc_state(&mut self) -> Result<MarcState, TransferError<SPIErr, PinErr>> {
        self.status(StatusRegister::MARCSTATE).map(MarcState::from)
    }

    /// Fill level of the RX FIFO.
    pub fn rx_bytes(&mut self) -> Result<FifoBytes, TransferError<SPIErr, PinErr>> {
        self.status(StatusRegister::RXBYTES).map(FifoBytes::from)
    }

    /// Fill level of the TX FIFO.
    pub fn tx_bytes(&mut self) -> Result<FifoBytes, TransferError<SPIErr, PinErr>> {
        self.status(StatusRegister::TXBYTES).map(FifoBytes::from)
    }

    /// Sends `header` and reads the response into `buf` in one transaction.
    fn read_frame<'b>(
        &mut self,
        header: u8,
        buf: &'b mut [u8],
    ) -> Result<&'b mut [u8], TransferError<SPIErr, PinErr>> {
        let expected = buf.len();
        let received = self.transaction(|t| {
            t.write(&[header])?;
            if expected == 0 {
                return Ok(0);
            }
            t.read(buf)
        })?;
        self.check_read(expected, received)?;
        Ok(buf)
    }

    fn check_read(
        &self,
        expected: usize,
        actual: usize,
    ) -> Result<(), TransferError<SPIErr, PinErr>> {
        if actual == expected {
            return Ok(());
        }
        #[cfg(feature = "defmt")]
        defmt::warn!("SPI short read: expected {} bytes, got {}", expected, actual);
        match self.config.short_read_policy {
            ShortReadPolicy::Warn => Ok(()),
            ShortReadPolicy::Fail => Err(TransferError::ShortTransfer { expected, actual }),
        }
    }

    /// Asserts chip select and waits for the chip to settle.
    fn set_ncs_low(&mut self) -> Result<(), TransferError<SPIErr, PinErr>> {
        self.cs.enable(&mut self.delay).map_err(TransferError::Pin)
    }

    fn set_ncs_high(&mut self) -> Result<(), TransferError<SPIErr, PinErr>> {
        self.cs.disable().map_err(TransferError::Pin)
    }

    /// Runs `f` with chip select asserted.
    ///
    /// Chip select is deasserted again even when `f` fails. A bus error wins over a pin error
    /// raised while deasserting. If asserting fails, deasserting is still attempted and the
    /// assert error is returned.
    fn transaction<R, F>(&mut self, f: F) -> Result<R, TransferError<SPIErr, PinErr>>
    where
        F: FnOnce(&mut T) -> Result<R, SPIErr>,
    {
        if let Err(e) = self.set_ncs_low() {
            let _ = self.set_ncs_high();
            return Err(e);
        }
        let result = f(&mut self.transport).map_err(TransferError::Spi);
        let released = self.set_ncs_high();
        let value = result?;
        released?;
        Ok(value)
    }
}

impl<T, NCS, D> fmt::Debug for Cc1100<T, NCS, D>
where
    T: fmt::Debug,
    NCS: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cc1100")
            .field("transport", &self.transport)
            .field("cs", &self.cs)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use std::vec::Vec;

    type MockRadio = Cc1100<SpiTransport<SpiMock<u8>>, PinMock, NoopDelay>;

    /// Builds a driver expecting `transactions` chip select pulses after construction.
    fn mk_radio(transactions: usize, spi_expectations: &[SpiTransaction<u8>]) -> MockRadio {
        let mut pin_expectations = Vec::new();
        pin_expectations.push(PinTransaction::set(State::High));
        for _ in 0..transactions {
            pin_expectations.push(PinTransaction::set(State::Low));
            pin_expectations.push(PinTransaction::set(State::High));
        }
        let spi = SpiMock::new(spi_expectations);
        let ncs = PinMock::new(&pin_expectations);
        Cc1100::new(spi, ncs, NoopDelay::new(), Config::default()).unwrap()
    }

    fn done(radio: MockRadio) {
        let (transport, mut ncs, _) = radio.release();
        transport.release().done();
        ncs.done();
    }

    #[test]
    fn new_deasserts_chip_select() {
        let radio = mk_radio(0, &[]);
        done(radio);
    }

    #[test]
    fn write_register_sends_one_frame() {
        let mut radio = mk_radio(
            1,
            &[
                SpiTransaction::write_vec(vec![0x0A, 0x05]),
                SpiTransaction::flush(),
            ],
        );
        radio.write_register(0x0A, 0x05).unwrap();
        done(radio);
    }

    #[test]
    fn write_burst_sends_header_then_payload() {
        let mut radio = mk_radio(
            1,
            &[
                SpiTransaction::write_vec(vec![0x4D]),
                SpiTransaction::flush(),
                SpiTransaction::write_vec(vec![0x21, 0x62, 0x76]),
                SpiTransaction::flush(),
            ],
        );
        radio.write_burst(0x0D, &[0x21, 0x62, 0x76]).unwrap();
        done(radio);
    }

    #[test]
    fn write_burst_empty_sends_header_only() {
        let mut radio = mk_radio(
            1,
            &[SpiTransaction::write_vec(vec![0x40]), SpiTransaction::flush()],
        );
        radio.write_burst(0x00, &[]).unwrap();
        done(radio);
    }

    #[test]
    fn read_register_sets_read_flag() {
        let mut radio = mk_radio(
            1,
            &[
                SpiTransaction::write_vec(vec![0x8A]),
                SpiTransaction::flush(),
                SpiTransaction::read_vec(vec![0x42]),
            ],
        );
        assert_eq!(radio.read_register(0x0A).unwrap(), 0x42);
        done(radio);
    }

    #[test]
    fn read_burst_sets_burst_flags() {
        let mut radio = mk_radio(
            1,
            &[
                SpiTransaction::write_vec(vec![0xCD]),
                SpiTransaction::flush(),
                SpiTransaction::read_vec(vec![0x21, 0x62, 0x76]),
            ],
        );
        let mut buf = [0u8; 3];
        radio.read_burst(0x0D, &mut buf).unwrap();
        assert_eq!(buf, [0x21, 0x62, 0x76]);
        done(radio);
    }

    #[test]
    fn read_status_uses_burst_flags() {
        let mut radio = mk_radio(
            2,
            &[
                SpiTransaction::write_vec(vec![0xF1]),
                SpiTransaction::flush(),
                SpiTransaction::read_vec(vec![0x14]),
                SpiTransaction::write_vec(vec![0xF5]),
                SpiTransaction::flush(),
                SpiTransaction::read_vec(vec![0x0D]),
            ],
        );
        assert_eq!(radio.read_status(0x31).unwrap(), 0x14);
        assert_eq!(radio.marc_state().unwrap(), MarcState::Rx);
        done(radio);
    }

    #[test]
    fn strobe_never_reads() {
        let mut radio = mk_radio(
            2,
            &[
                SpiTransaction::write_vec(vec![0x36]),
                SpiTransaction::flush(),
                SpiTransaction::write_vec(vec![0x34]),
                SpiTransaction::flush(),
            ],
        );
        radio.strobe(0x36).unwrap();
        radio.command(Strobe::SRX).unwrap();
        done(radio);
    }

    #[test]
    fn caller_flags_are_masked() {
        let mut radio = mk_radio(
            2,
            &[
                SpiTransaction::write_vec(vec![0x8A]),
                SpiTransaction::flush(),
                SpiTransaction::read_vec(vec![0x00]),
                SpiTransaction::write_vec(vec![0x0A, 0x01]),
                SpiTransaction::flush(),
            ],
        );
        radio.read_register(0xCA).unwrap();
        radio.write_register(0x8A, 0x01).unwrap();
        done(radio);
    }

    #[test]
    fn powerup_reset_pulses_then_resets() {
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0x30]),
            SpiTransaction::flush(),
        ]);
        let ncs = PinMock::new(&[
            // new()
            PinTransaction::set(State::High),
            // reset pulse
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            // SRES
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let mut radio = Cc1100::new(spi, ncs, NoopDelay::new(), Config::default()).unwrap();
        radio.powerup_reset().unwrap();
        done(radio);
    }

    #[test]
    fn wait_rounding() {
        assert_eq!(cycles_to_ms(0), 1);
        assert_eq!(cycles_to_ms(500), 1);
        assert_eq!(cycles_to_ms(999), 1);
        assert_eq!(cycles_to_ms(1000), 1);
        assert_eq!(cycles_to_ms(1500), 1);
        assert_eq!(cycles_to_ms(1999), 1);
        assert_eq!(cycles_to_ms(2500), 2);
    }
}
