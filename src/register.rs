//! Register addresses, command strobes and header flags of the CC1100/CC2500 SPI interface.
//!
//! A header byte is a 6 bit address with two mode flags on top. The driver ORs the flags in
//! itself, so every address in this module is a bare 6 bit address.

/// Header flag for a burst write.
pub const WRITE_BURST: u8 = 0x40;
/// Header flag for a single byte read.
pub const READ_SINGLE: u8 = 0x80;
/// Header flag for a burst read. Status registers are read with this flag as well.
pub const READ_BURST: u8 = 0xC0;
/// Bits of a header byte that carry the address.
pub const ADDRESS_MASK: u8 = 0x3F;

/// Configuration registers.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// GDO2 output pin configuration
    IOCFG2 = 0x00,
    /// GDO1 output pin configuration
    IOCFG1 = 0x01,
    /// GDO0 output pin configuration
    IOCFG0 = 0x02,
    /// RX FIFO and TX FIFO thresholds
    FIFOTHR = 0x03,
    /// Sync word, high byte
    SYNC1 = 0x04,
    /// Sync word, low byte
    SYNC0 = 0x05,
    /// Packet length
    PKTLEN = 0x06,
    /// Packet automation control
    PKTCTRL1 = 0x07,
    /// Packet automation control
    PKTCTRL0 = 0x08,
    /// Device address
    ADDR = 0x09,
    /// Channel number
    CHANNR = 0x0A,
    /// Frequency synthesizer control
    FSCTRL1 = 0x0B,
    /// Frequency synthesizer control
    FSCTRL0 = 0x0C,
    /// Frequency control word, high byte
    FREQ2 = 0x0D,
    /// Frequency control word, middle byte
    FREQ1 = 0x0E,
    /// Frequency control word, low byte
    FREQ0 = 0x0F,
    /// Modem configuration
    MDMCFG4 = 0x10,
    /// Modem configuration
    MDMCFG3 = 0x11,
    /// Modem configuration
    MDMCFG2 = 0x12,
    /// Modem configuration
    MDMCFG1 = 0x13,
    /// Modem configuration
    MDMCFG0 = 0x14,
    /// Modem deviation setting
    DEVIATN = 0x15,
    /// Main radio control state machine configuration
    MCSM2 = 0x16,
    /// Main radio control state machine configuration
    MCSM1 = 0x17,
    /// Main radio control state machine configuration
    MCSM0 = 0x18,
    /// Frequency offset compensation configuration
    FOCCFG = 0x19,
    /// Bit synchronization configuration
    BSCFG = 0x1A,
    /// AGC control
    AGCCTRL2 = 0x1B,
    /// AGC control
    AGCCTRL1 = 0x1C,
    /// AGC control
    AGCCTRL0 = 0x1D,
    /// High byte event 0 timeout
    WOREVT1 = 0x1E,
    /// Low byte event 0 timeout
    WOREVT0 = 0x1F,
    /// Wake on radio control
    WORCTRL = 0x20,
    /// Front end RX configuration
    FREND1 = 0x21,
    /// Front end TX configuration
    FREND0 = 0x22,
    /// Frequency synthesizer calibration
    FSCAL3 = 0x23,
    /// Frequency synthesizer calibration
    FSCAL2 = 0x24,
    /// Frequency synthesizer calibration
    FSCAL1 = 0x25,
    /// Frequency synthesizer calibration
    FSCAL0 = 0x26,
    /// RC oscillator configuration
    RCCTRL1 = 0x27,
    /// RC oscillator configuration
    RCCTRL0 = 0x28,
    /// Frequency synthesizer calibration control
    FSTEST = 0x29,
    /// Production test
    PTEST = 0x2A,
    /// AGC test
    AGCTEST = 0x2B,
    /// Various test settings
    TEST2 = 0x2C,
    /// Various test settings
    TEST1 = 0x2D,
    /// Various test settings
    TEST0 = 0x2E,
    /// Power amplifier output table
    PATABLE = 0x3E,
    /// TX FIFO on write, RX FIFO on read
    FIFO = 0x3F,
}

impl Register {
    /// Bare 6 bit address of the register.
    pub fn addr(&self) -> u8 {
        *self as u8
    }
}

/// Read-only status registers.
///
/// They share their addresses with the command strobes and are told apart by the burst bit
/// in the header.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StatusRegister {
    /// Part number
    PARTNUM = 0x30,
    /// Current version number
    VERSION = 0x31,
    /// Frequency offset estimate
    FREQEST = 0x32,
    /// Demodulator estimate for link quality
    LQI = 0x33,
    /// Received signal strength indication
    RSSI = 0x34,
    /// Control state machine state
    MARCSTATE = 0x35,
    /// High byte of WOR timer
    WORTIME1 = 0x36,
    /// Low byte of WOR timer
    WORTIME0 = 0x37,
    /// Current GDOx status and packet status
    PKTSTATUS = 0x38,
    /// Current setting from PLL calibration module
    VCO_VC_DAC = 0x39,
    /// Underflow and number of bytes in the TX FIFO
    TXBYTES = 0x3A,
    /// Overflow and number of bytes in the RX FIFO
    RXBYTES = 0x3B,
    /// Last RC oscillator calibration result
    RCCTRL1_STATUS = 0x3C,
    /// Last RC oscillator calibration result
    RCCTRL0_STATUS = 0x3D,
}

impl StatusRegister {
    /// Bare 6 bit address of the register.
    pub fn addr(&self) -> u8 {
        *self as u8
    }
}

/// Command strobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Strobe {
    /// Reset chip
    SRES = 0x30,
    /// Enable and calibrate frequency synthesizer
    SFSTXON = 0x31,
    /// Turn off crystal oscillator
    SXOFF = 0x32,
    /// Calibrate frequency synthesizer and turn it off
    SCAL = 0x33,
    /// Enable RX
    SRX = 0x34,
    /// Enable TX
    STX = 0x35,
    /// Exit RX / TX
    SIDLE = 0x36,
    /// AFC adjustment of the frequency synthesizer
    SAFC = 0x37,
    /// Start automatic RX polling sequence (wake on radio)
    SWOR = 0x38,
    /// Enter power down mode when chip select goes high
    SPWD = 0x39,
    /// Flush the RX FIFO
    SFRX = 0x3A,
    /// Flush the TX FIFO
    SFTX = 0x3B,
    /// Reset real time clock
    SWORRST = 0x3C,
    /// No operation
    SNOP = 0x3D,
}

impl Strobe {
    /// Header byte of the strobe.
    pub fn opcode(&self) -> u8 {
        *self as u8
    }
}
