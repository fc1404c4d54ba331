//! Typed views of the status registers.

/// State of the main radio control state machine, as read from `MARCSTATE`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarcState {
    /// Sleep
    Sleep,
    /// Idle
    Idle,
    /// Crystal oscillator off
    Xoff,
    /// Manual calibration, VCO on
    VcoOnMc,
    /// Manual calibration, regulator on
    RegOnMc,
    /// Manual calibration
    ManCal,
    /// VCO on
    VcoOn,
    /// Regulator on
    RegOn,
    /// Start calibration
    StartCal,
    /// Bandwidth boost
    BwBoost,
    /// Frequency synthesizer locked
    FsLock,
    /// IF ADC on
    IfAdcOn,
    /// End calibration
    EndCal,
    /// Receiving
    Rx,
    /// Receive end
    RxEnd,
    /// Receive reset
    RxRst,
    /// TX to RX switch
    TxRxSwitch,
    /// RX FIFO overflowed
    RxFifoOverflow,
    /// Frequency synthesizer on, ready to transmit
    FsTxOn,
    /// Transmitting
    Tx,
    /// Transmit end
    TxEnd,
    /// RX to TX switch
    RxTxSwitch,
    /// TX FIFO underflowed
    TxFifoUnderflow,
    /// Value outside of the documented states
    Unknown(u8),
}

impl From<u8> for MarcState {
    fn from(t: u8) -> Self {
        match t & 0x1F {
            0 => Self::Sleep,
            1 => Self::Idle,
            2 => Self::Xoff,
            3 => Self::VcoOnMc,
            4 => Self::RegOnMc,
            5 => Self::ManCal,
            6 => Self::VcoOn,
            7 => Self::RegOn,
            8 => Self::StartCal,
            9 => Self::BwBoost,
            10 => Self::FsLock,
            11 => Self::IfAdcOn,
            12 => Self::EndCal,
            13 => Self::Rx,
            14 => Self::RxEnd,
            15 => Self::RxRst,
            16 => Self::TxRxSwitch,
            17 => Self::RxFifoOverflow,
            18 => Self::FsTxOn,
            19 => Self::Tx,
            20 => Self::TxEnd,
            21 => Self::RxTxSwitch,
            22 => Self::TxFifoUnderflow,
            n => Self::Unknown(n),
        }
    }
}

/// Fill level of one of the FIFOs, as read from `TXBYTES` or `RXBYTES`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoBytes(u8);

impl FifoBytes {
    /// Number of bytes in the FIFO.
    pub fn count(&self) -> u8 {
        self.0 & 0x7F
    }

    /// Returns `true` if the RX FIFO overflowed or the TX FIFO underflowed.
    pub fn overflowed(&self) -> bool {
        self.0 & (1 << 7) != 0
    }

    /// Returns `true` if the FIFO holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl From<u8> for FifoBytes {
    fn from(t: u8) -> Self {
        FifoBytes(t)
    }
}
