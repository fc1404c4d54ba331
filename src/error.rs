/// Errors that can occur when talking to the chip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError<SPIError, PinError> {
    /// SPI communication error
    Spi(SPIError),
    /// Chip select pin error
    Pin(PinError),
    /// The transport returned fewer bytes than requested.
    ///
    /// Only reported when [`ShortReadPolicy::Fail`](crate::ShortReadPolicy::Fail) is configured.
    ShortTransfer {
        /// Number of bytes requested
        expected: usize,
        /// Number of bytes the transport reported
        actual: usize,
    },
}
