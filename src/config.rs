//! Timing and error policy configuration of the driver.

/// What the driver does when the transport returns fewer bytes than requested.
///
/// Defaults to [`Warn`](ShortReadPolicy::Warn).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShortReadPolicy {
    /// Log a warning and hand back whatever was captured. Reads never fail on a short count.
    #[default]
    Warn,
    /// Return [`TransferError::ShortTransfer`](crate::TransferError::ShortTransfer).
    Fail,
}

/// Driver configuration.
///
/// # Examples
/// ```
/// use cc1100::{Config, ShortReadPolicy};
///
/// let config = Config::default()
///     .settle_delay_us(50)
///     .short_read_policy(ShortReadPolicy::Fail);
/// ```
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) settle_delay_us: u32,
    pub(crate) reset_timing: ResetTiming,
    pub(crate) short_read_policy: ShortReadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_us: 1000,
            reset_timing: ResetTiming::default(),
            short_read_policy: ShortReadPolicy::default(),
        }
    }
}

impl Config {
    /// Delay between asserting chip select and the first clock edge, in microseconds.
    ///
    /// Must not be shorter than the setup time in the chip's datasheet. Defaults to 1 ms.
    pub fn settle_delay_us(mut self, us: u32) -> Self {
        self.settle_delay_us = us;
        self
    }

    /// Waits used by [`powerup_reset()`](crate::Cc1100::powerup_reset).
    pub fn reset_timing(mut self, timing: ResetTiming) -> Self {
        self.reset_timing = timing;
        self
    }

    /// Handling of short reads.
    pub fn short_read_policy(mut self, policy: ShortReadPolicy) -> Self {
        self.short_read_policy = policy;
        self
    }
}

/// Waits of the manual power-on reset sequence, in cycles as taken by
/// [`wait()`](crate::Cc1100::wait).
///
/// The defaults are the minimums from the chip's reset timing and should only ever be raised.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetTiming {
    /// Chip select high before the pulse.
    pub before_pulse: u32,
    /// Chip select held low.
    pub pulse: u32,
    /// Chip select high before the reset strobe.
    pub after_pulse: u32,
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self {
            before_pulse: 30,
            pulse: 30,
            after_pulse: 45,
        }
    }
}
