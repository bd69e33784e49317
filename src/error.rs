use embedded_hal::i2c::{Error as I2cError, ErrorKind};

pub use embedded_hal::i2c::NoAcknowledgeSource;

/// Possible errors from the HIH8000 driver.
///
/// Every variant is recoverable: the driver never panics and never mutates
/// its stored reading on a failed operation, so the caller can simply retry.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// No bus address has been configured; call [`Hih8000::set_address`] first.
    ///
    /// [`Hih8000::set_address`]: crate::Hih8000::set_address
    AddressNotSet,
    /// The supplied address does not fit the 7-bit addressing space.
    InvalidAddress(u8),
    /// The bus reported a buffer overrun during the transaction.
    Overrun,
    /// The sensor did not acknowledge its address or a data byte.
    NoAcknowledge(NoAcknowledgeSource),
    /// Any other error from the underlying bus.
    Bus(E),
}

impl<E: I2cError> From<E> for Error<E> {
    fn from(err: E) -> Self {
        match err.kind() {
            ErrorKind::NoAcknowledge(source) => Self::NoAcknowledge(source),
            ErrorKind::Overrun => Self::Overrun,
            _ => Self::Bus(err),
        }
    }
}
