use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("Unable to initialise libusb: {}", error_name(.0))]
    Init(#[source] rusb::Error),

    #[error("No Dawn Pro DAC was found")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

impl ConnectError {
    /// The process exit code used when the device can't be reached.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConnectError::Init(error) => -libusb_code(error),
            ConnectError::DeviceNotFound => -1,
            ConnectError::UsbError(_) => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferPhase {
    Write,
    Read,
}

impl Display for TransferPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferPhase::Write => write!(f, "write"),
            TransferPhase::Read => write!(f, "read"),
        }
    }
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Error submitting {phase} transfer: {}", error_name(.error))]
pub struct TransferError {
    pub phase: TransferPhase,
    #[source]
    pub error: rusb::Error,
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("Volume {0} is out of range, expected 0-60")]
    VolumeOutOfRange(u8),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Filter index {0} is out of range")]
    FilterOutOfRange(u8),
}

/// The symbolic libusb name for an error, as `libusb_error_name` would print it.
pub fn error_name(error: &rusb::Error) -> &'static str {
    match error {
        rusb::Error::Io => "LIBUSB_ERROR_IO",
        rusb::Error::InvalidParam => "LIBUSB_ERROR_INVALID_PARAM",
        rusb::Error::Access => "LIBUSB_ERROR_ACCESS",
        rusb::Error::NoDevice => "LIBUSB_ERROR_NO_DEVICE",
        rusb::Error::NotFound => "LIBUSB_ERROR_NOT_FOUND",
        rusb::Error::Busy => "LIBUSB_ERROR_BUSY",
        rusb::Error::Timeout => "LIBUSB_ERROR_TIMEOUT",
        rusb::Error::Overflow => "LIBUSB_ERROR_OVERFLOW",
        rusb::Error::Pipe => "LIBUSB_ERROR_PIPE",
        rusb::Error::Interrupted => "LIBUSB_ERROR_INTERRUPTED",
        rusb::Error::NoMem => "LIBUSB_ERROR_NO_MEM",
        rusb::Error::NotSupported => "LIBUSB_ERROR_NOT_SUPPORTED",
        _ => "LIBUSB_ERROR_OTHER",
    }
}

// rusb hides the numeric codes, these are the values from libusb.h
fn libusb_code(error: &rusb::Error) -> i32 {
    match error {
        rusb::Error::Io => -1,
        rusb::Error::InvalidParam => -2,
        rusb::Error::Access => -3,
        rusb::Error::NoDevice => -4,
        rusb::Error::NotFound => -5,
        rusb::Error::Busy => -6,
        rusb::Error::Timeout => -7,
        rusb::Error::Overflow => -8,
        rusb::Error::Pipe => -9,
        rusb::Error::Interrupted => -10,
        rusb::Error::NoMem => -11,
        rusb::Error::NotSupported => -12,
        _ => -99,
    }
}
