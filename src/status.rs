//! Driver status codes.
//!
//! [`Status`] is the common result code of the peripheral drivers. Lower layers keep their own
//! error types and convert into it with `From`.

use crate::clocks;

/// Driver status, numerically compatible with the vendor SDK status codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Status {
    Ok = 0x00,
    Fail = 0x01,
    Busy = 0x04,
    Timeout = 0x07,
    NotSupported = 0x0F,
    NotInitialized = 0x11,
    InvalidParameter = 0x21,
    NullPointer = 0x22,
    InvalidConfiguration = 0x23,
    InvalidMode = 0x24,
    InvalidType = 0x26,
    InvalidRange = 0x28,
}

impl Status {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// Error codes of the CMSIS driver tables, including the SPI specific range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum DriverError {
    Error = -1,
    Busy = -2,
    Timeout = -3,
    Unsupported = -4,
    Parameter = -5,
    Specific = -6,
    SpiMode = -7,
    SpiFrameFormat = -8,
    SpiDataBits = -9,
    SpiBitOrder = -10,
    SpiSsMode = -11,
}

impl DriverError {
    /// Decodes a raw driver return value. Zero and positive values are not errors.
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::Error,
            -2 => Self::Busy,
            -3 => Self::Timeout,
            -4 => Self::Unsupported,
            -5 => Self::Parameter,
            -6 => Self::Specific,
            -7 => Self::SpiMode,
            -8 => Self::SpiFrameFormat,
            -9 => Self::SpiDataBits,
            -10 => Self::SpiBitOrder,
            -11 => Self::SpiSsMode,
            _ => return None,
        })
    }
}

impl From<DriverError> for Status {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::Error | DriverError::Specific => Status::Fail,
            DriverError::Busy => Status::Busy,
            DriverError::Timeout => Status::Timeout,
            DriverError::Unsupported => Status::NotSupported,
            DriverError::Parameter | DriverError::SpiSsMode => Status::InvalidParameter,
            DriverError::SpiMode => Status::InvalidMode,
            DriverError::SpiFrameFormat => Status::InvalidType,
            DriverError::SpiDataBits | DriverError::SpiBitOrder => Status::InvalidRange,
        }
    }
}

impl From<clocks::Error> for Status {
    fn from(err: clocks::Error) -> Self {
        match err {
            clocks::Error::InvalidParameters | clocks::Error::InvalidInputFrequency => Status::InvalidParameter,
            clocks::Error::ClockNotEnabled => Status::NotInitialized,
            clocks::Error::Timeout => Status::Timeout,
        }
    }
}

/// Folds a driver result into a status code.
pub fn status_of<E: Into<Status>>(res: Result<(), E>) -> Status {
    match res {
        Ok(()) => Status::Ok,
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_codes_map_to_status() {
        let cases = [
            (-1, Status::Fail),
            (-2, Status::Busy),
            (-3, Status::Timeout),
            (-4, Status::NotSupported),
            (-5, Status::InvalidParameter),
            (-6, Status::Fail),
            (-7, Status::InvalidMode),
            (-8, Status::InvalidType),
            (-9, Status::InvalidRange),
            (-10, Status::InvalidRange),
            (-11, Status::InvalidParameter),
        ];
        for (code, status) in cases {
            let err = DriverError::from_code(code).unwrap();
            assert_eq!(Status::from(err), status);
        }
        assert_eq!(DriverError::from_code(0), None);
        assert_eq!(DriverError::from_code(-12), None);
    }

    #[test]
    fn clock_errors_map_to_status() {
        assert_eq!(Status::from(clocks::Error::InvalidParameters), Status::InvalidParameter);
        assert_eq!(Status::from(clocks::Error::InvalidInputFrequency), Status::InvalidParameter);
        assert_eq!(Status::from(clocks::Error::ClockNotEnabled), Status::NotInitialized);
        assert_eq!(Status::from(clocks::Error::Timeout), Status::Timeout);
        assert_eq!(status_of::<clocks::Error>(Ok(())), Status::Ok);
        assert_eq!(Status::InvalidRange.code(), 0x28);
    }
}
