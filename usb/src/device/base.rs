use crate::commands::{Query, Setting};
use crate::error::{CommandError, TransferError, TransferPhase};
use crate::status::{Field, Response, RESPONSE_LENGTH};
use crate::volume;
use log::{debug, error};

pub const REQUEST_WRITE: u8 = 0xa0;
pub const REQUEST_READ: u8 = 0xa1;
pub const REQUEST_VALUE: u16 = 0x0000;
pub const REQUEST_INDEX: u16 = 0x09a0;

/// A single vendor control transfer in either direction, addressed to the DAC. Implementors
/// supply the request type (vendor class, recipient other) and the timeout.
pub trait ExecutableDawn {
    fn write_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<usize, rusb::Error>;

    fn read_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<usize, rusb::Error>;
}

// The DAC protocol, built on top of the transfers. A failing transfer is logged and recorded,
// it never stops the next phase from running.
pub trait DawnCommands: ExecutableDawn {
    /// Sends a query then reads the response. The buffer is always returned, even if one or
    /// both phases failed, with the failures attached to it.
    fn read(&mut self, query: Query) -> Response {
        let mut failures = vec![];

        let frame = query.frame();
        debug!("Sending {:?}: {:02x?}", query, frame);
        if let Err(error) = self.write_control(REQUEST_WRITE, REQUEST_VALUE, REQUEST_INDEX, &frame)
        {
            let failure = TransferError {
                phase: TransferPhase::Write,
                error,
            };
            error!("{}", failure);
            failures.push(failure);
        }

        let mut data = [0; RESPONSE_LENGTH];
        match self.read_control(REQUEST_READ, REQUEST_VALUE, REQUEST_INDEX, &mut data) {
            Ok(length) => debug!("Received {} bytes: {:02x?}", length, data),
            Err(error) => {
                let failure = TransferError {
                    phase: TransferPhase::Read,
                    error,
                };
                error!("{}", failure);
                failures.push(failure);
            }
        }

        Response::new(data, failures)
    }

    fn read_field(&mut self, field: Field) -> Response {
        self.read(field.query())
    }

    /// Sends a new raw value for a setting. Nothing is read back.
    fn write(&mut self, setting: Setting, value: u8) -> Result<(), TransferError> {
        let frame = setting.frame(value);
        debug!("Sending {:?}: {:02x?}", setting, frame);
        if let Err(error) = self.write_control(REQUEST_WRITE, REQUEST_VALUE, REQUEST_INDEX, &frame)
        {
            let failure = TransferError {
                phase: TransferPhase::Write,
                error,
            };
            error!("{}", failure);
            return Err(failure);
        }
        Ok(())
    }

    fn set_volume(&mut self, level: u8) -> Result<(), CommandError> {
        let raw = volume::to_raw(level).ok_or(CommandError::VolumeOutOfRange(level))?;
        self.write(Setting::Volume, raw)?;
        Ok(())
    }

    // Filter, gain and indicator values go to the device as given, the firmware decides what
    // to make of anything out of range.
    fn set_filter(&mut self, index: u8) -> Result<(), TransferError> {
        self.write(Setting::Filter, index)
    }

    fn set_gain(&mut self, value: u8) -> Result<(), TransferError> {
        self.write(Setting::Gain, value)
    }

    fn set_indicator(&mut self, value: u8) -> Result<(), TransferError> {
        self.write(Setting::Indicator, value)
    }
}
