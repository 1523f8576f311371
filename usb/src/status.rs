use crate::commands::Query;
use crate::error::{CommandError, DecodeError, TransferError};
use crate::volume;
use dawn_types::{DeviceStatus, Filter, Gain, Indicator};
use log::warn;

pub const RESPONSE_LENGTH: usize = 7;

/// The values the DAC reports, and where to find them in a response.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Filter,
    Volume,
    Gain,
    Indicator,
}

impl Field {
    pub fn offset(&self) -> usize {
        match self {
            Field::Filter => 3,
            Field::Volume => 4,
            Field::Gain => 4,
            Field::Indicator => 5,
        }
    }

    /// Volume and gain share an offset, so the query decides which one the byte holds.
    pub fn query(&self) -> Query {
        match self {
            Field::Volume => Query::Volume,
            Field::Filter | Field::Gain | Field::Indicator => Query::All,
        }
    }
}

/// The buffer read back after a query, along with any transfer failures that happened on the
/// way. When a phase failed the buffer may be stale or zero filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    data: [u8; RESPONSE_LENGTH],
    failures: Vec<TransferError>,
}

impl Response {
    pub fn new(data: [u8; RESPONSE_LENGTH], failures: Vec<TransferError>) -> Self {
        Self { data, failures }
    }

    pub fn data(&self) -> &[u8; RESPONSE_LENGTH] {
        &self.data
    }

    pub fn failures(&self) -> &[TransferError] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turns the first recorded transfer failure into an error.
    pub fn checked(self) -> Result<Self, CommandError> {
        match self.failures.first() {
            Some(failure) => Err(CommandError::Transfer(*failure)),
            None => Ok(self),
        }
    }

    pub fn field(&self, field: Field) -> u8 {
        self.data[field.offset()]
    }

    /// Reads the volume from a `Query::Volume` response.
    pub fn volume(&self) -> Option<u8> {
        let raw = self.field(Field::Volume);
        let level = volume::to_normal(raw);
        if level.is_none() {
            warn!("Device reported unknown volume byte {:#04x}", raw);
        }
        level
    }

    /// Reads the filter from a `Query::All` response.
    pub fn filter(&self) -> Result<Filter, DecodeError> {
        let index = self.field(Field::Filter);
        Filter::from_index(index).ok_or(DecodeError::FilterOutOfRange(index))
    }

    /// Reads the gain from a `Query::All` response.
    pub fn gain(&self) -> Gain {
        Gain::from_raw(self.field(Field::Gain))
    }

    /// Reads the indicator state from a `Query::All` response.
    pub fn indicator(&self) -> Indicator {
        Indicator::from_raw(self.field(Field::Indicator))
    }
}

/// Combines a `Query::All` and a `Query::Volume` response into a full status.
pub fn decode_status(all: &Response, volume: &Response) -> Result<DeviceStatus, DecodeError> {
    Ok(DeviceStatus {
        volume: volume.volume(),
        filter: all.filter()?,
        gain: all.gain(),
        indicator: all.indicator(),
    })
}
