#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// The digital filters offered by the DAC, in the order the firmware indexes them.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Filter {
    #[strum(to_string = "Fast Roll Off Low Latency")]
    FastRollOffLowLatency,
    #[strum(to_string = "Fast Roll Off Phase Compensated")]
    FastRollOffPhaseCompensated,
    #[strum(to_string = "Slow Roll Off Low Latency")]
    SlowRollOffLowLatency,
    #[strum(to_string = "Slow Roll Off Phase Compensated")]
    SlowRollOffPhaseCompensated,
    #[strum(to_string = "Non Oversampling")]
    NonOversampling,
}

impl Filter {
    /// Looks up a filter by the index the device reports, None when the index is unknown.
    pub fn from_index(index: u8) -> Option<Self> {
        Filter::iter().nth(index as usize)
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gain {
    Low,
    High,
}

impl Gain {
    // Anything other than zero is reported as high gain.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Gain::Low,
            _ => Gain::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    #[strum(to_string = "on")]
    On,
    #[strum(to_string = "Temp off")]
    TempOff,
    #[strum(to_string = "Off")]
    Off,
}

impl Indicator {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Indicator::On,
            1 => Indicator::TempOff,
            _ => Indicator::Off,
        }
    }
}

/// A decoded snapshot of everything the DAC reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceStatus {
    /// Volume on the 0-60 scale, None if the device reported a byte outside the volume table.
    pub volume: Option<u8>,
    pub filter: Filter,
    pub gain: Gain,
    pub indicator: Indicator,
}

/// Plain description of the opened USB device.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsbProductInformation {
    pub bus_number: u8,
    pub address: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub version: (u8, u8, u8),
    pub manufacturer_name: String,
    pub product_name: String,
}
