pub use rusb;
pub mod commands;
pub mod error;
pub mod status;
pub mod volume;

mod device;

pub use device::base::{DawnCommands, ExecutableDawn};
pub use device::libusb::DawnUSB;
pub use status::Response;

pub const VID_DAWN: u16 = 0x2fc6;
pub const PID_DAWN_PRO: u16 = 0xf06a;
