// The transport is split in two: `base` holds the protocol exchange on top of a raw control
// transfer primitive, `libusb` provides that primitive for a real device.
pub mod base;
pub mod libusb;
