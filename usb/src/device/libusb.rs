use crate::device::base::{DawnCommands, ExecutableDawn};
use crate::error::ConnectError;
use crate::{PID_DAWN_PRO, VID_DAWN};
use dawn_types::UsbProductInformation;
use log::{debug, info, warn};
use rusb::{
    Context, DeviceDescriptor, DeviceHandle, Direction, LogLevel, Recipient, RequestType,
    UsbContext,
};
use std::time::Duration;

/// An open session with the DAC. The handle is closed when this is dropped.
pub struct DawnUSB<T: UsbContext> {
    handle: DeviceHandle<T>,
    descriptor: DeviceDescriptor,
    timeout: Duration,
}

impl DawnUSB<Context> {
    /// Initialises libusb and opens the first DAC found. A zero timeout waits forever.
    pub fn open(timeout: Duration, log_level: LogLevel) -> Result<Self, ConnectError> {
        let mut context = Context::new().map_err(ConnectError::Init)?;
        context.set_log_level(log_level);
        Self::open_with_context(&context, timeout)
    }
}

impl<T: UsbContext> DawnUSB<T> {
    pub fn open_with_context(context: &T, timeout: Duration) -> Result<Self, ConnectError> {
        let handle = context
            .open_device_with_vid_pid(VID_DAWN, PID_DAWN_PRO)
            .ok_or(ConnectError::DeviceNotFound)?;

        let device = handle.device();
        let descriptor = device.device_descriptor()?;
        info!("Connected to Dawn Pro at {:?}", device);

        Ok(Self {
            handle,
            descriptor,
            timeout,
        })
    }

    pub fn get_descriptor(&self) -> Result<UsbProductInformation, ConnectError> {
        let device = self.handle.device();
        let version = self.descriptor.device_version();

        // String descriptors are optional, don't fail the whole lookup over them.
        let timeout = Duration::from_millis(100);
        let language = match self.handle.read_languages(timeout) {
            Ok(languages) => languages.first().copied(),
            Err(error) => {
                warn!("Unable to read string languages: {}", error);
                None
            }
        };

        let (manufacturer, product_name) = match language {
            Some(language) => (
                self.handle
                    .read_manufacturer_string(language, &self.descriptor, timeout)
                    .unwrap_or_else(|_| String::from("Unknown")),
                self.handle
                    .read_product_string(language, &self.descriptor, timeout)
                    .unwrap_or_else(|_| String::from("Unknown")),
            ),
            None => (String::from("Unknown"), String::from("Unknown")),
        };

        Ok(UsbProductInformation {
            bus_number: device.bus_number(),
            address: device.address(),
            vendor_id: self.descriptor.vendor_id(),
            product_id: self.descriptor.product_id(),
            version: (version.0, version.1, version.2),
            manufacturer_name: manufacturer,
            product_name,
        })
    }
}

impl<T: UsbContext> ExecutableDawn for DawnUSB<T> {
    fn write_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<usize, rusb::Error> {
        self.handle.write_control(
            rusb::request_type(Direction::Out, RequestType::Vendor, Recipient::Other),
            request,
            value,
            index,
            data,
            self.timeout,
        )
    }

    fn read_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<usize, rusb::Error> {
        let length = self.handle.read_control(
            rusb::request_type(Direction::In, RequestType::Vendor, Recipient::Other),
            request,
            value,
            index,
            buf,
            self.timeout,
        )?;
        if length < buf.len() {
            debug!("Short response, expected {} got {}", buf.len(), length);
        }
        Ok(length)
    }
}

impl<T: UsbContext> DawnCommands for DawnUSB<T> {}
