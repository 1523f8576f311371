use crate::cli::{GetCommands, SetCommands};
use anyhow::{Context, Result};
use dawn_types::UsbProductInformation;
use dawn_usb::error::CommandError;
use dawn_usb::status::{decode_status, Field};
use dawn_usb::{DawnCommands, Response};
use std::io::Write;

fn query<D: DawnCommands>(dawn: &mut D, field: Field, strict: bool) -> Result<Response> {
    let response = dawn.read_field(field);
    if strict {
        return Ok(response.checked()?);
    }
    Ok(response)
}

fn volume_label(volume: Option<u8>) -> String {
    match volume {
        Some(level) => level.to_string(),
        None => String::from("Unknown"),
    }
}

pub fn run_get<D: DawnCommands>(
    dawn: &mut D,
    target: GetCommands,
    strict: bool,
    out: &mut impl Write,
) -> Result<()> {
    match target {
        GetCommands::Status { json } => {
            let all = query(dawn, Field::Filter, strict)?;
            let volume = query(dawn, Field::Volume, strict)?;
            let status = decode_status(&all, &volume)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
            } else {
                writeln!(out, "Volume: {}", volume_label(status.volume))?;
                writeln!(out, "Filter: {}", status.filter)?;
                writeln!(out, "Gain: {}", status.gain)?;
                writeln!(out, "Indicator: {}", status.indicator)?;
            }
        }
        GetCommands::Volume => {
            let response = query(dawn, Field::Volume, strict)?;
            writeln!(out, "{}", volume_label(response.volume()))?;
        }
        GetCommands::Filter => {
            let response = query(dawn, Field::Filter, strict)?;
            writeln!(out, "{}", response.filter()?)?;
        }
        GetCommands::Gain => {
            let response = query(dawn, Field::Gain, strict)?;
            writeln!(out, "{}", response.gain())?;
        }
        GetCommands::Indicator => {
            let response = query(dawn, Field::Indicator, strict)?;
            writeln!(out, "{}", response.indicator())?;
        }
    }
    Ok(())
}

pub fn run_set<D: DawnCommands>(dawn: &mut D, target: SetCommands, strict: bool) -> Result<()> {
    let result = match target {
        SetCommands::Volume { level } => dawn.set_volume(level),
        SetCommands::Filter { index } => dawn.set_filter(index).map_err(CommandError::from),
        SetCommands::Gain { value } => dawn.set_gain(value).map_err(CommandError::from),
        SetCommands::Indicator { value } => dawn.set_indicator(value).map_err(CommandError::from),
    };

    match result {
        // Already logged by the transport.
        Err(CommandError::Transfer(_)) if !strict => Ok(()),
        result => result.with_context(|| format!("Unable to apply {:?}", target)),
    }
}

pub fn print_info(info: &UsbProductInformation, out: &mut impl Write) -> Result<()> {
    let (major, minor, sub_minor) = info.version;
    writeln!(
        out,
        "Bus {:03} Device {:03}: ID {:04x}:{:04x}",
        info.bus_number, info.address, info.vendor_id, info.product_id
    )?;
    writeln!(out, "Manufacturer: {}", info.manufacturer_name)?;
    writeln!(out, "Product: {}", info.product_name)?;
    writeln!(out, "Version: {}.{}.{}", major, minor, sub_minor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dawn_usb::ExecutableDawn;
    use dawn_usb::status::RESPONSE_LENGTH;

    // Answers volume queries and get-all queries with different buffers.
    #[derive(Default)]
    struct FakeDawn {
        all: [u8; RESPONSE_LENGTH],
        volume: [u8; RESPONSE_LENGTH],
        last_query: Vec<u8>,
        writes: Vec<Vec<u8>>,
        fail: Option<dawn_usb::rusb::Error>,
    }

    impl ExecutableDawn for FakeDawn {
        fn write_control(
            &mut self,
            _request: u8,
            _value: u16,
            _index: u16,
            data: &[u8],
        ) -> Result<usize, dawn_usb::rusb::Error> {
            self.last_query = data.to_vec();
            self.writes.push(data.to_vec());
            match self.fail {
                Some(error) => Err(error),
                None => Ok(data.len()),
            }
        }

        fn read_control(
            &mut self,
            _request: u8,
            _value: u16,
            _index: u16,
            buf: &mut [u8],
        ) -> Result<usize, dawn_usb::rusb::Error> {
            if let Some(error) = self.fail {
                return Err(error);
            }
            match self.last_query.as_slice() {
                [0xc0, 0xa5, 0xa2] => buf.copy_from_slice(&self.volume),
                _ => buf.copy_from_slice(&self.all),
            }
            Ok(buf.len())
        }
    }

    impl DawnCommands for FakeDawn {}

    fn fake() -> FakeDawn {
        FakeDawn {
            all: [0, 0, 0, 2, 100, 1, 0],
            volume: [0, 0, 0, 0, 110, 0, 0],
            ..Default::default()
        }
    }

    fn get(dawn: &mut FakeDawn, target: GetCommands, strict: bool) -> Result<String> {
        let mut out = Vec::new();
        run_get(dawn, target, strict, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn status_output() {
        let output = get(&mut fake(), GetCommands::Status { json: false }, false).unwrap();
        assert_eq!(
            output,
            "Volume: 10\nFilter: Slow Roll Off Low Latency\nGain: High\nIndicator: Temp off\n"
        );
    }

    #[test]
    fn status_json() {
        let output = get(&mut fake(), GetCommands::Status { json: true }, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["volume"], 10);
        assert_eq!(value["filter"], "SlowRollOffLowLatency");
        assert_eq!(value["gain"], "High");
        assert_eq!(value["indicator"], "TempOff");
    }

    #[test]
    fn single_values() {
        let mut dawn = fake();
        assert_eq!(get(&mut dawn, GetCommands::Volume, false).unwrap(), "10\n");
        assert_eq!(
            get(&mut dawn, GetCommands::Filter, false).unwrap(),
            "Slow Roll Off Low Latency\n"
        );
        assert_eq!(get(&mut dawn, GetCommands::Gain, false).unwrap(), "High\n");
        assert_eq!(
            get(&mut dawn, GetCommands::Indicator, false).unwrap(),
            "Temp off\n"
        );
    }

    #[test]
    fn unknown_volume_is_reported() {
        let mut dawn = FakeDawn {
            volume: [0, 0, 0, 0, 111, 0, 0],
            ..fake()
        };
        assert_eq!(get(&mut dawn, GetCommands::Volume, false).unwrap(), "Unknown\n");
    }

    #[test]
    fn filter_out_of_range_fails() {
        let mut dawn = FakeDawn {
            all: [0, 0, 0, 9, 0, 0, 0],
            ..fake()
        };
        assert!(get(&mut dawn, GetCommands::Filter, false).is_err());
    }

    #[test]
    fn failed_transfers_are_tolerated_unless_strict() {
        let mut dawn = FakeDawn {
            fail: Some(dawn_usb::rusb::Error::Pipe),
            ..fake()
        };
        assert_eq!(get(&mut dawn, GetCommands::Gain, false).unwrap(), "Low\n");
        assert!(get(&mut dawn, GetCommands::Gain, true).is_err());

        assert!(run_set(&mut dawn, SetCommands::Gain { value: 1 }, false).is_ok());
        assert!(run_set(&mut dawn, SetCommands::Gain { value: 1 }, true).is_err());
    }

    #[test]
    fn set_volume_translates_level() {
        let mut dawn = fake();
        run_set(&mut dawn, SetCommands::Volume { level: 30 }, false).unwrap();
        assert_eq!(dawn.writes, vec![vec![0xc0, 0xa5, 0x04, 60]]);
    }

    #[test]
    fn set_volume_out_of_range_fails_without_transfer() {
        let mut dawn = fake();
        assert!(run_set(&mut dawn, SetCommands::Volume { level: 75 }, false).is_err());
        assert!(dawn.writes.is_empty());
    }

    #[test]
    fn raw_settings_pass_through() {
        let mut dawn = fake();
        run_set(&mut dawn, SetCommands::Filter { index: 4 }, false).unwrap();
        run_set(&mut dawn, SetCommands::Indicator { value: 9 }, false).unwrap();
        assert_eq!(
            dawn.writes,
            vec![vec![0xc0, 0xa5, 0x01, 4], vec![0xc0, 0xa5, 0x06, 9]]
        );
    }

    #[test]
    fn info_output() {
        let info = UsbProductInformation {
            bus_number: 1,
            address: 12,
            vendor_id: 0x2fc6,
            product_id: 0xf06a,
            version: (1, 0, 0),
            manufacturer_name: String::from("MOONDROP"),
            product_name: String::from("Dawn Pro"),
        };
        let mut out = Vec::new();
        print_info(&info, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bus 001 Device 012: ID 2fc6:f06a\nManufacturer: MOONDROP\nProduct: Dawn Pro\nVersion: 1.0.0\n"
        );
    }
}
