// Every frame starts with an opcode triplet the firmware uses to pick the attribute. The bytes
// are opaque to us, they're only ever copied onto the wire.

pub const QUERY_FRAME_LENGTH: usize = 3;
pub const SET_FRAME_LENGTH: usize = 4;

/// Commands which are answered with a response buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Filter, gain and indicator in one response
    All,
    Volume,
}

impl Query {
    pub fn opcode(&self) -> [u8; 3] {
        match self {
            Query::All => [0xc0, 0xa5, 0xa3],
            Query::Volume => [0xc0, 0xa5, 0xa2],
        }
    }

    pub fn frame(&self) -> [u8; QUERY_FRAME_LENGTH] {
        self.opcode()
    }
}

/// Commands which carry a new value for one setting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Setting {
    Filter,
    Gain,
    Volume,
    Indicator,
}

impl Setting {
    pub fn opcode(&self) -> [u8; 3] {
        match self {
            Setting::Filter => [0xc0, 0xa5, 0x01],
            Setting::Gain => [0xc0, 0xa5, 0x02],
            Setting::Volume => [0xc0, 0xa5, 0x04],
            Setting::Indicator => [0xc0, 0xa5, 0x06],
        }
    }

    /// Builds the frame for a raw value. No range checks happen here, volume callers are
    /// expected to have gone through the volume table first.
    pub fn frame(&self, value: u8) -> [u8; SET_FRAME_LENGTH] {
        let [a, b, c] = self.opcode();
        [a, b, c, value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_frames_are_bare_opcodes() {
        assert_eq!(Query::All.frame(), [0xc0, 0xa5, 0xa3]);
        assert_eq!(Query::Volume.frame(), [0xc0, 0xa5, 0xa2]);
    }

    #[test]
    fn set_frames_append_the_value() {
        assert_eq!(Setting::Filter.frame(2), [0xc0, 0xa5, 0x01, 0x02]);
        assert_eq!(Setting::Gain.frame(1), [0xc0, 0xa5, 0x02, 0x01]);
        assert_eq!(Setting::Volume.frame(60), [0xc0, 0xa5, 0x04, 60]);
        assert_eq!(Setting::Indicator.frame(0), [0xc0, 0xa5, 0x06, 0x00]);
    }

    #[test]
    fn set_frames_pass_values_through_unchecked() {
        assert_eq!(Setting::Filter.frame(200)[3], 200);
        assert_eq!(Setting::Indicator.frame(0xff)[3], 0xff);
    }

    #[test]
    fn opcodes_distinct() {
        let opcodes = [
            Query::All.opcode(),
            Query::Volume.opcode(),
            Setting::Filter.opcode(),
            Setting::Gain.opcode(),
            Setting::Volume.opcode(),
            Setting::Indicator.opcode(),
        ];
        for i in 0..opcodes.len() {
            for j in (i + 1)..opcodes.len() {
                assert_ne!(opcodes[i], opcodes[j], "opcodes at index {i} and {j} collide");
            }
        }
    }
}
