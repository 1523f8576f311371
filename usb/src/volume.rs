// The DAC takes an attenuation byte rather than a level, and only recognises the bytes listed
// here. Pairs are (raw, level), raw falls as the level rises.
#[rustfmt::skip]
static VOLUME_TABLE: [(u8, u8); 61] = [
    (255, 0), (200, 1), (180, 2), (170, 3), (160, 4), (150, 5), (140, 6), (130, 7),
    (122, 8), (116, 9), (110, 10), (106, 11), (102, 12), (98, 13), (94, 14), (90, 15),
    (88, 16), (86, 17), (84, 18), (82, 19), (80, 20), (78, 21), (76, 22), (74, 23),
    (72, 24), (70, 25), (68, 26), (66, 27), (64, 28), (62, 29), (60, 30), (58, 31),
    (56, 32), (54, 33), (52, 34), (50, 35), (48, 36), (46, 37), (44, 38), (42, 39),
    (40, 40), (38, 41), (36, 42), (34, 43), (32, 44), (30, 45), (28, 46), (26, 47),
    (24, 48), (22, 49), (20, 50), (18, 51), (16, 52), (14, 53), (12, 54), (10, 55),
    (8, 56), (6, 57), (4, 58), (2, 59), (0, 60),
];

pub const MAX_VOLUME: u8 = 60;

/// Converts a raw attenuation byte to a 0-60 level. Bytes not in the table return None.
pub fn to_normal(raw: u8) -> Option<u8> {
    VOLUME_TABLE
        .iter()
        .find(|(table_raw, _)| *table_raw == raw)
        .map(|(_, level)| *level)
}

/// Converts a 0-60 level to the byte the DAC expects.
pub fn to_raw(level: u8) -> Option<u8> {
    VOLUME_TABLE
        .iter()
        .find(|(_, table_level)| *table_level == level)
        .map(|(raw, _)| *raw)
}
