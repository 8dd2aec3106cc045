use crate::STEPS_PER_TRACK;

pub const MAGIC: &[u8; 6] = b"SPLICE";
pub const PAYLOAD_SIZE_LEN: usize = 8;

pub const VERSION_LEN: usize = 32;
pub const TEMPO_LEN: usize = 4;

pub const TRACK_ID_LEN: usize = 4;
pub const STEPS_LEN: usize = STEPS_PER_TRACK;
pub const STEP_ON: u8 = 0x01;
