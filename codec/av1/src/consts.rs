/// largest OBU accepted from a single temporal unit
pub const MAX_OBU_SIZE: usize = 3 * 1024 * 1024;

pub const MAX_OBUS_PER_TEMPORAL_UNIT: usize = 10;
