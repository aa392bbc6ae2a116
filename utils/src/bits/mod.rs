#[inline]
pub const fn bool_from_bit(value: u8) -> bool {
    (value & 0b1) == 0b1
}

#[inline]
pub const fn bool_to_bit(value: bool) -> u8 {
    match value {
        true => 0b1,
        false => 0b0,
    }
}

/// the bit at `index` counted from the most significant bit
#[inline]
pub const fn msb_bit(value: u8, index: u8) -> bool {
    bool_from_bit(value >> (7 - index))
}

#[cfg(test)]
mod test {
    use super::{bool_from_bit, bool_to_bit, msb_bit};

    #[test]
    fn test_bit_helpers() {
        assert!(bool_from_bit(0b11));
        assert!(!bool_from_bit(0b10));
        assert_eq!(bool_to_bit(true), 1);
        assert_eq!(bool_to_bit(false), 0);
        assert!(msb_bit(0b1000_0000, 0));
        assert!(!msb_bit(0b1000_0000, 1));
        assert!(msb_bit(0b0000_0010, 6));
    }
}
