//! Fixed-width binary text for instruction fields.
//!
//! Values are reduced to their two's-complement bit pattern modulo `2^width`,
//! so `-1` in 12 bits is `111111111111` and `40` in 5 bits is `01000`.

/// Widest field any layout uses.
pub const MAX_FIELD_WIDTH: u32 = 16;

const fn mask(width: u32) -> u32 {
    (1 << width) - 1
}

/// Append the low `width` bits of `value` to `buf`, most-significant bit first.
pub fn write_binary(buf: &mut String, value: i32, width: u32) {
    assert!(
        (1..=MAX_FIELD_WIDTH).contains(&width),
        "field width {width} outside 1..={MAX_FIELD_WIDTH}"
    );
    // reinterpreting as u32 keeps the two's-complement pattern
    let bits = value as u32 & mask(width);
    for i in (0..width).rev() {
        buf.push(if (bits >> i) & 1 == 1 { '1' } else { '0' });
    }
}

/// Binary text of exactly `width` characters for `value`.
pub fn to_binary(value: i32, width: u32) -> String {
    let mut buf = String::with_capacity(width as usize);
    write_binary(&mut buf, value, width);
    buf
}

/// Parse a string made only of `0` and `1`, at most 32 characters long.
pub fn from_binary(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 32 {
        return None;
    }
    text.bytes().try_fold(0u32, |acc, b| match b {
        b'0' => Some(acc << 1),
        b'1' => Some(acc << 1 | 1),
        _ => None,
    })
}

/// Interpret the low `width` bits of `value` as a two's-complement number.
pub fn sign_extend(value: u32, width: u32) -> i32 {
    debug_assert!((1..=32).contains(&width));
    let shift = 32 - width;
    ((value << shift) as i32) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_padding() {
        assert_eq!(to_binary(2, 5), "00010");
        assert_eq!(to_binary(10, 12), "000000001010");
        assert_eq!(to_binary(0, 7), "0000000");
    }

    #[test]
    fn test_negative_wraps() {
        assert_eq!(to_binary(-1, 12), "111111111111");
        assert_eq!(to_binary(-12, 12), "111111110100");
        assert_eq!(to_binary(-2048, 12), "100000000000");
    }

    #[test]
    fn test_wide_values_truncate() {
        assert_eq!(to_binary(40, 5), "01000");
        assert_eq!(to_binary(0x1_0003, 16), "0000000000000011");
    }

    #[test]
    fn test_write_appends() {
        let mut buf = String::from("01");
        write_binary(&mut buf, 3, 3);
        assert_eq!(buf, "01011");
    }

    #[test]
    #[should_panic]
    fn test_width_out_of_range() {
        to_binary(1, 17);
    }

    #[test]
    fn test_from_binary_rejects_garbage() {
        assert_eq!(from_binary("0102"), None);
        assert_eq!(from_binary(""), None);
        assert_eq!(from_binary(&"1".repeat(33)), None);
        assert_eq!(from_binary("1010"), Some(10));
    }

    proptest! {
        #[test]
        fn test_to_binary_prop(v in any::<i32>(), w in 1u32..=MAX_FIELD_WIDTH) {
            let text = to_binary(v, w);
            prop_assert_eq!(text.len(), w as usize);
            let bits = from_binary(&text).unwrap();
            prop_assert_eq!(i64::from(bits), i64::from(v).rem_euclid(1 << w));
            prop_assert_eq!(sign_extend(bits, w), (v << (32 - w)) >> (32 - w));
        }
    }
}
