//! Legal logical-immediate bit patterns, one table per element width.
//!
//! The bitmask-immediate encoding (N:immr:imms) only reaches a sparse subset
//! of values, so generators pick from these tables instead of drawing
//! arbitrary integers.

use crate::operand::ElementWidth;

pub const IMMEDIATES8: &[u64] = &[
    0x1, 0x0c, 0x3e, 0x60, 0x7c, 0x80, 0x83, 0xe1, 0xbf, 0xef, 0xf3, 0xfe,
];

pub const IMMEDIATES16: &[u64] = &[
    0x1, 0x38, 0x7e, 0xff, 0x1fc, 0x1ff, 0x3f0, 0x7e0, 0xfc0, 0x1f80, 0x3ff0, 0x7e00, 0x8000,
    0x81ff, 0xc1ff, 0xc003, 0xc7ff, 0xdfff, 0xe03f, 0xe1e1, 0xe1ff, 0xf801, 0xfc00, 0xfc07,
    0xff03, 0xfffe,
];

pub const IMMEDIATES32: &[u64] = &[
    0x1, 0x3f, 0x1f0, 0x7e0, 0x1c00, 0x3ff0, 0x8000, 0x1e000, 0x3e000, 0x78000, 0xe0000,
    0x100000, 0x1fffe0, 0x3fe000, 0x780000, 0x7ffff8, 0xff8000, 0x1800180, 0x1fffc00,
    0x3c003c0, 0x3ffff00, 0x7c00000, 0x7fffe00, 0xf000f00, 0xfffe000, 0x18181818, 0x1ffc0000,
    0x1ffffffe, 0x3f003f00, 0x3fffe000, 0x60006000, 0x7f807f80, 0x7ffffc00, 0x800001ff,
    0x803fffff, 0x9f9f9f9f, 0xc0000fff, 0xc0c0c0c0, 0xe0000000, 0xe003e003, 0xe3ffffff,
    0xf0000fff, 0xf0f0f0f0, 0xf80000ff, 0xf83ff83f, 0xfc00007f, 0xfc1fffff, 0xfe0001ff,
    0xfe3fffff, 0xff003fff, 0xff800003, 0xff87ff87, 0xffc00fff, 0xffe0000f, 0xffefffef,
    0xfff1fff1, 0xfff83fff, 0xfffc0fff, 0xfffe0fff, 0xffff3fff, 0xffffc007, 0xffffe1ff,
    0xfffff80f, 0xfffffe07, 0xffffffbf, 0xfffffffd,
];

pub const IMMEDIATES64: &[u64] = &[
    0x1, 0x1f80, 0x3fff0, 0x3ffffc, 0x3fe0000, 0x1ffc0000, 0xf8000000, 0x3ffffc000,
    0xffffffe00, 0x3ffffff800, 0xffffc00000, 0x3f000000000, 0x7fffffff800, 0x1fe000001fe0,
    0x3ffffff80000, 0xc00000000000, 0x1ffc000000000, 0x3ffff0003ffff, 0x7ffffffe00000,
    0xfffffffffc000, 0x1ffffffffffc00, 0x3fffffffffff00, 0x7ffffffffffc00, 0xffffffffff8000,
    0x1ffffffff800000, 0x3fffffc03fffffc, 0x7fffc0000000000, 0xff80ff80ff80ff8,
    0x1c00000000000000, 0x1fffffffffff0000, 0x3fffff803fffff80, 0x7fc000007fc00000,
    0x8000000000000000, 0x803fffff803fffff, 0xc000007fc000007f, 0xe00000000000ffff,
    0xe3ffffffffffffff, 0xf007f007f007f007, 0xf80003ffffffffff, 0xfc000003fc000003,
    0xfe000000007fffff, 0xff00000000007fff, 0xff800000000003ff, 0xffc00000000000ff,
    0xffe00000000003ff, 0xfff0000000003fff, 0xfff80000001fffff, 0xfffc0000fffc0000,
    0xfffe003fffffffff, 0xffff3fffffffffff, 0xffffc0000007ffff, 0xffffe01fffffe01f,
    0xfffff800000007ff, 0xfffffc0fffffffff, 0xffffff00003fffff, 0xffffffc0000007ff,
    0xfffffff0000001ff, 0xfffffffc00003fff, 0xffffffff07ffffff, 0xffffffffe003ffff,
    0xfffffffffc01ffff, 0xffffffffffc00003, 0xfffffffffffc000f, 0xffffffffffffe07f,
];

/// Table of encodable patterns for an element width. Q has no logical form.
pub fn table_for(width: ElementWidth) -> Option<&'static [u64]> {
    match width {
        ElementWidth::B => Some(IMMEDIATES8),
        ElementWidth::H => Some(IMMEDIATES16),
        ElementWidth::S => Some(IMMEDIATES32),
        ElementWidth::D => Some(IMMEDIATES64),
        ElementWidth::Q => None,
    }
}

/// 位掩码立即数规则：`width` 位的值由 2..=width 位的元素重复而成，元素内是一段
/// （可循环移位的）连续 1。全 0 和全 1 不可编码。
pub fn is_bitmask_immediate(value: u64, width: u32) -> bool {
    let mask = if width == 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    if value == 0 || value & mask != value || value == mask {
        return false;
    }

    let mut size = width;
    while size > 2 {
        let half = size / 2;
        let half_mask = (1u64 << half) - 1;
        if value & half_mask != (value >> half) & half_mask {
            break;
        }
        size = half;
    }

    let elem_mask = if size == 64 {
        u64::MAX
    } else {
        (1u64 << size) - 1
    };
    let elem = value & elem_mask;
    (0..size).any(|r| {
        let rotated = if size == 64 {
            elem.rotate_right(r)
        } else if r == 0 {
            elem
        } else {
            ((elem >> r) | (elem << (size - r))) & elem_mask
        };
        rotated & (rotated + 1) == 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_is_encodable() {
        for (table, width) in [
            (IMMEDIATES8, 8),
            (IMMEDIATES16, 16),
            (IMMEDIATES32, 32),
            (IMMEDIATES64, 64),
        ] {
            for &value in table {
                assert!(
                    is_bitmask_immediate(value, width),
                    "0x{value:x} is not a {width}-bit logical immediate"
                );
            }
        }
    }

    #[test]
    fn small_values_are_not_automatically_legal() {
        assert!(!is_bitmask_immediate(0x0, 32));
        assert!(!is_bitmask_immediate(0xffff_ffff, 32));
        assert!(is_bitmask_immediate(0x2, 32));
        assert!(!IMMEDIATES32.contains(&0x2));
        assert!(!is_bitmask_immediate(0x5, 8));
    }

    #[test]
    fn sixteen_bit_table_holds_only_single_runs() {
        assert!(!is_bitmask_immediate(0xe10f, 16));
        assert!(!IMMEDIATES16.contains(&0xe10f));
        assert!(is_bitmask_immediate(0xe1e1, 16));
        assert!(!is_bitmask_immediate(0xe1e1, 8));
    }

    #[test]
    fn quad_width_has_no_table() {
        assert!(table_for(ElementWidth::Q).is_none());
        assert_eq!(table_for(ElementWidth::S), Some(IMMEDIATES32));
    }
}
