//! Tests for `AxisMask` membership, ordering, and iteration

#[cfg(test)]
mod tests {
    use rookstack::algorithm::bitset::{AxisMask, MASK_WIDTH};

    fn mask(values: &[usize]) -> AxisMask {
        values
            .iter()
            .fold(AxisMask::EMPTY, |acc, &value| acc | AxisMask::single(value))
    }

    // Verifies the empty mask holds nothing
    // Verified by starting EMPTY with a set bit
    #[test]
    fn test_empty_mask() {
        let empty = AxisMask::EMPTY;
        assert!(empty.is_empty());
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.iter().count(), 0);
    }

    // Tests single-value masks and membership
    // Verified by shifting by value + 1 in single
    #[test]
    fn test_single_and_contains() {
        let five = AxisMask::single(5);
        assert!(five.contains(5));
        assert!(!five.contains(4));
        assert!(!five.contains(MASK_WIDTH + 3));
        assert_eq!(five.count(), 1);
    }

    // Tests the prefix mask used to cap admissible heights
    // Verified by using an inclusive limit in below
    #[test]
    fn test_below() {
        assert_eq!(AxisMask::below(0), AxisMask::EMPTY);
        assert_eq!(AxisMask::below(3).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(AxisMask::below(MASK_WIDTH), AxisMask::FULL);
    }

    // Tests union and difference
    // Verified by swapping the operands of without
    #[test]
    fn test_set_operations() {
        let a = mask(&[0, 1, 3]);
        let b = mask(&[1, 2]);

        assert_eq!(a | b, mask(&[0, 1, 2, 3]));
        assert_eq!(a.union(b), a | b);
        assert_eq!(a.without(b), mask(&[0, 3]));
        assert_eq!(b.without(a), mask(&[2]));

        let mut c = a;
        c |= AxisMask::single(7);
        assert!(c.contains(7));
    }

    // Tests that toggling a present value removes it
    // Verified by replacing the xor with an or
    #[test]
    fn test_toggle_reverses_insert() {
        let before = mask(&[2]);
        let mut toggled = before | AxisMask::single(0);
        toggled.toggle(AxisMask::single(0));
        assert_eq!(toggled, before);
    }

    // Tests iteration yields values in increasing order
    // Verified by iterating from the most significant bit
    #[test]
    fn test_iter_increasing() {
        let values = mask(&[7, 0, 5, 2]);
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![0, 2, 5, 7]);
        assert_eq!(values.count(), 4);
    }

    // Tests masks order as integers so high values dominate
    // Verified by deriving the ordering from the value count
    #[test]
    fn test_integer_ordering() {
        let high = AxisMask::single(3);
        let many_low = mask(&[0, 1, 2]);
        assert!(high > many_low);
        assert!(AxisMask::FULL > high);
    }
}
