use substreams::scalar::BigInt;

/// Keeps `count` equal to the number of records whose tracked value is non-zero.
///
/// Only zero <-> non-zero transitions move the counter, so replaying updates that keep a
/// record on the same side of zero never drifts it.
pub fn track_non_zero(count: &mut i64, before: &BigInt, after: &BigInt) {
    track_flag(count, !before.is_zero(), !after.is_zero());
}

/// Same as [`track_non_zero`] for a boolean membership flag.
pub fn track_flag(count: &mut i64, was_member: bool, is_member: bool) {
    match (was_member, is_member) {
        (false, true) => *count += 1,
        (true, false) => *count -= 1,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut count = 0;
        let zero = BigInt::zero();
        let one = BigInt::from(1u64);
        let two = BigInt::from(2u64);

        track_non_zero(&mut count, &zero, &one);
        assert_eq!(count, 1);
        track_non_zero(&mut count, &one, &two);
        assert_eq!(count, 1);
        track_non_zero(&mut count, &two, &zero);
        assert_eq!(count, 0);
        track_non_zero(&mut count, &zero, &zero);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_flag_transitions() {
        let mut count = 3;
        track_flag(&mut count, true, true);
        track_flag(&mut count, true, false);
        assert_eq!(count, 2);
    }
}
