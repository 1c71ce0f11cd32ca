use core::time::Duration;

use crate::proto::Duration as RawDuration;

/// Converts a `core::time::Duration` into its protobuf form. Returns `None`
/// if the seconds do not fit an `i64`.
pub fn duration_to_proto(d: Duration) -> Option<RawDuration> {
    let seconds = i64::try_from(d.as_secs()).ok()?;
    let nanos = i32::try_from(d.subsec_nanos()).ok()?;
    Some(RawDuration { seconds, nanos })
}

/// Converts a protobuf duration into a `core::time::Duration`; negative
/// components are rejected.
pub fn duration_from_proto(d: RawDuration) -> Option<Duration> {
    if d.seconds.is_negative() || d.nanos.is_negative() {
        return None;
    }
    let seconds = u64::try_from(d.seconds).ok()?;
    let nanos = u32::try_from(d.nanos).ok()?;
    Some(Duration::new(seconds, nanos))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Duration::new(5, 500_000_000))]
    #[case(Duration::new(0, 0))]
    #[case(Duration::from_secs(14 * 24 * 60 * 60))]
    fn duration_survives_proto_conversion(#[case] duration: Duration) {
        let raw = duration_to_proto(duration).expect("fits in proto duration");
        assert_eq!(duration_from_proto(raw), Some(duration));
    }

    #[test]
    fn negative_proto_duration_is_rejected() {
        let raw = RawDuration {
            seconds: -1,
            nanos: -500_000_000,
        };
        assert!(duration_from_proto(raw).is_none());
    }
}
