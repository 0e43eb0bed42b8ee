use groomdesk_core::time::{TimeOfDay, TimeRange};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn t(s: &str) -> TimeOfDay {
    s.parse().expect("valid time of day")
}

#[test]
fn test_parse_and_display_round_trip() {
    let time = t("09:30");
    assert_eq!(time.minutes(), 9 * 60 + 30);
    assert_eq!(time.to_string(), "09:30");
}

#[rstest]
#[case("24:00")]
#[case("12:60")]
#[case("noon")]
#[case("12")]
#[case("12:3a")]
fn test_parse_rejects_invalid_input(#[case] raw: &str) {
    assert!(raw.parse::<TimeOfDay>().is_err());
}

#[test]
fn test_add_minutes() {
    assert_eq!(t("14:00").add_minutes(60), t("15:00"));
    assert_eq!(t("09:15").add_minutes(105), t("11:00"));
}

#[test]
fn test_span_builds_half_open_range() {
    let range = t("09:00").span(90);
    assert_eq!(range.start, t("09:00"));
    assert_eq!(range.end, t("10:30"));
}

#[test]
fn test_back_to_back_ranges_do_not_overlap() {
    let first = t("09:00").span(60);
    let second = t("10:00").span(60);

    assert!(!first.overlaps(&second));
    assert!(!second.overlaps(&first));
}

#[test]
fn test_partial_overlap_is_detected() {
    let first = t("09:00").span(60);
    let second = t("09:30").span(60);

    assert!(first.overlaps(&second));
    assert!(second.overlaps(&first));
}

#[test]
fn test_containment() {
    let window = TimeRange {
        start: t("09:00"),
        end: t("18:00"),
    };

    assert!(window.contains(&t("09:00").span(60)));
    assert!(window.contains(&t("17:00").span(60)));
    assert!(!window.contains(&t("17:30").span(60)));
    assert!(!window.contains(&t("08:30").span(60)));
}

#[test]
fn test_times_order_chronologically() {
    assert!(t("08:59") < t("09:00"));
    assert!(t("18:00") > t("09:00"));
}

#[test]
fn test_serde_uses_wire_format() {
    let json = serde_json::to_string(&t("14:05")).expect("serialize");
    assert_eq!(json, "\"14:05\"");

    let back: TimeOfDay = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, t("14:05"));

    assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
}
