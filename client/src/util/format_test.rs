use super::*;

#[test]
fn format_date_reads_seconds_and_millis() {
    assert_eq!(format_date(Some(Timestamp::Seconds(1_704_412_800))), "January 5, 2024");
    assert_eq!(format_date(Some(Timestamp::Millis(1_704_412_800_000))), "January 5, 2024");
}

#[test]
fn format_date_unknown_for_missing_or_zero() {
    assert_eq!(format_date(None), "Unknown");
    assert_eq!(format_date(Some(Timestamp::Seconds(0))), "Unknown");
    assert_eq!(format_date(Some(Timestamp::Millis(0))), "Unknown");
}

#[test]
fn format_date_unknown_when_out_of_range() {
    assert_eq!(format_date(Some(Timestamp::Seconds(i64::MAX))), "Unknown");
}

#[test]
fn file_size_units() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
}

#[test]
fn file_size_rounds_to_two_decimals() {
    assert_eq!(format_file_size(1234), "1.21 KB");
}

#[test]
fn file_size_caps_at_gigabytes() {
    assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2048 GB");
}

#[test]
fn truncate_text_appends_ellipsis_only_when_cut() {
    assert_eq!(truncate_text("hello", 10), "hello");
    assert_eq!(truncate_text("hello", 5), "hello");
    assert_eq!(truncate_text("hello world", 5), "hello...");
    assert_eq!(truncate_text("", 3), "");
}

#[test]
fn truncate_text_counts_characters() {
    assert_eq!(truncate_text("ñandú ok", 5), "ñandú...");
}

#[test]
fn works_label_pluralizes() {
    assert_eq!(works_label(0), "0 works");
    assert_eq!(works_label(1), "1 work");
    assert_eq!(works_label(12), "12 works");
}
