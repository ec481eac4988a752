//! Delimited-text parsing into [`VideoRecord`]s.
//!
//! The input is comma-separated with one quoting quirk: a double quote
//! toggles quoting state, commas inside quotes do not split, and the quote
//! characters themselves never reach the output. Doubled quotes are not an
//! escape; `a""b` yields `ab`. Parsing is best-effort per row, so one
//! malformed line never poisons the rest of the dataset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::constants::{csv, timestamps};
use crate::data::VideoRecord;

/// Split one line into fields.
///
/// `"` toggles quoting and is dropped from the output, `,` splits only
/// outside quotes, and stray `\r`/`\n` characters are stripped. The final
/// field is always emitted, so every line yields at least one field. An
/// unbalanced quote leaves the rest of the line quoted.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            '\r' | '\n' => {}
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parse dataset text into records.
///
/// The first line is a header and is always skipped, whatever it contains.
/// Whitespace-only lines are ignored. Rows that split into fewer than
/// [`csv::MIN_FIELDS`] fields are skipped; everything else degrades field
/// by field (counts default to 0, timestamps to the Unix epoch), so this
/// function itself never fails.
pub fn parse_records(text: &str) -> Vec<VideoRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in text.split('\n').enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_line(line);
        if fields.len() < csv::MIN_FIELDS {
            skipped += 1;
            debug!(line = idx + 1, fields = fields.len(), "{}", csv::SKIP_SHORT_ROW_MSG);
            continue;
        }
        records.push(record_from_fields(&fields));
    }
    debug!(kept = records.len(), skipped, "parsed video records");
    records
}

// Caller guarantees `fields.len() >= csv::MIN_FIELDS`.
fn record_from_fields(fields: &[String]) -> VideoRecord {
    VideoRecord {
        id: fields[csv::COL_VIDEO_ID].clone(),
        title: fields[csv::COL_TITLE].clone(),
        channel_name: fields[csv::COL_CHANNEL_NAME].clone(),
        channel_id: fields[csv::COL_CHANNEL_ID].clone(),
        view_count: parse_count(&fields[csv::COL_VIEW_COUNT]),
        like_count: parse_count(&fields[csv::COL_LIKE_COUNT]),
        comment_count: parse_count(&fields[csv::COL_COMMENT_COUNT]),
        published_at: parse_timestamp(&fields[csv::COL_PUBLISHED_AT])
            .unwrap_or(DateTime::UNIX_EPOCH),
    }
}

fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in timestamps::FALLBACK_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }
    NaiveDate::parse_from_str(trimmed, timestamps::FALLBACK_DATE_FORMAT)
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    #[test]
    fn splitter_keeps_quoted_commas_together() {
        let fields = split_line("a1,\"Hello, world\",Chan,UC1,5,1,0,2021-01-01,x");
        assert_eq!(fields[1], "Hello, world");
        assert_eq!(fields.len(), 9);
    }

    #[test]
    fn splitter_drops_quote_characters() {
        assert_eq!(split_line("\"abc\",def"), vec!["abc", "def"]);
    }

    #[test]
    fn splitter_treats_doubled_quotes_as_two_toggles() {
        // No escape sequence: the quotes vanish and the text joins up.
        assert_eq!(split_line("a\"\"b"), vec!["ab"]);
        assert_eq!(split_line("\"say \"\"hi\"\"\""), vec!["say hi"]);
    }

    #[test]
    fn splitter_preserves_empty_fields() {
        assert_eq!(split_line("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn splitter_strips_carriage_returns() {
        assert_eq!(split_line("a,b\r"), vec!["a", "b"]);
    }

    #[test]
    fn splitter_with_unbalanced_quote_spans_rest_of_line() {
        assert_eq!(split_line("a,\"b,c,d"), vec!["a", "b,c,d"]);
    }

    #[test]
    fn splitter_yields_single_field_for_empty_line() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn header_is_always_skipped() {
        // A data-shaped first line is still treated as the header.
        let text = "v0,t,Ch,UC1,1,1,1,2021-01-01,x\nv1,t,Ch,UC1,2,1,1,2021-01-02,x";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "v1");
    }

    #[test]
    fn short_rows_are_skipped() {
        let text = "header\nv1,t,Ch,UC1,2,1,1,2021-01-02,x\nonly,four,fields,here";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "v1");
    }

    #[test]
    fn whitespace_only_lines_are_ignored() {
        let text = "header\n\n   \nv1,t,Ch,UC1,2,1,1,2021-01-02,x\n";
        assert_eq!(parse_records(text).len(), 1);
    }

    #[test]
    fn unparsable_counts_default_to_zero() {
        let text = "header\nv1,t,Ch,UC1,N/A,-3,1.5,2021-01-02,x";
        let records = parse_records(text);
        assert_eq!(records[0].view_count, 0);
        assert_eq!(records[0].like_count, 0);
        assert_eq!(records[0].comment_count, 0);
    }

    #[test]
    fn counts_tolerate_surrounding_whitespace() {
        let text = "header\nv1,t,Ch,UC1, 42 ,7,0,2021-01-02,x";
        let records = parse_records(text);
        assert_eq!(records[0].view_count, 42);
        assert_eq!(records[0].like_count, 7);
    }

    #[test]
    fn unparsable_timestamp_defaults_to_unix_epoch() {
        let text = "header\nv1,t,Ch,UC1,2,1,1,not a date,x";
        let records = parse_records(text);
        assert_eq!(records[0].published_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn rfc3339_timestamps_convert_to_utc() {
        let text = "header\nv1,t,Ch,UC1,2,1,1,2021-03-05T14:00:00+02:00,x";
        let records = parse_records(text);
        let expected = Utc.with_ymd_and_hms(2021, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(records[0].published_at, expected);
    }

    #[test]
    fn fallback_timestamp_formats_are_accepted() {
        let text = "header\n\
                    v1,t,Ch,UC1,2,1,1,2021-03-05T14:00:00,x\n\
                    v2,t,Ch,UC1,2,1,1,2021-03-05 14:00:00,x\n\
                    v3,t,Ch,UC1,2,1,1,2021-03-05,x";
        let records = parse_records(text);
        let full = Utc.with_ymd_and_hms(2021, 3, 5, 14, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(records[0].published_at, full);
        assert_eq!(records[1].published_at, full);
        assert_eq!(records[2].published_at, midnight);
    }

    #[test]
    fn crlf_line_endings_parse_cleanly() {
        let text = "header\r\nv1,\"A, B\",Ch,UC1,10,2,1,2021-01-02,x\r\n";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "A, B");
        assert_eq!(records[0].view_count, 10);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = "header\nv1,t,Ch,UC1,2,1,1,2021-01-02,x,extra,more";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "v1");
    }
}
