//! Formatting helpers shared by the views, the summary image, and the sink.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Compact human timestamp for status lines, e.g. `2026-08-07 · 09:15`.
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    moment
        .format(&format_description!("[year]-[month]-[day] · [hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Filesystem-safe slug used in export file names.
pub fn timestamp_slug(moment: OffsetDateTime) -> String {
    moment
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

/// The volatile submission-time line painted onto the summary image.
pub fn stamp_line(moment: OffsetDateTime) -> String {
    let formatted = moment
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute] UTC"
        ))
        .unwrap_or_else(|_| "unknown time".into());
    format!("Plated at {formatted}")
}

/// RFC 3339 timestamp for logbook rows.
pub fn rfc3339(moment: OffsetDateTime) -> String {
    moment
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamps_render_fixed_width_fields() {
        let moment = datetime!(2026-08-07 09:05:03 UTC);
        assert_eq!(format_timestamp(moment), "2026-08-07 · 09:05");
        assert_eq!(timestamp_slug(moment), "20260807_090503");
        assert_eq!(stamp_line(moment), "Plated at 2026-08-07 09:05 UTC");
        assert_eq!(rfc3339(moment), "2026-08-07T09:05:03Z");
    }
}
