use chrono::SecondsFormat;
use portfolio_models::contact::ContactSubmission;

/// Renders a submission as a single log line:
/// `timestamp \t name \t email \t message \n`.
///
/// The timestamp is RFC 3339 in UTC. Tabs, line breaks and backslashes inside
/// fields are escaped, so every record occupies exactly one line with exactly
/// four fields.
pub fn format(submission: &ContactSubmission) -> String {
    let mut line = submission
        .timestamp
        .to_rfc3339_opts(SecondsFormat::Micros, true);

    for field in [
        submission.name.as_str(),
        submission.email.as_str(),
        submission.message.as_str(),
    ] {
        line.push('\t');
        escape_into(field, &mut line);
    }

    line.push('\n');
    line
}

fn escape_into(field: &str, out: &mut String) {
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use portfolio_models::contact::{ContactEmail, ContactMessageContent, ContactName};
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission(name: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
            name: ContactName::parse(name).unwrap(),
            email: ContactEmail::parse("ada@example.com").unwrap(),
            message: ContactMessageContent::parse(message).unwrap(),
        }
    }

    #[test]
    fn plain() {
        assert_eq!(
            format(&submission("Ada", "Hello")),
            "2024-05-01T10:30:00.000000Z\tAda\tada@example.com\tHello\n"
        );
    }

    #[test]
    fn escapes_separators() {
        let line = format(&submission("Ada\tL", "line 1\r\nline 2\\"));
        assert_eq!(
            line,
            "2024-05-01T10:30:00.000000Z\tAda\\tL\tada@example.com\tline 1\\r\\nline 2\\\\\n"
        );
        assert_eq!(line.matches('\t').count(), 3);
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn keeps_unicode() {
        assert_eq!(
            format(&submission("Zoë", "Grüße ✉")),
            "2024-05-01T10:30:00.000000Z\tZoë\tada@example.com\tGrüße ✉\n"
        );
    }
}
