use chrono::NaiveDateTime;

/// Launch instant, local wall-clock time.
pub const LAUNCH_DATE: &str = "2026-02-02T00:00:00";

/// Path the published edition is served from.
pub const EDITION_PATH: &str = "/pdf/kalchakra-edition-1.pdf";

/// Suggested filename for the download action.
pub const EDITION_DOWNLOAD_NAME: &str = "Kalchakra_E-Newspaper.pdf";

/// External waitlist sign-up form.
pub const WAITLIST_URL: &str = "https://forms.gle/YtSfvV8UV8HaJDma9";

/// Parse the configured launch date. Called once at startup so a bad
/// constant fails fast instead of surfacing as a frozen countdown.
pub fn launch_instant() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(LAUNCH_DATE, "%Y-%m-%dT%H:%M:%S")
        .expect("invalid LAUNCH_DATE in config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_launch_date_parses() {
        let instant = launch_instant();
        assert_eq!(instant.year(), 2026);
        assert_eq!(instant.month(), 2);
        assert_eq!(instant.day(), 2);
        assert_eq!(instant.hour(), 0);
    }
}
