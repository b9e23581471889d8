use chrono::{NaiveDate, NaiveDateTime};

pub const EVENT_NAME: &str = "Aeternum MUN";
pub const EVENT_YEAR: &str = "2026";
pub const EVENT_DATES: &str = "April 04–05, 2026";
pub const VENUE: &str = "World Skill Centre";
pub const VENUE_CITY: &str = "Bhubaneswar, Odisha";
pub const CONTACT_EMAIL: &str = "aeternummun1@gmail.com";

pub const DEFAULT_REGISTRATION_URL: &str = "https://forms.google.com";
pub const DEFAULT_COUNTDOWN_TARGET: &str = "2026-04-04T00:00:00";
const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Countdown refresh cadence.
pub const TICK_MS: u32 = 1_000;
/// How long the loading screen holds before it starts fading out.
pub const LOADING_HOLD_MS: u32 = 3_000;
/// Exit fade of the loading screen; the page is told to show itself after it.
pub const LOADING_EXIT_MS: u32 = 800;
pub const CONTENT_FADE_MS: u32 = 500;
/// Scroll distance after which the navigation bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Sections trigger once they are this far inside the viewport.
pub const SECTION_MARGIN_PX: i32 = -100;

/// Where every "Register" button leads. Overridable at build time.
pub fn get_registration_url() -> &'static str {
    option_env!("REGISTRATION_FORM_URL").unwrap_or(DEFAULT_REGISTRATION_URL)
}

/// Local wall-clock time the countdown runs to.
pub fn countdown_target() -> NaiveDateTime {
    let raw = option_env!("COUNTDOWN_TARGET").unwrap_or(DEFAULT_COUNTDOWN_TARGET);
    match parse_target(raw) {
        Ok(target) => target,
        Err(e) => {
            log::warn!("Invalid COUNTDOWN_TARGET {:?} ({}), using default", raw, e);
            default_target()
        }
    }
}

pub fn parse_target(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), TARGET_FORMAT)
}

fn default_target() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 4, 4)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_matches_event_start() {
        assert_eq!(parse_target(DEFAULT_COUNTDOWN_TARGET), Ok(default_target()));
    }

    #[test]
    fn target_parsing_tolerates_whitespace() {
        let parsed = parse_target(" 2026-04-04T09:30:00\n").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "09:30");
    }

    #[test]
    fn garbage_target_is_rejected() {
        assert!(parse_target("April 4, 2026").is_err());
    }

    #[test]
    fn registration_url_is_absolute() {
        assert!(get_registration_url().starts_with("https://"));
    }
}
