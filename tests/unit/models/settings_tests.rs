// Unit tests for layout settings validation and time formats
// Table-driven checks of the values accepted in settings files

use calendar_layout::models::settings::{LayoutSettings, TimeFormat};
use calendar_layout::LayoutError;
use test_case::test_case;

#[test_case(1 ; "single slice")]
#[test_case(24 ; "hourly")]
#[test_case(96 ; "quarter hours")]
fn test_positive_split_counts_are_valid(count: u32) {
    let settings = LayoutSettings {
        fixed_split_count: count,
        ..Default::default()
    };
    assert!(settings.validate().is_ok());
}

#[test_case(24 ; "hour past midnight")]
#[test_case(99 ; "nonsense hour")]
fn test_day_start_hour_out_of_range(hour: u32) {
    let settings = LayoutSettings {
        day_start_hour: hour,
        ..Default::default()
    };
    assert_eq!(settings.validate(), Err(LayoutError::InvalidDayStartHour(hour)));
}

#[test_case(TimeFormat::TwelveHour, "\"12h\"" ; "twelve hour")]
#[test_case(TimeFormat::TwentyFourHour, "\"24h\"" ; "twenty four hour")]
fn test_time_format_names(format: TimeFormat, expected: &str) {
    assert_eq!(serde_json::to_string(&format).unwrap(), expected);
}

#[test]
fn test_default_time_format_is_24h() {
    assert_eq!(TimeFormat::default(), TimeFormat::TwentyFourHour);
    assert_eq!(TimeFormat::default().pattern(), "%H:%M");
}

#[test]
fn test_unknown_time_zone_is_rejected() {
    let result: Result<LayoutSettings, _> = toml::from_str("time_zone = \"Mars/Olympus_Mons\"");
    assert!(result.is_err());
}

#[test]
fn test_settings_file_round_trip() {
    let settings = LayoutSettings {
        fixed_split_count: 48,
        day_start_hour: 7,
        week_start: 1,
        time_format: TimeFormat::TwelveHour,
        time_zone: chrono_tz::Pacific::Auckland,
    };

    let text = toml::to_string_pretty(&settings).unwrap();
    assert!(text.contains("time_zone = \"Pacific/Auckland\""));
    assert_eq!(toml::from_str::<LayoutSettings>(&text).unwrap(), settings);
}
