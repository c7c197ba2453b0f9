//! Weather code lookups
//!
//! Codes follow the WMO interpretation used by Open-Meteo.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Label returned for codes missing from [`WEATHER_CODES`]
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Suggestion for codes without a dedicated activity, and for missing codes
pub const DEFAULT_ACTIVITY: &str = "Check conditions carefully before going out.";

/// Human-readable labels for the known weather codes
pub const WEATHER_CODES: [(i32, &str); 21] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (80, "Rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Look up the label for a weather code
pub fn weather_condition(code: i32) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_CONDITION)
}

/// Suggest an activity for the given weather code
pub fn suggest_activity(code: i32) -> &'static str {
    match code {
        0 | 1 => "Great time for an outdoor walk or cycling!",
        2 | 3 => "Perfect for a coffee outside or light exercise.",
        61 | 63 | 65 | 80 | 81 | 82 => "Stay in and enjoy reading, movies, or indoor hobbies.",
        71 | 73 | 75 => "Good day for indoor warmth – maybe hot chocolate!",
        _ => DEFAULT_ACTIVITY,
    }
}
