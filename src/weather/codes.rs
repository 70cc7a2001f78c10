//! WMO weather interpretation codes as reported by Open-Meteo.

/// Description for codes outside the table.
pub const UNKNOWN: &str = "Weather Unknown";

/// Human-readable description of a weather code.
pub fn describe(code: i64) -> &'static str {
    match code {
        0 => "Clear Sky ☀️",
        1 => "Mainly Clear 🌤️",
        2 => "Partly Cloudy ⛅",
        3 => "Overcast ☁️",
        45 => "Fog 🌫️",
        48 => "Rime Fog 🌫️",
        51 => "Light Drizzle 🌦️",
        53 => "Drizzle 🌧️",
        55 => "Heavy Drizzle 🌧️",
        61 => "Light Rain 🌧️",
        63 => "Rain 🌧️",
        65 => "Heavy Rain ⛈️",
        71 => "Snowfall 🌨️",
        80 => "Rain Showers 🌧️",
        95 => "Thunderstorm ⛈️",
        _ => UNKNOWN,
    }
}
