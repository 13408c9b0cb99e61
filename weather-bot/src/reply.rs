use weather_core::WeatherReport;

/// Display emoji for a provider condition label. Labels outside the fixed
/// set (Snow, Thunderstorm, Mist, ...) intentionally get no emoji.
pub fn condition_emoji(label: &str) -> &'static str {
    match label {
        "Clouds" => "\u{2601}\u{fe0f}",
        "Clear" => "\u{2600}\u{fe0f}",
        "Rain" => "\u{1f327}\u{fe0f}",
        _ => "",
    }
}

/// Render the chat reply for a successful query. Temperatures are shown with
/// one decimal digit; the trailing spaces and newline are part of the format.
pub fn format_report(report: &WeatherReport) -> String {
    format!(
        "{} ({}) {} \nПогода: {:.1}°C \nПо ощущениям: {:.1}°C \n",
        report.city,
        report.country,
        condition_emoji(&report.condition),
        report.temperature_c,
        report.feels_like_c,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(condition: &str) -> WeatherReport {
        WeatherReport {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature_c: 15.3,
            feels_like_c: 14.8,
            condition: condition.to_string(),
            observation_time: Utc::now(),
        }
    }

    #[test]
    fn known_labels_map_to_fixed_emoji() {
        assert_eq!(condition_emoji("Clouds"), "☁️");
        assert_eq!(condition_emoji("Clear"), "☀️");
        assert_eq!(condition_emoji("Rain"), "🌧️");
    }

    #[test]
    fn unknown_labels_yield_no_emoji() {
        for label in ["Snow", "Thunderstorm", "Mist", "Fog", ""] {
            assert_eq!(condition_emoji(label), "");
        }
    }

    #[test]
    fn formats_full_reply() {
        let text = format_report(&report("Clear"));
        assert_eq!(text, "London (GB) ☀️ \nПогода: 15.3°C \nПо ощущениям: 14.8°C \n");
    }

    #[test]
    fn temperatures_round_to_one_decimal() {
        let mut r = report("Clear");
        r.temperature_c = 15.0;
        r.feels_like_c = -0.25;

        let text = format_report(&r);
        assert!(text.contains("Погода: 15.0°C"));
        assert!(text.contains("По ощущениям: -0.2°C") || text.contains("По ощущениям: -0.3°C"));
    }

    #[test]
    fn unknown_condition_leaves_emoji_slot_empty() {
        let text = format_report(&report("Snow"));
        assert_eq!(text, "London (GB)  \nПогода: 15.3°C \nПо ощущениям: 14.8°C \n");
    }
}
