use chrono::{DateTime, FixedOffset};
use sg_core::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatLength {
    Full,
    Long,
    Medium,
    Short,
}

impl FormatLength {
    /// Maps a style code (`S`, `M`, `L`, `F`); anything else is the medium default.
    pub fn from_code(code: Option<char>) -> Self {
        match code {
            Some('S') => Self::Short,
            Some('L') => Self::Long,
            Some('F') => Self::Full,
            _ => Self::Medium,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Full => 0,
            Self::Long => 1,
            Self::Medium => 2,
            Self::Short => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalStyle {
    Date(FormatLength),
    Time(FormatLength),
    DateTime(FormatLength, FormatLength),
}

impl TemporalStyle {
    /// Parses a two-character `[date][time]` style where `-` suppresses a half.
    pub fn parse(style: Option<&str>) -> Self {
        let Some(style) = style.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::Date(FormatLength::Short);
        };

        let mut codes = style.chars();
        let date_code = codes.next();
        let time_code = codes.next();
        if style.starts_with('-') {
            Self::Time(FormatLength::from_code(time_code))
        } else if style.ends_with('-') {
            Self::Date(FormatLength::from_code(date_code))
        } else {
            Self::DateTime(
                FormatLength::from_code(date_code),
                FormatLength::from_code(time_code),
            )
        }
    }

    pub fn format(self, instant: &DateTime<FixedOffset>, locale: &Locale) -> String {
        let patterns = LocalePatterns::for_locale(locale);
        match self {
            Self::Date(length) => instant.format(patterns.date[length.index()]).to_string(),
            Self::Time(length) => instant.format(patterns.time[length.index()]).to_string(),
            Self::DateTime(date, time) => format!(
                "{} {}",
                instant.format(patterns.date[date.index()]),
                instant.format(patterns.time[time.index()])
            ),
        }
    }
}

struct LocalePatterns {
    date: [&'static str; 4],
    time: [&'static str; 4],
}

// Zones print as a numeric offset; a fixed-offset instant carries no zone name.
const EN_US: LocalePatterns = LocalePatterns {
    date: ["%A, %B %-d, %Y", "%B %-d, %Y", "%b %-d, %Y", "%-m/%-d/%y"],
    time: [
        "%-I:%M:%S %p %:z",
        "%-I:%M:%S %p %:z",
        "%-I:%M:%S %p",
        "%-I:%M %p",
    ],
};

const EN_GB: LocalePatterns = LocalePatterns {
    date: ["%A, %-d %B %Y", "%d %B %Y", "%d-%b-%Y", "%d/%m/%y"],
    time: ["%H:%M:%S o'clock %:z", "%H:%M:%S %:z", "%H:%M:%S", "%H:%M"],
};

impl LocalePatterns {
    // Month and weekday names are English only; other locales use the US table.
    fn for_locale(locale: &Locale) -> &'static Self {
        match (locale.language.as_str(), locale.country.as_deref()) {
            ("en", Some("GB" | "IE" | "AU" | "NZ")) => &EN_GB,
            _ => &EN_US,
        }
    }
}
