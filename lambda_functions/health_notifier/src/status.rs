/// Display classification for a health event status.
///
/// Drives the icon and banner color only; whether a notification is sent
/// never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Warning,
    Scheduled,
    Generic,
}

impl StatusClass {
    /// Case-insensitive lookup. Unrecognized statuses (including the
    /// `"Unknown"` placeholder) fall through to `Generic`.
    pub fn classify(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "closed" => Self::Success,
            "open" => Self::Warning,
            "upcoming" => Self::Scheduled,
            _ => Self::Generic,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Scheduled => "🗓️",
            Self::Generic => "🔔",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#2e7d32",
            Self::Warning => "#ed6c02",
            Self::Scheduled => "#0288d1",
            Self::Generic => "#616161",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(StatusClass::classify("closed"), StatusClass::Success);
        assert_eq!(StatusClass::classify("Closed"), StatusClass::Success);
        assert_eq!(StatusClass::classify("CLOSED"), StatusClass::Success);
        assert_eq!(StatusClass::classify("open"), StatusClass::Warning);
        assert_eq!(StatusClass::classify("OPEN"), StatusClass::Warning);
        assert_eq!(StatusClass::classify("Upcoming"), StatusClass::Scheduled);
    }

    #[test]
    fn unrecognized_statuses_are_generic() {
        assert_eq!(StatusClass::classify("Unknown"), StatusClass::Generic);
        assert_eq!(StatusClass::classify(""), StatusClass::Generic);
        assert_eq!(StatusClass::classify("resolved"), StatusClass::Generic);
    }
}
