use std::{convert::Infallible, fmt, str::FromStr};

/// Output format requested by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    #[default]
    Mp4,
    Mp4Hd,
    Mp3,
}

impl MediaFormat {
    /// Absent or empty value falls back to [`MediaFormat::Mp4`].
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.map(|raw| raw.parse().unwrap_or_default()).unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Mp4Hd => "mp4hd",
            Self::Mp3 => "mp3",
        }
    }
}

impl FromStr for MediaFormat {
    type Err = Infallible;

    /// Unknown values are served as plain mp4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "mp4hd" => Self::Mp4Hd,
            "mp3" => Self::Mp3,
            _ => Self::Mp4,
        })
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!("mp4".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4);
        assert_eq!("mp4hd".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4Hd);
        assert_eq!("mp3".parse::<MediaFormat>().unwrap(), MediaFormat::Mp3);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("MP3".parse::<MediaFormat>().unwrap(), MediaFormat::Mp3);
        assert_eq!("Mp4HD".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4Hd);
    }

    #[test]
    fn test_unknown_is_mp4() {
        assert_eq!("webm".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(MediaFormat::from_query(None), MediaFormat::Mp4);
        assert_eq!(MediaFormat::from_query(Some("")), MediaFormat::Mp4);
        assert_eq!(MediaFormat::from_query(Some("mp3")), MediaFormat::Mp3);
    }
}
