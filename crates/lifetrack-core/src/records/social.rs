use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the screen time went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    TikTok,
    X,
    Facebook,
    YouTube,
    Gaming,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::X,
        Platform::Facebook,
        Platform::YouTube,
        Platform::Gaming,
        Platform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::X => "X",
            Platform::Facebook => "Facebook",
            Platform::YouTube => "YouTube",
            Platform::Gaming => "Gaming",
            Platform::Other => "Other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Platform::ALL.iter().map(Platform::as_str).collect();
                format!("unknown platform '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Minutes spent on one platform on one day.
///
/// Blobs written before usage records carried ids get one assigned on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialUsage {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub platform: Platform,
    pub minutes: u32,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("tiktok".parse::<Platform>().unwrap(), Platform::TikTok);
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::YouTube);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn legacy_usage_without_id_gets_one() {
        let json = r#"{"platform":"Instagram","minutes":30,"date":"2024-02-10"}"#;
        let usage: SocialUsage = serde_json::from_str(json).unwrap();
        assert!(!usage.id.is_empty());
        assert_eq!(usage.platform, Platform::Instagram);
    }
}
