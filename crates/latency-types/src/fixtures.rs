//! Fixture tags and payload shapes.
//!
//! Each payload mirrors the response of one simulated upstream service.
//! Field names are part of the wire contract and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fixture tags
// ---------------------------------------------------------------------------

/// A recognized fixture tag.
///
/// Unrecognized tags are not an error anywhere in the API; they are
/// represented as `None` from [`FixtureType::parse`] and map to an empty
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureType {
    /// Current conditions for a single city.
    Weather,
    /// A short list of headline articles.
    News,
    /// Edge/origin request counters and cache hit rate.
    Stats,
    /// A single user profile.
    Profile,
}

impl FixtureType {
    /// Every recognized tag, in catalog order.
    pub const ALL: [Self; 4] = [Self::Weather, Self::News, Self::Stats, Self::Profile];

    /// Match a raw tag exactly. Matching is case-sensitive.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "weather" => Some(Self::Weather),
            "news" => Some(Self::News),
            "stats" => Some(Self::Stats),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// The tag as it appears in request paths and response bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::News => "news",
            Self::Stats => "stats",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for FixtureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Payload for the `weather` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherData {
    /// City name.
    pub city: String,
    /// Temperature with unit suffix, e.g. `18°C`.
    pub temperature: String,
    /// Free-text sky condition.
    pub condition: String,
}

/// A single headline in the `news` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline text.
    pub title: String,
    /// Publishing outlet.
    pub source: String,
    /// Link target.
    pub url: String,
}

/// Payload for the `news` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsData {
    /// Headline articles.
    pub articles: Vec<Article>,
}

/// Request counters carried by the `stats` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Requests served at the edge.
    pub edge: u64,
    /// Requests that reached the origin.
    pub origin: u64,
    /// Cache hit rate as a percentage string, e.g. `77%`.
    #[serde(rename = "cacheHit")]
    pub cache_hit: String,
}

/// Payload for the `stats` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsData {
    /// The counters.
    pub stats: Stats,
}

/// Payload for the `profile` fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// Payload for unrecognized tags. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyData {}

/// Any fixture payload.
///
/// Serialized untagged so the wire body is the bare payload object. The
/// `Empty` variant must stay last: it matches any JSON object when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureData {
    /// `weather` payload.
    Weather(WeatherData),
    /// `news` payload.
    News(NewsData),
    /// `stats` payload.
    Stats(StatsData),
    /// `profile` payload.
    Profile(ProfileData),
    /// Payload for any unrecognized tag.
    Empty(EmptyData),
}

impl FixtureData {
    /// Returns `true` for the empty payload.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        for ty in FixtureType::ALL {
            assert_eq!(FixtureType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(FixtureType::parse("Weather"), None);
        assert_eq!(FixtureType::parse(" news"), None);
        assert_eq!(FixtureType::parse(""), None);
    }

    #[test]
    fn fixture_type_serializes_lowercase() {
        let json = serde_json::to_string(&FixtureType::Profile).unwrap_or_default();
        assert_eq!(json, "\"profile\"");
    }

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let json = serde_json::to_string(&FixtureData::Empty(EmptyData {})).unwrap_or_default();
        assert_eq!(json, "{}");
    }

    #[test]
    fn stats_uses_camel_case_cache_hit() {
        let data = FixtureData::Stats(StatsData {
            stats: Stats {
                edge: 1,
                origin: 2,
                cache_hit: String::from("50%"),
            },
        });
        let value = serde_json::to_value(&data).unwrap_or_default();
        assert_eq!(value["stats"]["cacheHit"], "50%");
        assert!(value["stats"].get("cache_hit").is_none());
    }

    #[test]
    fn untagged_decode_picks_the_matching_shape() {
        let weather: FixtureData = serde_json::from_str(
            r#"{"city":"Oslo","temperature":"3°C","condition":"Snow"}"#,
        )
        .unwrap_or(FixtureData::Empty(EmptyData {}));
        assert!(matches!(weather, FixtureData::Weather(_)));

        let empty: FixtureData =
            serde_json::from_str("{}").unwrap_or(FixtureData::Empty(EmptyData {}));
        assert!(empty.is_empty());
    }
}
