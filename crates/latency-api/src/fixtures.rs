//! Fixture Catalog: canned payloads standing in for four upstream services.
//!
//! Lookup is pure and total. Recognized tags dispatch through an exhaustive
//! `match` on [`FixtureType`]; every other tag yields an empty payload.

use latency_types::{
    Article, EmptyData, FixtureData, FixtureType, NewsData, ProfileData, Stats, StatsData,
    WeatherData,
};

/// Sample headlines as `(title, source, url)`.
const ARTICLES: [(&str, &str, &str); 3] = [
    ("Breaking News: Major Event Unfolds", "News Network", "/"),
    ("Tech Innovations of the Year", "Tech Daily", "/"),
    ("Health Tips for a Better Life", "Health Magazine", "/"),
];

const EDGE_REQUESTS: u64 = 1_500_000;
const ORIGIN_REQUESTS: u64 = 350_000;
const CACHE_HIT_RATE: &str = "77%";

/// Look up the payload for a raw tag.
///
/// Never fails: unrecognized, empty, or malformed tags map to `{}`.
pub fn lookup(tag: &str) -> FixtureData {
    FixtureType::parse(tag).map_or(FixtureData::Empty(EmptyData {}), fixture)
}

/// The fixed payload for a recognized tag.
pub fn fixture(fixture_type: FixtureType) -> FixtureData {
    match fixture_type {
        FixtureType::Weather => FixtureData::Weather(WeatherData {
            city: String::from("San Francisco"),
            temperature: String::from("18°C"),
            condition: String::from("Partly Cloudy"),
        }),
        FixtureType::News => FixtureData::News(NewsData {
            articles: ARTICLES
                .iter()
                .map(|&(title, source, url)| Article {
                    title: title.to_owned(),
                    source: source.to_owned(),
                    url: url.to_owned(),
                })
                .collect(),
        }),
        FixtureType::Stats => FixtureData::Stats(StatsData {
            stats: Stats {
                edge: EDGE_REQUESTS,
                origin: ORIGIN_REQUESTS,
                cache_hit: CACHE_HIT_RATE.to_owned(),
            },
        }),
        FixtureType::Profile => FixtureData::Profile(ProfileData {
            name: String::from("John Doe"),
            email: String::from("test@example.com"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_has_expected_keys() {
        let value = serde_json::to_value(lookup("weather")).unwrap_or_default();
        assert_eq!(value["city"], "San Francisco");
        assert_eq!(value["temperature"], "18°C");
        assert_eq!(value["condition"], "Partly Cloudy");
    }

    #[test]
    fn news_has_three_complete_articles() {
        let data = lookup("news");
        assert!(matches!(data, FixtureData::News(_)));
        let value = serde_json::to_value(data).unwrap_or_default();
        let articles = value["articles"].as_array().cloned().unwrap_or_default();
        assert_eq!(articles.len(), 3);
        for article in &articles {
            assert!(article["title"].is_string());
            assert!(article["source"].is_string());
            assert_eq!(article["url"], "/");
        }
    }

    #[test]
    fn stats_values() {
        let value = serde_json::to_value(lookup("stats")).unwrap_or_default();
        assert_eq!(value["stats"]["edge"], 1_500_000);
        assert_eq!(value["stats"]["origin"], 350_000);
        assert_eq!(value["stats"]["cacheHit"], "77%");
    }

    #[test]
    fn profile_values() {
        assert_eq!(
            lookup("profile"),
            FixtureData::Profile(ProfileData {
                name: String::from("John Doe"),
                email: String::from("test@example.com"),
            })
        );
    }

    #[test]
    fn unknown_tags_are_empty() {
        for tag in ["bogus", "", "WEATHER", "news/", "stats "] {
            assert!(lookup(tag).is_empty(), "{tag:?} should be empty");
        }
        let json = serde_json::to_string(&lookup("bogus")).unwrap_or_default();
        assert_eq!(json, "{}");
    }

    #[test]
    fn lookup_is_deterministic() {
        for ty in FixtureType::ALL {
            assert_eq!(fixture(ty), fixture(ty));
            assert!(!fixture(ty).is_empty());
        }
    }
}
