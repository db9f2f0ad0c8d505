//! Keyword-based intent routing.
//!
//! Rules are evaluated in a fixed order; the first rule with a keyword that
//! appears in the query (case-insensitive substring) wins.

/// What the assistant should do for a matched query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Look up live weather for the monitored region.
    FetchWeather,
    /// Look up recent ocean and climate headlines.
    FetchNews,
    /// Answer with a fixed body.
    Canned(&'static str),
}

/// One routing rule: a keyword set and the action it triggers.
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub action: Action,
}

impl Rule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|keyword| query.contains(keyword))
    }
}

/// Fallback body listing what the assistant can talk about.
pub const HELP_TEXT: &str = "I can help with temperature, salinity, ocean currents, marine life, \
weather, news, float maps, and more. What would you like to explore today? 🤿";

/// Routing rules in priority order. Live lookups outrank the canned topics,
/// so e.g. "weather and temperature report" hits the weather lookup.
pub static RULES: &[Rule] = &[
    Rule {
        name: "weather",
        keywords: &["weather", "storm", "rain"],
        action: Action::FetchWeather,
    },
    Rule {
        name: "news",
        keywords: &["news", "update", "latest"],
        action: Action::FetchNews,
    },
    Rule {
        name: "temperature",
        keywords: &["temperature", "temp"],
        action: Action::Canned("The average temperature in the Indian Ocean is around 28.5°C 📈."),
    },
    Rule {
        name: "salinity",
        keywords: &["salinity", "salt"],
        action: Action::Canned("Salinity levels are averaging around 34.8 PSU 🧂."),
    },
    Rule {
        name: "float-map",
        keywords: &["map", "location", "where"],
        action: Action::Canned("Currently tracking 3 active floats in the Indian Ocean 🛰️."),
    },
    Rule {
        name: "comparison",
        keywords: &["compare", "difference"],
        action: Action::Canned("Here's a comparison of temperature and salinity across floats 📊."),
    },
    Rule {
        name: "currents",
        keywords: &["current", "currents"],
        action: Action::Canned(
            "Major currents include the Agulhas Current and the Somali Current 🌊, \
             influencing marine life and climate.",
        ),
    },
    Rule {
        name: "depth",
        keywords: &["depth", "deep"],
        action: Action::Canned("The Indian Ocean reaches depths over 7,000 meters in the Java Trench 🌐."),
    },
    Rule {
        name: "marine-life",
        keywords: &["marine life", "animals", "species"],
        action: Action::Canned("It hosts whales, dolphins, sea turtles, coral reefs, and many other species 🐋🐢🐠."),
    },
    Rule {
        name: "climate-change",
        keywords: &["climate change", "warming", "impact"],
        action: Action::Canned(
            "Climate change affects ocean temperatures, sea level rise, and acidification, \
             threatening marine ecosystems 🌍.",
        ),
    },
];

/// Route a free-text query to the first matching rule's action. Queries
/// that match nothing fall back to the help text.
pub fn route(query: &str) -> Action {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&query))
        .map(|rule| rule.action)
        .unwrap_or(Action::Canned(HELP_TEXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_body(action: Action) -> &'static str {
        match action {
            Action::Canned(body) => body,
            other => panic!("expected canned action, got {other:?}"),
        }
    }

    #[test]
    fn weather_keywords_route_to_live_lookup() {
        assert_eq!(route("What's the weather like?"), Action::FetchWeather);
        assert_eq!(route("is a STORM coming"), Action::FetchWeather);
        assert_eq!(route("will it rain tomorrow"), Action::FetchWeather);
    }

    #[test]
    fn news_keywords_route_to_live_lookup() {
        assert_eq!(route("any ocean news?"), Action::FetchNews);
        assert_eq!(route("give me an update"), Action::FetchNews);
        assert_eq!(route("what's the latest"), Action::FetchNews);
    }

    #[test]
    fn weather_outranks_temperature() {
        // Both keywords appear; the weather rule is checked first.
        assert_eq!(route("weather and temperature report"), Action::FetchWeather);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(route("SALINITY at depth"), route("salinity at depth"));
        assert_eq!(route("Weather?"), Action::FetchWeather);
    }

    #[test]
    fn salinity_query_returns_psu_body() {
        let action = route("What's the salinity at 100m?");
        assert!(canned_body(action).contains("34.8 PSU"));
    }

    #[test]
    fn each_canned_topic_matches_a_sample_query() {
        let samples = [
            ("Show me temperature profiles near India", "28.5°C"),
            ("how salty is it", "34.8 PSU"),
            ("where are the floats", "3 active floats"),
            ("compare two floats", "comparison"),
            ("tell me about ocean currents", "Agulhas"),
            ("how deep does it get", "Java Trench"),
            ("what species live there", "whales"),
            ("impact of warming", "Climate change"),
        ];

        for (query, expected) in samples {
            let action = route(query);
            assert!(
                canned_body(action).contains(expected),
                "query {query:?} should produce a body containing {expected:?}"
            );
        }
    }

    #[test]
    fn unmatched_query_falls_back_to_help() {
        assert_eq!(route("hello there"), Action::Canned(HELP_TEXT));
        assert!(HELP_TEXT.contains(
            "I can help with temperature, salinity, ocean currents, marine life, \
             weather, news, float maps, and more."
        ));
    }

    #[test]
    fn rule_table_keeps_documented_priority() {
        let order: Vec<&str> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            order,
            [
                "weather",
                "news",
                "temperature",
                "salinity",
                "float-map",
                "comparison",
                "currents",
                "depth",
                "marine-life",
                "climate-change",
            ]
        );
    }
}
