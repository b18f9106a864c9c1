//! Static best-time and activity hints keyed by place name

use std::collections::HashMap;

use crate::catalog::normalize_key;

pub const DEFAULT_BEST_TIME: &str = "Spring and fall usually offer the most comfortable weather";

pub const DEFAULT_ACTIVITIES: &[&str] = &["Sightseeing", "Photography", "Local food"];

type HintRow = (&'static str, &'static str, &'static [&'static str]);

const HINTS: &[HintRow] = &[
    (
        "Grand Canyon",
        "March to May and September to November",
        &["Rim-to-rim hiking", "Sunset at Mather Point", "Rafting the Colorado River", "Mule rides"],
    ),
    (
        "Sedona",
        "March to May and September to November",
        &["Hiking red rock trails", "Jeep tours", "Vortex sites", "Stargazing"],
    ),
    (
        "Antelope Canyon",
        "March to October for midday light beams",
        &["Guided slot canyon tours", "Photography"],
    ),
    (
        "Horseshoe Bend",
        "Spring and fall, at sunrise or sunset",
        &["Overlook hike", "Photography", "Kayaking Lake Powell"],
    ),
    (
        "Monument Valley",
        "March to May and September to October",
        &["Valley drive", "Navajo guided tours", "Sunrise photography"],
    ),
    (
        "Yosemite National Park",
        "May to September",
        &["Hiking to Yosemite Falls", "Rock climbing", "Glacier Point views", "Camping"],
    ),
    (
        "Lake Tahoe",
        "June to September for summer, December to March for skiing",
        &["Boating", "Skiing", "Beach days", "Hiking the rim trail"],
    ),
    (
        "Joshua Tree National Park",
        "October to April",
        &["Bouldering", "Stargazing", "Desert hikes"],
    ),
    (
        "Rocky Mountain National Park",
        "June to September",
        &["Trail Ridge Road drive", "Wildlife watching", "Alpine hikes"],
    ),
    (
        "Everglades National Park",
        "December to April",
        &["Airboat tours", "Kayaking", "Wildlife spotting"],
    ),
    (
        "Key West",
        "December to May",
        &["Snorkeling", "Duval Street", "Sunset at Mallory Square"],
    ),
    (
        "Hawaii Volcanoes National Park",
        "April to May and September to October",
        &["Crater Rim Drive", "Lava tube walks", "Night glow viewing"],
    ),
    (
        "Las Vegas Strip",
        "March to May and September to November",
        &["Shows", "Casinos", "Fine dining"],
    ),
    (
        "Niagara Falls",
        "June to August",
        &["Boat tour to the falls", "Cave of the Winds", "Illumination at night"],
    ),
    (
        "Zion National Park",
        "April to May and September to November",
        &["Hiking the Narrows", "Angels Landing", "Canyoneering"],
    ),
    (
        "Arches National Park",
        "March to May and September to October",
        &["Delicate Arch hike", "Scenic drive", "Stargazing"],
    ),
    (
        "Yellowstone National Park",
        "April to May and September to November",
        &["Old Faithful", "Wildlife safaris", "Grand Prismatic Spring"],
    ),
];

/// Seasonal and activity hints for a place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelHint {
    pub best_time: String,
    pub activities: Vec<String>,
}

/// Lookup table of hints keyed by normalized place name
#[derive(Debug, Clone)]
pub struct TravelHints {
    by_name: HashMap<String, TravelHint>,
}

impl TravelHints {
    /// The built-in hint table
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_rows(HINTS)
    }

    fn from_rows(rows: &[HintRow]) -> Self {
        let by_name = rows
            .iter()
            .map(|(name, best_time, activities)| {
                (
                    normalize_key(name),
                    TravelHint {
                        best_time: (*best_time).to_string(),
                        activities: activities.iter().map(|a| (*a).to_string()).collect(),
                    },
                )
            })
            .collect();
        Self { by_name }
    }

    /// Hint for `name`, or the generic placeholders when the name is unknown
    #[must_use]
    pub fn for_place(&self, name: &str) -> TravelHint {
        self.by_name
            .get(&normalize_key(name))
            .cloned()
            .unwrap_or_else(Self::generic)
    }

    /// True when the table has a specific entry for `name`
    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        self.by_name.contains_key(&normalize_key(name))
    }

    fn generic() -> TravelHint {
        TravelHint {
            best_time: DEFAULT_BEST_TIME.to_string(),
            activities: DEFAULT_ACTIVITIES.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Sedona")]
    #[case("sedona")]
    #[case(" SEDONA  ")]
    fn test_known_place_is_case_insensitive(#[case] name: &str) {
        let hints = TravelHints::builtin();
        let hint = hints.for_place(name);
        assert!(hints.knows(name));
        assert!(hint.activities.contains(&"Jeep tours".to_string()));
    }

    #[test]
    fn test_unknown_place_gets_placeholders() {
        let hints = TravelHints::builtin();
        let hint = hints.for_place("Nowhere Special");
        assert!(!hints.knows("Nowhere Special"));
        assert_eq!(hint.best_time, DEFAULT_BEST_TIME);
        assert_eq!(hint.activities.len(), DEFAULT_ACTIVITIES.len());
    }

    #[test]
    fn test_every_row_is_complete() {
        for (name, best_time, activities) in HINTS {
            assert!(!best_time.is_empty(), "{name} has no best time");
            assert!(!activities.is_empty(), "{name} has no activities");
        }
    }
}
