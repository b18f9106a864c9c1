//! Built-in seed destinations

use crate::models::Destination;

type SeedRegion = (&'static str, &'static [(&'static str, &'static str)]);

const SEED: &[SeedRegion] = &[
    (
        "Arizona",
        &[
            ("Grand Canyon", "Mile-deep canyon carved by the Colorado River"),
            ("Sedona", "Red rock buttes, vortex sites and trails"),
            ("Antelope Canyon", "Narrow slot canyon with sculpted sandstone walls"),
            ("Horseshoe Bend", "Sweeping meander of the Colorado River near Page"),
            ("Monument Valley", "Sandstone buttes on Navajo Nation land"),
            ("Saguaro National Park", "Desert forests of giant saguaro cactus"),
        ],
    ),
    (
        "California",
        &[
            ("Yosemite National Park", "Granite cliffs, waterfalls and giant sequoias"),
            ("Golden Gate Bridge", "San Francisco's landmark suspension bridge"),
            ("Lake Tahoe", "Alpine lake on the California-Nevada border"),
            ("Joshua Tree National Park", "Mojave desert boulders and Joshua trees"),
            ("Big Sur", "Rugged stretch of the central coast along Highway 1"),
        ],
    ),
    (
        "Colorado",
        &[
            ("Rocky Mountain National Park", "High alpine peaks and Trail Ridge Road"),
            ("Garden of the Gods", "Red rock formations near Colorado Springs"),
            ("Aspen", "Mountain town known for skiing and fall colors"),
            ("Mesa Verde National Park", "Ancestral Puebloan cliff dwellings"),
        ],
    ),
    (
        "Florida",
        &[
            ("Everglades National Park", "Subtropical wetlands and mangroves"),
            ("Key West", "Southernmost city of the continental US"),
            ("Miami Beach", "Art Deco district and Atlantic beaches"),
            ("St. Augustine", "Oldest continuously inhabited European-founded city in the US"),
        ],
    ),
    (
        "Hawaii",
        &[
            ("Haleakala National Park", "Dormant volcano summit on Maui"),
            ("Waikiki", "Honolulu beachfront neighborhood"),
            ("Hawaii Volcanoes National Park", "Active Kilauea and Mauna Loa volcanoes"),
            ("Na Pali Coast", "Sea cliffs along Kauai's north shore"),
        ],
    ),
    (
        "Nevada",
        &[
            ("Las Vegas Strip", "Casino resorts and shows"),
            ("Red Rock Canyon", "Sandstone cliffs west of Las Vegas"),
            ("Valley of Fire State Park", "Red Aztec sandstone outcrops"),
            ("Hoover Dam", "Concrete arch-gravity dam on the Colorado River"),
        ],
    ),
    (
        "New York",
        &[
            ("Statue of Liberty", "Copper statue on Liberty Island"),
            ("Central Park", "Urban park in Manhattan"),
            ("Niagara Falls", "Waterfalls on the US-Canada border"),
            ("Adirondack Park", "Mountains, lakes and forest preserve"),
        ],
    ),
    (
        "Utah",
        &[
            ("Zion National Park", "Sandstone cliffs and the Narrows"),
            ("Arches National Park", "Over two thousand natural stone arches"),
            ("Bryce Canyon National Park", "Amphitheaters filled with hoodoos"),
            ("Canyonlands National Park", "Canyons and mesas carved by the Colorado and Green rivers"),
        ],
    ),
    (
        "Washington",
        &[
            ("Mount Rainier National Park", "Glaciated stratovolcano and wildflower meadows"),
            ("Olympic National Park", "Rainforest, coastline and glacier-capped peaks"),
            ("Space Needle", "Observation tower in Seattle"),
            ("San Juan Islands", "Archipelago known for orca watching"),
        ],
    ),
    (
        "Wyoming",
        &[
            ("Yellowstone National Park", "Geysers, hot springs and wildlife"),
            ("Grand Teton National Park", "Jagged Teton Range above Jackson Hole"),
            ("Devils Tower", "Igneous butte rising above the Belle Fourche River"),
        ],
    ),
];

/// Seed regions with their destinations, in seed order
#[must_use]
pub fn regions() -> Vec<(String, Vec<Destination>)> {
    SEED.iter()
        .map(|(region, entries)| {
            let destinations = entries
                .iter()
                .map(|(name, description)| {
                    Destination::new(*name, *region).with_description(*description)
                })
                .collect();
            ((*region).to_string(), destinations)
        })
        .collect()
}
