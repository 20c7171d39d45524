//! Venue → city lookup for the City grouping.
//!
//! Closed table: only multi-stadium cities are listed. Any other venue is its
//! own single-venue "city".

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

const CITY_VENUES: &[(&str, &[&str])] = &[
    (
        "Glasgow",
        &[
            "Celtic Park",
            "Ibrox",
            "Hampden",
            "Hampden I",
            "Hampden II",
            "Ibrox I",
            "Hamilton Crescent",
        ],
    ),
    ("Edinburgh", &["Easter Road", "Tynecastle", "Hibernian Park"]),
    (
        "London",
        &[
            "Wembley",
            "Emirates",
            "London",
            "Craven Cottage",
            "The Oval",
            "Crystal Palace",
            "Stamford Bridge",
        ],
    ),
    ("Dundee", &["Dens Park", "Dundee"]),
];

static VENUE_TO_CITY: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    CITY_VENUES
        .iter()
        .flat_map(|(city, venues)| venues.iter().map(move |venue| (*venue, *city)))
        .collect()
});

/// City label for a venue (exact venue name match).
pub fn city_for_venue(venue: &str) -> &str {
    VENUE_TO_CITY.get(venue).copied().unwrap_or(venue)
}
