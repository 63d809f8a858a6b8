//! Location Risk Source.
//!
//! Pure check of the headquarters location against the static climate-risk
//! city list. No I/O, cannot fail.

use tracing::debug;

use crate::models::LocationInfo;
use crate::vocab::RISKY_CITIES;

/// Flag whether `location` names a city on the climate-risk list.
///
/// Matching is case-insensitive substring containment, so "Delhi, India"
/// and "New Delhi" both match the "Delhi" entry.
pub fn assess(location: &str) -> LocationInfo {
    let lowered = location.to_lowercase();
    let risky_city = RISKY_CITIES
        .iter()
        .any(|city| lowered.contains(&city.to_lowercase()));
    debug!(%location, risky_city, "Assessed location risk");
    LocationInfo {
        location: location.to_string(),
        risky_city,
    }
}
