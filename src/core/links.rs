//! Deep links handed to the platform dialer and map applications.

use crate::domain::model::Coordinates;

pub fn call_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn google_maps_link(at: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        at.latitude, at.longitude
    )
}

pub fn waze_link(at: Coordinates) -> String {
    format!(
        "https://waze.com/ul?ll={},{}&navigate=yes",
        at.latitude, at.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARIRI: Coordinates = Coordinates {
        latitude: -22.0744,
        longitude: -48.7403,
    };

    #[test]
    fn test_call_link() {
        assert_eq!(call_link("(14) 3642-3242"), "tel:(14)3642-3242");
        assert_eq!(call_link("1436423242"), "tel:1436423242");
    }

    #[test]
    fn test_map_links() {
        assert_eq!(
            google_maps_link(BARIRI),
            "https://www.google.com/maps/search/?api=1&query=-22.0744,-48.7403"
        );
        assert_eq!(
            waze_link(BARIRI),
            "https://waze.com/ul?ll=-22.0744,-48.7403&navigate=yes"
        );
    }
}
