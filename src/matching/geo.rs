// src/matching/geo.rs

/// Mean earth radius used by the spherical approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle (haversine) distance in meters between two coordinates.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let (delta_phi, delta_lambda) = ((lat2 - lat1).to_radians(), (lon2 - lon1).to_radians());
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(calculate_distance(43.1566, -77.6088, 43.1566, -77.6088), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let d1 = calculate_distance(43.0, -77.0, 43.0001, -77.0001);
        let d2 = calculate_distance(43.0001, -77.0001, 43.0, -77.0);
        assert_eq!(d1, d2);
        // ~11.1 m north, ~8.1 m west
        assert!(d1 > 13.0 && d1 < 15.0, "got {}", d1);
    }

    #[test]
    fn test_one_degree_latitude() {
        let d = calculate_distance(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_194.9).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = calculate_distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }
}
