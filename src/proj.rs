use geo::{Coord, MapCoords, Polygon};
use proj4rs::proj::Proj;

/// Select the UTM zone and hemisphere for a representative point.
///
/// Standard zoning rule: `zone = floor((lon + 180) / 6) + 1`, clamped to
/// 1..=60, northern hemisphere iff `lat >= 0`. UTM is not defined above
/// ~84°N / below ~80°S; callers accept the distortion there.
pub fn utm_zone(longitude: f64, latitude: f64) -> (u8, bool) {
    let zone = (((longitude + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8;
    (zone, latitude >= 0.0)
}

/// A cached WGS84 geographic -> UTM projected coordinate transform.
///
/// Built once per zone/hemisphere at grid construction and shared by every
/// cell in that zone; never rebuilt per query.
pub struct UtmTransform {
    zone: u8,
    north: bool,
    source: Proj,
    target: Proj,
}

/// A per-coordinate transform failure, reported without the source WKT;
/// the engine attaches that context when it wraps this into an error.
#[derive(Debug)]
pub(crate) struct TransformFailure(pub(crate) String);

impl UtmTransform {
    /// Build the transform for a UTM zone. The PROJ.4 definitions are
    /// fixed strings under our control, so a parse failure here is a
    /// programming error, not a runtime condition.
    pub fn new(zone: u8, north: bool) -> Self {
        let south = if north { "" } else { " +south" };
        let target = format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs +type=crs");
        Self {
            zone,
            north,
            source: Proj::from_proj_string("+proj=longlat +datum=WGS84 +no_defs +type=crs")
                .expect("WGS84 longlat PROJ.4 definition"),
            target: Proj::from_proj_string(&target).expect("UTM PROJ.4 definition"),
        }
    }

    /// Get the UTM zone number (1..=60).
    #[inline] pub fn zone(&self) -> u8 { self.zone }

    /// Check whether this is the northern-hemisphere variant of the zone.
    #[inline] pub fn is_northern(&self) -> bool { self.north }

    /// Project one WGS84 degree coordinate to UTM easting/northing meters.
    pub(crate) fn project_coord(&self, coord: Coord<f64>) -> Result<Coord<f64>, TransformFailure> {
        // Map coords -> radians in, meters out.
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        proj4rs::transform::transform(&self.source, &self.target, &mut point)
            .map_err(|err| TransformFailure(err.to_string()))?;
        if !point.0.is_finite() || !point.1.is_finite() {
            return Err(TransformFailure(format!(
                "non-finite UTM coordinate from ({}, {})", coord.x, coord.y
            )));
        }
        Ok(Coord { x: point.0, y: point.1 })
    }

    /// Reproject a polygon into this zone's UTM system. The input is left
    /// untouched; a new polygon is returned.
    pub(crate) fn project_polygon(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>, TransformFailure> {
        polygon.try_map_coords(|coord| self.project_coord(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, polygon};

    #[test]
    fn zone_selection_follows_the_standard_rule() {
        assert_eq!(utm_zone(0.5, 0.5), (31, true));
        assert_eq!(utm_zone(-1.5, 51.5), (30, true));
        assert_eq!(utm_zone(-180.0, -1.0), (1, false));
        assert_eq!(utm_zone(179.9, 10.0), (60, true));
        // Exactly 180° falls out of the formula's range and clamps.
        assert_eq!(utm_zone(180.0, 10.0), (60, true));
    }

    #[test]
    fn central_meridian_projects_to_false_easting() {
        let transform = UtmTransform::new(31, true);
        let projected = transform.project_coord(Coord { x: 3.0, y: 0.0 }).unwrap();
        assert!((projected.x - 500_000.0).abs() < 1.0, "easting {}", projected.x);
        assert!(projected.y.abs() < 1.0, "northing {}", projected.y);
    }

    #[test]
    fn southern_hemisphere_uses_false_northing() {
        let transform = UtmTransform::new(31, false);
        let projected = transform.project_coord(Coord { x: 3.0, y: -0.1 }).unwrap();
        // Just below the equator, +south puts the northing just under 10,000 km.
        assert!(projected.y > 9_900_000.0 && projected.y < 10_000_000.0, "northing {}", projected.y);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let transform = UtmTransform::new(31, true);
        assert!(transform.project_coord(Coord { x: f64::NAN, y: 0.0 }).is_err());
    }

    #[test]
    fn projection_returns_a_new_polygon() {
        let source = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0),
        ];
        let before = source.clone();
        let transform = UtmTransform::new(31, true);
        let projected = transform.project_polygon(&source).unwrap();

        // Input untouched, output in meters.
        assert_eq!(source, before);
        let km2 = projected.unsigned_area() / 1.0e6;
        assert!(km2 > 11_000.0 && km2 < 13_500.0, "area {km2} km²");
    }
}
