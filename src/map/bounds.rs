use serde::Serialize;

use crate::model::{BoreholeData, GeoPoint};

/// Geographic rectangle in decimal degrees, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Degenerate bounds around a single point.
    #[must_use]
    pub fn around(point: GeoPoint) -> Self {
        Self {
            min_lat: point.lat,
            max_lat: point.lat,
            min_lng: point.lng,
            max_lng: point.lng,
        }
    }

    /// Smallest bounds enclosing every finite point, `None` if there is none.
    pub fn from_points<I: IntoIterator<Item = GeoPoint>>(points: I) -> Option<Self> {
        points
            .into_iter()
            .filter(|point| point.lat.is_finite() && point.lng.is_finite())
            .fold(None, |bounds: Option<Self>, point| {
                Some(match bounds {
                    Some(mut bounds) => {
                        bounds.extend(point);
                        bounds
                    }
                    None => Self::around(point),
                })
            })
    }

    /// Bounds of every borehole plus both ends of the section line.
    #[must_use]
    pub fn of_dataset(data: &BoreholeData) -> Option<Self> {
        if data.boreholes.is_empty() {
            return None;
        }
        let line = data
            .cross_section
            .line
            .iter()
            .flat_map(|line| [line.start, line.end]);
        Self::from_points(data.boreholes.iter().map(|borehole| borehole.position()).chain(line))
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lat = self.max_lat.max(point.lat);
        self.min_lng = self.min_lng.min(point.lng);
        self.max_lng = self.max_lng.max(point.lng);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }

    /// South-west corner.
    #[must_use]
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lng)
    }

    /// North-east corner.
    #[must_use]
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lng)
    }
}

/// Mean position of all boreholes, the initial map center.
#[must_use]
pub fn mean_position(data: &BoreholeData) -> Option<GeoPoint> {
    if data.boreholes.is_empty() {
        return None;
    }
    let count = data.boreholes.len() as f64;
    let (lat, lng) = data
        .boreholes
        .iter()
        .fold((0.0, 0.0), |(lat, lng), borehole| (lat + borehole.lat, lng + borehole.lng));
    Some(GeoPoint::new(lat / count, lng / count))
}
