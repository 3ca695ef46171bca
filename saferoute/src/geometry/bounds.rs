use crate::model::{Bounds, LatLng};

impl Bounds {
    /// Smallest box holding every point, or `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = LatLng>>(points: I) -> Option<Bounds> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bounds { south: first.lat, west: first.lng, north: first.lat, east: first.lng };
        for p in it { b.extend(p); }
        Some(b)
    }

    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }
}
