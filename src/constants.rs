// Hughes 1980 ellipsoid, the Earth model of the NSIDC polar grids.
// Radius is in km to match the units of the projected plane.
pub(crate) const HUGHES_RADIUS_KM: f64 = 6_378.273;
#[allow(clippy::unreadable_literal)]
pub(crate) const HUGHES_ECCENTRICITY: f64 = 0.081816153;

// Latitude at which the projection scale factor is 1
pub(crate) const TRUE_SCALE_LAT: f64 = 70.;
