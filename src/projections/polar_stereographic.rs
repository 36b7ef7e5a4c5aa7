use std::f64::consts::PI;

use crate::{
    constants::{HUGHES_ECCENTRICITY, HUGHES_RADIUS_KM, TRUE_SCALE_LAT},
    hemisphere::Hemisphere,
    lonlat::LonLat,
    polar_xy::PolarXy,
    ThisOrThat,
};

// True-scale latitudes closer to the pole than this collapse the scale
// factor to the closed-form polar aspect (Snyder 21-33/21-39).
const POLAR_ASPECT_TOL: f64 = 1e-5;

/// Ellipsoidal Polar Stereographic projection, after Snyder (1987),
/// "Map Projections: A Working Manual", p. 157-163.
///
/// Parameterized by the latitude of true scale, the Earth radius in km,
/// and the Earth eccentricity. Both transform directions are total over
/// real inputs: nothing fails, including the center of projection itself
/// (see [`PolarStereographic::to_lonlat`]). The parameters are trusted as
/// physical constants and are not validated.
#[derive(Clone, Copy, Debug)]
pub struct PolarStereographic {
    true_scale_lat: f64,
    re: f64,
    e: f64,
}

impl PolarStereographic {
    /// Projection with caller-supplied parameters: true-scale latitude in
    /// degrees, Earth radius in km, and Earth eccentricity.
    pub fn new(true_scale_lat: f64, re: f64, e: f64) -> PolarStereographic {
        Self {
            true_scale_lat,
            re,
            e,
        }
    }

    /// The projection used by the NSIDC polar grids: true scale at 70°
    /// on the Hughes 1980 ellipsoid.
    pub fn nsidc() -> PolarStereographic {
        Self::new(TRUE_SCALE_LAT, HUGHES_RADIUS_KM, HUGHES_ECCENTRICITY)
    }

    /// Converts projected (x, y) km offsets to geodetic longitude and
    /// latitude. Geodetic latitude is recovered from the conformal
    /// latitude with the standard inverse series in sin(2χ), sin(4χ),
    /// sin(6χ).
    ///
    /// The returned longitude is normalized into `[0, 360)`; the latitude
    /// carries the hemisphere sign.
    ///
    /// At the center of projection the longitude is indeterminate;
    /// `atan2(0, 0) == 0` makes it come out as `0.0`, with the latitude
    /// exactly ±90. Callers must tolerate that degenerate longitude.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{Hemisphere, PolarStereographic};
    ///
    /// let proj = PolarStereographic::nsidc();
    ///
    /// let pole = proj.to_lonlat(Hemisphere::North, 0.0, 0.0);
    /// assert_eq!(pole.latitude(), 90.0);
    /// assert_eq!(pole.longitude(), 0.0);
    ///
    /// let pole = proj.to_lonlat(Hemisphere::South, 0.0, 0.0);
    /// assert_eq!(pole.latitude(), -90.0);
    /// ```
    pub fn to_lonlat(&self, hemisphere: Hemisphere, x: f64, y: f64) -> LonLat {
        let dir = hemisphere.direction();
        let e = self.e;
        let e2 = e * e;
        let slat = self.true_scale_lat * PI / 180.;
        let rho = (x * x + y * y).sqrt();

        let t = if (self.true_scale_lat - 90.).abs() < POLAR_ASPECT_TOL {
            // Snyder (1987) p. 162 Eqn 21-39
            rho * ((1. + e).powf(1. + e) * (1. - e).powf(1. - e)).sqrt() / (2. * self.re)
        } else {
            let cm = slat.cos() / (1. - e2 * slat.sin().powi(2)).sqrt();
            let t = (PI / 4. - slat / 2.).tan()
                / ((1. - e * slat.sin()) / (1. + e * slat.sin())).powf(e / 2.);
            rho * t / (self.re * cm)
        };

        // Snyder (1987) p. 15 Eqn 3-5: conformal latitude chi, then the
        // inverse series for geodetic latitude
        let chi = PI / 2. - 2. * t.atan();
        let lat = chi
            + (e2 / 2. + 5. * e2.powi(2) / 24. + e2.powi(3) / 12.) * (2. * chi).sin()
            + (7. * e2.powi(2) / 48. + 29. * e2.powi(3) / 240.) * (4. * chi).sin()
            + (7. * e2.powi(3) / 120.) * (6. * chi).sin();
        let lat = dir * lat * 180. / PI;

        let lon = (dir * x).atan2(-dir * y);
        let lon = dir * lon * 180. / PI;
        let lon = (lon < 0.).ternary(lon + 360., lon);

        LonLat::new(lon, lat)
    }

    /// Converts geodetic longitude and latitude to projected (x, y) km
    /// offsets.
    ///
    /// The latitude's absolute value is used; the hemisphere argument
    /// reinstates the sign conventions of the projected plane.
    pub fn from_lonlat(&self, hemisphere: Hemisphere, longitude: f64, latitude: f64) -> PolarXy {
        let dir = hemisphere.direction();
        let e = self.e;
        let e2 = e * e;

        let lat = latitude.abs() * PI / 180.;
        let lon = longitude * PI / 180.;
        let slat = self.true_scale_lat * PI / 180.;

        // Snyder (1987) p. 161 Eqn 15-9
        let t = (PI / 4. - lat / 2.).tan()
            / ((1. - e * lat.sin()) / (1. + e * lat.sin())).powf(e / 2.);

        let rho = if (90. - self.true_scale_lat).abs() < POLAR_ASPECT_TOL {
            // Snyder (1987) p. 161 Eqn 21-33
            2. * self.re * t / ((1. + e).powf(1. + e) * (1. - e).powf(1. - e)).sqrt()
        } else {
            // Snyder (1987) p. 161 Eqn 21-34
            let tc = (PI / 4. - slat / 2.).tan()
                / ((1. - e * slat.sin()) / (1. + e * slat.sin())).powf(e / 2.);
            let mc = slat.cos() / (1. - e2 * slat.sin().powi(2)).sqrt();
            self.re * mc * t / tc
        };

        let x = rho * dir * (dir * lon).sin();
        let y = -rho * dir * (dir * lon).cos();

        PolarXy::new(x, y)
    }

    /// Elementwise [`PolarStereographic::to_lonlat`] over a slice of
    /// projected points. Output order matches input order.
    pub fn to_lonlat_batch(&self, hemisphere: Hemisphere, points: &[PolarXy]) -> Vec<LonLat> {
        points
            .iter()
            .map(|point| self.to_lonlat(hemisphere, point.x, point.y))
            .collect()
    }

    /// Elementwise [`PolarStereographic::from_lonlat`] over a slice of
    /// coordinates. Output order matches input order.
    pub fn from_lonlat_batch(&self, hemisphere: Hemisphere, coords: &[LonLat]) -> Vec<PolarXy> {
        coords
            .iter()
            .map(|coord| self.from_lonlat(hemisphere, coord.longitude, coord.latitude))
            .collect()
    }
}
