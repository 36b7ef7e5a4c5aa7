use std::fmt::Display;

use crate::{hemisphere::Hemisphere, lonlat::LonLat, projections::polar_stereographic::PolarStereographic};

/// A Polar Stereographic projected point: Cartesian offsets from the
/// center of projection, in km.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarXy {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl PolarXy {
    pub fn new(x: f64, y: f64) -> PolarXy {
        Self { x, y }
    }

    /// Returns the X offset in km.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y offset in km.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Converts from [`LonLat`] to [`PolarXy`] using the NSIDC Earth
    /// parameters (true scale at 70° on the Hughes 1980 ellipsoid).
    pub fn from_lonlat(value: &LonLat, hemisphere: Hemisphere) -> PolarXy {
        PolarStereographic::nsidc().from_lonlat(hemisphere, value.longitude, value.latitude)
    }

    /// Converts from [`PolarXy`] to [`LonLat`] using the NSIDC Earth
    /// parameters.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{Hemisphere, PolarXy};
    ///
    /// let coord = PolarXy::new(3743.75, -230.0).to_lonlat(Hemisphere::North);
    ///
    /// assert!(coord.longitude() >= 0.0 && coord.longitude() < 360.0);
    /// assert!(coord.latitude() > 0.0);
    /// ```
    pub fn to_lonlat(&self, hemisphere: Hemisphere) -> LonLat {
        PolarStereographic::nsidc().to_lonlat(hemisphere, self.x, self.y)
    }
}

impl Display for PolarXy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        write!(
            f,
            "{x} {y}",
        )
    }
}
