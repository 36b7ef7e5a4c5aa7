use std::fmt::Display;

use crate::{grid::{GridIndex, GridSize}, hemisphere::Hemisphere, polar_xy::PolarXy, Error};

/// A geodetic longitude/latitude point on the Hughes 1980 ellipsoid.
/// Can be converted to/from [`PolarXy`] and [`GridIndex`].
///
/// Longitudes produced by this crate always lie in `[0, 360)`. Latitudes
/// are signed, negative in the southern hemisphere.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl LonLat {
    /// Creates a longitude/latitude point. The values are not
    /// range-checked: the conversions on this type accept any real
    /// coordinates, and a point outside a grid's coverage simply resolves
    /// to a cell address outside that grid's extents.
    pub fn new(lon: f64, lat: f64) -> LonLat {
        Self {
            longitude: lon,
            latitude: lat,
        }
    }

    /// Returns the longitude value in degrees.
    ///
    /// # Example
    /// ```
    /// use polarconvert::LonLat;
    ///
    /// let coord = LonLat::new(350.0, 34.41);
    /// assert_eq!(coord.longitude(), 350.0);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude value in degrees.
    ///
    /// # Example
    /// ```
    /// use polarconvert::LonLat;
    ///
    /// let coord = LonLat::new(350.0, 34.41);
    /// assert_eq!(coord.latitude(), 34.41);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the point lies in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Converts from [`GridIndex`] to [`LonLat`] using the NSIDC Earth
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the cell address lies outside
    /// the extents of the chosen grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{GridIndex, GridSize, Hemisphere, LonLat};
    ///
    /// let coord = LonLat::from_grid_index(
    ///     GridIndex::new(608, 896),
    ///     GridSize::Km12_5,
    ///     Hemisphere::North,
    /// ).unwrap();
    ///
    /// assert_eq!(coord.longitude(), 350.01450147320855);
    /// assert_eq!(coord.latitude(), 34.40871032516291);
    /// ```
    pub fn from_grid_index(
        value: GridIndex,
        grid_size: GridSize,
        hemisphere: Hemisphere,
    ) -> Result<LonLat, Error> {
        value.to_lonlat(grid_size, hemisphere)
    }

    /// Converts from [`LonLat`] to [`GridIndex`], snapping to the nearest
    /// cell of the chosen grid.
    ///
    /// The coordinate is not range-checked; see
    /// [`GridIndex::from_lonlat`].
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{GridIndex, GridSize, Hemisphere, LonLat};
    ///
    /// let coord = LonLat::new(350.0, 34.41);
    /// let index = coord.to_grid_index(GridSize::Km12_5, Hemisphere::North);
    ///
    /// assert_eq!(index, GridIndex::new(608, 896));
    /// ```
    pub fn to_grid_index(&self, grid_size: GridSize, hemisphere: Hemisphere) -> GridIndex {
        GridIndex::from_lonlat(self, grid_size, hemisphere)
    }

    /// Converts from [`PolarXy`] to [`LonLat`] using the NSIDC Earth
    /// parameters.
    pub fn from_polar_xy(value: &PolarXy, hemisphere: Hemisphere) -> LonLat {
        value.to_lonlat(hemisphere)
    }

    /// Converts from [`LonLat`] to [`PolarXy`] using the NSIDC Earth
    /// parameters. The latitude's absolute value is used; the hemisphere
    /// argument carries the sign conventions instead.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{Hemisphere, LonLat};
    ///
    /// let coord = LonLat::new(350.0, 34.41);
    /// let xy = coord.to_polar_xy(Hemisphere::North);
    /// let converted = xy.to_lonlat(Hemisphere::North);
    ///
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-6);
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-6);
    /// ```
    pub fn to_polar_xy(&self, hemisphere: Hemisphere) -> PolarXy {
        PolarXy::from_lonlat(self, hemisphere)
    }
}

impl Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        write!(
            f,
            "{lon} {lat}",
        )
    }
}
