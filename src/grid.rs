use std::fmt::Display;

use crate::{
    hemisphere::Hemisphere,
    lonlat::LonLat,
    projections::polar_stereographic::PolarStereographic,
    Error, ThisOrThat,
};

/// Cell dimension of an NSIDC polar stereographic grid, in km.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSize {
    #[cfg_attr(feature = "serde", serde(rename = "6.25"))]
    Km6_25,
    #[cfg_attr(feature = "serde", serde(rename = "12.5"))]
    Km12_5,
    #[cfg_attr(feature = "serde", serde(rename = "25"))]
    Km25,
}

impl GridSize {
    /// Cell dimension in km.
    pub fn km(self) -> f64 {
        match self {
            GridSize::Km6_25 => 6.25,
            GridSize::Km12_5 => 12.5,
            GridSize::Km25 => 25.,
        }
    }

    /// Factor by which the base 6.25 km extents shrink at this
    /// resolution.
    fn divisor(self) -> i32 {
        match self {
            GridSize::Km6_25 => 1,
            GridSize::Km12_5 => 2,
            GridSize::Km25 => 4,
        }
    }
}

impl TryFrom<f64> for GridSize {
    type Error = Error;

    /// Accepts exactly `6.25`, `12.5`, or `25.0` km. All three values are
    /// exactly representable, so direct comparison is safe here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] for any other value.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::GridSize;
    ///
    /// assert_eq!(GridSize::try_from(6.25).unwrap(), GridSize::Km6_25);
    /// assert_eq!(GridSize::try_from(12.5).unwrap(), GridSize::Km12_5);
    /// assert_eq!(GridSize::try_from(25.0).unwrap(), GridSize::Km25);
    ///
    /// assert!(GridSize::try_from(1.0).is_err());
    /// assert!(GridSize::try_from(400.0).is_err());
    /// assert!(GridSize::try_from(-1.0).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    fn try_from(value: f64) -> Result<GridSize, Error> {
        if value == 6.25 {
            Ok(GridSize::Km6_25)
        } else if value == 12.5 {
            Ok(GridSize::Km12_5)
        } else if value == 25. {
            Ok(GridSize::Km25)
        } else {
            Err(Error::InvalidGridSize(value))
        }
    }
}

/// Origin and extents of one hemisphere/resolution grid: the rotation
/// `delta` of the grid's longitude origin, the cell counts, and the
/// projected offsets of the grid corner from the pole, in km.
pub(crate) struct GridSpec {
    pub(crate) delta: f64,
    pub(crate) imax: i32,
    pub(crate) jmax: i32,
    pub(crate) xmin: f64,
    pub(crate) ymin: f64,
}

impl GridSpec {
    pub(crate) fn new(grid_size: GridSize, hemisphere: Hemisphere) -> GridSpec {
        let g = grid_size.km();

        // Base extents are for the 6.25 km grids; the coarser grids
        // cover the same area with half/quarter the cells.
        let (delta, imax, jmax, xmin, ymin) = match hemisphere {
            Hemisphere::North => (45., 1216, 1792, -3850. + g / 2., -5350. + g / 2.),
            Hemisphere::South => (0., 1264, 1328, -3950. + g / 2., -3950. + g / 2.),
        };

        let div = grid_size.divisor();

        GridSpec {
            delta,
            imax: imax / div,
            jmax: jmax / div,
            xmin,
            ymin,
        }
    }
}

/// A 1-based (I, J) cell address into a fixed-resolution hemispheric
/// grid. Row `J = 1` is the edge of the grid at the top of the projected
/// plane; `J` increases as the projected Y decreases.
///
/// The components are signed so that [`GridIndex::from_lonlat`] can
/// represent a coordinate outside the grid's coverage as an address
/// outside `[1, imax] x [1, jmax]`.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridIndex {
    pub(crate) i: i32,
    pub(crate) j: i32,
}

impl GridIndex {
    /// Creates a cell address. Bounds depend on the grid size and
    /// hemisphere, so they are checked by [`GridIndex::to_lonlat`], not
    /// here.
    pub fn new(i: i32, j: i32) -> GridIndex {
        Self { i, j }
    }

    #[inline]
    pub fn i(&self) -> i32 {
        self.i
    }

    #[inline]
    pub fn j(&self) -> i32 {
        self.j
    }

    /// Converts this cell address to the longitude/latitude of the cell
    /// center, using the NSIDC Earth parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either component lies
    /// outside the extents of the chosen grid, naming the offending
    /// dimension and its legal range.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{GridIndex, GridSize, Hemisphere};
    ///
    /// let coord = GridIndex::new(608, 896)
    ///     .to_lonlat(GridSize::Km12_5, Hemisphere::North)
    ///     .unwrap();
    ///
    /// assert_eq!(coord.longitude(), 350.01450147320855);
    /// assert_eq!(coord.latitude(), 34.40871032516291);
    ///
    /// let out_of_range = GridIndex::new(609, 896)
    ///     .to_lonlat(GridSize::Km12_5, Hemisphere::North);
    ///
    /// assert_eq!(
    ///     out_of_range.unwrap_err().to_string(),
    ///     "'i' value 609 is out of range: [1, 608]",
    /// );
    /// ```
    pub fn to_lonlat(self, grid_size: GridSize, hemisphere: Hemisphere) -> Result<LonLat, Error> {
        let spec = GridSpec::new(grid_size, hemisphere);
        self.check_range(&spec)?;

        let g = grid_size.km();

        // I, J cell addresses to km offsets from the projection center
        let x = f64::from(self.i - 1) * g + spec.xmin;
        let y = f64::from(spec.jmax - self.j) * g + spec.ymin;

        let coord = PolarStereographic::nsidc().to_lonlat(hemisphere, x, y);

        let lon = coord.longitude - spec.delta;
        let lon = (lon < 0.).ternary(lon + 360., lon);

        Ok(LonLat::new(lon, coord.latitude))
    }

    /// Converts a longitude/latitude coordinate to the nearest cell
    /// address of the chosen grid, using the NSIDC Earth parameters.
    ///
    /// The latitude's absolute value is used; the hemisphere argument
    /// selects the grid. The coordinate is not range-checked: a point
    /// outside the grid's coverage resolves to an address outside
    /// `[1, imax] x [1, jmax]`, which [`GridIndex::to_lonlat`] will then
    /// reject. Callers that need containment must check the result.
    ///
    /// # Usage
    ///
    /// ```
    /// use polarconvert::{GridIndex, GridSize, Hemisphere, LonLat};
    ///
    /// let index = GridIndex::from_lonlat(
    ///     &LonLat::new(350.0, 34.41),
    ///     GridSize::Km12_5,
    ///     Hemisphere::North,
    /// );
    ///
    /// assert_eq!(index, GridIndex::new(608, 896));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_lonlat(value: &LonLat, grid_size: GridSize, hemisphere: Hemisphere) -> GridIndex {
        let spec = GridSpec::new(grid_size, hemisphere);
        let g = grid_size.km();

        let xy = PolarStereographic::nsidc().from_lonlat(
            hemisphere,
            value.longitude + spec.delta,
            value.latitude.abs(),
        );

        let i = ((xy.x - spec.xmin) / g).round() as i32 + 1;
        let j = ((xy.y - spec.ymin) / g).round() as i32 + 1;
        // Flip orientation in the 'j' direction
        let j = spec.jmax - j + 1;

        GridIndex { i, j }
    }

    /// Elementwise [`GridIndex::to_lonlat`] over a slice of cell
    /// addresses. Output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::IndexOutOfRange`] encountered; a
    /// failing element aborts the whole call with no partial output.
    pub fn to_lonlat_batch(
        indices: &[GridIndex],
        grid_size: GridSize,
        hemisphere: Hemisphere,
    ) -> Result<Vec<LonLat>, Error> {
        indices
            .iter()
            .map(|index| index.to_lonlat(grid_size, hemisphere))
            .collect()
    }

    /// Elementwise [`GridIndex::from_lonlat`] over a slice of
    /// coordinates. Output order matches input order.
    pub fn from_lonlat_batch(
        coords: &[LonLat],
        grid_size: GridSize,
        hemisphere: Hemisphere,
    ) -> Vec<GridIndex> {
        coords
            .iter()
            .map(|coord| GridIndex::from_lonlat(coord, grid_size, hemisphere))
            .collect()
    }

    fn check_range(&self, spec: &GridSpec) -> Result<(), Error> {
        if self.i < 1 || self.i > spec.imax {
            return Err(Error::IndexOutOfRange {
                dimension: 'i',
                value: self.i,
                max: spec.imax,
            });
        }
        if self.j < 1 || self.j > spec.jmax {
            return Err(Error::IndexOutOfRange {
                dimension: 'j',
                value: self.j,
                max: spec.jmax,
            });
        }

        Ok(())
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.i,
            self.j,
        )
    }
}
