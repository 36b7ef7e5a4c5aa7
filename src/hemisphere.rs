use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The polar hemisphere a grid or projection is centered on. Determines
/// the sign conventions of the projection and the extents of the grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Sign of the projected plane for this hemisphere: `1.0` for
    /// [`Hemisphere::North`], `-1.0` for [`Hemisphere::South`].
    pub fn direction(self) -> f64 {
        match self {
            Hemisphere::North => 1.,
            Hemisphere::South => -1.,
        }
    }

    pub fn is_north(self) -> bool {
        matches!(self, Hemisphere::North)
    }
}

impl FromStr for Hemisphere {
    type Err = Error;

    /// Parses a hemisphere name, ignoring case. Only the full names
    /// `"north"` and `"south"` are recognized; abbreviations are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHemisphere`] for any other string.
    ///
    /// # Usage
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// use polarconvert::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::from_str("NORTH").unwrap(), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_str("south").unwrap(), Hemisphere::South);
    ///
    /// assert!(Hemisphere::from_str("n").is_err());
    /// assert!(Hemisphere::from_str("soth").is_err());
    /// ```
    fn from_str(value: &str) -> Result<Hemisphere, Error> {
        if value.eq_ignore_ascii_case("north") {
            Ok(Hemisphere::North)
        } else if value.eq_ignore_ascii_case("south") {
            Ok(Hemisphere::South)
        } else {
            Err(Error::InvalidHemisphere(value.to_string()))
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::North => write!(f, "north"),
            Hemisphere::South => write!(f, "south"),
        }
    }
}
