#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod grid;
pub mod hemisphere;
pub mod lonlat;
pub mod polar_xy;

pub use grid::{GridIndex, GridSize};
pub use hemisphere::Hemisphere;
pub use lonlat::LonLat;
pub use polar_xy::PolarXy;
pub use projections::polar_stereographic::PolarStereographic;

pub mod projections {
    pub mod polar_stereographic;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Grid size {0} is not valid: expected one of 6.25, 12.5, or 25")]
    InvalidGridSize(f64),
    #[error("Hemisphere '{0}' is not valid: expected 'north' or 'south'")]
    InvalidHemisphere(String),
    #[error("'{dimension}' value {value} is out of range: [1, {max}]")]
    IndexOutOfRange {
        dimension: char,
        value: i32,
        max: i32,
    },
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
