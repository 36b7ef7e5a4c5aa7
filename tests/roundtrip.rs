use std::str::FromStr;

use polarconvert::{
    Error, GridIndex, GridSize, Hemisphere, LonLat, PolarStereographic, PolarXy,
};

const GRID_SIZES: [GridSize; 3] = [GridSize::Km6_25, GridSize::Km12_5, GridSize::Km25];

const NORTH_EXTENTS: [(i32, i32); 3] = [(1216, 1792), (608, 896), (304, 448)];
const SOUTH_EXTENTS: [(i32, i32); 3] = [(1264, 1328), (632, 664), (316, 332)];

/// Walks the grid one row of `i` at a time, converting a whole column of
/// `j` values to lon/lat and back, and verifies the round trip returns
/// the identical cell addresses. Also checks that every produced
/// longitude is normalized into [0, 360).
fn roundtrip_sweep(
    grid_size: GridSize,
    hemisphere: Hemisphere,
    imax: i32,
    jmax: i32,
    stride: usize,
) {
    for i in (1..imax).step_by(stride) {
        let indices = (1..jmax)
            .step_by(stride)
            .map(|j| GridIndex::new(i, j))
            .collect::<Vec<_>>();

        let coords = GridIndex::to_lonlat_batch(&indices, grid_size, hemisphere).unwrap();

        for coord in &coords {
            assert!(
                (0. ..360.).contains(&coord.longitude()),
                "longitude {} not normalized ({grid_size:?} {hemisphere:?} i={i})",
                coord.longitude(),
            );
        }

        let back = GridIndex::from_lonlat_batch(&coords, grid_size, hemisphere);
        assert_eq!(
            indices, back,
            "round trip mismatch ({grid_size:?} {hemisphere:?} i={i})",
        );
    }
}

#[test]
fn north_12_5km_roundtrip() {
    let (imax, jmax) = NORTH_EXTENTS[1];
    roundtrip_sweep(GridSize::Km12_5, Hemisphere::North, imax, jmax, 1);
}

#[test]
fn north_25km_roundtrip() {
    let (imax, jmax) = NORTH_EXTENTS[2];
    roundtrip_sweep(GridSize::Km25, Hemisphere::North, imax, jmax, 1);
}

#[test]
fn north_6_25km_roundtrip_strided() {
    let (imax, jmax) = NORTH_EXTENTS[0];
    roundtrip_sweep(GridSize::Km6_25, Hemisphere::North, imax, jmax, 7);
}

// Full sweep of the finest grid takes a while; run with --ignored.
#[test]
#[ignore]
fn north_6_25km_roundtrip_exhaustive() {
    let (imax, jmax) = NORTH_EXTENTS[0];
    roundtrip_sweep(GridSize::Km6_25, Hemisphere::North, imax, jmax, 1);
}

#[test]
fn south_12_5km_roundtrip() {
    let (imax, jmax) = SOUTH_EXTENTS[1];
    roundtrip_sweep(GridSize::Km12_5, Hemisphere::South, imax, jmax, 1);
}

#[test]
fn south_25km_roundtrip() {
    let (imax, jmax) = SOUTH_EXTENTS[2];
    roundtrip_sweep(GridSize::Km25, Hemisphere::South, imax, jmax, 1);
}

#[test]
fn south_6_25km_roundtrip_strided() {
    let (imax, jmax) = SOUTH_EXTENTS[0];
    roundtrip_sweep(GridSize::Km6_25, Hemisphere::South, imax, jmax, 7);
}

#[test]
#[ignore]
fn south_6_25km_roundtrip_exhaustive() {
    let (imax, jmax) = SOUTH_EXTENTS[0];
    roundtrip_sweep(GridSize::Km6_25, Hemisphere::South, imax, jmax, 1);
}

#[test]
fn north_12_5km_corner_fixtures() {
    let cases = [
        ((1, 1), (168.33507963020855, 31.041601496464544)),
        ((608, 1), (102.35468099709325, 31.426360396715474)),
        ((1, 896), (279.2726017772003, 33.98819310110948)),
        ((608, 896), (350.01450147320855, 34.40871032516291)),
    ];

    for ((i, j), (lon, lat)) in cases {
        let coord = GridIndex::new(i, j)
            .to_lonlat(GridSize::Km12_5, Hemisphere::North)
            .unwrap();
        assert_eq!(coord.longitude(), lon, "i={i} j={j}");
        assert_eq!(coord.latitude(), lat, "i={i} j={j}");
    }
}

#[test]
fn south_12_5km_corner_fixtures() {
    let cases = [
        ((1, 1), (317.7632627634601, -39.29786078224397)),
        ((632, 1), (42.236737236539895, -39.29786078224397)),
        ((1, 664), (225.0, -41.51518413616323)),
        ((632, 664), (135.0, -41.51518413616323)),
    ];

    for ((i, j), (lon, lat)) in cases {
        let coord = GridIndex::new(i, j)
            .to_lonlat(GridSize::Km12_5, Hemisphere::South)
            .unwrap();
        assert_eq!(coord.longitude(), lon, "i={i} j={j}");
        assert_eq!(coord.latitude(), lat, "i={i} j={j}");
    }
}

// Coordinates near a cell center must snap to that cell, not just the
// cell's own center coordinates.
#[test]
fn corner_neighborhoods_snap_to_corners() {
    let north = [
        ((168.3, 31.04), (1, 1)),
        ((102.4, 31.4), (608, 1)),
        ((279.3, 33.99), (1, 896)),
        ((350.0, 34.41), (608, 896)),
    ];

    for ((lon, lat), (i, j)) in north {
        let index = LonLat::new(lon, lat).to_grid_index(GridSize::Km12_5, Hemisphere::North);
        assert_eq!(index, GridIndex::new(i, j), "lon={lon} lat={lat}");
    }

    // Southern-grid latitudes are passed as magnitudes; the hemisphere
    // argument carries the sign.
    let south = [
        ((317.8, 39.30), (1, 1)),
        ((42.24, 39.29), (632, 1)),
        ((225.0, 41.5), (1, 664)),
        ((135.0, 41.5), (632, 664)),
    ];

    for ((lon, lat), (i, j)) in south {
        let index = LonLat::new(lon, lat).to_grid_index(GridSize::Km12_5, Hemisphere::South);
        assert_eq!(index, GridIndex::new(i, j), "lon={lon} lat={lat}");
    }
}

#[test]
fn pole_is_exact() {
    let proj = PolarStereographic::nsidc();

    let north_pole = proj.to_lonlat(Hemisphere::North, 0., 0.);
    assert_eq!(north_pole.latitude(), 90.0);
    assert_eq!(north_pole.longitude(), 0.0);

    let south_pole = proj.to_lonlat(Hemisphere::South, 0., 0.);
    assert_eq!(south_pole.latitude(), -90.0);
    assert_eq!(south_pole.longitude(), 0.0);
}

// A true-scale latitude within 1e-5 degrees of the pole switches both
// transforms to the closed-form polar-aspect expressions; they must
// still agree with each other.
#[test]
fn polar_aspect_transforms_are_inverses() {
    let proj = PolarStereographic::new(90., 6_378.273, 0.081_816_153);

    for hemisphere in [Hemisphere::North, Hemisphere::South] {
        for (lon, lat) in [(0., 89.), (37.5, 75.), (185.25, 60.), (350., 45.)] {
            let xy = proj.from_lonlat(hemisphere, lon, lat);
            let coord = proj.to_lonlat(hemisphere, xy.x(), xy.y());

            assert!(
                (coord.longitude() - lon).abs() < 1e-6,
                "{hemisphere:?} lon={lon}: got {}",
                coord.longitude(),
            );
            assert!(
                (coord.latitude().abs() - lat).abs() < 1e-6,
                "{hemisphere:?} lat={lat}: got {}",
                coord.latitude(),
            );
        }
    }
}

#[test]
fn index_out_of_range() {
    for (idx, grid_size) in GRID_SIZES.into_iter().enumerate() {
        for (hemisphere, extents) in [
            (Hemisphere::North, NORTH_EXTENTS[idx]),
            (Hemisphere::South, SOUTH_EXTENTS[idx]),
        ] {
            let (imax, jmax) = extents;

            let err = GridIndex::new(0, 1)
                .to_lonlat(grid_size, hemisphere)
                .unwrap_err();
            assert!(
                matches!(err, Error::IndexOutOfRange { dimension: 'i', value: 0, max } if max == imax),
            );
            assert_eq!(
                err.to_string(),
                format!("'i' value 0 is out of range: [1, {imax}]"),
            );

            let err = GridIndex::new(imax + 1, 1)
                .to_lonlat(grid_size, hemisphere)
                .unwrap_err();
            assert!(
                matches!(err, Error::IndexOutOfRange { dimension: 'i', value, max } if value == imax + 1 && max == imax),
            );

            let err = GridIndex::new(1, 0)
                .to_lonlat(grid_size, hemisphere)
                .unwrap_err();
            assert!(
                matches!(err, Error::IndexOutOfRange { dimension: 'j', value: 0, max } if max == jmax),
            );

            let err = GridIndex::new(1, jmax + 1)
                .to_lonlat(grid_size, hemisphere)
                .unwrap_err();
            assert!(
                matches!(err, Error::IndexOutOfRange { dimension: 'j', value, max } if value == jmax + 1 && max == jmax),
            );

            // In-range corners convert fine
            assert!(GridIndex::new(1, 1).to_lonlat(grid_size, hemisphere).is_ok());
            assert!(GridIndex::new(imax, jmax).to_lonlat(grid_size, hemisphere).is_ok());
        }
    }
}

// A failing element anywhere in a batch aborts the whole call.
#[test]
fn batch_aborts_on_out_of_range() {
    let indices = [GridIndex::new(1, 1), GridIndex::new(609, 1)];
    let err = GridIndex::to_lonlat_batch(&indices, GridSize::Km12_5, Hemisphere::North)
        .unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { dimension: 'i', .. }));
}

#[test]
fn hemisphere_parsing() {
    assert_eq!(Hemisphere::from_str("NORTH").unwrap(), Hemisphere::North);
    assert_eq!(Hemisphere::from_str("SOUTH").unwrap(), Hemisphere::South);
    assert_eq!(Hemisphere::from_str("NORTH").unwrap().to_string(), "north");
    assert_eq!(Hemisphere::from_str("SOUTH").unwrap().to_string(), "south");

    for invalid in ["n", "s", "noth", "soth", "1", "-1", ""] {
        let err = Hemisphere::from_str(invalid).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidHemisphere(value) if value == invalid),
            "{invalid:?} should not parse",
        );
    }
}

#[test]
fn grid_size_validation() {
    for (value, expected) in [
        (6.25, GridSize::Km6_25),
        (12.5, GridSize::Km12_5),
        (25.0, GridSize::Km25),
    ] {
        let grid_size = GridSize::try_from(value).unwrap();
        assert_eq!(grid_size, expected);
        assert_eq!(grid_size.km(), value);
    }

    for invalid in [1.0, 400.0, -1.0, 6.26, 0.0] {
        let err = GridSize::try_from(invalid).unwrap_err();
        assert!(matches!(err, Error::InvalidGridSize(value) if value == invalid));
    }
}

// Batch entry points must produce exactly the same outputs as the
// equivalent sequence of scalar calls, in the same order.
#[test]
fn batch_matches_scalar() {
    let proj = PolarStereographic::nsidc();

    let points = [
        PolarXy::new(0., 0.),
        PolarXy::new(3743.75, -230.),
        PolarXy::new(-1000., 2500.5),
        PolarXy::new(12.25, -3843.75),
    ];

    for hemisphere in [Hemisphere::North, Hemisphere::South] {
        let batch = proj.to_lonlat_batch(hemisphere, &points);
        assert_eq!(batch.len(), points.len());
        for (point, coord) in points.iter().zip(&batch) {
            let scalar = proj.to_lonlat(hemisphere, point.x(), point.y());
            assert_eq!(coord.longitude(), scalar.longitude());
            assert_eq!(coord.latitude(), scalar.latitude());
        }

        let back = proj.from_lonlat_batch(hemisphere, &batch);
        for (coord, xy) in batch.iter().zip(&back) {
            let scalar = proj.from_lonlat(hemisphere, coord.longitude(), coord.latitude());
            assert_eq!(xy.x(), scalar.x());
            assert_eq!(xy.y(), scalar.y());
        }
    }

    let indices = (1..20)
        .map(|n| GridIndex::new(n * 3, n * 7))
        .collect::<Vec<_>>();
    let coords = GridIndex::to_lonlat_batch(&indices, GridSize::Km25, Hemisphere::South).unwrap();
    for (index, coord) in indices.iter().zip(&coords) {
        let scalar = index.to_lonlat(GridSize::Km25, Hemisphere::South).unwrap();
        assert_eq!(coord.longitude(), scalar.longitude());
        assert_eq!(coord.latitude(), scalar.latitude());
    }

    let back = GridIndex::from_lonlat_batch(&coords, GridSize::Km25, Hemisphere::South);
    assert_eq!(back, indices);
}
