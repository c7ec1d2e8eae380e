//! Integration tests checking coverage and continuity of every registered curve.
#[cfg(test)]
mod tests {
    use std::{collections::HashSet, thread};

    use spacefill::{
        SpaceFilling, curve_from_name, curve64_from_name,
        curves::{hilbert::Hilbert, peano::Peano},
        error::{self, Error},
        registry, walk,
    };

    /// Every cell is visited exactly once and stays on the grid.
    fn pattern_covers(pattern_name: &str, p: &dyn SpaceFilling<Index = i32>) {
        let (width, height) = p.dimensions();
        assert_eq!(width, height, "Pattern {pattern_name} is not square");
        assert_eq!(p.length(), width * height);

        let mut seen = HashSet::new();
        for (t, (x, y)) in walk(p) {
            assert!(
                (0..width).contains(&x) && (0..height).contains(&y),
                "Pattern {pattern_name} left the grid at {t}: ({x}, {y})"
            );
            assert!(
                seen.insert((x, y)),
                "Pattern {pattern_name} revisits ({x}, {y}) at {t}"
            );
        }
        assert_eq!(seen.len() as i32, p.length());
    }

    /// Consecutive steps land on grid neighbours.
    fn pattern_continuous(pattern_name: &str, p: &dyn SpaceFilling<Index = i32>) {
        let points: Vec<_> = walk(p).map(|(_, point)| point).collect();
        for (off, pair) in points.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            let distance = (a.0 - b.0).abs() + (a.1 - b.1).abs();
            assert_eq!(
                distance, 1,
                "Pattern {pattern_name} is discontinuous at offset {off}: {a:?} -> {b:?}"
            );
        }
    }

    macro_rules! curve_tests {
        ($(($pattern:ident, $size:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<$pattern _covers_ $size>]() -> error::Result<()> {
                        let curve = curve_from_name(stringify!($pattern), $size)?;
                        pattern_covers(&format!("{}({})", stringify!($pattern), $size), curve.as_ref());
                        Ok(())
                    }

                    #[test]
                    fn [<$pattern _continuous_ $size>]() -> error::Result<()> {
                        let curve = curve_from_name(stringify!($pattern), $size)?;
                        pattern_continuous(&format!("{}({})", stringify!($pattern), $size), curve.as_ref());
                        Ok(())
                    }
                }
            )*
        };
    }

    curve_tests! {
        (hilbert, 1),
        (hilbert, 2),
        (hilbert, 4),
        (hilbert, 16),
        (hilbert, 64),
        (peano, 1),
        (peano, 3),
        (peano, 9),
        (peano, 27),
        (peano, 81),
    }

    #[test]
    fn construction_errors() {
        for n in [-1, 0] {
            for name in registry::CURVE_NAMES {
                assert_eq!(registry::validate(name, n), Err(Error::NotPositive));
            }
        }
        for n in [3, 5, 6, 7] {
            assert_eq!(Hilbert::new(n), Err(Error::NotPowerOfTwo));
        }
        for n in [2, 4, 5, 8] {
            assert_eq!(Peano::new(n), Err(Error::NotPowerOfThree));
        }
        assert!(matches!(
            curve_from_name("moore", 4),
            Err(Error::UnknownCurve(name)) if name == "moore"
        ));
    }

    #[test]
    fn wide_registry_matches_narrow() -> error::Result<()> {
        for (name, size) in [("hilbert", 32), ("peano", 27)] {
            let narrow = curve_from_name(name, size)?;
            let wide = curve64_from_name(name, size as u64)?;
            assert_eq!(wide.name(), narrow.name());
            for (t, (x, y)) in walk(narrow.as_ref()) {
                assert_eq!(wide.map(t as u64)?, (x as u64, y as u64));
            }
        }
        Ok(())
    }

    #[test]
    fn shared_between_threads() -> error::Result<()> {
        let curve = Hilbert::new(64)?;
        let expected: Vec<_> = walk(&curve).collect();
        thread::scope(|s| {
            for chunk in expected.chunks(512) {
                let curve = &curve;
                s.spawn(move || {
                    for &(t, (x, y)) in chunk {
                        assert_eq!(curve.map(t), Ok((x, y)));
                        assert_eq!(curve.map_inverse(x, y), Ok(t));
                    }
                });
            }
        });
        Ok(())
    }

    #[test]
    fn peano_inverse_reports_gap() -> error::Result<()> {
        let curve = curve_from_name("peano", 9)?;
        assert_eq!(curve.map_inverse(4, 4), Err(Error::Unimplemented("Peano")));
        assert_eq!(curve.map_inverse(9, 4), Err(Error::OutOfRange));
        let wide = curve64_from_name("peano", 9)?;
        assert_eq!(wide.map_inverse(4, 4), Err(Error::Unimplemented("Peano")));
        Ok(())
    }
}
