//! Command handlers for the `spacefill` CLI.
//!
//! Handlers write their results to a caller-supplied writer so they can be
//! exercised without spawning the binary.

use std::{io::Write, ops::Range, str::FromStr};

use anyhow::{Context, Result, anyhow, bail, ensure};
use num_traits::cast;
use spacefill::{
    SpaceFilling, curve_from_name, curve64_from_name, error::Error, registry, spec::GridIndex,
    walk, walk_range,
};

/// Largest side rendered by `grid`.
const MAX_GRID_SIDE: u64 = 243;
/// Largest cell count checked by `verify`.
const MAX_VERIFY_CELLS: u64 = 1 << 26;

/// A curve at either index width.
#[derive(Debug)]
pub enum Curve {
    /// Signed 32-bit indices.
    Narrow(Box<dyn SpaceFilling<Index = i32>>),
    /// Unsigned 64-bit indices.
    Wide(Box<dyn SpaceFilling<Index = u64>>),
}

/// Run `$body` with `$c` bound to the inner curve, whatever its width.
macro_rules! with_curve {
    ($curve:expr, |$c:ident| $body:expr) => {
        match $curve {
            Curve::Narrow($c) => $body,
            Curve::Wide($c) => $body,
        }
    };
}

impl Curve {
    /// Build the named curve for a `size`×`size` grid.
    pub fn open(name: &str, size: u64, wide: bool) -> Result<Self> {
        let curve = if wide {
            Self::Wide(curve64_from_name(name, size)?)
        } else {
            let size = narrow(size, "size")?;
            Self::Narrow(curve_from_name(name, size)?)
        };
        Ok(curve)
    }

    /// One-line description used for diagnostics.
    pub fn describe(&self) -> String {
        with_curve!(self, |c| {
            let (width, height) = c.dimensions();
            format!(
                "{} {width}x{height} ({} cells, {}-bit indices)",
                c.name(),
                c.length(),
                if matches!(self, Self::Wide(_)) { 64 } else { 32 }
            )
        })
    }
}

/// Convert a command-line value into the curve's index type.
fn narrow<I: GridIndex>(value: u64, what: &str) -> Result<I> {
    cast(value).ok_or_else(|| anyhow!("{what} {value} does not fit a 32-bit index; try --wide"))
}

/// Convert an index-typed value back to `u64` for bookkeeping.
fn widen<I: GridIndex>(value: I) -> Result<u64> {
    value
        .to_u64()
        .ok_or_else(|| anyhow!("unexpected negative value {value}"))
}

/// Span of curve steps selected with `--chunk START:END`.
///
/// A missing bound means the start or the end of the curve. Whether the end
/// fits is only known once the curve is open, see [`StepSpan::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpan {
    /// First step printed.
    first: Option<u64>,
    /// Step after the last one printed.
    end: Option<u64>,
}

impl StepSpan {
    /// Bind the span to a curve of `length` cells.
    pub fn resolve(self, length: u64) -> Result<Range<u64>> {
        let first = self.first.unwrap_or(0);
        let end = self.end.unwrap_or(length);
        ensure!(
            end <= length,
            "chunk ends at step {end}, but the curve has only {length} steps"
        );
        ensure!(
            first < end,
            "chunk {first}:{end} selects no steps of a {length}-step curve"
        );
        Ok(first..end)
    }
}

impl FromStr for StepSpan {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (first, end) = value
            .split_once(':')
            .ok_or_else(|| format!("chunk '{value}' is not a step span like 16:32, 16: or :32"))?;

        let step = |label: &str, bound: &str| -> Result<Option<u64>, String> {
            let bound = bound.trim();
            if bound.is_empty() {
                return Ok(None);
            }
            bound
                .parse()
                .map(Some)
                .map_err(|_| format!("{label} step '{bound}' is not a curve index"))
        };

        let span = Self {
            first: step("first", first)?,
            end: step("end", end)?,
        };
        match (span.first, span.end) {
            (Some(first), Some(end)) if first >= end => {
                Err(format!("chunk {first}:{end} selects no steps"))
            }
            _ => Ok(span),
        }
    }
}

/// Print the cell visited at step `t`.
pub fn map(curve: &Curve, t: u64, out: &mut dyn Write) -> Result<()> {
    with_curve!(curve, |c| {
        let (x, y) = c
            .map(narrow(t, "index")?)
            .with_context(|| format!("cannot map index {t}"))?;
        writeln!(out, "{x} {y}")?;
    });
    Ok(())
}

/// Print the step at which `(x, y)` is visited.
pub fn inverse(curve: &Curve, x: u64, y: u64, out: &mut dyn Write) -> Result<()> {
    with_curve!(curve, |c| {
        let t = c
            .map_inverse(narrow(x, "x")?, narrow(y, "y")?)
            .with_context(|| format!("cannot map point ({x}, {y})"))?;
        writeln!(out, "{t}")?;
    });
    Ok(())
}

/// Print `t x y` for every step in `chunk`, or the whole curve.
pub fn walk_steps(curve: &Curve, chunk: Option<StepSpan>, out: &mut dyn Write) -> Result<()> {
    with_curve!(curve, |c| {
        let steps = match chunk {
            Some(span) => {
                let range = span.resolve(widen(c.length())?)?;
                walk_range(c.as_ref(), narrow(range.start, "start")?..narrow(range.end, "end")?)
            }
            None => walk(c.as_ref()),
        };
        for (t, (x, y)) in steps {
            writeln!(out, "{t} {x} {y}")?;
        }
    });
    Ok(())
}

/// Print the grid as a table of step numbers, one row per `y`.
pub fn grid(curve: &Curve, out: &mut dyn Write) -> Result<()> {
    with_curve!(curve, |c| {
        let side = widen(c.dimensions().0)?;
        if side > MAX_GRID_SIDE {
            bail!("grid output is limited to {MAX_GRID_SIDE}x{MAX_GRID_SIDE}; got {side}x{side}");
        }
        let side = side as usize;
        let mut cells = vec![0u64; side * side];
        for (t, (x, y)) in walk(c.as_ref()) {
            cells[widen(y)? as usize * side + widen(x)? as usize] = widen(t)?;
        }

        let width = (side * side).saturating_sub(1).to_string().len();
        for row in cells.chunks(side) {
            let line: Vec<String> = row.iter().map(|t| format!("{t:>width$}")).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
    });
    Ok(())
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Steps whose successor is not a grid neighbour.
    pub jumps: u64,
    /// Whether the inverse mapping was checked.
    pub inverse_checked: bool,
}

/// Check that the curve visits every cell once, and that the inverse mapping
/// (when available) undoes it.
pub fn verify(curve: &Curve, out: &mut dyn Write) -> Result<Report> {
    let report = with_curve!(curve, |c| {
        let length = widen(c.length())?;
        if length > MAX_VERIFY_CELLS {
            bail!("verify is limited to {MAX_VERIFY_CELLS} cells; curve has {length}");
        }
        let side = widen(c.dimensions().0)?;
        let mut seen = vec![false; length as usize];
        let mut inverse_checked = true;
        let mut jumps = 0;
        let mut previous: Option<(u64, u64)> = None;

        for (t, (x, y)) in walk(c.as_ref()) {
            let (wx, wy) = (widen(x)?, widen(y)?);
            ensure!(wx < side && wy < side, "step {t} left the grid at ({x}, {y})");
            let slot = &mut seen[(wy * side + wx) as usize];
            ensure!(!*slot, "cell ({x}, {y}) visited twice (again at step {t})");
            *slot = true;

            if inverse_checked {
                match c.map_inverse(x, y) {
                    Ok(back) => {
                        ensure!(back == t, "map_inverse({x}, {y}) = {back}, expected {t}");
                    }
                    Err(Error::Unimplemented(_)) => inverse_checked = false,
                    Err(e) => return Err(e.into()),
                }
            }

            if previous.is_some_and(|(px, py)| px.abs_diff(wx) + py.abs_diff(wy) != 1) {
                jumps += 1;
            }
            previous = Some((wx, wy));
        }

        ensure!(seen.iter().all(|&s| s), "curve skipped some cells");
        Report {
            jumps,
            inverse_checked,
        }
    });

    writeln!(out, "coverage: ok")?;
    if report.inverse_checked {
        writeln!(out, "round trip: ok")?;
    } else {
        writeln!(out, "round trip: skipped (no inverse mapping)")?;
    }
    if report.jumps == 0 {
        writeln!(out, "continuity: ok")?;
    } else {
        writeln!(out, "continuity: {} jumps", report.jumps)?;
    }
    Ok(report)
}

/// Print the registry.
pub fn list_curves(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Supported curves (key — display — constraints):")?;
    for entry in registry::REGISTRY {
        writeln!(
            out,
            "- {} — {} — {}",
            entry.key, entry.display, entry.constraints
        )?;
    }
    Ok(())
}
