//! The weekly valuation time grid.

use mezz_core::daycounts::{Act365Fixed, DayCount};
use mezz_core::Date;
use serde::{Deserialize, Serialize};

/// One point of the time grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridPoint {
    /// Step index, starting at 0 on the valuation date.
    pub step: usize,

    /// Calendar date of the step.
    pub date: Date,

    /// ACT/365F year fraction from the valuation date.
    pub years: f64,
}

/// The step schedule from valuation to maturity.
///
/// Nodes are emitted every 7 calendar days strictly before maturity; the
/// final node is pinned to the maturity date with its true year fraction,
/// producing a possibly-short terminal stub. The lattice itself uses the
/// uniform `dt = T / N`; grid dates drive calendar logic (option windows,
/// vesting, reset events).
///
/// Maturity on or before valuation yields a degenerate two-point grid
/// (`dt ≈ 0.0027`); engines detect this and return an all-zero result
/// carrying meta only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeGrid {
    points: Vec<GridPoint>,
    degenerate: bool,
}

impl TimeGrid {
    /// Builds the weekly grid between two dates.
    #[must_use]
    pub fn weekly(valuation: Date, maturity: Date) -> Self {
        let dc = Act365Fixed;

        if maturity <= valuation {
            let next = valuation.add_days(1);
            return Self {
                points: vec![
                    GridPoint {
                        step: 0,
                        date: valuation,
                        years: 0.0,
                    },
                    GridPoint {
                        step: 1,
                        date: next,
                        years: dc.year_fraction(valuation, next),
                    },
                ],
                degenerate: true,
            };
        }

        let mut points = Vec::new();
        let mut date = valuation;
        let mut step = 0;
        while date < maturity {
            points.push(GridPoint {
                step,
                date,
                years: dc.year_fraction(valuation, date),
            });
            date = date.add_days(7);
            step += 1;
        }
        points.push(GridPoint {
            step,
            date: maturity,
            years: dc.year_fraction(valuation, maturity),
        });

        Self {
            points,
            degenerate: false,
        }
    }

    /// Number of steps `N` (one less than the number of grid points).
    #[must_use]
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Horizon `T` in years: the year fraction of the final point.
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.points[self.points.len() - 1].years
    }

    /// Uniform lattice step `dt = T / N`.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.horizon() / self.n_steps() as f64
    }

    /// Calendar date at a step.
    #[must_use]
    pub fn date_at(&self, step: usize) -> Date {
        self.points[step].date
    }

    /// All grid points, ordered by step.
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// True when maturity was on or before valuation.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}
