//! Anti-dilution refixing schedule.

use mezz_instruments::{AntiDilution, ConvertibleTerms};
use tracing::warn;

use crate::config::EngineConfig;
use crate::grid::TimeGrid;

/// The pre-computed effective conversion price and ratio per step.
///
/// Reset events carry calendar dates independent of the share-price path,
/// so the schedule is a deterministic vector over steps, never
/// node-level state.
#[derive(Debug, Clone)]
pub struct RefixingSchedule {
    cp_eff: Vec<f64>,
    ratio: Vec<f64>,
}

impl RefixingSchedule {
    /// Sweeps the reset events across the grid and pre-computes
    /// `cp_eff[t]` and the conversion ratio for every step.
    ///
    /// An event applies at the first step whose date is on or after the
    /// event date. Each event may only lower the current conversion
    /// price; the floor clamps from below after every application.
    #[must_use]
    pub fn build(
        terms: &ConvertibleTerms,
        per_share: bool,
        grid: &TimeGrid,
        config: &EngineConfig,
    ) -> Self {
        let n_points = grid.points().len();
        let face_per_unit = terms.unit_face(per_share);

        let mut events: Vec<_> = terms.reset_events.iter().collect();
        events.sort_by_key(|e| e.date);

        let mut cp_eff = Vec::with_capacity(n_points);
        let mut current_cp = terms.initial_conversion_price;
        let mut next_event = 0;

        for point in grid.points() {
            while next_event < events.len() && events[next_event].date <= point.date {
                let event = events[next_event];
                next_event += 1;

                if event.new_price >= current_cp {
                    continue;
                }

                match terms.anti_dilution {
                    AntiDilution::None => {}
                    AntiDilution::FullRatchet => {
                        current_cp = event.new_price;
                    }
                    AntiDilution::WaDownOnly => {
                        let so = event.shares_outstanding_before.unwrap_or_else(|| {
                            warn!(
                                event_date = %event.date,
                                fallback = config.wa_fallback_shares,
                                "reset event omits shares_outstanding_before; using fallback"
                            );
                            config.wa_fallback_shares
                        });
                        let ratio = event.new_price / current_cp;
                        current_cp = current_cp * (so + ratio * event.new_shares)
                            / (so + event.new_shares);
                    }
                }

                if let Some(floor) = terms.refixing_floor {
                    current_cp = current_cp.max(floor);
                }
            }
            cp_eff.push(current_cp);
        }

        let ratio = cp_eff
            .iter()
            .map(|&cp| match terms.conversion_ratio_override {
                Some(explicit) if terms.anti_dilution == AntiDilution::None => explicit,
                _ => face_per_unit / cp,
            })
            .collect();

        Self { cp_eff, ratio }
    }

    /// Effective conversion price at a step.
    #[must_use]
    pub fn conversion_price(&self, step: usize) -> f64 {
        self.cp_eff[step]
    }

    /// Effective conversion ratio (shares per unit) at a step.
    #[must_use]
    pub fn ratio(&self, step: usize) -> f64 {
        self.ratio[step]
    }

    /// The conversion price in force at the final step.
    #[must_use]
    pub fn final_conversion_price(&self) -> f64 {
        self.cp_eff[self.cp_eff.len() - 1]
    }
}
