//! Security pricing dispatch.

use mezz_instruments::{Position, Security};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::eso::price_eso;
use crate::result::PricingResult;
use crate::tf::price_convertible;

/// Prices a single security for the given reported side.
///
/// Dispatches on the security variant: RCPS/CB/CPS go through the
/// two-leg convertible engine, ESO through the single-leg option engine.
/// The engine values the long position; `position` applies the sign once
/// in the result.
///
/// # Errors
///
/// Propagates the boundary rejection from `Security::check` for
/// structurally unusable input: non-finite or non-positive spot, a
/// per-share instrument without shares, or a non-positive conversion
/// price or strike. Every other degenerate input (maturity before
/// valuation, missing rate arrays, zero volatility) is handled by
/// documented fallbacks.
pub fn price_security(
    security: &Security,
    position: Position,
    config: &EngineConfig,
) -> EngineResult<PricingResult> {
    security.check()?;

    debug!(kind = security.kind(), "pricing security");

    match security {
        Security::Rcps(terms) | Security::Cps(terms) | Security::Cb(terms) => {
            Ok(price_convertible(security.kind(), terms, position, config))
        }
        Security::Eso(terms) => Ok(price_eso(terms, position, config)),
    }
}
