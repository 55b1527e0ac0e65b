//! Liquidity screening for option quote series.
//!
//! A quote series is a bid column, an ask column and an option-type column
//! of equal length. Each [`LiquidityCondition`] is a named predicate over
//! the whole series; a [`LiquidityChecker`] runs a chosen list of them in
//! order and stops at the first failure.
//!
//! Mixed call/put series are a data problem rather than a liquidity one.
//! In strict mode they abort the check with
//! [`LiquidityError::MixedOptionType`]; otherwise they are reported as a
//! failed verdict like any other condition.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LiquidityError {
    /// Bid, ask and type columns must have one entry per quote.
    LengthMismatch {
        bids: usize,
        asks: usize,
        kinds: usize,
    },
    /// The series mixes calls and puts.
    MixedOptionType { first: OptionKind, index: usize },
    /// A condition name that no predicate answers to.
    UnknownCondition(String),
}

impl fmt::Display for LiquidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidityError::LengthMismatch { bids, asks, kinds } => write!(
                f,
                "quote columns differ in length: bids={bids} asks={asks} types={kinds}"
            ),
            LiquidityError::MixedOptionType { first, index } => write!(
                f,
                "mixed option types: series starts as {first} but quote {index} differs"
            ),
            LiquidityError::UnknownCondition(name) => {
                write!(f, "unknown liquidity condition '{name}'")
            }
        }
    }
}

impl std::error::Error for LiquidityError {}

// ---------------------------------------------------------------------------
// Quote data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// `C` / `P`, case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "C" | "c" => Some(OptionKind::Call),
            "P" | "p" => Some(OptionKind::Put),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a bid / ask / option-type series.
///
/// Anything that can hand out the three columns can be screened; the
/// checker never needs ownership.
pub trait QuoteSeries {
    fn bids(&self) -> &[f64];
    fn asks(&self) -> &[f64];
    fn kinds(&self) -> &[OptionKind];

    fn len(&self) -> usize {
        self.bids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned quote series with columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionQuotes {
    bids: Vec<f64>,
    asks: Vec<f64>,
    kinds: Vec<OptionKind>,
}

impl OptionQuotes {
    pub fn new(
        bids: Vec<f64>,
        asks: Vec<f64>,
        kinds: Vec<OptionKind>,
    ) -> Result<Self, LiquidityError> {
        if bids.len() != asks.len() || bids.len() != kinds.len() {
            return Err(LiquidityError::LengthMismatch {
                bids: bids.len(),
                asks: asks.len(),
                kinds: kinds.len(),
            });
        }
        Ok(Self { bids, asks, kinds })
    }
}

impl QuoteSeries for OptionQuotes {
    fn bids(&self) -> &[f64] {
        &self.bids
    }

    fn asks(&self) -> &[f64] {
        &self.asks
    }

    fn kinds(&self) -> &[OptionKind] {
        &self.kinds
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Passes when no bid is zero.
pub fn zero_bid_ok<Q: QuoteSeries + ?Sized>(q: &Q) -> bool {
    !q.bids().iter().any(|b| *b == 0.0)
}

/// Passes when no ask is zero.
pub fn zero_ask_ok<Q: QuoteSeries + ?Sized>(q: &Q) -> bool {
    !q.asks().iter().any(|a| *a == 0.0)
}

/// Passes when the mid price `(bid + ask) / 2` moves at least once.
///
/// A series with fewer than two quotes has no moves and counts as stale.
pub fn prices_not_stale<Q: QuoteSeries + ?Sized>(q: &Q) -> bool {
    let mids: Vec<f64> = q
        .bids()
        .iter()
        .zip(q.asks())
        .map(|(b, a)| (b + a) / 2.0)
        .collect();
    mids.windows(2).any(|w| w[1] - w[0] != 0.0)
}

/// Passes when every quote is a put. An empty series passes vacuously.
pub fn is_put<Q: QuoteSeries + ?Sized>(q: &Q) -> bool {
    q.kinds().iter().all(|k| *k == OptionKind::Put)
}

/// Every quote must share the first quote's option type.
pub fn assert_single_option_type<Q: QuoteSeries + ?Sized>(q: &Q) -> Result<(), LiquidityError> {
    let Some(&first) = q.kinds().first() else {
        return Ok(());
    };
    match q.kinds().iter().position(|k| *k != first) {
        Some(index) => Err(LiquidityError::MixedOptionType { first, index }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityCondition {
    ZeroBid,
    ZeroAsk,
    StalePrices,
    IsPut,
}

impl LiquidityCondition {
    pub const ALL: [LiquidityCondition; 4] = [
        LiquidityCondition::ZeroBid,
        LiquidityCondition::ZeroAsk,
        LiquidityCondition::StalePrices,
        LiquidityCondition::IsPut,
    ];

    /// Config / report name.
    pub fn name(self) -> &'static str {
        match self {
            LiquidityCondition::ZeroBid => "zero_bid",
            LiquidityCondition::ZeroAsk => "zero_ask",
            LiquidityCondition::StalePrices => "stale_prices",
            LiquidityCondition::IsPut => "is_put",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, LiquidityError> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| LiquidityError::UnknownCondition(name.to_string()))
    }

    /// Short human label used in diagnostics.
    pub fn failure_label(self) -> &'static str {
        match self {
            LiquidityCondition::ZeroBid => "zero bid",
            LiquidityCondition::ZeroAsk => "zero ask",
            LiquidityCondition::StalePrices => "stale prices",
            LiquidityCondition::IsPut => "call",
        }
    }

    pub fn check<Q: QuoteSeries + ?Sized>(self, q: &Q) -> bool {
        match self {
            LiquidityCondition::ZeroBid => zero_bid_ok(q),
            LiquidityCondition::ZeroAsk => zero_ask_ok(q),
            LiquidityCondition::StalePrices => prices_not_stale(q),
            LiquidityCondition::IsPut => is_put(q),
        }
    }
}

impl fmt::Display for LiquidityCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Checker
// ---------------------------------------------------------------------------

/// Why a series was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiquidityFailure {
    Condition { condition: LiquidityCondition },
    MixedOptionType { first: OptionKind, index: usize },
}

impl fmt::Display for LiquidityFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidityFailure::Condition { condition } => {
                write!(f, "{} ({})", condition.name(), condition.failure_label())
            }
            LiquidityFailure::MixedOptionType { first, index } => {
                write!(f, "mixed option types (first={first}, differs at {index})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum LiquidityVerdict {
    Accepted,
    Rejected { failure: LiquidityFailure },
}

impl LiquidityVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LiquidityVerdict::Accepted)
    }
}

impl fmt::Display for LiquidityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidityVerdict::Accepted => f.write_str("accepted"),
            LiquidityVerdict::Rejected { failure } => write!(f, "rejected: {failure}"),
        }
    }
}

/// Runs an ordered list of conditions over a quote series.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityChecker {
    conditions: Vec<LiquidityCondition>,
    strict: bool,
}

impl Default for LiquidityChecker {
    /// Zero bid, zero ask and stale prices; lenient on mixed types.
    fn default() -> Self {
        Self {
            conditions: vec![
                LiquidityCondition::ZeroBid,
                LiquidityCondition::ZeroAsk,
                LiquidityCondition::StalePrices,
            ],
            strict: false,
        }
    }
}

impl LiquidityChecker {
    pub fn with_conditions(conditions: Vec<LiquidityCondition>) -> Self {
        Self {
            conditions,
            strict: false,
        }
    }

    /// Build from config names, rejecting unknown ones.
    pub fn from_names<S: AsRef<str>>(names: &[S], strict: bool) -> Result<Self, LiquidityError> {
        let conditions = names
            .iter()
            .map(|n| LiquidityCondition::from_name(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            conditions,
            strict,
        })
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn conditions(&self) -> &[LiquidityCondition] {
        &self.conditions
    }

    /// Every configured condition with its outcome, evaluated lazily in
    /// configured order.
    pub fn condition_results<'a, Q: QuoteSeries + ?Sized>(
        &'a self,
        q: &'a Q,
    ) -> impl Iterator<Item = (LiquidityCondition, bool)> + 'a {
        self.conditions.iter().map(move |c| (*c, c.check(q)))
    }

    /// Screen `q`. Stops at the first failing condition.
    ///
    /// Strict mode turns a mixed call/put series into an error instead of a
    /// rejection.
    pub fn evaluate<Q: QuoteSeries + ?Sized>(&self, q: &Q) -> Result<LiquidityVerdict, LiquidityError> {
        if let Err(err) = assert_single_option_type(q) {
            if self.strict {
                warn!(error = %err, "quote series failed option type check");
                return Err(err);
            }
            let LiquidityError::MixedOptionType { first, index } = err else {
                return Err(err);
            };
            debug!(first = %first, index, "rejected: mixed option types");
            return Ok(LiquidityVerdict::Rejected {
                failure: LiquidityFailure::MixedOptionType { first, index },
            });
        }

        let first_failure = self
            .condition_results(q)
            .inspect(|(condition, passed)| {
                debug!(condition = condition.name(), passed, "liquidity condition");
            })
            .find(|(_, passed)| !passed);

        if let Some((condition, _)) = first_failure {
            debug!(
                condition = condition.name(),
                label = condition.failure_label(),
                quotes = q.len(),
                "rejected"
            );
            return Ok(LiquidityVerdict::Rejected {
                failure: LiquidityFailure::Condition { condition },
            });
        }

        debug!(quotes = q.len(), "accepted");
        Ok(LiquidityVerdict::Accepted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
