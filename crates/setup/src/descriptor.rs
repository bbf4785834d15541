//! Model descriptor compilation.
//!
//! A model string names four structural components separated by slashes,
//! `trend/cycle/seasonal/irregular`. Callers may use shorter layouts and
//! shorthand inside each slot; [`normalize`] compiles any accepted form into
//! one canonical [`Descriptor`].
//!
//! | Layout | Meaning |
//! |--------|---------|
//! | `t/c/s/i` | full form |
//! | `t/s/i` | no cycle |
//! | `t/i` | no cycle, no seasonal |
//!
//! Cycle slot forms after normalization:
//!
//! | Slot | Meaning |
//! |------|---------|
//! | `none` | no cycle |
//! | `+P` | cycle with fixed period `P` |
//! | `-P` | cycle with period estimated from starting guess `P` |
//! | `-P?` | cycle search from guess `P`, existence itself identified |

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::SetupError;
use crate::options::check_horizon;

/// Horizon used when neither the caller nor the input matrix sets one.
pub const DEFAULT_HORIZON: usize = 18;

const NONE: &str = "none";
const WILDCARD: char = '?';

/// Canonical four-slot model descriptor.
///
/// Displays (and serializes) as `trend/cycle/seasonal/irregular`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    trend: String,
    cycle: String,
    seasonal: String,
    irregular: String,
}

impl Descriptor {
    /// Splits a raw model string into typed slots.
    ///
    /// Missing slots of the 3- and 2-token layouts become `none`, as do
    /// blank slots. No case folding or slot rewriting happens here.
    ///
    /// # Errors
    ///
    /// [`SetupError::InvalidArgument`] when the string does not have 2 to 4
    /// slash-separated tokens.
    pub fn parse(model: &str) -> Result<Self, SetupError> {
        let tokens: Vec<String> = model
            .split('/')
            .map(|t| match t.trim() {
                "" => NONE.to_string(),
                t => t.to_string(),
            })
            .collect();

        let (trend, cycle, seasonal, irregular) = match <[String; 4]>::try_from(tokens) {
            Ok([t, c, s, i]) => (t, c, s, i),
            Err(tokens) => match tokens.as_slice() {
                [t, s, i] => (t.clone(), NONE.to_string(), s.clone(), i.clone()),
                [t, i] => (t.clone(), NONE.to_string(), NONE.to_string(), i.clone()),
                _ => {
                    return Err(SetupError::InvalidArgument {
                        name: "model",
                        reason: format!(
                            "expected 2 to 4 slash-separated components, got {} in {model:?}",
                            tokens.len()
                        ),
                    });
                }
            },
        };

        Ok(Self {
            trend,
            cycle,
            seasonal,
            irregular,
        })
    }

    /// Returns the trend slot.
    pub fn trend(&self) -> &str {
        &self.trend
    }

    /// Returns the cycle slot.
    pub fn cycle(&self) -> &str {
        &self.cycle
    }

    /// Returns the seasonal slot.
    pub fn seasonal(&self) -> &str {
        &self.seasonal
    }

    /// Returns the irregular slot.
    pub fn irregular(&self) -> &str {
        &self.irregular
    }

    /// Returns `true` if any slot requests identification search.
    pub fn has_wildcard(&self) -> bool {
        self.slots().iter().any(|s| s.contains(WILDCARD))
    }

    /// Returns `true` if no slot specifies a component or a search.
    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|s| *s == NONE)
    }

    fn slots(&self) -> [&str; 4] {
        [
            self.trend.as_str(),
            self.cycle.as_str(),
            self.seasonal.as_str(),
            self.irregular.as_str(),
        ]
    }

    fn slots_mut(&mut self) -> [&mut String; 4] {
        [
            &mut self.trend,
            &mut self.cycle,
            &mut self.seasonal,
            &mut self.irregular,
        ]
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.trend, self.cycle, self.seasonal, self.irregular
        )
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Canonical descriptor.
    pub descriptor: Descriptor,
    /// Per-period coefficient defaults, all ones.
    pub rhos: Vec<f64>,
    /// Resolved forecast horizon.
    pub h: usize,
    /// Fixed initial parameters, cleared when the model has a wildcard.
    pub p0: Option<Vec<f64>>,
    /// Fixed final parameters, cleared when the model has a wildcard.
    pub p: Option<Vec<f64>>,
}

/// Compiles a raw model string into its canonical form.
///
/// Steps, in order:
///
/// 1. parse into slots; a fundamental period of 1 forces seasonal to `none`
/// 2. missing cycle/seasonal slots become `none`
/// 3. lower-case every slot
/// 4. reject a model with nothing to fit or search
/// 5. a `?` anywhere discards `p0` and `p`
/// 6. complete ARMA orders: `arma` -> `arma(0,0)`, `arma(1,2` -> `arma(1,2)`
/// 7. default the horizon to [`DEFAULT_HORIZON`], truncating fractions and
///    rejecting negative or non-finite values
/// 8. canonicalise the cycle slot (see the module table)
///
/// `periods` must be non-empty; its first element is the fundamental period.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SetupError::InvalidArgument`] | wrong number of slots, or `h` negative or non-finite |
/// | [`SetupError::MissingConfiguration`] | `periods` is empty |
/// | [`SetupError::EmptyModel`] | every slot is `none` |
///
/// # Example
///
/// ```
/// use stsm_setup::normalize;
///
/// let out = normalize("LLT/equal/arma", &[12.0, 6.0], None, None, None).unwrap();
/// assert_eq!(out.descriptor.to_string(), "llt/none/equal/arma(0,0)");
/// assert_eq!(out.h, 18);
/// assert_eq!(out.rhos, vec![1.0, 1.0]);
/// ```
pub fn normalize(
    model: &str,
    periods: &[f64],
    h: Option<f64>,
    p0: Option<&[f64]>,
    p: Option<&[f64]>,
) -> Result<Normalized, SetupError> {
    let fundamental = *periods.first().ok_or(SetupError::MissingConfiguration)?;

    let mut descriptor = Descriptor::parse(model)?;
    if fundamental == 1.0 {
        descriptor.seasonal = NONE.to_string();
    }

    for slot in descriptor.slots_mut() {
        *slot = slot.to_lowercase();
    }

    if descriptor.is_empty() {
        return Err(SetupError::EmptyModel {
            model: descriptor.to_string(),
        });
    }

    let (p0, p) = if descriptor.has_wildcard() {
        if p0.is_some() || p.is_some() {
            debug!("model has wildcards, discarding fixed parameters");
        }
        (None, None)
    } else {
        (p0.map(<[f64]>::to_vec), p.map(<[f64]>::to_vec))
    };

    complete_arma_order(&mut descriptor.irregular);
    let h = resolve_horizon(h)?;
    descriptor.cycle = normalize_cycle(&descriptor.cycle, fundamental);

    debug!(%descriptor, h, "model normalized");
    Ok(Normalized {
        descriptor,
        rhos: vec![1.0; periods.len()],
        h,
        p0,
        p,
    })
}

fn complete_arma_order(irregular: &mut String) {
    if !irregular.contains("arma") {
        return;
    }
    if !irregular.contains('(') {
        irregular.push_str("(0,0)");
    }
    if !irregular.ends_with(')') {
        irregular.push(')');
    }
}

fn resolve_horizon(h: Option<f64>) -> Result<usize, SetupError> {
    let Some(h) = h else {
        return Ok(DEFAULT_HORIZON);
    };
    check_horizon(h).map_err(|reason| SetupError::InvalidArgument { name: "h", reason })?;
    let truncated = h.trunc();
    if truncated != h {
        warn!(requested = h, truncated, "non-integer horizon truncated");
    }
    Ok(truncated as usize)
}

fn normalize_cycle(cycle: &str, fundamental: f64) -> String {
    match cycle {
        NONE => cycle.to_string(),
        "?" => format!("{}{WILDCARD}", -4.0 * fundamental),
        c if c.starts_with(['+', '-']) => c.to_string(),
        c => format!("+{c}"),
    }
}
