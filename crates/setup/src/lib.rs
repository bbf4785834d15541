//! # stsm-setup
//!
//! Input validation and model-string compilation for univariate structural
//! time-series models (trend, cycle, seasonal, irregular).
//!
//! [`setup`] turns a raw series, a frequency and [`ModelOptions`] into a
//! [`ModelRequest`]: the trimmed series, the input matrix in canonical
//! orientation, the resolved periods and horizon, and the canonical
//! [`Descriptor`]. Estimation, filtering and forecasting consume the request;
//! none of them happen here.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["ModelOptions::validate()"] --> B["derive_periods()"]
//!     A --> C["preprocess()"]
//!     B --> D["normalize()"]
//!     C --> D
//!     D --> E["ModelRequest"]
//! ```
//!
//! ## Model strings
//!
//! | Input | Canonical | Why |
//! |-------|-----------|-----|
//! | `llt/equal/arma` | `llt/none/equal/arma(0,0)` | shorthand, default ARMA order |
//! | `llt/12/equal/none` | `llt/+12/equal/none` | bare cycle period is fixed |
//! | `?/?/?/?` (quarterly) | `?/-16?/?/?` | cycle search from 4x the fundamental |
//! | `rw/equal/none` (annual) | `rw/none/none/none` | no seasonal for period 1 |

mod descriptor;
mod error;
mod options;
mod periods;
mod request;
mod series;
mod setup;

pub use descriptor::{DEFAULT_HORIZON, Descriptor, Normalized, normalize};
pub use error::SetupError;
pub use options::{Criterion, DEFAULT_MODEL, ModelOptions, OptionRule, SCHEMA};
pub use periods::derive_periods;
pub use request::{Bookkeeping, ModelRequest};
pub use series::{Preprocessed, has_regressors, preprocess};
pub use setup::setup;
