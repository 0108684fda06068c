use std::fmt;

use crate::params::{ParameterError, ParameterMap};
use crate::surface::Surface;

/// A named, parameterized computation that can be driven by a generic
/// form: compute a result, draw it, describe it as text.
pub trait Problem {
    fn name(&self) -> &str;

    fn parameters(&self) -> &ParameterMap;

    /// Values may be changed through the returned map, names may not.
    fn parameters_mut(&mut self) -> &mut ParameterMap;

    /// Compute the result from the current parameters and store it.
    /// Calling it again with unchanged parameters yields the same result.
    fn calculate_result(&mut self) -> Result<(), ProblemError>;

    /// Draw the current result. The surface is cleared by the caller.
    fn plot_result(&self, _surface: &mut Surface) {}

    /// Human-readable summary of the current result.
    fn text_result(&self) -> Result<String, ProblemError>;

    /// `"<name> with parameters: k1=v1, k2=v2"`
    fn describe(&self) -> String {
        format!("{} with parameters: {}", self.name(), self.parameters())
    }
}

impl fmt::Display for dyn Problem + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for dyn Problem + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("name", &self.name())
            .field("parameters", self.parameters())
            .finish()
    }
}

/// Shortest round-trip form of `value`, keeping `.0` on integral values.
///
/// Very large or small magnitudes use a signed two-digit exponent
/// (`1e+20`, `1e-07`) and NaN prints as `nan`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("{problem}: result requested before it was calculated")]
    ResultUnavailable { problem: String },
    #[error("missing parameter `{0}`")]
    MissingParameter(String),
    #[error("calculation failed: {0}")]
    Calculation(String),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}
