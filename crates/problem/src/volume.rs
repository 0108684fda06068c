use crate::params::ParameterMap;
use crate::problem::{Problem, ProblemError, format_value};
use crate::surface::Surface;

const LENGTH: &str = "length";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";

/// Volume of a rectangular prism: `length * width * height`.
#[derive(Debug, Clone)]
pub struct RectangularVolumeProblem {
    parameters: ParameterMap,
    result: Option<f64>,
}

impl RectangularVolumeProblem {
    pub const NAME: &'static str = "Rectangular Volume";

    /// All sides default to `1.0`.
    pub fn new() -> Self {
        Self {
            parameters: ParameterMap::from_pairs([
                (LENGTH, 1.0),
                (WIDTH, 1.0),
                (HEIGHT, 1.0),
            ]),
            result: None,
        }
    }

    /// Volume from the last calculation, if any.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    fn side(&self, name: &str) -> Result<f64, ProblemError> {
        self.parameters
            .get(name)
            .ok_or_else(|| ProblemError::MissingParameter(name.to_string()))
    }
}

impl Default for RectangularVolumeProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for RectangularVolumeProblem {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn parameters(&self) -> &ParameterMap {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterMap {
        &mut self.parameters
    }

    fn calculate_result(&mut self) -> Result<(), ProblemError> {
        let volume =
            self.side(LENGTH)? * self.side(WIDTH)? * self.side(HEIGHT)?;
        self.result = Some(volume);
        Ok(())
    }

    fn plot_result(&self, surface: &mut Surface) {
        if let Some(volume) = self.result {
            surface.bar_chart([("Volume", volume)]);
            surface.set_y_label("Volume");
            surface.set_y_bottom(0.0);
        }
    }

    fn text_result(&self) -> Result<String, ProblemError> {
        self.result
            .map(|volume| format!("Volume = {}", format_value(volume)))
            .ok_or_else(|| ProblemError::ResultUnavailable {
                problem: Self::NAME.to_string(),
            })
    }
}
