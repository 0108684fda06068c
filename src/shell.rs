use crate::form::{Form, FormError};
use problem::{ParameterError, Problem, ProblemError, Surface};

/// Outcome of the most recent submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Form shows the problem's starting values, nothing computed yet.
    Idle,
    /// Last submit parsed and the display was refreshed.
    Computed,
    /// Last submit had a non-numeric field; nothing was changed.
    Rejected,
    /// Last submit was committed but the problem produced no result. The
    /// surface is blank and the text is from the last good cycle.
    Failed,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error(transparent)]
    InvalidInput(#[from] FormError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Drives one problem through a generic form: fields in, chart and text
/// out.
pub struct Shell {
    problem: Box<dyn Problem>,
    form: Form,
    surface: Surface,
    result_text: String,
    phase: Phase,
    error_message: Option<String>,
}

impl Shell {
    pub fn new(problem: Box<dyn Problem>) -> Self {
        let form = Form::build(problem.parameters());
        Self {
            problem,
            form,
            surface: Surface::new(),
            result_text: String::new(),
            phase: Phase::Idle,
            error_message: None,
        }
    }

    /// Regenerate the fields from the problem's current values.
    pub fn build_form(&mut self) {
        self.form = Form::build(self.problem.parameters());
    }

    pub fn set_field_text(
        &mut self,
        name: &str,
        text: impl Into<String>,
    ) -> bool {
        self.form.set_text(name, text)
    }

    /// Parse all fields, then commit them and refresh the display. If any
    /// field fails to parse nothing is touched.
    pub fn submit(&mut self) -> Result<(), ShellError> {
        let values = match self.form.parse_values() {
            Ok(values) => values,
            Err(err) => {
                if let FormError::InvalidNumber { fields } = &err {
                    tracing::warn!(?fields, "rejected non-numeric input");
                }
                self.phase = Phase::Rejected;
                return Err(err.into());
            }
        };
        let committed =
            match self.problem.parameters_mut().update_all(values) {
                Ok(()) => self.refresh_display().map_err(ShellError::from),
                Err(err) => Err(ShellError::from(err)),
            };
        if let Err(err) = committed {
            self.phase = Phase::Failed;
            return Err(err);
        }
        self.phase = Phase::Computed;

        let parameters = serde_json::to_string(self.problem.parameters())
            .unwrap_or_default();
        tracing::info!(
            problem = self.problem.name(),
            %parameters,
            "submit cycle completed"
        );
        Ok(())
    }

    /// Clear the surface, recompute, redraw and replace the result text.
    pub fn refresh_display(&mut self) -> Result<(), ProblemError> {
        self.surface.clear();
        self.problem.calculate_result()?;
        self.problem.plot_result(&mut self.surface);
        self.result_text = self.problem.text_result()?;
        Ok(())
    }

    pub fn problem(&self) -> &dyn Problem {
        self.problem.as_ref()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error_message(&mut self) {
        self.error_message = None;
    }
}
