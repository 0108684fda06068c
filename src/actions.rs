use crate::shell::{Shell, ShellError};

/// Actions that can be dispatched from the view to modify the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the text of one input field
    SetFieldText { name: String, text: String },
    /// Parse all fields and recompute the result
    Submit,
    /// Close the error dialog
    DismissError,
}

/// Apply a single action. Submit errors stop here: they become the
/// message of the error dialog.
pub fn update(shell: &mut Shell, action: Action) {
    match action {
        Action::SetFieldText { name, text } => {
            tracing::debug!(field = %name, %text, "field edited");
            if !shell.set_field_text(&name, text) {
                tracing::warn!(field = %name, "no such field");
            }
        }
        Action::Submit => {
            if let Err(err) = shell.submit() {
                match &err {
                    ShellError::InvalidInput(_) => {}
                    other => tracing::error!(
                        problem = shell.problem().name(),
                        error = %other,
                        "submit failed"
                    ),
                }
                shell.set_error_message(err.to_string());
            }
        }
        Action::DismissError => {
            shell.clear_error_message();
        }
    }
}
