pub mod actions;
pub mod form;
pub mod logging;
pub mod native;
pub mod settings;
pub mod shell;
pub mod state;
mod view;

pub use settings::ShellSettings;
pub use shell::{Phase, Shell, ShellError};
pub use view::SolverApp;

use problem::RectangularVolumeProblem;

/// Build the app with the default problem.
pub fn create_app(
    cc: &eframe::CreationContext<'_>,
    settings: ShellSettings,
) -> SolverApp {
    SolverApp::new(cc, Box::new(RectangularVolumeProblem::new()), settings)
}
