pub mod params;
pub mod problem;
pub mod surface;
pub mod volume;

pub use params::{ParameterError, ParameterMap};
pub use problem::{Problem, ProblemError, format_value};
pub use surface::{Bar, Surface};
pub use volume::RectangularVolumeProblem;
