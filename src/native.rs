use crate::create_app;
use crate::logging;
use crate::settings::ShellSettings;

/// Entry point used by the native executable. Blocks until the window is
/// closed.
pub fn run() -> eframe::Result<()> {
    logging::init();

    let settings = ShellSettings::default();
    let native_options = settings.native_options();
    let app_name = settings.window_title.clone();

    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| Ok(Box::new(create_app(cc, settings)))),
    )
}
