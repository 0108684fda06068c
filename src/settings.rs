use eframe::egui;
use serde::{Deserialize, Serialize};

/// Look and sizing of the solver window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    pub window_title: String,
    pub initial_window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub form_heading: String,
    pub submit_label: String,
    /// Width of each parameter text entry, in points.
    pub field_width: f32,
    /// Visible rows of the result text area.
    pub result_text_rows: usize,
    /// Share of the central panel height given to the plot.
    pub plot_height_fraction: f32,
    pub light_theme: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            window_title: "Scientific Problem Solver".to_string(),
            initial_window_size: [960.0, 600.0],
            min_window_size: [800.0, 500.0],
            form_heading: "Input Parameters".to_string(),
            submit_label: "Submit".to_string(),
            field_width: 100.0,
            result_text_rows: 5,
            plot_height_fraction: 0.7,
            light_theme: true,
        }
    }
}

impl ShellSettings {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.window_title.clone())
                .with_inner_size(self.initial_window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.light_theme {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        }
    }

    /// Plot height for a panel of `available` points, never collapsing
    /// below a usable size.
    pub fn plot_height(&self, available: f32) -> f32 {
        (available * self.plot_height_fraction.clamp(0.1, 1.0)).max(120.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_window_contract() {
        let settings = ShellSettings::default();
        assert_eq!(settings.window_title, "Scientific Problem Solver");
        assert_eq!(settings.min_window_size, [800.0, 500.0]);
        assert_eq!(settings.form_heading, "Input Parameters");
        assert_eq!(settings.submit_label, "Submit");
    }

    #[test]
    fn test_settings_deserialize_from_json() {
        let json = serde_json::to_string(&ShellSettings::default())
            .expect("serialize settings");
        let parsed: ShellSettings =
            serde_json::from_str(&json).expect("parse settings");
        assert_eq!(parsed, ShellSettings::default());
    }

    #[test]
    fn test_plot_height() {
        let settings = ShellSettings::default();
        assert!((settings.plot_height(400.0) - 280.0).abs() < 1e-4);
        assert_eq!(settings.plot_height(50.0), 120.0);
    }
}
