use crate::actions::Action;
use crate::settings::ShellSettings;
use crate::shell::Shell;
use crate::state::State;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotBounds};
use problem::{Problem, Surface};

const BAR_WIDTH: f64 = 0.6;
/// Headroom above the tallest bar, as a share of the plotted range.
const PLOT_MARGIN: f64 = 0.05;

pub struct SolverApp {
    state: State,
    settings: ShellSettings,
    /// Surface revision the plot was last drawn from.
    plotted_revision: Option<u64>,
}

impl SolverApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        problem: Box<dyn Problem>,
        settings: ShellSettings,
    ) -> Self {
        cc.egui_ctx.set_visuals(settings.visuals());
        tracing::info!(problem = %problem.describe(), "starting solver");
        Self {
            state: State::new(Shell::new(problem)),
            settings,
            plotted_revision: None,
        }
    }
}

impl eframe::App for SolverApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        let mut actions = Vec::new();
        let shell = &self.state.shell;
        let settings = &self.settings;
        let plotted_revision = &mut self.plotted_revision;

        egui::TopBottomPanel::bottom("result_text")
            .resizable(true)
            .show(ctx, |ui| {
                render_result_text(ui, shell, settings);
            });

        egui::SidePanel::left("parameter_form")
            .resizable(false)
            .show(ctx, |ui| {
                render_form(ui, shell, settings, &mut actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let height = settings.plot_height(ui.available_height());
            render_surface(ui, shell.surface(), height, plotted_revision);
        });

        // Display error dialog if there's an error message
        if let Some(error) = shell.error_message() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(error);
                    if ui.button("OK").clicked() {
                        actions.push(Action::DismissError);
                    }
                });
        }

        if !actions.is_empty() {
            for action in actions {
                self.state.dispatch(action);
            }
            self.state.flush_actions();
            ctx.request_repaint();
        }
    }
}

/// Draws the parameter grid and submit button. Returns the rect of each
/// field's text entry, in drawing order.
fn render_form(
    ui: &mut egui::Ui,
    shell: &Shell,
    settings: &ShellSettings,
    actions: &mut Vec<Action>,
) -> Vec<(String, egui::Rect)> {
    ui.vertical_centered(|ui| {
        ui.heading(&settings.form_heading);
    });
    ui.add_space(8.0);

    let mut submit = false;
    let mut field_rects = Vec::with_capacity(shell.form().len());
    egui::Grid::new("parameter_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for field in shell.form().fields() {
                ui.label(egui::RichText::new(&field.label).strong());
                let mut text = field.text.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .desired_width(settings.field_width),
                );
                field_rects.push((field.name.clone(), response.rect));
                if response.changed() {
                    actions.push(Action::SetFieldText {
                        name: field.name.clone(),
                        text,
                    });
                }
                if response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit = true;
                }
                ui.end_row();
            }
        });

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        if ui.button(&settings.submit_label).clicked() {
            submit = true;
        }
    });

    // Queued after any edit from this frame so the edit is parsed too.
    if submit {
        actions.push(Action::Submit);
    }
    field_rects
}

/// Vertical plot range: the surface's range with headroom on top. The
/// bottom only moves when it is not pinned and the data goes negative.
fn plot_y_bounds(surface: &Surface) -> (f64, f64) {
    let (bottom, top) = surface.y_range();
    let pad = (top - bottom) * PLOT_MARGIN;
    let bottom = if surface.y_bottom().is_none() && bottom < 0.0 {
        bottom - pad
    } else {
        bottom
    };
    (bottom, top + pad)
}

/// Draws the surface as a bar chart with fixed bounds and returns the
/// bounds actually plotted.
fn render_surface(
    ui: &mut egui::Ui,
    surface: &Surface,
    height: f32,
    plotted_revision: &mut Option<u64>,
) -> PlotBounds {
    let labels: Vec<String> =
        surface.bars().iter().map(|b| b.label.clone()).collect();
    let bars: Vec<Bar> = surface
        .bars()
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64, b.value)
                .name(&b.label)
                .width(BAR_WIDTH)
                .fill(bar_color(i))
        })
        .collect();

    let (y_min, y_max) = plot_y_bounds(surface);
    let x_max = labels.len().max(1) as f64 - 0.5;

    let mut plot = Plot::new("result_plot")
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .default_x_bounds(-0.5, x_max)
        .default_y_bounds(y_min, y_max)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        });
    if let Some(label) = surface.y_label() {
        plot = plot.y_axis_label(label.to_string());
    }
    if *plotted_revision != Some(surface.revision()) {
        plot = plot.reset();
        *plotted_revision = Some(surface.revision());
    }

    let response = plot.show(ui, |plot_ui| {
        if !bars.is_empty() {
            plot_ui.bar_chart(BarChart::new("result", bars));
        }
    });
    *response.transform.bounds()
}

fn render_result_text(
    ui: &mut egui::Ui,
    shell: &Shell,
    settings: &ShellSettings,
) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        // A `&str` buffer keeps the text area read-only.
        let mut text = shell.result_text();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_rows(settings.result_text_rows)
                .desired_width(f32::INFINITY),
        );
    });
}

fn bar_color(index: usize) -> egui::Color32 {
    let palette = colorous::CATEGORY10;
    let c = palette[index % palette.len()];
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use problem::RectangularVolumeProblem;

    /// Runs one headless frame with `add_contents` inside a central panel.
    fn run_frame(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1024.0, 768.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    fn plotted_bounds(surface: &Surface) -> PlotBounds {
        let mut revision = None;
        let mut bounds = None;
        run_frame(|ui| {
            bounds =
                Some(render_surface(ui, surface, 300.0, &mut revision));
        });
        bounds.expect("plot was drawn")
    }

    fn volume_shell() -> Shell {
        Shell::new(Box::new(RectangularVolumeProblem::new()))
    }

    #[test]
    fn test_plot_y_axis_starts_at_zero() {
        let mut shell = volume_shell();
        shell.set_field_text("length", "2");
        shell.set_field_text("width", "3");
        shell.set_field_text("height", "4");
        shell.submit().unwrap();

        let bounds = plotted_bounds(shell.surface());
        assert_eq!(bounds.min()[1], 0.0);
        let top = 24.0 * (1.0 + PLOT_MARGIN);
        assert!((bounds.max()[1] - top).abs() < 1e-9);
    }

    #[test]
    fn test_pinned_bottom_holds_for_negative_result() {
        let mut shell = volume_shell();
        shell.set_field_text("length", "-2");
        shell.submit().unwrap();

        let bounds = plotted_bounds(shell.surface());
        assert_eq!(bounds.min()[1], 0.0);
        assert!(bounds.max()[1] > 0.0);
    }

    #[test]
    fn test_unpinned_surface_fits_negative_bars() {
        let mut surface = Surface::new();
        surface.bar_chart([("gain", 4.0), ("loss", -6.0)]);

        let bounds = plotted_bounds(&surface);
        assert!(bounds.min()[1] < -6.0);
        assert!(bounds.max()[1] > 4.0);
    }

    #[test]
    fn test_empty_surface_plots_from_zero() {
        let bounds = plotted_bounds(&Surface::new());
        assert_eq!(bounds.min()[1], 0.0);
    }

    #[test]
    fn test_plot_tracks_drawn_revision() {
        let mut shell = volume_shell();
        let mut revision = None;

        run_frame(|ui| {
            render_surface(ui, shell.surface(), 300.0, &mut revision);
        });
        assert_eq!(revision, Some(shell.surface().revision()));

        shell.submit().unwrap();
        run_frame(|ui| {
            render_surface(ui, shell.surface(), 300.0, &mut revision);
        });
        assert_eq!(revision, Some(shell.surface().revision()));
    }

    #[test]
    fn test_form_renders_one_entry_per_parameter_in_order() {
        let shell = volume_shell();
        let settings = ShellSettings::default();
        let mut actions = Vec::new();
        let mut rects = Vec::new();
        run_frame(|ui| {
            rects = render_form(ui, &shell, &settings, &mut actions);
        });

        let names: Vec<_> =
            rects.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["length", "width", "height"]);
        assert!(
            rects.windows(2).all(|w| w[0].1.top() < w[1].1.top()),
            "fields should be stacked top to bottom: {:?}",
            rects
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_form_without_parameters_has_no_entries() {
        struct Empty(problem::ParameterMap);

        impl Problem for Empty {
            fn name(&self) -> &str {
                "Empty"
            }
            fn parameters(&self) -> &problem::ParameterMap {
                &self.0
            }
            fn parameters_mut(&mut self) -> &mut problem::ParameterMap {
                &mut self.0
            }
            fn calculate_result(
                &mut self,
            ) -> Result<(), problem::ProblemError> {
                Ok(())
            }
            fn text_result(
                &self,
            ) -> Result<String, problem::ProblemError> {
                Ok(String::new())
            }
        }

        let shell =
            Shell::new(Box::new(Empty(problem::ParameterMap::empty())));
        let settings = ShellSettings::default();
        let mut actions = Vec::new();
        let mut rects = vec![(String::new(), egui::Rect::NOTHING)];
        run_frame(|ui| {
            rects = render_form(ui, &shell, &settings, &mut actions);
        });
        assert!(rects.is_empty());
    }
}
