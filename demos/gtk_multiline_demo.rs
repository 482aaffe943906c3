use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use linechart_rs::api::{ChartView, ChartViewConfig, ColorScheme, gradients};
use linechart_rs::core::Viewport;
use linechart_rs::platform_gtk::GtkChartAdapter;
use linechart_rs::render::CairoRenderer;

fn main() {
    let _ = linechart_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.linechart.examples.gtk_multiline_demo")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let view = match build_view() {
        Ok(view) => view,
        Err(err) => {
            eprintln!("failed to initialize multi-line chart view: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkChartAdapter::new(view));

    let dark_toggle = gtk::CheckButton::with_label("Dark scheme");
    dark_toggle.connect_toggled({
        let adapter = Rc::clone(&adapter);
        move |toggle| {
            adapter.set_color_scheme(if toggle.is_active() {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            });
        }
    });

    let grid_toggle = gtk::CheckButton::with_label("Gridlines");
    grid_toggle.set_active(true);
    grid_toggle.connect_toggled({
        let adapter = Rc::clone(&adapter);
        move |toggle| {
            if let Ok(mut chart) = adapter.view().try_borrow_mut() {
                chart.set_grid_visible(toggle.is_active());
            }
            adapter.queue_draw();
        }
    });

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    controls.set_margin_top(8);
    controls.set_margin_start(8);
    controls.append(&dark_toggle);
    controls.append(&grid_toggle);

    let column = gtk::Box::new(gtk::Orientation::Vertical, 8);
    column.append(&controls);
    column.append(adapter.widget());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("linechart-rs: multi-line demo")
        .default_width(420)
        .default_height(420)
        .child(&column)
        .build();

    window.present();
}

fn build_view() -> linechart_rs::ChartResult<ChartView<CairoRenderer>> {
    let renderer = CairoRenderer::new(420, 360)?;
    let config = ChartViewConfig::new(Viewport::new(420, 360))
        .with_title("Line chart")
        .with_legend("Basic")
        .with_value_specifier("%.1f");

    ChartView::with_series(
        renderer,
        config,
        vec![
            (
                vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0],
                "first".to_owned(),
                gradients::ORANGE,
            ),
            (
                vec![25.0, 17.0, 23.0, 50.0, 48.0, 31.0, 18.0, 14.0, 37.0],
                "second".to_owned(),
                gradients::BLUE,
            ),
            (
                vec![12.0, 20.0, 28.0, 36.0, 44.0, 40.0, 32.0, 24.0, 16.0],
                "third".to_owned(),
                gradients::GREEN,
            ),
        ],
    )
}
