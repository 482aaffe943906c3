//! GTK4 embedding adapter.
//!
//! Wraps a [`ChartView`] in a `DrawingArea` whose draw callback renders the
//! current frame through the Cairo backend, and wires a drag gesture to the
//! view's pointer entry points. The color scheme stays an explicit setting on
//! the adapter; nothing is read from the widget environment.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::api::{ChartView, ColorScheme};
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedChartView<R> = Rc<RefCell<ChartView<R>>>;

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    view: SharedChartView<R>,
    drawing_area: gtk::DrawingArea,
    scheme: Rc<Cell<ColorScheme>>,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(view: ChartView<R>) -> Self {
        let view = Rc::new(RefCell::new(view));
        let scheme = Rc::new(Cell::new(ColorScheme::default()));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        drawing_area.set_draw_func({
            let view = Rc::clone(&view);
            let scheme = Rc::clone(&scheme);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = view.try_borrow_mut() else {
                    return;
                };
                let viewport = Viewport::new(width as u32, height as u32);
                if chart.viewport() != viewport {
                    let _ = chart.set_viewport(viewport);
                }
                let _ = chart.render_on_cairo_context(context, scheme.get());
            }
        });

        let drag = gtk::GestureDrag::new();
        drag.connect_drag_begin({
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            move |_, start_x, start_y| {
                if let Ok(mut chart) = view.try_borrow_mut() {
                    let _ = chart.drag_moved(start_x, start_y);
                }
                drawing_area.queue_draw();
            }
        });
        drag.connect_drag_update({
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            move |gesture, offset_x, offset_y| {
                if let Some((start_x, start_y)) = gesture.start_point() {
                    if let Ok(mut chart) = view.try_borrow_mut() {
                        let _ = chart.drag_moved(start_x + offset_x, start_y + offset_y);
                    }
                    drawing_area.queue_draw();
                }
            }
        });
        drag.connect_drag_end({
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            move |_, _, _| {
                if let Ok(mut chart) = view.try_borrow_mut() {
                    chart.drag_ended();
                }
                drawing_area.queue_draw();
            }
        });
        drawing_area.add_controller(drag);

        Self {
            view,
            drawing_area,
            scheme,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle to the wrapped view, for hosts that mutate data or
    /// styling outside the gesture path. Call `queue_draw` after mutating.
    #[must_use]
    pub fn view(&self) -> SharedChartView<R> {
        Rc::clone(&self.view)
    }

    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.scheme.set(scheme);
        self.drawing_area.queue_draw();
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}
