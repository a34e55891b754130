use std::time::{Duration, Instant};

use eframe::egui::{CentralPanel, Context, ScrollArea, TextEdit, TextStyle};
use eframe::Frame;

use crate::config::Config;
use crate::viewer::Viewer;

pub const APP_NAME: &str = "Log Viewer";

pub const APP_WINDOW_WIDTH: f32 = 600.0;
pub const APP_WINDOW_HEIGHT: f32 = 400.0;

/// Application root: one window, one file, one polling viewer.
pub struct App {
    viewer: Viewer,
}

impl App {
    /// Binds the window to the configured file. The viewer performs its
    /// first refresh here, so the window opens already populated.
    pub fn new(config: &Config) -> Self {
        Self {
            viewer: Viewer::new(&config.log_file, Duration::from_millis(config.refresh_ms)),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.viewer.poll(Instant::now());

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Word-wrapping text area filling the pane. The widget is
                    // technically editable, but any manual edit is overwritten
                    // by the next successful refresh.
                    ui.add(
                        TextEdit::multiline(self.viewer.contents_mut())
                            .font(TextStyle::Monospace)
                            .desired_width(ui.available_width())
                            .desired_rows(24),
                    );
                });
        });

        // egui only repaints on input; ask for a wakeup at the next deadline.
        // A stalled viewer arms nothing, so polling stops for good.
        if let Some(wait) = self.viewer.time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
