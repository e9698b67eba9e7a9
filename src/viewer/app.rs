// src/viewer/app.rs
use std::{
    path::Path,
    sync::{
        mpsc::{self, Receiver, TryRecvError},
        Arc, Mutex,
    },
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::PipelineOptions,
    core::net,
    error::Result,
    pipeline::{self, RunSummary},
    record::SeasonRecord,
    schema::{self, Labels},
};

use super::{progress::GuiProgress, table};

pub fn run(opts: PipelineOptions) -> eframe::Result<()> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(opts.source.chart_title())
            .with_inner_size([1100.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "shot_scrape",
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(opts)))),
    )
}

pub struct App {
    opts: PipelineOptions,

    // table view, already formatted
    headers: Vec<String>,
    rows: Vec<Vec<String>>,

    // None until (re)loaded from disk
    chart: Option<egui::TextureHandle>,
    chart_missing: bool,

    // workers write here
    status: Arc<Mutex<String>>,
    running: Option<Receiver<Result<RunSummary>>>,
}

impl App {
    pub fn new(opts: PipelineOptions) -> Self {
        let (records, status) = match pipeline::load_cleaned(&opts.artifacts.cleaned) {
            Ok(r) => {
                logf!("Viewer: loaded {} records from {}", r.len(), opts.artifacts.cleaned.display());
                let status = format!("Loaded {} seasons", r.len());
                (r, status)
            }
            Err(e) => {
                logd!("Viewer: no cleaned data ({e})");
                (Vec::new(), s!("No cleaned data yet; press Re-run"))
            }
        };

        let mut app = Self {
            opts,
            headers: schema::headers(Labels::Display),
            rows: Vec::new(),
            chart: None,
            chart_missing: false,
            status: Arc::new(Mutex::new(status)),
            running: None,
        };
        app.set_records(&records);
        app
    }

    fn set_records(&mut self, records: &[SeasonRecord]) {
        self.rows = records.iter().map(SeasonRecord::to_cells).collect();
    }

    fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Runs collect → clean → plot on a worker thread.
    fn rerun(&mut self) {
        if self.running.is_some() { return; }

        let opts = self.opts.clone();
        let status = self.status.clone();
        let (tx, rx) = mpsc::channel();

        logf!("Viewer: re-running pipeline for {}", opts.source.url);
        self.status("Starting run…");
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let res = net::fetcher_for(&opts.source.url, &opts.fetch)
                .and_then(|f| pipeline::run_all(&opts, f.as_ref(), Some(&mut prog)));
            // receiver gone means the window closed
            let _ = tx.send(res);
        });
        self.running = Some(rx);
    }

    fn poll_run(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.running else { return };
        match rx.try_recv() {
            Ok(Ok(summary)) => {
                logf!("Viewer: run finished, {} seasons charted", summary.chart.seasons.len());
                self.set_records(&summary.records);
                self.chart = None;
                self.chart_missing = false;
                self.running = None;
            }
            Ok(Err(e)) => {
                loge!("Viewer: run failed: {e}");
                self.status(format!("Error: {e}"));
                self.running = None;
            }
            Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(100)),
            Err(TryRecvError::Disconnected) => {
                self.status("Run aborted");
                self.running = None;
            }
        }
    }

    fn ensure_chart(&mut self, ctx: &egui::Context) {
        if self.chart.is_some() || self.chart_missing { return; }
        self.chart = load_chart(ctx, &self.opts.artifacts.chart);
        self.chart_missing = self.chart.is_none();
    }
}

fn load_chart(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            logd!("Viewer: chart {} not loaded ({e})", path.display());
            return None;
        }
    };
    let size = [img.width() as usize, img.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Some(ctx.load_texture("goals_vs_xg", color, egui::TextureOptions::LINEAR))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_run(ctx);
        self.ensure_chart(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let busy = self.running.is_some();
                if ui.add_enabled(!busy, egui::Button::new("Re-run pipeline")).clicked() {
                    self.rerun();
                }
                if busy { ui.spinner(); }
                ui.separator();
                ui.label(self.status_text());
            });
        });

        egui::TopBottomPanel::bottom("records")
            .resizable(true)
            .default_height(240.0)
            .show(ctx, |ui| {
                table::draw(ui, &self.headers, &self.rows);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.chart {
                Some(tex) => {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new((tex.id(), tex.size_vec2())).shrink_to_fit());
                    });
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("No chart at {}", self.opts.artifacts.chart.display()));
                    });
                }
            }
        });
    }
}
