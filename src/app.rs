use std::sync::mpsc;
use std::time::Duration;

use egui::{Color32, RichText};

use crate::catalog::{self, CaseItem, ScanMessage};
use crate::config::TriageConfig;
use crate::reduce;
use crate::waveform::WaveformView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Neuro,
    Evil,
    None,
}

struct LoadResult {
    job_id: u64,
    result: Result<Vec<f32>, String>,
}

pub struct TriageApp {
    cfg: TriageConfig,
    pub cases: Vec<CaseItem>,
    pub current: usize,
    pub scan_in_progress: bool,
    scan_rx: Option<mpsc::Receiver<ScanMessage>>,
    load_rx: Option<mpsc::Receiver<LoadResult>>,
    load_job_id: u64,
    pub load_error: Option<String>,
    pub waveform: WaveformView,
}

impl TriageApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cfg: TriageConfig) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Color32::from_rgb(18, 18, 20);
        cc.egui_ctx.set_visuals(visuals);
        let scan_rx = catalog::spawn_scan_worker(cfg.triage_dir.clone());
        Self {
            cfg,
            cases: Vec::new(),
            current: 0,
            scan_in_progress: true,
            scan_rx: Some(scan_rx),
            load_rx: None,
            load_job_id: 0,
            load_error: None,
            waveform: WaveformView::default(),
        }
    }

    pub fn case_loading(&self) -> bool {
        self.load_rx.is_some()
    }

    fn poll_scan(&mut self) {
        let Some(rx) = &self.scan_rx else { return };
        match rx.try_recv() {
            Ok(ScanMessage::Complete(cases)) => {
                self.cases = cases;
                self.current = 0;
                self.scan_in_progress = false;
                self.scan_rx = None;
                if !self.cases.is_empty() {
                    self.load_current();
                }
            }
            Ok(ScanMessage::Failed(msg)) => {
                eprintln!("scan error: {msg}");
                self.load_error = Some(msg);
                self.scan_in_progress = false;
                self.scan_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.scan_in_progress = false;
                self.scan_rx = None;
            }
        }
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        match rx.try_recv() {
            Ok(res) => {
                self.load_rx = None;
                if res.job_id != self.load_job_id {
                    return;
                }
                match res.result {
                    Ok(samples) => self.waveform.set_waveform(samples),
                    Err(msg) => {
                        eprintln!("load error: {msg}");
                        self.load_error = Some(msg);
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.load_rx = None;
            }
        }
    }

    /// Decode the current case's sound file off the UI thread; the reduced
    /// sequence lands in `poll_load` on the next frame it is ready.
    fn load_current(&mut self) {
        self.load_error = None;
        self.waveform.set_waveform(Vec::new());
        let Some(case) = self.cases.get(self.current) else {
            return;
        };
        let path = self.cfg.triage_dir.join(&case.record.sound_filename);
        let channel = self.cfg.channel;
        self.load_job_id = self.load_job_id.wrapping_add(1);
        let job_id = self.load_job_id;
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let result = crate::audio_io::decode_channel(&path, channel)
                .map(|(samples, _sr)| reduce::reduce_block_mean(&samples, reduce::DEFAULT_BLOCK))
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(LoadResult { job_id, result });
        });
        self.load_rx = Some(rx);
    }

    pub fn step_next(&mut self) {
        if self.current + 1 < self.cases.len() {
            self.current += 1;
            self.load_current();
        }
    }

    pub fn step_prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.load_current();
        }
    }

    /// Move the current case into the verdict's output directory and show
    /// whichever case slides into its place. A failed move leaves the case
    /// where it is and reports the error instead.
    pub fn classify_current(&mut self, verdict: Verdict) {
        let Some(case) = self.cases.get(self.current) else {
            return;
        };
        let dest = match verdict {
            Verdict::Neuro => &self.cfg.neuro_dir,
            Verdict::Evil => &self.cfg.evil_dir,
            Verdict::None => &self.cfg.none_dir,
        };
        match catalog::move_case(case, &self.cfg.triage_dir, dest) {
            Ok(()) => {
                self.cases.remove(self.current);
                if self.current >= self.cases.len() && self.current > 0 {
                    self.current = self.cases.len() - 1;
                }
                if self.cases.is_empty() {
                    self.load_rx = None;
                    self.load_error = None;
                    self.waveform.set_waveform(Vec::new());
                } else {
                    self.load_current();
                }
            }
            Err(e) => {
                eprintln!("classify error: {e:?}");
                self.load_error = Some(format!("{e:#}"));
            }
        }
    }

    fn case_info_row(&self, ui: &mut egui::Ui) {
        if self.scan_in_progress {
            ui.spinner();
            ui.label("Scanning triage folder...");
            return;
        }
        match self.cases.get(self.current) {
            Some(case) => {
                ui.monospace(format!("{} / {}", self.current + 1, self.cases.len()));
                ui.separator();
                ui.monospace(case.record.sound_filename.as_str());
                ui.separator();
                ui.label(if case.record.detected {
                    "detected"
                } else {
                    "not detected"
                });
                ui.separator();
                ui.label(case.record.username.as_deref().unwrap_or("-"));
                ui.separator();
                ui.label(format!("{:+.2}s", case.record.relative_timestamp));
                if self.case_loading() {
                    ui.spinner();
                }
            }
            None => {
                ui.label("No cases left to triage");
            }
        }
    }

    fn action_row(&mut self, ui: &mut egui::Ui) {
        let has_case = !self.scan_in_progress && self.current < self.cases.len();
        let at_start = self.current == 0;
        let at_end = self.cases.is_empty() || self.current + 1 == self.cases.len();
        let mut verdict: Option<Verdict> = None;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(has_case && !at_start, egui::Button::new("Previous"))
                .clicked()
            {
                self.step_prev();
            }
            if ui
                .add_enabled(
                    has_case,
                    egui::Button::new(
                        RichText::new("Neuro")
                            .strong()
                            .color(Color32::from_rgb(240, 90, 90)),
                    ),
                )
                .clicked()
            {
                verdict = Some(Verdict::Neuro);
            }
            if ui
                .add_enabled(has_case, egui::Button::new(RichText::new("None").strong()))
                .clicked()
            {
                verdict = Some(Verdict::None);
            }
            if ui
                .add_enabled(
                    has_case,
                    egui::Button::new(
                        RichText::new("Evil")
                            .strong()
                            .color(Color32::from_rgb(70, 140, 255)),
                    ),
                )
                .clicked()
            {
                verdict = Some(Verdict::Evil);
            }
            if ui
                .add_enabled(has_case && !at_end, egui::Button::new("Next"))
                .clicked()
            {
                self.step_next();
            }
        });
        if let Some(v) = verdict {
            self.classify_current(v);
        }
    }
}

impl eframe::App for TriageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_scan();
        self.poll_load();
        if self.scan_rx.is_some() || self.load_rx.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::TopBottomPanel::top("case_info").show(ctx, |ui| {
            ui.horizontal(|ui| self.case_info_row(ui));
        });
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            self.action_row(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.load_error {
                ui.colored_label(Color32::from_rgb(240, 120, 120), err);
            }
            self.waveform.ui(ui);
        });
    }
}
