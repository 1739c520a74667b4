use egui::Vec2;
use egui_kittest::Harness;

use crate::{TriageApp, TriageConfig};

pub fn harness_with_config(cfg: TriageConfig) -> Harness<'static, TriageApp> {
    Harness::builder()
        .with_size(Vec2::new(800.0, 600.0))
        .with_os(egui::os::OperatingSystem::from_target_os())
        .build_eframe(|cc| TriageApp::new(cc, cfg))
}
