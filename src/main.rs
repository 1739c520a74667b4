#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cliptriage::{app, config};

fn main() -> eframe::Result<()> {
    let cfg = match config::parse_args(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", config::USAGE);
            std::process::exit(2);
        }
    };
    println!("Triage directory: {}", cfg.triage_dir.display());
    println!("Neuro directory:  {}", cfg.neuro_dir.display());
    println!("Evil directory:   {}", cfg.evil_dir.display());
    println!("None directory:   {}", cfg.none_dir.display());

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size([640.0, 480.0])
        .with_inner_size([800.0, 600.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Timeout Clip Triage",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::TriageApp::new(cc, cfg)))),
    )
}
