// logwindow - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. config.toml loading and validation
// 4. Logger / sink wiring and demo emitter start
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use logwindow::app;
pub use logwindow::core;
pub use logwindow::platform;
pub use logwindow::ui;
pub use logwindow::util;

use clap::Parser;
use std::sync::Arc;

/// Compile-time-embedded icon PNG bytes (64x64 RGBA).
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// Apply the configured theme and body font size to the egui context.
fn configure_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(font_size, egui::FontFamily::Proportional),
    );
    ctx.set_style(style);
}

/// Logger View - streamed log messages, colour-coded by severity.
///
/// Opens a window that renders each log record as a coloured row and keeps
/// the newest record in view. A demo emitter streams example traffic.
#[derive(Parser, Debug)]
#[command(name = "logwindow", version, about)]
struct Cli {
    /// Number of demo cycles (overrides config.toml).
    #[arg(short = 'c', long = "demo-cycles")]
    demo_cycles: Option<u32>,

    /// Do not start the demo emitter.
    #[arg(long = "no-demo")]
    no_demo: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug, None, None);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Logger View starting"
    );

    // Resolve platform paths and load config.toml
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Wire the logger to the window: the sink implements the view callback
    // contract and marshals rendered rows onto the GUI thread; the bridge
    // is polled by the eframe update loop.
    let logger = Arc::new(core::logger::Logger::new("logwindow::demo"));
    let (view, bridge) = app::sink::channel_view();
    logger.connect_view(view);

    // Demo emitter: CLI cycle override > config > default.
    let demo_enabled = !cli.no_demo && config.demo_enabled;
    let demo_cycles = cli.demo_cycles.unwrap_or(config.demo_cycles);
    let demo = if demo_enabled {
        Some(app::demo::DemoManager::start(
            Arc::clone(&logger),
            demo_cycles,
        ))
    } else {
        tracing::info!("Demo emitter disabled");
        None
    };

    let mut state = app::state::AppState::new(config.dark_mode, config.font_size);
    if demo.is_some() {
        state.demo_active = true;
        state.status_message = "Streaming demo log traffic\u{2026}".to_string();
    }

    // Launch the GUI
    //
    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource) -- embedded by build.rs via winres.
    //      This covers the taskbar, Alt+Tab, title bar, and Explorer.
    //   2. Runtime (eframe viewport) -- loaded here from the PNG asset.
    //      This covers the eframe-managed window icon on all platforms and
    //      acts as the canonical source on Linux/macOS.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_NAME)
            .with_inner_size([
                util::constants::DEFAULT_WINDOW_WIDTH,
                util::constants::DEFAULT_WINDOW_HEIGHT,
            ])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ])
            .with_icon(icon_data),
        ..Default::default()
    };

    let dark_mode = state.dark_mode;
    let font_size = state.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::LogWindowApp::new(state, bridge, demo)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Logger View GUI: {e}");
        std::process::exit(1);
    }
}
