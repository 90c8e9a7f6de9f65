//! Arc Engine window
//!
//! Opens an 800x600 OpenGL 4.1 core window, clears it to dark blue every
//! frame and exits when the window is closed. An `arc_engine.toml` in the
//! working directory overrides those defaults.

use std::path::Path;

use arc_engine::prelude::*;

const CONFIG_PATH: &str = "arc_engine.toml";

fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        log::info!("No {} found, using default configuration", path.display());
        return Ok(AppConfig::default());
    }

    log::info!("Loading configuration from {}", path.display());
    AppConfig::load_from_file(path)
}

fn main() {
    arc_engine::foundation::logging::init();

    let engine = match load_config(Path::new(CONFIG_PATH)).and_then(Engine::new) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            eprintln!("{err}");
            std::process::exit(-1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match engine.run(GlfwSystem::init, GlGraphics::load::<GlfwWindow>, &mut stdout) {
        Ok(report) => {
            log::info!(
                "Rendered {} frames in {:.2}s",
                report.frames.frame_count,
                report.frames.elapsed.as_secs_f32()
            );
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
