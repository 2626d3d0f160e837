//! Trail Pong entry point
//!
//! Usage: `trail-pong [settings.json] [max-frames]`
//! `TRAIL_PONG_INPUT=accumulator|held` picks the paddle input model.
//!
//! Runs headless: the autopilot plays, sounds and frames are logged.
//! `RUST_LOG=debug` shows scoring, `RUST_LOG=trace` dumps every snapshot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use trail_pong::audio::{AudioManager, LogSoundLoader};
    use trail_pong::input::Autopilot;
    use trail_pong::renderer::{FrameStyle, VertexRenderer};
    use trail_pong::{FrameDriver, Settings};

    env_logger::init();
    log::info!("Trail Pong (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(Settings::PATH_ENV).map(PathBuf::from));
    let max_frames = args.next().and_then(|arg| match arg.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            log::warn!("Ignoring frame limit {:?}: {}", arg, e);
            None
        }
    });

    let settings = match settings_path {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    }
    .with_input_override(std::env::var(Settings::INPUT_ENV).ok().as_deref());
    if let Ok(json) = settings.to_json() {
        log::debug!("Settings: {}", json);
    }

    let audio = AudioManager::load(&mut LogSoundLoader, &settings);
    let renderer = VertexRenderer::new(FrameStyle::from_settings(&settings));
    let mut driver = FrameDriver::new(settings, Autopilot::new(), renderer, audio);
    if let Some(n) = max_frames {
        driver = driver.with_frame_limit(n);
    }

    let frames = driver.run();
    log::info!(
        "Finished: {} frames, best score {}",
        frames,
        driver.state().round.best_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds embed the library; there is no standalone binary
}
