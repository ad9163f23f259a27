use std::path::Path;

use anyhow::{Context, Result};
use dmgboy_common::app::App;
use dmgboy_core::{read_save, GameBoy, GameBoyApp, LoadOptions};
use dmgboy_sdl2::{SdlContext, SdlInitInfo};

/// Load `rom_path` (plus its `.sav` next to it, if any) and run it in an
/// SDL2 window until the user quits.
pub fn run_gameboy(rom_path: &Path, scale: Option<u32>) -> Result<()> {
    let save_path = rom_path.with_extension("sav");
    let save_data = read_save(&save_path)
        .with_context(|| format!("failed to read save '{}'", save_path.display()))?;
    if let Some(data) = &save_data {
        log::info!("Loaded save '{}' ({} bytes)", save_path.display(), data.len());
    }

    let options = match save_data {
        Some(data) => LoadOptions::builder().save_data(data).build(),
        None => LoadOptions::default(),
    };
    let gb = GameBoy::load_file(rom_path, options)
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;

    let mut app = GameBoyApp::new(gb).with_save_path(save_path);
    if let Some(scale) = scale {
        app = app.with_scale(scale);
    }

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
