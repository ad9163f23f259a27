use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use dmgboy_core::{GameBoy, LoadOptions, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: dmg_frame_dump <rom_path> <out_rgb24_path> [frames]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(rom_path), Some(out_path)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let rom_path = PathBuf::from(rom_path);
    let out_path = PathBuf::from(out_path);
    let frames: u32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'\n{USAGE}"))?,
        None => 120,
    };

    let mut gb = GameBoy::load_file(&rom_path, LoadOptions::default())
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;

    for _ in 0..frames {
        gb.run_frame();
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);
    std::fs::write(&out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}
