use std::path::PathBuf;

use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        bail!(
            "No ROM path provided.\n\
             Usage: dmgboy <rom_path> [scale]\n\
             For example: dmgboy path/to/your.gb 4"
        );
    };
    let scale = args
        .next()
        .map(|arg| arg.parse::<u32>().with_context(|| format!("invalid scale '{arg}'")))
        .transpose()?;

    log::info!("Playing ROM path: '{}'", rom_path);
    dmgboy::run_gameboy(&PathBuf::from(rom_path), scale)
}
