use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spritemanip::modules::rom2zspr::patch_rom_file;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct PatchRomCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Writes a .zspr sprite into a ROM
    #[command(name = "patch_rom")]
    PatchRom {
        /// Path to .sfc ROM
        #[arg(short, long)]
        rom: PathBuf,
        /// Path to .zspr file
        #[arg(short, long)]
        zspr: PathBuf,
        /// Output ROM, the input ROM is overwritten by default
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub struct PatchRom;

impl Cli for PatchRom {
    fn name(&self) -> &'static str {
        "patch_rom"
    }

    fn cli(&self) -> CliRes {
        let cli = PatchRomCli::parse();

        let Commands::PatchRom { rom, zspr, out } = cli.command;

        match patch_rom_file(rom, zspr, out) {
            Ok(out_path) => {
                println!("Patched {}", out_path.display());
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}
