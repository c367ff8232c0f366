use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spritemanip::modules::{png2zspr::SpriteNames, rom2zspr::rom2zspr};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Rom2ZsprCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extracts the player sprite from a ROM
    Rom2zspr {
        /// Path to .sfc ROM
        #[arg(short, long)]
        rom: PathBuf,
        /// Output .zspr, next to the ROM by default
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Sprite name, the output file name by default
        #[arg(short, long)]
        name: Option<String>,
        /// Author name, from config.toml by default
        #[arg(short, long)]
        author: Option<String>,
    },
}

pub struct Rom2Zspr;

impl Cli for Rom2Zspr {
    fn name(&self) -> &'static str {
        "rom2zspr"
    }

    fn cli(&self) -> CliRes {
        let cli = Rom2ZsprCli::parse();

        let Commands::Rom2zspr {
            rom,
            out,
            name,
            author,
        } = cli.command;

        let Some(config) = load_config() else {
            return CliRes::Err;
        };

        let names = SpriteNames {
            sprite_name: name,
            author_name: author.or(Some(config.author_name.clone())),
            author_name_rom: config.author_name_rom().map(String::from),
        };

        match rom2zspr(rom, out, &names) {
            Ok(out_path) => {
                println!("Wrote {}", out_path.display());
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
