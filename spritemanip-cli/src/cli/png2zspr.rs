use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spritemanip::modules::png2zspr::{png2zspr, SpriteNames};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Png2ZsprCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Converts a .png sprite sheet and a palette file into .zspr
    Png2zspr {
        /// Path to the 128x448 .png sheet
        #[arg(short, long)]
        png: PathBuf,
        /// Path to .gpl, .pal or .txt palette with 64 or 66 colors
        #[arg(short = 'c', long)]
        palette: PathBuf,
        /// Output .zspr, next to the sheet by default
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Sprite name, the output file name by default
        #[arg(short, long)]
        name: Option<String>,
        /// Author name, from config.toml by default
        #[arg(short, long)]
        author: Option<String>,
        /// Author name shown in the game credits, ASCII only
        #[arg(short = 'r', long)]
        author_rom: Option<String>,
    },
}

pub struct Png2Zspr;

impl Cli for Png2Zspr {
    fn name(&self) -> &'static str {
        "png2zspr"
    }

    fn cli(&self) -> CliRes {
        let cli = Png2ZsprCli::parse();

        let Commands::Png2zspr {
            png,
            palette,
            out,
            name,
            author,
            author_rom,
        } = cli.command;

        let Some(config) = load_config() else {
            return CliRes::Err;
        };

        let names = SpriteNames {
            sprite_name: name,
            author_name: author.or(Some(config.author_name.clone())),
            author_name_rom: author_rom.or(config.author_name_rom().map(String::from)),
        };

        match png2zspr(png, palette, out, &names) {
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
