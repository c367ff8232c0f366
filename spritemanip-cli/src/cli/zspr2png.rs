use std::path::PathBuf;

use clap::{Parser, Subcommand};
use snesgfx::palette::{GloveLevel, Mail};
use spritemanip::modules::zspr2png::{zspr2png, zspr2png_all_mails, zspr_preview};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Zspr2PngCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Exports .zspr sprite sheets as .png
    Zspr2png {
        /// Path to .zspr file
        #[arg(short, long)]
        path: PathBuf,
        /// green, blue, red or bunny, from config.toml by default
        #[arg(short, long)]
        mail: Option<Mail>,
        /// none, gloves or mitts, from config.toml by default
        #[arg(short, long)]
        gloves: Option<GloveLevel>,
        /// Exports every mail at every glove level and the zap sheet
        #[arg(long)]
        all: bool,
        /// Exports a 16x16 preview instead
        #[arg(long)]
        preview: bool,
        /// Output .png, next to the sprite by default. Ignored with --all
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub struct Zspr2Png;

impl Cli for Zspr2Png {
    fn name(&self) -> &'static str {
        "zspr2png"
    }

    fn cli(&self) -> CliRes {
        let cli = Zspr2PngCli::parse();

        let Commands::Zspr2png {
            path,
            mail,
            gloves,
            all,
            preview,
            out,
        } = cli.command;

        let res = if all {
            zspr2png_all_mails(path)
        } else if preview {
            zspr_preview(path, out).map(|out_path| vec![out_path])
        } else {
            let Some(config) = load_config() else {
                return CliRes::Err;
            };

            let mail = match mail {
                Some(mail) => Ok(mail),
                None => config.mail(),
            };

            let gloves = match gloves {
                Some(gloves) => Ok(gloves),
                None => config.glove_level(),
            };

            mail.and_then(|mail| gloves.map(|gloves| (mail, gloves)))
                .and_then(|(mail, gloves)| zspr2png(path, mail, gloves, out))
                .map(|out_path| vec![out_path])
        };

        match res {
            Ok(out_paths) => {
                out_paths
                    .iter()
                    .for_each(|out_path| println!("Wrote {}", out_path.display()));
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
