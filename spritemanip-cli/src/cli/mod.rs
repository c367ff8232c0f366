use spritemanip::config::{parse_config, Config};

use self::{
    patch_rom::PatchRom, png2zspr::Png2Zspr, rom2zspr::Rom2Zspr, zspr2png::Zspr2Png,
    zspr_info::ZsprInfo,
};

mod patch_rom;
mod png2zspr;
mod rom2zspr;
mod zspr2png;
mod zspr_info;

pub enum CliRes {
    /// Nothing to run, help was printed
    NoCli,
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module has to handle the arguments by itself.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Config next to the binary, defaults when there is none.
fn load_config() -> Option<Config> {
    match parse_config() {
        Ok(config) => Some(config),
        Err(err) => {
            println!("Error parsing config.toml: {}", err);
            None
        }
    }
}

/// Runs command-line options
pub fn cli() -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Png2Zspr, &Zspr2Png, &Rom2Zspr, &PatchRom, &ZsprInfo];

    let help = || {
        println!(
            "\
spritemanip {}

Available modules:",
            env!("CARGO_PKG_VERSION")
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    // No arguments
    if args.len() <= 1 {
        help();
        return CliRes::NoCli;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    println!("Unknown module `{}`", args[1]);
    help();

    CliRes::Err
}
