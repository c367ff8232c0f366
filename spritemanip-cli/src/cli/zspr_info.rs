use spritemanip::modules::zspr_info::zspr_info;

use crate::cli::{Cli, CliRes};

pub struct ZsprInfo;

impl Cli for ZsprInfo {
    fn name(&self) -> &'static str {
        "zspr_info"
    }

    fn cli(&self) -> CliRes {
        // Skips "spritemanip" "<module name>". Third argument is the input
        let args: Vec<String> = std::env::args().skip(2).collect();

        if args.len() != 1 {
            self.cli_help();
            return CliRes::Err;
        }

        match zspr_info(&args[0]) {
            Ok(info) => {
                println!("{info}");
                CliRes::Ok
            }
            Err(err) => {
                println!("{err}");
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        println!(
            "\
zspr_info

Prints names, offsets and glove colors of a sprite

<path to .zspr>
"
        );
    }
}
