use std::path::Path;

use zspr::{constants::ZSPR_VERSION_TAG, Zspr};

/// Human readable summary of a parsed sprite.
pub fn zspr_info_string(zspr: &Zspr) -> String {
    let header = &zspr.header;
    let gloves = if zspr.glove_data.is_unset() {
        "game default".to_string()
    } else {
        format!("{:02X?}", zspr.glove_data.0)
    };

    format!(
        "\
{zspr}
ZSPR {ZSPR_VERSION_TAG}, checksum {:#06x}
ROM author name: {}
Sprite data: {} bytes at {:#x}
Palette: {} bytes at {:#x}
Gloves: {gloves}",
        header.checksum,
        zspr.author_name_rom(),
        header.sprite_size,
        header.sprite_offset,
        header.palette_size,
        header.palette_offset,
    )
}

pub fn zspr_info(zspr_path: impl AsRef<Path>) -> eyre::Result<String> {
    let zspr = Zspr::open_from_file(zspr_path)?;

    Ok(zspr_info_string(&zspr))
}
