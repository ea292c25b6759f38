// src/units.rs

//! Static templates written during provisioning.
//!
//! The path unit watches the overlay's scratch config; whenever the overlay
//! (or anyone else) rewrites it, the oneshot service copies the user's
//! master config back over it and bumps its mtime so the overlay reloads.

use crate::config::Settings;

/// `<unit>@.path`: watch `<scratch_dir>/<prefix>%i` for changes.
pub fn path_unit(settings: &Settings) -> String {
    let unit = &settings.systemd.unit;
    let watched = settings.scratch_file_template();
    format!(
        r#"# {unit}@.path
[Unit]
Description="Monitor the mangohud config file for changes"

[Path]
PathChanged={watched}
Unit={unit}@%i.service
TriggerLimitBurst=1000

[Install]
WantedBy=default.target
"#,
        watched = watched.display()
    )
}

/// `<unit>@.service`: copy the master config into the scratch slot.
pub fn service_unit(settings: &Settings) -> String {
    let unit = &settings.systemd.unit;
    let target = settings.scratch_file_template();
    format!(
        r#"# {unit}@.service
[Unit]
Description="Set mangohud configuration"
StartLimitBurst=1000

[Service]
Type=oneshot
ExecStart=/usr/bin/cp -v {master} {target}
ExecStartPost=/usr/bin/touch {target}
"#,
        master = settings.paths.master_config.display(),
        target = target.display()
    )
}

/// Default overlay settings for a freshly created master config.
pub const STARTER_CONFIG: &str = "control=mangohud
fsr_steam_sharpness=5
nis_steam_sharpness=10
battery
cpu_stats=0
gpu_stats=0
frame_timing=0
battery_icon
font_scale=0.6
table_columns=5
width=300
media_player=1
media_player_format={artist} - {title}
font_scale_media_player=1
background_alpha=0
";
