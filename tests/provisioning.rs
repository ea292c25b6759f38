// tests/provisioning.rs

mod common;
use crate::common::builders::SettingsBuilder;
use crate::common::{controller, init_tracing};

use std::error::Error;
use std::fs;

use customhud::units::STARTER_CONFIG;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn second_run_leaves_every_file_byte_identical() -> TestResult {
    init_tracing();
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path()).build();
    let (ctl, _) = controller(settings.clone());

    let first = ctl.provision()?;
    assert!(first.units_written && first.config_written);
    assert_eq!(
        fs::read_to_string(&settings.paths.master_config)?,
        STARTER_CONFIG
    );

    // User customises things between startups.
    fs::write(&settings.paths.master_config, "fps_limit=30\n")?;
    let path_unit = fs::read(settings.path_unit_file())?;
    let service_unit = fs::read(settings.service_unit_file())?;

    let second = ctl.provision()?;
    assert!(!second.units_written && !second.config_written);
    assert_eq!(
        fs::read_to_string(&settings.paths.master_config)?,
        "fps_limit=30\n"
    );
    assert_eq!(fs::read(settings.path_unit_file())?, path_unit);
    assert_eq!(fs::read(settings.service_unit_file())?, service_unit);

    Ok(())
}

#[test]
fn units_point_at_rebased_scratch_and_master() -> TestResult {
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path()).unit("myhud").build();
    let (ctl, _) = controller(settings.clone());

    ctl.provision()?;

    let path_unit = fs::read_to_string(root.path().join("home/.config/systemd/user/myhud@.path"))?;
    let scratch = root.path().join("tmp/mangohud.%i");
    assert!(path_unit.contains(&format!("PathChanged={}", scratch.display())));
    assert!(path_unit.contains("Unit=myhud@%i.service"));

    let service_unit =
        fs::read_to_string(root.path().join("home/.config/systemd/user/myhud@.service"))?;
    assert!(service_unit.contains(&format!(
        "ExecStart=/usr/bin/cp -v {} {}",
        settings.paths.master_config.display(),
        scratch.display()
    )));

    Ok(())
}
