// tests/toggle_scenario.rs

mod common;
use crate::common::builders::{SettingsBuilder, scratch_config};
use crate::common::fake_proc::FakeProcTable;
use crate::common::{age_file, controller, init_tracing, mtime};

use std::error::Error;
use std::fs;

use customhud::exec::UnitAction;
use customhud::types::{HudState, LocatorStrategy};

type TestResult = Result<(), Box<dyn Error>>;

const ORIGINAL: &str = "fps_limit=60\nhud_compact\n";
const CUSTOM: &str = "control=mangohud\nbattery\n";

#[tokio::test]
async fn enable_backs_up_activates_and_touches() -> TestResult {
    init_tracing();
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path())
        .strategy(LocatorStrategy::Newest)
        .build();
    let active = scratch_config(root.path(), "abcd");
    fs::create_dir_all(active.parent().unwrap())?;
    fs::write(&active, ORIGINAL)?;

    let (ctl, systemctl) = controller(settings.clone());
    assert!(!ctl.state().await?);
    let before = age_file(&active);

    ctl.set_state(HudState::Enabled).await?;

    assert!(mtime(&active) > before);
    assert_eq!(fs::read_to_string(&settings.paths.backup)?, ORIGINAL);
    assert!(systemctl.is_active("customhud@abcd.path"));
    assert!(ctl.state().await?);

    Ok(())
}

#[tokio::test]
async fn disable_restores_exact_pre_enable_bytes() -> TestResult {
    init_tracing();
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path())
        .strategy(LocatorStrategy::Newest)
        .build();
    let active = scratch_config(root.path(), "abcd");
    fs::create_dir_all(active.parent().unwrap())?;
    fs::write(&active, ORIGINAL)?;

    let (ctl, systemctl) = controller(settings);

    ctl.set_state(HudState::Enabled).await?;
    // What the trigger unit does once the watch is live.
    fs::write(&active, CUSTOM)?;

    ctl.set_state(HudState::Disabled).await?;

    assert_eq!(fs::read_to_string(&active)?, ORIGINAL);
    assert!(!systemctl.is_active("customhud@abcd.path"));
    assert!(!ctl.state().await?);

    Ok(())
}

#[tokio::test]
async fn repeating_a_state_reruns_the_same_steps() -> TestResult {
    init_tracing();
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path())
        .strategy(LocatorStrategy::Newest)
        .build();
    let active = scratch_config(root.path(), "r3p");
    fs::create_dir_all(active.parent().unwrap())?;
    fs::write(&active, ORIGINAL)?;

    let (ctl, systemctl) = controller(settings.clone());

    assert_eq!(ctl.set_state(HudState::Enabled).await?, 0);
    assert_eq!(ctl.set_state(HudState::Enabled).await?, 0);

    assert_eq!(
        systemctl.calls(),
        vec![
            (UnitAction::EnableNow, "customhud@r3p.path".to_string()),
            (UnitAction::EnableNow, "customhud@r3p.path".to_string()),
        ]
    );
    assert_eq!(fs::read_to_string(&settings.paths.backup)?, ORIGINAL);
    assert!(systemctl.is_active("customhud@r3p.path"));

    ctl.set_state(HudState::Disabled).await?;
    ctl.set_state(HudState::Disabled).await?;
    assert_eq!(fs::read_to_string(&active)?, ORIGINAL);
    assert!(!systemctl.is_active("customhud@r3p.path"));

    Ok(())
}

#[tokio::test]
async fn process_strategy_targets_overlay_environment() -> TestResult {
    init_tracing();
    let root = tempfile::tempdir()?;
    let settings = SettingsBuilder::new(root.path())
        .strategy(LocatorStrategy::Process)
        .build();

    // Two scratch configs; the newer one is *not* the overlay's.
    let overlays = scratch_config(root.path(), "live");
    let stale = scratch_config(root.path(), "stale");
    fs::create_dir_all(overlays.parent().unwrap())?;
    fs::write(&overlays, ORIGINAL)?;
    age_file(&overlays);
    fs::write(&stale, "other\n")?;

    let overlays_str = overlays.to_string_lossy().into_owned();
    FakeProcTable::new(&settings.paths.proc_root)?
        .noise()?
        .process(1, &["/sbin/init"], &[("HOME", "/")])?
        .process(
            812,
            &["/usr/bin/mangoapp"],
            &[("HOME", "/home/deck"), ("MANGOHUD_CONFIGFILE", overlays_str.as_str())],
        )?;

    let (ctl, systemctl) = controller(settings.clone());
    ctl.set_state(HudState::Enabled).await?;

    assert!(systemctl.is_active("customhud@live.path"));
    assert_eq!(fs::read_to_string(&settings.paths.backup)?, ORIGINAL);
    Ok(())
}
