use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use customhud::errors::Result;
use customhud::exec::{CommandOutput, SystemctlBackend, UnitAction};

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<(UnitAction, String)>,
    active: HashSet<String>,
    fail_with: Option<i32>,
}

/// A fake `systemctl --user` that:
/// - records every call
/// - tracks which units are active (`enable --now` / `disable --now`)
/// - answers `is-active` like systemd (`active\n` + 0, `inactive\n` + 3)
#[derive(Debug, Clone, Default)]
pub struct FakeSystemctl {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSystemctl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(UnitAction, String)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn is_active(&self, unit: &str) -> bool {
        self.state.lock().unwrap().active.contains(unit)
    }

    /// Make every enable/disable exit with `code` from now on.
    pub fn fail_toggles_with(&self, code: i32) {
        self.state.lock().unwrap().fail_with = Some(code);
    }
}

impl SystemctlBackend for FakeSystemctl {
    fn run<'a>(
        &'a self,
        action: UnitAction,
        unit: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        let output = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((action, unit.to_string()));

            match (action, state.fail_with) {
                (UnitAction::IsActive, _) => {
                    if state.active.contains(unit) {
                        CommandOutput { code: 0, stdout: b"active\n".to_vec() }
                    } else {
                        CommandOutput { code: 3, stdout: b"inactive\n".to_vec() }
                    }
                }
                (_, Some(code)) => CommandOutput { code, stdout: Vec::new() },
                (UnitAction::EnableNow, None) => {
                    state.active.insert(unit.to_string());
                    CommandOutput { code: 0, stdout: Vec::new() }
                }
                (UnitAction::DisableNow, None) => {
                    state.active.remove(unit);
                    CommandOutput { code: 0, stdout: Vec::new() }
                }
            }
        };

        Box::pin(async move { Ok(output) })
    }
}
