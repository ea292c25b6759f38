// src/privilege.rs

//! Privilege drop, run by the host before any plugin logic.
//!
//! The plugin loader may start us as root; unit files and configs must be
//! written as the session user so `systemctl --user` can see them.

use nix::unistd::{Gid, Uid, getgid, getuid, setgid, setuid};
use tracing::info;

use crate::errors::{HudError, Result};

/// Switch to `uid`/`gid`. Group first: after `setuid` we may no longer be
/// allowed to change it.
pub fn drop_to(uid: u32, gid: u32) -> Result<()> {
    let (uid, gid) = (Uid::from_raw(uid), Gid::from_raw(gid));
    if getuid() == uid && getgid() == gid {
        return Ok(());
    }

    setgid(gid).map_err(|e| HudError::Other(anyhow::anyhow!("setgid({gid}) failed: {e}")))?;
    setuid(uid).map_err(|e| HudError::Other(anyhow::anyhow!("setuid({uid}) failed: {e}")))?;

    info!(%uid, %gid, "dropped privileges");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_to_current_ids_is_a_no_op() {
        assert!(drop_to(getuid().as_raw(), getgid().as_raw()).is_ok());
    }
}
