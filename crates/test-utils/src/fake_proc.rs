use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lays out `<root>/<pid>/{cmdline,environ}` the way procfs presents them.
pub struct FakeProcTable {
    root: PathBuf,
}

impl FakeProcTable {
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Add a process. `argv` and `env` are joined with NUL terminators.
    pub fn process(&self, pid: u32, argv: &[&str], env: &[(&str, &str)]) -> io::Result<&Self> {
        let dir = self.root.join(pid.to_string());
        fs::create_dir_all(&dir)?;

        let cmdline: String = argv.iter().map(|a| format!("{a}\0")).collect();
        let environ: String = env.iter().map(|(k, v)| format!("{k}={v}\0")).collect();
        fs::write(dir.join("cmdline"), cmdline)?;
        fs::write(dir.join("environ"), environ)?;
        Ok(self)
    }

    /// A pid directory whose files are already gone (process exited mid-scan).
    pub fn vanished(&self, pid: u32) -> io::Result<&Self> {
        fs::create_dir_all(self.root.join(pid.to_string()))?;
        Ok(self)
    }

    /// Non-pid entries like `self`, `sys`, `cpuinfo`.
    pub fn noise(&self) -> io::Result<&Self> {
        fs::create_dir_all(self.root.join("sys"))?;
        fs::write(self.root.join("cpuinfo"), "processor\t: 0\n")?;
        Ok(self)
    }
}
