use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use tracing::{info, warn};

/// Notification fired after every successful persist.
///
/// Hooks are fire-and-forget: they cannot fail the store operation that
/// triggered them, so implementations report their own problems.
pub trait PersistHook {
    fn after_persist(&self, path: &Path);
}

impl<F> PersistHook for F
where
    F: Fn(&Path),
{
    fn after_persist(&self, path: &Path) {
        self(path)
    }
}

/// Stage, commit, and push the song list with the system `git` binary.
#[derive(Debug, Clone)]
pub struct GitPushHook {
    remote: String,
    branch: String,
}

impl Default for GitPushHook {
    fn default() -> Self {
        Self::new("origin", "main")
    }
}

impl GitPushHook {
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// Commit message stamped with the local time of the save.
    pub fn commit_message() -> String {
        format!(
            "Update song list: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn push(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = path
            .file_name()
            .ok_or_else(|| anyhow!("song list path has no file name"))?;

        let message = Self::commit_message();
        run_git(dir, &[OsStr::new("add"), file])?;
        run_git(dir, &[OsStr::new("commit"), OsStr::new("-m"), OsStr::new(&message)])?;
        run_git(
            dir,
            &[OsStr::new("push"), OsStr::new(&self.remote), OsStr::new(&self.branch)],
        )?;

        info!(remote = %self.remote, branch = %self.branch, "pushed song list");
        Ok(())
    }
}

impl PersistHook for GitPushHook {
    fn after_persist(&self, path: &Path) {
        if let Err(err) = self.push(path) {
            warn!("git push of {:?} failed: {err:#}", path);
        }
    }
}

/// A `git` invocation rooted at `dir` that can never prompt. The TUI holds
/// the terminal, so a credential or ssh passphrase prompt on `/dev/tty`
/// would hang the app; with prompts off git fails fast instead.
fn git_command(dir: &Path) -> Command {
    let mut command = Command::new("git");
    command
        .current_dir(dir)
        .stdin(Stdio::null())
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("GIT_SSH_COMMAND", "ssh -o BatchMode=yes");
    command
}

/// Run one git subcommand in `dir`, turning a non-zero exit into an error
/// carrying git's stderr.
fn run_git(dir: &Path, args: &[&OsStr]) -> Result<()> {
    let label = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();

    let output = git_command(dir)
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {label}"))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(anyhow!(
            "git {label} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ))
    }
}
