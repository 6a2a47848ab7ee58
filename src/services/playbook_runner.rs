//! `ansible-playbook` execution with streamed output.

use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Once;

use crate::ports::{AnsiblePaths, AnsibleRunner};

const ANSIBLE_PLAYBOOK: &str = "ansible-playbook";
const SIGINT: i32 = 2;

static INTERRUPT_GUARD: Once = Once::new();

/// Keep the CLI alive through a terminal interrupt. The terminal delivers
/// the signal to the whole process group; the child handles it and exits,
/// while we drain the pipe and report 130.
fn install_interrupt_guard() {
    INTERRUPT_GUARD.call_once(|| {
        let _ = ctrlc::set_handler(|| {});
    });
}

/// Runs the packaged playbook through the external `ansible-playbook`.
pub struct PlaybookCommandRunner {
    playbook_path: PathBuf,
    ansible_dir: PathBuf,
    ansible_cfg: PathBuf,
    local_config_root: PathBuf,
}

impl PlaybookCommandRunner {
    pub fn new(paths: &impl AnsiblePaths, local_config_root: PathBuf) -> Self {
        Self {
            playbook_path: paths.playbook_path(),
            ansible_dir: paths.ansible_dir().to_path_buf(),
            ansible_cfg: paths.config_path(),
            local_config_root,
        }
    }

    /// The argument vector after the executable name, in invocation order.
    fn build_args(&self, profile: &str, tags: &[String], verbose: bool) -> Vec<String> {
        let repo_root: &Path = self.ansible_dir.parent().unwrap_or(&self.ansible_dir);

        let mut args = vec![
            self.playbook_path.display().to_string(),
            "-e".to_string(),
            format!("profile={}", profile),
            "-e".to_string(),
            format!("config_dir_abs_path={}", self.ansible_dir.display()),
            "-e".to_string(),
            format!("repo_root_path={}", repo_root.display()),
            "-e".to_string(),
            format!("local_config_root={}", self.local_config_root.display()),
        ];

        if !tags.is_empty() {
            args.push("--tags".to_string());
            args.push(tags.join(","));
        }
        if verbose {
            args.push("-vvv".to_string());
        }

        args
    }
}

impl AnsibleRunner for PlaybookCommandRunner {
    fn run_playbook(&self, profile: &str, tags: &[String], verbose: bool) -> i32 {
        install_interrupt_guard();

        println!("Running ansible-playbook for profile: {}", profile);
        if !tags.is_empty() {
            println!("Tags: {}", tags.join(", "));
        }
        println!();

        // One pipe carries the child's stdout and stderr so lines arrive in
        // the order the child produced them.
        let (reader, stdout_writer) = match io::pipe() {
            Ok(pair) => pair,
            Err(err) => {
                eprintln!("Error: failed to set up output pipe: {}", err);
                return 1;
            }
        };
        let stderr_writer = match stdout_writer.try_clone() {
            Ok(writer) => writer,
            Err(err) => {
                eprintln!("Error: failed to set up output pipe: {}", err);
                return 1;
            }
        };

        let mut command = Command::new(ANSIBLE_PLAYBOOK);
        command
            .args(self.build_args(profile, tags, verbose))
            .env("ANSIBLE_CONFIG", &self.ansible_cfg)
            .stdout(Stdio::from(stdout_writer))
            .stderr(Stdio::from(stderr_writer));

        let spawned = command.spawn();
        // Release the parent's copies of the write end, or the reader below
        // never sees EOF.
        drop(command);

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                eprintln!(
                    "Error: ansible-playbook not found. Please ensure Ansible is installed."
                );
                return 1;
            }
            Err(err) => {
                eprintln!("Error: failed to launch ansible-playbook: {}", err);
                return 1;
            }
        };

        for line in BufReader::new(reader).lines() {
            let Ok(line) = line else { break };
            println!("{}", line);
            let _ = io::stdout().flush();
        }

        match child.wait() {
            Ok(status) => {
                if status.signal() == Some(SIGINT) {
                    eprintln!();
                    eprintln!("Interrupted by user");
                    return 130;
                }
                status.code().unwrap_or(1)
            }
            Err(err) => {
                eprintln!("Error: failed to wait for ansible-playbook: {}", err);
                1
            }
        }
    }
}
