//! menv: provision and manage a personal macOS development environment.
//!
//! The CLI wraps a bundled Ansible tree: commands resolve profiles and tags,
//! stage per-role configuration under `~/.config/menv/`, and drive
//! `ansible-playbook` for the actual provisioning work.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;
