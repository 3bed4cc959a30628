#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use medcabinet::config::Config;
use medcabinet::core::Session;
use medcabinet::models::Prescription;
use medcabinet::ui::MemoryNotifier;
use std::path::PathBuf;

pub fn mc() -> Command {
    cargo_bin_cmd!("medcabinet")
}

/// Binary invocation pinned to a config path that does not exist, so every
/// run uses the defaults regardless of the machine's home directory.
pub fn mc_defaults(dir: &tempfile::TempDir) -> Command {
    let mut cmd = mc();
    cmd.arg("--config").arg(missing_config(dir));
    cmd
}

pub fn missing_config(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("medcabinet.conf")
}

pub fn session() -> Session<MemoryNotifier> {
    Session::new(Config::default(), MemoryNotifier::new()).expect("session")
}

pub fn quiet_session() -> Session<MemoryNotifier> {
    let cfg = Config {
        low_quantity_alert: false,
        ..Config::default()
    };
    Session::new(cfg, MemoryNotifier::new()).expect("session")
}

pub fn names(list: &[Prescription]) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
}

/// Seed names in alphabetical order.
pub const SORTED_SEED: [&str; 11] = [
    "Amlodipine",
    "Atorvastatin",
    "Escitalopram",
    "Gabapentin",
    "Hydrochlorothiazide",
    "Levothyroxine",
    "Lisinopril",
    "Metformin",
    "Montelukast",
    "Omeprazole",
    "Sertraline",
];

/// Byte offset of each needle in `haystack`, panicking on a missing one.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n).unwrap_or_else(|| panic!("missing {n} in output")))
        .collect()
}
