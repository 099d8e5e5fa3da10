use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for pipenet
pub fn pipenet() -> Command {
    cargo_bin_cmd!("pipenet")
}

/// Four-node network whose MST drops the `A,C` edge
pub const SCENARIO_CSV: &str = "u,v,w\nA,B,1\nB,C,2\nA,C,2\nC,D,1\n";

/// Two disjoint unit-weight triangles
pub const TRIANGLES_CSV: &str = "from,to,cost\nA,B,1\nA,C,1\nB,C,1\nD,E,1\nD,F,1\nE,F,1\n";

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
