//! Build script for the confluence-ops project
//!
//! Embeds version and build metadata for runtime access

use std::env;
use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Embeds build-time information as environment variables accessible at
/// runtime: git commit hash, build timestamp, target triple, and rustc
/// version.
fn embed_build_info() {
  if let Ok(output) = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
    let git_hash = String::from_utf8(output.stdout).unwrap_or_default().trim().to_string();
    println!("cargo:rustc-env=GIT_HASH={git_hash}");
  } else {
    println!("cargo:rustc-env=GIT_HASH=unknown");
  }

  println!(
    "cargo:rustc-env=BUILD_TIMESTAMP={}",
    std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .unwrap()
      .as_secs()
  );

  println!("cargo:rustc-env=TARGET={}", env::var("TARGET").unwrap_or_default());

  if let Ok(output) = Command::new("rustc").args(["--version"]).output() {
    let rustc_version = String::from_utf8(output.stdout).unwrap_or_default().trim().to_string();
    println!("cargo:rustc-env=RUSTC_VERSION={rustc_version}");
  } else {
    println!("cargo:rustc-env=RUSTC_VERSION=unknown");
  }
}

/// Re-run when the build script, git HEAD, or the target triple changes.
fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
  println!("cargo:rerun-if-env-changed=TARGET");
}
