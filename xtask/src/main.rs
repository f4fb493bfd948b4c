//! Build automation tasks for the nokia-7seg project.
//!
//! Run with: `cargo xtask <command>`

mod demo;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

/// Cortex-M0+ target used to prove the library builds for a microcontroller.
const EMBEDDED_TARGET: &str = "thumbv6m-none-eabi";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for nokia-7seg", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build lib for embedded, run host tests, generate docs
    CheckAll,
    /// Build library for a target
    Build {
        #[arg(long, default_value = EMBEDDED_TARGET)]
        target: String,
        /// Enable defmt logging
        #[arg(long)]
        defmt: bool,
    },
    /// Render the demo walkthrough to PNG files
    Snapshot {
        /// Output directory (defaults to target/snapshots)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { target, defmt } => build_lib(&target, defmt),
        Commands::Snapshot { out } => snapshot(out),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Building library (no features)...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        EMBEDDED_TARGET,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building library (defmt)...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        EMBEDDED_TARGET,
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running host tests...".cyan());
    let host_target = host_target();
    match host_target.as_deref() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    let mut test_cmd = Command::new("cargo");
    test_cmd
        .current_dir(&workspace_root)
        .args(["test", "-p", "nokia-7seg"]);

    if let Some(target) = host_target {
        test_cmd.arg("--target").arg(target);
    }

    test_cmd.args(["--features", "host"]);

    if !run_command(&mut test_cmd) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "-p",
        "nokia-7seg",
        "--no-deps",
        "--features",
        "host",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(target: &str, defmt: bool) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!("Building library for {target} (defmt: {defmt})").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["build", "--lib", "--target", target]);
    if defmt {
        cmd.args(["--features", "defmt"]);
    }

    if run_command(&mut cmd) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn snapshot(out: Option<PathBuf>) -> ExitCode {
    let out_dir = out.unwrap_or_else(|| workspace_root().join("target/snapshots"));
    println!(
        "{}",
        format!("Rendering demo to {}", out_dir.display()).cyan()
    );

    match demo::render(&out_dir) {
        Ok(count) => {
            println!(
                "{}",
                format!("Wrote {count} frames and sheet.png").green()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format!("Snapshot failed: {e}").red());
            ExitCode::FAILURE
        }
    }
}

fn workspace_root() -> PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
