use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DOMAIN_CRATE: &str = "luckydraw-domain";

/// Crates the domain must not depend on (outside dev-dependencies).
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "tokio",
    "rand",
    "async-trait",
    "tracing",
    "luckydraw-engine",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, "dev" or "build" otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    let mut violations = forbidden_dependencies(domain);

    let src_dir = domain
        .manifest_path
        .parent()
        .context("manifest has no parent directory")?
        .join("src");
    violations.extend(runtime_usages(&src_dir)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_CRATE} is free of runtime dependencies");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|d| d.kind.is_none())
        .filter(|d| FORBIDDEN_DOMAIN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("{} depends on {}", package.name, d.name))
        .collect()
}

/// Find paths into the runtime crates in domain sources.
fn runtime_usages(src_dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\b(tokio|tracing|async_trait)::")
        .context("compiling usage pattern")?;

    let mut violations = Vec::new();
    for file in rust_files(src_dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in source.lines().enumerate() {
            if let Some(m) = pattern.find(line) {
                violations.push(format!(
                    "{}:{} uses {}",
                    file.display(),
                    line_no + 1,
                    m.as_str().trim_end_matches("::")
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
