//! The `inspect` subcommand

use anyhow::{Context, Result};
use clap::Args;
use splice::pattern::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(author, version, about = "Inspect .splice pattern files, or even entire directories for their contents", long_about = None)]
pub struct InspectArgs {
    /// The path(s) to inspect
    path: Vec<PathBuf>,

    /// Search folders recursively
    #[clap(short, long)]
    recursive: bool,
}

pub fn inspect(args: &InspectArgs) -> Result<()> {
    let paths: Vec<_> = args
        .path
        .iter()
        .flat_map(|path| {
            let mut walk_dir = WalkDir::new(path);
            if !args.recursive {
                walk_dir = walk_dir.max_depth(1);
            }

            walk_dir
        })
        .filter_map(Result::ok)
        .filter_map(get_path_if_valid)
        .collect();

    if let Some((last, rest)) = paths.split_last() {
        for path in rest {
            print(path)?;
            println!();
        }

        print(last)?;
    }

    Ok(())
}

fn print(path: &Path) -> Result<()> {
    let pattern = Pattern::from_path(path)
        .with_context(|| format!("Decoding {} failed", path.display()))?;

    println!("{}", path.file_name().unwrap().to_string_lossy());
    print!("{pattern}");

    Ok(())
}

fn get_path_if_valid(entry: DirEntry) -> Option<PathBuf> {
    if !is_hidden(&entry) {
        let path = entry.path();
        if has_supported_extension(path) {
            return Some(path.to_owned());
        }
    }

    None
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn has_supported_extension(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => ext == "splice",
        None => false,
    }
}
