use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hrdscope_core::{AvcTimingHrdDescriptor, display_payload, parse_hex};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if !path.join("input.hex").exists() {
            continue;
        }
        regenerate_one(&path)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<(), String> {
    let input = dir.join("input.hex");
    let text = fs::read_to_string(&input)
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let bytes =
        parse_hex(&text).ok_or_else(|| format!("invalid hex in {}", input.display()))?;

    write(&dir.join("expected_display.txt"), &display_payload(&bytes, 0))?;

    let tree_path = dir.join("expected_tree.json");
    let error_path = dir.join("expected_error.txt");
    match AvcTimingHrdDescriptor::deserialize(&bytes) {
        Ok(desc) => {
            let json = serde_json::to_string_pretty(&desc.to_text())
                .map_err(|err| format!("JSON serialization failed: {}", err))?;
            write(&tree_path, &format!("{json}\n"))?;
            remove_if_exists(&error_path)
        }
        Err(err) => {
            write(&error_path, &format!("{err}\n"))?;
            remove_if_exists(&tree_path)
        }
    }
}

fn write(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn remove_if_exists(path: &Path) -> Result<(), String> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|err| format!("failed to remove {}: {}", path.display(), err))?;
    }
    Ok(())
}
