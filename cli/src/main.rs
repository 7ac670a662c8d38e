//! untoc CLI - document outline inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use untoc::{to_json, JsonFormat, Untoc};

#[derive(Parser)]
#[command(name = "untoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document outlines from positioned text fragments", long_about = None)]
struct Cli {
    /// Input fragment JSON file, or a directory of them
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory (default: next to each input file)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,

    /// Maximum nesting level (1-3)
    #[arg(long, default_value = "3")]
    max_level: u8,

    /// Skip title inference
    #[arg(long)]
    no_title: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = if cli.input.is_dir() {
        process_directory(&cli)
    } else {
        process_file(&cli.input, &cli).map(|path| {
            println!("{} {}", "Saved to".green(), path.display());
        })
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Run the pipeline over one fragment file and write the outline next to
/// it (or into the output directory). Returns the output path.
fn process_file(input: &Path, cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let fragments = untoc::fragments_from_file(input)?;
    log::debug!("loaded {} fragments from {}", fragments.len(), input.display());

    let mut runner = Untoc::new().with_max_level(cli.max_level);
    if cli.no_title {
        runner = runner.without_title();
    }
    let outline = runner.extract(&fragments);

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&outline, format)?;

    let output_path = output_path_for(input, cli.output.as_deref());
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, json)?;

    Ok(output_path)
}

/// Process every fragment JSON file in a directory, reporting per-file
/// status and a summary.
fn process_directory(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(&cli.input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_fragment_file(path))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "No fragment JSON files found.".yellow());
        return Ok(());
    }

    let mut succeeded = 0usize;
    for input in &inputs {
        match process_file(input, cli) {
            Ok(path) => {
                succeeded += 1;
                println!(
                    "{} {} {} {}",
                    "✓".green(),
                    input.display(),
                    "→".dimmed(),
                    path.display()
                );
            }
            Err(e) => {
                println!("{} {}: {}", "✗".red(), input.display(), e);
            }
        }
    }

    println!(
        "\n{} {}/{} files processed",
        "Done:".green().bold(),
        succeeded,
        inputs.len()
    );

    if succeeded == 0 {
        return Err("no files processed successfully".into());
    }
    Ok(())
}

/// `.json` inputs, excluding outlines a previous run produced.
fn is_fragment_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".json") && !name.ends_with(".outline.json")
}

fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = format!("{}.outline.json", stem);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(input: &Path, output: Option<PathBuf>) -> Cli {
        Cli {
            input: input.to_path_buf(),
            output,
            compact: true,
            max_level: 3,
            no_title: false,
        }
    }

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path_for(Path::new("/docs/report.json"), None);
        assert_eq!(path, Path::new("/docs/report.outline.json"));
    }

    #[test]
    fn test_output_path_in_directory() {
        let path = output_path_for(Path::new("/docs/report.json"), Some(Path::new("/out")));
        assert_eq!(path, Path::new("/out/report.outline.json"));
    }

    #[test]
    fn test_is_fragment_file() {
        assert!(is_fragment_file(Path::new("a.json")));
        assert!(!is_fragment_file(Path::new("a.outline.json")));
        assert!(!is_fragment_file(Path::new("a.txt")));
    }

    #[test]
    fn test_process_file_writes_outline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.json");
        fs::write(
            &input,
            r#"[{"text": "1. Introduction", "page": 1, "x_pos": 72.0, "y_pos": 300.0, "page_height": 792.0}]"#,
        )
        .unwrap();

        let cli = cli_for(&input, None);
        let output = process_file(&input, &cli).unwrap();

        assert_eq!(output, dir.path().join("doc.outline.json"));
        let json = fs::read_to_string(output).unwrap();
        assert!(json.contains("\"1. Introduction\""));
        assert!(json.contains("\"H1\""));
    }

    #[test]
    fn test_process_file_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "not json").unwrap();

        let cli = cli_for(&input, None);
        assert!(process_file(&input, &cli).is_err());
    }
}
