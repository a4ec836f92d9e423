use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use lev_tools::{
    create_level, format_level_pretty, format_report, inspect_level, resave, ResaveOptions,
};
use rand::Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lev-tools", version, about = "lev level inspection and conversion tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect level headers, counts and best times.
    Inspect {
        /// Path to a level file or a directory of levels.
        level_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected levels.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected levels (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode a level and print every field.
    Dump {
        /// Path to the level file.
        level_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
    /// Write the default level.
    New {
        /// Output path.
        out: PathBuf,
        /// Level name.
        #[arg(long)]
        name: Option<String>,
        /// Link identifier; random when omitted.
        #[arg(long)]
        link: Option<u32>,
    },
    /// Decode and encode a level again with fresh integrity sums.
    Resave {
        /// Input level file.
        input: PathBuf,
        /// Output path.
        out: PathBuf,
        /// Drop both best-time tables.
        #[arg(long)]
        clear_top10: bool,
        /// Draw a new random link identifier.
        #[arg(long)]
        new_link: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            level_path,
            glob,
            sort,
            limit,
        } => {
            if level_path.is_dir() {
                let entries = collect_level_entries(&level_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    match inspect_file(&entry.path) {
                        Ok(report) => print!("{report}"),
                        Err(err) => tracing::warn!(path = %entry.path.display(), "{err:#}"),
                    }
                }
            } else {
                print!("{}", inspect_file(&level_path)?);
            }
        }
        Command::Dump { level_file, format } => {
            let bytes = read_level(&level_file)?;
            let level = level::decode_level(&bytes)
                .with_context(|| format!("decode level {}", level_file.display()))?;
            match format {
                DumpFormat::Json => {
                    let json = serde_json::to_string_pretty(&level).context("serialize json")?;
                    println!("{json}");
                }
                DumpFormat::Pretty => {
                    print!("{}", format_level_pretty(&level));
                }
            }
        }
        Command::New { out, name, link } => {
            let link = link.unwrap_or_else(|| rand::thread_rng().gen());
            let level = create_level(name.as_deref(), link);
            let bytes = level::encode_level(&level).context("encode level")?;
            fs::write(&out, &bytes).with_context(|| format!("write level {}", out.display()))?;
            tracing::info!(path = %out.display(), link, bytes = bytes.len(), "created level");
        }
        Command::Resave {
            input,
            out,
            clear_top10,
            new_link,
        } => {
            let mut rng = rand::thread_rng();
            let options = ResaveOptions {
                clear_top10,
                new_link: new_link.then(|| rng.gen()),
            };
            let bytes = read_level(&input)?;
            let resaved = resave(&bytes, options, &mut rng)
                .with_context(|| format!("resave {}", input.display()))?;
            fs::write(&out, &resaved).with_context(|| format!("write level {}", out.display()))?;
            tracing::info!(
                from = %input.display(),
                to = %out.display(),
                clear_top10,
                new_link = ?options.new_link,
                "resaved level"
            );
        }
    }
    Ok(())
}

fn read_level(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read level {}", path.display()))
}

fn inspect_file(path: &Path) -> Result<String> {
    let bytes = read_level(path)?;
    let report = inspect_level(&bytes, &wire::Limits::default())
        .with_context(|| format!("inspect {}", path.display()))?;
    Ok(format_report(&report))
}

struct LevelEntry {
    path: PathBuf,
    size: u64,
}

fn collect_level_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<LevelEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(LevelEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<LevelEntry>,
    sort: Option<InspectSort>,
) -> Vec<LevelEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}
