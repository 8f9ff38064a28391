//! homewidget: preview the home-screen widget from a shared container.
//!
//! Run with:  `RUST_LOG=debug homewidget ./container medium --watch`
//!
//! Arguments (any order):
//! - a container directory (default: `$HOMEWIDGET_CONTAINER`, then
//!   `$XDG_DATA_HOME/homewidget/<group>`)
//! - `small`, `medium`, `large` or `all` (default: `all`)
//! - `--watch` to re-render whenever the container changes

use anyhow::{bail, Result};
use hw_core::SizeClass;
use hw_store::{EntryProvider, FileStore, StoreWatcher};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_GROUP: &str = "group.com.example.superhomewidget";

#[derive(Debug)]
struct Args {
    container: PathBuf,
    sizes:     Vec<SizeClass>,
    watch:     bool,
}

impl Args {
    fn parse(raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut container = None;
        let mut sizes = SizeClass::ALL.to_vec();
        let mut watch = false;

        for arg in raw {
            match arg.as_str() {
                "--watch" | "-w" => watch = true,
                "all" => sizes = SizeClass::ALL.to_vec(),
                flag if flag.starts_with('-') => bail!("unknown flag '{flag}'"),
                other => match other.parse::<SizeClass>() {
                    Ok(size) => sizes = vec![size],
                    Err(_) if container.is_none() => container = Some(PathBuf::from(other)),
                    Err(e) => bail!(e),
                },
            }
        }

        Ok(Self {
            container: container.unwrap_or_else(default_container),
            sizes,
            watch,
        })
    }
}

/// Container directory, honouring `$HOMEWIDGET_CONTAINER` and `$XDG_DATA_HOME`.
fn default_container() -> PathBuf {
    if let Ok(dir) = std::env::var("HOMEWIDGET_CONTAINER") {
        return PathBuf::from(dir);
    }
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("homewidget").join(DEFAULT_GROUP)
}

fn render(store: &FileStore, sizes: &[SizeClass]) -> Value {
    let provider = EntryProvider::new(store);
    let mut out = Map::new();

    for &size in sizes {
        let timeline = provider.timeline(size);
        let Some(entry) = timeline.entries.first() else {
            warn!("Empty timeline for {size} widget.");
            continue;
        };
        let layout = hw_renderer::render(size, &entry.content, &entry.style, entry.date);
        out.insert(
            size.key().to_string(),
            json!({
                "nextRefresh": timeline.next_refresh,
                "style":       entry.style,
                "layout":      layout,
            }),
        );
    }

    Value::Object(out)
}

fn print(store: &FileStore, sizes: &[SizeClass]) -> Result<()> {
    let value = render(store, sizes);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("homewidget v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse(std::env::args().skip(1))?;
    let store = FileStore::open(&args.container)?;
    info!("Reading shared container: {}", store.dir().display());

    print(&store, &args.sizes)?;
    if !args.watch {
        return Ok(());
    }

    let (_watcher, mut changes) = StoreWatcher::spawn(store.dir());
    loop {
        tokio::select! {
            change = changes.recv() => {
                if change.is_none() {
                    break;
                }
                info!("Container changed; re-rendering.");
                print(&store, &args.sizes)?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted.");
                break;
            }
        }
    }

    Ok(())
}
