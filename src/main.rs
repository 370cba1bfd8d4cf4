//! Replay a scripted pointer session and print the projected selections.
//!
//! ```text
//! area-selector script.json
//! ```
//!
//! The script names the image size and a list of pointer events in canvas
//! coordinates. Targets are resolved the way a view layer would, by hit
//! testing the current selections.

use anyhow::{Context, Result, bail};
use area_selector::geometry::Point;
use area_selector::{ImageInfo, PointerEvent, SelectionEngine, Settings};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Script {
    image: ImageInfo,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ScriptEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
    /// 1-based, as shown on the badge
    Delete { index: usize },
}

/// The replayed canvas sits at the client origin
const CANVAS_ORIGIN: Point = Point::new(0.0, 0.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(area_selector::constants::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: area-selector <script.json>");
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let script: Script = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let settings = Settings::load();
    let mut engine = SelectionEngine::from_settings(&settings);
    engine
        .load_image(script.image)
        .context("image cannot be displayed")?;

    for event in script.events {
        replay(&mut engine, event);
    }

    info!(count = engine.selections().len(), "Replay finished");
    println!("{}", engine.selected_area_json()?);
    Ok(())
}

fn replay(engine: &mut SelectionEngine, event: ScriptEvent) {
    match event {
        ScriptEvent::Down { x, y } => {
            let target = engine.hit_test(Point::new(x, y));
            engine.handle_mouse_down(PointerEvent::new(x, y, target), &CANVAS_ORIGIN);
        }
        ScriptEvent::Move { x, y } => {
            let target = engine.hit_test(Point::new(x, y));
            engine.handle_mouse_move(PointerEvent::new(x, y, target));
        }
        ScriptEvent::Up => engine.handle_mouse_up(),
        ScriptEvent::Leave => engine.handle_mouse_leave(),
        ScriptEvent::Delete { index } => {
            let id = index
                .checked_sub(1)
                .and_then(|i| engine.selections().get(i))
                .map(|s| s.id);
            match id {
                Some(id) => {
                    engine.delete_selection(id);
                }
                None => warn!(index, "No selection to delete"),
            }
        }
    }
}
