use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use slotpane::prelude::*;
use slotpane::{ClickKind, DEFAULT_ROW_WIDTH, IdDecoder, Modifiers};

use crate::error::{DemoError, Result};
use crate::grid::{GridSnapshot, render_text};

/// Default number of container rows.
pub const DEFAULT_ROWS: u16 = 6;

/// Largest grid the demo will allocate.
pub const MAX_GRID_SLOTS: usize = 1 << 16;

#[derive(Debug, Parser)]
#[command(
    name = "slotpane-demo",
    about = "Render SlotPane documents into a slot grid and replay clicks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the rendered grid.
    Render {
        #[command(flatten)]
        grid: GridArgs,

        /// Emit the grid as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Click slots and report which pane and item claimed each one.
    Click {
        #[command(flatten)]
        grid: GridArgs,

        #[command(flatten)]
        input: ClickArgs,

        /// Linear slot indices to click, in order.
        #[arg(required = true)]
        slots: Vec<usize>,
    },

    /// Load a document and list its panes.
    Check {
        /// Pane document to load.
        document: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Pane document to load.
    pub document: PathBuf,

    /// Number of container rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: u16,

    /// Slots per container row.
    #[arg(long, default_value_t = DEFAULT_ROW_WIDTH)]
    pub row_width: u16,
}

impl GridArgs {
    pub fn bounds(&self) -> GridSize {
        GridSize::new(self.row_width, self.rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Button {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<Button> for ClickKind {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => Self::Left,
            Button::Right => Self::Right,
            Button::Middle => Self::Middle,
        }
    }
}

/// Button and modifier keys applied to every replayed click.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ClickArgs {
    /// Mouse button.
    #[arg(long, value_enum, default_value_t = Button::Left)]
    pub button: Button,

    /// Hold shift.
    #[arg(long)]
    pub shift: bool,

    /// Hold control.
    #[arg(long)]
    pub ctrl: bool,

    /// Hold alt.
    #[arg(long)]
    pub alt: bool,
}

impl ClickArgs {
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::NONE;
        modifiers.set(Modifiers::SHIFT, self.shift);
        modifiers.set(Modifiers::CTRL, self.ctrl);
        modifiers.set(Modifiers::ALT, self.alt);
        modifiers
    }

    /// Short tag such as `right+shift`, or `None` for a plain left click.
    pub fn label(&self) -> Option<String> {
        let mut parts = Vec::new();
        match self.button {
            Button::Left => {}
            Button::Right => parts.push("right"),
            Button::Middle => parts.push("middle"),
        }
        let modifiers = self.modifiers();
        for (flag, name) in [
            (Modifiers::SHIFT, "shift"),
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::ALT, "alt"),
        ] {
            if modifiers.contains(flag) {
                parts.push(name);
            }
        }
        (!parts.is_empty()).then(|| parts.join("+"))
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &mut out)
}

pub fn run_with(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Render { grid, json } => {
            let (_, buffer) = render(&grid)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &GridSnapshot::capture(&buffer))?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_text(&buffer))?;
            }
        }
        Commands::Click { grid, input, slots } => {
            let (set, buffer) = render(&grid)?;
            let tag = input.label().map(|label| format!(" [{label}]")).unwrap_or_default();
            for slot in slots {
                if slot >= buffer.capacity() {
                    return Err(DemoError::SlotOutOfRange {
                        slot,
                        capacity: buffer.capacity(),
                    });
                }
                let mut event = buffer
                    .click(slot)
                    .with_kind(input.button.into())
                    .with_modifiers(input.modifiers());
                match set.dispatch(&mut event, buffer.bounds()) {
                    Some(hit) => {
                        let item = event.current.as_deref().unwrap_or_default();
                        let cancelled = if event.is_cancelled() { " (cancelled)" } else { "" };
                        writeln!(
                            out,
                            "slot {slot}: pane {} item {} {item:?}{tag}{cancelled}",
                            hit.pane, hit.item
                        )?;
                    }
                    None => writeln!(out, "slot {slot}: not claimed{tag}")?,
                }
            }
        }
        Commands::Check { document } => {
            let panes = load(&document, GridSize::new(DEFAULT_ROW_WIDTH, DEFAULT_ROWS))?;
            for (index, pane) in panes.iter().enumerate() {
                let origin = pane.origin();
                let size = pane.size();
                writeln!(
                    out,
                    "{index}: {} at ({}, {}) {}x{}, {} items",
                    pane.kind(),
                    origin.x,
                    origin.y,
                    size.length,
                    size.height,
                    pane.item_count()
                )?;
            }
            writeln!(out, "{} panes", panes.len())?;
        }
    }
    Ok(())
}

/// Loader with the callbacks documents may reference.
///
/// - `onClick="log"` logs the click with its button and modifiers.
/// - `onClick="cancel"` cancels the click event.
/// - `populate="numbers"` fills every cell that fits in `bounds` with its
///   one-based number.
pub fn demo_loader(bounds: GridSize) -> PaneLoader<IdDecoder> {
    let mut registry = CallbackRegistry::new();
    registry
        .register_action("log", |event: &mut ClickEvent<String>| {
            tracing::info!(
                slot = event.slot,
                item = ?event.current,
                kind = ?event.kind,
                modifiers = ?event.modifiers,
                "item clicked"
            );
        })
        .register_action("cancel", |event: &mut ClickEvent<String>| event.cancel())
        .register_populator("numbers", move |pane: &mut Pane<String>| populate_numbers(pane, bounds));
    PaneLoader::with_registry(IdDecoder, registry)
}

fn populate_numbers(pane: &mut Pane<String>, bounds: GridSize) {
    let size = pane.size().clamp_to(bounds);
    match pane {
        Pane::Outline(outline) => {
            for n in 1..=size.area() {
                outline.add_item(PaneItem::new(n.to_string()));
            }
        }
        Pane::Static(fixed) => {
            let mut n = 0usize;
            for y in 0..size.height {
                for x in 0..size.length {
                    n += 1;
                    fixed.add_item(PaneItem::new(n.to_string()), SlotPos::new(x, y));
                }
            }
        }
    }
}

fn load(path: &Path, bounds: GridSize) -> Result<Vec<Pane<String>>> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let panes = demo_loader(bounds).load_panes(&text)?;
    tracing::debug!(path = %path.display(), panes = panes.len(), "document loaded");
    Ok(panes)
}

fn render(grid: &GridArgs) -> Result<(PaneSet<String>, SlotBuffer<String>)> {
    let bounds = grid.bounds();
    if bounds.is_empty() {
        return Err(DemoError::InvalidArgument {
            message: format!("grid must be non-empty, got {}x{}", grid.row_width, grid.rows),
        });
    }
    if bounds.area() > MAX_GRID_SLOTS {
        return Err(DemoError::InvalidArgument {
            message: format!(
                "grid {}x{} exceeds {MAX_GRID_SLOTS} slots",
                grid.row_width, grid.rows
            ),
        });
    }
    let set: PaneSet<String> = load(&grid.document, bounds)?.into_iter().collect();
    let mut buffer = SlotBuffer::new(grid.row_width, grid.rows);
    set.place_all(&mut buffer);
    Ok((set, buffer))
}
