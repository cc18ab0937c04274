//! Recorded gesture scripts.
//!
//! A script is a JSON list of steps (tool and style changes, pointer events,
//! and commands) replayed against an [`AnnotationEngine`] in order. It is the
//! input format of the `annokit` binary and a convenient way to reproduce a
//! drawing session.
//!
//! ```json
//! {
//!   "width": 400, "height": 300,
//!   "steps": [
//!     { "op": "tool", "tool": "rectangle" },
//!     { "op": "drag", "points": [[10, 10], [50, 40]] },
//!     { "op": "undo" }
//!   ]
//! }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use annokit_core::{shared, Color};
use annokit_designer::{Animation, AnnotationEngine, PointerEvent, Tool};

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Tool {
        tool: Tool,
    },
    /// Change any subset of the current style.
    Style {
        color: Option<Color>,
        stroke_width: Option<f64>,
        opacity: Option<f64>,
        filled: Option<bool>,
    },
    Animation {
        animation: Option<Animation>,
    },
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    Leave(PointerEvent),
    /// Pointer-down at the first point, a move through each later point,
    /// and pointer-up at the last, all in logical units.
    Drag {
        points: Vec<[f64; 2]>,
    },
    Undo,
    Redo,
    Clear,
    DeleteSelected,
}

/// A surface size plus the steps to replay on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    pub steps: Vec<Step>,
}

/// What happened during a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps executed
    pub steps: usize,
    /// Pointer events after which the engine asked for a redraw
    pub redraws: usize,
    /// Shape-list change notifications delivered
    pub notifications: usize,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid gesture script")
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Replays every step against `engine`.
    pub fn replay(&self, engine: &mut AnnotationEngine) -> Result<ReplaySummary> {
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or_else(|| engine.viewport().width());
            let height = self.height.unwrap_or_else(|| engine.viewport().height());
            engine
                .set_surface_size(width, height)
                .context("Invalid script surface size")?;
        }

        let notifications = shared(0usize);
        let sink = notifications.clone();
        let subscription = engine.on_shapes_change(move |_| *sink.borrow_mut() += 1);

        let mut summary = ReplaySummary::default();
        let result = self.steps.iter().enumerate().try_for_each(|(i, step)| {
            if apply_step(engine, step).with_context(|| format!("Step {} failed", i + 1))? {
                summary.redraws += 1;
            }
            summary.steps += 1;
            Ok::<(), anyhow::Error>(())
        });

        engine.unsubscribe(subscription);
        summary.notifications = *notifications.borrow();
        result?;

        tracing::info!(
            "Replayed {} step(s): {} shape(s), {} notification(s)",
            summary.steps,
            engine.shapes().len(),
            summary.notifications
        );
        Ok(summary)
    }
}

/// Applies one step, returning whether a pointer handler asked for a redraw.
fn apply_step(engine: &mut AnnotationEngine, step: &Step) -> Result<bool> {
    let redraw = match step {
        Step::Tool { tool } => {
            engine.set_active_tool(*tool);
            false
        }
        Step::Style {
            color,
            stroke_width,
            opacity,
            filled,
        } => {
            let mut style = engine.style().clone();
            if let Some(color) = color {
                style.color = *color;
            }
            if let Some(width) = stroke_width {
                style.stroke_width = *width;
            }
            if let Some(opacity) = opacity {
                style.opacity = *opacity;
            }
            if let Some(filled) = filled {
                style.filled = *filled;
            }
            engine.set_style(style)?;
            false
        }
        Step::Animation { animation } => {
            engine.set_animation(animation.clone());
            false
        }
        Step::Down(event) => engine.pointer_down(*event),
        Step::Move(event) => engine.pointer_move(*event),
        Step::Up(event) => engine.pointer_up(*event),
        Step::Leave(event) => engine.pointer_leave(*event),
        Step::Drag { points } => {
            let Some((&[x0, y0], rest)) = points.split_first() else {
                bail!("drag needs at least one point");
            };
            let mut redraw = engine.pointer_down(PointerEvent::at(x0, y0));
            let mut last = (x0, y0);
            for &[x, y] in rest {
                redraw |= engine.pointer_move(PointerEvent::at(x, y));
                last = (x, y);
            }
            redraw | engine.pointer_up(PointerEvent::at(last.0, last.1))
        }
        Step::Undo => engine.undo(),
        Step::Redo => engine.redo(),
        Step::Clear => {
            engine.clear_all();
            true
        }
        Step::DeleteSelected => engine.delete_selected(),
    };
    Ok(redraw)
}
