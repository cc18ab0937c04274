//! Annotation engine: owns the shape list, history, and gesture state.
//!
//! This module is split into submodules:
//! - `input`: Pointer handlers driving the tool state machine
//! - `commands`: Undo, redo, clear, delete, and loading a drawing
//!
//! Every committed mutation pushes one history snapshot and notifies each
//! subscriber once with the full ordered shape list.

mod commands;
mod input;

pub use input::PointerEvent;

use annokit_core::{RenderError, ShapesCallback, StyleError};
use annokit_settings::{Config, EngineSettings};
use image::RgbaImage;
use tiny_skia::Pixmap;

use crate::history::History;
use crate::model::{Animation, OutlineParams, Shape, ShapeId, Style};
use crate::renderer::{Renderer, Scene};
use crate::tools::{GestureState, Tool};
use crate::viewport::Viewport;

/// Handle returned by [`AnnotationEngine::on_shapes_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The interactive drawing engine.
pub struct AnnotationEngine {
    shapes: Vec<Shape>,
    history: History<Vec<Shape>>,
    tool: Tool,
    style: Style,
    animation: Option<Animation>,
    gesture: GestureState,
    selected: Option<ShapeId>,
    viewport: Viewport,
    renderer: Renderer,
    settings: EngineSettings,
    /// `None` once every id has been handed out.
    next_id: Option<ShapeId>,
    listeners: Vec<(SubscriptionId, ShapesCallback<Shape>)>,
    next_subscription: u64,
}

impl AnnotationEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::build(&Config::default(), Style::default())
    }

    /// Creates an engine from a loaded configuration.
    pub fn with_config(config: &Config) -> Result<Self, StyleError> {
        let style = Style::try_from(&config.style)?;
        Ok(Self::build(config, style))
    }

    fn build(config: &Config, style: Style) -> Self {
        let outline = OutlineParams::from(&config.engine);
        Self {
            shapes: Vec::new(),
            history: History::new(Vec::new(), config.engine.history_depth),
            tool: Tool::default(),
            style,
            animation: None,
            gesture: GestureState::Idle,
            selected: None,
            viewport: Viewport::new(config.engine.surface_width, config.engine.surface_height),
            renderer: Renderer::new(config.render.clone(), outline),
            settings: config.engine.clone(),
            next_id: Some(1),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The committed shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool. Leaving the select tool clears the
    /// selection; a gesture in progress is abandoned on the next pointer-down.
    pub fn set_active_tool(&mut self, tool: Tool) {
        if tool != Tool::Select {
            self.selected = None;
        }
        if tool != self.tool {
            tracing::debug!("Active tool {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Sets the style stamped on shapes created from now on. Existing shapes
    /// keep theirs. On error the previous style stays in effect.
    pub fn set_style(&mut self, style: Style) -> Result<(), StyleError> {
        match Style::new(style.color, style.stroke_width, style.opacity, style.filled) {
            Ok(style) => {
                tracing::debug!(
                    "Style set: color={} width={} opacity={} filled={}",
                    style.color,
                    style.stroke_width,
                    style.opacity,
                    style.filled
                );
                self.style = style;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected style: {}", e);
                Err(e)
            }
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Sets the animation metadata stamped on shapes created from now on.
    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// The shape currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        self.gesture.in_progress()
    }

    pub fn history(&self) -> &History<Vec<Shape>> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Updates the logical surface size.
    pub fn set_surface_size(&mut self, width: f64, height: f64) -> Result<(), RenderError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::InvalidLogicalSize { width, height });
        }
        self.viewport.set_size(width, height);
        Ok(())
    }

    /// Registers a callback invoked with the full shape list after every
    /// committed mutation.
    pub fn on_shapes_change(&mut self, callback: impl FnMut(&[Shape]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// The scene as the renderer sees it right now.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            shapes: &self.shapes,
            in_progress: self.in_progress(),
            selected: self.selected,
        }
    }

    /// Redraws the current scene into `pixmap`.
    pub fn render(&self, pixmap: &mut Pixmap) {
        self.renderer.render(pixmap, &self.scene(), &self.viewport);
    }

    /// Renders the current scene into a new image of the given pixel size.
    pub fn render_to_image(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        self.renderer
            .render_to_image(&self.scene(), &self.viewport, width, height)
    }

    fn allocate_id(&mut self) -> Option<ShapeId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    /// Pushes the current list to history and notifies subscribers.
    fn commit(&mut self) {
        self.history.push(self.shapes.clone());
        tracing::debug!(
            "Committed {} shape(s), history {}/{}",
            self.shapes.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
        self.notify();
    }

    fn notify(&mut self) {
        for (_, callback) in self.listeners.iter_mut() {
            callback(&self.shapes);
        }
    }

    /// Drops the selection if the selected shape no longer exists.
    fn reconcile_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.shapes.iter().any(|s| s.id == id) {
                self.selected = None;
            }
        }
    }
}

impl Default for AnnotationEngine {
    fn default() -> Self {
        Self::new()
    }
}
