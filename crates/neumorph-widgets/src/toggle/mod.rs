//! Neumorphic toggle switch widget.
//!
//! The widget combines three pieces:
//! - [`size`] resolves the size input into CSS and pixel dimensions,
//! - [`state`] owns or mirrors the on/off value,
//! - [`interaction`] turns clicks, taps and Space/Enter into toggle requests.
//!
//! # Examples
//!
//! ```
//! use neumorph_core::{Event, Key, Widget};
//! use neumorph_widgets::{NeumorphicToggle, SizePreset};
//!
//! let mut toggle = NeumorphicToggle::new().size(SizePreset::Small);
//! assert!(!toggle.is_on());
//!
//! toggle.event(&Event::KeyDown { key: Key::Space });
//! assert!(toggle.is_on());
//! ```

pub mod interaction;
pub mod palette;
pub mod props;
pub mod size;
pub mod state;

use crate::error::ToggleError;
use interaction::ActivationSource;
use neumorph_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Point, Rect, Size, TypeId, Widget,
};
use palette::ToggleTheme;
use props::{ToggleProps, DEFAULT_LABEL};
use size::{DimensionSet, PixelGeometry, ToggleSize, DEFAULT_ROOT_FONT_SIZE};
use state::ToggleState;
use std::any::Any;
use std::fmt;

pub use interaction::{is_activation_key, tab_index};
pub use state::OwnershipMode;

/// Base style class of every toggle.
pub const BASE_CLASS: &str = "neumorphic-toggle";

/// Message emitted on every accepted toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new intended state
    pub on: bool,
    /// What triggered the request
    pub source: ActivationSource,
}

/// Change callback stored by the toggle.
pub type ChangeCallback = Box<dyn FnMut(bool) + Send + Sync>;

/// Toggle switch with a neumorphic look.
pub struct NeumorphicToggle {
    /// Owned or mirrored on/off value
    state: ToggleState,
    /// Called with the intended value on every accepted request
    on_change: Option<ChangeCallback>,
    /// Size input
    size: ToggleSize,
    /// Dimensions resolved from `size`
    dimensions: DimensionSet,
    /// Whether interaction is suppressed
    disabled: bool,
    /// Accessible name
    label: String,
    /// Caller style class
    class_name: String,
    /// Colors
    theme: ToggleTheme,
    /// Root font size for `rem`/`em` sizes
    root_font_size: f32,
    /// Whether the toggle holds keyboard focus
    focused: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Default for NeumorphicToggle {
    fn default() -> Self {
        Self::with_state(ToggleState::default())
    }
}

impl fmt::Debug for NeumorphicToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeumorphicToggle")
            .field("state", &self.state)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("label", &self.label)
            .field("class_name", &self.class_name)
            .field("focused", &self.focused)
            .field("has_on_change", &self.on_change.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl NeumorphicToggle {
    /// Create a toggle that owns its state, starting off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toggle whose state is supplied by the caller.
    ///
    /// Pass each new value through [`Self::set_state`].
    #[must_use]
    pub fn controlled(on: bool) -> Self {
        Self::with_state(ToggleState::Controlled { on })
    }

    /// Create a toggle from declarative props.
    ///
    /// `props.state` selects the ownership mode.
    #[must_use]
    pub fn from_props(props: ToggleProps) -> Self {
        let mut toggle = Self::with_state(ToggleState::new(props.state))
            .size(props.size)
            .disabled(props.disabled)
            .label(props.label)
            .class_name(props.class_name);
        toggle.test_id_value = props.test_id;
        toggle
    }

    fn with_state(state: ToggleState) -> Self {
        let size = ToggleSize::default();
        Self {
            state,
            on_change: None,
            dimensions: size.resolve(),
            size,
            disabled: false,
            label: DEFAULT_LABEL.to_string(),
            class_name: String::new(),
            theme: ToggleTheme::default(),
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
            focused: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the size: pixels, a CSS length string, or a preset.
    #[must_use]
    pub fn size(mut self, size: impl Into<ToggleSize>) -> Self {
        self.size = size.into();
        self.dimensions = self.size.resolve();
        self
    }

    /// Set whether the toggle is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append a style class.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the callback invoked with the intended value on each accepted request.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(bool) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Remove the change callback, leaving the toggle without one.
    ///
    /// A host that shares the toggle behind a `RefCell` keeps the callback
    /// itself and calls it after releasing its borrow, so the callback can
    /// push a value back into the same toggle.
    pub fn take_on_change(&mut self) -> Option<ChangeCallback> {
        self.on_change.take()
    }

    /// Set the colors.
    #[must_use]
    pub const fn theme(mut self, theme: ToggleTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the root font size used for `rem`/`em` sizes.
    #[must_use]
    pub fn root_font_size(mut self, size: f32) -> Self {
        self.root_font_size = size.max(1.0);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Displayed state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Ownership mode fixed at construction.
    #[must_use]
    pub const fn mode(&self) -> OwnershipMode {
        self.state.mode()
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the toggle holds keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Get the size input.
    #[must_use]
    pub const fn get_size(&self) -> &ToggleSize {
        &self.size
    }

    /// Resolved dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    /// Position in the focus order.
    #[must_use]
    pub const fn tab_index(&self) -> i32 {
        tab_index(self.disabled)
    }

    /// Enable or disable the toggle. Disabling drops keyboard focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    /// Per-render update of the caller-supplied state.
    ///
    /// Controlled toggles take `Some(value)`; self-owned toggles take `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ModeSwitch`] when `supplied` would change the
    /// ownership mode fixed at construction. The state is left unchanged.
    pub fn set_state(&mut self, supplied: Option<bool>) -> Result<(), ToggleError> {
        let result = self.state.sync(supplied);
        if let Err(err) = &result {
            log::warn!("{}: {err}", self.label);
        }
        result
    }

    /// Issue a toggle request.
    ///
    /// Returns the intended new value, or `None` when disabled. Self-owned
    /// state flips immediately; the callback fires in both modes.
    pub fn request_toggle(&mut self) -> Option<bool> {
        if self.disabled {
            log::trace!("{}: toggle request ignored while disabled", self.label);
            return None;
        }

        let on = self.state.request_toggle();
        log::debug!(
            "{}: toggled to {} ({})",
            self.label,
            if on { "on" } else { "off" },
            self.state.mode()
        );
        if let Some(callback) = self.on_change.as_mut() {
            callback(on);
        }
        Some(on)
    }

    /// Run an input event through the interaction rules.
    ///
    /// Returns the change message for an accepted request. Focus events update
    /// focus tracking and never toggle.
    pub fn handle_event(&mut self, event: &Event) -> Option<ToggleChanged> {
        match event {
            Event::FocusIn => {
                self.focused = !self.disabled;
                return None;
            }
            Event::FocusOut => {
                self.focused = false;
                return None;
            }
            _ => {}
        }

        let source = interaction::classify(event, &self.bounds)?;
        let on = self.request_toggle()?;
        Some(ToggleChanged { on, source })
    }

    /// Style classes: base, state, disabled marker, then the caller's class.
    #[must_use]
    pub fn class_names(&self) -> String {
        let state = if self.is_on() { "on" } else { "off" };
        let disabled = if self.disabled { "disabled" } else { "" };
        [BASE_CLASS, state, disabled, self.class_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inline style attribute text.
    #[must_use]
    pub fn style_attribute(&self) -> String {
        self.dimensions
            .style_declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Pixel geometry, falling back to the medium preset for lengths that
    /// have no pixel size.
    #[must_use]
    pub fn geometry(&self) -> PixelGeometry {
        self.dimensions
            .pixel_geometry(self.root_font_size)
            .unwrap_or_else(PixelGeometry::fallback)
    }

    /// Outer box in layout coordinates.
    fn outer_rect(&self, geometry: &PixelGeometry) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            geometry.width.max(0.0),
            geometry.height.max(0.0),
        )
    }

    /// Center of the handle: left end of the track when off, right end when on.
    fn handle_center(&self, track: &Rect, geometry: &PixelGeometry) -> Point {
        let radius = geometry.handle_diameter / 2.0;
        let margin = size::HANDLE_MARGIN_PX as f32;
        let x = if self.is_on() {
            track.x + track.width - margin - radius
        } else {
            track.x + margin + radius
        };
        Point::new(x, track.center().y)
    }
}

impl Widget for NeumorphicToggle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let geometry = self.geometry();
        constraints.constrain(Size::new(
            geometry.width.max(0.0),
            geometry.height.max(0.0),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let geometry = self.geometry();
        let palette = self.theme.palette(self.is_on());
        let alpha = if self.disabled {
            self.theme.disabled_alpha
        } else {
            1.0
        };

        let outer = self.outer_rect(&geometry);
        let radius = outer.height / 2.0;
        let inset = geometry.border_inset();
        let depth = inset.max(1.0);

        canvas.fill_rounded_rect(
            outer.offset(depth, depth),
            radius,
            palette.shadow.with_alpha(alpha),
        );
        canvas.fill_rounded_rect(
            outer.offset(-depth, -depth),
            radius,
            palette.highlight.with_alpha(alpha),
        );
        canvas.fill_rounded_rect(outer, radius, palette.surface.with_alpha(alpha));

        let track = outer.inset(inset);
        let handle = self.handle_center(&track, &geometry);
        canvas.fill_circle(
            handle,
            geometry.handle_diameter / 2.0,
            palette.handle.with_alpha(alpha),
        );

        if self.focused && !self.disabled {
            canvas.stroke_rounded_rect(outer.inset(-2.0), radius + 2.0, palette.focus_ring, 2.0);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.handle_event(event)
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn accessible_checked(&self) -> Option<bool> {
        Some(self.is_on())
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
