//! Shared structural, control, data-display, overlay, layout, and stepper primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod stepper;

pub use controls::{Button, Counter, FieldGroup, IconButton, TextField};
pub use data_display::{Badge, Card, ErrorAlert, Heading, Panel, Surface, Text};
pub use layout::{Cluster, Stack};
pub use navigation::{Accordion, ToolBar};
pub use overlays::LoadingOverlay;
pub use stepper::{
    create_stepper, StepBack, StepDeclaration, StepNext, Stepper, StepperHandle, StepperOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Inset surface.
    Inset,
}

impl Default for SurfaceVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels for shared primitives.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    Raised,
    /// Overlay surface.
    Overlay,
}

impl Default for Elevation {
    fn default() -> Self {
        Self::Flat
    }
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction in which step indicators are laid out.
pub enum StepperOrientation {
    /// Indicator row above the active step, chevrons between indicators.
    Horizontal,
    /// Indicator column beside the active step, connectors between indicators.
    Vertical,
}

impl Default for StepperOrientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl StepperOrientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-card", Some("intro")), "ui-card intro");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
    }

    #[test]
    fn orientation_tokens_are_stable() {
        assert_eq!(StepperOrientation::default().token(), "horizontal");
        assert_eq!(StepperOrientation::Vertical.token(), "vertical");
    }
}
