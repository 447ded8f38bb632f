//! Shared UI primitive library for the stepper widget set.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by stylesheets. Navigation and widget state live in
//! `widget_core_headless`; components here render that state and forward user input to it.
//! Apps should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    create_stepper, Accordion, Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Counter,
    Elevation, ErrorAlert, FieldGroup, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, LoadingOverlay, Panel, Stack, StepBack, StepDeclaration, StepNext, Stepper,
    StepperHandle, StepperOptions, StepperOrientation, Surface, SurfaceVariant, Text, TextField,
    TextRole, TextTone, ToolBar,
};
pub use widget_core_headless::{pre_action, PreAction, PreActionError, StepLabels, StepNavigator};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        create_stepper, pre_action, Accordion, Badge, Button, ButtonSize, ButtonVariant, Card,
        Cluster, Counter, Elevation, ErrorAlert, FieldGroup, Heading, Icon, IconButton, IconName,
        IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LoadingOverlay, Panel,
        PreAction, PreActionError, Stack, StepBack, StepDeclaration, StepLabels, StepNavigator,
        StepNext, Stepper, StepperHandle, StepperOptions, StepperOrientation, Surface,
        SurfaceVariant, Text, TextField, TextRole, TextTone, ToolBar,
    };
}
