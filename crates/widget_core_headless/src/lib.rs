//! Headless state machines behind the shared widget set.
//!
//! Everything in this crate is UI-agnostic: the step sequence and its shared controller,
//! the [`StepNavigator`] seam consumed by navigation controls, Next/Back activation
//! semantics, and the small disclosure and counter models. The Leptos layer in
//! `system_ui` renders these types and never re-implements their transitions.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod controller;
mod controls;
mod counter;
mod disclosure;
mod error;
mod labels;
mod sequence;

pub use controller::{StepController, StepNavigator, StepObserver};
pub use controls::{pre_action, Activation, ControlKind, NavigationControl, PreAction};
pub use counter::BoundedCounter;
pub use disclosure::DisclosureState;
pub use error::{PreActionError, WidgetConfigError};
pub use labels::StepLabels;
pub use sequence::{IndicatorState, StepSequence};
