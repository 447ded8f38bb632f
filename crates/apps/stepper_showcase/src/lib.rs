//! Demo pages for the stepper widget set.
//!
//! Each page composes `system_ui` primitives only: the horizontal page drives a stepper from an
//! external toolbar, the vertical page runs a validated sign-up form through step controls with
//! an async submit, and the widgets page exercises the accordion, counter, overlay, and alert.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use futures::channel::oneshot;
use leptos::*;

mod horizontal;
mod vertical;
mod widgets;

pub use horizontal::HorizontalStepperPage;
pub use vertical::VerticalStepperPage;
pub use widgets::WidgetGalleryPage;

/// Observer that logs the 1-based step number each time `stepper` changes step.
fn log_step_changes(stepper: &'static str) -> Callback<usize> {
    Callback::new(move |index: usize| {
        logging::log!("{stepper} stepper moved to step {}", index + 1);
    })
}

/// Resolves after `delay` on the browser event loop.
async fn settle_after(delay: Duration) {
    let (done, settled) = oneshot::channel();
    set_timeout(
        move || {
            let _ = done.send(());
        },
        delay,
    );
    let _ = settled.await;
}
