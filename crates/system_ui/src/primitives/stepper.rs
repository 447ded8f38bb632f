//! Stepper views, the reactive external handle, and the Next/Back step controls.

use std::{fmt, rc::Rc};

use widget_core_headless::{
    Activation, IndicatorState, NavigationControl, PreAction, PreActionError, StepController,
    StepLabels, StepNavigator, StepSequence,
};

use super::*;

/// Construction options for [`create_stepper`].
#[derive(Clone, Default)]
pub struct StepperOptions {
    /// Index selected once the first step is declared. Clamped to the last declared step.
    pub initial_index: usize,
    /// Called with the new index after every committed transition.
    pub on_step_change: Option<Callback<usize>>,
}

/// Copyable handle onto one stepper's navigation state.
///
/// Every copy drives the same sequence. Reads through the handle are reactive, so views and
/// effects that read `current_index` or `total_steps` re-run after each transition.
#[derive(Clone, Copy)]
pub struct StepperHandle {
    controller: StoredValue<StepController>,
    changed: Trigger,
}

impl fmt::Debug for StepperHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperHandle")
            .field("sequence", &self.controller.try_with_value(StepController::snapshot))
            .finish()
    }
}

/// Creates a stepper handle in the current reactive owner.
///
/// Pass the handle to [`Stepper`] and to any [`StepNext`] / [`StepBack`] controls or external
/// toolbars that should drive it.
pub fn create_stepper(options: StepperOptions) -> StepperHandle {
    let mut controller = StepController::new(options.initial_index);
    if let Some(on_step_change) = options.on_step_change {
        controller = controller.with_observer(move |index| on_step_change.call(index));
    }
    StepperHandle {
        controller: store_value(controller),
        changed: create_trigger(),
    }
}

impl StepperHandle {
    /// Reactive snapshot of the whole sequence.
    pub fn snapshot(&self) -> StepSequence {
        self.changed.track();
        self.controller.with_value(StepController::snapshot)
    }

    /// Reactive indicator state for the step at `index`.
    pub fn indicator(&self, index: usize) -> IndicatorState {
        self.changed.track();
        self.controller.with_value(|controller| controller.indicator(index))
    }

    pub(crate) fn sync_total_steps(&self, total: usize) {
        let controller = self.controller.get_value();
        let before = controller.snapshot();
        controller.resize(total);
        if controller.snapshot() != before {
            self.changed.notify();
        }
    }

    fn commit(&self, transition: impl FnOnce(&StepController) -> Option<usize>) -> Option<usize> {
        let moved = transition(&self.controller.get_value());
        if moved.is_some() {
            self.changed.notify();
        }
        moved
    }
}

impl StepNavigator for StepperHandle {
    fn advance(&self) -> Option<usize> {
        self.commit(StepController::advance)
    }

    fn retreat(&self) -> Option<usize> {
        self.commit(StepController::retreat)
    }

    fn go_to(&self, target: usize) -> Option<usize> {
        self.commit(|controller| controller.go_to(target))
    }

    fn current_index(&self) -> usize {
        self.snapshot().current_index()
    }

    fn total_steps(&self) -> usize {
        self.snapshot().total_steps()
    }
}

/// One declared step: optional indicator copy plus lazily rendered content.
#[derive(Clone)]
pub struct StepDeclaration {
    title: Option<String>,
    description: Option<String>,
    content: Rc<dyn Fn() -> View>,
}

impl fmt::Debug for StepDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDeclaration")
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl StepDeclaration {
    /// Declares a step whose content is rendered each time the step becomes active.
    pub fn new<F, IV>(content: F) -> Self
    where
        F: Fn() -> IV + 'static,
        IV: IntoView,
    {
        Self {
            title: None,
            description: None,
            content: Rc::new(move || content().into_view()),
        }
    }

    /// Sets the indicator title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the indicator description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn render(&self) -> View {
        (self.content)()
    }
}

#[component]
/// Indicator row or column plus the content of the active step.
///
/// Only the active declaration is mounted; navigating away drops the step's local state.
/// The step count is resynchronized with `handle` whenever `steps` changes.
pub fn Stepper(
    handle: StepperHandle,
    #[prop(into)] steps: MaybeSignal<Vec<StepDeclaration>>,
    #[prop(optional)] orientation: StepperOrientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let steps = Signal::derive(move || steps.get());
    sync_step_count(handle, steps);

    let current = create_memo(move |_| handle.current_index());

    let indicators = move || {
        steps.with(|steps| {
            let last = steps.len().saturating_sub(1);
            steps
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let state = Signal::derive(move || handle.indicator(index));
                    view! {
                        <StepIndicator
                            index
                            title=step.title.clone()
                            description=step.description.clone()
                            state
                            orientation
                            is_last={index == last}
                        />
                    }
                })
                .collect_view()
        })
    };

    let content = move || active_content(steps, current);

    view! {
        <section
            class=merge_layout_class("ui-stepper", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=orientation.token()
            data-ui-current=move || current.get().to_string()
            data-ui-total=move || handle.total_steps().to_string()
        >
            <ol data-ui-slot="indicators">{indicators}</ol>
            <div data-ui-slot="content">{content}</div>
        </section>
    }
}

fn sync_step_count(handle: StepperHandle, steps: Signal<Vec<StepDeclaration>>) {
    create_render_effect(move |_| {
        let total = steps.with(Vec::len);
        handle.sync_total_steps(total);
    });
}

/// Renders the declaration at `current`. Only `current` is tracked.
fn active_content(steps: Signal<Vec<StepDeclaration>>, current: Memo<usize>) -> Option<View> {
    let index = current.get();
    steps
        .with(|steps| steps.get(index).cloned())
        .map(|step| untrack(|| step.render()))
}

#[component]
fn StepIndicator(
    index: usize,
    title: Option<String>,
    description: Option<String>,
    state: Signal<IndicatorState>,
    orientation: StepperOrientation,
    is_last: bool,
) -> impl IntoView {
    view! {
        <li
            data-ui-slot="indicator"
            data-ui-state=move || state.get().token()
            aria-current=move || (state.get() == IndicatorState::Active).then_some("step")
        >
            <span data-ui-slot="marker">
                {move || match state.get() {
                    IndicatorState::Completed => view! { <Icon icon=IconName::Check size=IconSize::Sm /> }.into_view(),
                    _ => (index + 1).to_string().into_view(),
                }}
            </span>
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            {(!is_last).then(|| step_link(orientation, state))}
        </li>
    }
}

fn step_link(orientation: StepperOrientation, state: Signal<IndicatorState>) -> View {
    match orientation {
        StepperOrientation::Horizontal => view! {
            <span data-ui-slot="separator" aria-hidden="true">
                <Icon icon=IconName::ChevronRight size=IconSize::Sm />
            </span>
        }
        .into_view(),
        StepperOrientation::Vertical => view! {
            <span
                data-ui-slot="connector"
                aria-hidden="true"
                data-ui-state=move || state.get().token()
            ></span>
        }
        .into_view(),
    }
}

#[component]
/// Advances `handle` after the optional pre-action resolves.
///
/// On the last step the label is always `labels.finish`, even when `label` is set. A rejected
/// pre-action is logged, passed to `on_blocked`, and leaves the step unchanged.
pub fn StepNext(
    handle: StepperHandle,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] labels: StepLabels,
    #[prop(optional)] pre_action: Option<PreAction>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_blocked: Option<Callback<PreActionError>>,
) -> impl IntoView {
    let mut control = NavigationControl::next();
    if let Some(pre_action) = pre_action {
        control = control.with_pre_action(pre_action);
    }
    step_control(
        handle,
        control,
        ControlText { custom: label, labels },
        disabled,
        ButtonVariant::Primary,
        layout_class,
        on_blocked,
    )
}

#[component]
/// Retreats `handle` after the optional pre-action resolves. Disabled on the first step.
pub fn StepBack(
    handle: StepperHandle,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] labels: StepLabels,
    #[prop(optional)] pre_action: Option<PreAction>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_blocked: Option<Callback<PreActionError>>,
) -> impl IntoView {
    let mut control = NavigationControl::back();
    if let Some(pre_action) = pre_action {
        control = control.with_pre_action(pre_action);
    }
    step_control(
        handle,
        control,
        ControlText { custom: label, labels },
        disabled,
        ButtonVariant::Standard,
        layout_class,
        on_blocked,
    )
}

struct ControlText {
    custom: Option<String>,
    labels: StepLabels,
}

fn step_control(
    handle: StepperHandle,
    control: NavigationControl,
    text: ControlText,
    disabled: MaybeSignal<bool>,
    variant: ButtonVariant,
    layout_class: Option<&'static str>,
    on_blocked: Option<Callback<PreActionError>>,
) -> impl IntoView {
    let kind = control.kind();
    let control = store_value(control);
    let text = store_value(text);
    let pending = create_rw_signal(false);
    let disabled = Signal::derive(move || disabled.get());

    let effective_disabled = Signal::derive(move || {
        let disabled = disabled.get();
        control.with_value(|control| control.is_disabled(&handle, disabled))
    });

    let caption = move || {
        text.with_value(|text| {
            control.with_value(|control| {
                control
                    .label(&handle, text.custom.as_deref(), &text.labels)
                    .to_string()
            })
        })
    };

    let on_click = Callback::new(move |_: MouseEvent| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let control = control.get_value();
        spawn_local(async move {
            let outcome = control
                .activate(&handle, move || disabled.try_get_untracked().unwrap_or(true))
                .await;
            // A committed step may have unmounted this control.
            let _ = pending.try_set(false);
            if let Activation::Blocked(err) = outcome {
                logging::warn!("{} blocked by pre-action: {err}", kind.token());
                if let Some(on_blocked) = on_blocked.as_ref() {
                    on_blocked.call(err);
                }
            }
        });
    });

    view! {
        <Button
            variant
            layout_class=layout_class.unwrap_or("")
            ui_slot=kind.token()
            disabled=effective_disabled
            pressed=Signal::derive(move || pending.get())
            on_click
        >
            {caption}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn counted_steps(count: usize) -> (Vec<StepDeclaration>, Vec<Rc<Cell<usize>>>) {
        let renders: Vec<_> = (0..count).map(|_| Rc::new(Cell::new(0))).collect();
        let steps = renders
            .iter()
            .map(|rendered| {
                let rendered = Rc::clone(rendered);
                StepDeclaration::new(move || rendered.set(rendered.get() + 1))
            })
            .collect();
        (steps, renders)
    }

    fn render_counts(renders: &[Rc<Cell<usize>>]) -> Vec<usize> {
        renders.iter().map(|rendered| rendered.get()).collect()
    }

    #[test]
    fn handle_applies_seed_on_first_sync_and_notifies_observer_afterwards() {
        let runtime = create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&seen);
        let handle = create_stepper(StepperOptions {
            initial_index: 2,
            on_step_change: Some(Callback::new(move |index| record.borrow_mut().push(index))),
        });

        handle.sync_total_steps(4);
        assert_eq!(handle.current_index(), 2);
        assert_eq!(handle.advance(), Some(3));
        assert_eq!(handle.advance(), None);
        assert!(handle.is_last());
        assert_eq!(handle.go_to(9), None);
        assert_eq!(handle.go_to(0), Some(0));
        assert!(handle.is_first());

        handle.go_to(3);
        handle.sync_total_steps(2);
        assert_eq!(handle.current_index(), 1);
        assert_eq!(*seen.borrow(), vec![3, 0, 3, 1]);

        runtime.dispose();
    }

    #[test]
    fn handle_reads_are_reactive() {
        let runtime = create_runtime();
        let handle = create_stepper(StepperOptions::default());
        handle.sync_total_steps(3);
        let current = create_memo(move |_| handle.current_index());

        assert_eq!(current.get_untracked(), 0);
        handle.advance();
        assert_eq!(current.get_untracked(), 1);
        assert_eq!(handle.indicator(0), IndicatorState::Completed);
        assert_eq!(handle.indicator(1), IndicatorState::Active);
        assert_eq!(handle.indicator(2), IndicatorState::Pending);

        runtime.dispose();
    }

    #[test]
    fn step_list_changes_resync_the_count() {
        let runtime = create_runtime();
        let handle = create_stepper(StepperOptions {
            initial_index: 2,
            on_step_change: None,
        });
        let steps = create_rw_signal(Vec::<StepDeclaration>::new());
        sync_step_count(handle, steps.into());
        assert_eq!(handle.total_steps(), 0);
        assert_eq!(handle.current_index(), 0);

        steps.set(counted_steps(4).0);
        assert_eq!(handle.total_steps(), 4);
        assert_eq!(handle.current_index(), 2);

        steps.update(|steps| steps.truncate(2));
        assert_eq!(handle.total_steps(), 2);
        assert_eq!(handle.current_index(), 1);

        steps.update(|steps| steps.extend(counted_steps(3).0));
        assert_eq!(handle.total_steps(), 5);
        assert_eq!(handle.current_index(), 1);

        runtime.dispose();
    }

    #[test]
    fn only_the_active_declaration_is_rendered() {
        let runtime = create_runtime();
        let handle = create_stepper(StepperOptions::default());
        let (declarations, renders) = counted_steps(3);
        let steps: Signal<Vec<StepDeclaration>> = create_rw_signal(declarations).into();
        sync_step_count(handle, steps);
        let current = create_memo(move |_| handle.current_index());

        assert!(active_content(steps, current).is_some());
        assert_eq!(render_counts(&renders), vec![1, 0, 0]);

        handle.advance();
        active_content(steps, current);
        assert_eq!(render_counts(&renders), vec![1, 1, 0]);

        handle.go_to(2);
        active_content(steps, current);
        assert_eq!(render_counts(&renders), vec![1, 1, 1]);

        runtime.dispose();
    }

    #[test]
    fn no_declaration_is_rendered_for_an_empty_list() {
        let runtime = create_runtime();
        let handle = create_stepper(StepperOptions::default());
        let steps: Signal<Vec<StepDeclaration>> = create_rw_signal(Vec::new()).into();
        sync_step_count(handle, steps);
        let current = create_memo(move |_| handle.current_index());

        assert!(active_content(steps, current).is_none());

        runtime.dispose();
    }

    #[test]
    fn declarations_keep_indicator_copy() {
        let runtime = create_runtime();
        let step = StepDeclaration::new(|| "body")
            .title("Account")
            .description("Who you are");
        assert_eq!(step.title.as_deref(), Some("Account"));
        assert_eq!(step.description.as_deref(), Some("Who you are"));
        runtime.dispose();
    }
}
