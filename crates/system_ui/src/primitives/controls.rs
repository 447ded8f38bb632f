use widget_core_headless::BoundedCounter;

use super::*;

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type="button"
            class=class
            id=id
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.get()
            aria-busy=move || bool_token(pressed.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Compact icon-only button.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Shared labeled field wrapper that keeps copy and control structure on the primitive layer.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
            data-ui-invalid=move || bool_token(error.with(Option::is_some))
        >
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
            {move || {
                error
                    .get()
                    .map(|error| view! { <span data-ui-slot="error" role="status">{error}</span> })
            }}
        </label>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            autocomplete=autocomplete
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Numeric counter bounded to `min..=max` with decrement and increment buttons.
///
/// An inverted range is logged and replaced with the default `1..=10` counter.
pub fn Counter(
    #[prop(default = 1)] min: i32,
    #[prop(default = 10)] max: i32,
    #[prop(default = 1)] initial: i32,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<i32>>,
) -> impl IntoView {
    let counter = BoundedCounter::new(min, max, initial).unwrap_or_else(|err| {
        logging::warn!("counter configuration rejected, using defaults: {err}");
        BoundedCounter::default()
    });
    let state = create_rw_signal(counter);

    let apply = move |step: fn(&mut BoundedCounter) -> Option<i32>| {
        let mut next = state.get_untracked();
        if let Some(value) = step(&mut next) {
            state.set(next);
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(value);
            }
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-counter", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="counter"
            data-ui-value=move || state.with(BoundedCounter::value)
        >
            <IconButton
                icon=IconName::Minus
                ui_slot="decrement"
                aria_label="Decrease".to_string()
                disabled=Signal::derive(move || !state.with(BoundedCounter::can_decrement))
                on_click=Callback::new(move |_| apply(BoundedCounter::decrement))
            />
            <span data-ui-slot="value" aria-live="polite">
                {move || state.with(BoundedCounter::value)}
            </span>
            <IconButton
                icon=IconName::Plus
                ui_slot="increment"
                aria_label="Increase".to_string()
                disabled=Signal::derive(move || !state.with(BoundedCounter::can_increment))
                on_click=Callback::new(move |_| apply(BoundedCounter::increment))
            />
        </div>
    }
}
