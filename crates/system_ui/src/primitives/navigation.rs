use widget_core_headless::DisclosureState;

use super::*;

#[component]
/// Shared toolbar primitive.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Sm)] padding: LayoutPadding,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Collapsible section whose body is mounted only while open.
///
/// `force_open` overrides the user's last toggle every time it changes; clearing it closes
/// the section. `on_toggle` receives the new open state after every change.
pub fn Accordion(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] force_open: MaybeSignal<Option<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = create_rw_signal(DisclosureState::new(default_open, force_open.get_untracked()));
    let expanded = Signal::derive(move || state.with(DisclosureState::is_open));

    create_effect(move |_| {
        let forced = force_open.get();
        let mut next = state.get_untracked();
        if let Some(open) = next.sync_forced(forced) {
            state.set(next);
            if let Some(on_toggle) = on_toggle.as_ref() {
                on_toggle.call(open);
            }
        }
    });

    let toggle = Callback::new(move |_: MouseEvent| {
        let mut next = state.get_untracked();
        let open = next.toggle();
        state.set(next);
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(open);
        }
    });

    view! {
        <section
            class=merge_layout_class("ui-accordion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-expanded=move || bool_token(expanded.get())
        >
            <Button
                layout_class="ui-accordion-toggle"
                ui_slot="toggle"
                variant=ButtonVariant::Quiet
                selected=expanded
                aria_expanded=expanded
                on_click=toggle
            >
                <span data-ui-slot="copy">
                    <span data-ui-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
                </span>
                <span data-ui-slot="indicator" aria-hidden="true">
                    {move || {
                        let icon = if expanded.get() { IconName::ChevronDown } else { IconName::ChevronRight };
                        view! { <Icon icon size=IconSize::Sm /> }
                    }}
                </span>
            </Button>
            <Show when=move || expanded.get() fallback=|| ()>
                <div data-ui-slot="body">{children()}</div>
            </Show>
        </section>
    }
}
