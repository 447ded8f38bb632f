use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Generic panel primitive.
pub fn Panel(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Card surface with an optional heading above its content.
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {title.map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
            <div data-ui-slot="body">{children()}</div>
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Inline error banner announced to assistive technology.
///
/// The close button is only rendered when `on_close` is supplied.
pub fn ErrorAlert(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional, into)] heading: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let heading = heading.unwrap_or_else(|| "Error!".to_string());
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-tone=TextTone::Danger.token()
        >
            <Icon icon=IconName::Warning size=IconSize::Sm />
            <strong data-ui-slot="title">{heading}</strong>
            <span data-ui-slot="message">{move || message.get()}</span>
            {on_close.map(|on_close| {
                view! {
                    <IconButton
                        icon=IconName::Dismiss
                        ui_slot="close"
                        aria_label="Close error message".to_string()
                        on_click=on_close
                    />
                }
            })}
        </div>
    }
}
