use super::*;

#[component]
/// Full-surface busy overlay with a spinner and a status label.
pub fn LoadingOverlay(
    #[prop(into, default = MaybeSignal::Static(true))] visible: MaybeSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div
                class=merge_layout_class("ui-loading-overlay", layout_class)
                role="status"
                aria-live="polite"
                aria-busy="true"
                data-ui-primitive="true"
                data-ui-kind="loading-overlay"
                data-ui-elevation=Elevation::Overlay.token()
            >
                <span data-ui-slot="spinner" aria-hidden="true"></span>
                <span data-ui-slot="label">{label.clone()}</span>
            </div>
        </Show>
    }
}
