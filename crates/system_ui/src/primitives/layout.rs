use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
        >
            {children()}
        </div>
    }
}
