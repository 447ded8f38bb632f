use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::prelude::*;

use crate::settle_after;

const OVERLAY_DURATION: Duration = Duration::from_millis(1500);

const FAQ: [(&str, &str); 3] = [
    (
        "Can the stepper be driven from outside?",
        "Yes. create_stepper returns a copyable handle that toolbars and step content share.",
    ),
    (
        "What happens when a pre-action fails?",
        "The step stays put and the failure is reported to the control's on_blocked callback.",
    ),
    (
        "Does step content keep its state?",
        "No. Only the active step is mounted, so leaving a step drops its local state.",
    ),
];

#[component]
/// Gallery of the accordion, counter, loading overlay, and error alert widgets.
pub fn WidgetGalleryPage() -> impl IntoView {
    let forced = create_rw_signal(None::<bool>);
    let toggles = create_rw_signal(0_u32);
    let count = create_rw_signal(1_i32);
    let loading = create_rw_signal(false);
    let alert_open = create_rw_signal(true);

    let show_overlay = Callback::new(move |_: MouseEvent| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            settle_after(OVERLAY_DURATION).await;
            let _ = loading.try_set(false);
        });
    });

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="showcase-page">
            <Heading>"Widgets"</Heading>

            <Card title="Accordion">
                <Stack gap=LayoutGap::Sm>
                    <ToolBar aria_label="Accordion controls">
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| forced.set(Some(true)))>
                            "Expand all"
                        </Button>
                        <Button size=ButtonSize::Sm on_click=Callback::new(move |_| forced.set(Some(false)))>
                            "Collapse all"
                        </Button>
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Quiet
                            disabled=Signal::derive(move || forced.with(Option::is_none))
                            on_click=Callback::new(move |_| forced.set(None))
                        >
                            "Release"
                        </Button>
                        <Badge>{move || format!("{} toggles", toggles.get())}</Badge>
                    </ToolBar>
                    {FAQ
                        .into_iter()
                        .enumerate()
                        .map(|(index, (question, answer))| {
                            view! {
                                <Accordion
                                    title=question
                                    default_open={index == 0}
                                    force_open=Signal::derive(move || forced.get())
                                    on_toggle=Callback::new(move |_| toggles.update(|count| *count += 1))
                                >
                                    <Text>{answer}</Text>
                                </Accordion>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Card>

            <Card title="Counter">
                <Cluster gap=LayoutGap::Md>
                    <Counter
                        aria_label="Guests"
                        on_change=Callback::new(move |value| count.set(value))
                    />
                    <Text tone=TextTone::Secondary>{move || format!("{} guest(s)", count.get())}</Text>
                    <Counter min=0 max=5 initial=3 aria_label="Rating" />
                </Cluster>
            </Card>

            <Card title="Loading overlay">
                <Surface layout_class="showcase-overlay-host">
                    <Stack gap=LayoutGap::Sm>
                        <Text>"The overlay covers this surface while it is visible."</Text>
                        <Button disabled=Signal::derive(move || loading.get()) on_click=show_overlay>
                            "Load for a moment"
                        </Button>
                    </Stack>
                    <LoadingOverlay visible=Signal::derive(move || loading.get()) />
                </Surface>
            </Card>

            <Card title="Error alert">
                <Stack gap=LayoutGap::Sm>
                    <Show
                        when=move || alert_open.get()
                        fallback=move || {
                            view! {
                                <Button on_click=Callback::new(move |_| alert_open.set(true))>
                                    "Show alert again"
                                </Button>
                            }
                        }
                    >
                        <ErrorAlert
                            message="The server could not be reached."
                            on_close=Callback::new(move |_| alert_open.set(false))
                        />
                    </Show>
                    <ErrorAlert message="Alerts without on_close cannot be dismissed." />
                </Stack>
            </Card>
        </Stack>
    }
}
