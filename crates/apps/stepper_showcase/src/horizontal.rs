use leptos::*;
use system_ui::prelude::*;

use crate::log_step_changes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    English,
    Spanish,
}

impl Language {
    fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
        }
    }

    fn labels(self) -> StepLabels {
        match self {
            Self::English => StepLabels::default(),
            Self::Spanish => StepLabels::spanish(),
        }
    }

    fn continue_label(self) -> &'static str {
        match self {
            Self::English => "Continue",
            Self::Spanish => "Continuar",
        }
    }
}

fn step_controls(handle: StepperHandle, language: RwSignal<Language>) -> impl IntoView {
    view! {
        <Cluster justify=LayoutJustify::Between>
            {move || {
                let language = language.get();
                view! {
                    <StepBack handle labels=language.labels() />
                    <StepNext handle label=language.continue_label() labels=language.labels() />
                }
            }}
        </Cluster>
    }
}

#[component]
/// Four-step horizontal stepper driven by in-step controls and an external toolbar.
pub fn HorizontalStepperPage() -> impl IntoView {
    let language = create_rw_signal(Language::English);
    let notice = create_rw_signal(None::<String>);
    let handle = create_stepper(StepperOptions {
        initial_index: 0,
        on_step_change: Some(log_step_changes("horizontal")),
    });

    let finish = pre_action(move || async move {
        notice.set(Some("All four steps are complete.".to_string()));
        Ok(())
    });

    let steps = vec![
        StepDeclaration::new(move || {
            view! {
                <Card title="Step 1">
                    <Stack gap=LayoutGap::Sm>
                        <Text>
                            "This step has no Back or Next controls. The button below calls the stepper handle directly."
                        </Text>
                        <Cluster justify=LayoutJustify::End>
                            <Button
                                variant=ButtonVariant::Primary
                                trailing_icon=IconName::ArrowRight
                                on_click=Callback::new(move |_| {
                                    handle.advance();
                                })
                            >
                                {move || language.get().continue_label()}
                            </Button>
                        </Cluster>
                    </Stack>
                </Card>
            }
        }),
        StepDeclaration::new(move || {
            view! {
                <Card title="Step 2">
                    <Stack gap=LayoutGap::Sm>
                        <Text>"Back and Next are bound to the same handle as the toolbar below."</Text>
                        {step_controls(handle, language)}
                    </Stack>
                </Card>
            }
        })
        .title("Contact")
        .description("How to reach you"),
        StepDeclaration::new(move || {
            view! {
                <Card title="Step 3">
                    <Stack gap=LayoutGap::Sm>
                        <Text>"Leaving a step unmounts its content, so anything typed here is dropped."</Text>
                        <TextField placeholder="Scratch notes" aria_label="Scratch notes" />
                        {step_controls(handle, language)}
                    </Stack>
                </Card>
            }
        })
        .title("Details")
        .description("Anything else"),
        StepDeclaration::new(move || {
            let finish = finish.clone();
            view! {
                <Card title="Step 4">
                    <Stack gap=LayoutGap::Sm>
                        <Text>"The last Next control always reads Finish, whatever label it was given."</Text>
                        <Cluster justify=LayoutJustify::Between>
                            {move || {
                                let language = language.get();
                                view! {
                                    <StepBack handle labels=language.labels() />
                                    <StepNext
                                        handle
                                        label=language.continue_label()
                                        labels=language.labels()
                                        pre_action=finish.clone()
                                    />
                                }
                            }}
                        </Cluster>
                    </Stack>
                </Card>
            }
        })
        .title("Confirm")
        .description("Wrap up"),
    ];
    let step_count = steps.len();

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="showcase-page">
            <Heading>"Horizontal stepper"</Heading>
            <Cluster gap=LayoutGap::Sm>
                <Text role=TextRole::Label>"Control labels"</Text>
                {[Language::English, Language::Spanish]
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Sm
                                selected=Signal::derive(move || language.get() == option)
                                on_click=Callback::new(move |_| language.set(option))
                            >
                                {option.name()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Cluster>

            <Stepper handle steps aria_label="Horizontal demo" />

            {move || {
                notice
                    .get()
                    .map(|notice| view! { <Badge tone=TextTone::Success>{notice}</Badge> })
            }}

            <Panel aria_label="External stepper controls">
                <Stack gap=LayoutGap::Sm>
                    <ToolBar aria_label="Stepper navigation">
                        <Button
                            leading_icon=IconName::ArrowLeft
                            disabled=Signal::derive(move || handle.is_first())
                            on_click=Callback::new(move |_| {
                                handle.retreat();
                            })
                        >
                            "Previous"
                        </Button>
                        {(0..step_count)
                            .map(|index| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        selected=Signal::derive(move || handle.current_index() == index)
                                        on_click=Callback::new(move |_| {
                                            handle.go_to(index);
                                        })
                                    >
                                        {format!("Go to {}", index + 1)}
                                    </Button>
                                }
                            })
                            .collect_view()}
                        <Button
                            trailing_icon=IconName::ArrowRight
                            disabled=Signal::derive(move || handle.is_last())
                            on_click=Callback::new(move |_| {
                                handle.advance();
                            })
                        >
                            "Next"
                        </Button>
                    </ToolBar>
                    <Cluster gap=LayoutGap::Sm>
                        <Badge tone=TextTone::Accent>
                            {move || {
                                format!("Step {} of {}", handle.current_index() + 1, handle.total_steps())
                            }}
                        </Badge>
                        <Badge>{move || format!("first: {}", handle.is_first())}</Badge>
                        <Badge>{move || format!("last: {}", handle.is_last())}</Badge>
                    </Cluster>
                </Stack>
            </Panel>
        </Stack>
    }
}
