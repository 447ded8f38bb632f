use std::time::Duration;

use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

use crate::{log_step_changes, settle_after};

const SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// Sign-up form collected across the vertical stepper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SignupForm {
    name: String,
    email: String,
    company: String,
}

impl SignupForm {
    fn name_error(&self) -> Option<&'static str> {
        self.name.trim().is_empty().then_some("Name is required.")
    }

    fn email_error(&self) -> Option<&'static str> {
        (!self.email.contains('@')).then_some("Email must contain @.")
    }

    fn company_error(&self) -> Option<&'static str> {
        self.company.trim().is_empty().then_some("Company is required.")
    }

    /// Checks every field and reports all failures in one message.
    fn validate(&self) -> Result<(), PreActionError> {
        let errors = [self.name_error(), self.email_error(), self.company_error()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PreActionError::new(errors.join(" ")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Company,
}

impl Field {
    fn title(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Company => "Company",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name | Self::Company => "text",
        }
    }

    fn read(self, form: &SignupForm) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Company => &form.company,
        }
    }

    fn write(self, form: &mut SignupForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Email => form.email = value,
            Self::Company => form.company = value,
        }
    }

    fn error(self, form: &SignupForm) -> Option<&'static str> {
        match self {
            Self::Name => form.name_error(),
            Self::Email => form.email_error(),
            Self::Company => form.company_error(),
        }
    }
}

fn field_step(handle: StepperHandle, form: RwSignal<SignupForm>, field: Field) -> StepDeclaration {
    StepDeclaration::new(move || {
        let invalid = Signal::derive(move || form.with(|form| field.error(form).is_some()));
        view! {
            <Stack gap=LayoutGap::Sm>
                <FieldGroup
                    title=field.title()
                    error=Signal::derive(move || form.with(|form| field.error(form).map(str::to_string)))
                >
                    <TextField
                        input_type=field.input_type()
                        aria_label=field.title()
                        value=Signal::derive(move || form.with(|form| field.read(form).to_string()))
                        on_input=Callback::new(move |value: String| form.update(|form| field.write(form, value)))
                    />
                </FieldGroup>
                <Cluster justify=LayoutJustify::Between>
                    <StepBack handle />
                    <StepNext handle disabled=invalid />
                </Cluster>
            </Stack>
        }
    })
    .title(field.title())
}

/// Validates the current form and encodes it as the submitted JSON payload.
fn encode_submission(form: RwSignal<SignupForm>) -> Result<String, PreActionError> {
    let Some(snapshot) = form.try_get_untracked() else {
        return Err(PreActionError::new("sign-up form was closed"));
    };
    snapshot.validate()?;
    serde_json::to_string_pretty(&snapshot)
        .map_err(|err| PreActionError::new(format!("could not encode sign-up: {err}")))
}

#[component]
/// Vertical sign-up form with per-step validation and an async submit on the review step.
pub fn VerticalStepperPage() -> impl IntoView {
    let form = create_rw_signal(SignupForm::default());
    let submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let submitted = create_rw_signal(None::<String>);
    let handle = create_stepper(StepperOptions {
        initial_index: 0,
        on_step_change: Some(log_step_changes("vertical")),
    });

    // The page may be torn down while the submit is settling.
    let submit = pre_action(move || async move {
        let _ = error.try_set(None);
        let _ = submitting.try_set(true);
        settle_after(SUBMIT_DELAY).await;
        let _ = submitting.try_set(false);

        let payload = encode_submission(form)?;
        logging::log!("sign-up submitted: {payload}");
        let _ = submitted.try_set(Some(payload));
        Ok(())
    });

    let steps = vec![
        field_step(handle, form, Field::Name).description("Who you are"),
        field_step(handle, form, Field::Email).description("Where we reply"),
        field_step(handle, form, Field::Company).description("Where you work"),
        StepDeclaration::new(move || {
            let submit = submit.clone();
            view! {
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>"Review"</Text>
                    <Text>{move || form.with(|form| format!("{} <{}>", form.name, form.email))}</Text>
                    <Text tone=TextTone::Secondary>{move || form.with(|form| form.company.clone())}</Text>
                    <Cluster justify=LayoutJustify::Between>
                        <StepBack handle />
                        <StepNext
                            handle
                            pre_action=submit
                            on_blocked=Callback::new(move |err: PreActionError| {
                                let _ = error.try_set(Some(err.message));
                            })
                        />
                    </Cluster>
                </Stack>
            }
        })
        .title("Review")
        .description("Check and submit"),
    ];

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="showcase-page">
            <Heading>"Vertical stepper"</Heading>
            <Text tone=TextTone::Secondary>
                "Each Next stays disabled until its field validates. Submitting re-checks every field."
            </Text>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorAlert message on_close=Callback::new(move |_| error.set(None)) />
                        }
                    })
            }}
            <Surface layout_class="showcase-form">
                <Stepper handle steps orientation=StepperOrientation::Vertical aria_label="Sign-up" />
                <LoadingOverlay
                    visible=Signal::derive(move || submitting.get())
                    label="Submitting..."
                />
            </Surface>
            {move || {
                submitted
                    .get()
                    .map(|payload| {
                        view! {
                            <Card title="Submitted">
                                <pre>{payload}</pre>
                            </Card>
                        }
                    })
            }}
        </Stack>
    }
}
