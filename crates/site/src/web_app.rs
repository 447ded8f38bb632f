use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use stepper_showcase::{HorizontalStepperPage, VerticalStepperPage, WidgetGalleryPage};
use system_ui::prelude::*;

const PAGES: [(&str, &str); 3] = [
    ("/", "Horizontal"),
    ("/vertical", "Vertical"),
    ("/widgets", "Widgets"),
];

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Stepper widgets" />
        <Meta name="description" content="Stepper, accordion, counter, and alert widget demos." />

        <Router>
            <SiteNav />
            <main class="site-root">
                <Routes>
                    <Route path="" view=HorizontalStepperPage />
                    <Route path="/vertical" view=VerticalStepperPage />
                    <Route path="/widgets" view=WidgetGalleryPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav" aria-label="Demos">
            <Cluster gap=LayoutGap::Sm>
                {PAGES
                    .into_iter()
                    .map(|(href, label)| view! { <A href=href exact=true>{label}</A> })
                    .collect_view()}
            </Cluster>
        </nav>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <Stack gap=LayoutGap::Md padding=LayoutPadding::Lg layout_class="site-not-found">
            <Heading>"404"</Heading>
            <Text tone=TextTone::Secondary>
                {move || format!("Nothing lives at {}.", location.pathname.get())}
            </Text>
            <A href="/">"Back to the stepper"</A>
        </Stack>
    }
}
