//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    chat::ChatPage, dashboard::DashboardPage, forgot::ForgotPage, home::HomePage, login::LoginPage,
    signup::SignupPage,
};
use crate::state::ui::UiState;
use crate::util::{auth_prompt, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI context and sets up client-side routing. Chat
/// state is not shared; each `ChatPanel` owns its own conversation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Browser-only startup: stored theme and the host's guest marker.
    Effect::new(move || {
        let theme = theme::init();
        let guest = auth_prompt::host_reports_guest();
        ui.update(|u| {
            u.theme = theme;
            u.guest = guest;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/careergo.css"/>
        <Title text="Career Go"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot") view=ForgotPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
