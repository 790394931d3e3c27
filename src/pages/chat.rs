//! Standalone advisor chat page.

use leptos::prelude::*;

use crate::components::auth_prompt::AuthPrompt;
use crate::components::chat_panel::ChatPanel;
use crate::components::nav_bar::NavBar;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="chat-page">
            <h1>"Career Advisor"</h1>
            <ChatPanel/>
        </main>
        <AuthPrompt/>
    }
}
