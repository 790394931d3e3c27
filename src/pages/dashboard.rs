//! Dashboard page: skill-based career suggestions alongside the advisor chat.

use leptos::prelude::*;

use super::form::{field_error, submit_label};
use crate::components::chat_panel::ChatPanel;
use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::types::Recommendation;
use crate::state::ui::StatusMessage;
use crate::util::validate::{Field, FieldError, validate_skills};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let skills = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let status = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);
    let recommendations = RwSignal::new(None::<Vec<Recommendation>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        status.set(None);
        let parsed = match validate_skills(&skills.get()) {
            Ok(parsed) => parsed,
            Err(found) => {
                errors.set(vec![found]);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::SUGGEST_ERROR_TEXT;

            log::debug!("requesting suggestions for {} skills", parsed.len());
            match crate::net::api::suggest_careers(parsed).await {
                Ok(found) => recommendations.set(Some(found)),
                Err(e) => {
                    log::warn!("career suggestions failed: {e}");
                    status.set(Some(StatusMessage::error(SUGGEST_ERROR_TEXT)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (parsed, recommendations);
            busy.set(false);
        }
    };

    view! {
        <NavBar/>
        <main class="dashboard-page">
            <section class="dashboard-skills">
                <h1>"Find your career"</h1>
                <form id="skill-form" class="skill-form" on:submit=on_submit>
                    <label for="skills-input">"Your skills"</label>
                    <input
                        id="skills-input"
                        name="skills"
                        type="text"
                        placeholder="Python, design, public speaking"
                        prop:value=move || skills.get()
                        on:input=move |ev| skills.set(event_target_value(&ev))
                    />
                    {field_error(errors, Field::Skills)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get(), "Get Suggestions")}
                    </button>
                </form>
                <StatusLine status=status/>
                <div id="recommendations" class="recommendations">
                    {move || {
                        recommendations
                            .get()
                            .map(|found| {
                                view! {
                                    <h2>"Your Career Recommendations"</h2>
                                    {found.into_iter().map(recommendation_card).collect::<Vec<_>>()}
                                }
                            })
                    }}
                </div>
            </section>
            <section class="dashboard-chat">
                <h2>"Career Advisor"</h2>
                <ChatPanel/>
            </section>
        </main>
    }
}

fn recommendation_card(rec: Recommendation) -> impl IntoView {
    let score = rec.score_label();
    let top_skills = rec.top_skills_label();
    view! {
        <div class="recommendation-card">
            <h3>{rec.career}</h3>
            <p>
                <strong>"Score:"</strong>
                " "
                {score}
            </p>
            <p>
                <strong>"Top Skills:"</strong>
                " "
                {top_skills}
            </p>
            <a href=rec.learn_link target="_blank" rel="noopener" class="learn-link">
                "Learn More"
            </a>
        </div>
    }
}
