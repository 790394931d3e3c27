//! Landing page.

use leptos::prelude::*;

use crate::components::image_slider::{ImageSlider, Slide};
use crate::components::nav_bar::NavBar;
use crate::components::reveal_on_scroll::RevealOnScroll;

const SLIDES: [Slide; 3] = [
    Slide { src: "/static/images/slide1.jpg", alt: "Students exploring careers" },
    Slide { src: "/static/images/slide2.jpg", alt: "Mentor reviewing a resume" },
    Slide { src: "/static/images/slide3.jpg", alt: "Team working together" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home-page">
            <section class="hero">
                <div class="hero__text">
                    <h1>"Find the career that fits your skills"</h1>
                    <p>"Tell Career Go what you're good at and get ranked suggestions and advice."</p>
                    <a href="/signup" class="btn btn--primary">"Get Started"</a>
                    <a href="/chat" class="btn">"Ask the Advisor"</a>
                </div>
                <ImageSlider slides=SLIDES.to_vec()/>
            </section>
            <RevealOnScroll>
                <section class="feature">
                    <h2>"Skill-based suggestions"</h2>
                    <p>"List your skills and see which careers match them best."</p>
                </section>
            </RevealOnScroll>
            <RevealOnScroll>
                <section class="feature">
                    <h2>"An advisor on call"</h2>
                    <p>"Ask follow-up questions about roles, paths, and what to learn next."</p>
                </section>
            </RevealOnScroll>
            <RevealOnScroll>
                <section class="feature">
                    <h2>"Learning links"</h2>
                    <p>"Every recommendation points to somewhere to start learning."</p>
                </section>
            </RevealOnScroll>
        </main>
    }
}
