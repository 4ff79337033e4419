use leptos::prelude::*;

/// Number of floating particles drawn behind the hero copy.
const PARTICLE_COUNT: usize = 20;

/// Spreads particles over the hero with a fixed pattern so server and client
/// markup agree.
fn particle_style(i: usize) -> String {
    let left = (i * 37 + 11) % 100;
    let top = (i * 53 + 7) % 100;
    let delay_ms = (i % 5) * 400;
    let duration_ms = 3000 + (i % 4) * 500;
    format!(
        "left: {left}%; top: {top}%; animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms"
    )
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <div class="hero__orb"></div>
                {(0..PARTICLE_COUNT)
                    .map(|i| view! { <div class="particle" style=particle_style(i)></div> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="hero__content reveal">
                <h1>
                    <span class="gradient-text">"Full-Stack"</span>
                    <br />
                    <span>"Developer"</span>
                </h1>
                <p class="hero__tagline">
                    "Creating exceptional digital experiences with modern technologies and innovative solutions"
                </p>
                <a href="#projects" class="hero__cta glass">"View Projects"</a>
            </div>
            <a href="#about" class="hero__scroll" aria-label="Scroll to about">"⌄"</a>
        </section>
    }
}
