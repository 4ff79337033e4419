use leptos::prelude::*;

use super::LanguageDot;
use crate::showcase::ShowcaseItem;

/// Topics shown per card.
const MAX_CARD_TOPICS: usize = 3;

fn format_number(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}m", f64::from(n) / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", f64::from(n) / 1_000.0)
    } else {
        n.to_string()
    }
}

/// The live demo link, if the repository has a non-blank homepage.
fn demo_link(homepage: Option<String>) -> Option<String> {
    homepage.filter(|h| !h.trim().is_empty())
}

fn card_topics(topics: Vec<String>) -> Vec<String> {
    topics.into_iter().take(MAX_CARD_TOPICS).collect()
}

#[component]
pub fn ProjectCard(item: ShowcaseItem) -> impl IntoView {
    let ShowcaseItem {
        name,
        description,
        url,
        homepage,
        language,
        stars,
        forks,
        topics,
        updated_at,
        ..
    } = item;

    let demo = demo_link(homepage);
    let topics = card_topics(topics);
    let updated_datetime = updated_at.clone();

    view! {
        <article class="project-card glass">
            <div class="project-header">
                <h3>{name}</h3>
                <div class="project-links">
                    <a href=url target="_blank" rel="noopener noreferrer" title="Source">
                        <img src="/icons/github.svg" alt="Source" />
                    </a>
                    {demo.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" title="Live demo">
                            <img src="/icons/external-link.svg" alt="Live demo" />
                        </a>
                    })}
                </div>
            </div>
            <p class="project-description">{description.unwrap_or_default()}</p>
            <div class="project-meta">
                <span class="project-metric" title="Stars">"★ "{format_number(stars)}</span>
                <span class="project-metric" title="Forks">"⑂ "{format_number(forks)}</span>
                <LanguageDot language=language />
            </div>
            <ul class="project-topics">
                {topics
                    .into_iter()
                    .map(|topic| view! { <li class="project-topic">{topic}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <time class="project-updated" datetime=updated_datetime>"updated "{updated_at}</time>
        </article>
    }
}
