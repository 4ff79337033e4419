use leptos::prelude::*;

use super::{FallbackNotice, ProjectGrid, ProjectGridEmpty, ProjectsPlaceholder, Reveal};
use crate::showcase::{get_showcase, ShowcaseFeed};

/// Projects section. The feed resource belongs to this component's owner, so
/// a load that resolves after unmount is dropped with it.
#[component]
pub fn Projects() -> impl IntoView {
    let feed = Resource::new(|| (), |()| get_showcase());

    view! {
        <section id="projects" class="section">
            <Reveal class="section__intro">
                <h2 class="gradient-text">"Featured Projects"</h2>
                <p>"Explore my latest work and open-source contributions"</p>
            </Reveal>
            <Suspense fallback=|| view! { <ProjectsPlaceholder /> }>
                {move || Suspend::new(async move {
                    // a failed server call degrades the same way a failed listing does
                    let ShowcaseFeed { items, used_fallback } = feed
                        .await
                        .unwrap_or_else(|_| ShowcaseFeed::fallback());

                    view! {
                        {if items.is_empty() {
                            view! { <ProjectGridEmpty /> }.into_any()
                        } else {
                            view! { <ProjectGrid items=items /> }.into_any()
                        }}
                        {used_fallback.then(|| view! { <FallbackNotice /> })}
                    }
                })}
            </Suspense>
        </section>
    }
}
