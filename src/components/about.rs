use leptos::prelude::*;

use super::Reveal;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces with modern frameworks",
    },
    Feature {
        title: "Backend Development",
        description: "Building scalable server-side applications and APIs",
    },
    Feature {
        title: "UI/UX Design",
        description: "Designing intuitive and visually appealing user experiences",
    },
    Feature {
        title: "Performance Optimization",
        description: "Ensuring fast loading times and smooth user interactions",
    },
];

const JOURNEY_TECH: &[&str] = &["React", "Node.js", "TypeScript", "Python", "AWS"];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <Reveal class="section__intro">
                <h2 class="gradient-text">"About Me"</h2>
                <p>
                    "I'm a passionate full-stack developer with a love for creating digital experiences "
                    "that make a difference. With expertise in modern web technologies, I bring ideas to "
                    "life through clean code and innovative solutions."
                </p>
            </Reveal>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        view! {
                            <Reveal index=index class="feature glass">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </Reveal>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Reveal index=5 class="journey glass">
                <h3 class="gradient-text">"My Journey"</h3>
                <p>
                    "Started my journey in web development 5 years ago, I've had the privilege of working "
                    "with diverse teams and technologies. From small startups to large enterprises, I've "
                    "contributed to projects that have impacted thousands of users."
                </p>
                <ul class="tag-list">
                    {JOURNEY_TECH
                        .iter()
                        .map(|tech| view! { <li class="tag">{*tech}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </Reveal>
        </section>
    }
}
