use leptos::prelude::*;

use super::Reveal;

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
    pub category: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90, category: "Frontend" },
    Skill { name: "TypeScript", level: 85, category: "Language" },
    Skill { name: "Node.js", level: 88, category: "Backend" },
    Skill { name: "Python", level: 80, category: "Language" },
    Skill { name: "SQL", level: 72, category: "API" },
    Skill { name: "Next.js", level: 80, category: "Framework" },
    Skill { name: "Tailwind CSS", level: 75, category: "Styling" },
    Skill { name: "Express.js", level: 78, category: "Backend" },
    Skill { name: "MongoDB", level: 70, category: "Database" },
    Skill { name: "Firebase", level: 65, category: "Backend" },
    Skill { name: "C++", level: 60, category: "Language" },
];

fn bar_width(level: u8) -> String {
    format!("width: {}%", level.min(100))
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <Reveal class="section__intro">
                <h2 class="gradient-text">"Skills & Expertise"</h2>
                <p>"A comprehensive toolkit of modern technologies and frameworks"</p>
            </Reveal>
            <ul class="skill-list">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! {
                            <li class="skill glass">
                                <div class="skill__header">
                                    <span class="skill__name">{skill.name}</span>
                                    <span class="skill__category">{skill.category}</span>
                                </div>
                                <div class="skill__track">
                                    <Reveal index=index class="skill__bar">
                                        <span style=bar_width(skill.level)></span>
                                    </Reveal>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
