use leptos::prelude::*;

/// Dot colour for languages outside the table.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#6366f1";

/// Display colour for a repository's primary language.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "React" => "#61dafb",
        "Python" => "#3776ab",
        "HTML" => "#e34c26",
        "CSS" => "#1572b6",
        "Vue" => "#4fc08d",
        "Java" => "#ed8b00",
        "C++" => "#00599c",
        "Go" => "#00add8",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

#[component]
pub fn LanguageDot(language: Option<String>) -> impl IntoView {
    let color = language.as_deref().map_or(DEFAULT_LANGUAGE_COLOR, language_color);

    view! {
        <span class="language">
            <span class="language__dot" style=format!("background-color: {color}")></span>
            {language.map(|l| view! { <span class="language__name">{l}</span> })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_have_their_own_colour() {
        assert_eq!(language_color("TypeScript"), "#3178c6");
        assert_eq!(language_color("C++"), "#00599c");
        assert_eq!(language_color("Go"), "#00add8");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(language_color("typescript"), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn unknown_and_empty_labels_use_default() {
        for label in ["", "Rust", "Brainfuck", " ", "ÿ"] {
            assert_eq!(language_color(label), DEFAULT_LANGUAGE_COLOR);
        }
    }
}
