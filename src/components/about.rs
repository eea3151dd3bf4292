use yew::prelude::*;

const FOCUS_AREAS: [&str; 4] = [
    "Trustworthy reporting",
    "Explainers",
    "Opinion with responsibility",
    "Citizen/Public Journalism (verified)",
];

const AUDIENCES: [&str; 4] = [
    "Students & youth (18–30)",
    "Academics & informed readers",
    "People interested in social, educational, and national issues",
    "Aspiring journalists and contributors",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about">
            <section id="vision" class="about-section">
                <div class="about-inner">
                    <h3 class="about-heading">{"The Vision"}</h3>
                    <div class="about-body">
                        <p>
                            {"We are building a digital-first news magazine focused on credible \
                              journalism, ground reports, education, youth issues, and society."}
                        </p>
                        <p class="about-muted">
                            {"This is not a breaking-news or sensational portal."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="focus" class="about-section">
                <div class="about-inner">
                    <h3 class="about-heading">{"Our Focus"}</h3>
                    <div class="focus-grid">
                        {
                            FOCUS_AREAS.iter().map(|item| html! {
                                <div class="focus-item" key={*item}>
                                    <span class="focus-bullet"></span>
                                    <span>{*item}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="audience" class="about-section">
                <div class="about-inner">
                    <h3 class="about-heading">{"Target Audience"}</h3>
                    <ul class="audience-list">
                        {
                            AUDIENCES.iter().map(|item| html! {
                                <li key={*item}>
                                    <span class="audience-arrow">{"→"}</span>
                                    {*item}
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </section>

            <section class="about-section">
                <div class="about-inner">
                    <h3 class="about-heading">{"Our Tone"}</h3>
                    <p class="about-tone">{"\"Serious, ethical, calm, and informative\""}</p>
                </div>
            </section>

            <style>
                {r#"
                .about {
                    background: #1c1917;
                    color: #f5f5f4;
                }
                .about-section {
                    padding: 5rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .about-section:last-of-type {
                    border-bottom: 0;
                }
                .about-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .about-heading {
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #60a5fa;
                    margin-bottom: 2rem;
                }
                .about-body {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #e7e5e4;
                }
                .about-body p {
                    margin-bottom: 1.5rem;
                }
                .about-muted {
                    color: #a8a29e;
                }
                .focus-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .focus-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.5rem;
                    transition: background 0.2s;
                }
                .focus-item:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .focus-bullet {
                    width: 8px;
                    height: 8px;
                    border-radius: 9999px;
                    background: #3b82f6;
                    flex-shrink: 0;
                }
                .audience-list {
                    list-style: none;
                    padding: 0;
                    font-size: 1.125rem;
                    color: #d6d3d1;
                }
                .audience-list li {
                    display: flex;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .audience-arrow {
                    color: #3b82f6;
                    margin-right: 0.75rem;
                }
                .about-tone {
                    font-size: 1.5rem;
                    font-style: italic;
                    font-family: Georgia, serif;
                    color: #a8a29e;
                }
                @media (max-width: 768px) {
                    .focus-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-body {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
