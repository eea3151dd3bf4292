use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p>{format!("© {} Kalchakra. All rights reserved.", year)}</p>
                <div class="footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0c0a09;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 3rem 1.5rem;
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    opacity: 0.6;
                    font-size: 0.875rem;
                    font-weight: 300;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .footer-content {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
