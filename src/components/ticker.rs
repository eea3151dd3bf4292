use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

const HEADLINE: &str = "🚀 Something Big Is Coming — Our First E-Newspaper Launches Feb 02, 2026!";
const TAGLINE: &str = "Trustworthy Reporting • Citizen Journalism • Youth Focused";

#[function_component(Ticker)]
pub fn ticker() -> Html {
    // Content is duplicated so the -50% keyframe loops seamlessly.
    let strip = (0..4).map(|i| {
        html! {
            <div class="ticker-group" key={i.to_string()}>
                <span class="ticker-headline">{HEADLINE}</span>
                <span class="ticker-dot"></span>
                <span class="ticker-tagline">{TAGLINE}</span>
                <span class="ticker-dot"></span>
            </div>
        }
    });

    html! {
        <div class="ticker">
            <div class="ticker-track">
                { for strip }
            </div>
            <div class="ticker-action">
                <Link<Route> to={Route::Launch} classes="ticker-launch-link">
                    {"View Launch →"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .ticker {
                    position: relative;
                    overflow: hidden;
                    padding: 0.75rem 0;
                    background: linear-gradient(to right, #1e3a8a, #312e81, #1e3a8a);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 0 15px rgba(59, 130, 246, 0.3);
                    z-index: 40;
                }
                .ticker-track {
                    display: flex;
                    white-space: nowrap;
                    animation: ticker-scroll 25s linear infinite;
                }
                .ticker-group {
                    display: flex;
                    align-items: center;
                }
                .ticker-headline {
                    margin: 0 2rem;
                    font-size: 0.9rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    background: linear-gradient(to right, #bfdbfe, #fff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .ticker-tagline {
                    margin: 0 2rem;
                    font-size: 0.9rem;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(191, 219, 254, 0.8);
                }
                .ticker-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 9999px;
                    background: #60a5fa;
                    opacity: 0.5;
                }
                .ticker-action {
                    position: absolute;
                    right: 0;
                    top: 0;
                    bottom: 0;
                    display: flex;
                    align-items: center;
                    padding: 0 1.5rem;
                    background: linear-gradient(to left, #1e1b4b, rgba(30, 27, 75, 0.9), transparent);
                }
                .ticker-launch-link {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #fff;
                    text-decoration: none;
                    border: 1px solid rgba(96, 165, 250, 0.3);
                    background: rgba(59, 130, 246, 0.1);
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    transition: background 0.3s;
                }
                .ticker-launch-link:hover {
                    background: #3b82f6;
                }
                @keyframes ticker-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
