use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::countdown::{Countdown, Remainder};
use crate::Route;

fn tile(label: &str, value: i64) -> Html {
    html! {
        <div class="countdown-tile" key={label.to_string()}>
            <div class="countdown-value">{format!("{:02}", value)}</div>
            <div class="countdown-label">{label.to_string()}</div>
        </div>
    }
}

fn countdown_tiles(remainder: &Remainder) -> Html {
    html! {
        <div class="countdown-row">
            { tile("Days", remainder.days) }
            { tile("Hours", remainder.hours) }
            { tile("Minutes", remainder.minutes) }
            { tile("Seconds", remainder.seconds) }
        </div>
    }
}

#[function_component(LaunchTeaser)]
pub fn launch_teaser() -> Html {
    let countdown = use_state(|| {
        Countdown::at(config::launch_instant(), Local::now().naive_local())
    });

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |_| {
                let target = config::launch_instant();

                // Keep a handle to the interval so the tick can cancel it
                // once the countdown reaches its terminal state.
                let interval_handle: Rc<RefCell<Option<Interval>>> =
                    Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let tick = {
                    let countdown = countdown.clone();
                    let interval_handle = interval_handle.clone();
                    move || {
                        let next = Countdown::at(target, Local::now().naive_local());
                        if next.is_expired() {
                            if let Some(interval) = interval_handle.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                        countdown.set(next);
                    }
                };

                tick();

                let interval_tick = tick.clone();
                let interval = Interval::new(1_000, move || interval_tick());
                *interval_handle_clone.borrow_mut() = Some(interval);

                move || {
                    // Clean up the interval on component unmount
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    let countdown_section = match *countdown {
        Countdown::Pending(remainder) => countdown_tiles(&remainder),
        Countdown::Expired => html! {
            <div class="launched-panel">
                <h3>{"We are live!"}</h3>
                <p>{"The first edition of Kalchakra is out now."}</p>
                <Link<Route> to={Route::Newspaper} classes="launched-link">
                    {"Read the E-Newspaper"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <div class="teaser-page">
            <div class="teaser-glow teaser-glow-blue"></div>
            <div class="teaser-glow teaser-glow-purple"></div>

            <div class="teaser-content">
                <h2 class="teaser-kicker">{"Kalchakra Presents"}</h2>

                <div class="teaser-headline">
                    <h1>{"SOMETHING"}</h1>
                    <h1 class="teaser-headline-lower">{"BIG IS COMING"}</h1>
                </div>

                <p class="teaser-lede">
                    {"Our First E-Newspaper. Credible. In-depth. Unbiased."}
                    <br />
                    <span class="teaser-date">{"Launching February 02, 2026"}</span>
                </p>

                { countdown_section }

                <Link<Route> to={Route::Home} classes="teaser-back-link">
                    {"← Back to Home"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .teaser-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }
                .teaser-glow {
                    position: absolute;
                    width: 500px;
                    height: 500px;
                    border-radius: 9999px;
                    filter: blur(100px);
                    opacity: 0.4;
                    animation: teaser-pulse 4s ease-in-out infinite;
                }
                .teaser-glow-blue {
                    top: 25%;
                    left: 25%;
                    background: rgba(30, 58, 138, 0.3);
                }
                .teaser-glow-purple {
                    bottom: 25%;
                    right: 25%;
                    background: rgba(88, 28, 135, 0.3);
                    animation-delay: 1s;
                }
                .teaser-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .teaser-kicker {
                    font-size: 1rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    color: #60a5fa;
                    margin-bottom: 2rem;
                    animation: teaser-fade 1.5s ease-out;
                }
                .teaser-headline h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    line-height: 1;
                    margin: 0;
                    background: linear-gradient(to bottom, #fff, #78716c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: teaser-rise 0.8s ease-out backwards;
                }
                .teaser-headline-lower {
                    background: linear-gradient(to bottom, #e7e5e4, #57534e);
                    animation-delay: 0.15s !important;
                }
                .teaser-headline {
                    margin-bottom: 2.5rem;
                }
                .teaser-lede {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #a8a29e;
                    max-width: 42rem;
                    margin: 0 auto 5rem;
                    line-height: 1.6;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 1.5rem 0;
                    animation: teaser-fade 1s ease-out 1.5s backwards;
                }
                .teaser-date {
                    color: #60a5fa;
                    font-weight: 400;
                    display: block;
                    margin-top: 0.5rem;
                }
                .countdown-row {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .countdown-tile {
                    text-align: center;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.5rem;
                    border-radius: 1rem;
                    min-width: 140px;
                    animation: teaser-pop 0.5s ease-out backwards;
                }
                .countdown-value {
                    font-size: 3.75rem;
                    font-weight: 300;
                    font-family: ui-monospace, monospace;
                    margin-bottom: 0.5rem;
                }
                .countdown-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #78716c;
                    font-weight: 700;
                }
                .launched-panel {
                    margin-bottom: 5rem;
                }
                .launched-panel h3 {
                    font-size: 2.5rem;
                    font-weight: 300;
                    margin-bottom: 0.75rem;
                }
                .launched-panel p {
                    color: #a8a29e;
                    margin-bottom: 1.5rem;
                }
                .launched-link {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 9999px;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.2s;
                }
                .launched-link:hover {
                    background: #3b82f6;
                }
                .teaser-back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    border-radius: 9999px;
                    text-decoration: none;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    transition: all 0.3s;
                }
                .teaser-back-link:hover {
                    background: #fff;
                    color: #000;
                }
                @keyframes teaser-pulse {
                    0%, 100% { opacity: 0.4; }
                    50% { opacity: 0.7; }
                }
                @keyframes teaser-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes teaser-rise {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes teaser-pop {
                    from { opacity: 0; transform: scale(0.5); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (max-width: 768px) {
                    .teaser-headline h1 { font-size: 2.75rem; }
                    .teaser-lede { font-size: 1.125rem; }
                    .countdown-tile { min-width: 100px; padding: 1rem; }
                    .countdown-value { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}
