use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::config;
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"क"}</span>
                    <span class="nav-logo-word">{"KALCHAKRA"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <a href="/#vision" class="nav-link" onclick={close_menu.clone()}>{"VISION"}</a>
                    <a href="/#focus" class="nav-link" onclick={close_menu.clone()}>{"FOCUS"}</a>
                    <a href="/#audience" class="nav-link" onclick={close_menu.clone()}>{"AUDIENCE"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Newspaper} classes="nav-link">
                            {"E-PAPER"}
                        </Link<Route>>
                    </div>
                    <a
                        href={config::WAITLIST_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-waitlist-button"
                        onclick={close_menu}
                    >
                        {"Join Waitlist"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    width: 100%;
                    background: rgba(12, 10, 9, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    position: relative;
                    z-index: 50;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }
                .nav-logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #1d4ed8;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .nav-logo-word {
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.3em;
                    color: #fff;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #d6d3d1;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-waitlist-button {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: inherit;
                    text-decoration: none;
                    transition: all 0.2s;
                }
                .nav-waitlist-button:hover {
                    background: #fff;
                    color: #000;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #0c0a09;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
