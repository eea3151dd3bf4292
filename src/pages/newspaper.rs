use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::config;
use crate::pdfjs;
use crate::viewer::{self, LoadPhase, ViewerState};

const CANVAS_ID: &str = "edition-canvas";

/// Fetch the edition bytes and hand them to the rendering collaborator.
/// Every failure collapses into a message for the error panel.
async fn load_document() -> Result<pdfjs::DocumentInfo, String> {
    let response = Request::get(config::EDITION_PATH)
        .send()
        .await
        .map_err(|err| format!("could not reach the edition: {err}"))?;
    if !response.ok() {
        return Err(format!(
            "the edition is not available right now (status {})",
            response.status()
        ));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|err| format!("could not read the edition: {err}"))?;
    let raw = pdfjs::open_document(&bytes)
        .await
        .map_err(|_| "the edition could not be opened".to_string())?;
    pdfjs::document_info(raw)
}

#[function_component(Newspaper)]
pub fn newspaper() -> Html {
    let state = use_state(ViewerState::new);
    let phase = use_state(|| LoadPhase::Loading);
    let container_width = use_state(|| 0.0_f64);
    let attempt = use_state(|| 0_u32);

    // Load the edition on mount and again on every retry. The alive flag
    // scopes the in-flight load to this mount: cleanup flips it so a late
    // resolution cannot touch disposed state.
    {
        let state = state.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_guard = alive.clone();

                phase.set(LoadPhase::Loading);
                spawn_local(async move {
                    let outcome = load_document().await;
                    if !alive.get() {
                        return;
                    }
                    match outcome {
                        Ok(info) => {
                            let mut next = (*state).clone();
                            next.set_total_pages(info.page_count);
                            state.set(next);
                            phase.set(LoadPhase::Ready);
                        }
                        Err(message) => {
                            gloo_console::error!("edition load failed:", message.clone());
                            phase.set(LoadPhase::Failed(message));
                        }
                    }
                });

                move || alive_guard.set(false)
            },
            *attempt,
        );
    }

    // Responsive width: recompute on every window resize.
    {
        let container_width = container_width.clone();
        use_effect_with_deps(
            move |_| {
                let on_resize = {
                    let container_width = container_width.clone();
                    move || {
                        if let Some(window) = web_sys::window() {
                            if let Some(width) =
                                window.inner_width().ok().and_then(|w| w.as_f64())
                            {
                                container_width.set(viewer::render_width(width));
                            }
                        }
                    }
                };
                on_resize();

                let callback = Closure::<dyn Fn()>::new(on_resize);
                if let Some(window) = web_sys::window() {
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Rasterize the visible page whenever the page, zoom or width changes.
    {
        let ready = matches!(*phase, LoadPhase::Ready);
        use_effect_with_deps(
            move |(page, zoom, width, ready): &(u32, f64, f64, bool)| {
                if *ready {
                    let page = *page;
                    let zoom = *zoom;
                    let width = *width;
                    spawn_local(async move {
                        if let Err(err) = pdfjs::render_page(page, zoom, width, CANVAS_ID).await {
                            gloo_console::error!("page render failed:", err);
                        }
                    });
                }
                || ()
            },
            (state.current_page, state.zoom, *container_width, ready),
        );
    }

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.previous_page();
            state.set(next);
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.next_page();
            state.set(next);
        })
    };

    let on_zoom_in = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.zoom_in();
            state.set(next);
        })
    };

    let on_zoom_out = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.zoom_out();
            state.set(next);
        })
    };

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| {
            attempt.set(*attempt + 1);
        })
    };

    let total_label = state
        .total_pages
        .map(|total| total.to_string())
        .unwrap_or_else(|| "--".to_string());

    let surface = match &*phase {
        LoadPhase::Failed(message) => html! {
            <div class="reader-error">
                <p class="reader-error-title">{"The edition could not be loaded."}</p>
                <p class="reader-error-detail">{message.clone()}</p>
                <button class="reader-retry" onclick={on_retry}>{"Try Again"}</button>
            </div>
        },
        _ => {
            let overlay = if matches!(*phase, LoadPhase::Loading) {
                html! {
                    <div class="reader-loading">
                        <div class="reader-spinner"></div>
                        <span>{"Loading Edition..."}</span>
                    </div>
                }
            } else {
                html! {}
            };
            html! {
                <>
                    { overlay }
                    // Keyed by page number: switching pages replaces the
                    // surface instead of patching it, so stale content
                    // never shows.
                    <canvas
                        id={CANVAS_ID}
                        class="reader-canvas"
                        key={format!("page-{}", state.current_page)}
                    ></canvas>
                </>
            }
        }
    };

    html! {
        <div class="reader-page">
            <div class="navbar-sticky">
                <Navbar />
            </div>

            <div class="reader-body">
                <div class="reader-header">
                    <h1>{"E-Newspaper "}<span class="reader-brand">{"Kalchakra"}</span></h1>
                    <p>{"Read the latest edition of our independent journalism."}</p>
                </div>

                <div class="reader-frame">
                    { surface }
                </div>

                <div class="reader-controls">
                    <div class="reader-nav-group">
                        <button
                            class="reader-button"
                            disabled={!state.has_previous()}
                            onclick={on_previous}
                            title="Previous Page"
                        >
                            {"‹"}
                        </button>
                        <span class="reader-page-label">
                            {format!("{} / {}", state.current_page, total_label)}
                        </span>
                        <button
                            class="reader-button"
                            disabled={!state.has_next()}
                            onclick={on_next}
                            title="Next Page"
                        >
                            {"›"}
                        </button>
                    </div>

                    <div class="reader-zoom-group">
                        <button class="reader-button" onclick={on_zoom_out} title="Zoom Out">
                            {"−"}
                        </button>
                        <span class="reader-zoom-label">
                            {format!("{}%", state.zoom_percent())}
                        </span>
                        <button class="reader-button" onclick={on_zoom_in} title="Zoom In">
                            {"+"}
                        </button>
                    </div>

                    <a
                        href={config::EDITION_PATH}
                        download={config::EDITION_DOWNLOAD_NAME}
                        class="reader-download"
                    >
                        {"Download PDF"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .reader-page {
                    min-height: 100vh;
                    background: #0c0a09;
                    display: flex;
                    flex-direction: column;
                    color: #f5f5f4;
                }
                .navbar-sticky {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                }
                .reader-body {
                    flex-grow: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem 1rem 8rem;
                    gap: 1.5rem;
                }
                .reader-header {
                    text-align: center;
                }
                .reader-header h1 {
                    font-size: 2.5rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    margin-bottom: 0.5rem;
                }
                .reader-brand {
                    background: linear-gradient(to right, #60a5fa, #bfdbfe);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .reader-header p {
                    color: #a8a29e;
                }
                .reader-frame {
                    position: relative;
                    background: #1c1917;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    min-height: 600px;
                    width: 100%;
                    max-width: 64rem;
                    display: flex;
                    justify-content: center;
                    align-items: flex-start;
                    overflow: auto;
                    padding: 1rem;
                }
                .reader-canvas {
                    background: #fff;
                    box-shadow: 0 0 30px rgba(0, 0, 0, 0.5);
                }
                .reader-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: rgba(28, 25, 23, 0.8);
                    backdrop-filter: blur(4px);
                    color: #60a5fa;
                    z-index: 10;
                }
                .reader-spinner {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 2px solid transparent;
                    border-top-color: #3b82f6;
                    border-bottom-color: #3b82f6;
                    animation: reader-spin 1s linear infinite;
                }
                .reader-error {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .reader-error-title {
                    font-size: 1.25rem;
                    color: #fca5a5;
                }
                .reader-error-detail {
                    color: #a8a29e;
                    font-size: 0.875rem;
                }
                .reader-retry {
                    margin-top: 1rem;
                    padding: 0.625rem 1.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .reader-retry:hover {
                    background: #fff;
                    color: #000;
                }
                .reader-controls {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 40;
                    width: 95%;
                    max-width: 42rem;
                    background: rgba(28, 25, 23, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 0.75rem 1.5rem;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .reader-nav-group, .reader-zoom-group {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: rgba(0, 0, 0, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 0.75rem;
                    padding: 0.375rem;
                }
                .reader-button {
                    padding: 0.25rem 0.75rem;
                    font-size: 1.25rem;
                    line-height: 1;
                    background: none;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .reader-button:hover:not(:disabled) {
                    background: rgba(255, 255, 255, 0.1);
                }
                .reader-button:disabled {
                    opacity: 0.3;
                    cursor: default;
                }
                .reader-page-label {
                    font-family: ui-monospace, monospace;
                    font-size: 0.875rem;
                    color: #d6d3d1;
                    min-width: 5ch;
                    text-align: center;
                    user-select: none;
                }
                .reader-zoom-label {
                    font-size: 0.75rem;
                    color: #a8a29e;
                    width: 2.5rem;
                    text-align: center;
                    user-select: none;
                }
                .reader-download {
                    background: #2563eb;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 600;
                    padding: 0.625rem 1.25rem;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(30, 58, 138, 0.3);
                    transition: background 0.2s;
                }
                .reader-download:hover {
                    background: #3b82f6;
                }
                @keyframes reader-spin {
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 768px) {
                    .reader-header h1 { font-size: 1.75rem; }
                    .reader-controls { justify-content: center; }
                }
                "#}
            </style>
        </div>
    }
}
