use std::f64::consts::TAU;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const STAR_COUNT: usize = 140;
const RING_COUNT: usize = 90;
const FRAME_MILLIS: u32 = 33;

struct Star {
    x: f64,
    y: f64,
    radius: f64,
    drift: f64,
    phase: f64,
}

fn make_stars(width: f64, height: f64) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: js_sys::Math::random() * width,
            y: js_sys::Math::random() * height,
            radius: 0.4 + js_sys::Math::random() * 1.2,
            drift: 0.05 + js_sys::Math::random() * 0.15,
            phase: js_sys::Math::random() * TAU,
        })
        .collect()
}

fn draw_frame(context: &CanvasRenderingContext2d, stars: &[Star], width: f64, height: f64, tick: f64) {
    context.clear_rect(0.0, 0.0, width, height);

    // Twinkling starfield, drifting slowly upward.
    context.set_fill_style_str("#bcd3ff");
    for star in stars {
        let y = (star.y - tick * star.drift).rem_euclid(height);
        let alpha = 0.35 + 0.45 * ((tick * 0.03 + star.phase).sin() * 0.5 + 0.5);
        context.set_global_alpha(alpha);
        context.begin_path();
        let _ = context.arc(star.x, y, star.radius, 0.0, TAU);
        context.fill();
    }

    // Slowly rotating particle ring behind the headline.
    let cx = width / 2.0;
    let cy = height / 2.0;
    let base = width.min(height) * 0.32;
    let angle_offset = tick * 0.004;
    context.set_fill_style_str("#99bbff");
    for i in 0..RING_COUNT {
        let along = i as f64 / RING_COUNT as f64 * TAU;
        let wobble = (along * 3.0 + tick * 0.01).sin() * base * 0.08;
        let r = base + wobble;
        let x = cx + r * (along + angle_offset).cos();
        let y = cy + r * 0.4 * (along + angle_offset).sin();
        let depth = ((along + angle_offset).sin() * 0.5 + 0.5) * 0.6 + 0.2;
        context.set_global_alpha(depth);
        context.begin_path();
        let _ = context.arc(x, y, 1.4, 0.0, TAU);
        context.fill();
    }
    context.set_global_alpha(1.0);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut interval = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let width = canvas.client_width().max(1) as f64;
                    let height = canvas.client_height().max(1) as f64;
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    if let Some(context) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        let stars = make_stars(width, height);
                        let mut tick = 0.0;
                        interval = Some(Interval::new(FRAME_MILLIS, move || {
                            tick += 1.0;
                            draw_frame(&context, &stars, width, height, tick);
                        }));
                    }
                }

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="hero">
            <canvas class="hero-canvas" ref={canvas_ref}></canvas>

            <div class="hero-content">
                <h1 class="hero-title">{"KALCHAKRA"}</h1>
                <div class="hero-rule"></div>
                <h2 class="hero-subtitle">
                    {"A digital-first news magazine focused on "}
                    <span class="hero-accent">{"credible journalism"}</span>
                    {", ground reports, education, youth issues, and society."}
                </h2>
                <div class="hero-keywords">
                    <span>{"Trustworthy Reporting"}</span>
                    <span class="hero-keyword-sep">{"•"}</span>
                    <span>{"Explainers"}</span>
                    <span class="hero-keyword-sep">{"•"}</span>
                    <span>{"Responsible Opinion"}</span>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <span>{"Scroll"}</span>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    background: #000;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-canvas {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.6;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 64rem;
                    margin: 0 auto;
                    animation: hero-fade-in 1.5s ease-out;
                }
                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 200;
                    letter-spacing: -0.025em;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .hero-rule {
                    height: 1px;
                    width: 6rem;
                    background: #3b82f6;
                    margin: 0 auto 2rem;
                }
                .hero-subtitle {
                    font-size: 1.75rem;
                    font-weight: 300;
                    color: #d6d3d1;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                    animation: hero-rise 1s ease-out 0.5s backwards;
                }
                .hero-accent {
                    color: #60a5fa;
                    font-weight: 400;
                }
                .hero-keywords {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #78716c;
                    animation: hero-fade-in 1s ease-out 1.5s backwards;
                }
                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #78716c;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: hero-bob 2s ease-in-out infinite;
                }
                @keyframes hero-fade-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes hero-bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                @media (max-width: 768px) {
                    .hero-title { font-size: 2.5rem; }
                    .hero-subtitle { font-size: 1.25rem; }
                    .hero-keywords { flex-direction: column; gap: 1rem; }
                    .hero-keyword-sep { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
