use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .not-found-page h1 {
                    font-size: 6rem;
                    font-weight: 200;
                    margin: 0;
                    color: #60a5fa;
                }
                .not-found-page p {
                    color: #a8a29e;
                }
                .not-found-link {
                    margin-top: 1rem;
                    padding: 0.75rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 9999px;
                    color: #fff;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .not-found-link:hover {
                    background: #fff;
                    color: #000;
                }
                "#}
            </style>
        </div>
    }
}
