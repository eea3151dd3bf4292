use yew::prelude::*;

use crate::components::about::About;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::ticker::Ticker;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <div class="navbar-sticky">
                <Navbar />
            </div>
            <Ticker />
            <Hero />
            <About />
            <Footer />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1c1917;
                }
                .navbar-sticky {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                }
                "#}
            </style>
        </div>
    }
}
