#![allow(clippy::unit_arg)]

pub mod components;
pub mod context;
pub mod error;
pub mod pages;
pub mod utils;

use components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};
use pages::*;

/// Wraps the content in a basic layout and a final fallback error boundary which should never actually trigger
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    let fallback = move |errors: ArcRwSignal<Errors>| {
        errors
            .get_untracked()
            .into_iter()
            .map(|(_key, err)| {
                view! { <div>{format!("Unhandled error: {err}")}</div>}
            })
            .collect_view()
    };

    view! {
            <Stylesheet id="takulog" href="/takulog.css"/>
            <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
            <Meta name="description" content="卓ログはTRPGセッションの記録ボードです"/>
            <Title text="卓ログ"/>
            <div class="is-flex is-flex-direction-column" style="min-height: 100vh">
                <div class="section is-flex is-flex-grow-1">
                    <div class="container">
                        <ErrorBoundary fallback>
                            <Content/>
                        </ErrorBoundary>
                    </div>
                </div>
                <footer class="footer">
                    <div class="container">
                        <a href="https://github.com/daruji65/takulog">"Source code"</a>
                    </div>
                </footer>
            </div>
    }
}

/// Contains the navbar and router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <Navbar/>
            <main>
                <h1 class="title">"卓ログ"</h1>
                <FlatRoutes fallback=|| "ページが見つかりません。">
                    <Route
                        path=StaticSegment("/")
                        view=Home
                    />
                    <Route
                        path=StaticSegment("characters")
                        view=Characters
                    />
                    <Route
                        path=(StaticSegment("characters"), StaticSegment("detail"))
                        view=CharacterDetail
                    />
                    <Route
                        path=StaticSegment("scenarios")
                        view=Scenarios
                    />
                    <Route
                        path=(StaticSegment("scenarios"), StaticSegment("detail"))
                        view=ScenarioDetail
                    />
                    <Route
                        path=StaticSegment("sessions")
                        view=Sessions
                    />
                    <Route
                        path=(StaticSegment("sessions"), StaticSegment("detail"))
                        view=SessionDetail
                    />
                    <Route
                        path=StaticSegment("schedule")
                        view=Schedule
                    />
                    <Route
                        path=StaticSegment("board")
                        view=Board
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
