//! Top level pages.
//!
//! Every page follows the same shape: one resource fans out the fetches the
//! view needs, optional ones degrade to empty collections, and the joined
//! result goes through the pure view builder in `takulog` before rendering.

use crate::{
    components::*,
    context::get_client,
    error::{WebError, WebResult},
    utils,
};
use chrono::Utc;
use futures_util::future::{join, join3, join4};
use leptos::{
    html::{Input, Textarea},
    prelude::*,
};
use leptos_router::{components::*, params::Params};
use send_wrapper::SendWrapper;
use takulog::{assets, datetime, schedule, text, views};
use takulog_api::{
    request as req,
    response::{RunStatus, TargetType},
};

/// Detail pages select their entity through the `id` query parameter.
#[derive(Debug, Clone, PartialEq, Params)]
pub struct DetailParams {
    id: Option<String>,
}

#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    let client = get_client();
    let home_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                let (scenarios, runs, sessions) = SendWrapper::new(join3(
                    client.scenarios(),
                    client.runs(),
                    client.sessions(),
                ))
                .await;
                // scenario titles only decorate the cards here
                let scenarios = scenarios.unwrap_or_default();
                let runs = runs?;
                let sessions = sessions?;
                WebResult::Ok(views::home::build(&scenarios, &runs, &sessions, Utc::now()))
            }
        },
    );

    let next_content = move |next: Option<views::home::NextSession>| {
        let Some(next) = next else {
            return view! { <p class="empty-message">"直近の予定はありません"</p> }.into_any();
        };
        let when = datetime::format_date_time(next.start);
        let duration = next
            .duration_hours
            .map(|hours| format!("({hours}h)"))
            .unwrap_or_default();
        let scenario = next
            .scenario_title
            .unwrap_or_else(|| "（シナリオ未設定）".to_string());
        let title = match next.session_title {
            Some(session_title) => format!("{} {session_title}", next.run_title),
            None => next.run_title,
        };
        view! {
            <div class="next-session">
                <p><strong>{when}</strong>" "{duration}</p>
                <p>{title}</p>
                <p><small>{format!("シナリオ: {scenario}")}</small></p>
                {next.notes.map(|notes| view! {
                    <p class="next-session-notes"><small inner_html=text::multiline_html(&notes)></small></p>
                })}
            </div>
        }
        .into_any()
    };

    let ongoing_content = move |ongoing: Vec<views::home::OngoingRun>| {
        if ongoing.is_empty() {
            return view! { <p class="empty-message">"進行中のシナリオはありません"</p> }
                .into_any();
        }
        let items = ongoing
            .into_iter()
            .map(|run| {
                let href = takulog::links::session_detail(&run.id);
                let scenario = run
                    .scenario_title
                    .unwrap_or_else(|| "（不明）".to_string());
                let players = if run.players.is_empty() {
                    text::DASH.to_string()
                } else {
                    run.players.join(" / ")
                };
                let next = match run.next_start {
                    Some(start) => datetime::format_date_time(start),
                    None => "未定".to_string(),
                };
                view! {
                    <li class="ongoing-run">
                        <A href=href><strong>{run.title}</strong></A>
                        <div><small>{format!("シナリオ: {scenario}")}</small></div>
                        <div><small>{format!("プレイヤー: {players}")}</small></div>
                        <div><small>{format!("次回予定: {next}")}</small></div>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="ongoing-runs">{items}</ul> }.into_any()
    };

    let home_view = move |home: Option<views::home::HomeView>| match home {
        Some(home) => view! {
            {next_content(home.next)}
            <h2 class="subtitle">"進行中シナリオ"</h2>
            {ongoing_content(home.ongoing)}
        }
        .into_any(),
        None => utils::loading_fallback("読み込み中…").into_any(),
    };

    view! {
        <div class="columns">
            <div class="column">
                <h2 class="subtitle">"次回セッション"</h2>
                <ResourceView resource=home_res view=home_view/>
            </div>
            <div class="column">
                <h2 class="subtitle">"最近のコメント"</h2>
                <RecentComments/>
            </div>
        </div>
    }
}

#[component]
pub fn Characters() -> impl IntoView {
    tracing::info!("Rendering Characters");

    let client = get_client();
    let query = RwSignal::new(String::new());
    let characters_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                let (characters, last_sessions) = SendWrapper::new(join(
                    client.characters(),
                    client.character_last_sessions(),
                ))
                .await;
                let characters = characters?;
                // ordering data is optional, the list renders without it
                let last_sessions = last_sessions.unwrap_or_default();
                WebResult::Ok(views::characters::build(&characters, &last_sessions))
            }
        },
    );

    let cards_content = move |cards: Vec<views::characters::CharacterCard>| {
        if cards.is_empty() {
            return view! { <p class="empty-message">"該当するキャラクターがありません"</p> }
                .into_any();
        }
        let cards = cards
            .into_iter()
            .map(|card| {
                let state_class = card.state.map(|s| s.css_class()).unwrap_or_default();
                let job = card.job.unwrap_or_else(|| text::DASH.to_string());
                let player = card.player.unwrap_or_else(|| text::DASH.to_string());
                let system = card.system.unwrap_or_else(|| text::DASH.to_string());
                let alt = card.name.clone();
                view! {
                    <article class=format!("character-card {state_class}")>
                        <FallbackImage
                            class="character-thumb"
                            src=card.image
                            fallback=assets::DEFAULT_CHARACTER_IMAGE
                            alt=alt
                        />
                        <h3 class="character-title">
                            <A href=card.href>{card.name}</A>
                        </h3>
                        <div class="character-meta">
                            <div>{format!("職業: {job}")}</div>
                            <div>{format!("PL: {player}")}</div>
                            <div>{format!("System: {system}")}</div>
                        </div>
                    </article>
                }
            })
            .collect_view();
        view! { <div class="character-grid">{cards}</div> }.into_any()
    };
    let cards_view = move |view_model: Option<views::characters::CharactersView>| {
        match view_model {
            Some(view_model) => {
                cards_content(views::characters::filter(&view_model.cards, &query.get()))
                    .into_any()
            }
            None => utils::loading_fallback("キャラクターを読み込み中…").into_any(),
        }
    };

    view! {
        <h2 class="subtitle">"キャラクター"</h2>
        <label class="label">
            "検索"
            <input
                class="input"
                type="search"
                placeholder="名前・職業・PL・システム"
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </label>
        <ResourceView resource=characters_res view=cards_view/>
    }
}

#[component]
pub fn CharacterDetail() -> impl IntoView {
    let DetailParams { id } = utils::query()?;
    let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
        return WebResult::Ok(
            view! { <p class="empty-message">"キャラクターIDが指定されていません"</p> }
                .into_any(),
        );
    };
    tracing::info!("Rendering CharacterDetail {id}");

    let client = get_client();
    let stored_id = StoredValue::new(id.clone());
    let detail_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            let id = id.clone();
            async move {
                let (characters, scenarios, runs) = SendWrapper::new(join3(
                    client.characters(),
                    client.scenarios(),
                    client.runs(),
                ))
                .await;
                let characters = characters?;
                let scenarios = scenarios.unwrap_or_default();
                let runs = runs.unwrap_or_default();
                // sheet extras are optional, a missing dataset only degrades the view
                let (passed, skill_rows, attribute_rows) = SendWrapper::new(join3(
                    client.character_scenarios(&id),
                    client.character_skills(&id),
                    client.character_attributes(&id),
                ))
                .await;
                let system = characters
                    .iter()
                    .find(|c| c.id == id)
                    .and_then(|c| c.system.clone());
                let attribute_defs = match system {
                    Some(system) => SendWrapper::new(client.system_attributes(&system))
                        .await
                        .unwrap_or_default(),
                    None => Vec::new(),
                };
                WebResult::Ok(views::character::build(
                    &id,
                    &characters,
                    &scenarios,
                    &runs,
                    &passed.unwrap_or_default(),
                    &skill_rows.unwrap_or_default(),
                    &attribute_defs,
                    &attribute_rows.unwrap_or_default(),
                ))
            }
        },
    );

    let detail_content = move |detail: Option<views::character::CharacterDetailView>| {
        let Some(detail) = detail else {
            return view! { <p class="empty-message">"キャラクターが見つかりません"</p> }
                .into_any();
        };
        let badge = detail.state.map(|state| {
            view! {
                <span class=format!("detail-badge {}", state.css_class())>{state.badge()}</span>
            }
        });
        let profile = detail
            .profile
            .into_iter()
            .map(|row| view! { <tr><th>{row.label}</th><td>{row.value}</td></tr> })
            .collect_view();
        let abilities = if detail.abilities.is_empty() {
            view! { <p class="muted">{text::UNREGISTERED}</p> }.into_any()
        } else {
            let chips = detail
                .abilities
                .into_iter()
                .map(|chip| {
                    view! {
                        <span class="chip">
                            <span class="chip-key">{chip.label}</span>
                            <span class="chip-val">{chip.value}</span>
                        </span>
                    }
                })
                .collect_view();
            view! { <div class="chips">{chips}</div> }.into_any()
        };
        let skills = if detail.skills.is_empty() {
            view! { <p class="muted">"（初期値以上の技能なし）"</p> }.into_any()
        } else {
            let chips = detail
                .skills
                .into_iter()
                .map(|chip| {
                    view! {
                        <span class="chip chip--skill">
                            <span class="chip-key">{chip.name}</span>
                            <span class="chip-val">{chip.value}</span>
                        </span>
                    }
                })
                .collect_view();
            view! { <div class="chips">{chips}</div> }.into_any()
        };
        let memo = match detail.memo {
            Some(memo) => {
                view! { <p class="memo" inner_html=text::multiline_html(&memo)></p> }.into_any()
            }
            None => view! { <p class="muted">{text::UNREGISTERED}</p> }.into_any(),
        };
        let scenarios = if detail.scenarios.is_empty() {
            view! { <p class="muted">"なし"</p> }.into_any()
        } else {
            let items = detail
                .scenarios
                .into_iter()
                .map(|link| view! { <li><A href=link.href>{link.label}</A></li> })
                .collect_view();
            view! { <ul class="scenario-list">{items}</ul> }.into_any()
        };
        let alt = detail.name.clone();
        view! {
            <header class="detail-header">
                <h2 class="title">{detail.name}</h2>
                {badge}
            </header>
            <section class="detail-top">
                <FallbackImage
                    class="character-detail-image"
                    src=detail.image
                    fallback=assets::DEFAULT_CHARACTER_IMAGE
                    alt=alt
                />
                <div class="detail-profile">
                    <h3 class="subtitle">"プロフィール"</h3>
                    <table class="detail-table"><tbody>{profile}</tbody></table>
                </div>
            </section>
            <section class="detail-panels">
                <article class="detail-panel">
                    <h3 class="subtitle">"能力値"</h3>
                    {abilities}
                </article>
                <article class="detail-panel">
                    <h3 class="subtitle">"技能"</h3>
                    {skills}
                </article>
                <article class="detail-panel detail-panel--full">
                    <h3 class="subtitle">"メモ"</h3>
                    {memo}
                </article>
            </section>
            <section>
                <h3 class="subtitle">"通過シナリオ"</h3>
                {scenarios}
            </section>
            <CommentSection target_type=TargetType::Character target_id=stored_id.get_value()/>
        }
        .into_any()
    };
    let detail_view = move |detail: Option<Option<views::character::CharacterDetailView>>| {
        match detail {
            Some(detail) => detail_content(detail).into_any(),
            None => utils::loading_fallback("読み込み中…").into_any(),
        }
    };

    let view = view! {
        <ResourceView resource=detail_res view=detail_view/>
    };
    WebResult::Ok(view.into_any())
}

#[component]
pub fn Scenarios() -> impl IntoView {
    tracing::info!("Rendering Scenarios");

    let client = get_client();
    let scenarios_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                let (scenarios, runs) =
                    SendWrapper::new(join(client.scenarios(), client.runs())).await;
                let scenarios = scenarios?;
                // run counts are decoration
                let runs = runs.unwrap_or_default();
                WebResult::Ok(views::scenarios::build(&scenarios, &runs))
            }
        },
    );

    let cards_content = move |cards: Vec<views::scenarios::ScenarioCard>| {
        if cards.is_empty() {
            return view! { <p class="empty-message">"シナリオがありません"</p> }.into_any();
        }
        let cards = cards
            .into_iter()
            .map(|card| {
                let alt = card.title.clone();
                view! {
                    <article class="scenarios-card">
                        <FallbackImage
                            class="scenarios-cover"
                            src=card.cover
                            fallback=assets::DEFAULT_SCENARIO_COVER
                            alt=alt
                        />
                        <h3 class="scenarios-title">
                            <A href=card.href>{card.title}</A>
                        </h3>
                        <div class="scenarios-meta">
                            {card.system.map(|system| view! { <div>{format!("System: {system}")}</div> })}
                            <div>{format!("Runs: {}", card.run_count)}</div>
                        </div>
                    </article>
                }
            })
            .collect_view();
        view! { <div class="scenarios-grid">{cards}</div> }.into_any()
    };
    let cards_view = move |view_model: Option<views::scenarios::ScenariosView>| match view_model {
        Some(view_model) => cards_content(view_model.cards).into_any(),
        None => utils::loading_fallback("シナリオを読み込み中…").into_any(),
    };

    view! {
        <h2 class="subtitle">"シナリオ"</h2>
        <ResourceView resource=scenarios_res view=cards_view/>
    }
}

#[component]
pub fn ScenarioDetail() -> impl IntoView {
    let DetailParams { id } = utils::query()?;
    let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
        return WebResult::Ok(
            view! { <p class="empty-message">"シナリオIDが指定されていません"</p> }.into_any(),
        );
    };
    tracing::info!("Rendering ScenarioDetail {id}");

    let client = get_client();
    let stored_id = StoredValue::new(id.clone());
    let detail_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            let id = id.clone();
            async move {
                let (scenarios, runs, sessions) = SendWrapper::new(join3(
                    client.scenarios(),
                    client.runs(),
                    client.sessions(),
                ))
                .await;
                let scenarios = scenarios?;
                let runs = runs.unwrap_or_default();
                let sessions = sessions.unwrap_or_default();
                // the played-characters block disappears when either fetch fails
                let (character_ids, characters) = SendWrapper::new(join(
                    client.scenario_characters(&id),
                    client.characters(),
                ))
                .await;
                WebResult::Ok(views::scenario::build(
                    &id,
                    &scenarios,
                    &runs,
                    &sessions,
                    &character_ids.unwrap_or_default(),
                    &characters.unwrap_or_default(),
                    Utc::now(),
                ))
            }
        },
    );

    let run_card = move |card: views::scenario::RunCard| {
        let gm = card.gm.unwrap_or_else(|| text::DASH.to_string());
        let players = if card.players.is_empty() {
            text::DASH.to_string()
        } else {
            card.players.join(" / ")
        };
        let schedule_line =
            schedule::run_schedule_label(card.status, card.next_start, card.last_start);
        let state = format!("（{}）", card.status.label_ja());
        view! {
            <article class=format!("run-card {}", card.status.css_class())>
                <h4 class="run-card-title">{card.title}" "<small>{state}</small></h4>
                <div class="run-card-meta">
                    <div>{format!("GM: {gm}")}</div>
                    <div>{format!("PL: {players}")}</div>
                    <div><small>{schedule_line}</small></div>
                </div>
                <A href=card.href>"セッション詳細へ"</A>
            </article>
        }
    };

    let detail_content = move |detail: Option<views::scenario::ScenarioDetailView>| {
        let Some(detail) = detail else {
            return view! { <p class="empty-message">"シナリオが見つかりません"</p> }.into_any();
        };
        let tags = (!detail.tags.is_empty()).then(|| {
            let tags = detail
                .tags
                .into_iter()
                .map(|tag| view! { <span class="tag">{tag}</span> })
                .collect_view();
            view! { <div class="tags">{tags}</div> }
        });
        let description = match detail.description {
            Some(description) => {
                view! { <p class="detail-desc" inner_html=text::multiline_html(&description)></p> }
                    .into_any()
            }
            None => view! { <p class="muted">{text::UNREGISTERED}</p> }.into_any(),
        };
        let notes = detail.notes.map(|notes| {
            view! {
                <h3 class="subtitle">"備考"</h3>
                <p class="detail-notes" inner_html=text::multiline_html(&notes)></p>
            }
        });
        let active = if detail.active.is_empty() {
            view! { <p class="muted"><small>"進行中の卓はありません"</small></p> }.into_any()
        } else {
            let cards = detail.active.into_iter().map(run_card).collect_view();
            view! { <div class="run-grid">{cards}</div> }.into_any()
        };
        let done = if detail.done.is_empty() {
            view! { <p class="muted"><small>"終了済の卓はありません"</small></p> }.into_any()
        } else {
            let cards = detail.done.into_iter().map(run_card).collect_view();
            view! { <div class="run-grid">{cards}</div> }.into_any()
        };
        let characters = (!detail.characters.is_empty()).then(|| {
            let chips = detail
                .characters
                .into_iter()
                .map(|link| view! { <A attr:class="chip-link" href=link.href>{link.label}</A> })
                .collect_view();
            view! {
                <section>
                    <h3 class="subtitle">"通過キャラクター"</h3>
                    <div class="chips">{chips}</div>
                </section>
            }
        });
        let alt = detail.title.clone();
        view! {
            <header class="detail-header">
                <h2 class="title">{detail.title}</h2>
                {detail.system.map(|system| view! { <span class="detail-system">{system}</span> })}
                {tags}
            </header>
            <section class="detail-top">
                <FallbackImage
                    class="scenario-detail-cover"
                    src=detail.cover
                    fallback=assets::DEFAULT_SCENARIO_COVER
                    alt=alt
                />
                <div class="detail-info">
                    <h3 class="subtitle">"概要"</h3>
                    {description}
                    {notes}
                </div>
            </section>
            <section class="detail-runs">
                <h3 class="subtitle">"このシナリオのセッション（卓）"</h3>
                <h4 class="detail-runs-heading">"進行中セッション"</h4>
                {active}
                <h4 class="detail-runs-heading">"終了済セッション"</h4>
                {done}
            </section>
            {characters}
            <CommentSection target_type=TargetType::Scenario target_id=stored_id.get_value()/>
        }
        .into_any()
    };
    let detail_view = move |detail: Option<Option<views::scenario::ScenarioDetailView>>| {
        match detail {
            Some(detail) => detail_content(detail).into_any(),
            None => utils::loading_fallback("読み込み中…").into_any(),
        }
    };

    let view = view! {
        <ResourceView resource=detail_res view=detail_view/>
    };
    WebResult::Ok(view.into_any())
}

#[component]
pub fn Sessions() -> impl IntoView {
    tracing::info!("Rendering Sessions");

    let client = get_client();
    let sessions_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                let (scenarios, runs, sessions) = SendWrapper::new(join3(
                    client.scenarios(),
                    client.runs(),
                    client.sessions(),
                ))
                .await;
                let scenarios = scenarios.unwrap_or_default();
                let runs = runs?;
                let sessions = sessions.unwrap_or_default();
                WebResult::Ok(views::sessions::build(&scenarios, &runs, &sessions, Utc::now()))
            }
        },
    );

    let run_cards = move |cards: Vec<views::sessions::RunSessionsCard>, empty: &'static str| {
        if cards.is_empty() {
            return view! { <p class="muted"><small>{empty}</small></p> }.into_any();
        }
        let cards = cards
            .into_iter()
            .map(|card| {
                let scenario = card
                    .scenario_title
                    .unwrap_or_else(|| "（不明なシナリオ）".to_string());
                let gm = card.gm.unwrap_or_default();
                let players = card.players.join(" / ");
                let upcoming = card.status.is_active().then(|| {
                    let items = if card.upcoming.is_empty() {
                        view! { <li><small>"次回未定"</small></li> }.into_any()
                    } else {
                        card.upcoming
                            .into_iter()
                            .map(|item| {
                                let when = datetime::format_date_time(item.start);
                                let title = item.title.unwrap_or_default();
                                view! { <li>{when}" "{title}</li> }
                            })
                            .collect_view()
                            .into_any()
                    };
                    view! { <ul class="sessions-upcoming">{items}</ul> }
                });
                let alt = card.title.clone();
                view! {
                    <article class="sessions-card">
                        <FallbackImage
                            class="sessions-cover"
                            src=card.cover
                            fallback=assets::DEFAULT_SESSION_COVER
                            alt=alt
                        />
                        <h3 class="sessions-title">
                            <A href=card.href>{card.title}" - "<small>{card.status.label_ja()}</small></A>
                            <span class=format!("sessions-badge {}", card.status.css_class())>
                                {card.status.badge()}
                            </span>
                        </h3>
                        <div class="sessions-meta">
                            <div>{format!("シナリオ: {scenario}")}</div>
                            <div>{format!("参加者: {gm} (GM) / {players}")}</div>
                        </div>
                        {upcoming}
                    </article>
                }
            })
            .collect_view();
        view! { <div class="sessions-grid">{cards}</div> }.into_any()
    };
    let sessions_view = move |view_model: Option<views::sessions::SessionsView>| match view_model {
        Some(view_model) => view! {
            <section class="sessions-section">
                <h3 class="sessions-section-title">"進行中セッション"</h3>
                {run_cards(view_model.active, "進行中の卓はありません")}
            </section>
            <section class="sessions-section">
                <h3 class="sessions-section-title">"終了済セッション"</h3>
                {run_cards(view_model.done, "終了済の卓はありません")}
            </section>
        }
        .into_any(),
        None => utils::loading_fallback("セッションを読み込み中…").into_any(),
    };

    view! {
        <h2 class="subtitle">"セッション"</h2>
        <ResourceView resource=sessions_res view=sessions_view/>
    }
}

#[component]
pub fn SessionDetail() -> impl IntoView {
    let DetailParams { id } = utils::query()?;
    let Some(run_id) = id.filter(|id| !id.trim().is_empty()) else {
        return WebResult::Ok(
            view! { <p class="empty-message">"卓IDが指定されていません"</p> }.into_any(),
        );
    };
    tracing::info!("Rendering SessionDetail {run_id}");

    let client = get_client();
    let stored_id = StoredValue::new(run_id.clone());
    let detail_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            let run_id = run_id.clone();
            async move {
                let (runs, scenarios, sessions, characters) = SendWrapper::new(join4(
                    client.runs(),
                    client.scenarios(),
                    client.sessions(),
                    client.characters(),
                ))
                .await;
                let runs = runs?;
                WebResult::Ok(views::session::build(
                    &run_id,
                    &runs,
                    &scenarios.unwrap_or_default(),
                    &sessions.unwrap_or_default(),
                    &characters.unwrap_or_default(),
                    Utc::now(),
                ))
            }
        },
    );

    let detail_content = move |detail: Option<views::session::SessionDetailView>| {
        let Some(detail) = detail else {
            return view! { <p class="empty-message">"卓が見つかりません"</p> }.into_any();
        };
        let status = detail.status;
        let scenario_cell = match detail.scenario {
            Some(link) => view! { <A href=link.href>{link.label}</A> }.into_any(),
            None => view! { <span>"（不明）"</span> }.into_any(),
        };
        let gm = detail.gm.unwrap_or_else(|| text::DASH.to_string());
        let players = if detail.players.is_empty() {
            text::DASH.to_string()
        } else {
            detail.players.join(" / ")
        };
        let next = if status.is_active() {
            match detail.next_start {
                Some(start) => datetime::format_date_time(start),
                None => "未定".to_string(),
            }
        } else {
            text::DASH.to_string()
        };
        let last = match detail.last_done {
            Some(start) => datetime::format_date(start),
            None if status == RunStatus::Done => "未記録".to_string(),
            None => text::DASH.to_string(),
        };
        let characters = (!detail.characters.is_empty()).then(|| {
            let chips = detail
                .characters
                .into_iter()
                .map(|link| view! { <A attr:class="chip-link" href=link.href>{link.label}</A> })
                .collect_view();
            view! {
                <h4 class="detail-subheading">"参加キャラクター"</h4>
                <div class="chips">{chips}</div>
            }
        });
        let history = if detail.history.is_empty() {
            view! { <p class="muted">"この卓のセッションがありません"</p> }.into_any()
        } else {
            let items = detail
                .history
                .into_iter()
                .map(|item| {
                    let when = datetime::format_date_time(item.start);
                    let title = item.title.unwrap_or_default();
                    view! {
                        <li class="session-log-item">
                            <span class="session-log-date">{when}</span>
                            <span class="session-log-title">{title}</span>
                            <span class=format!("session-log-state {}", item.status.css_class())>
                                {item.status.label_ja()}
                            </span>
                            {item.replay_url.map(|url| view! {
                                <a class="session-log-link" href=url rel="external">"リプレイ"</a>
                            })}
                            {item.stream_url.map(|url| view! {
                                <a class="session-log-link" href=url rel="external">"配信"</a>
                            })}
                        </li>
                    }
                })
                .collect_view();
            view! { <ul class="session-log">{items}</ul> }.into_any()
        };
        let alt = detail.title.clone();
        view! {
            <header class="detail-header">
                <h2 class="title">{detail.title}</h2>
                <span class=format!("detail-badge {}", status.css_class())>{status.label_ja()}</span>
            </header>
            <section class="detail-top">
                <FallbackImage
                    class="session-detail-cover"
                    src=detail.cover
                    fallback=assets::DEFAULT_SESSION_COVER
                    alt=alt
                />
                <div class="detail-profile">
                    <h3 class="subtitle">"卓情報"</h3>
                    <table class="detail-table">
                        <tbody>
                            <tr><th>"シナリオ"</th><td>{scenario_cell}</td></tr>
                            <tr><th>"GM"</th><td>{gm}</td></tr>
                            <tr><th>"PL"</th><td>{players}</td></tr>
                            <tr><th>"次回"</th><td>{next}</td></tr>
                            <tr><th>"最終"</th><td>{last}</td></tr>
                        </tbody>
                    </table>
                    {characters}
                </div>
            </section>
            <section class="session-detail-log">
                <h3 class="subtitle">"セッション履歴"</h3>
                {history}
            </section>
            <CommentSection target_type=TargetType::Session target_id=stored_id.get_value()/>
        }
        .into_any()
    };
    let detail_view = move |detail: Option<Option<views::session::SessionDetailView>>| {
        match detail {
            Some(detail) => detail_content(detail).into_any(),
            None => utils::loading_fallback("読み込み中…").into_any(),
        }
    };

    let view = view! {
        <ResourceView resource=detail_res view=detail_view/>
    };
    WebResult::Ok(view.into_any())
}

#[component]
pub fn Schedule() -> impl IntoView {
    tracing::info!("Rendering Schedule");

    let client = get_client();
    let schedule_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                let (scenarios, runs, sessions) = SendWrapper::new(join3(
                    client.scenarios(),
                    client.runs(),
                    client.sessions(),
                ))
                .await;
                // the joins only resolve display names
                let scenarios = scenarios.unwrap_or_default();
                let runs = runs.unwrap_or_default();
                let sessions = sessions?;
                WebResult::Ok(views::timetable::build(&scenarios, &runs, &sessions, Utc::now()))
            }
        },
    );

    let items_content = move |items: Vec<views::timetable::TimetableItem>| {
        if items.is_empty() {
            return view! { <p class="empty-message">"予定はありません"</p> }.into_any();
        }
        let items = items
            .into_iter()
            .map(|item| {
                let when = datetime::format_date_time(item.start);
                let scenario = item
                    .scenario_title
                    .unwrap_or_else(|| "（不明なシナリオ）".to_string());
                view! {
                    <li class="schedule-item">
                        <div class="schedule-when"><strong>{when}</strong></div>
                        <div class="schedule-what">
                            <div>{scenario}" "<small>{format!("— {}", item.run_title)}</small></div>
                            {item.session_title.map(|title| view! { <div><small>{title}</small></div> })}
                        </div>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="schedule-list">{items}</ul> }.into_any()
    };
    let items_view = move |view_model: Option<views::timetable::TimetableView>| match view_model {
        Some(view_model) => items_content(view_model.items).into_any(),
        None => utils::loading_fallback("読み込み中…").into_any(),
    };

    view! {
        <h2 class="subtitle">"スケジュール"</h2>
        <ResourceView resource=schedule_res view=items_view/>
    }
}

#[component]
pub fn Board() -> impl IntoView {
    tracing::info!("Rendering Board");

    let client = get_client();
    let reload = RwSignal::new(0u32);
    let posts_res = {
        let client = client.clone();
        Resource::new(
            move || reload.get(),
            move |_| {
                let client = client.clone();
                async move {
                    let posts = SendWrapper::new(client.posts()).await?;
                    WebResult::Ok(views::board::posts(&posts))
                }
            },
        )
    };

    let author_ref = NodeRef::<Input>::new();
    let body_ref = NodeRef::<Textarea>::new();
    let post_act = Action::new(move |&()| {
        let client = client.clone();
        async move {
            let author = author_ref.get().expect("failed to get author_ref").value();
            let body = body_ref.get().expect("failed to get body_ref").value();
            let Some((author, body)) = views::validate_author_body(&author, &body) else {
                return Err(WebError::invalid("名前と本文は必須です"));
            };
            let post = req::NewPost {
                author: author.into(),
                body: body.into(),
            };
            SendWrapper::new(client.new_post(&post)).await?;
            if let Some(body_el) = body_ref.get() {
                body_el.set_value("");
            }
            reload.update(|n| *n += 1);
            WebResult::Ok("投稿しました")
        }
    });

    let posts_content = move |posts: Vec<views::board::PostItem>| {
        if posts.is_empty() {
            return view! { <p class="muted"><small>"投稿がありません"</small></p> }.into_any();
        }
        let posts = posts
            .into_iter()
            .map(|post| {
                let when = post.when.map(datetime::format_date_time).unwrap_or_default();
                view! {
                    <li class="bbs-post">
                        <div class="bbs-post-meta"><small>{post.author}" / "{when}</small></div>
                        <div class="bbs-post-body" inner_html=text::multiline_html(&post.body)></div>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="bbs-posts">{posts}</ul> }.into_any()
    };
    let posts_view = move |posts: Option<Vec<views::board::PostItem>>| match posts {
        Some(posts) => posts_content(posts).into_any(),
        None => utils::loading_fallback("読み込み中…").into_any(),
    };

    view! {
        <h2 class="subtitle">"掲示板"</h2>
        <form>
            <label class="label">
                "名前"
                <input class="input" node_ref=author_ref maxlength="50" type="text"/>
            </label>
            <label class="label">
                "本文"
                <textarea class="textarea" node_ref=body_ref maxlength="4000" rows="4"></textarea>
            </label>
            <button class="button" type="submit" prop:disabled=move || post_act.pending().get() on:click=move |ev| {
                ev.prevent_default();
                post_act.dispatch(());
            }>
                "投稿"
            </button>
            <ActionView action=post_act/>
        </form>
        <ResourceView resource=posts_res view=posts_view/>
    }
}
