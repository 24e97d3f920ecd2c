//! Custom components.

use crate::{
    context::get_client,
    error::{WebError, WebResult},
    utils,
};
use leptos::{
    html::{Input, Textarea},
    prelude::*,
};
use leptos_router::components::*;
use send_wrapper::SendWrapper;
use serde::{de::DeserializeOwned, Serialize};
use takulog::{datetime, text, views};
use takulog_api::{request as req, response::TargetType};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar is-flex is-vcentered">
            <A exact=true href="/">"ホーム"</A>
            <A href="/characters">"キャラクター"</A>
            <A href="/scenarios">"シナリオ"</A>
            <A href="/sessions">"セッション"</A>
            <A href="/schedule">"スケジュール"</A>
            <A href="/board">"掲示板"</A>
        </nav>
    }
}

/// Image that swaps to the category default when loading fails; nothing
/// ever checks that the conventional path actually exists.
#[component]
pub fn FallbackImage(
    src: String,
    fallback: &'static str,
    alt: String,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    let errored = RwSignal::new(false);
    let current = move || {
        if errored.get() {
            fallback.to_string()
        } else {
            src.clone()
        }
    };
    view! {
        <img class=class src=current alt=alt loading="lazy" on:error=move |_ev| errored.set(true)/>
    }
}

#[component]
pub fn ResourceView<T, F, V>(resource: Resource<WebResult<T>>, view: F) -> impl IntoView
where
    T: Clone + Serialize + DeserializeOwned + 'static + Send + Sync,
    F: Fn(Option<T>) -> V + Copy + 'static + Send + Sync,
    V: IntoView + 'static,
{
    let resource_view = move || match resource.get() {
        Some(Ok(res)) => Ok(Some(view(Some(res)).into_view())),
        Some(Err(err)) => Err(err),
        None => Ok(Some(view(None).into_view())),
    };
    view! {
        <Suspense fallback={move || view(None)}>
            <ErrorBoundary fallback={utils::errors_fallback}>
                {resource_view}
            </ErrorBoundary>
        </Suspense>
    }
}

#[component]
pub fn ActionView<T, V>(action: Action<T, WebResult<V>>) -> impl IntoView
where
    T: 'static + Send + Sync,
    V: IntoView + Clone + 'static + Send + Sync,
{
    view! {
        <ErrorBoundary fallback={utils::submit_errors_fallback}>
            <div aria-live="polite">
                {move || action.value().get()}
            </div>
        </ErrorBoundary>
    }
}

/// A comment thread bound to one (target type, target id) pair: existing
/// comments in server order plus the post form. Posting re-fetches the
/// thread exactly once.
#[component]
pub fn CommentSection(target_type: TargetType, target_id: String) -> impl IntoView {
    tracing::info!("Rendering CommentSection for {target_type:?} {target_id}");

    let client = get_client();
    let reload = RwSignal::new(0u32);

    let thread_res = {
        let client = client.clone();
        let target_id = target_id.clone();
        Resource::new(
            move || reload.get(),
            move |_| {
                let client = client.clone();
                let target_id = target_id.clone();
                async move {
                    let comments =
                        SendWrapper::new(client.comments(target_type, &target_id)).await?;
                    WebResult::Ok(views::comments::thread(&comments))
                }
            },
        )
    };

    let author_ref = NodeRef::<Input>::new();
    let body_ref = NodeRef::<Textarea>::new();
    let post_act = {
        let client = client.clone();
        Action::new(move |&()| {
            let client = client.clone();
            let target_id = target_id.clone();
            async move {
                let author = author_ref.get().expect("failed to get author_ref").value();
                let body = body_ref.get().expect("failed to get body_ref").value();
                let Some((author, body)) = views::validate_author_body(&author, &body) else {
                    return Err(WebError::invalid("名前と本文は必須です"));
                };
                let comment = req::NewComment {
                    target_type,
                    target_id: target_id.as_str().into(),
                    author: author.into(),
                    body: body.into(),
                };
                SendWrapper::new(client.new_comment(&comment)).await?;
                if let Some(body_el) = body_ref.get() {
                    body_el.set_value("");
                }
                reload.update(|n| *n += 1);
                WebResult::Ok("投稿しました")
            }
        })
    };

    let list_content = move |items: Vec<views::comments::CommentItem>| {
        if items.is_empty() {
            return view! { <p class="comments-muted">"コメントはまだありません"</p> }
                .into_any();
        }
        let items = items
            .into_iter()
            .map(|item| {
                let when = item.when.map(datetime::format_date_time).unwrap_or_default();
                view! {
                    <li class="comments-item">
                        <div class="comments-meta">
                            <strong>{item.author}</strong>
                            <span>{when}</span>
                        </div>
                        <div class="comments-body" inner_html=text::multiline_html(&item.body)></div>
                    </li>
                }
            })
            .collect_view();
        view! {
            <ul class="comments-list">
                {items}
            </ul>
        }
        .into_any()
    };
    let list_view = move |items: Option<Vec<views::comments::CommentItem>>| match items {
        Some(items) => list_content(items).into_any(),
        None => utils::loading_fallback("コメントを読み込み中…").into_any(),
    };

    view! {
        <section class="comments">
            <h2 class="subtitle">"コメント"</h2>
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
            <ResourceView resource=thread_res view=list_view/>
        </section>
    }
}

/// The latest comments across every thread, names resolved per target.
#[component]
pub fn RecentComments(#[prop(default = 10)] limit: u32) -> impl IntoView {
    tracing::info!("Rendering RecentComments");

    let client = get_client();
    let recent_res = Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            async move {
                // the name maps are decoration; losing one only degrades
                // the labels back to raw ids
                let (recent, characters, scenarios, runs) =
                    SendWrapper::new(futures_util::future::join4(
                        client.recent_comments(limit),
                        client.characters(),
                        client.scenarios(),
                        client.runs(),
                    ))
                    .await;
                let recent = recent?;
                WebResult::Ok(views::comments::recent(
                    &recent,
                    &characters.unwrap_or_default(),
                    &scenarios.unwrap_or_default(),
                    &runs.unwrap_or_default(),
                ))
            }
        },
    );

    let recent_content = move |items: Vec<views::comments::RecentItem>| {
        if items.is_empty() {
            return view! { <p class="comments-muted">"まだコメントはありません"</p> }
                .into_any();
        }
        let items = items
            .into_iter()
            .map(|item| {
                let when = item.when.map(datetime::format_date_time).unwrap_or_default();
                let target = match item.href {
                    Some(href) => view! {
                        <a class="top-comments-target" href=href>{item.target_name}</a>
                    }
                    .into_any(),
                    None => view! { <span class="top-comments-target">{item.target_name}</span> }
                        .into_any(),
                };
                view! {
                    <li class="top-comments-item">
                        <div class="top-comments-meta">
                            {target}
                            <span class="top-comments-author">{item.author}</span>
                            <time>{when}</time>
                        </div>
                        <div class="top-comments-body" inner_html=text::multiline_html(&item.body)></div>
                    </li>
                }
            })
            .collect_view();
        view! {
            <ul class="top-comments">
                {items}
            </ul>
        }
        .into_any()
    };
    let recent_view = move |items: Option<Vec<views::comments::RecentItem>>| match items {
        Some(items) => recent_content(items).into_any(),
        None => utils::loading_fallback("読み込み中…").into_any(),
    };

    view! {
        <ResourceView resource=recent_res view=recent_view/>
    }
}
