//! Various utility functions.

use crate::error::{WebError, WebResult};
use leptos::{prelude::*, IntoView};
use leptos_router::params::Params;

/// Generic loading fallback view.
pub fn loading_fallback(text: &'static str) -> impl IntoView {
    view! { <div>{text}</div> }.into_view()
}

/// Error fallback for page-level loads: a static, localized message in the
/// affected container, nothing propagates further.
pub fn errors_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let errors = errors.get_untracked().into_iter().collect::<Vec<_>>();
    let errors = errors
        .into_iter()
        .map(|(_key, err)| {
            view! { <p>{format!("読み込みに失敗しました：{err}")}</p> }
        })
        .collect_view();

    view! {
        <div class="load-error">
            {errors}
        </div>
    }
    .into_any()
}

/// Error fallback for form submissions.
pub fn submit_errors_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let errors = errors.get_untracked().into_iter().collect::<Vec<_>>();
    let errors = errors
        .into_iter()
        .map(|(_key, err)| {
            view! { <p>{format!("送信に失敗しました：{err}")}</p> }
        })
        .collect_view();

    view! {
        <div class="submit-error">
            {errors}
        </div>
    }
    .into_any()
}

/// Typed access to the page's query parameters.
pub fn query<T>() -> WebResult<T>
where
    T: Params + Clone + PartialEq + 'static + Send + Sync,
{
    leptos_router::hooks::use_query()
        .get()
        .map_err(|err| WebError::invalid(err.to_string()))
}
