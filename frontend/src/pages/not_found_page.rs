use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths are sent on: anything under a project goes to that
/// project's overview, everything else to the project list.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let target = fallback_route(&segments);
    let path = segments.join("/");
    let redirect_to = target.clone();
    use_effect(move || {
        dioxus::logger::tracing::debug!("no page at /{path}, redirecting to {redirect_to}");
        if let Some(failure) = navigator().replace(redirect_to.clone()) {
            dioxus::logger::tracing::warn!("redirect failed: {failure:?}");
        }
    });

    rsx! {
        Title { "Redirecting" }
        div {
            style: "padding: 36px 40px; font-size: 18px;",
            Link { to: target, "Continue" }
        }
    }
}

fn fallback_route(segments: &[String]) -> Route {
    match segments {
        [project, id, ..] if project == "project" => match id.parse() {
            Ok(id) => Route::OverviewPage { id },
            Err(_) => Route::ProjectsPage {},
        },
        _ => Route::ProjectsPage {},
    }
}
