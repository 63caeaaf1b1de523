//! Create page: draft a work and pre-check its file before publishing.
//!
//! Requires a signed-in user; visitors are sent to the landing page once
//! the session resolves.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::firestore::CATEGORIES;
use crate::state::session::SessionState;
use crate::util::auth::require_auth;
use crate::util::browser::now_ms;
use crate::util::debounce::debounce;
use crate::util::file::{DEFAULT_MAX_FILE_MB, FileError, FileInfo, validate_file};
use crate::util::format::{Timestamp, format_date, format_file_size, truncate_text};
use crate::util::id::generate_unique_id;

/// Longest title shown in the preview card.
pub const PREVIEW_TITLE_CHARS: usize = 60;
const TITLE_DEBOUNCE_MS: u32 = 300;

/// MIME prefixes accepted for each category.
pub fn allowed_types(category: &str) -> &'static [&'static str] {
    match category {
        "Art" => &["image/"],
        "Audio" => &["audio/"],
        _ => &["application/pdf", "text/"],
    }
}

/// Status line for the file picker.
pub fn file_status(file: Option<&FileInfo>, category: &str) -> Result<String, FileError> {
    validate_file(file, allowed_types(category), DEFAULT_MAX_FILE_MB)?;
    Ok(file.map(|f| format!("Ready: {}", format_file_size(f.size))).unwrap_or_default())
}

#[component]
pub fn CreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    require_auth(session, use_navigate());

    let draft_id = generate_unique_id();
    let category = RwSignal::new(CATEGORIES[0].to_owned());
    let preview_title = RwSignal::new(String::new());
    let file = RwSignal::new(None::<FileInfo>);
    let file_input = NodeRef::<Input>::new();

    let update_preview = debounce(TITLE_DEBOUNCE_MS, move |title: String| preview_title.set(title));
    let on_title = move |ev: leptos::ev::Event| update_preview(event_target_value(&ev));

    let on_file = move |_| {
        #[cfg(feature = "csr")]
        {
            let picked = file_input.get_untracked().and_then(|el| el.files()).and_then(|list| list.get(0));
            file.set(picked.as_ref().map(FileInfo::from));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = file_input;
        }
    };

    let status = move || {
        let category = category.get();
        file.with(|f| match file_status(f.as_ref(), &category) {
            Ok(line) => line,
            Err(e) => e.to_string(),
        })
    };
    #[allow(clippy::cast_possible_truncation)]
    let drafted_on = format_date(Some(Timestamp::Millis(now_ms() as i64)));

    view! {
        <section class="create">
            <h2>"Share your work"</h2>
            <form on:submit=|ev| ev.prevent_default()>
                <input type="text" class="form-control" placeholder="Title" on:input=on_title/>
                <select
                    class="form-select"
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        file.set(None);
                        if let Some(el) = file_input.get_untracked() {
                            el.set_value("");
                        }
                    }
                >
                    {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
                <input node_ref=file_input type="file" class="form-control" on:change=on_file/>
                <small class="file-status">{status}</small>
            </form>

            <div class="preview-card">
                <h4>{move || truncate_text(&preview_title.get(), PREVIEW_TITLE_CHARS)}</h4>
                <span class="badge">{move || category.get()}</span>
                <small>{drafted_on}" · draft "{draft_id}</small>
            </div>
        </section>
    }
}
