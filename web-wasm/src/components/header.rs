//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Art Institute of Chicago - Artworks"</h1>
        </header>
    }
}
