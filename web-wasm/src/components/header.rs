//! ヘッダーコンポーネント

use leptos::prelude::*;
use product_form_common::labels;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <h2 class="page-title">{labels::PAGE_TITLE}</h2>
    }
}
