//! メインアプリケーションコンポーネント

use leptos::logging::log;
use leptos::prelude::*;
use crate::components::{
    header::Header,
    product_form::ProductForm,
    product_table::ProductTable,
    confirm_popup::ConfirmPopup,
};
use crate::notice::show_alert;
use product_form_common::{ProductFormState, ProductId};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面状態（フォーム・商品リスト・削除確認）
    let (state, set_state) = signal(ProductFormState::default());

    // 保存ハンドラ
    let on_save = move |_| {
        let mut rejected = None;
        set_state.update(|s| match s.save() {
            Ok(product) => log!("product added: {} ({})", product.name, product.id),
            Err(err) => rejected = Some(err.to_string()),
        });
        if let Some(message) = rejected {
            show_alert(&message);
        }
    };

    // クリアハンドラ
    let on_clear = move |_| {
        set_state.update(|s| s.clear_form());
    };

    // 削除要求ハンドラ
    let on_delete = move |id: ProductId| {
        set_state.update(|s| {
            s.request_delete(id);
        });
    };

    let on_confirm = move |_| {
        set_state.update(|s| {
            if let Some(product) = s.confirm_delete() {
                log!("product removed: {} ({})", product.name, product.id);
            }
        });
    };

    let on_cancel = move |_| {
        set_state.update(|s| s.cancel_delete());
    };

    view! {
        <div class="container">
            <Header />

            <ProductForm
                state=state
                set_state=set_state
                on_save=on_save
                on_clear=on_clear
            />

            <ProductTable state=state on_delete=on_delete />

            <Show when=move || state.with(|s| s.gate().is_open())>
                <ConfirmPopup
                    state=state
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
