//! 削除確認ポップアップ

use leptos::prelude::*;
use product_form_common::{labels, ProductFormState};

#[component]
pub fn ConfirmPopup<FY, FN>(
    state: ReadSignal<ProductFormState>,
    on_confirm: FY,
    on_cancel: FN,
) -> impl IntoView
where
    FY: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    let target_name = move || {
        state.with(|s| s.pending_product().map(|p| p.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="popup-overlay">
            <div class="popup">
                <p class="popup-question">{labels::DELETE_QUESTION}</p>
                <p class="popup-target">{target_name}</p>
                <div class="popup-actions">
                    <button
                        class="btn btn-danger"
                        on:click={
                            let on_confirm = on_confirm.clone();
                            move |_| on_confirm(())
                        }
                    >
                        {labels::CONFIRM_BUTTON}
                    </button>
                    <button
                        class="btn btn-tertiary"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        {labels::CANCEL_BUTTON}
                    </button>
                </div>
            </div>
        </div>
    }
}
