//! 商品入力フォームコンポーネント

use leptos::prelude::*;
use product_form_common::{labels, Field, ProductFormState};

/// 入力欄の type 属性
pub fn input_type(field: Field) -> &'static str {
    match field {
        Field::Price => "number",
        Field::Name | Field::Image => "text",
    }
}

pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => labels::NAME_LABEL,
        Field::Price => labels::PRICE_LABEL,
        Field::Image => labels::IMAGE_LABEL,
    }
}

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Image => labels::IMAGE_PLACEHOLDER,
        other => field_label(other),
    }
}

#[component]
pub fn ProductForm<FS, FC>(
    state: ReadSignal<ProductFormState>,
    set_state: WriteSignal<ProductFormState>,
    on_save: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let fields = [Field::Name, Field::Price, Field::Image];

    view! {
        <div class="form-panel">
            <div class="form-grid">
                {fields
                    .into_iter()
                    .map(|field| {
                        let id = format!("product-{}", field.as_str());
                        view! {
                            <div class="form-group">
                                <label for=id.clone()>{field_label(field)}</label>
                                <input
                                    type=input_type(field)
                                    id=id
                                    placeholder=placeholder(field)
                                    prop:value=move || state.with(|s| s.form().get(field).to_string())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        set_state.update(|s| s.set_field(field, text));
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    {labels::SAVE_BUTTON}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    {labels::CLEAR_BUTTON}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_types() {
        assert_eq!(input_type(Field::Price), "number");
        assert_eq!(input_type(Field::Name), "text");
        assert_eq!(input_type(Field::Image), "text");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholder(Field::Name), labels::NAME_LABEL);
        assert_eq!(placeholder(Field::Image), labels::IMAGE_PLACEHOLDER);
        assert_eq!(field_label(Field::Image), labels::IMAGE_LABEL);
    }
}
