//! 商品テーブルコンポーネント

use leptos::prelude::*;
use product_form_common::{labels, ImageCell, ProductFormState, ProductId, TableRow};

#[component]
pub fn ProductTable<FD>(
    state: ReadSignal<ProductFormState>,
    on_delete: FD,
) -> impl IntoView
where
    FD: Fn(ProductId) + 'static + Clone + Send + Sync,
{
    let rows = move || state.with(|s| s.rows());

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    {labels::TABLE_HEADERS
                        .into_iter()
                        .map(|header| view! { <th>{header}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !state.with(|s| s.products().is_empty())
                    fallback=|| view! {
                        <tr>
                            <td colspan="5" class="text-muted">{labels::EMPTY_TABLE}</td>
                        </tr>
                    }
                >
                    {
                        let on_delete = on_delete.clone();
                        move || {
                            rows()
                                .into_iter()
                                .map(|row| view! { <ProductRow row=row on_delete=on_delete.clone() /> })
                                .collect_view()
                        }
                    }
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn ProductRow<FD>(row: TableRow, on_delete: FD) -> impl IntoView
where
    FD: Fn(ProductId) + 'static + Clone + Send + Sync,
{
    let id = row.id;
    let image = match row.image {
        ImageCell::Url(url) => view! {
            <img src=url alt=row.name.clone() class="product-thumb" />
        }
        .into_any(),
        ImageCell::Missing => labels::NO_IMAGE.into_any(),
    };

    view! {
        <tr>
            <td>{row.position}</td>
            <td>{row.name}</td>
            <td>{row.price}</td>
            <td>{image}</td>
            <td>
                <button class="btn btn-danger btn-small" on:click=move |_| on_delete(id)>
                    {labels::DELETE_BUTTON}
                </button>
            </td>
        </tr>
    }
}
