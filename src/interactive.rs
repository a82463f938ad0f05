//! 対話式の商品フォーム
//!
//! 入力操作は `FormEvent` に変換してから状態に適用する。
//! 端末を使うのはプロンプト部分だけなので、適用処理は単体でテストできる。

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};
use product_form_common::{labels, Field, Product, ProductFormState, ProductId, ValidationError};

const QUIT_LABEL: &str = "ออก";
const CONTINUE_PROMPT: &str = "กด Enter เพื่อดำเนินการต่อ";

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit(Field),
    Save,
    Clear,
    Delete,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Edit(Field::Name),
        MenuAction::Edit(Field::Price),
        MenuAction::Edit(Field::Image),
        MenuAction::Save,
        MenuAction::Clear,
        MenuAction::Delete,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Edit(field) => field_label(*field),
            MenuAction::Save => labels::SAVE_BUTTON,
            MenuAction::Clear => labels::CLEAR_BUTTON,
            MenuAction::Delete => labels::DELETE_BUTTON,
            MenuAction::Quit => QUIT_LABEL,
        }
    }
}

/// 状態に適用する入力イベント
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetField(Field, String),
    Save,
    Clear,
    RequestDelete(ProductId),
    ConfirmDelete,
    CancelDelete,
}

/// イベント適用の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    FieldUpdated(Field),
    Saved(Product),
    /// ユーザーに通知して確認を待つ
    Rejected(ValidationError),
    Cleared,
    DeletePending(ProductId),
    DeleteIgnored,
    Deleted(Option<Product>),
    DeleteCancelled,
}

pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => labels::NAME_LABEL,
        Field::Price => labels::PRICE_LABEL,
        Field::Image => labels::IMAGE_PLACEHOLDER,
    }
}

pub fn apply_event(state: &mut ProductFormState, event: FormEvent) -> Outcome {
    match event {
        FormEvent::SetField(field, text) => {
            state.set_field(field, text);
            Outcome::FieldUpdated(field)
        }
        FormEvent::Save => match state.save() {
            Ok(product) => Outcome::Saved(product.clone()),
            Err(err) => Outcome::Rejected(err),
        },
        FormEvent::Clear => {
            state.clear_form();
            Outcome::Cleared
        }
        FormEvent::RequestDelete(id) => {
            if state.request_delete(id) {
                Outcome::DeletePending(id)
            } else {
                Outcome::DeleteIgnored
            }
        }
        FormEvent::ConfirmDelete => Outcome::Deleted(state.confirm_delete()),
        FormEvent::CancelDelete => {
            state.cancel_delete();
            Outcome::DeleteCancelled
        }
    }
}

/// 商品テーブルを文字列に整形（操作列なし）
pub fn render_table(state: &ProductFormState) -> String {
    let rows = state.rows();
    if rows.is_empty() {
        return format!("  {}\n", labels::EMPTY_TABLE);
    }

    let headers: Vec<String> = labels::TABLE_HEADERS[..4].iter().map(|h| h.to_string()).collect();
    let body: Vec<[String; 4]> = rows.iter().map(|row| row.cells()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        format!("  {}\n", padded.join(" | ").trim_end())
    };

    let mut out = format_line(&headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", rule.join("-+-")));
    for cells in &body {
        out.push_str(&format_line(cells));
    }
    out
}

fn render_draft(state: &ProductFormState) -> String {
    let form = state.form();
    [Field::Name, Field::Price, Field::Image]
        .iter()
        .map(|field| format!("  {}: {}\n", field_label(*field), form.get(*field)))
        .collect()
}

/// 対話式で商品を登録・削除
pub fn run_interactive(state: &mut ProductFormState) -> Result<()> {
    println!("🛒 {}\n", labels::PAGE_TITLE);

    loop {
        print!("{}", render_draft(state));
        println!("---");
        print!("{}", render_table(state));
        println!("---");

        let items: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        let selected = Select::new().items(&items).default(0).interact()?;

        match MenuAction::ALL[selected] {
            MenuAction::Edit(field) => {
                let text: String = Input::new()
                    .with_prompt(field_label(field))
                    .with_initial_text(state.form().get(field))
                    .allow_empty(true)
                    .interact_text()?;
                apply_event(state, FormEvent::SetField(field, text));
            }
            MenuAction::Save => {
                match apply_event(state, FormEvent::Save) {
                    Outcome::Saved(product) => println!("  ✔ {} (id: {})\n", product.name, product.id),
                    Outcome::Rejected(err) => show_notice(&err.to_string())?,
                    _ => {}
                }
            }
            MenuAction::Clear => {
                apply_event(state, FormEvent::Clear);
            }
            MenuAction::Delete => prompt_delete(state)?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// ブロッキング通知: Enter が押されるまで待つ
fn show_notice(message: &str) -> Result<()> {
    println!("\n  ⚠ {}", message);
    let _: String = Input::new()
        .with_prompt(CONTINUE_PROMPT)
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn prompt_delete(state: &mut ProductFormState) -> Result<()> {
    let rows = state.rows();
    if rows.is_empty() {
        println!("  {}\n", labels::EMPTY_TABLE);
        return Ok(());
    }

    let mut items: Vec<String> = rows
        .iter()
        .map(|row| format!("{}. {} ({})", row.position, row.name, row.price))
        .collect();
    items.push(labels::CANCEL_BUTTON.to_string());

    let selected = Select::new()
        .with_prompt(labels::DELETE_BUTTON)
        .items(&items)
        .default(0)
        .interact()?;
    let Some(row) = rows.get(selected) else {
        return Ok(());
    };

    if let Outcome::DeletePending(_) = apply_event(state, FormEvent::RequestDelete(row.id)) {
        let confirmed = Confirm::new()
            .with_prompt(labels::DELETE_QUESTION)
            .default(false)
            .interact()?;
        let event = if confirmed { FormEvent::ConfirmDelete } else { FormEvent::CancelDelete };
        if let Outcome::Deleted(Some(product)) = apply_event(state, event) {
            println!("  ✔ {} ({})\n", labels::DELETE_BUTTON, product.name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuAction::Save.label(), "บันทึก");
        assert_eq!(MenuAction::Edit(Field::Image).label(), labels::IMAGE_PLACEHOLDER);
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Quit));
    }

    #[test]
    fn test_render_draft() {
        let mut state = ProductFormState::default();
        state.set_name("Pen");
        let text = render_draft(&state);
        assert!(text.contains("ชื่อสินค้า: Pen"));
    }
}
