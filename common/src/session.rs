//! 商品フォームの画面状態
//!
//! 下書きフォーム・商品リスト・削除確認ゲートをまとめて1つの値として持つ。
//! 描画環境を持たないのでテストからそのまま操作できる。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::DraftForm;
use crate::gate::DeleteGate;
use crate::price::PriceParsing;
use crate::store::{IdStrategy, ProductList};
use crate::table::{build_rows, TableRow};
use crate::types::{Field, Product, ProductId};

/// 挙動の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub id_strategy: IdStrategy,
    pub price_parsing: PriceParsing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormState {
    form: DraftForm,
    products: ProductList,
    gate: DeleteGate,
    settings: FormSettings,
}

impl ProductFormState {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            form: DraftForm::new(),
            products: ProductList::new(settings.id_strategy),
            gate: DeleteGate::Idle,
            settings,
        }
    }

    pub fn settings(&self) -> FormSettings {
        self.settings
    }

    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    pub fn products(&self) -> &[Product] {
        self.products.list_all()
    }

    pub fn gate(&self) -> DeleteGate {
        self.gate
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.form.set_name(text);
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.form.set_price(text);
    }

    pub fn set_image(&mut self, text: impl Into<String>) {
        self.form.set_image(text);
    }

    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.form.set(field, text);
    }

    pub fn clear_form(&mut self) {
        tracing::debug!("draft cleared");
        self.form.clear();
    }

    /// 入力値を検証して商品を追加し、フォームをクリアする
    ///
    /// 検証に失敗した場合は何も変更しない。
    pub fn save(&mut self) -> Result<&Product> {
        let candidate = self.form.try_submit(self.settings.price_parsing)?;
        self.form.clear();
        Ok(self.products.add(candidate))
    }

    pub fn request_delete(&mut self, id: ProductId) -> bool {
        self.gate.request_delete(id)
    }

    /// 保留中の削除を確定する。該当商品がなければ None
    pub fn confirm_delete(&mut self) -> Option<Product> {
        let id = self.gate.confirm()?;
        self.products.remove(id)
    }

    pub fn cancel_delete(&mut self) {
        self.gate.cancel();
    }

    /// 確認ダイアログに表示する対象の商品
    pub fn pending_product(&self) -> Option<&Product> {
        self.gate.pending().and_then(|id| self.products.get(id))
    }

    pub fn rows(&self) -> Vec<TableRow> {
        build_rows(self.products.list_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// 全レベルのログを集めながら実行する
    fn captured_logs(run: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(buffer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = buffer.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes).expect("utf8 logs")
    }

    fn add(state: &mut ProductFormState, name: &str, price: &str) -> ProductId {
        state.set_name(name);
        state.set_price(price);
        state.save().expect("valid draft").id
    }

    #[test]
    fn test_save_adds_and_clears() {
        let mut state = ProductFormState::default();
        state.set_name("Pen");
        state.set_price("10");
        state.set_image("https://example.com/pen.png");

        let product = state.save().unwrap().clone();
        assert_eq!(product.id, 1);
        assert_eq!(product.image.as_deref(), Some("https://example.com/pen.png"));
        assert!(state.form().is_empty());
        assert_eq!(state.products(), &[product]);
    }

    #[test]
    fn test_save_failure_changes_nothing() {
        let mut state = ProductFormState::default();
        state.set_price("10");
        state.set_image("img");
        let before = state.clone();

        assert_eq!(state.save().unwrap_err(), ValidationError::MissingField(Field::Name));
        assert_eq!(state, before);
    }

    #[test]
    fn test_cancel_leaves_list() {
        let mut state = ProductFormState::default();
        let id = add(&mut state, "Pen", "10");
        add(&mut state, "Book", "20");
        let products = state.products().to_vec();

        assert!(state.request_delete(id));
        state.cancel_delete();
        assert_eq!(state.products(), products.as_slice());
        assert_eq!(state.gate(), DeleteGate::Idle);
    }

    #[test]
    fn test_confirm_removes_exactly_one() {
        let mut state = ProductFormState::default();
        add(&mut state, "Pen", "10");
        let book = add(&mut state, "Book", "20");
        add(&mut state, "Cup", "5");

        state.request_delete(book);
        assert_eq!(state.pending_product().map(|p| p.name.as_str()), Some("Book"));
        let removed = state.confirm_delete().unwrap();
        assert_eq!(removed.name, "Book");

        let ids: Vec<ProductId> = state.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.gate(), DeleteGate::Idle);
    }

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut state = ProductFormState::default();
        add(&mut state, "Pen", "10");
        assert!(state.confirm_delete().is_none());
        assert_eq!(state.products().len(), 1);
    }

    #[test]
    fn test_rows_renumber_after_delete() {
        let mut state = ProductFormState::default();
        let pen = add(&mut state, "Pen", "10");
        add(&mut state, "Book", "20");
        state.request_delete(pen);
        state.confirm_delete();

        let rows = state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[0].price, "20.00");
    }

    #[test]
    fn test_settings_drive_behaviour() {
        let settings = FormSettings {
            id_strategy: IdStrategy::SizePlusOne,
            price_parsing: PriceParsing::Strict,
        };
        let mut state = ProductFormState::new(settings);
        state.set_name("Pen");
        state.set_price("ten");
        assert!(matches!(state.save(), Err(ValidationError::InvalidPrice(_))));
        assert_eq!(state.form().price(), "ten");

        let first = add(&mut state, "Pen", "10");
        add(&mut state, "Book", "20");
        state.request_delete(first);
        state.confirm_delete();
        assert_eq!(add(&mut state, "Cup", "5"), 2);
    }

    #[test]
    fn test_settings_serde_defaults() {
        let settings: FormSettings = serde_json::from_str(r#"{"priceParsing": "strict"}"#).unwrap();
        assert_eq!(settings.price_parsing, PriceParsing::Strict);
        assert_eq!(settings.id_strategy, IdStrategy::Monotonic);
    }

    /// 検証エラーはログに出さず、呼び出し側の通知だけに任せる
    #[test]
    fn test_rejected_save_is_not_logged() {
        let mut state = ProductFormState::default();
        state.set_name("ปากกา");

        let logs = captured_logs(|| {
            assert_eq!(state.save(), Err(ValidationError::MissingField(Field::Price)));
        });
        assert!(logs.is_empty(), "unexpected logs: {logs}");
    }

    /// 追加は info で記録される
    #[test]
    fn test_accepted_save_is_logged() {
        let mut state = ProductFormState::default();
        let logs = captured_logs(|| {
            add(&mut state, "ปากกา", "10");
        });
        assert!(logs.contains("INFO"));
    }
}
