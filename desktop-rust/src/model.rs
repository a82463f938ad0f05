use product_form_common::{Field, ProductFormState, ProductId};

/// 画面操作
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Edit(Field, String),
    Save,
    Clear,
    RequestDelete(ProductId),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ProductFormState,
    /// 表示中のブロッキング通知
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(form: ProductFormState) -> Self {
        Self { form, notice: None }
    }

    /// モーダル表示中は他の操作を受け付けない
    pub fn is_modal_open(&self) -> bool {
        self.notice.is_some() || self.form.gate().is_open()
    }

    pub fn apply(&mut self, action: UiAction) {
        if self.notice.is_some() && action != UiAction::DismissNotice {
            return;
        }
        match action {
            UiAction::Edit(field, text) => self.form.set_field(field, text),
            UiAction::Save => {
                if let Err(err) = self.form.save() {
                    self.notice = Some(err.to_string());
                }
            }
            UiAction::Clear => self.form.clear_form(),
            UiAction::RequestDelete(id) => {
                self.form.request_delete(id);
            }
            UiAction::ConfirmDelete => {
                self.form.confirm_delete();
            }
            UiAction::CancelDelete => self.form.cancel_delete(),
            UiAction::DismissNotice => self.notice = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_form_common::labels;

    #[test]
    fn test_failed_save_shows_notice() {
        let mut state = AppState::default();
        state.apply(UiAction::Edit(Field::Name, "Pen".into()));
        state.apply(UiAction::Save);

        assert_eq!(state.notice.as_deref(), Some(labels::VALIDATION_NOTICE));
        assert!(state.is_modal_open());
        assert_eq!(state.form.form().name(), "Pen");
    }

    #[test]
    fn test_notice_blocks_other_actions() {
        let mut state = AppState::default();
        state.apply(UiAction::Save);
        state.apply(UiAction::Edit(Field::Name, "Pen".into()));
        assert_eq!(state.form.form().name(), "");

        state.apply(UiAction::DismissNotice);
        assert!(!state.is_modal_open());
        state.apply(UiAction::Edit(Field::Name, "Pen".into()));
        assert_eq!(state.form.form().name(), "Pen");
    }

    #[test]
    fn test_delete_through_dialog() {
        let mut state = AppState::default();
        state.apply(UiAction::Edit(Field::Name, "Pen".into()));
        state.apply(UiAction::Edit(Field::Price, "10".into()));
        state.apply(UiAction::Save);
        assert_eq!(state.form.products().len(), 1);

        state.apply(UiAction::RequestDelete(1));
        assert!(state.is_modal_open());
        state.apply(UiAction::CancelDelete);
        assert_eq!(state.form.products().len(), 1);

        state.apply(UiAction::RequestDelete(1));
        state.apply(UiAction::ConfirmDelete);
        assert!(state.form.products().is_empty());
        assert!(!state.is_modal_open());
    }
}
