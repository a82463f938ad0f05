//! 削除確認ゲート
//!
//! 削除は必ず確認ダイアログを経由する。保留中のIDとダイアログ表示は
//! 1つの状態で表すため、食い違うことはない。

use crate::types::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteGate {
    /// 保留なし（ダイアログ非表示）
    #[default]
    Idle,
    /// 確認待ち（ダイアログ表示中）
    PendingConfirmation(ProductId),
}

impl DeleteGate {
    /// 削除を要求してダイアログを開く
    ///
    /// 確認待ちの間は無視して false を返す。
    pub fn request_delete(&mut self, id: ProductId) -> bool {
        match self {
            DeleteGate::Idle => {
                *self = DeleteGate::PendingConfirmation(id);
                tracing::debug!(id, "delete requested");
                true
            }
            DeleteGate::PendingConfirmation(pending) => {
                tracing::debug!(id, pending = *pending, "delete request ignored: confirmation open");
                false
            }
        }
    }

    /// 削除を確定し、削除すべきIDを返す。Idle なら何もしない
    pub fn confirm(&mut self) -> Option<ProductId> {
        match std::mem::take(self) {
            DeleteGate::PendingConfirmation(id) => {
                tracing::debug!(id, "delete confirmed");
                Some(id)
            }
            DeleteGate::Idle => None,
        }
    }

    /// 削除を取り消す。Idle なら何もしない
    pub fn cancel(&mut self) {
        if let DeleteGate::PendingConfirmation(id) = std::mem::take(self) {
            tracing::debug!(id, "delete cancelled");
        }
    }

    pub fn pending(&self) -> Option<ProductId> {
        match self {
            DeleteGate::PendingConfirmation(id) => Some(*id),
            DeleteGate::Idle => None,
        }
    }

    /// 確認ダイアログを表示すべきか
    pub fn is_open(&self) -> bool {
        matches!(self, DeleteGate::PendingConfirmation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let gate = DeleteGate::default();
        assert_eq!(gate, DeleteGate::Idle);
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn test_request_opens_dialog() {
        let mut gate = DeleteGate::default();
        assert!(gate.request_delete(7));
        assert!(gate.is_open());
        assert_eq!(gate.pending(), Some(7));
    }

    #[test]
    fn test_confirm_returns_id_and_closes() {
        let mut gate = DeleteGate::default();
        gate.request_delete(3);
        assert_eq!(gate.confirm(), Some(3));
        assert_eq!(gate, DeleteGate::Idle);
    }

    #[test]
    fn test_cancel_closes_without_id() {
        let mut gate = DeleteGate::default();
        gate.request_delete(3);
        gate.cancel();
        assert_eq!(gate, DeleteGate::Idle);
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_confirm_and_cancel_while_idle_are_noops() {
        let mut gate = DeleteGate::default();
        assert_eq!(gate.confirm(), None);
        gate.cancel();
        assert_eq!(gate, DeleteGate::Idle);
    }

    #[test]
    fn test_request_while_pending_is_ignored() {
        let mut gate = DeleteGate::default();
        gate.request_delete(1);
        assert!(!gate.request_delete(2));
        assert_eq!(gate.pending(), Some(1));
    }

    #[test]
    fn test_gate_cycles() {
        let mut gate = DeleteGate::default();
        for id in 1..=3 {
            assert!(gate.request_delete(id));
            if id % 2 == 0 {
                gate.cancel();
            } else {
                assert_eq!(gate.confirm(), Some(id));
            }
            assert!(!gate.is_open());
        }
    }
}
