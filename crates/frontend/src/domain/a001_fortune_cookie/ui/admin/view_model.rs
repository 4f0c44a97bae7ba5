use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::model::FortuneApi;
use super::state::{FortuneAdminState, StateCell};
use crate::shared::config::ToastConfig;
use crate::shared::notify::{NoticeLevel, Notifier};

pub const MSG_CREATED: &str = "¡Galleta creada con éxito!";
pub const MSG_CREATE_FAILED: &str = "Error al crear la galleta.";
pub const MSG_DELETED: &str = "¡Galleta eliminada con éxito!";
pub const MSG_DELETE_FAILED: &str = "Error al eliminar la galleta.";

/// ViewModel for the fortune cookie admin screen
///
/// Every successful mutation is followed by a full reload, so the table
/// always mirrors the last list the service returned.
#[derive(Clone)]
pub struct FortuneAdminViewModel<S: StateCell = RwSignal<FortuneAdminState>> {
    pub state: S,
    api: Rc<dyn FortuneApi>,
    notifier: Rc<dyn Notifier>,
    toast: ToastConfig,
}

impl<S: StateCell> FortuneAdminViewModel<S> {
    pub fn new(
        state: S,
        api: Rc<dyn FortuneApi>,
        notifier: Rc<dyn Notifier>,
        toast: ToastConfig,
    ) -> Self {
        Self {
            state,
            api,
            notifier,
            toast,
        }
    }

    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notifier.notify(message, self.toast.options(level));
    }

    // ------------------------------------------------------------------
    // Flows
    // ------------------------------------------------------------------

    /// Fetch the whole list. Only the most recently started load is applied.
    pub async fn reload(&self) {
        let Some(token) = self.state.modify(|s| s.begin_load()) else {
            return;
        };

        match self.api.list_phrases().await {
            Ok(phrases) => {
                let count = phrases.len();
                match self.state.modify(|s| s.apply_load(token, phrases)) {
                    Some(true) => log::debug!("Loaded {} fortune cookies", count),
                    Some(false) => log::debug!("Dropped stale fortune list (load #{})", token),
                    None => {}
                }
            }
            Err(e) => {
                log::error!("Error al obtener galletas: {}", e);
                self.state.modify(|s| s.fail_load(token));
            }
        }
    }

    /// Create the phrase typed in the dialog
    pub async fn save(&self) {
        let Some((ticket, phrase)) = self.state.modify(|s| s.begin_save()).flatten() else {
            return;
        };

        match self.api.create_phrase(&phrase).await {
            Ok(()) => {
                self.reload().await;
                if self.state.modify(|s| s.save_succeeded(ticket)).is_some() {
                    self.notify(MSG_CREATED, NoticeLevel::Success);
                }
            }
            Err(e) => {
                log::error!("Error al guardar galleta: {}", e);
                if self.state.modify(|s| s.save_failed(ticket)).is_some() {
                    self.notify(MSG_CREATE_FAILED, NoticeLevel::Error);
                }
            }
        }
    }

    /// Delete the staged row
    pub async fn confirm_delete(&self) {
        let Some((ticket, id)) = self.state.modify(|s| s.begin_delete()).flatten() else {
            return;
        };

        match self.api.delete_phrase(&id).await {
            Ok(()) => {
                self.reload().await;
                if self.state.modify(|s| s.delete_succeeded(ticket)).is_some() {
                    self.notify(MSG_DELETED, NoticeLevel::Success);
                }
            }
            Err(e) => {
                log::error!("Error al eliminar galleta {}: {}", id, e);
                if self.state.modify(|s| s.delete_failed(ticket)).is_some() {
                    self.notify(MSG_DELETE_FAILED, NoticeLevel::Error);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn open_create(&self) {
        self.state.modify(|s| s.open_create());
    }

    pub fn cancel_create(&self) {
        self.state.modify(|s| s.cancel_create());
    }

    pub fn set_new_phrase(&self, value: &str) {
        self.state.modify(|s| s.set_new_phrase(value));
    }

    pub fn request_delete(&self, id: String) {
        self.state.modify(|s| s.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.state.modify(|s| s.cancel_delete());
    }

    pub fn reload_command(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.reload().await });
    }

    pub fn save_command(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.save().await });
    }

    pub fn delete_command(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.confirm_delete().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_fortune_cookie::ui::admin::model::FortuneApiError;
    use crate::domain::a001_fortune_cookie::ui::admin::state::TableRegion;
    use crate::shared::notify::NotifyOptions;
    use async_trait::async_trait;
    use contracts::domain::a001_fortune_cookie::FortunePhrase;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(String),
        Delete(String),
    }

    /// In-memory fortune service
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        rows: RefCell<Vec<FortunePhrase>>,
        next_id: Cell<u32>,
        fail_list: Cell<bool>,
        fail_create: Cell<bool>,
        fail_delete: Cell<bool>,
        gates: RefCell<VecDeque<oneshot::Receiver<Vec<FortunePhrase>>>>,
        create_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FakeApi {
        fn with_rows(rows: Vec<FortunePhrase>) -> Self {
            let api = Self::default();
            *api.rows.borrow_mut() = rows;
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl FortuneApi for FakeApi {
        async fn list_phrases(&self) -> Result<Vec<FortunePhrase>, FortuneApiError> {
            self.calls.borrow_mut().push(Call::List);
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                return gate
                    .await
                    .map_err(|e| FortuneApiError::Network(e.to_string()));
            }
            if self.fail_list.get() {
                return Err(FortuneApiError::Status { status: 500 });
            }
            Ok(self.rows.borrow().clone())
        }

        async fn create_phrase(&self, phrase: &str) -> Result<(), FortuneApiError> {
            self.calls.borrow_mut().push(Call::Create(phrase.to_string()));
            let gate = self.create_gate.borrow_mut().take();
            if let Some(gate) = gate {
                gate.await
                    .map_err(|e| FortuneApiError::Network(e.to_string()))?;
            }
            if self.fail_create.get() {
                return Err(FortuneApiError::Network("connection refused".to_string()));
            }
            let id = self.next_id.get() + 100;
            self.next_id.set(id);
            self.rows
                .borrow_mut()
                .push(FortunePhrase::new(phrase, Some(id.to_string())));
            Ok(())
        }

        async fn delete_phrase(&self, id: &str) -> Result<(), FortuneApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            if self.fail_delete.get() {
                return Err(FortuneApiError::Status { status: 404 });
            }
            self.rows
                .borrow_mut()
                .retain(|row| row.id.as_deref() != Some(id));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<(String, NotifyOptions)>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.sent.borrow().iter().map(|(m, _)| m.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, options: NotifyOptions) {
            self.sent.borrow_mut().push((message.to_string(), options));
        }
    }

    type TestState = Rc<RefCell<FortuneAdminState>>;

    struct Harness {
        vm: FortuneAdminViewModel<TestState>,
        state: TestState,
        api: Rc<FakeApi>,
        notifier: Rc<RecordingNotifier>,
    }

    fn harness(api: FakeApi) -> Harness {
        let state: TestState = Rc::new(RefCell::new(FortuneAdminState::default()));
        let api = Rc::new(api);
        let notifier = Rc::new(RecordingNotifier::default());
        let vm = FortuneAdminViewModel::new(
            state.clone(),
            api.clone(),
            notifier.clone(),
            ToastConfig::default(),
        );
        Harness {
            vm,
            state,
            api,
            notifier,
        }
    }

    fn row(text: &str, id: &str) -> FortunePhrase {
        FortunePhrase::new(text, Some(id.to_string()))
    }

    #[test]
    fn test_reload_shows_every_listed_row() {
        let h = harness(FakeApi::with_rows(vec![
            row("Tu día mejora pronto", "1"),
            row("La paciencia es oro", "2"),
            row("Un viaje te espera", "3"),
        ]));

        block_on(h.vm.reload());

        let state = h.state.borrow();
        assert_eq!(state.phrases.len(), 3);
        assert_eq!(state.phrases[0].phrase, "Tu día mejora pronto");
        assert_eq!(state.table_region(), TableRegion::Table);
        assert_eq!(h.api.calls(), vec![Call::List]);
    }

    #[test]
    fn test_reload_with_no_rows_shows_empty_state() {
        let h = harness(FakeApi::default());
        block_on(h.vm.reload());
        assert_eq!(h.state.borrow().table_region(), TableRegion::Empty);
    }

    #[test]
    fn test_failed_reload_is_silent() {
        let h = harness(FakeApi::default());
        h.api.fail_list.set(true);

        block_on(h.vm.reload());

        assert_eq!(h.state.borrow().table_region(), TableRegion::LoadFailed);
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_save_blank_input_does_nothing() {
        let h = harness(FakeApi::default());
        h.vm.open_create();
        h.vm.set_new_phrase("   ");

        block_on(h.vm.save());

        assert!(h.api.calls().is_empty());
        assert!(h.state.borrow().modal_open);
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_save_success_reloads_and_closes_dialog() {
        let h = harness(FakeApi::default());
        h.vm.open_create();
        h.vm.set_new_phrase("  Hoy encontrarás lo que buscas  ");

        block_on(h.vm.save());

        assert_eq!(
            h.api.calls(),
            vec![
                Call::Create("Hoy encontrarás lo que buscas".to_string()),
                Call::List
            ]
        );
        let state = h.state.borrow();
        assert!(!state.modal_open);
        assert!(!state.saving);
        assert!(state.new_phrase.is_empty());
        assert_eq!(state.phrases.len(), 1);
        assert_eq!(state.phrases[0].phrase, "Hoy encontrarás lo que buscas");

        let sent = h.notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, MSG_CREATED);
        assert_eq!(sent[0].1.level, NoticeLevel::Success);
        assert_eq!(sent[0].1.duration, Some(Duration::from_millis(3000)));
    }

    #[test]
    fn test_save_failure_keeps_dialog_and_input() {
        let h = harness(FakeApi::default());
        h.api.fail_create.set(true);
        h.vm.open_create();
        h.vm.set_new_phrase("Frase que no llega");

        block_on(h.vm.save());

        assert_eq!(
            h.api.calls(),
            vec![Call::Create("Frase que no llega".to_string())]
        );
        let state = h.state.borrow();
        assert!(state.modal_open);
        assert!(!state.saving);
        assert_eq!(state.new_phrase, "Frase que no llega");

        let sent = h.notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, MSG_CREATE_FAILED);
        assert_eq!(sent[0].1.level, NoticeLevel::Error);
    }

    #[test]
    fn test_delete_success_reloads_and_clears_staged_id() {
        let h = harness(FakeApi::with_rows(vec![
            row("Se va", "abc123"),
            row("Se queda", "xyz"),
        ]));
        block_on(h.vm.reload());

        h.vm.request_delete("abc123".to_string());
        assert_eq!(h.state.borrow().delete_id.as_deref(), Some("abc123"));

        block_on(h.vm.confirm_delete());

        assert_eq!(
            h.api.calls(),
            vec![Call::List, Call::Delete("abc123".to_string()), Call::List]
        );
        let state = h.state.borrow();
        assert!(!state.delete_modal_open);
        assert_eq!(state.delete_id, None);
        assert_eq!(state.phrases, vec![row("Se queda", "xyz")]);
        assert_eq!(h.notifier.messages(), vec![MSG_DELETED.to_string()]);
    }

    #[test]
    fn test_delete_failure_keeps_dialog_open() {
        let h = harness(FakeApi::with_rows(vec![row("Persistente", "abc123")]));
        h.api.fail_delete.set(true);
        h.vm.request_delete("abc123".to_string());

        block_on(h.vm.confirm_delete());

        assert_eq!(h.api.calls(), vec![Call::Delete("abc123".to_string())]);
        let state = h.state.borrow();
        assert!(state.delete_modal_open);
        assert!(!state.deleting);
        assert_eq!(state.delete_id.as_deref(), Some("abc123"));
        assert_eq!(h.notifier.messages(), vec![MSG_DELETE_FAILED.to_string()]);
    }

    #[test]
    fn test_confirm_delete_without_staged_id_does_nothing() {
        let h = harness(FakeApi::default());
        block_on(h.vm.confirm_delete());
        assert!(h.api.calls().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_cancel_issues_no_calls() {
        let h = harness(FakeApi::default());

        h.vm.open_create();
        h.vm.set_new_phrase("Descartada");
        h.vm.cancel_create();

        h.vm.request_delete("abc123".to_string());
        h.vm.cancel_delete();

        assert!(h.api.calls().is_empty());
        let state = h.state.borrow();
        assert!(!state.modal_open && !state.delete_modal_open);
        assert!(state.new_phrase.is_empty());
        assert_eq!(state.delete_id, None);
    }

    #[test]
    fn test_overlapping_reloads_apply_latest_only() {
        let h = harness(FakeApi::default());
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        h.api.gates.borrow_mut().extend([older_rx, newer_rx]);

        block_on(async {
            futures::join!(h.vm.reload(), h.vm.reload(), async {
                let _ = newer_tx.send(vec![row("Fresca", "2")]);
                let _ = older_tx.send(vec![row("Rancia", "1")]);
            });
        });

        let state = h.state.borrow();
        assert_eq!(state.phrases, vec![row("Fresca", "2")]);
        assert!(!state.loading);
    }

    #[test]
    fn test_cancelled_save_leaves_reopened_dialog_alone() {
        let h = harness(FakeApi::default());
        let (release, gate) = oneshot::channel();
        *h.api.create_gate.borrow_mut() = Some(gate);

        h.vm.open_create();
        h.vm.set_new_phrase("Primera");

        block_on(async {
            futures::join!(h.vm.save(), async {
                h.vm.cancel_create();
                h.vm.open_create();
                h.vm.set_new_phrase("Segunda");
                let _ = release.send(());
            });
        });

        assert_eq!(
            h.api.calls(),
            vec![Call::Create("Primera".to_string()), Call::List]
        );
        let state = h.state.borrow();
        assert!(state.modal_open);
        assert_eq!(state.new_phrase, "Segunda");
        assert!(!state.saving);
        assert_eq!(state.phrases.len(), 1);
        assert_eq!(h.notifier.messages(), vec![MSG_CREATED.to_string()]);
    }

    #[derive(Clone)]
    struct Disposed;

    impl StateCell for Disposed {
        fn modify<R>(&self, _f: impl FnOnce(&mut FortuneAdminState) -> R) -> Option<R> {
            None
        }
    }

    #[test]
    fn test_disposed_state_stops_flows() {
        let api = Rc::new(FakeApi::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let vm = FortuneAdminViewModel::new(
            Disposed,
            api.clone(),
            notifier.clone(),
            ToastConfig::default(),
        );

        block_on(async {
            vm.reload().await;
            vm.save().await;
            vm.confirm_delete().await;
        });

        assert!(api.calls().is_empty());
        assert!(notifier.messages().is_empty());
    }
}
