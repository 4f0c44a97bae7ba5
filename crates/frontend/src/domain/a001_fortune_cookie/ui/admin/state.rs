use contracts::domain::a001_fortune_cookie::{clamp_phrase_input, normalize_phrase, FortunePhrase};
use leptos::prelude::*;

/// What the card body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRegion {
    Loading,
    Table,
    Empty,
    LoadFailed,
}

/// Screen state. `phrases` only ever holds the result of the latest applied load.
#[derive(Debug, Clone, Default)]
pub struct FortuneAdminState {
    pub phrases: Vec<FortunePhrase>,
    pub loading: bool,
    pub load_failed: bool,
    pub saving: bool,
    pub deleting: bool,
    pub modal_open: bool,
    pub delete_modal_open: bool,
    pub new_phrase: String,
    pub delete_id: Option<String>,
    load_seq: u64,
    save_flow: u64,
    delete_flow: u64,
}

impl FortuneAdminState {
    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Start a load and return its token
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.load_seq
    }

    fn is_latest(&self, token: u64) -> bool {
        token == self.load_seq
    }

    /// Apply a successful load. Returns `false` if a newer load was issued meanwhile.
    pub fn apply_load(&mut self, token: u64, phrases: Vec<FortunePhrase>) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.phrases = phrases;
        self.loading = false;
        self.load_failed = false;
        true
    }

    /// Record a failed load; the current rows stay as they are
    pub fn fail_load(&mut self, token: u64) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.loading = false;
        self.load_failed = true;
        true
    }

    pub fn table_region(&self) -> TableRegion {
        if self.loading {
            TableRegion::Loading
        } else if !self.phrases.is_empty() {
            TableRegion::Table
        } else if self.load_failed {
            TableRegion::LoadFailed
        } else {
            TableRegion::Empty
        }
    }

    // ------------------------------------------------------------------
    // Create flow
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal_open = true;
    }

    /// Close the dialog. A save still in flight is detached: its outcome no
    /// longer touches the dialog.
    pub fn cancel_create(&mut self) {
        self.modal_open = false;
        self.new_phrase.clear();
        self.saving = false;
        self.save_flow += 1;
    }

    pub fn set_new_phrase(&mut self, value: &str) {
        self.new_phrase = clamp_phrase_input(value);
    }

    /// Enter the in-flight state; yields the flow ticket and the trimmed phrase to send.
    /// `None` while a save is running or when the input is blank.
    pub fn begin_save(&mut self) -> Option<(u64, String)> {
        if self.saving {
            return None;
        }
        let phrase = normalize_phrase(&self.new_phrase)?;
        self.saving = true;
        self.save_flow += 1;
        Some((self.save_flow, phrase))
    }

    /// Close the dialog after a save. Returns `false` if the dialog was
    /// cancelled since `ticket` was issued.
    pub fn save_succeeded(&mut self, ticket: u64) -> bool {
        if ticket != self.save_flow {
            return false;
        }
        self.saving = false;
        self.modal_open = false;
        self.new_phrase.clear();
        true
    }

    pub fn save_failed(&mut self, ticket: u64) -> bool {
        if ticket != self.save_flow {
            return false;
        }
        self.saving = false;
        true
    }

    // ------------------------------------------------------------------
    // Delete flow
    // ------------------------------------------------------------------

    /// Stage a row for deletion and open the confirmation
    pub fn request_delete(&mut self, id: String) {
        self.delete_id = Some(id);
        self.delete_modal_open = true;
    }

    /// Close the confirmation. A delete still in flight is detached.
    pub fn cancel_delete(&mut self) {
        self.delete_modal_open = false;
        self.delete_id = None;
        self.deleting = false;
        self.delete_flow += 1;
    }

    /// Enter the in-flight state; yields the flow ticket and the staged id.
    /// `None` while a delete is running or when nothing is staged.
    pub fn begin_delete(&mut self) -> Option<(u64, String)> {
        if self.deleting {
            return None;
        }
        let id = self.delete_id.clone().filter(|id| !id.is_empty())?;
        self.deleting = true;
        self.delete_flow += 1;
        Some((self.delete_flow, id))
    }

    pub fn delete_succeeded(&mut self, ticket: u64) -> bool {
        if ticket != self.delete_flow {
            return false;
        }
        self.deleting = false;
        self.delete_modal_open = false;
        self.delete_id = None;
        true
    }

    pub fn delete_failed(&mut self, ticket: u64) -> bool {
        if ticket != self.delete_flow {
            return false;
        }
        self.deleting = false;
        true
    }
}

/// Container the view model reads and writes state through
pub trait StateCell: Clone + 'static {
    /// Run `f` against the state. `None` once the state has been disposed.
    fn modify<R>(&self, f: impl FnOnce(&mut FortuneAdminState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<FortuneAdminState> {
    fn modify<R>(&self, f: impl FnOnce(&mut FortuneAdminState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

pub fn create_state() -> RwSignal<FortuneAdminState> {
    RwSignal::new(FortuneAdminState::default())
}

#[cfg(test)]
impl StateCell for std::rc::Rc<std::cell::RefCell<FortuneAdminState>> {
    fn modify<R>(&self, f: impl FnOnce(&mut FortuneAdminState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
