//! Table cell renderers

use contracts::domain::a001_fortune_cookie::FortunePhrase;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Phrase text, wrapped and vertically centered
#[component]
pub fn PhraseCell(#[prop(into)] phrase: String) -> impl IntoView {
    view! {
        <span
            class="fortune-admin__phrase"
            style="white-space: normal; word-break: break-word; font-size: 0.875rem; height: 100%; display: flex; min-height: 1rem; align-items: center;"
        >
            {phrase}
        </span>
    }
}

/// What one table row renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub phrase: String,
    /// `None` for rows the service returned without an id; no delete control is shown
    pub delete_id: Option<String>,
}

impl From<FortunePhrase> for RowCells {
    fn from(row: FortunePhrase) -> Self {
        let delete_id = row.delete_target().map(str::to_string);
        Self {
            phrase: row.phrase,
            delete_id,
        }
    }
}

pub fn table_rows(phrases: Vec<FortunePhrase>) -> Vec<RowCells> {
    phrases.into_iter().map(RowCells::from).collect()
}

/// Delete trigger for a row. Renders nothing for rows without an id.
#[component]
pub fn ActionsCell(delete_id: Option<String>, on_delete: Callback<String>) -> impl IntoView {
    delete_id.map(|id| {
        view! {
            <div style="text-align: end;">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Transparent
                    attr:class="fortune-admin__delete"
                    on_click=move |_| on_delete.run(id.clone())
                >
                    {icon("delete")}
                    "Eliminar"
                </Button>
            </div>
        }
    })
}
