use contracts::domain::a001_fortune_cookie::PHRASE_MAX_CHARS;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use super::cells::{table_rows, ActionsCell, PhraseCell, RowCells};
use super::model::FortuneApi;
use super::state::{create_state, TableRegion};
use super::view_model::FortuneAdminViewModel;
use crate::shared::components::{EmptyState, PageHeader};
use crate::shared::config::ToastConfig;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notify::Notifier;

pub const TITLE: &str = "Administrador de Galletas de la Fortuna";
pub const SUBTITLE: &str = "Consulta o agrega nuevas frases de la fortuna";

pub fn save_label(saving: bool) -> &'static str {
    if saving {
        "Guardando..."
    } else {
        "Guardar"
    }
}

pub fn delete_label(deleting: bool) -> &'static str {
    if deleting {
        "Eliminando..."
    } else {
        "Eliminar"
    }
}

#[component]
pub fn FortuneCookieAdmin(
    api: Rc<dyn FortuneApi>,
    notifier: Rc<dyn Notifier>,
    #[prop(optional)] toast: Option<ToastConfig>,
) -> impl IntoView {
    let state = create_state();
    let vm = FortuneAdminViewModel::new(state, api, notifier, toast.unwrap_or_default());
    vm.reload_command();

    // Store the view model so reactive closures can share it
    let vm = StoredValue::new_local(vm);

    let region = Memo::new(move |_| state.with(|s| s.table_region()));
    let phrases = Memo::new(move |_| state.with(|s| s.phrases.clone()));
    let saving = Signal::derive(move || state.with(|s| s.saving));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));

    let on_delete = Callback::new(move |id: String| vm.with_value(|vm| vm.request_delete(id)));

    view! {
        <div class="page fortune-admin">
            <PageHeader title=TITLE subtitle=SUBTITLE />

            <div class="card fortune-admin__card">
                <div class="fortune-admin__header">
                    <span class="fortune-admin__section-title">"Frases de la fortuna existentes"</span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.with_value(|vm| vm.open_create())
                    >
                        {icon("plus")}
                        "Agregar nueva galleta"
                    </Button>
                </div>

                {move || match region.get() {
                    TableRegion::Loading => view! {
                        <div class="fortune-admin__placeholder">
                            <Spinner />
                        </div>
                    }.into_any(),
                    TableRegion::Table => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Frase de la Galleta"</TableHeaderCell>
                                    <TableHeaderCell attr:style="width: 100px; text-align: end;">"Acciones"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || table_rows(phrases.get()).into_iter().map(|row| {
                                    let RowCells { phrase, delete_id } = row;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <PhraseCell phrase=phrase />
                                            </TableCell>
                                            <TableCell>
                                                <ActionsCell delete_id=delete_id on_delete=on_delete />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any(),
                    TableRegion::Empty => view! {
                        <div class="fortune-admin__placeholder">
                            <EmptyState
                                title="No hay galletas registradas"
                                description="Agrega algunas frases para empezar"
                            />
                        </div>
                    }.into_any(),
                    TableRegion::LoadFailed => view! {
                        <div class="fortune-admin__placeholder">
                            <EmptyState
                                title="No se pudieron cargar las galletas"
                                description="Revisa la conexión e intenta de nuevo"
                            >
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| vm.with_value(|vm| vm.reload_command())
                                >
                                    {icon("refresh")}
                                    "Reintentar"
                                </Button>
                            </EmptyState>
                        </div>
                    }.into_any(),
                }}
            </div>

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.modal_open))
                busy=saving
                confirm_label=Signal::derive(move || save_label(saving.get()))
                on_confirm=Callback::new(move |_| vm.with_value(|vm| vm.save_command()))
                on_cancel=Callback::new(move |_| vm.with_value(|vm| vm.cancel_create()))
            >
                <p class="mb4">"Escribe una nueva frase de galleta:"</p>
                <input
                    type="text"
                    class="input fortune-admin__input"
                    placeholder="La fortuna es..."
                    maxlength=PHRASE_MAX_CHARS.to_string()
                    prop:value=move || state.with(|s| s.new_phrase.clone())
                    prop:disabled=move || saving.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.with_value(|vm| vm.set_new_phrase(&value));
                    }
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.delete_modal_open))
                busy=deleting
                confirm_label=Signal::derive(move || delete_label(deleting.get()))
                on_confirm=Callback::new(move |_| vm.with_value(|vm| vm.delete_command()))
                on_cancel=Callback::new(move |_| vm.with_value(|vm| vm.cancel_delete()))
            >
                <div>"¿Estás seguro que quieres eliminar esta galleta?"</div>
            </ConfirmDialog>
        </div>
    }
}
