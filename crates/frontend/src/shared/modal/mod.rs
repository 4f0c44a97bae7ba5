use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog with a confirm and a cancel action.
///
/// While `busy` is set the confirm button is disabled and overlay clicks are
/// ignored; Escape and the cancel button still close the dialog.
#[component]
pub fn ConfirmDialog(
    /// Whether the dialog is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Request in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Confirm button label (changes while busy)
    #[prop(into)]
    confirm_label: Signal<&'static str>,
    #[prop(optional)] cancel_label: Option<&'static str>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Dialog body
    children: ChildrenFn,
) -> impl IntoView {
    let cancel_label = cancel_label.unwrap_or("Cancelar");

    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && open.get_untracked() {
            on_cancel.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_overlay_click = move |_| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    // Prevent click propagation from dialog content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=handle_overlay_click>
                <div class="modal modal--confirm" role="dialog" on:click=stop_propagation>
                    <div class="modal-body">
                        {children()}
                    </div>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                        >
                            {cancel_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                        >
                            {move || confirm_label.get()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
