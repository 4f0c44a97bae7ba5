use crate::domain::a001_fortune_cookie::ui::admin::{FortuneApi, FortuneCookieAdmin, HttpFortuneApi};
use crate::shared::config::{load_config, AdminConfig};
use crate::shared::notify::{Notifier, ThawNotifier};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("Fortune service at {}", config.service.path);

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AdminScreen config=config />
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// Wires the admin screen to the HTTP client and the toaster.
/// Must be rendered under `ToasterProvider`.
#[component]
fn AdminScreen(config: AdminConfig) -> impl IntoView {
    let api: Rc<dyn FortuneApi> = Rc::new(HttpFortuneApi::new(&config.service));
    let notifier: Rc<dyn Notifier> = Rc::new(ThawNotifier::from_context());

    view! {
        <FortuneCookieAdmin api=api notifier=notifier toast=config.toast />
    }
}
