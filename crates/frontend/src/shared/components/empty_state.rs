use leptos::prelude::*;

/// Centered placeholder for a region with nothing to show
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__title">{title}</div>
            {description.map(|d| view! { <div class="empty-state__description">{d}</div> })}
            {children.map(|children| view! {
                <div class="empty-state__actions">{children()}</div>
            })}
        </div>
    }
}
