//! Toast notifications
//!
//! Screens receive a `Notifier` instead of looking the toaster up themselves,
//! so their logic can be driven without a mounted UI.

use leptos::prelude::*;
use serde::Deserialize;
use std::time::Duration;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotifyOptions {
    pub duration: Option<Duration>,
    pub horizontal_position: Option<HorizontalPosition>,
    pub vertical_position: Option<VerticalPosition>,
    pub level: NoticeLevel,
}

/// Fire-and-forget user notification
pub trait Notifier {
    fn notify(&self, message: &str, options: NotifyOptions);
}

/// Notifier backed by thaw's toaster
#[derive(Clone)]
pub struct ThawNotifier {
    toaster: ToasterInjection,
}

impl ThawNotifier {
    pub fn new(toaster: ToasterInjection) -> Self {
        Self { toaster }
    }

    /// Must be called under a `ToasterProvider`
    pub fn from_context() -> Self {
        Self::new(ToasterInjection::expect_context())
    }
}

impl Notifier for ThawNotifier {
    fn notify(&self, message: &str, options: NotifyOptions) {
        let mut toast_options = ToastOptions::default().with_intent(match options.level {
            NoticeLevel::Success => ToastIntent::Success,
            NoticeLevel::Error => ToastIntent::Error,
        });
        if let Some(timeout) = options.duration {
            toast_options = toast_options.with_timeout(timeout);
        }
        if let Some(position) =
            toast_position(options.horizontal_position, options.vertical_position)
        {
            toast_options = toast_options.with_position(position);
        }

        let message = message.to_string();
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{message.clone()}</ToastTitle>
                    </Toast>
                }
            },
            toast_options,
        );
    }
}

/// Map a horizontal/vertical pair onto the toaster's corner positions.
/// `None` leaves the toaster default in place.
pub fn toast_position(
    horizontal: Option<HorizontalPosition>,
    vertical: Option<VerticalPosition>,
) -> Option<ToastPosition> {
    if horizontal.is_none() && vertical.is_none() {
        return None;
    }
    let horizontal = horizontal.unwrap_or(HorizontalPosition::Right);
    let vertical = vertical.unwrap_or(VerticalPosition::Top);

    Some(match (vertical, horizontal) {
        (VerticalPosition::Top, HorizontalPosition::Left) => ToastPosition::TopStart,
        (VerticalPosition::Top, HorizontalPosition::Center) => ToastPosition::Top,
        (VerticalPosition::Top, HorizontalPosition::Right) => ToastPosition::TopEnd,
        (VerticalPosition::Bottom, HorizontalPosition::Left) => ToastPosition::BottomStart,
        (VerticalPosition::Bottom, HorizontalPosition::Center) => ToastPosition::Bottom,
        (VerticalPosition::Bottom, HorizontalPosition::Right) => ToastPosition::BottomEnd,
    })
}
