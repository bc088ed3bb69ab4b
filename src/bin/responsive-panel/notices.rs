//! Maps controller notices onto egui-toast toasts.

use egui_toast::{Toast, ToastKind, ToastOptions};
use responsive_panel::{Notice, NoticeLevel};

pub fn toast(notice: Notice, seconds: f64) -> Toast {
    let kind = match notice.level {
        NoticeLevel::Info => ToastKind::Info,
        NoticeLevel::Success => ToastKind::Success,
        NoticeLevel::Warning => ToastKind::Warning,
        NoticeLevel::Error => ToastKind::Error,
    };

    Toast {
        kind,
        text: notice.text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(seconds)
            .show_progress(true)
            .show_icon(true),
        ..Default::default()
    }
}
