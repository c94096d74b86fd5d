use leptos::*;
use system_ui::{Notice, NoticeTone, ProgressBar, Text, TextRole};

use super::{dispatch_callback, upload_status_text, use_drive_runtime};
use crate::{
    model::{BannerKind, ShareNotice},
    reducer::DriveAction,
};

fn banner_title(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Initialization => "Storage unavailable",
        BannerKind::Upload => "Upload failed",
        BannerKind::Download => "Download failed",
        BannerKind::Persist => "Changes not saved",
    }
}

#[component]
/// Progress of the running upload batch.
pub(super) fn UploadStatus() -> impl IntoView {
    let state = use_drive_runtime().state;
    let progress = create_memo(move |_| state.with(|state| state.upload.clone()));
    let percent = Signal::derive(move || {
        progress.with(|progress| progress.as_ref().map_or(0, |progress| progress.rounded_percent()))
    });

    view! {
        <Show when=move || progress.with(Option::is_some) fallback=|| ()>
            <div class="drive-upload" aria-live="polite">
                <ProgressBar max=100 value=percent aria_label="Upload progress" />
                <Text role=TextRole::Caption>
                    {move || progress.with(|progress| {
                        progress.as_ref().map(upload_status_text).unwrap_or_default()
                    })}
                </Text>
            </div>
        </Show>
    }
}

#[component]
/// Error banner and share-link notice.
pub(super) fn DriveNotices() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let banner = create_memo(move |_| state.with(|state| state.banner.clone()));
    let share = create_memo(move |_| state.with(|state| state.share_notice.clone()));

    view! {
        {move || {
            banner
                .get()
                .map(|banner| {
                    view! {
                        <Notice
                            tone=NoticeTone::Error
                            title=banner_title(banner.kind)
                            on_dismiss=dispatch_callback(runtime, |_| DriveAction::DismissBanner)
                        >
                            {banner.message}
                        </Notice>
                    }
                })
        }}
        {move || {
            share
                .get()
                .map(|notice| {
                    let tone = if notice.copied { NoticeTone::Success } else { NoticeTone::Info };
                    let dismiss = dispatch_callback(runtime, |_| DriveAction::DismissShareNotice);
                    view! {
                        <Notice tone=tone on_dismiss=dismiss>
                            <ShareNoticeBody notice />
                        </Notice>
                    }
                })
        }}
    }
}

#[component]
fn ShareNoticeBody(notice: ShareNotice) -> impl IntoView {
    if notice.copied {
        let message = format!("Link to \"{}\" copied to the clipboard.", notice.item_name);
        view! { <span>{message}</span> }.into_view()
    } else {
        view! {
            <span>{format!("Copy this link to share \"{}\": ", notice.item_name)}</span>
            <Text role=TextRole::Code>{notice.link}</Text>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_banner_kind_has_a_title() {
        for kind in [
            BannerKind::Initialization,
            BannerKind::Upload,
            BannerKind::Download,
            BannerKind::Persist,
        ] {
            assert!(!banner_title(kind).is_empty());
        }
        assert_eq!(banner_title(BannerKind::Persist), "Changes not saved");
    }
}
