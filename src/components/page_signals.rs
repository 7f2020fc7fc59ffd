//! Browser-level listeners: scroll position, connectivity, uncaught errors
//! and keyboard. Each listener runs as a script that streams messages back
//! through `dioxus.send`.

use clinic_core::cosmetic::scroll_progress;
use clinic_core::PageSignal;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::context::{today, use_booking_modal, use_navigation, use_notifier, PageModalView};
use crate::landing_config;
use clinic_ui::ScrollProgress;

/// Scroll metrics reported on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct ScrollMetrics {
    top: f64,
    height: f64,
    viewport: f64,
}

const SCROLL_LISTENER: &str = r#"
    const report = () => dioxus.send({
        top: window.pageYOffset || document.documentElement.scrollTop,
        height: document.documentElement.scrollHeight,
        viewport: window.innerHeight,
    });
    window.addEventListener('scroll', report, { passive: true });
    window.addEventListener('resize', report);
    report();
    await new Promise(() => {});
"#;

const SIGNAL_LISTENER: &str = r#"
    window.addEventListener('online', () => dioxus.send({ kind: 'online' }));
    window.addEventListener('offline', () => dioxus.send({ kind: 'offline' }));
    window.addEventListener('error', (e) => dioxus.send({ kind: 'script_error', message: String(e.message || '') }));
    window.addEventListener('unhandledrejection', (e) => dioxus.send({ kind: 'script_error', message: String(e.reason || '') }));
    document.addEventListener('keydown', (e) => {
        if (e.key === 'Escape') dioxus.send({ kind: 'key', key: e.key });
    });
    await new Promise(() => {});
"#;

/// Scroll progress bar plus the page-wide listeners.
#[component]
pub fn PageSignals() -> Element {
    let mut navigation = use_navigation();
    let mut modal = use_booking_modal();
    let notifier = use_notifier();
    let mut progress = use_signal(|| 0.0_f64);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(SCROLL_LISTENER);
            loop {
                match eval.recv::<ScrollMetrics>().await {
                    Ok(metrics) => {
                        progress.set(scroll_progress(metrics.top, metrics.height, metrics.viewport));
                        // Only write when the navbar style actually flips
                        if navigation.peek().style_changes_at(metrics.top) {
                            navigation.write().on_scroll(metrics.top);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("Scroll listener stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_effect(move || {
        spawn(async move {
            let messages = &landing_config().messages;
            let mut eval = document::eval(SIGNAL_LISTENER);
            loop {
                let signal = match eval.recv::<PageSignal>().await {
                    Ok(signal) => signal,
                    Err(e) => {
                        tracing::debug!("Page signal listener stopped: {:?}", e);
                        break;
                    }
                };
                signal.log();
                if let PageSignal::Key { key } = &signal {
                    modal.write().on_key(key, today(), &mut PageModalView);
                }
                if let Some((message, severity)) = signal.notification(messages) {
                    notifier.show(message, severity);
                }
            }
        });
    });

    rsx! {
        ScrollProgress { percent: progress() }
    }
}
