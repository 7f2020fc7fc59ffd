//! Hero section: headline, booking and emergency actions, animated
//! statistics and floating decoration icons.

use std::time::{Duration, Instant};

use clinic_core::cosmetic::{float_delay, float_style};
use clinic_core::{CounterSpec, CounterTrigger, Severity};
use dioxus::prelude::*;

use crate::context::{open_booking, use_booking_modal, use_notifier, Notifier};
use crate::landing_config;
use clinic_ui::{Button, ButtonVariant, Icon, IconName};

/// Frame interval of the counter animation
const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn Hero() -> Element {
    let modal = use_booking_modal();
    let notifier = use_notifier();

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-floating", "aria-hidden": "true",
                FloatingIcon { icon: IconName::Heart, class: "float-1" }
                FloatingIcon { icon: IconName::Activity, class: "float-2" }
                FloatingIcon { icon: IconName::Plus, class: "float-3" }
                FloatingIcon { icon: IconName::Eye, class: "float-4" }
            }

            div { class: "hero-content",
                h1 { class: "hero-title",
                    "Забота о вашем здоровье "
                    span { class: "highlight", "24/7" }
                }
                p { class: "hero-subtitle",
                    "Современная клиника с опытными врачами, точной диагностикой и записью онлайн за пару минут."
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        id: "heroBookBtn".to_string(),
                        onclick: move |_| open_booking(modal, notifier, None),
                        Icon { name: IconName::Calendar, size: 20 }
                        span { "Записаться на приём" }
                    }
                    Button {
                        variant: ButtonVariant::Emergency,
                        onclick: move |_| call_emergency(notifier),
                        Icon { name: IconName::Phone, size: 20 }
                        span { "Экстренная помощь" }
                    }
                }
                HeroStats {}
            }
        }
    }
}

/// Statistics that count up once, the first time they scroll into view.
#[component]
fn HeroStats() -> Element {
    let counters = &landing_config().animations.counters;
    let mut texts = use_signal(|| {
        counters
            .iter()
            .map(|c| c.frame(Duration::ZERO).text)
            .collect::<Vec<_>>()
    });
    let mut trigger = use_signal(CounterTrigger::default);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(STATS_OBSERVER);
            if let Err(e) = eval.recv::<bool>().await {
                tracing::debug!("Stats observer stopped: {:?}", e);
                return;
            }
            if !trigger.write().fire() {
                return;
            }
            tracing::debug!("Starting hero counters");
            animate_counters(&landing_config().animations.counters, texts).await;
        });
    });

    rsx! {
        div { class: "hero-stats",
            for (i, counter) in counters.iter().enumerate() {
                div { key: "{i}", class: "stat-item",
                    span { class: "stat-number", {texts.read().get(i).cloned().unwrap_or_default()} }
                    span { class: "stat-label", {counter.label()} }
                }
            }
        }
    }
}

/// Drive every counter from elapsed wall time until all are done.
async fn animate_counters(counters: &[CounterSpec], mut texts: Signal<Vec<String>>) {
    let started = Instant::now();
    loop {
        let elapsed = started.elapsed();
        let frames: Vec<_> = counters.iter().map(|c| c.frame(elapsed)).collect();
        let done = frames.iter().all(|f| f.done);
        texts.set(frames.into_iter().map(|f| f.text).collect());
        if done {
            break;
        }
        tokio::time::sleep(FRAME).await;
    }
}

/// Observed once at half visibility, then unobserved.
const STATS_OBSERVER: &str = r#"
    const stats = document.querySelector('.hero-stats');
    if (stats) {
        const observer = new IntersectionObserver((entries) => {
            entries.forEach((entry) => {
                if (entry.isIntersecting) {
                    observer.unobserve(entry.target);
                    dioxus.send(true);
                }
            });
        }, { threshold: 0.5 });
        observer.observe(stats);
    }
    await new Promise(() => {});
"#;

/// Decoration icon drifting with a random phase, paused while hovered.
#[component]
fn FloatingIcon(icon: IconName, class: &'static str) -> Element {
    let delay = use_hook(|| float_delay(&mut rand::rng()));
    let mut paused = use_signal(|| false);
    let style = float_style(delay, paused());

    rsx! {
        div {
            class: "floating-icon {class}",
            style: "{style}",
            onmouseenter: move |_| paused.set(true),
            onmouseleave: move |_| paused.set(false),
            Icon { name: icon, size: 32 }
        }
    }
}

/// Announce the emergency number, then offer to dial it.
fn call_emergency(notifier: Notifier) {
    let messages = &landing_config().messages;
    tracing::info!("Emergency call requested");
    notifier.show(messages.emergency.clone(), Severity::Info);

    spawn(async move {
        let messages = &landing_config().messages;
        let confirm = format!("return confirm({});", js_string(&messages.emergency_confirm));
        match document::eval(&confirm).join::<bool>().await {
            Ok(true) => {
                document::eval(&format!(
                    "window.location.href = {};",
                    js_string(&format!("tel:{}", messages.emergency_phone))
                ));
            }
            Ok(false) => tracing::debug!("Emergency call declined"),
            Err(e) => tracing::warn!("Emergency confirmation failed: {:?}", e),
        }
    });
}

/// Quote a string as a JavaScript literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_strings_are_escaped() {
        assert_eq!(js_string("tel:+74959112233"), "\"tel:+74959112233\"");
        assert_eq!(js_string("a'b\"c"), "\"a'b\\\"c\"");
    }

    #[test]
    fn default_counters_end_on_final_text() {
        let counters = clinic_core::LandingConfig::default().animations.counters;
        let finals: Vec<_> = counters.iter().map(CounterSpec::final_text).collect();
        assert_eq!(finals, vec!["15\u{a0}000+", "12", "24/7"]);
    }
}
