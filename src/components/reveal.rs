//! Scroll-triggered card reveal.
//!
//! Cards opt in with `data-reveal="<group>"` and `data-index="<i>"`. An
//! intersection observer in the page reports each card index the first time
//! it is seen; elements stay observed, the tracker makes reveal idempotent.

use clinic_core::RevealTracker;
use dioxus::prelude::*;

use crate::landing_config;

/// Track reveal state for `count` cards of `group`.
pub fn use_reveal(group: &'static str, count: usize) -> Signal<RevealTracker> {
    let mut tracker =
        use_signal(|| RevealTracker::new(count, landing_config().animations.reveal_stagger()));

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&observer_script(group));
            loop {
                match eval.recv::<usize>().await {
                    Ok(index) => {
                        if tracker.write().on_intersect(index) {
                            tracing::trace!(group, index, "Card revealed");
                        }
                    }
                    Err(e) => {
                        tracing::debug!(group, "Reveal observer stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    tracker
}

/// Inline style carrying the staggered transition delay.
pub fn reveal_style(tracker: &RevealTracker, index: usize) -> String {
    format!("transition-delay: {}ms;", tracker.delay_for(index).as_millis())
}

fn observer_script(group: &str) -> String {
    format!(
        r#"
        const observer = new IntersectionObserver((entries) => {{
            entries.forEach((entry) => {{
                if (entry.isIntersecting) {{
                    dioxus.send(Number(entry.target.dataset.index));
                }}
            }});
        }}, {{ threshold: 0.1, rootMargin: '0px 0px -50px 0px' }});
        document.querySelectorAll('[data-reveal="{group}"]').forEach((el) => observer.observe(el));
        await new Promise(() => {{}});
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn style_uses_index_stagger() {
        let tracker = RevealTracker::new(3, Duration::from_millis(100));
        assert_eq!(reveal_style(&tracker, 0), "transition-delay: 0ms;");
        assert_eq!(reveal_style(&tracker, 2), "transition-delay: 200ms;");
    }

    #[test]
    fn observer_targets_group() {
        assert!(observer_script("services").contains(r#"[data-reveal="services"]"#));
    }
}
