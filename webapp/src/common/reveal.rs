use dioxus::prelude::*;
use tracing::{debug, warn};

use staytrack::scroll::RevealOnce;

// streams the visible ratio of one element; retries on the next frame until
// the element is mounted, and disconnects once it has been seen
fn visibility_watch_js(element_id: &str, threshold: f64) -> String {
    format!(
        r#"
const watch = () => {{
    const el = document.getElementById("{element_id}");
    if (!el) {{
        requestAnimationFrame(watch);
        return;
    }}
    const observer = new IntersectionObserver(
        (entries) => entries.forEach((entry) => {{
            dioxus.send(entry.intersectionRatio);
            if (entry.intersectionRatio >= {threshold}) {{
                observer.disconnect();
            }}
        }}),
        {{ threshold: [0, {threshold}, 0.5, 1] }},
    );
    observer.observe(el);
}};
watch();
"#
    )
}

/// Latches once the element with `element_id` has been at least `threshold`
/// on screen.
///
/// If the browser can't report visibility the element is revealed straight
/// away rather than left hidden.
pub fn use_reveal(element_id: &'static str, threshold: f64) -> Signal<RevealOnce> {
    let mut reveal_signal = use_signal(RevealOnce::new);

    use_future(move || async move {
        let mut watcher = document::eval(&visibility_watch_js(element_id, threshold));

        while !reveal_signal.peek().is_revealed() {
            match watcher.recv::<f64>().await {
                Ok(ratio) => {
                    if reveal_signal.write().observe(ratio, threshold) {
                        debug!({element = element_id, ratio = ratio}, "revealed");
                    }
                }
                Err(err) => {
                    warn!("visibility watcher for {element_id} stopped, revealing: {err:?}");
                    reveal_signal.write().force();
                    break;
                }
            }
        }
    });

    reveal_signal
}
