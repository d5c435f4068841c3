//! Webview bridge.
//!
//! The page lives in the desktop webview, so window scroll events, element
//! measurement and smooth scrolling all go through `document::eval`. This
//! module keeps the JavaScript in one place; everything it learns is handed
//! to the core types (`ScrollSignal`, `ViewportSnapshot`, `ScrollRequest`).

use casadeoro_core::{ScrollRequest, ScrollSignal, SiteError, SiteResult, ViewportSnapshot};
use dioxus::prelude::*;

/// Installs the window scroll listener (replacing any previous one) and the
/// reveal observer, then streams `scrollY` back on every scroll event.
const ATTACH_SCRIPT: &str = r#"
if (window.__casaScroll) {
  window.removeEventListener('scroll', window.__casaScroll);
}
const send = () => dioxus.send(window.scrollY);
window.__casaScroll = send;
window.addEventListener('scroll', send, { passive: true });
send();

if (window.__casaReveal) { window.__casaReveal.disconnect(); }
if (window.__casaMutations) { window.__casaMutations.disconnect(); }
const reveal = new IntersectionObserver((entries) => {
  for (const entry of entries) {
    entry.target.classList.toggle('in-view', entry.isIntersecting);
  }
}, { threshold: 0.15 });
const watch = (root) => {
  if (root.matches && root.matches('[data-reveal]')) { reveal.observe(root); }
  if (root.querySelectorAll) { root.querySelectorAll('[data-reveal]').forEach((el) => reveal.observe(el)); }
};
watch(document);
const mutations = new MutationObserver((records) => {
  for (const record of records) {
    record.addedNodes.forEach((node) => { if (node.nodeType === 1) { watch(node); } });
  }
});
mutations.observe(document.body, { childList: true, subtree: true });
window.__casaReveal = reveal;
window.__casaMutations = mutations;
"#;

/// Removes everything `ATTACH_SCRIPT` installed.
const DETACH_SCRIPT: &str = r#"
if (window.__casaScroll) {
  window.removeEventListener('scroll', window.__casaScroll);
  window.__casaScroll = null;
}
if (window.__casaReveal) { window.__casaReveal.disconnect(); window.__casaReveal = null; }
if (window.__casaMutations) { window.__casaMutations.disconnect(); window.__casaMutations = null; }
"#;

/// Forward webview scroll offsets into `signal` until the bridge closes.
///
/// Runs as a task scoped to the page component, so it stops on unmount.
pub async fn pump_scroll_offsets(signal: ScrollSignal) {
    let mut eval = document::eval(ATTACH_SCRIPT);
    tracing::debug!("Scroll bridge attached");

    loop {
        match eval.recv::<f64>().await {
            Ok(offset) => signal.dispatch(offset),
            Err(e) => {
                tracing::warn!(error = ?e, "Scroll bridge closed");
                break;
            }
        }
    }
}

/// Remove the window scroll listener and reveal observer
pub fn detach_scroll_listener() {
    let _ = document::eval(DETACH_SCRIPT);
    tracing::debug!("Scroll bridge detached");
}

/// Script returning `{ offset, regions, reduced_motion }` for the given anchor ids
fn measure_script(ids: &[&str]) -> SiteResult<String> {
    let ids = serde_json::to_string(ids)?;
    Ok(format!(
        r#"
const ids = {ids};
const regions = {{}};
for (const id of ids) {{
  const el = document.getElementById(id);
  if (el) {{ regions[id] = el.getBoundingClientRect().top; }}
}}
const reduced_motion = window.matchMedia('(prefers-reduced-motion: reduce)').matches;
return {{ offset: window.pageYOffset, regions, reduced_motion }};
"#
    ))
}

/// Measure the page offset, motion preference and the top edge of each
/// region in `ids`
pub async fn measure_viewport(ids: &[&str]) -> SiteResult<ViewportSnapshot> {
    let script = measure_script(ids)?;
    document::eval(&script)
        .join::<ViewportSnapshot>()
        .await
        .map_err(|e| SiteError::Bridge(format!("{:?}", e)))
}

/// Start the given scroll requests. Does not wait for the animation.
pub fn perform(requests: Vec<ScrollRequest>) {
    for request in requests {
        tracing::trace!(seq = request.seq, top = request.top, "Performing scroll");
        let _ = document::eval(&request.to_script());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_script_embeds_ids_as_json() {
        let script = measure_script(&["location"]).unwrap();
        assert!(script.contains(r#"const ids = ["location"];"#));
        assert!(script.contains("return { offset: window.pageYOffset, regions, reduced_motion };"));
        assert!(script.contains("prefers-reduced-motion: reduce"));
    }

    #[test]
    fn measure_script_escapes_quotes() {
        let script = measure_script(&["a\"b"]).unwrap();
        assert!(script.contains(r#"["a\"b"]"#));
    }

    #[test]
    fn detach_undoes_attach_globals() {
        for global in ["__casaScroll", "__casaReveal", "__casaMutations"] {
            assert!(ATTACH_SCRIPT.contains(global));
            assert!(DETACH_SCRIPT.contains(&format!("window.{} = null", global)));
        }
    }
}
