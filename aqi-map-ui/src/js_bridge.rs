//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet and Leaflet.markercluster are injected from unpkg on first use.
//! The marker map script lives in `assets/js/marker-map.js`, is embedded at
//! compile time and evaluated as a global once Leaflet is ready. This module
//! serializes the map description and calls those globals.

use wasm_bindgen::JsValue;

static MARKER_MAP_JS: &str = include_str!("../assets/js/marker-map.js");

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const MARKERCLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const MARKERCLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const MARKERCLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AQI JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        warn(&err);
    }
}

fn warn(err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str("AQI JS eval failed:"), err);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Inject Leaflet, wait for it, then install the marker map script.
///
/// Safe to call more than once: stylesheets and scripts are only added when
/// their element ids are absent, and the script is installed once.
pub fn init_map() {
    let store_js = format!(
        "window.__aqiMapScript = window.__aqiMapScript || {};",
        js_string(MARKER_MAP_JS)
    );
    call_js(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__aqiMapInit) return;
            window.__aqiMapInit = true;
            function addCss(id, href) {{
                if (document.getElementById(id)) return;
                var link = document.createElement('link');
                link.id = id; link.rel = 'stylesheet'; link.href = href;
                document.head.appendChild(link);
            }}
            function addScript(id, src, onload) {{
                if (document.getElementById(id)) {{ if (onload) onload(); return; }}
                var s = document.createElement('script');
                s.id = id; s.src = src; s.onload = onload;
                document.head.appendChild(s);
            }}
            addCss('aqi-leaflet-css', {leaflet_css});
            addCss('aqi-markercluster-css', {cluster_css});
            addCss('aqi-markercluster-default-css', {cluster_default_css});
            addScript('aqi-leaflet-js', {leaflet_js}, function() {{
                addScript('aqi-markercluster-js', {cluster_js});
            }});
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && typeof L.markerClusterGroup !== 'undefined') {{
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__aqiMapScript);
                    delete window.__aqiMapScript;
                    if (typeof renderMarkerMap !== 'undefined') window.renderMarkerMap = renderMarkerMap;
                    if (typeof destroyMarkerMap !== 'undefined') window.destroyMarkerMap = destroyMarkerMap;
                    window.__aqiMapReady = true;
                    console.log('AQI map initialized');
                }}
            }}, 100);
        }})();
        "#,
        leaflet_css = js_string(LEAFLET_CSS),
        cluster_css = js_string(MARKERCLUSTER_CSS),
        cluster_default_css = js_string(MARKERCLUSTER_DEFAULT_CSS),
        leaflet_js = js_string(LEAFLET_JS),
        cluster_js = js_string(MARKERCLUSTER_JS),
    );
    call_js(&init_js);
}

/// Draw (or redraw) the marker map described by `view_json` into a container.
///
/// `view_json` is a serialized `aqi_core::map_view::MapView`. Uses a polling
/// loop to wait for Leaflet, the map script and the container DOM element.
pub fn render_marker_map(container_id: &str, view_json: &str) {
    let id = js_string(container_id);
    let view = js_string(view_json);
    call_js(&format!(
        r#"
        (function() {{
            if (window.__aqiMapPoll) clearInterval(window.__aqiMapPoll);
            window.__aqiMapPoll = setInterval(function() {{
                if (window.__aqiMapReady &&
                    typeof window.renderMarkerMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(window.__aqiMapPoll);
                    window.__aqiMapPoll = null;
                    try {{
                        window.renderMarkerMap({id}, {view});
                    }} catch(e) {{ console.error('[AQI] renderMarkerMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the map in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyMarkerMap !== 'undefined') {{ window.destroyMarkerMap({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}",
        id = js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("aqi-map"), "\"aqi-map\"");
        assert_eq!(js_string("it's \"x\"\n"), "\"it's \\\"x\\\"\\n\"");
    }

    #[test]
    fn marker_map_script_defines_entry_points() {
        assert!(MARKER_MAP_JS.contains("function renderMarkerMap"));
        assert!(MARKER_MAP_JS.contains("function destroyMarkerMap"));
        assert!(MARKER_MAP_JS.contains("markerClusterGroup"));
    }
}
