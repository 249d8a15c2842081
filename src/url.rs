use wasm_bindgen::JsValue;
use web_sys as web;

fn current_url() -> anyhow::Result<web::Url> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let href = window
        .location()
        .href()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    web::Url::new(&href).map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Query pairs of the page URL, in order.
pub fn initial_query_pairs() -> anyhow::Result<Vec<(String, String)>> {
    let url = current_url()?;
    let params: JsValue = url.search_params().into();
    let iter = js_sys::try_iter(&params)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("URLSearchParams is not iterable"))?;
    let mut pairs = Vec::new();
    for entry in iter {
        let entry = js_sys::Array::from(&entry.map_err(|e| anyhow::anyhow!("{:?}", e))?);
        if let (Some(k), Some(v)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            pairs.push((k, v));
        }
    }
    Ok(pairs)
}

/// Merge `pairs` into the current URL and replace the history entry.
/// Keys not in `pairs` are left untouched.
pub fn sync(pairs: &[(String, String)]) {
    let url = match current_url() {
        Ok(u) => u,
        Err(e) => {
            log::warn!("[url] cannot read location: {:?}", e);
            return;
        }
    };
    let search = url.search_params();
    for (k, v) in pairs {
        search.set(k, v);
    }
    if let Some(history) = web::window().and_then(|w| w.history().ok()) {
        _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()));
    }
}
