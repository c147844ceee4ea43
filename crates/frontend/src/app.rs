use crate::shared::dom;
use crate::shared::form::FormController;
use crate::system::config::AppConfig;

/// Run `f` once the document is parsed.
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = dom::document() else {
        log::error!("no document to attach to");
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    dom::on(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// Wire the shared controllers and the bindings of the current page.
pub fn boot(config: AppConfig) {
    config.install();

    let registry = config.page.map(|page| page.callbacks()).unwrap_or_default();
    log::debug!("{} form callbacks registered", registry.len());
    FormController::install(registry, &config);

    match config.page {
        Some(page) => {
            page.boot();
            log::info!("page `{}` ready", page);
        }
        None => log::info!("no page bindings, forms only"),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Page;
    use crate::system::config::AppConfig;

    #[test]
    fn page_less_config_has_no_callbacks() {
        let config = AppConfig::from_attributes(|_| None);
        let registry = config.page.map(|page| page.callbacks()).unwrap_or_default();
        assert!(registry.is_empty());
    }

    #[test]
    fn drugs_page_reuses_medicine_callbacks() {
        let config = AppConfig::from_attributes(|name| (name == "data-page").then(|| "drugs".to_string()));
        assert_eq!(config.page, Some(Page::Drugs));
    }
}
