use super::Accordion;
use crate::shared::callbacks::{CallbackContext, CallbackError};
use crate::shared::dom;
use crate::shared::filter::dom::ListFilter;
use contracts::domain::inventory::ArticleUpdate;

/// Re-render an article after an edit and keep it open.
pub fn reload_article(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let update: ArticleUpdate = ctx.payload()?;
    let id = format!("item-{}", update.id);
    let article = dom::by_id(&id).ok_or_else(|| CallbackError::MissingElement(id.clone()))?;
    article.set_outer_html(&update.content);

    let article = dom::by_id(&id).ok_or(CallbackError::MissingElement(id))?;
    if let Some(accordion) = Accordion::current() {
        accordion.collapse_all();
        accordion.expand(&article);
    }
    if let Some(filter) = ListFilter::current() {
        filter.refresh();
    }
    Ok(())
}
