use super::{IMPORT_PANEL, IMPORT_TABLE, KEY_TABLE};
use crate::shared::callbacks::{CallbackContext, CallbackError};
use crate::shared::dom;
use contracts::domain::settings::{ImportReport, KeyImported};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Clone)]
struct LogRow {
    section: String,
    name: String,
    value: String,
    error: bool,
}

fn rows(report: &ImportReport) -> Vec<LogRow> {
    report
        .log
        .iter()
        .flat_map(|section| {
            section.value.iter().map(move |line| LogRow {
                section: section.name.clone(),
                name: line.name.clone(),
                value: line.value_text(),
                error: line.is_error(),
            })
        })
        .collect()
}

#[component]
fn ImportLogRow(row: LogRow) -> impl IntoView {
    if row.error {
        view! {
            <tr class="form-feedback danger text-danger">
                <td>{row.section}</td>
                <td>{row.name}</td>
                <td><b>{row.value}</b></td>
            </tr>
        }
        .into_any()
    } else {
        view! {
            <tr class="form-feedback">
                <td>{row.section}</td>
                <td>{row.name}</td>
                <td>{row.value}</td>
            </tr>
        }
        .into_any()
    }
}

fn required(selector: &str) -> Result<Element, CallbackError> {
    dom::query(selector).ok_or_else(|| CallbackError::MissingElement(selector.to_string()))
}

/// Fill the import log table and colour the panel after the outcome.
///
/// Registered both as success and as error callback of the import form.
pub fn import_log(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let report: ImportReport = ctx.payload()?;
    let table = required(IMPORT_TABLE)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CallbackError::Dom(format!("{} is not an element", IMPORT_TABLE)))?;
    let panel = required(IMPORT_PANEL)?;

    let lines = rows(&report);
    log::debug!("import log: {} lines, failed: {}", lines.len(), report.failed());
    leptos::mount::mount_to(table, move || {
        lines
            .into_iter()
            .map(|row| view! { <ImportLogRow row=row/> })
            .collect_view()
    })
    .forget();

    let (remove, add) = if report.failed() {
        ("panel-success", "panel-danger")
    } else {
        ("panel-danger", "panel-success")
    };
    let classes = panel.class_list();
    let _ = classes.remove_1(remove);
    let _ = classes.add_1(add);

    dom::set_visible(&panel, true);
    if let Some(panel) = panel.dyn_ref::<HtmlElement>() {
        let _ = panel.style().set_property("display", "block");
    }
    Ok(())
}

pub fn import_key(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let imported: KeyImported = ctx.payload()?;
    dom::append_html(&required(KEY_TABLE)?, &imported.key);
    Ok(())
}

pub fn update_user(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    log::info!("user updated: {:?}", ctx.body.success().success);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_flatten_sections_in_order() {
        let report: ImportReport = serde_json::from_str(
            r#"{"log":[
                {"name":"core","value":[{"name":"Signature","value":"valid"}]},
                {"name":"inventory","value":[
                    {"name":"Molecules","value":12},
                    {"name":"Archive","value":"broken","type":"error"}
                ]}
            ]}"#,
        )
        .unwrap();
        let rows = rows(&report);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].section, "core");
        assert_eq!(rows[1].value, "12");
        assert!(rows[2].error);
        assert!(!rows[0].error);
    }
}
