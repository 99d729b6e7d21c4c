use dioxus::prelude::*;

use crate::core::data::{SnapshotMetric, StateSnapshotRow};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Download panel for the currently filtered snapshot table.
///
/// JSON lands on the clipboard and as a download; CSV is download-only. On
/// desktop both are written under the app data directory instead.
#[component]
pub fn ExportPanel(rows: Vec<StateSnapshotRow>) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let mut busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("export-panel__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "export-panel__meta export-panel__meta--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__meta export-panel__meta--error".to_string(),
            err.clone(),
        )),
    };

    let json_handler = {
        let export_rows = rows.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            status.set(ExportStatus::Working("Preparing JSON"));
            let export_rows = export_rows.clone();
            spawn(async move {
                match perform_json_export(export_rows).await {
                    Ok(message) => status.set(ExportStatus::Done(message)),
                    Err(err) => status.set(ExportStatus::Error(err)),
                }
                busy.set(false);
            });
        }
    };

    let csv_handler = {
        let export_rows = rows.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            status.set(ExportStatus::Working("Preparing CSV"));
            let export_rows = export_rows.clone();
            spawn(async move {
                match perform_csv_export(export_rows).await {
                    Ok(message) => status.set(ExportStatus::Done(message)),
                    Err(err) => status.set(ExportStatus::Error(err)),
                }
                busy.set(false);
            });
        }
    };

    let row_count = rows.len();

    rsx! {
        section { class: "export-panel",
            div { class: "export-panel__header",
                h3 { "Export" }
                span { class: "export-panel__meta", "{row_count} states in view" }
            }

            if row_count == 0 {
                p { class: "export-panel__placeholder",
                    "Exports unlock once at least one state matches the filters."
                }
            } else {
                div { class: "export-panel__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: json_handler,
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: csv_handler,
                        "Export CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_json_export(rows: Vec<StateSnapshotRow>) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&rows).map_err(|err| err.to_string())?;
    copy_to_clipboard(json.clone()).await?;
    let filename = format!("dq-atlas-states-{}.json", timestamp_slug());
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("JSON copied and saved to {path}"),
        None => "JSON copied to clipboard and download started".to_string(),
    })
}

async fn perform_csv_export(rows: Vec<StateSnapshotRow>) -> Result<String, String> {
    let csv = build_csv(&rows);
    let filename = format!("dq-atlas-states-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

fn build_csv(rows: &[StateSnapshotRow]) -> String {
    let mut header: Vec<String> = vec!["State".to_string()];
    header.extend(SnapshotMetric::SUB_SCORES.iter().map(|m| m.label().to_string()));
    header.push("Overall Score".to_string());
    header.push("Quality Rating".to_string());

    let mut lines = vec![header
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(",")];

    for row in rows {
        let mut fields = vec![row.state.clone()];
        fields.extend(
            SnapshotMetric::SUB_SCORES
                .iter()
                .map(|m| m.value(row).to_string()),
        );
        fields.push(row.overall_score.to_string());
        fields.push(row.rating().label().to_string());
        lines.push(
            fields
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "DQ Atlas", "DQ Atlas")
        .ok_or("Unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sample_snapshot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn csv_has_a_header_plus_one_line_per_row() {
        let rows = sample_snapshot(&mut StdRng::seed_from_u64(41));
        let csv = build_csv(&rows);
        assert_eq!(csv.lines().count(), rows.len() + 1);
        assert!(csv.starts_with("State,Enrollment Completeness,"));
        assert!(csv.contains("Alabama,"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn csv_rows_carry_the_derived_rating_label() {
        let rows = sample_snapshot(&mut StdRng::seed_from_u64(42));
        let csv = build_csv(&rows);
        let first_data_line = csv.lines().nth(1).unwrap();
        assert!(first_data_line.ends_with(rows[0].rating().label()));
    }

    #[test]
    fn escape_csv_quotes_fields_with_separators() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv(""), "");
    }
}
