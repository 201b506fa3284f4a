//! Terminal summaries for classified models.
//!
//! Formatting is kept in one place so:
//! - the client/model code stays clean and testable
//! - output changes are localized

use crate::models::Model;

/// One summary line per model, with a header and a count footer.
pub fn format_model_list(models: &[Model]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>8}  {:<28} {}\n",
        "VARIANT", "ID", "SLUG", "LABEL"
    ));
    for model in models {
        out.push_str(&format_model_line(model));
        out.push('\n');
    }
    out.push_str(&format!("n={}\n", models.len()));

    out
}

/// One aligned summary line: variant, id, slug, label.
pub fn format_model_line(model: &Model) -> String {
    format!(
        "{:<12} {:>8}  {:<28} {}",
        model.variant().display_name(),
        model.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
        model.slug().unwrap_or("-"),
        model.label().unwrap_or("-"),
    )
}

/// Multi-line detail view for a single model.
pub fn format_model_detail(model: &Model) -> String {
    let mut out = String::new();

    out.push_str(model.variant().display_name());
    if let Some(id) = model.id() {
        out.push_str(&format!(" #{id}"));
    }
    if let Some(slug) = model.slug() {
        out.push_str(&format!(" ({slug})"));
    }
    out.push('\n');

    if let Some(label) = model.label() {
        out.push_str(&format!("- label : {label}\n"));
    }
    if let Some(link) = model.link() {
        out.push_str(&format!("- link  : {link}\n"));
    }

    let names = model.field_names();
    out.push_str(&format!("- fields: {}\n", names.len()));
    if !names.is_empty() {
        out.push_str(&format!("  {}\n", names.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::factory;
    use serde_json::json;

    fn page() -> Model {
        let record = json!({
            "id": 12,
            "type": "page",
            "slug": "about-us",
            "title": {"rendered": "About us"},
            "link": "https://example.com/about-us"
        });
        match record {
            serde_json::Value::Object(map) => factory::create(&map, None),
            _ => unreachable!(),
        }
    }

    #[test]
    fn line_holds_variant_id_slug_and_label() {
        let line = format_model_line(&page());
        assert!(line.starts_with("Page"));
        assert!(line.contains("12"));
        assert!(line.contains("about-us"));
        assert!(line.ends_with("About us"));
    }

    #[test]
    fn list_has_header_and_count() {
        let models = vec![page(), page()];
        let text = format_model_list(&models);
        assert!(text.starts_with("VARIANT"));
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("n=2\n"));
    }

    #[test]
    fn detail_lists_populated_field_names() {
        let text = format_model_detail(&page());
        assert!(text.starts_with("Page #12 (about-us)"));
        assert!(text.contains("- fields: 5"));
        assert!(text.contains("title"));
    }
}
