use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{models::wedding::WeddingData, ports::WeddingRepository};
use crate::error::AppError;

pub const MSG_WEDDING_NOT_FOUND: &str = "Casamento não encontrado";

#[derive(Debug, Serialize)]
pub struct WeddingDetails {
    pub bride: String,
    pub groom: String,
    pub date: String,
    pub day_of_week: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub rsvp_numbers: Value,
}

/// Render-ready view of a wedding configuration.
#[derive(Debug, Serialize)]
pub struct WeddingPresentation {
    pub wedding_details: WeddingDetails,
    pub invitation_text: Option<String>,
    pub ceremony_types: Value,
    pub wedding_program: Value,
    pub design_elements: Value,
}

/// Looks up the configuration for `slug`, or the most recently created one
/// when no slug is given.
pub async fn resolve(repo: &dyn WeddingRepository, slug: Option<&str>) -> Result<WeddingPresentation, AppError> {
    let not_found = || AppError::NotFound(MSG_WEDDING_NOT_FOUND.into());

    let data = match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            let wedding = repo.find_by_slug(slug).await?.ok_or_else(not_found)?;
            repo.find_data_by_wedding_id(&wedding.id).await?.ok_or_else(not_found)?
        }
        None => repo.find_latest_data().await?.ok_or_else(not_found)?,
    };

    present(data)
}

pub fn present(data: WeddingData) -> Result<WeddingPresentation, AppError> {
    let rsvp_numbers = parse_json("rsvp_numbers", data.rsvp_numbers_json.as_deref(), empty_list)?;
    let ceremony_types = parse_json("ceremony_types", data.ceremony_types_json.as_deref(), empty_list)?;
    let wedding_program = parse_json("wedding_program", data.wedding_program_json.as_deref(), empty_list)?;
    let design_elements = parse_json("design_elements", data.design_elements_json.as_deref(), empty_object)?;

    Ok(WeddingPresentation {
        wedding_details: WeddingDetails {
            bride: data.bride,
            groom: data.groom,
            date: data.date,
            day_of_week: data.day_of_week,
            time: data.time,
            venue: data.venue,
            rsvp_numbers,
        },
        invitation_text: data.invitation_text,
        ceremony_types,
        wedding_program,
        design_elements,
    })
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

// NULL, blank and JSON `null` all collapse to the default.
fn parse_json(field: &str, raw: Option<&str>, default: fn() -> Value) -> Result<Value, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(default());
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => Ok(default()),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::InternalWithMsg(format!("Invalid JSON in wedding_data.{}: {}", field, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn data() -> WeddingData {
        WeddingData {
            id: "wd-1".into(),
            wedding_id: "w-1".into(),
            bride: "Joana".into(),
            groom: "Pedro".into(),
            date: "2025-11-22".into(),
            day_of_week: Some("Sábado".into()),
            time: Some("16:00".into()),
            venue: Some("Quinta das Flores".into()),
            rsvp_numbers_json: None,
            invitation_text: Some("Com a bênção de Deus...".into()),
            ceremony_types_json: None,
            wedding_program_json: None,
            design_elements_json: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_collections_get_defaults() {
        let view = present(data()).unwrap();
        let rendered = serde_json::to_value(&view).unwrap();

        assert_eq!(rendered["wedding_details"]["bride"], "Joana");
        assert_eq!(rendered["wedding_details"]["day_of_week"], "Sábado");
        assert_eq!(rendered["wedding_details"]["rsvp_numbers"], json!([]));
        assert_eq!(rendered["invitation_text"], "Com a bênção de Deus...");
        assert_eq!(rendered["ceremony_types"], json!([]));
        assert_eq!(rendered["wedding_program"], json!([]));
        assert_eq!(rendered["design_elements"], json!({}));
    }

    #[test]
    fn test_stored_json_is_passed_through() {
        let mut raw = data();
        raw.rsvp_numbers_json = Some(r#"["+258 84 000 0000"]"#.into());
        raw.ceremony_types_json = Some(r#"[{"type":"civil"},{"type":"religioso"}]"#.into());
        raw.wedding_program_json = Some("null".into());
        raw.design_elements_json = Some(r##"{"primary_color":"#c9a227"}"##.into());

        let rendered = serde_json::to_value(present(raw).unwrap()).unwrap();
        assert_eq!(rendered["wedding_details"]["rsvp_numbers"][0], "+258 84 000 0000");
        assert_eq!(rendered["ceremony_types"].as_array().unwrap().len(), 2);
        assert_eq!(rendered["wedding_program"], json!([]));
        assert_eq!(rendered["design_elements"]["primary_color"], "#c9a227");
    }

    #[test]
    fn test_corrupt_json_is_a_server_error() {
        let mut raw = data();
        raw.design_elements_json = Some("{not json".into());
        assert!(matches!(present(raw), Err(AppError::InternalWithMsg(_))));
    }
}
