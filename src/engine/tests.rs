use anyhow::Result;
use serde_json::{Value, json};

use super::*;

fn text(value: &str) -> RawCell {
    RawCell::Text(value.to_string())
}

fn columns(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn row(cells: &[(&str, CellValue)]) -> PathKeyedRow {
    cells
        .iter()
        .map(|(path, value)| (*path, value.clone()))
        .collect()
}

fn convert_rows(columns: &[String], rows: &[Vec<RawCell>], range: RowRange) -> Result<Conversion> {
    Scanner::new(columns)?.run(rows, range)
}

fn to_json(document: &OutputDocument) -> Value {
    serde_json::to_value(document).expect("document serializes")
}

#[test]
fn normalize_coerces_numeric_strings_exactly() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    assert_eq!(normalizer.normalize(&text("5.0")), CellValue::Integer(5));
    assert_eq!(normalizer.normalize(&text("5.5")), CellValue::Float(5.5));
    assert_eq!(normalizer.normalize(&text("  abc ")), CellValue::Text("abc".to_string()));
    assert_eq!(normalizer.normalize(&text("12")), CellValue::Integer(12));
    assert_eq!(normalizer.normalize(&text(".5")), CellValue::Float(0.5));
}

#[test]
fn normalize_keeps_negatives_exponents_and_padded_codes_as_text() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    assert_eq!(normalizer.normalize(&text("-3")), CellValue::Text("-3".to_string()));
    assert_eq!(normalizer.normalize(&text("1e5")), CellValue::Text("1e5".to_string()));
    assert_eq!(normalizer.normalize(&text("1.2.3")), CellValue::Text("1.2.3".to_string()));
    assert_eq!(normalizer.normalize(&text("01")), CellValue::Text("01".to_string()));
    assert_eq!(normalizer.normalize(&RawCell::Int(-4)), CellValue::Text("-4".to_string()));
    assert_eq!(normalizer.normalize(&text("0.25")), CellValue::Float(0.25));
}

#[test]
fn normalize_handles_typed_cells() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
        .and_then(|date| date.and_hms_opt(13, 45, 0))
        .expect("valid timestamp");

    assert_eq!(
        normalizer.normalize(&RawCell::Timestamp(ts)),
        CellValue::Text("2024-01-31".to_string())
    );
    assert_eq!(normalizer.normalize(&RawCell::Float(3.0)), CellValue::Integer(3));
    assert_eq!(normalizer.normalize(&RawCell::Float(f64::NAN)), CellValue::Null);
    assert_eq!(normalizer.normalize(&text(" nan ")), CellValue::Null);
    assert_eq!(normalizer.normalize(&RawCell::Empty), CellValue::Null);
}

#[test]
fn normalize_keeps_out_of_range_integers_as_text() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    assert_eq!(
        normalizer.normalize(&text("99999999999999999999")),
        CellValue::Text("99999999999999999999".to_string())
    );
    assert_eq!(
        normalizer.normalize(&text("99999999999999999999.0")),
        CellValue::Text("99999999999999999999.0".to_string())
    );
    assert_eq!(
        normalizer.normalize(&text("9223372036854775807")),
        CellValue::Integer(i64::MAX)
    );
}

#[test]
fn normalize_renders_booleans_capitalized() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    assert_eq!(normalizer.normalize(&RawCell::Bool(true)), CellValue::Text("True".to_string()));
    assert_eq!(normalizer.normalize(&RawCell::Bool(false)), CellValue::Text("False".to_string()));
}

#[test]
fn normalize_turns_whitespace_into_empty_text() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    assert!(!text("   ").is_blank());
    assert_eq!(normalizer.normalize(&text("   ")), CellValue::Text(String::new()));
}

#[test]
fn fill_down_repeats_last_value_until_replaced() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    let mut state = FillDownState::new();
    let cells = [text("A"), RawCell::Empty, text("nan"), text("B"), RawCell::Empty];

    let resolved: Vec<CellValue> = cells
        .iter()
        .map(|cell| state.resolve(&normalizer, "col", cell))
        .collect();

    let expected: Vec<CellValue> = ["A", "A", "A", "B", "B"]
        .iter()
        .map(|value| CellValue::Text(value.to_string()))
        .collect();
    assert_eq!(resolved, expected);
}

#[test]
fn fill_down_treats_whitespace_as_a_new_value() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    let mut state = FillDownState::new();

    assert_eq!(state.resolve(&normalizer, "col", &text("A")), CellValue::Text("A".to_string()));
    assert_eq!(state.resolve(&normalizer, "col", &text("  ")), CellValue::Text(String::new()));
    assert_eq!(state.resolve(&normalizer, "col", &RawCell::Empty), CellValue::Text(String::new()));
}

#[test]
fn whitespace_cell_does_not_inherit_previous_row() {
    let columns = columns(&[paths::ACT_TYPE, paths::DATE_ENTRY]);
    let rows = vec![vec![text("X"), text("r1")], vec![text("   "), text("r2")]];

    let conversion = convert_rows(&columns, &rows, RowRange::default()).expect("conversion");

    assert_eq!(conversion.documents.len(), 2);
    assert_eq!(conversion.documents[0].act_type.as_deref(), Some("X"));
    assert_eq!(conversion.documents[1].date_entry.as_deref(), Some("r2"));
    assert_eq!(conversion.documents[1].act_type.as_deref(), Some(""));
}

#[test]
fn fill_down_without_prior_value_is_null() {
    let normalizer = CellNormalizer::new().expect("normalizer");
    let mut state = FillDownState::new();
    assert_eq!(state.resolve(&normalizer, "col", &RawCell::Empty), CellValue::Null);
    assert_eq!(state.len(), 0);
}

#[test]
fn template_has_every_top_level_key_even_when_empty() {
    let value = to_json(&OutputDocument::template());
    assert_eq!(
        value,
        json!({
            "date_entry": null,
            "municipality": { "code": null, "name": null },
            "act_type": null,
            "decision_regul_quan_number": null,
            "decision_regul_quan_date": null,
            "hunting_ground_id": { "name": null, "municipalities": [] },
            "detected_disease_id": {
                "hunting_ground_id": { "name": null, "municipalities": [] },
                "animal_species": { "name": null, "name_lat": null },
                "diseases": { "name": null },
                "date_onset_disease": null
            },
            "bound_data": {
                "regulation_quantity_hunting_resources": [],
                "issued_permits_quantity": [],
                "extraction_hunting_resources_results": []
            }
        })
    );

    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 8);
}

#[test]
fn build_document_keeps_shape_for_unmapped_row() {
    let document = build_document(&row(&[("comment", CellValue::Text("x".to_string()))]))
        .expect("document");
    assert_eq!(document, OutputDocument::template());
    assert!(!carries_data(&document).expect("check"));
}

#[test]
fn simple_fields_are_stringified() {
    let document = build_document(&row(&[
        (paths::DATE_ENTRY, CellValue::Text("2024-02-01".to_string())),
        (paths::DECISION_NUMBER, CellValue::Integer(42)),
        (paths::MUNICIPALITY_CODE, CellValue::Integer(7)),
        (paths::HUNTING_GROUND_NAME, CellValue::Text("Северное".to_string())),
    ]))
    .expect("document");

    assert_eq!(document.date_entry.as_deref(), Some("2024-02-01"));
    assert_eq!(document.decision_regul_quan_number.as_deref(), Some("42"));
    assert_eq!(document.municipality.code, CellValue::Integer(7));
    assert_eq!(
        document.hunting_ground_id.name,
        CellValue::Text("Северное".to_string())
    );
    assert!(document.act_type.is_none());
}

#[test]
fn municipality_slots_are_capped_at_two() {
    let document = build_document(&row(&[
        ("hunting_ground_id/municipalities/0/code", CellValue::Integer(101)),
        ("hunting_ground_id/municipalities/0/name", CellValue::Text("Первый".to_string())),
        ("hunting_ground_id/municipalities/1/name", CellValue::Text("Второй".to_string())),
        ("hunting_ground_id/municipalities/2/code", CellValue::Integer(303)),
        ("hunting_ground_id/municipalities/2/name", CellValue::Text("Третий".to_string())),
    ]))
    .expect("document");

    assert_eq!(
        to_json(&document)["hunting_ground_id"]["municipalities"],
        json!([
            { "code": "101", "name": "Первый" },
            { "code": null, "name": "Второй" }
        ])
    );
}

#[test]
fn municipality_slot_with_only_blank_values_is_skipped() {
    let document = build_document(&row(&[
        ("hunting_ground_id/municipalities/0/code", CellValue::Text("nan".to_string())),
        ("hunting_ground_id/municipalities/1/code", CellValue::Text("77".to_string())),
    ]))
    .expect("document");

    assert_eq!(
        to_json(&document)["hunting_ground_id"]["municipalities"],
        json!([{ "code": "77", "name": null }])
    );
}

#[test]
fn detected_disease_is_filled_only_when_it_has_data() {
    let document = build_document(&row(&[
        (paths::DISEASE_SPECIES_NAME, CellValue::Text("Кабан".to_string())),
        (paths::DISEASE_NAME, CellValue::Text("АЧС".to_string())),
        (
            "detected_disease_id/hunting_ground_id/municipalities/0/name",
            CellValue::Text("Район".to_string()),
        ),
    ]))
    .expect("document");

    assert_eq!(
        to_json(&document)["detected_disease_id"],
        json!({
            "hunting_ground_id": {
                "name": null,
                "municipalities": [{ "code": null, "name": "Район" }]
            },
            "animal_species": { "name": "Кабан", "name_lat": null },
            "diseases": { "name": "АЧС" },
            "date_onset_disease": null
        })
    );
}

#[test]
fn detected_disease_keeps_both_municipality_slots() {
    let slots = &paths::DISEASE_HUNTING_GROUND_MUNICIPALITIES;
    let document = build_document(&row(&[
        (paths::DISEASE_HUNTING_GROUND_NAME, CellValue::Text("Угодье".to_string())),
        (slots[0].code, CellValue::Text("01".to_string())),
        (slots[0].name, CellValue::Text("Первый".to_string())),
        (slots[1].code, CellValue::Integer(22)),
        (slots[1].name, CellValue::Text("Второй".to_string())),
        (
            "detected_disease_id/hunting_ground_id/municipalities/2/name",
            CellValue::Text("Третий".to_string()),
        ),
    ]))
    .expect("document");

    assert_eq!(
        to_json(&document)["detected_disease_id"]["hunting_ground_id"],
        json!({
            "name": "Угодье",
            "municipalities": [
                { "code": "01", "name": "Первый" },
                { "code": "22", "name": "Второй" }
            ]
        })
    );
}

#[test]
fn regulation_item_collects_fields_and_gated_tools() {
    let item = build_regulation_item(&row(&[
        (paths::regulation::HUNT_RES_NAME, CellValue::Text("Лось".to_string())),
        (paths::regulation::PLAN_QUANTITY, CellValue::Text("12".to_string())),
        (paths::regulation::START_DATE, CellValue::Text("2024-10-01".to_string())),
        (paths::regulation::HUNTING_TOOL, CellValue::Text("Карабин".to_string())),
        (paths::regulation::HUNTING_PRODUCT, CellValue::Text("nan".to_string())),
    ]))
    .expect("build")
    .expect("regulation item");

    assert_eq!(
        serde_json::to_value(&item).expect("json"),
        json!({
            "hunt_res_type": { "name": "Лось", "name_lat": null },
            "gender_hunt_res": { "name": null },
            "enum_age": { "name": null },
            "plan_mining_hunt_res_quantity": 12,
            "regulation_start_date": "2024-10-01",
            "regulation_end_date": null,
            "features": null,
            "quantity_regulation_method_id": { "name": null },
            "regulation_basis_id": { "name": null },
            "bound_data": {
                "permitted_hunting_tools": [{ "hunting_tool_id": { "name": "Карабин" } }],
                "permission_using_hunting_products": []
            }
        })
    );
}

#[test]
fn regulation_quantity_falls_back_to_raw_text() {
    let item = build_regulation_item(&row(&[(
        paths::regulation::PLAN_QUANTITY,
        CellValue::Text("по заявкам".to_string()),
    )]))
    .expect("build")
    .expect("regulation item");

    assert_eq!(
        item.plan_mining_hunt_res_quantity,
        CellValue::Text("по заявкам".to_string())
    );
}

#[test]
fn regulation_period_fills_blank_date_columns() {
    let item = build_regulation_item(&row(&[
        (
            paths::regulation::PERIOD,
            CellValue::Text("01.01.2024-31.12.2024".to_string()),
        ),
        (paths::regulation::END_DATE, CellValue::Text("2024-06-30".to_string())),
    ]))
    .expect("build")
    .expect("regulation item");

    assert_eq!(
        item.regulation_start_date,
        CellValue::Text("2024-01-01".to_string())
    );
    assert_eq!(
        item.regulation_end_date,
        CellValue::Text("2024-06-30".to_string())
    );
}

#[test]
fn regulation_item_is_none_without_data() {
    let item = build_regulation_item(&row(&[(
        paths::regulation::FEATURES,
        CellValue::Text("  ".to_string()),
    )]))
    .expect("build");
    assert!(item.is_none());
}

#[test]
fn permit_item_stringifies_each_permit_field_independently() {
    let item = build_permit_item(&row(&[
        (paths::permit::QUANTITY, CellValue::Float(3.7)),
        (paths::permit::NUMBER, CellValue::Integer(123456)),
        (paths::permit::DATE, CellValue::Text("2024-09-01".to_string())),
    ]))
    .expect("build")
    .expect("permit item");

    assert_eq!(
        serde_json::to_value(&item).expect("json"),
        json!({
            "hunting_permits_quantity": 3,
            "bound_data": {
                "issued_permits": [{
                    "hunting_permit_id": {
                        "series_permission": null,
                        "number_permission": "123456",
                        "date_permission": "2024-09-01"
                    }
                }]
            }
        })
    );
}

#[test]
fn permit_item_without_permit_fields_has_no_issued_permits() {
    let item = build_permit_item(&row(&[(paths::permit::QUANTITY, CellValue::Integer(5))]))
        .expect("build")
        .expect("permit item");
    assert_eq!(item.hunting_permits_quantity, CellValue::Integer(5));
    assert!(item.bound_data.issued_permits.is_empty());
}

#[test]
fn extraction_item_keeps_zero_counts() {
    let item = build_extraction_item(&row(&[(paths::extraction::TOTAL, CellValue::Integer(0))]))
        .expect("build")
        .expect("zero is real data");
    assert_eq!(item.total_individuals_extracted, CellValue::Integer(0));
}

#[test]
fn extraction_item_is_none_for_blank_strings() {
    let item = build_extraction_item(&row(&[
        (paths::extraction::TOTAL, CellValue::Text("nan".to_string())),
        (paths::extraction::MALE_OLDER_1_YEAR, CellValue::Text(String::new())),
        (paths::extraction::HUNT_RES_NAME, CellValue::Null),
    ]))
    .expect("build");
    assert!(item.is_none());
}

#[test]
fn extraction_counts_coerce_with_fallback() {
    let item = build_extraction_item(&row(&[
        (paths::extraction::HUNT_RES_NAME_LAT, CellValue::Text("Alces alces".to_string())),
        (paths::extraction::TOTAL, CellValue::Text(" 8 ".to_string())),
        (paths::extraction::FEMALE_YOUNGER_1_YEAR, CellValue::Text("н/д".to_string())),
        (paths::extraction::MALE_YOUNGER_1_YEAR, CellValue::Integer(2)),
    ]))
    .expect("build")
    .expect("extraction item");

    assert_eq!(item.hunt_res_type.name, CellValue::Null);
    assert_eq!(
        item.hunt_res_type.name_lat,
        CellValue::Text("Alces alces".to_string())
    );
    assert_eq!(item.total_individuals_extracted, CellValue::Integer(8));
    assert_eq!(item.male_younger_1_year_quantity, CellValue::Integer(2));
    assert_eq!(
        item.female_younger_1_year_quantity,
        CellValue::Text("н/д".to_string())
    );
    assert_eq!(item.female_older_1_year_quantity, CellValue::Null);
}

#[test]
fn has_any_value_follows_emptiness_policy() {
    assert!(!has_any_value(&json!(null)));
    assert!(!has_any_value(&json!(" nan ")));
    assert!(!has_any_value(&json!({ "a": [null, "", { "b": "  " }] })));
    assert!(has_any_value(&json!(0)));
    assert!(has_any_value(&json!(false)));
    assert!(has_any_value(&json!({ "a": [null, { "b": "x" }] })));
}

#[test]
fn blank_rows_are_skipped() {
    let cols = columns(&[paths::ACT_TYPE, paths::DATE_ENTRY]);
    let rows = vec![
        vec![RawCell::Empty, text("nan")],
        vec![text("X"), RawCell::Empty],
    ];

    let conversion = convert_rows(&cols, &rows, RowRange::default()).expect("conversion");
    assert_eq!(conversion.documents.len(), 1);
    assert_eq!(conversion.counts.total_rows, 2);
    assert_eq!(conversion.counts.processed_rows, 2);
    assert_eq!(conversion.counts.blank_rows_skipped, 1);
    assert_eq!(conversion.counts.documents_saved, 1);
    assert_eq!(conversion.documents[0].act_type.as_deref(), Some("X"));
}

#[test]
fn rows_with_only_unknown_columns_are_pruned() {
    let cols = columns(&["comment"]);
    let rows = vec![vec![text("note")]];

    let conversion = convert_rows(&cols, &rows, RowRange::default()).expect("conversion");
    assert!(conversion.documents.is_empty());
    assert_eq!(conversion.counts.empty_documents_pruned, 1);
    assert_eq!(conversion.counts.blank_rows_skipped, 0);
}

#[test]
fn merged_municipality_code_is_inherited_by_later_rows() {
    let cols = columns(&[paths::MUNICIPALITY_CODE, paths::ACT_TYPE]);
    let rows = vec![
        vec![text("01"), RawCell::Empty],
        vec![RawCell::Empty, RawCell::Empty],
        vec![RawCell::Empty, text("X")],
    ];

    let conversion = convert_rows(&cols, &rows, RowRange::default()).expect("conversion");
    assert_eq!(conversion.documents.len(), 3);

    let second = to_json(&conversion.documents[1]);
    assert_eq!(second["municipality"]["code"], json!("01"));

    let third = to_json(&conversion.documents[2]);
    assert_eq!(third["municipality"]["code"], json!("01"));
    assert_eq!(third["act_type"], json!("X"));
}

#[test]
fn range_selection_still_accumulates_fill_down_state() {
    let cols = columns(&[paths::ACT_TYPE, paths::DATE_ENTRY]);
    let rows = vec![
        vec![text("first"), text("r1")],
        vec![text("second"), text("r2")],
        vec![RawCell::Empty, text("r3")],
        vec![RawCell::Empty, text("r4")],
        vec![RawCell::Empty, text("r5")],
        vec![text("later"), text("r6")],
    ];

    let conversion =
        convert_rows(&cols, &rows, RowRange::new(Some(5), Some(5))).expect("conversion");
    assert_eq!(conversion.documents.len(), 1);
    assert_eq!(conversion.documents[0].act_type.as_deref(), Some("second"));
    assert_eq!(conversion.documents[0].date_entry.as_deref(), Some("r5"));
    assert_eq!(conversion.counts.processed_rows, 1);
    assert_eq!(conversion.counts.total_rows, 6);
}

#[test]
fn row_range_clamps_to_sheet_bounds() {
    let resolved = RowRange::new(Some(0), Some(50)).resolve(10);
    assert_eq!((resolved.first, resolved.last), (1, 10));
    assert_eq!(resolved.len(), 10);

    let inverted = RowRange::new(Some(8), Some(3)).resolve(10);
    assert!(inverted.is_empty());
    assert_eq!(inverted.len(), 0);

    assert!(RowRange::default().resolve(0).is_empty());
    assert!(!RowRange::default().is_partial());
}

#[test]
fn result_never_exceeds_row_count() {
    let cols = columns(&[paths::extraction::TOTAL]);
    let rows = vec![vec![text("0")], vec![RawCell::Empty], vec![text("4")]];

    let conversion = convert_rows(&cols, &rows, RowRange::default()).expect("conversion");
    assert_eq!(conversion.documents.len(), 3);
    let totals: Vec<Value> = conversion
        .documents
        .iter()
        .map(|document| {
            to_json(document)["bound_data"]["extraction_hunting_resources_results"][0]
                ["total_individuals_extracted"]
                .clone()
        })
        .collect();
    assert_eq!(totals, vec![json!(0), json!(0), json!(4)]);
}

#[test]
fn path_keyed_row_reports_missing_columns_as_null() {
    let keyed = row(&[(paths::ACT_TYPE, CellValue::Text("nan".to_string()))]);
    assert_eq!(keyed.get(paths::DATE_ENTRY), &CellValue::Null);
    assert!(keyed.present(paths::ACT_TYPE).is_none());
    assert!(!keyed.is_all_null());
}
