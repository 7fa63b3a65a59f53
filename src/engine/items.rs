use anyhow::Result;
use serde::Serialize;

use super::document::{
    ExtractionItem, HuntResType, HuntingPermit, IssuedPermit, PermitItem,
    PermittedHuntingProduct, PermittedHuntingTool, RegulationItem, TextName,
};
use super::paths::{extraction, permit, regulation};
use super::period::{DateOrText, parse_period};
use super::prune::carries_data;
use super::row::PathKeyedRow;
use super::value::CellValue;

struct CountField {
    path: &'static str,
    slot: fn(&mut ExtractionItem) -> &mut CellValue,
}

const EXTRACTION_COUNTS: [CountField; 5] = [
    CountField {
        path: extraction::TOTAL,
        slot: |item| &mut item.total_individuals_extracted,
    },
    CountField {
        path: extraction::MALE_YOUNGER_1_YEAR,
        slot: |item| &mut item.male_younger_1_year_quantity,
    },
    CountField {
        path: extraction::FEMALE_YOUNGER_1_YEAR,
        slot: |item| &mut item.female_younger_1_year_quantity,
    },
    CountField {
        path: extraction::MALE_OLDER_1_YEAR,
        slot: |item| &mut item.male_older_1_year_quantity,
    },
    CountField {
        path: extraction::FEMALE_OLDER_1_YEAR,
        slot: |item| &mut item.female_older_1_year_quantity,
    },
];

pub fn build_regulation_item(row: &PathKeyedRow) -> Result<Option<RegulationItem>> {
    let mut item = RegulationItem {
        hunt_res_type: hunt_res_type(row, regulation::HUNT_RES_NAME, regulation::HUNT_RES_NAME_LAT),
        plan_mining_hunt_res_quantity: present(row, regulation::PLAN_QUANTITY).coerce_integer(),
        features: present(row, regulation::FEATURES),
        ..RegulationItem::default()
    };
    item.gender_hunt_res.name = present(row, regulation::GENDER);
    item.enum_age.name = present(row, regulation::AGE);
    item.quantity_regulation_method_id.name = present(row, regulation::METHOD);
    item.regulation_basis_id.name = present(row, regulation::BASIS);

    let period = row
        .present(regulation::PERIOD)
        .map(|value| parse_period(&value.to_string()))
        .unwrap_or_default();
    item.regulation_start_date = present_or_period(row, regulation::START_DATE, period.start);
    item.regulation_end_date = present_or_period(row, regulation::END_DATE, period.end);

    if let Some(tool) = truthy_text(row, regulation::HUNTING_TOOL) {
        item.bound_data.permitted_hunting_tools.push(PermittedHuntingTool {
            hunting_tool_id: TextName { name: tool },
        });
    }
    if let Some(product) = truthy_text(row, regulation::HUNTING_PRODUCT) {
        item.bound_data
            .permission_using_hunting_products
            .push(PermittedHuntingProduct {
                using_hunting_products_id: TextName { name: product },
            });
    }

    keep_if_populated(item)
}

pub fn build_permit_item(row: &PathKeyedRow) -> Result<Option<PermitItem>> {
    let mut item = PermitItem {
        hunting_permits_quantity: present(row, permit::QUANTITY).coerce_integer(),
        ..PermitItem::default()
    };

    let series = row.present(permit::SERIES);
    let number = row.present(permit::NUMBER);
    let date = row.present(permit::DATE);
    if series.is_some() || number.is_some() || date.is_some() {
        item.bound_data.issued_permits.push(IssuedPermit {
            hunting_permit_id: HuntingPermit {
                series_permission: series.and_then(CellValue::to_text),
                number_permission: number.and_then(CellValue::to_text),
                date_permission: date.and_then(CellValue::to_text),
            },
        });
    }

    keep_if_populated(item)
}

pub fn build_extraction_item(row: &PathKeyedRow) -> Result<Option<ExtractionItem>> {
    let mut item = ExtractionItem {
        hunt_res_type: hunt_res_type(
            row,
            extraction::HUNT_RES_NAME,
            extraction::HUNT_RES_NAME_LAT,
        ),
        ..ExtractionItem::default()
    };

    for field in &EXTRACTION_COUNTS {
        *(field.slot)(&mut item) = present(row, field.path).coerce_integer();
    }

    keep_if_populated(item)
}

fn present(row: &PathKeyedRow, path: &str) -> CellValue {
    row.present(path).cloned().unwrap_or_default()
}

fn present_or_period(row: &PathKeyedRow, path: &str, bound: Option<DateOrText>) -> CellValue {
    match row.present(path) {
        Some(value) => value.clone(),
        None => bound
            .map(|bound| CellValue::Text(bound.render()))
            .unwrap_or_default(),
    }
}

fn hunt_res_type(row: &PathKeyedRow, name_path: &str, name_lat_path: &str) -> HuntResType {
    let name = present(row, name_path);
    let name_lat = present(row, name_lat_path);
    if name.is_truthy() || name_lat.is_truthy() {
        HuntResType { name, name_lat }
    } else {
        HuntResType::default()
    }
}

fn truthy_text(row: &PathKeyedRow, path: &str) -> Option<String> {
    row.present(path)
        .filter(|value| value.is_truthy())
        .and_then(CellValue::to_text)
}

fn keep_if_populated<T: Serialize>(item: T) -> Result<Option<T>> {
    Ok(carries_data(&item)?.then_some(item))
}
