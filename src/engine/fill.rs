use anyhow::Result;

use super::document::{
    AnimalSpecies, DetectedDisease, Disease, HuntingGround, MunicipalityEntry, OutputDocument,
};
use super::items::{build_extraction_item, build_permit_item, build_regulation_item};
use super::paths::{self, MunicipalitySlot};
use super::prune::carries_data;
use super::row::PathKeyedRow;

pub fn fill_document(document: &mut OutputDocument, row: &PathKeyedRow) -> Result<()> {
    document.date_entry = row.get(paths::DATE_ENTRY).to_text();
    document.act_type = row.get(paths::ACT_TYPE).to_text();
    document.decision_regul_quan_number = row.get(paths::DECISION_NUMBER).to_text();
    document.decision_regul_quan_date = row.get(paths::DECISION_DATE).to_text();

    document.municipality.code = row.get(paths::MUNICIPALITY_CODE).clone();
    document.municipality.name = row.get(paths::MUNICIPALITY_NAME).clone();

    document.hunting_ground_id.name = row.get(paths::HUNTING_GROUND_NAME).clone();
    document.hunting_ground_id.municipalities =
        municipality_entries(row, &paths::HUNTING_GROUND_MUNICIPALITIES);

    let disease = DetectedDisease {
        hunting_ground_id: HuntingGround {
            name: row.get(paths::DISEASE_HUNTING_GROUND_NAME).clone(),
            municipalities: municipality_entries(
                row,
                &paths::DISEASE_HUNTING_GROUND_MUNICIPALITIES,
            ),
        },
        animal_species: AnimalSpecies {
            name: row.get(paths::DISEASE_SPECIES_NAME).clone(),
            name_lat: row.get(paths::DISEASE_SPECIES_NAME_LAT).clone(),
        },
        diseases: Disease {
            name: row.get(paths::DISEASE_NAME).clone(),
        },
        date_onset_disease: row.get(paths::DISEASE_ONSET_DATE).clone(),
    };
    if carries_data(&disease)? {
        document.detected_disease_id = disease;
    }

    let bound = &mut document.bound_data;
    if let Some(item) = build_regulation_item(row)? {
        bound.regulation_quantity_hunting_resources.push(item);
    }
    if let Some(item) = build_permit_item(row)? {
        bound.issued_permits_quantity.push(item);
    }
    if let Some(item) = build_extraction_item(row)? {
        bound.extraction_hunting_resources_results.push(item);
    }

    Ok(())
}

fn municipality_entries(row: &PathKeyedRow, slots: &[MunicipalitySlot; 2]) -> Vec<MunicipalityEntry> {
    let mut entries = Vec::new();
    for slot in slots {
        let code = row.present(slot.code);
        let name = row.present(slot.name);
        if code.is_none() && name.is_none() {
            continue;
        }
        entries.push(MunicipalityEntry {
            code: code.and_then(|value| value.to_text()),
            name: name.and_then(|value| value.to_text()),
        });
    }
    entries
}
