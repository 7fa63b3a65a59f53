use serde::Serialize;

use super::value::CellValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputDocument {
    pub date_entry: Option<String>,
    pub municipality: Municipality,
    pub act_type: Option<String>,
    pub decision_regul_quan_number: Option<String>,
    pub decision_regul_quan_date: Option<String>,
    pub hunting_ground_id: HuntingGround,
    pub detected_disease_id: DetectedDisease,
    pub bound_data: BoundData,
}

impl OutputDocument {
    pub fn template() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Municipality {
    pub code: CellValue,
    pub name: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MunicipalityEntry {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HuntingGround {
    pub name: CellValue,
    pub municipalities: Vec<MunicipalityEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectedDisease {
    pub hunting_ground_id: HuntingGround,
    pub animal_species: AnimalSpecies,
    pub diseases: Disease,
    pub date_onset_disease: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimalSpecies {
    pub name: CellValue,
    pub name_lat: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Disease {
    pub name: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundData {
    pub regulation_quantity_hunting_resources: Vec<RegulationItem>,
    pub issued_permits_quantity: Vec<PermitItem>,
    pub extraction_hunting_resources_results: Vec<ExtractionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HuntResType {
    pub name: CellValue,
    pub name_lat: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedRef {
    pub name: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegulationItem {
    pub hunt_res_type: HuntResType,
    pub gender_hunt_res: NamedRef,
    pub enum_age: NamedRef,
    pub plan_mining_hunt_res_quantity: CellValue,
    pub regulation_start_date: CellValue,
    pub regulation_end_date: CellValue,
    pub features: CellValue,
    pub quantity_regulation_method_id: NamedRef,
    pub regulation_basis_id: NamedRef,
    pub bound_data: RegulationBoundData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegulationBoundData {
    pub permitted_hunting_tools: Vec<PermittedHuntingTool>,
    pub permission_using_hunting_products: Vec<PermittedHuntingProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextName {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermittedHuntingTool {
    pub hunting_tool_id: TextName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermittedHuntingProduct {
    pub using_hunting_products_id: TextName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermitItem {
    pub hunting_permits_quantity: CellValue,
    pub bound_data: PermitBoundData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermitBoundData {
    pub issued_permits: Vec<IssuedPermit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuedPermit {
    pub hunting_permit_id: HuntingPermit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HuntingPermit {
    pub series_permission: Option<String>,
    pub number_permission: Option<String>,
    pub date_permission: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionItem {
    pub hunt_res_type: HuntResType,
    pub total_individuals_extracted: CellValue,
    pub male_younger_1_year_quantity: CellValue,
    pub female_younger_1_year_quantity: CellValue,
    pub male_older_1_year_quantity: CellValue,
    pub female_older_1_year_quantity: CellValue,
}
