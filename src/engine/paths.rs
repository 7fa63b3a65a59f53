pub const DATE_ENTRY: &str = "date_entry";
pub const ACT_TYPE: &str = "act_type";
pub const DECISION_NUMBER: &str = "decision_regul_quan_number";
pub const DECISION_DATE: &str = "decision_regul_quan_date";

pub const MUNICIPALITY_CODE: &str = "municipality/code";
pub const MUNICIPALITY_NAME: &str = "municipality/name";

pub const HUNTING_GROUND_NAME: &str = "hunting_ground_id/name";

#[derive(Debug, Clone, Copy)]
pub struct MunicipalitySlot {
    pub code: &'static str,
    pub name: &'static str,
}

pub const HUNTING_GROUND_MUNICIPALITIES: [MunicipalitySlot; 2] = [
    MunicipalitySlot {
        code: "hunting_ground_id/municipalities/0/code",
        name: "hunting_ground_id/municipalities/0/name",
    },
    MunicipalitySlot {
        code: "hunting_ground_id/municipalities/1/code",
        name: "hunting_ground_id/municipalities/1/name",
    },
];

pub const DISEASE_HUNTING_GROUND_NAME: &str = "detected_disease_id/hunting_ground_id/name";
pub const DISEASE_SPECIES_NAME: &str = "detected_disease_id/animal_species/name";
pub const DISEASE_SPECIES_NAME_LAT: &str = "detected_disease_id/animal_species/name_lat";
pub const DISEASE_NAME: &str = "detected_disease_id/diseases/name";
pub const DISEASE_ONSET_DATE: &str = "detected_disease_id/date_onset_disease";

pub const DISEASE_HUNTING_GROUND_MUNICIPALITIES: [MunicipalitySlot; 2] = [
    MunicipalitySlot {
        code: "detected_disease_id/hunting_ground_id/municipalities/0/code",
        name: "detected_disease_id/hunting_ground_id/municipalities/0/name",
    },
    MunicipalitySlot {
        code: "detected_disease_id/hunting_ground_id/municipalities/1/code",
        name: "detected_disease_id/hunting_ground_id/municipalities/1/name",
    },
];

pub mod regulation {
    pub const HUNT_RES_NAME: &str =
        "bound_data/regulation_quantity_hunting_resources/0/hunt_res_type/name";
    pub const HUNT_RES_NAME_LAT: &str =
        "bound_data/regulation_quantity_hunting_resources/0/hunt_res_type/name_lat";
    pub const GENDER: &str =
        "bound_data/regulation_quantity_hunting_resources/0/gender_hunt_res/name";
    pub const AGE: &str = "bound_data/regulation_quantity_hunting_resources/0/enum_age/name";
    pub const PLAN_QUANTITY: &str =
        "bound_data/regulation_quantity_hunting_resources/0/plan_mining_hunt_res_quantity";
    pub const START_DATE: &str =
        "bound_data/regulation_quantity_hunting_resources/0/regulation_start_date";
    pub const END_DATE: &str =
        "bound_data/regulation_quantity_hunting_resources/0/regulation_end_date";
    pub const PERIOD: &str = "bound_data/regulation_quantity_hunting_resources/0/regulation_period";
    pub const FEATURES: &str = "bound_data/regulation_quantity_hunting_resources/0/features";
    pub const METHOD: &str =
        "bound_data/regulation_quantity_hunting_resources/0/quantity_regulation_method_id/name";
    pub const BASIS: &str =
        "bound_data/regulation_quantity_hunting_resources/0/regulation_basis_id/name";
    pub const HUNTING_TOOL: &str = "bound_data/regulation_quantity_hunting_resources/0/bound_data/permitted_hunting_tools/0/hunting_tool_id/name";
    pub const HUNTING_PRODUCT: &str = "bound_data/regulation_quantity_hunting_resources/0/bound_data/permission_using_hunting_products/0/using_hunting_products_id/name";
}

pub mod permit {
    pub const QUANTITY: &str = "bound_data/issued_permits_quantity/0/hunting_permits_quantity";
    pub const SERIES: &str = "bound_data/issued_permits_quantity/0/bound_data/issued_permits/0/hunting_permit_id/series_permission";
    pub const NUMBER: &str = "bound_data/issued_permits_quantity/0/bound_data/issued_permits/0/hunting_permit_id/number_permission";
    pub const DATE: &str = "bound_data/issued_permits_quantity/0/bound_data/issued_permits/0/hunting_permit_id/date_permission";
}

pub mod extraction {
    pub const HUNT_RES_NAME: &str =
        "bound_data/extraction_hunting_resources_results/0/hunt_res_type/name";
    pub const HUNT_RES_NAME_LAT: &str =
        "bound_data/extraction_hunting_resources_results/0/hunt_res_type/name_lat";
    pub const TOTAL: &str =
        "bound_data/extraction_hunting_resources_results/0/total_individuals_extracted";
    pub const MALE_YOUNGER_1_YEAR: &str =
        "bound_data/extraction_hunting_resources_results/0/male_younger_1_year_quantity";
    pub const FEMALE_YOUNGER_1_YEAR: &str =
        "bound_data/extraction_hunting_resources_results/0/female_younger_1_year_quantity";
    pub const MALE_OLDER_1_YEAR: &str =
        "bound_data/extraction_hunting_resources_results/0/male_older_1_year_quantity";
    pub const FEMALE_OLDER_1_YEAR: &str =
        "bound_data/extraction_hunting_resources_results/0/female_older_1_year_quantity";
}

pub const KNOWN: &[&str] = &[
    DATE_ENTRY,
    ACT_TYPE,
    DECISION_NUMBER,
    DECISION_DATE,
    MUNICIPALITY_CODE,
    MUNICIPALITY_NAME,
    HUNTING_GROUND_NAME,
    HUNTING_GROUND_MUNICIPALITIES[0].code,
    HUNTING_GROUND_MUNICIPALITIES[0].name,
    HUNTING_GROUND_MUNICIPALITIES[1].code,
    HUNTING_GROUND_MUNICIPALITIES[1].name,
    DISEASE_HUNTING_GROUND_NAME,
    DISEASE_HUNTING_GROUND_MUNICIPALITIES[0].code,
    DISEASE_HUNTING_GROUND_MUNICIPALITIES[0].name,
    DISEASE_HUNTING_GROUND_MUNICIPALITIES[1].code,
    DISEASE_HUNTING_GROUND_MUNICIPALITIES[1].name,
    DISEASE_SPECIES_NAME,
    DISEASE_SPECIES_NAME_LAT,
    DISEASE_NAME,
    DISEASE_ONSET_DATE,
    regulation::HUNT_RES_NAME,
    regulation::HUNT_RES_NAME_LAT,
    regulation::GENDER,
    regulation::AGE,
    regulation::PLAN_QUANTITY,
    regulation::START_DATE,
    regulation::END_DATE,
    regulation::PERIOD,
    regulation::FEATURES,
    regulation::METHOD,
    regulation::BASIS,
    regulation::HUNTING_TOOL,
    regulation::HUNTING_PRODUCT,
    permit::QUANTITY,
    permit::SERIES,
    permit::NUMBER,
    permit::DATE,
    extraction::HUNT_RES_NAME,
    extraction::HUNT_RES_NAME_LAT,
    extraction::TOTAL,
    extraction::MALE_YOUNGER_1_YEAR,
    extraction::FEMALE_YOUNGER_1_YEAR,
    extraction::MALE_OLDER_1_YEAR,
    extraction::FEMALE_OLDER_1_YEAR,
];

pub fn is_known(label: &str) -> bool {
    KNOWN.contains(&label)
}
