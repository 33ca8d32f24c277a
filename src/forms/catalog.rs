//! Static form definitions, one per data-entry screen.
//!
//! Field names double as record keys and CSV columns, so they stay
//! snake_case and stable; labels are what the operator sees.

use super::{FieldKind, FieldSpec, FormSpec};

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Text }
}

const fn number(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Number }
}

const fn date(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Date }
}

const fn time(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Time }
}

const fn multiline(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Multiline }
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Select(options) }
}

/// Soil and termite-mound geochemistry sample sheet.
pub static GEOCHEMISTRY: FormSpec = FormSpec {
    id: "geochemistry",
    title: "Geochemistry sample sheet (soil and termite mound)",
    download_name: "geochemistry_sample.csv",
    fields: &[
        text("id", "ID"),
        text("sample_no", "Sample no."),
        text("line", "Line"),
        number("utm_e", "UTM-E (m)"),
        number("utm_n", "UTM-N (m)"),
        number("alt", "Alt (m)"),
        text("qaqc", "QAQC"),
        text("sample_type", "Type"),
        text("size", "Size"),
        text("colour", "Colour"),
        number("weight", "Weight"),
        text("geologist", "Geologist"),
        date("date", "Date"),
        multiline("comment", "Comment"),
    ],
};

// Drill-hole sheets share their field layouts between RC and DD holes.
const COLLAR_FIELDS: &[FieldSpec] = &[
    text("hole_id", "Hole ID"),
    number("x", "X"),
    number("y", "Y"),
    number("z", "Z"),
    number("max_depth", "Max depth"),
];

const SURVEY_FIELDS: &[FieldSpec] = &[
    text("hole_id", "Hole ID"),
    number("depth", "Depth"),
    number("dip", "Dip"),
    number("azimuth", "Azimuth"),
];

const ASSAY_FIELDS: &[FieldSpec] = &[
    text("hole_id", "Hole ID"),
    number("depth_from", "Depth from"),
    number("depth_to", "Depth to"),
    text("analysis", "Analysis"),
];

const GEOLOGY_FIELDS: &[FieldSpec] = &[
    text("hole_id", "Hole ID"),
    number("depth_from", "Depth from"),
    number("depth_to", "Depth to"),
    text("lithology", "Lithology"),
];

/// RC drill-hole collar sheet.
pub static RC_COLLAR: FormSpec = FormSpec {
    id: "rc_collar",
    title: "Collar",
    download_name: "rc_drilling_collar.csv",
    fields: COLLAR_FIELDS,
};

/// RC downhole survey sheet.
pub static RC_SURVEY: FormSpec = FormSpec {
    id: "rc_survey",
    title: "Survey",
    download_name: "rc_drilling_survey.csv",
    fields: SURVEY_FIELDS,
};

/// RC assay interval sheet.
pub static RC_ASSAY: FormSpec = FormSpec {
    id: "rc_assay",
    title: "Assay",
    download_name: "rc_drilling_assay.csv",
    fields: ASSAY_FIELDS,
};

/// RC geology interval sheet.
pub static RC_GEOLOGY: FormSpec = FormSpec {
    id: "rc_geology",
    title: "Geology",
    download_name: "rc_drilling_geology.csv",
    fields: GEOLOGY_FIELDS,
};

/// Diamond-drilling collar sheet.
pub static DD_COLLAR: FormSpec = FormSpec {
    id: "dd_collar",
    title: "Collar",
    download_name: "dd_drilling_collar.csv",
    fields: COLLAR_FIELDS,
};

/// Diamond-drilling survey sheet.
pub static DD_SURVEY: FormSpec = FormSpec {
    id: "dd_survey",
    title: "Survey",
    download_name: "dd_drilling_survey.csv",
    fields: SURVEY_FIELDS,
};

/// Diamond-drilling assay sheet.
pub static DD_ASSAY: FormSpec = FormSpec {
    id: "dd_assay",
    title: "Assay",
    download_name: "dd_drilling_assay.csv",
    fields: ASSAY_FIELDS,
};

/// Diamond-drilling geology sheet.
pub static DD_GEOLOGY: FormSpec = FormSpec {
    id: "dd_geology",
    title: "Geology",
    download_name: "dd_drilling_geology.csv",
    fields: GEOLOGY_FIELDS,
};

/// Geotechnical log, diamond drilling only.
pub static DD_GEOTECH: FormSpec = FormSpec {
    id: "dd_geotech",
    title: "Geotechnical log",
    download_name: "dd_drilling_geotechnical_log.csv",
    fields: &[
        text("hole_id", "Hole ID"),
        number("from_m", "From (m)"),
        number("to_m", "To (m)"),
        number("interval_m", "Interval (m)"),
        number("rec_length_m", "Rec. length (m)"),
        number("recovery_pct", "Recovery (%)"),
        number("rqd_pct", "RQD (%)"),
        text("rqd_class", "RQD class"),
        text("rock_type", "Rock type"),
        text("weathering", "Weathering"),
        text("strength", "Strength"),
        text("joints", "Joints"),
        number("joint_spacing_m", "Joint spacing (m)"),
        text("joint_type", "Joint type"),
        text("joint_condition", "Joint condition"),
        text("joint_infill", "Joint infill"),
        number("dip_deg", "Dip (deg)"),
        number("dip_dir_deg", "Dip direction (deg)"),
        text("groundwater", "Groundwater"),
        number("water_level_m", "Water level (m)"),
        number("flow_rate_l_min", "Flow rate (l/min)"),
        text("comment", "Comment"),
        text("photo_ref", "Photo ref."),
        text("rmr", "RMR"),
        text("q_system", "Q system"),
    ],
};

/// Outcrop mapping sheet.
pub static GEOLOGICAL_MAPPING: FormSpec = FormSpec {
    id: "geological_mapping",
    title: "Geological mapping",
    download_name: "geological_mapping.csv",
    fields: &[
        text("outcrop_id", "Outcrop ID"),
        date("date", "Date"),
        text("geologist", "Geologist"),
        number("utm_e", "UTM E"),
        number("utm_n", "UTM N"),
        number("alt", "Altitude (m)"),
        text("lithology", "Lithology"),
        text("photo_id", "Photo ID"),
        multiline("description", "Description"),
        text("alteration", "Alteration"),
        text("mineralization", "Mineralization"),
        select(
            "structure_type",
            "Structure type",
            &["Bedding", "Foliation", "Vein", "Fault", "Joint"],
        ),
        number("dip", "Dip (deg)"),
        number("strike", "Strike (deg)"),
        multiline("comments", "Additional comments"),
    ],
};

/// Trench or pit log header plus interval log text.
pub static TRENCH_LOG: FormSpec = FormSpec {
    id: "trench_log",
    title: "Trench / pit log",
    download_name: "trench_log.csv",
    fields: &[
        text("trench_id", "Trench / pit ID"),
        date("date", "Date"),
        text("location", "Location / line"),
        text("geologist", "Geologist"),
        number("length_m", "Length (m)"),
        number("width_m", "Width (m)"),
        number("depth_m", "Depth (m)"),
        multiline("log_details", "Interval log"),
    ],
};

/// Field point entry for the mapping view.
pub static MAPPING_POINT: FormSpec = FormSpec {
    id: "mapping_point",
    title: "Field point entry",
    download_name: "mapping_points.csv",
    fields: &[
        number("latitude", "Latitude"),
        number("longitude", "Longitude"),
        number("altitude", "Altitude"),
        select("coord_unit", "Coordinate unit", &["DD", "DMS"]),
        select("alt_unit", "Altitude unit", &["meters", "feet"]),
        text("country", "Country"),
        text("region", "Region"),
        text("commune", "Commune"),
        text("town", "Town"),
        text("study_area", "Study area"),
        text("prospect", "Prospect"),
        text("point_name", "Point name"),
    ],
};

/// HSE incident / accident report.
pub static INCIDENT_REPORT: FormSpec = FormSpec {
    id: "incident_report",
    title: "Incident / accident report",
    download_name: "incident_report.csv",
    fields: &[
        date("date", "Incident date"),
        time("time", "Incident time"),
        select(
            "incident_type",
            "Incident type",
            &[
                "Near miss",
                "First aid",
                "Medical treatment",
                "Lost time injury",
                "Property damage",
            ],
        ),
        text("reported_by", "Reported by"),
        text("location", "Location"),
        multiline("description", "Description"),
        text("persons_involved", "Persons involved"),
        text("witnesses", "Witnesses"),
        multiline("immediate_actions", "Immediate actions taken"),
    ],
};

const COMPLIANCE: &[&str] = &["Compliant", "Non-compliant"];

/// HSE site inspection checklist, flattened to status/comment pairs.
pub static SITE_INSPECTION: FormSpec = FormSpec {
    id: "site_inspection",
    title: "Site inspection",
    download_name: "site_inspection.csv",
    fields: &[
        text("inspector", "Inspector"),
        date("date", "Date"),
        select("ppe_status", "PPE worn (helmet, boots, ...)", COMPLIANCE),
        text("ppe_comment", "PPE corrective action"),
        select("tools_status", "Tools and equipment condition", COMPLIANCE),
        text("tools_comment", "Tools corrective action"),
        select("machinery_status", "Machine safety (guards, e-stops)", COMPLIANCE),
        text("machinery_comment", "Machinery corrective action"),
        select("site_access_status", "Access control and signage", COMPLIANCE),
        text("site_access_comment", "Access corrective action"),
        select("housekeeping_status", "Site order and housekeeping", COMPLIANCE),
        text("housekeeping_comment", "Housekeeping corrective action"),
    ],
};

/// HSE environmental observation.
pub static ENVIRONMENTAL_OBSERVATION: FormSpec = FormSpec {
    id: "environmental_observation",
    title: "Environmental observation",
    download_name: "environmental_observation.csv",
    fields: &[
        date("date", "Date"),
        text("location", "Location"),
        select(
            "observation_type",
            "Observation type",
            &["Spill", "Waste", "Water", "Dust", "Flora / fauna", "Other"],
        ),
        multiline("description", "Description"),
        multiline("corrective_action", "Corrective action"),
        text("reported_by", "Reported by"),
    ],
};

/// Daily field report ("field minute").
pub static DAILY_REPORT: FormSpec = FormSpec {
    id: "daily_report",
    title: "Daily field report",
    download_name: "daily_report.csv",
    fields: &[
        date("date", "Date"),
        select("shift", "Shift", &["Day", "Night"]),
        select("drilling_type", "Drilling type", &["RC", "DD", "Other"]),
        text("machine_id", "Machine ID"),
        text("project", "Project"),
        text("hole_id", "Hole ID"),
        number("depth_from", "From (m)"),
        number("depth_to", "To (m)"),
        multiline("personnel", "Personnel"),
        multiline("incidents", "Incidents"),
        multiline("comments", "Comments"),
    ],
};

/// Sample dispatch sheet for laboratory shipments.
pub static SAMPLE_DISPATCH: FormSpec = FormSpec {
    id: "sample_dispatch",
    title: "Sample dispatch sheet",
    download_name: "sample_dispatch.csv",
    fields: &[
        text("dispatch_id", "Dispatch ID"),
        date("date", "Dispatch date"),
        text("lab_name", "Laboratory"),
        text("dispatched_by", "Dispatched by"),
        number("sample_count", "Total sample count"),
        text("received_by", "Received by (laboratory)"),
        multiline("sample_ids", "Sample numbers"),
    ],
};

/// Toolbox safety meeting sheet.
pub static SAFETY_MEETING: FormSpec = FormSpec {
    id: "safety_meeting",
    title: "Safety meeting sheet",
    download_name: "safety_meeting.csv",
    fields: &[
        date("date", "Date"),
        time("time", "Time"),
        select("shift", "Shift", &["Day", "Night"]),
        select("drilling_type", "Drilling type", &["RC", "DD", "Other"]),
        text("leader", "Led by"),
        multiline("attendees", "Attendees"),
        multiline("topics", "Topics covered"),
        multiline("actions", "Actions agreed"),
    ],
};

/// Daily fuel tracking sheet.
pub static FUEL_TRACKING: FormSpec = FormSpec {
    id: "fuel_tracking",
    title: "Fuel tracking",
    download_name: "fuel_tracking.csv",
    fields: &[
        date("date", "Date"),
        text("equipment_id", "Equipment ID"),
        number("start_hours", "Start hours"),
        number("end_hours", "End hours"),
        number("fuel_added_l", "Fuel added (l)"),
        text("operator", "Operator"),
    ],
};

/// Machinery usage log.
pub static MACHINERY_LOG: FormSpec = FormSpec {
    id: "machinery_log",
    title: "Machinery log",
    download_name: "machinery_log.csv",
    fields: &[
        date("date", "Date"),
        select(
            "machine_type",
            "Machine type",
            &["Bulldozer", "Excavator", "Drill rig", "Truck", "Grader"],
        ),
        text("machine_id", "Machine ID"),
        text("operator", "Operator"),
        time("start_time", "Start time"),
        time("end_time", "End time"),
        multiline("task_description", "Task description"),
    ],
};

/// Every form in the catalog, for tests and iteration.
pub static ALL: &[&FormSpec] = &[
    &GEOCHEMISTRY,
    &RC_COLLAR,
    &RC_SURVEY,
    &RC_ASSAY,
    &RC_GEOLOGY,
    &DD_COLLAR,
    &DD_SURVEY,
    &DD_ASSAY,
    &DD_GEOLOGY,
    &DD_GEOTECH,
    &GEOLOGICAL_MAPPING,
    &TRENCH_LOG,
    &MAPPING_POINT,
    &INCIDENT_REPORT,
    &SITE_INSPECTION,
    &ENVIRONMENTAL_OBSERVATION,
    &DAILY_REPORT,
    &SAMPLE_DISPATCH,
    &SAFETY_MEETING,
    &FUEL_TRACKING,
    &MACHINERY_LOG,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_form_ids_are_unique() {
        let mut seen = HashSet::new();
        for spec in ALL {
            assert!(seen.insert(spec.id), "duplicate form id {}", spec.id);
        }
    }

    #[test]
    fn test_field_names_are_unique_within_each_form() {
        for spec in ALL {
            let mut seen = HashSet::new();
            for field in spec.fields {
                assert!(!field.name.is_empty(), "{}: empty field name", spec.id);
                assert!(
                    seen.insert(field.name),
                    "{}: duplicate field {}",
                    spec.id,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_every_form_has_fields_and_download_name() {
        for spec in ALL {
            assert!(!spec.fields.is_empty(), "{}: no fields", spec.id);
            assert!(
                spec.download_name.ends_with(".csv"),
                "{}: download name {}",
                spec.id,
                spec.download_name
            );
        }
    }

    #[test]
    fn test_selects_have_options() {
        for spec in ALL {
            for field in spec.fields {
                if let FieldKind::Select(options) = field.kind {
                    assert!(!options.is_empty(), "{}.{}", spec.id, field.name);
                }
            }
        }
    }

    #[test]
    fn test_dd_sheets_share_rc_interval_layout() {
        assert_eq!(DD_COLLAR.fields, RC_COLLAR.fields);
        assert_ne!(DD_COLLAR.download_name, RC_COLLAR.download_name);
    }
}
