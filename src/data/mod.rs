//! Mock in-memory datasets backing the demonstration client.
//!
//! There is no persistence layer: each view rebuilds its state over these
//! collections, and submitted forms only accumulate in the session.

use crate::record::Record;

/// Subscription status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// Administrator, always allowed to sign in
    Admin,
    /// Paid subscription, allowed to sign in
    Paid,
    /// Access requested, awaiting admin approval
    Pending,
}

impl AccountStatus {
    /// Status label shown in the admin table and exported to CSV.
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Admin => "Admin",
            AccountStatus::Paid => "Paid",
            AccountStatus::Pending => "Pending",
        }
    }
}

/// A user account known to the login stub and the admin page.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub status: AccountStatus,
}

impl UserAccount {
    /// Export row for the user journal, column order matching the
    /// admin page table.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("first_name", self.first_name)
            .with("last_name", self.last_name)
            .with("email", self.email)
            .with("phone", self.phone)
            .with("subscription_status", self.status.label())
    }
}

/// The administrator account email the login stub recognizes.
pub const ADMIN_EMAIL: &str = "admin@geofield.example";

/// Demonstration user accounts.
pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            first_name: "Serigne",
            last_name: "Diouf",
            email: ADMIN_EMAIL,
            phone: "+221771234567",
            status: AccountStatus::Admin,
        },
        UserAccount {
            first_name: "John",
            last_name: "Doe",
            email: "john.doe@geofield.example",
            phone: "+15551234567",
            status: AccountStatus::Paid,
        },
        UserAccount {
            first_name: "Awa",
            last_name: "Keita",
            email: "awa.keita@geofield.example",
            phone: "+22370987654",
            status: AccountStatus::Paid,
        },
        UserAccount {
            first_name: "Moussa",
            last_name: "Traore",
            email: "m.traore@geofield.example",
            phone: "+22507112233",
            status: AccountStatus::Pending,
        },
        UserAccount {
            first_name: "Jane",
            last_name: "Smith",
            email: "jane.smith@geofield.example",
            phone: "+442012345678",
            status: AccountStatus::Paid,
        },
        UserAccount {
            first_name: "Fatou",
            last_name: "Ndiaye",
            email: "f.ndiaye@geofield.example",
            phone: "+221769876543",
            status: AccountStatus::Pending,
        },
    ]
}

fn point(
    id: &str,
    kind: &str,
    date: &str,
    coord_x: f64,
    coord_y: f64,
    coord_z: f64,
    project: &str,
    description: &str,
) -> Record {
    Record::new()
        .with("id", id)
        .with("type", kind)
        .with("date", date)
        .with("coord_x", coord_x)
        .with("coord_y", coord_y)
        .with("coord_z", coord_z)
        .with("project", project)
        .with("description", description)
}

/// Consolidated field data points for the compilation sheet.
///
/// Eight curated rows plus generated routine mapping points, 50 in total
/// so pagination has something to page over.
pub fn compilation_points() -> Vec<Record> {
    let mut points = vec![
        point("PT-001", "Mapping", "2024-07-10", 5.361, -4.009, 152.0, "Aurora Gold", "Initial location point."),
        point("PT-002", "Mapping", "2024-07-10", 5.362, -4.010, 155.0, "Aurora Gold", "Access road."),
        point("GEO-056", "Geochemistry", "2024-07-11", 5.368, -4.015, 160.0, "Aurora Gold", "Soil sample."),
        point("RC-001-01", "RC hole", "2024-07-12", 5.400, -4.050, 170.0, "Copper Ridge", "Collar of hole RC-001."),
        point("TR-01-S01", "Trench", "2024-07-13", 5.375, -4.020, 158.0, "Aurora Gold", "Trench log, sample 1."),
        point("TR-01-S02", "Trench", "2024-07-13", 5.375, -4.020, 158.0, "Aurora Gold", "Trench log, sample 2."),
        point("AFF-012", "Outcrop", "2024-07-14", 5.410, -4.061, 182.0, "Copper Ridge", "Metavolcanic outcrop."),
        point("GEO-057", "Geochemistry", "2024-07-11", 5.369, -4.016, 161.0, "Aurora Gold", "Termite mound sample."),
    ];

    for i in 8..50 {
        let offset = i as f64 / 1000.0;
        points.push(point(
            &format!("PT-{:03}", i + 1),
            "Mapping",
            &format!("2024-07-{}", 15 + (i % 5)),
            5.361 + offset,
            -4.009 + offset,
            152.0 + i as f64,
            if i % 3 == 0 { "Copper Ridge" } else { "Aurora Gold" },
            &format!("Routine point {}", i + 1),
        ));
    }

    points
}

/// One mineral identified in a rock sample.
#[derive(Debug, Clone)]
pub struct IdentifiedMineral {
    pub name: &'static str,
    pub percentage: f64,
    pub description: &'static str,
}

/// A rock sample analysis as produced by the identification assistant.
#[derive(Debug, Clone)]
pub struct MineralAnalysis {
    pub rock_name: &'static str,
    pub description: &'static str,
    pub minerals: Vec<IdentifiedMineral>,
    pub economic_potential: &'static str,
}

impl MineralAnalysis {
    /// Flatten the analysis to one exportable row per mineral, repeating
    /// the rock-level columns on every row.
    pub fn to_records(&self) -> Vec<Record> {
        self.minerals
            .iter()
            .map(|mineral| {
                Record::new()
                    .with("rock_name", self.rock_name)
                    .with("rock_description", self.description)
                    .with("economic_potential", self.economic_potential)
                    .with("mineral_name", mineral.name)
                    .with("mineral_percentage", mineral.percentage)
                    .with("mineral_description", mineral.description)
            })
            .collect()
    }
}

/// Recent analyses shown on the dashboard and the analysis view.
pub fn recent_analyses() -> Vec<MineralAnalysis> {
    vec![
        MineralAnalysis {
            rock_name: "Granite pegmatite",
            description: "Coarse-grained intrusive igneous rock with large crystals.",
            minerals: vec![
                IdentifiedMineral { name: "Quartz", percentage: 35.0, description: "Smoky variety, anhedral." },
                IdentifiedMineral { name: "Orthoclase feldspar", percentage: 45.0, description: "Pinkish, large crystals." },
                IdentifiedMineral { name: "Biotite mica", percentage: 15.0, description: "Black, flaky sheets." },
                IdentifiedMineral { name: "Tourmaline", percentage: 5.0, description: "Black, prismatic crystals." },
            ],
            economic_potential: "Potential source of feldspar for ceramics and possibly rare earth elements associated with pegmatites.",
        },
        MineralAnalysis {
            rock_name: "Birimian metavolcanic",
            description: "Fine-grained, greenish rock showing low-grade metamorphism.",
            minerals: vec![
                IdentifiedMineral { name: "Chlorite", percentage: 40.0, description: "Green, gives the rock its colour." },
                IdentifiedMineral { name: "Actinolite", percentage: 30.0, description: "Needle-like green crystals." },
                IdentifiedMineral { name: "Plagioclase", percentage: 20.0, description: "Altered, small laths." },
                IdentifiedMineral { name: "Pyrite", percentage: 10.0, description: "Disseminated fine grains, golden colour." },
            ],
            economic_potential: "High potential for gold mineralization; pyrite is a pathfinder mineral in Birimian greenstone belts.",
        },
        MineralAnalysis {
            rock_name: "Quartz-vein breccia",
            description: "Angular fragments of host rock cemented by milky quartz.",
            minerals: vec![
                IdentifiedMineral { name: "Quartz", percentage: 85.0, description: "Massive, vein-filling." },
                IdentifiedMineral { name: "Hematite after pyrite", percentage: 10.0, description: "Reddish-brown staining, boxwork textures." },
                IdentifiedMineral { name: "Sericite", percentage: 5.0, description: "Fine-grained mica, alteration product." },
            ],
            economic_potential: "Very high potential for orogenic gold deposits; quartz veins with sulfide boxworks are a classic exploration target.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_points_count_and_shape() {
        let points = compilation_points();
        assert_eq!(points.len(), 50);

        let header: Vec<&str> = points[0].keys().collect();
        for record in &points {
            let keys: Vec<&str> = record.keys().collect();
            assert_eq!(keys, header, "non-uniform field set");
        }
    }

    #[test]
    fn test_compilation_point_ids_are_unique() {
        let points = compilation_points();
        let mut ids: Vec<String> = points.iter().map(|r| r.get("id").unwrap().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), points.len());
    }

    #[test]
    fn test_users_include_exactly_one_admin() {
        let admins: Vec<_> = users()
            .into_iter()
            .filter(|u| u.status == AccountStatus::Admin)
            .collect();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email, ADMIN_EMAIL);
    }

    #[test]
    fn test_user_record_column_order() {
        let record = users()[0].to_record();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(
            keys,
            vec!["first_name", "last_name", "email", "phone", "subscription_status"]
        );
    }

    #[test]
    fn test_analysis_flattening_repeats_rock_columns() {
        let analyses = recent_analyses();
        let rows = analyses[0].to_records();
        assert_eq!(rows.len(), analyses[0].minerals.len());
        for row in &rows {
            assert_eq!(row.get("rock_name").unwrap().to_string(), analyses[0].rock_name);
        }
        assert_eq!(rows[0].get("mineral_name").unwrap().to_string(), "Quartz");
    }

    #[test]
    fn test_mineral_percentages_sum_to_hundred() {
        for analysis in recent_analyses() {
            let total: f64 = analysis.minerals.iter().map(|m| m.percentage).sum();
            assert!((total - 100.0).abs() < f64::EPSILON, "{}", analysis.rock_name);
        }
    }
}
