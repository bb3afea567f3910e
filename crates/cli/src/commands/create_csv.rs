use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::transform::{
    format_anniversary, format_birthdate, format_phone, map_grade, status_and_membership,
    yes_no_to_true_false,
};

/// Column layout expected by the PCO people import.
const OUTPUT_HEADERS: [&str; 33] = [
    "remote_id",
    "First Name",
    "Middle Name",
    "Last Name",
    "Birthdate",
    "Anniversary",
    "Gender",
    "Grade",
    "Medical Notes",
    "Marital Status",
    "Status",
    "Membership",
    "Home Address Street Line 1",
    "Home Address City",
    "Home Address State",
    "Home Address Zip Code",
    "Mobile Phone Number",
    "Home Phone Number",
    "Work Phone Number",
    "Home Email",
    "Household ID",
    "Household Name",
    "Household Primary Contact",
    "Baptized",
    "Baptism Date",
    "Member By",
    "Membership Date",
    "Sunday School",
    "Small Group",
    "Emergency Contact",
    "Emergency Phone",
    "Allergies",
    "Authorized Pickup",
];

/// Execute the `create-csv` command: rewrite a legacy roster export into the
/// PCO import layout.
pub fn execute(input: &Path, output: &Path) -> Result<()> {
    let rows = write_import_csv(input, output, 2025)?;
    println!(
        "CSV transformation complete ({} rows). Output saved to {}",
        rows,
        output.display()
    );
    Ok(())
}

/// Transform `input` into the import layout at `output`, returning the number
/// of data rows written. `current_year` anchors age-based birth years.
///
/// Consecutive rows sharing a last name are grouped into one household; a new
/// last name starts the next household.
///
/// # Errors
///
/// Returns an error when either file cannot be opened or a row cannot be
/// read or written.
pub fn write_import_csv(input: &Path, output: &Path, current_year: i32) -> Result<usize> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("failed to open input CSV {}", input.display()))?;
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create output CSV {}", output.display()))?;

    writer.write_record(OUTPUT_HEADERS)?;

    let mut family_id: u32 = 1;
    let mut previous_last_name: Option<String> = None;
    let mut remote_id: u32 = 1;
    let mut rows_written = 0usize;

    for row in reader.deserialize::<HashMap<String, String>>() {
        let row = row.with_context(|| format!("failed to read row from {}", input.display()))?;
        let get = |key: &str| row.get(key).map(String::as_str).unwrap_or("");

        let last_name = get("Last Name").trim().to_string();
        if !last_name.is_empty() && previous_last_name.as_deref() != Some(last_name.as_str()) {
            family_id += 1;
            previous_last_name = Some(last_name.clone());
        }
        let household_id =
            if last_name.is_empty() { "1".to_string() } else { family_id.to_string() };
        let household_name = if last_name.is_empty() {
            String::new()
        } else {
            format!("{} Household", last_name)
        };

        let birthdate = format_birthdate(get("Birth Month and Day"), get("Age"), current_year);
        let anniversary = format_anniversary(get("Wedding Month and Day"));

        let mut medical_notes = get("Allergy").to_ascii_lowercase();
        if medical_notes == "no" {
            medical_notes.clear();
        }

        let grade = map_grade(get("School Grade")).map(|g| g.to_string()).unwrap_or_default();
        let (status, membership) = status_and_membership(get("Member Status"));

        let authorized_pickup = (1..=8)
            .map(|i| get(&format!("Authorized Pick up {}", i)).to_string())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join("|");

        let relationship = get("Relationship").to_ascii_lowercase();
        let household_primary_contact = if relationship.contains("head of household")
            || get("Primary Contact").eq_ignore_ascii_case("yes")
        {
            "TRUE"
        } else {
            ""
        };

        // The legacy export often leaves Emergency Contact blank; fall back
        // to whichever listed contact is not the person themselves.
        let mut emergency_contact = get("Emergency Contact").to_string();
        if emergency_contact.is_empty() {
            let primary_contact = get("Primary Contact");
            let first_name = get("First Name").to_ascii_lowercase();
            let primary_first_name = primary_contact
                .split_whitespace()
                .next()
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            emergency_contact = if !primary_contact.is_empty() && primary_first_name != first_name
            {
                primary_contact.to_string()
            } else {
                get("Secondary Contact").to_string()
            };
        }

        let remote = remote_id.to_string();
        let mobile_phone = format_phone(get("Cell Phone"));
        let home_phone = format_phone(get("Home Phone"));
        let work_phone = format_phone(get("Work Phone"));
        let emergency_phone = format_phone(get("Emergency Phone"));

        let record: [&str; 33] = [
            &remote,
            get("First Name"),
            get("Middle Name"),
            &last_name,
            &birthdate,
            &anniversary,
            get("Gender"),
            &grade,
            &medical_notes,
            get("Marital Status"),
            status,
            membership,
            get("Address"),
            get("City"),
            get("State"),
            get("Zip Code"),
            &mobile_phone,
            &home_phone,
            &work_phone,
            get("E-Mail"),
            &household_id,
            &household_name,
            household_primary_contact,
            yes_no_to_true_false(get("Baptized")),
            get("Baptized Date"),
            get("How Joined"),
            get("Date Joined"),
            get("Sunday School"),
            get("Activities"),
            &emergency_contact,
            &emergency_phone,
            get("Allergy"),
            &authorized_pickup,
        ];
        writer.write_record(record)?;

        remote_id += 1;
        rows_written += 1;
    }

    writer.flush()?;
    debug!(rows = rows_written, households = family_id - 1, "wrote import rows");
    Ok(rows_written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(input_csv: &str) -> (usize, Vec<HashMap<String, String>>) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("roster.csv");
        let output = dir.path().join("import.csv");
        std::fs::write(&input, input_csv).unwrap();

        let rows = write_import_csv(&input, &output, 2025).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let parsed = reader
            .deserialize::<HashMap<String, String>>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        (rows, parsed)
    }

    #[test]
    fn groups_households_by_consecutive_last_name() {
        let (rows, out) = transform(
            "First Name,Last Name\n\
             Alice,Smith\n\
             Bob,Smith\n\
             Carol,Jones\n",
        );
        assert_eq!(rows, 3);
        assert_eq!(out[0]["Household ID"], "2");
        assert_eq!(out[1]["Household ID"], "2");
        assert_eq!(out[2]["Household ID"], "3");
        assert_eq!(out[0]["Household Name"], "Smith Household");
        assert_eq!(out[2]["Household Name"], "Jones Household");
        assert_eq!(out[0]["remote_id"], "1");
        assert_eq!(out[2]["remote_id"], "3");
    }

    #[test]
    fn applies_field_transforms() {
        let (_, out) = transform(
            "First Name,Last Name,Birth Month and Day,Age,Cell Phone,Baptized,Member Status,School Grade,Allergy\n\
             Alice,Smith,01/01,10,1234567890,yes,yes,First Grade,Peanuts\n",
        );
        let row = &out[0];
        assert_eq!(row["Birthdate"], "01/01/2015");
        assert_eq!(row["Mobile Phone Number"], "(123) 456-7890");
        assert_eq!(row["Baptized"], "TRUE");
        assert_eq!(row["Status"], "Active");
        assert_eq!(row["Membership"], "Member");
        assert_eq!(row["Grade"], "1");
        assert_eq!(row["Medical Notes"], "peanuts");
        assert_eq!(row["Allergies"], "Peanuts");
    }

    #[test]
    fn joins_authorized_pickups_and_falls_back_for_emergency_contact() {
        let (_, out) = transform(
            "First Name,Last Name,Authorized Pick up 1,Authorized Pick up 2,Authorized Pick up 4,Primary Contact,Relationship\n\
             Alice,Smith,Jane Doe,John Doe,Late Addition,Alice Smith,Head of Household\n",
        );
        let row = &out[0];
        assert_eq!(row["Authorized Pickup"], "Jane Doe|John Doe|Late Addition");
        assert_eq!(row["Household Primary Contact"], "TRUE");
        // Primary contact is the person themselves, so the (absent)
        // secondary contact is used instead.
        assert_eq!(row["Emergency Contact"], "");
    }

    #[test]
    fn prefers_primary_contact_as_emergency_contact_when_distinct() {
        let (_, out) = transform(
            "First Name,Last Name,Primary Contact,Secondary Contact\n\
             Alice,Smith,Bob Smith,Carol Smith\n",
        );
        assert_eq!(out[0]["Emergency Contact"], "Bob Smith");
    }

    #[test]
    fn allergy_of_no_clears_medical_notes() {
        let (_, out) = transform("First Name,Last Name,Allergy\nAlice,Smith,No\n");
        assert_eq!(out[0]["Medical Notes"], "");
        assert_eq!(out[0]["Allergies"], "No");
    }
}
