//! Fixed column roles for the student-performance dataset.
//!
//! The dataset has 20 columns:
//! - Hours_Studied: weekly study hours
//! - Attendance: percentage of classes attended
//! - Parental_Involvement: Low / Medium / High
//! - Access_to_Resources: Low / Medium / High
//! - Extracurricular_Activities: Yes / No
//! - Sleep_Hours: average hours of sleep per night
//! - Previous_Scores: score in earlier exams
//! - Motivation_Level: Low / Medium / High
//! - Internet_Access: Yes / No
//! - Tutoring_Sessions: sessions per month
//! - Family_Income: Low / Medium / High
//! - Teacher_Quality: Low / Medium / High (has missing values)
//! - School_Type: Public / Private
//! - Peer_Influence: Positive / Neutral / Negative
//! - Physical_Activity: hours of physical activity per week
//! - Learning_Disabilities: Yes / No
//! - Parental_Education_Level: High School / College / Postgraduate (has missing values)
//! - Distance_from_Home: Near / Moderate / Far (has missing values)
//! - Gender: Male / Female
//! - Exam_Score: final exam score, the prediction target
//!
//! The column set is fixed at build time; tables with a different set are a
//! contract violation surfaced as `MissingColumn` at fit/transform time.

/// Numeric feature columns, in output order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Hours_Studied",
    "Attendance",
    "Sleep_Hours",
    "Previous_Scores",
    "Tutoring_Sessions",
    "Physical_Activity",
];

/// Categorical feature columns, in output order. Each column is listed once;
/// duplicate entries in caller-supplied lists collapse to their first
/// occurrence.
pub const CATEGORICAL_COLUMNS: [&str; 13] = [
    "Gender",
    "Parental_Involvement",
    "Access_to_Resources",
    "Extracurricular_Activities",
    "Motivation_Level",
    "Internet_Access",
    "Family_Income",
    "Teacher_Quality",
    "School_Type",
    "Peer_Influence",
    "Learning_Disabilities",
    "Parental_Education_Level",
    "Distance_from_Home",
];

/// The prediction target. Excluded from both feature groups and appended raw
/// as the last column of the transformed matrices.
pub const LABEL_COLUMN: &str = "Exam_Score";

/// Numeric feature columns as owned strings.
pub fn numeric_columns() -> Vec<String> {
    NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// Categorical feature columns as owned strings.
pub fn categorical_columns() -> Vec<String> {
    CATEGORICAL_COLUMNS.iter().map(|s| s.to_string()).collect()
}
