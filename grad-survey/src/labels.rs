//! Display labels for survey answer fields.
//!
//! The table is maintained by hand alongside the survey forms. Nothing checks
//! that it covers every key a response may carry, so unmapped keys are shown
//! verbatim and reported through [`unknown_keys`].

use crate::response::SurveyResponse;

/// Field key to Hebrew display label.
pub const LABEL_TABLE: &[(&str, &str)] = &[
    // Personal details
    ("full_name", "שם מלא"),
    ("first_name", "שם פרטי"),
    ("last_name", "שם משפחה"),
    ("id_number", "מספר תעודת זהות"),
    ("email", "כתובת מייל"),
    ("phone", "טלפון"),
    ("city", "עיר מגורים"),
    ("birth_date", "תאריך לידה"),
    ("graduation_year", "שנת סיום"),
    ("class_name", "כיתה"),
    // Bagrut and psychometric
    ("bagrut_average", "ממוצע בגרות"),
    ("bagrut_full", "זכאות לבגרות מלאה"),
    ("math_units", "יחידות מתמטיקה"),
    ("english_units", "יחידות אנגלית"),
    ("psychometric_score", "ציון פסיכומטרי"),
    ("psychometric_date", "מועד מבחן פסיכומטרי"),
    // Service
    ("service_type", "סוג שירות"),
    ("service_unit", "יחידה"),
    ("service_role", "תפקיד"),
    ("service_start", "תחילת שירות"),
    ("service_end", "סיום שירות"),
    ("officer_course", "קורס קצינים"),
    // Studies
    ("is_studying", "לומד/ת כיום"),
    ("institution", "מוסד לימודים"),
    ("degree", "תואר"),
    ("field_of_study", "תחום לימודים"),
    ("study_year", "שנת לימודים"),
    ("scholarship", "מלגה"),
    // Employment
    ("is_employed", "עובד/ת כיום"),
    ("employer", "מקום עבודה"),
    ("job_title", "תפקיד בעבודה"),
    ("employment_field", "תחום תעסוקה"),
    ("employment_scope", "היקף משרה"),
    // Volunteering
    ("volunteers", "מתנדב/ת"),
    ("volunteer_org", "ארגון התנדבות"),
    ("volunteer_hours", "שעות התנדבות בחודש"),
    // Free text
    ("school_contribution", "תרומת בית הספר"),
    ("stay_in_touch", "מעוניין/ת בקשר עם בית הספר"),
    ("comments", "הערות"),
];

/// Label for `key`, or `key` itself when the table has no entry.
pub fn lookup(key: &str) -> &str {
    LABEL_TABLE
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

pub fn is_known(key: &str) -> bool {
    LABEL_TABLE.iter().any(|(known, _)| *known == key)
}

/// Keys of `response` that have no label and will be displayed verbatim.
pub fn unknown_keys(response: &SurveyResponse) -> Vec<&str> {
    response
        .keys()
        .map(String::as_str)
        .filter(|key| !is_known(key))
        .collect()
}
