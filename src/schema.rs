// Mirrors migrations/2025-03-13-000000_create_catalog/up.sql.

diesel::table! {
    universities (id) {
        id -> Integer,
        name -> Text,
        state -> Text,
        location -> Text,
        control -> Text,
        num_students -> Integer,
        percent_female -> Double,
        sat_verbal -> Double,
        sat_math -> Double,
        expenses -> Double,
        percent_financial_aid -> Double,
        num_applicants -> Integer,
        percent_admitted -> Double,
        percent_enrolled -> Double,
        scale_academics -> Integer,
        scale_social -> Integer,
        scale_quality_of_life -> Integer,
        webpage_url -> Nullable<Text>,
        image_url -> Nullable<Text>,
    }
}

diesel::table! {
    university_emphases (id) {
        id -> Integer,
        university_name -> Text,
        emphasis -> Text,
    }
}

diesel::table! {
    accounts (id) {
        id -> Integer,
        username -> Text,
        password -> Text,
        first_name -> Text,
        last_name -> Text,
        kind -> Text,
        active -> Bool,
    }
}

diesel::table! {
    saved_schools (id) {
        id -> Integer,
        username -> Text,
        school_name -> Text,
        saved_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    universities,
    university_emphases,
    accounts,
    saved_schools,
);
