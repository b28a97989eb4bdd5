diesel::table! {
    contacts (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        message -> Text,
        property_interest -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    partnerships (id) {
        id -> Text,
        company_name -> Text,
        contact_name -> Text,
        email -> Text,
        phone -> Text,
        message -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    properties (id) {
        id -> Text,
        name -> Text,
        location -> Text,
        description -> Text,
        rental_price -> Nullable<Text>,
        sale_price -> Nullable<Text>,
        size -> Integer,
        bedrooms -> Integer,
        bathrooms -> Integer,
        image -> Text,
        featured -> Text,
        created_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    contacts,
    partnerships,
    properties,
);
