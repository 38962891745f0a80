table! {
    account (id) {
        id -> Int4,
        name -> Varchar,
        email -> Varchar,
        phone_number -> Nullable<Varchar>,
        disabled -> Bool,
        date_joined -> Date,
    }
}
