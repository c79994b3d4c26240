//! Diesel schema for item persistence.

diesel::table! {
    /// Task records with lifecycle timestamps.
    tasks (id) {
        /// Store-assigned identity.
        id -> BigInt,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Completion flag.
        done -> Bool,
        /// Creation timestamp.
        creation_date_time -> Nullable<Timestamptz>,
        /// Last modification timestamp.
        last_modification_date_time -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Todo records; timestamp columns stay null.
    todos (id) {
        /// Store-assigned identity.
        id -> BigInt,
        /// Todo name.
        #[max_length = 255]
        name -> Varchar,
        /// Completion flag.
        done -> Bool,
        /// Always null for todos.
        creation_date_time -> Nullable<Timestamptz>,
        /// Always null for todos.
        last_modification_date_time -> Nullable<Timestamptz>,
    }
}
