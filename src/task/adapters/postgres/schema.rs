//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Generated task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Owning user identifier.
        user_id -> Int8,
        /// Status label.
        #[max_length = 50]
        status -> Varchar,
    }
}
