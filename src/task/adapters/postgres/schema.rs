//! Diesel schema for TaskFlow persistence.

diesel::table! {
    /// User accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Opaque password hash.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Account role.
        #[max_length = 50]
        role -> Varchar,
    }
}

diesel::table! {
    /// Per-user workspace containers.
    workspaces (id) {
        /// Workspace identifier.
        id -> Uuid,
        /// Owning user; unique, one workspace per user.
        owner_id -> Uuid,
        /// Workspace name.
        #[max_length = 255]
        name -> Varchar,
        /// Workspace description.
        description -> Text,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional start date.
        start_date -> Nullable<Date>,
        /// Optional end date.
        end_date -> Nullable<Date>,
        /// Ordered free-text tags.
        tags -> Array<Text>,
        /// Owning user.
        assignee_id -> Uuid,
        /// Optional workspace.
        workspace_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> users (assignee_id));
diesel::joinable!(workspaces -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, users, workspaces);
