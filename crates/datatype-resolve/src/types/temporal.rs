//! Date and time column types.

use super::declare_type;

declare_type! {
    /// Date-only columns.
    DateType {
        name: "date",
    }
}

declare_type! {
    /// Time-only columns.
    TimeType {
        name: "time",
    }
}

declare_type! {
    /// Date-and-time columns without timezone.
    DateTimeType {
        name: "datetime",
        aliases: ["timestamp", "datetime2", "smalldatetime"],
    }
}
