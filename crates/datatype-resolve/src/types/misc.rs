//! Binary, identifier, and document column types.

use super::declare_type;

declare_type! {
    /// Binary data columns.
    BlobType {
        name: "blob",
        aliases: ["bytea", "binary", "varbinary", "image", "longblob"],
    }
}

declare_type! {
    /// UUID/GUID columns.
    UuidType {
        name: "uuid",
        aliases: ["uniqueidentifier", "guid"],
    }
}

declare_type! {
    /// XML document columns.
    XmlType {
        name: "xml",
    }
}
