//! Character and large-object string column types.

use super::declare_type;

declare_type! {
    /// Fixed-length character columns.
    CharType {
        name: "char",
        aliases: ["character"],
    }
}

declare_type! {
    /// Variable-length character columns.
    VarcharType {
        name: "varchar",
        aliases: ["character varying", "varchar2"],
    }
}

declare_type! {
    /// Fixed-length national character columns.
    NCharType {
        name: "nchar",
    }
}

declare_type! {
    /// Variable-length national character columns.
    NVarcharType {
        name: "nvarchar",
        aliases: ["nvarchar2"],
    }
}

declare_type! {
    /// Unbounded character data.
    ClobType {
        name: "clob",
        aliases: ["text", "longtext", "ntext"],
    }
}
