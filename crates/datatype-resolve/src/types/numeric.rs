//! Boolean and numeric column types.

use super::declare_type;

declare_type! {
    /// Boolean columns (`boolean`, `bool`, single-bit `bit`).
    BooleanType {
        name: "boolean",
        aliases: ["bool", "bit"],
    }
}

declare_type! {
    /// 8-bit integer columns.
    TinyIntType {
        name: "tinyint",
        properties: ["unsigned"],
    }
}

declare_type! {
    /// 16-bit integer columns.
    SmallIntType {
        name: "smallint",
        aliases: ["int2"],
        properties: ["unsigned"],
    }
}

declare_type! {
    /// 32-bit integer columns.
    IntType {
        name: "int",
        aliases: ["integer", "int4", "mediumint"],
        properties: ["unsigned"],
    }
}

declare_type! {
    /// 64-bit integer columns.
    BigIntType {
        name: "bigint",
        aliases: ["int8"],
        properties: ["unsigned"],
    }
}

declare_type! {
    /// 32-bit floating point columns.
    FloatType {
        name: "float",
        aliases: ["real", "float4"],
    }
}

declare_type! {
    /// 64-bit floating point columns.
    DoubleType {
        name: "double",
        aliases: ["double precision", "float8"],
    }
}

declare_type! {
    /// Exact decimal columns; positional parameters carry precision and
    /// scale (`decimal(10,2)`), the equivalent properties override them.
    DecimalType {
        name: "decimal",
        aliases: ["numeric", "number"],
        properties: ["precision", "scale", "unsigned"],
    }
}
