//! End-to-end resolution behavior over the public API.

use std::collections::BTreeMap;

use datatype_resolve::{
    DataType, ResolveError, Result, TypeConfig, TypeDescriptor, TypeResolver, PRIORITY_DIALECT,
};

// Registered test types, implemented the way an external crate would:
// against the public `DataType` trait with an embedded `TypeConfig`.

#[derive(Debug, Default)]
struct MoneyType {
    cfg: TypeConfig,
}

impl MoneyType {
    fn boxed() -> Box<dyn DataType> {
        Box::new(Self::default())
    }
}

impl DataType for MoneyType {
    fn kind(&self) -> &'static str {
        "MoneyType"
    }
    fn name(&self) -> &str {
        "money"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["cash"]
    }
    fn parameters(&self) -> &[String] {
        self.cfg.parameters()
    }
    fn add_parameter(&mut self, raw: &str) {
        self.cfg.push_parameter(raw);
    }
    fn properties(&self) -> &BTreeMap<String, String> {
        self.cfg.properties()
    }
    fn settable_properties(&self) -> &'static [&'static str] {
        &["scale", "unsigned"]
    }
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.cfg
            .set_property(self.settable_properties(), self.kind(), name, value)
    }
}

#[derive(Debug, Default)]
struct VendorMoneyType {
    cfg: TypeConfig,
}

impl VendorMoneyType {
    fn boxed() -> Box<dyn DataType> {
        Box::new(Self::default())
    }
}

impl DataType for VendorMoneyType {
    fn kind(&self) -> &'static str {
        "VendorMoneyType"
    }
    fn name(&self) -> &str {
        "money"
    }
    fn priority(&self) -> i32 {
        PRIORITY_DIALECT
    }
    fn parameters(&self) -> &[String] {
        self.cfg.parameters()
    }
    fn add_parameter(&mut self, raw: &str) {
        self.cfg.push_parameter(raw);
    }
    fn properties(&self) -> &BTreeMap<String, String> {
        self.cfg.properties()
    }
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.cfg
            .set_property(self.settable_properties(), self.kind(), name, value)
    }
}

#[derive(Debug, Default)]
struct RivalMoneyType {
    cfg: TypeConfig,
}

impl RivalMoneyType {
    fn boxed() -> Box<dyn DataType> {
        Box::new(Self::default())
    }
}

impl DataType for RivalMoneyType {
    fn kind(&self) -> &'static str {
        "RivalMoneyType"
    }
    fn name(&self) -> &str {
        "money"
    }
    fn parameters(&self) -> &[String] {
        self.cfg.parameters()
    }
    fn add_parameter(&mut self, raw: &str) {
        self.cfg.push_parameter(raw);
    }
    fn properties(&self) -> &BTreeMap<String, String> {
        self.cfg.properties()
    }
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.cfg
            .set_property(self.settable_properties(), self.kind(), name, value)
    }
}

#[test]
fn highest_priority_implementation_wins_deterministically() -> anyhow::Result<()> {
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));
    resolver.register(TypeDescriptor::probe(VendorMoneyType::boxed));
    for _ in 0..5 {
        assert_eq!(resolver.from_description("money")?.kind(), "VendorMoneyType");
    }

    // registration order must not matter
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(VendorMoneyType::boxed));
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));
    assert_eq!(resolver.from_description("money")?.kind(), "VendorMoneyType");
    Ok(())
}

#[test]
fn equal_priority_keeps_both_and_first_registration_wins() -> anyhow::Result<()> {
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));
    resolver.register(TypeDescriptor::probe(RivalMoneyType::boxed));

    assert_eq!(resolver.list()["money"].len(), 2);
    assert_eq!(resolver.from_description("money")?.kind(), "MoneyType");
    Ok(())
}

#[test]
fn lookup_is_case_insensitive_with_identical_configuration() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();

    let upper = resolver.from_description("VARCHAR(10)")?;
    let lower = resolver.from_description("varchar(10)")?;
    assert_eq!(upper.kind(), lower.kind());
    assert_eq!(upper.parameters(), ["10"]);
    assert_eq!(lower.parameters(), ["10"]);
    Ok(())
}

#[test]
fn decimal_parameters_keep_positional_order() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();
    let ty = resolver.from_description("decimal(10,2)")?;
    assert_eq!(ty.parameters(), ["10", "2"]);

    // the numeric alias resolves to the same implementation
    let ty = resolver.from_description("numeric(10,2)")?;
    assert_eq!(ty.kind(), "DecimalType");
    Ok(())
}

#[test]
fn properties_apply_to_settable_names_only() -> anyhow::Result<()> {
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));

    let ty = resolver.from_description("money{scale:2,unsigned:true}")?;
    assert_eq!(ty.properties().get("scale").map(String::as_str), Some("2"));
    assert_eq!(
        ty.properties().get("unsigned").map(String::as_str),
        Some("true")
    );

    let err = resolver
        .from_description("money{wat:1}")
        .expect_err("unknown property must fail resolution");
    assert!(matches!(err, ResolveError::UnsettableProperty { .. }));
    let message = err.to_string();
    assert!(message.contains("wat"));
    assert!(message.contains("MoneyType"));
    Ok(())
}

#[test]
fn malformed_property_token_is_a_hard_failure() {
    let resolver = TypeResolver::with_builtins();
    let err = resolver
        .from_description("int{unsigned}")
        .expect_err("property without a colon must fail");
    assert!(matches!(err, ResolveError::MalformedProperty { .. }));
}

#[test]
fn unregistered_name_degrades_to_fallback_with_original_casing() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();
    let ty = resolver.from_description("frobnicate")?;
    assert_eq!(ty.kind(), "UnknownType");
    assert_eq!(ty.name(), "frobnicate");

    let ty = resolver.from_description("FROBnicate")?;
    assert_eq!(ty.name(), "FROBnicate");
    Ok(())
}

#[test]
fn unregister_removes_every_competing_implementation() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));
    resolver.register(TypeDescriptor::probe(VendorMoneyType::boxed));
    assert_eq!(resolver.from_description("money")?.kind(), "VendorMoneyType");

    assert!(resolver.unregister("money"));
    assert_eq!(resolver.from_description("money(19,4)")?.kind(), "UnknownType");

    // the alias bucket is distinct and survives
    assert_eq!(resolver.from_description("cash")?.kind(), "MoneyType");
    Ok(())
}

#[test]
fn builtin_unregister_hits_the_named_bucket() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();
    assert!(resolver.unregister("varchar"));

    let ty = resolver.from_description("varchar(10)")?;
    assert_eq!(ty.kind(), "UnknownType");
    assert_eq!(ty.name(), "varchar");
    Ok(())
}

#[test]
fn reregistering_a_descriptor_is_idempotent() -> anyhow::Result<()> {
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));
    resolver.register(TypeDescriptor::probe(MoneyType::boxed));

    let listing = resolver.list();
    assert_eq!(listing["money"].len(), 1);
    assert_eq!(listing["cash"].len(), 1);
    Ok(())
}

#[test]
fn registry_listing_serializes_for_diagnostics() -> anyhow::Result<()> {
    let resolver = TypeResolver::new();
    resolver.register(TypeDescriptor::probe(VendorMoneyType::boxed));

    let json = serde_json::to_value(resolver.list())?;
    assert_eq!(json["money"][0]["kind"], "VendorMoneyType");
    assert_eq!(json["money"][0]["priority"], 5);
    Ok(())
}

#[test]
fn builtin_aliases_resolve_to_canonical_implementations() -> anyhow::Result<()> {
    let resolver = TypeResolver::with_builtins();
    for (description, kind) in [
        ("integer", "IntType"),
        ("int8", "BigIntType"),
        ("bool", "BooleanType"),
        ("character varying(64)", "VarcharType"),
        ("double precision", "DoubleType"),
        ("timestamp", "DateTimeType"),
        ("uniqueidentifier", "UuidType"),
        ("bytea", "BlobType"),
        ("text", "ClobType"),
    ] {
        assert_eq!(resolver.from_description(description)?.kind(), kind, "{description}");
    }
    Ok(())
}
