//! Declarative description of the backup schedule block.
//!
//! The descriptor is consumed before a definition reaches the expander: it
//! type checks the untyped block, runs the attached validators and fills in
//! defaults.
//!

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    suppress::suppress_rfc3339_time,
    validate::{
        Diagnostics, ValidationError, validate_frequency_interval, validate_frequency_unit,
        validate_retention_period, validate_rfc3339_time,
    },
};

/// The name the block is declared under.
pub const BACKUP_SCHEDULE: &str = "backup_schedule";

/// Field name of the backup frequency.
pub const FREQUENCY_INTERVAL: &str = "frequency_interval";
/// Field name of the unit of the backup frequency.
pub const FREQUENCY_UNIT: &str = "frequency_unit";
/// Field name of the flag keeping the last backup regardless of retention.
pub const KEEP_AT_LEAST_ONE_BACKUP: &str = "keep_at_least_one_backup";
/// Field name of the retention period.
pub const RETENTION_PERIOD_IN_DAYS: &str = "retention_period_in_days";
/// Field name of the schedule start time.
pub const START_TIME: &str = "start_time";

/// The schema of the `backup_schedule` block.
///
/// An optional list holding at most one element with five optional fields.
pub fn backup_schedule_schema() -> Schema {
    let fields = BTreeMap::from([
        (
            FREQUENCY_INTERVAL,
            Schema::optional(ValueType::Int).with_validator(Validator::FrequencyInterval),
        ),
        (
            FREQUENCY_UNIT,
            Schema::optional(ValueType::String)
                .with_default(DefaultValue::String("Day"))
                .with_validator(Validator::FrequencyUnit),
        ),
        (
            KEEP_AT_LEAST_ONE_BACKUP,
            Schema::optional(ValueType::Bool).with_default(DefaultValue::Bool(false)),
        ),
        (
            RETENTION_PERIOD_IN_DAYS,
            Schema::optional(ValueType::Int)
                .with_default(DefaultValue::Int(30))
                .with_validator(Validator::RetentionPeriod),
        ),
        (
            START_TIME,
            Schema::optional(ValueType::String)
                .with_validator(Validator::Rfc3339Time)
                .with_diff_suppress(DiffSuppress::Rfc3339Time),
        ),
    ]);

    Schema::optional(ValueType::List)
        .with_max_items(1)
        .with_elem(Resource { fields })
}

/// The type of a value in a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// A whole number.
    Int,

    /// `true` or `false`.
    Bool,

    /// Text.
    String,

    /// An ordered sequence of blocks.
    List,
}

impl ValueType {
    /// The name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
            Self::List => "list",
        }
    }

    /// Returns if a value is of this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Int => value.as_i64().is_some(),
            Self::Bool => value.is_boolean(),
            Self::String => value.is_string(),
            Self::List => value.is_array(),
        }
    }
}

/// The value an absent field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    #[allow(missing_docs)]
    Int(i64),
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    String(&'static str),
}

impl DefaultValue {
    /// The default as an untyped value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Int(value) => Value::from(*value),
            Self::Bool(value) => Value::from(*value),
            Self::String(value) => Value::from(*value),
        }
    }
}

/// A validator attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// See [`validate_frequency_interval`].
    FrequencyInterval,

    /// See [`validate_retention_period`].
    RetentionPeriod,

    /// See [`validate_frequency_unit`].
    FrequencyUnit,

    /// See [`validate_rfc3339_time`].
    Rfc3339Time,
}

impl Validator {
    /// Run the validator against a value.
    pub fn validate(&self, value: &Value, key: &str) -> Diagnostics {
        match self {
            Self::FrequencyInterval => with_int(value, key, validate_frequency_interval),
            Self::RetentionPeriod => with_int(value, key, validate_retention_period),
            Self::FrequencyUnit => with_str(value, key, validate_frequency_unit),
            Self::Rfc3339Time => with_str(value, key, validate_rfc3339_time),
        }
    }
}

fn with_int(value: &Value, key: &str, validate: fn(i64, &str) -> Diagnostics) -> Diagnostics {
    match value.as_i64() {
        Some(integer) => validate(integer, key),
        None => wrong_type(key, ValueType::Int, value),
    }
}

fn with_str(value: &Value, key: &str, validate: fn(&str, &str) -> Diagnostics) -> Diagnostics {
    match value.as_str() {
        Some(string) => validate(string, key),
        None => wrong_type(key, ValueType::String, value),
    }
}

/// A predicate declaring two textual values equal despite differing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSuppress {
    /// See [`suppress_rfc3339_time`].
    Rfc3339Time,
}

impl DiffSuppress {
    /// Returns if the change from `old` to `new` should be ignored.
    pub fn suppresses(&self, old: &str, new: &str) -> bool {
        match self {
            Self::Rfc3339Time => suppress_rfc3339_time(old, new),
        }
    }
}

/// The schema of a single field or block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The type of the value.
    pub value_type: ValueType,

    /// If the value may be left unset.
    pub optional: bool,

    /// The maximum number of elements of a list.
    pub max_items: Option<usize>,

    /// The value taken when unset.
    pub default: Option<DefaultValue>,

    /// Validator run against a set value.
    pub validate: Option<Validator>,

    /// Diff suppressor consulted when the value changes.
    pub diff_suppress: Option<DiffSuppress>,

    /// The shape of each element of a list.
    pub elem: Option<Resource>,
}

impl Schema {
    /// An optional field of a type.
    pub fn optional(value_type: ValueType) -> Self {
        Self {
            value_type,
            optional: true,
            max_items: None,
            default: None,
            validate: None,
            diff_suppress: None,
            elem: None,
        }
    }

    /// A required field of a type.
    pub fn required(value_type: ValueType) -> Self {
        Self {
            optional: false,
            ..Self::optional(value_type)
        }
    }

    #[allow(missing_docs)]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    #[allow(missing_docs)]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    #[allow(missing_docs)]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    #[allow(missing_docs)]
    pub fn with_diff_suppress(mut self, diff_suppress: DiffSuppress) -> Self {
        self.diff_suppress = Some(diff_suppress);
        self
    }

    #[allow(missing_docs)]
    pub fn with_elem(mut self, elem: Resource) -> Self {
        self.elem = Some(elem);
        self
    }

    /// Validate a value against the schema. `null` means the value is unset.
    pub fn validate(&self, key: &str, value: &Value) -> Diagnostics {
        if value.is_null() {
            if self.optional {
                return Diagnostics::default();
            }

            return Diagnostics::error(ValidationError::Required {
                key: key.to_string(),
            });
        }

        if !self.value_type.matches(value) {
            return wrong_type(key, self.value_type, value);
        }

        let mut diagnostics = Diagnostics::default();

        if let (Some(items), Some(max_items)) = (value.as_array(), self.max_items) {
            if items.len() > max_items {
                diagnostics.errors.push(ValidationError::TooManyItems {
                    key: key.to_string(),
                    max: max_items,
                    got: items.len(),
                });
            }
        }

        if let (Some(items), Some(elem)) = (value.as_array(), &self.elem) {
            for (index, item) in items.iter().enumerate() {
                diagnostics.extend(elem.validate(&format!("{key}.{index}"), item));
            }
        }

        if let Some(validator) = self.validate {
            diagnostics.extend(validator.validate(value, key));
        }

        diagnostics
    }

    /// Fill the unset fields of each list element with their defaults.
    pub fn apply_defaults(&self, value: &Value) -> Value {
        let (Some(items), Some(elem)) = (value.as_array(), &self.elem) else {
            return value.clone();
        };

        Value::Array(items.iter().map(|item| elem.apply_defaults(item)).collect())
    }
}

/// The fields of a block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The fields by name.
    pub fields: BTreeMap<&'static str, Schema>,
}

impl Resource {
    /// Validate a block against its fields.
    pub fn validate(&self, key: &str, value: &Value) -> Diagnostics {
        let Some(object) = value.as_object() else {
            return Diagnostics::error(ValidationError::WrongType {
                key: key.to_string(),
                expected: "block",
                got: type_name(value),
            });
        };

        let mut diagnostics = Diagnostics::default();

        for name in object.keys() {
            if !self.fields.contains_key(name.as_str()) {
                diagnostics.errors.push(ValidationError::UnknownField {
                    key: format!("{key}.{name}"),
                });
            }
        }

        for (name, schema) in &self.fields {
            let field = object.get(*name).unwrap_or(&Value::Null);
            diagnostics.extend(schema.validate(&format!("{key}.{name}"), field));
        }

        diagnostics
    }

    /// Fill the unset fields of a block with their defaults.
    pub fn apply_defaults(&self, value: &Value) -> Value {
        let Some(object) = value.as_object() else {
            return value.clone();
        };

        let mut object = object.clone();
        for (name, schema) in &self.fields {
            let Some(default) = schema.default else {
                continue;
            };

            let entry = object.entry(*name).or_insert(Value::Null);
            if entry.is_null() {
                *entry = default.to_value();
            }
        }

        Value::Object(object)
    }

    /// Returns if a change to `field` from `old` to `new` should be ignored.
    pub fn suppresses_diff(&self, field: &str, old: &str, new: &str) -> bool {
        self.fields
            .get(field)
            .and_then(|schema| schema.diff_suppress)
            .is_some_and(|suppress| suppress.suppresses(old, new))
    }
}

fn wrong_type(key: &str, expected: ValueType, value: &Value) -> Diagnostics {
    Diagnostics::error(ValidationError::WrongType {
        key: key.to_string(),
        expected: expected.name(),
        got: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_i64() => "int",
        Value::Number(number) if number.is_u64() => "int larger than 9223372036854775807",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "block",
    }
}
