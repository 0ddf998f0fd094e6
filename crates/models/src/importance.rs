use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[cfg(feature = "database")]
use sea_orm::Value;

/// How urgently a remark on a reservation should be looked at
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Importance {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<Importance> {
        Importance::iter().collect()
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Importance {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Importance".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<Importance> for Value {
    fn from(importance: Importance) -> Self {
        Value::String(Some(Box::new(importance.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Importance {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse Importance from {val:?}: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Importance {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_importance_display() {
        assert_eq!(Importance::Low.to_string(), "Low");
        assert_eq!(Importance::Critical.to_string(), "Critical");
    }

    #[test]
    fn test_importance_from_str() {
        assert_eq!(Importance::from_str("High").unwrap(), Importance::High);
        assert!(Importance::from_str("Urgent").is_err());
    }

    #[test]
    fn test_importance_all() {
        assert_eq!(Importance::all().len(), 4);
        assert_eq!(Importance::all()[0], Importance::default());
    }

    #[test]
    fn test_importance_serde_uses_variant_name() {
        let json = serde_json::to_string(&Importance::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }
}
