/// Implements [`std::fmt::Display`], [`std::str::FromStr`] and the
/// [`uuid::Uuid`] conversions for an id newtype.
macro_rules! impls_for_uuid_newtype {
    ($newtype: ty) => {
        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $newtype {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl std::convert::From<uuid::Uuid> for $newtype {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl std::convert::From<$newtype> for uuid::Uuid {
            fn from(value: $newtype) -> Self {
                value.0
            }
        }

        impl std::cmp::PartialEq<uuid::Uuid> for $newtype {
            fn eq(&self, other: &uuid::Uuid) -> bool {
                self.0.eq(other)
            }
        }
    };
}
pub(crate) use impls_for_uuid_newtype;

/// Implements the traits sea-orm needs to use an id newtype as a column or
/// primary key. Ids are stored in the database as their canonical string form.
macro_rules! impls_for_seaorm_newtype {
    ($newtype: ty) => {
        impl std::convert::From<$newtype> for sea_orm::Value {
            fn from(source: $newtype) -> Self {
                source.0.to_string().into()
            }
        }

        // needed for sea-orm `eq` to work
        impl std::convert::From<&$newtype> for sea_orm::Value {
            fn from(source: &$newtype) -> Self {
                source.0.to_string().into()
            }
        }

        impl sea_orm::TryGetable for $newtype {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                idx: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let s: String = <String as sea_orm::TryGetable>::try_get_by(res, idx)?;

                let newtype_str = stringify!($newtype);
                let parsed: $newtype = s.parse().map_err(|error| {
                    sea_orm::TryGetError::DbErr(sea_orm::error::DbErr::Type(format!(
                        "Failed to parse {newtype_str}: {error}"
                    )))
                })?;

                Ok(parsed)
            }
        }

        impl sea_orm::sea_query::ValueType for $newtype {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                let s = <String as sea_orm::sea_query::ValueType>::try_from(v)?;

                s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }

            fn type_name() -> String {
                stringify!($newtype).to_owned()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::None)
            }
        }

        // needed for sea-orm `find_by_id` to work
        impl std::convert::From<&$newtype> for $newtype {
            fn from(source: &$newtype) -> Self {
                Self(source.0)
            }
        }

        // needed to put the type inside an Option column
        impl sea_orm::sea_query::value::Nullable for $newtype {
            fn null() -> sea_orm::Value {
                sea_orm::Value::String(None)
            }
        }

        // needed to use the type as a primary key
        impl sea_orm::TryFromU64 for $newtype {
            fn try_from_u64(_n: u64) -> Result<Self, sea_orm::DbErr> {
                Err(sea_orm::DbErr::ConvertFromU64(stringify!($newtype)))
            }
        }
    };
}
pub(crate) use impls_for_seaorm_newtype;

/// Declares a uuid-backed id newtype with serde, utoipa and sea-orm support.
macro_rules! id_newtype {
    ($(#[$docs: meta])* $newtype: ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $newtype(uuid::Uuid);

        $crate::macros::impls_for_uuid_newtype!($newtype);

        #[cfg(feature = "sea-orm")]
        $crate::macros::impls_for_seaorm_newtype!($newtype);
    };
}
pub(crate) use id_newtype;
