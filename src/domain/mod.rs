// src/domain/mod.rs

/// Declares a string-keyed enum used as a table status or sort column.
///
/// Generates the table trait impl (`RecordStatus` or `SortField`), `FromStr`
/// (unknown keys are a `BadRequest`), `Display`, serde `Serialize` as the key,
/// and rusqlite `ToSql`/`FromSql` so the key is what lands in the database.
macro_rules! keyed_enum {
    (@all RecordStatus $name:ident [$($variant:ident),+]) => {
        const ALL: &'static [Self] = &[$($name::$variant),+];
    };
    (@all SortField $name:ident [$($variant:ident),+]) => {};
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $table_trait:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::table::$table_trait for $name {
            keyed_enum!(@all $table_trait $name [$($variant),+]);

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::ServerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::errors::ServerError::BadRequest(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<$name as $crate::table::$table_trait>::as_str(self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                serializer.serialize_str(<$name as $crate::table::$table_trait>::as_str(self))
            }
        }

        impl rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(
                    <$name as $crate::table::$table_trait>::as_str(self),
                ))
            }
        }

        impl rusqlite::types::FromSql for $name {
            fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: $crate::errors::ServerError| rusqlite::types::FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

pub mod affiliate;
pub mod affiliate_request;
pub mod commission;
pub mod money;
pub mod payout;
pub mod ticket;
pub mod tiers;
