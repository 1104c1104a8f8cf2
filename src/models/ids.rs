//! Opaque identifier types.
//!
//! Foreign keys between records are typed so that an employee id can never
//! be passed where a department id is expected.

/// Defines a string-backed identifier newtype with `Display`, `From` and
/// transparent serde support.
macro_rules! define_id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier.
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            /// Returns the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }
    };
}

define_id_type!(
    /// Identifier of a [`Holiday`](super::Holiday).
    HolidayId
);
define_id_type!(
    /// Internal identifier of an [`Employee`](super::Employee) record.
    EmployeeId
);
define_id_type!(
    /// Identifier of a [`Department`](super::Department).
    DepartmentId
);

impl HolidayId {
    /// Generates a fresh random holiday id.
    pub fn generate() -> Self {
        HolidayId(uuid::Uuid::new_v4().to_string())
    }
}
