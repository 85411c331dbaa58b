//! Macros for reducing boilerplate when defining records
//!
//! These macros generate the repetitive trait implementations needed for
//! each record type and for the closed value sets (status, priority,
//! category) their fields are drawn from.

/// Declare a closed set of values used as a record field
///
/// The labels double as the serialized form and as the value compared by
/// filters.
///
/// # Example
///
/// ```rust,ignore
/// impl_field_enum!(
///     /// Delivery progress
///     DeliveryStatus {
///         Scheduled => "scheduled",
///         InTransit => "in_transit",
///         Delivered => "delivered",
///     }
/// );
///
/// assert_eq!(DeliveryStatus::InTransit.as_str(), "in_transit");
/// assert_eq!("delivered".parse::<DeliveryStatus>(), Ok(DeliveryStatus::Delivered));
/// ```
#[macro_export]
macro_rules! impl_field_enum {
    (
        $(#[$meta:meta])*
        $type:ident {
            $( $variant:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $type {
            $(
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $type {
            /// Every value, in declaration order
            pub const ALL: &'static [$type] = &[ $( $type::$variant ),* ];

            /// Label used for display, filtering and serialization
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $type::$variant => $label ),*
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $type {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($type::$variant), )*
                    other => Err(format!("unknown {} '{}'", stringify!($type), other)),
                }
            }
        }

        impl $crate::core::field::ToFieldValue for $type {
            fn to_field_value(&self) -> $crate::core::field::FieldValue {
                $crate::core::field::FieldValue::String(self.as_str().to_string())
            }
        }

        impl From<$type> for $crate::core::filter::FilterValue {
            fn from(value: $type) -> Self {
                $crate::core::filter::FilterValue::Is(
                    $crate::core::field::ToFieldValue::to_field_value(&value),
                )
            }
        }
    };
}

/// Implement [`Record`](crate::core::record::Record) for a struct with an
/// `id: String` field
///
/// - `search`: fields searched by default
/// - `fields`: fields readable by name for filtering and sorting; each must
///   implement [`ToFieldValue`](crate::core::field::ToFieldValue)
/// - `archived`: optional `bool` field placing the record in the archived
///   partition
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(
///     Message,
///     "messages",
///     search: [sender, subject, body],
///     fields: [id, sender, subject, body, priority, read, sent_at],
///     archived: archived,
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $resource:literal,
        search: [ $( $search_field:ident ),* $(,)? ],
        fields: [ $( $field:ident ),* $(,)? ]
        $(, archived: $archived:ident )?
        $(,)?
    ) => {
        impl $crate::core::record::Record for $type {
            fn resource_name() -> &'static str {
                $resource
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( stringify!($search_field) ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                $(
                    if field == stringify!($field) {
                        return Some($crate::core::field::ToFieldValue::to_field_value(&self.$field));
                    }
                )*
                None
            }

            $(
                fn is_archived(&self) -> bool {
                    self.$archived
                }
            )?
        }
    };
}
