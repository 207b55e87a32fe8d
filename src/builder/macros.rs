//! Macros for ergonomic event and state declarations.

/// Declare an enum usable as an event or state type.
///
/// The enum derives ordering and hashing, and serializes as its variant
/// name through the serde re-exported by this crate, so callers need no
/// serde dependency of their own. Its `Display` form is the variant name,
/// or the label given with `=>`. Variant declaration order is the sort
/// order used by tables and diagrams.
///
/// # Example
///
/// ```
/// use switchyard::fsm_enum;
///
/// fsm_enum! {
///     pub enum LampStatus {
///         Closed => "closed",
///         Intermediate => "intermediate",
///         Opened => "opened",
///     }
/// }
///
/// fsm_enum! {
///     pub enum Step {
///         First,
///         Second,
///     }
/// }
///
/// assert_eq!(LampStatus::Opened.to_string(), "opened");
/// assert_eq!(Step::Second.to_string(), "Second");
/// assert!(LampStatus::Closed < LampStatus::Opened);
/// ```
#[macro_export]
macro_rules! fsm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Debug
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<__S>(&self, serializer: __S) -> ::std::result::Result<__S::Ok, __S::Error>
            where
                __S: $crate::__serde::Serializer,
            {
                let variant = match self {
                    $(Self::$variant => stringify!($variant)),*
                };
                serializer.serialize_str(variant)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<__D>(deserializer: __D) -> ::std::result::Result<Self, __D::Error>
            where
                __D: $crate::__serde::Deserializer<'de>,
            {
                let variant =
                    <::std::string::String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                match variant.as_str() {
                    $(stringify!($variant) => ::std::result::Result::Ok(Self::$variant),)*
                    other => ::std::result::Result::Err(
                        <__D::Error as $crate::__serde::de::Error>::unknown_variant(
                            other,
                            &[$(stringify!($variant)),*],
                        ),
                    ),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let label = match self {
                    $(Self::$variant => $crate::__fsm_enum_label!($variant $(, $label)?)),*
                };
                f.write_str(label)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fsm_enum_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::{Declaration, TableBuilder};

    fsm_enum! {
        enum LampEvent {
            Open => "open",
            Close => "close",
            PartialClose => "partial-close",
        }
    }

    fsm_enum! {
        enum LampStatus {
            Closed => "closed",
            Intermediate => "intermediate",
            Opened => "opened",
        }
    }

    #[test]
    fn fsm_enum_uses_labels_for_display() {
        assert_eq!(LampEvent::PartialClose.to_string(), "partial-close");
        assert_eq!(LampStatus::Intermediate.to_string(), "intermediate");
    }

    #[test]
    fn fsm_enum_supports_visibility() {
        // The macro should work with pub visibility
        fsm_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.to_string(), "B");
        assert!(PublicState::A < PublicState::B);
    }

    #[test]
    fn fsm_enum_types_drive_a_table() {
        let table = TableBuilder::new()
            .declare(Declaration::new(
                LampEvent::Open,
                [LampStatus::Closed],
                LampStatus::Opened,
            ))
            .declare(Declaration::new(
                LampEvent::Close,
                [LampStatus::Opened],
                LampStatus::Closed,
            ))
            .build();

        assert_eq!(
            table.transform(&LampStatus::Closed, &LampEvent::Open).unwrap(),
            &LampStatus::Opened
        );
        assert_eq!(table.state_display_name(&LampStatus::Opened), "opened");
        assert!(!table.contains_event(&LampEvent::PartialClose));
    }

    #[test]
    fn fsm_enum_serializes_by_variant_name() {
        let json = serde_json::to_string(&LampStatus::Opened).unwrap();
        assert_eq!(json, "\"Opened\"");
    }

    #[test]
    fn fsm_enum_deserializes_variant_names_only() {
        let status: LampStatus = serde_json::from_str("\"Intermediate\"").unwrap();
        assert_eq!(status, LampStatus::Intermediate);

        let err = serde_json::from_str::<LampStatus>("\"intermediate\"").unwrap_err();
        assert!(err.to_string().contains("unknown variant `intermediate`"));
    }
}
