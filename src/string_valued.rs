/// Shared behavior of components that wrap exactly one validated string.
pub trait StringValued {
    /// Get the wrapped value verbatim
    fn as_str(&self) -> &str;

    /// Get an owned copy of the wrapped value
    fn to_string_value(&self) -> String {
        self.as_str().to_owned()
    }
}

/// Implement `StringValued` and the string conversions for a component whose
/// validating constructor is `$ty::new(&str) -> Result<Self>` and whose
/// value lives in a `value: String` field.
macro_rules! impl_string_valued {
    ($ty:ident) => {
        impl $crate::string_valued::StringValued for $ty {
            fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::ParseError;

            fn try_from(s: &str) -> $crate::error::Result<Self> {
                Self::new(s)
            }
        }

        impl From<$ty> for String {
            fn from(component: $ty) -> Self {
                component.value
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.value)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_string_valued;
