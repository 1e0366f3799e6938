use serde::Serialize;
use std::fmt::Display;

macro_rules! impl_id {
    ($ident:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $ident(pub String);

        impl From<String> for $ident {
            fn from(value: String) -> Self {
                $ident(value)
            }
        }

        impl From<&str> for $ident {
            fn from(value: &str) -> Self {
                $ident(value.to_owned())
            }
        }

        impl Display for $ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_fmt(format_args!(concat!(stringify!($ident), "({})"), self.0))
            }
        }
    };
}

impl_id!(ContentItemId);
