use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use canvas_core::model;

macro_rules! impl_api_id {
    ($ident:ident) => {
        impl From<&model::$ident> for $ident {
            fn from(value: &model::$ident) -> Self {
                $ident(value.0.clone())
            }
        }

        impl From<model::$ident> for $ident {
            fn from(value: model::$ident) -> Self {
                $ident(value.0)
            }
        }

        impl From<$ident> for model::$ident {
            fn from(value: $ident) -> Self {
                model::$ident(value.0)
            }
        }
    };
}

// The struct declaration stays outside the macro so derive(ToSchema) is
// visible to utoipa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
pub struct ContentItemId(pub String);

impl_api_id!(ContentItemId);
