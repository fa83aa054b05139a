use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Opaque identifier of a provider-side document
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct DocumentId(String);

impls_for_string_newtype!(DocumentId);
