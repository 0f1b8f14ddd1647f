use serde::Deserialize;

use dq_model::MetadataId;

/// Wire shape of the extra-metadata listing served by the metadata service.
///
/// Items carry more fields than these; everything not consumed here is
/// ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct ExtraMetadataPayload {
    pub extra_metadata_list: Vec<ExtraMetadataItem>,
}

#[derive(Debug, Deserialize)]
pub struct ExtraMetadataItem {
    pub id: MetadataId,
    pub attributes: ItemAttributes,
}

#[derive(Debug, Deserialize)]
pub struct ItemAttributes {
    pub extra_metadata_value: String,
}
