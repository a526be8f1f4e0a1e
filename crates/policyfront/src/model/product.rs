use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One level of the three-level category tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryLevel {
    #[serde(default)]
    pub name: String,
}

/// Three-level category classification of an insurance product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub level1: CategoryLevel,
    #[serde(default)]
    pub level2: CategoryLevel,
    #[serde(default)]
    pub level3: CategoryLevel,
}

impl Categories {
    pub fn new(
        level1: impl Into<String>,
        level2: impl Into<String>,
        level3: impl Into<String>,
    ) -> Self {
        Self {
            level1: CategoryLevel { name: level1.into() },
            level2: CategoryLevel { name: level2.into() },
            level3: CategoryLevel { name: level3.into() },
        }
    }
}

/// Represents an insurance product in a vendor's catalog.
///
/// `options` is a free-form set of boolean feature flags; the client never
/// interprets individual flags, it round-trips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub executive_phone: String,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub options: BTreeMap<String, bool>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub other_images: Vec<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A new image attached to a product form, not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl NewImage {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Vendor-side product form state.
///
/// A draft is loose by design: the catalog store validates it into a
/// [`ProductPayload`] at submit time, and violations never reach the network.
/// `existing_images` holds the URLs already hosted for the product being
/// edited; they matter on update, where omitting them would make the backend
/// drop the images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub contact_number: String,
    pub executive_phone: String,
    pub categories: Categories,
    pub options: BTreeMap<String, bool>,
    pub new_images: Vec<NewImage>,
    pub existing_images: Vec<String>,
}

/// Validated product submission, ready for the multipart encoder.
///
/// On an update with zero new images, `main_image` carries the first
/// pre-existing URL and `other_images` the remainder, so the backend keeps
/// them. With new images attached both fields stay empty and the backend
/// derives the image set from the uploads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub contact_number: String,
    pub executive_phone: String,
    pub categories: Categories,
    pub options: BTreeMap<String, bool>,
    pub new_images: Vec<NewImage>,
    pub main_image: Option<String>,
    pub other_images: Vec<String>,
}
