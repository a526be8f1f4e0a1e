//! Draft validation for product submissions.

use crate::catalog::CatalogError;
use crate::model::{ProductDraft, ProductPayload};

/// Whether a validated draft creates a product or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// Validates a draft into a submittable payload.
///
/// Required text fields and all three category names must be non-blank. On
/// [`SubmitMode::Create`] at least one new image must be attached. On
/// [`SubmitMode::Update`] a draft with no new images re-sends the existing
/// URLs — the first as the main image, the rest as other images — so the
/// backend does not treat their omission as deletion; a draft with neither
/// new nor existing images is rejected.
pub fn validate(draft: &ProductDraft, mode: SubmitMode) -> Result<ProductPayload, CatalogError> {
    require(&draft.name, "name")?;
    require(&draft.description, "description")?;
    require(&draft.contact_number, "contactNumber")?;
    require(&draft.executive_phone, "executivePhone")?;
    require(&draft.categories.level1.name, "categories.level1.name")?;
    require(&draft.categories.level2.name, "categories.level2.name")?;
    require(&draft.categories.level3.name, "categories.level3.name")?;

    let mut payload = ProductPayload {
        name: draft.name.clone(),
        description: draft.description.clone(),
        contact_number: draft.contact_number.clone(),
        executive_phone: draft.executive_phone.clone(),
        categories: draft.categories.clone(),
        options: draft.options.clone(),
        new_images: draft.new_images.clone(),
        main_image: None,
        other_images: Vec::new(),
    };

    match mode {
        SubmitMode::Create => {
            if payload.new_images.is_empty() {
                return Err(CatalogError::NoImages);
            }
        }
        SubmitMode::Update => {
            if payload.new_images.is_empty() {
                let mut existing = draft.existing_images.iter();
                match existing.next() {
                    Some(main) => {
                        payload.main_image = Some(main.clone());
                        payload.other_images = existing.cloned().collect();
                    }
                    None => return Err(CatalogError::NoImages),
                }
            }
        }
    }

    Ok(payload)
}

fn require(value: &str, field: &'static str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        Err(CatalogError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Categories, NewImage};

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: "Gold Plan".into(),
            description: "Full cover".into(),
            contact_number: "9999".into(),
            executive_phone: "8888".into(),
            categories: Categories::new("Insurance", "Motor", "Car"),
            new_images: vec![NewImage::new("a.png", b"img".to_vec())],
            ..Default::default()
        }
    }

    #[test]
    fn complete_create_draft_passes() {
        let payload = validate(&full_draft(), SubmitMode::Create).unwrap();
        assert_eq!(payload.name, "Gold Plan");
        assert_eq!(payload.new_images.len(), 1);
        assert_eq!(payload.main_image, None);
        assert!(payload.other_images.is_empty());
    }

    #[test]
    fn blank_category_name_is_named_in_the_error() {
        let mut draft = full_draft();
        draft.categories.level2.name = "  ".into();
        let err = validate(&draft, SubmitMode::Create).unwrap_err();
        assert_eq!(err, CatalogError::MissingField("categories.level2.name"));
    }

    #[test]
    fn create_without_images_is_rejected() {
        let mut draft = full_draft();
        draft.new_images.clear();
        let err = validate(&draft, SubmitMode::Create).unwrap_err();
        assert_eq!(err, CatalogError::NoImages);
    }

    #[test]
    fn update_without_new_images_resends_existing_urls() {
        let mut draft = full_draft();
        draft.new_images.clear();
        draft.existing_images = vec![
            "https://img/1.png".into(),
            "https://img/2.png".into(),
            "https://img/3.png".into(),
        ];

        let payload = validate(&draft, SubmitMode::Update).unwrap();
        assert_eq!(payload.main_image.as_deref(), Some("https://img/1.png"));
        assert_eq!(
            payload.other_images,
            vec!["https://img/2.png".to_string(), "https://img/3.png".to_string()]
        );
    }

    #[test]
    fn update_with_new_images_does_not_resend_urls() {
        let mut draft = full_draft();
        draft.existing_images = vec!["https://img/1.png".into()];

        let payload = validate(&draft, SubmitMode::Update).unwrap();
        assert_eq!(payload.new_images.len(), 1);
        assert_eq!(payload.main_image, None);
        assert!(payload.other_images.is_empty());
    }

    #[test]
    fn update_with_no_images_at_all_is_rejected() {
        let mut draft = full_draft();
        draft.new_images.clear();
        let err = validate(&draft, SubmitMode::Update).unwrap_err();
        assert_eq!(err, CatalogError::NoImages);
    }
}
