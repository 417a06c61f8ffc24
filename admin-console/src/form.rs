//! Form state for creating and editing products
//!
//! The controller owns the draft of the product being worked on plus one
//! validity flag per field. The draft keeps control values as raw strings;
//! typed coercion happens once, when the payload is built at submit.

use std::path::Path;

use catalog_client::{CatalogClient, ClientError};
use shared::models::{Product, ProductPayload};
use shared::reference;
use thiserror::Error;

use crate::config::AppConfig;
use crate::validation::{self, BrandChoice};

/// Errors surfaced by form transitions
#[derive(Debug, Error)]
pub enum FormError {
    /// Submit attempted while at least one field is invalid
    #[error("Please complete all fields correctly")]
    Invalid,

    /// A draft field failed to coerce into the payload
    #[error("Form field '{0}' is missing or malformed")]
    Malformed(&'static str),

    /// The selected thumbnail file was rejected
    #[error("Unsupported or oversized thumbnail file")]
    BadThumbnail,

    /// A catalog API call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Editable draft of a product; all fields absent after a reset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
    pub thumbnail: Option<String>,
    pub category_id: Option<String>,
}

/// One validity flag per draft field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub name: bool,
    pub description: bool,
    pub brand: bool,
    pub price: bool,
    pub available: bool,
    pub thumbnail: bool,
    pub category_id: bool,
}

impl FieldValidity {
    /// Every flag set to the same value
    pub fn all(value: bool) -> Self {
        Self {
            name: value,
            description: value,
            brand: value,
            price: value,
            available: value,
            thumbnail: value,
            category_id: value,
        }
    }

    /// The flags as one slice, for the conjunction check
    pub fn flags(&self) -> [bool; 7] {
        [
            self.name,
            self.description,
            self.brand,
            self.price,
            self.available,
            self.thumbnail,
            self.category_id,
        ]
    }
}

/// Whether the form is creating a new product or editing a fetched one
///
/// The bound id lives here, not in the draft, and decides whether submit
/// issues a create or an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

/// Which brand control currently feeds the draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrandInput {
    /// Dropdown of known brands; free-text input hidden
    #[default]
    Known,
    /// "Other" picked; free-text input shown and authoritative
    Custom,
}

/// Field identifiers for [`ProductForm::set_field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    BrandSelect,
    BrandCustom,
    Price,
    Available,
    Category,
}

/// Labels shown around the form, varying with the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
}

/// Form state controller
///
/// One instance per session; reset between uses.
#[derive(Debug, Clone)]
pub struct ProductForm {
    config: AppConfig,
    pub draft: ProductDraft,
    pub validity: FieldValidity,
    mode: FormMode,
    brand_input: BrandInput,
}

impl ProductForm {
    /// Create a controller in create mode with an empty draft
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            draft: ProductDraft::default(),
            validity: FieldValidity::default(),
            mode: FormMode::Create,
            brand_input: BrandInput::Known,
        }
    }

    /// Current mode
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Which brand control is live
    pub fn brand_input(&self) -> BrandInput {
        self.brand_input
    }

    /// Whether every field currently validates
    pub fn is_submittable(&self) -> bool {
        validation::is_form_valid(&self.validity)
    }

    /// Form labels for the current mode
    pub fn labels(&self) -> FormLabels {
        match self.mode {
            FormMode::Create => FormLabels {
                title: "Add an instrument!",
                subtitle: "Fill in every field and you're done.",
                submit: "Save to the catalog!",
                cancel: "I don't want to add an instrument after all.",
            },
            FormMode::Edit { .. } => FormLabels {
                title: "Freshen up that old product!",
                subtitle: "Because staying current matters.",
                submit: "Update it now!",
                cancel: "I changed my mind, let me out.",
            },
        }
    }

    /// Clear the draft, every validity flag, and the bound id
    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.validity = FieldValidity::default();
        self.mode = FormMode::Create;
        self.brand_input = BrandInput::Known;
    }

    /// Load a fetched product into the draft for editing
    ///
    /// All validity flags are forced true: the server copy is taken as
    /// well-formed. The brand dropdown stays live when the product's brand
    /// matches a known one; otherwise the free-text control takes over with
    /// the raw brand string.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = ProductDraft {
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            brand: Some(product.brand.clone()),
            price: Some(product.price.to_string()),
            available: Some(product.available),
            thumbnail: product.thumbnail.clone(),
            category_id: Some(product.category_id.to_string()),
        };
        self.validity = FieldValidity::all(true);
        self.brand_input = match reference::find_brand_by_name(&product.brand) {
            Some(_) => BrandInput::Known,
            None => BrandInput::Custom,
        };
        self.mode = match product.id {
            Some(id) => FormMode::Edit { id },
            None => FormMode::Create,
        };
    }

    /// Update exactly one draft field from its control's raw value and
    /// recompute exactly that field's validity flag
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => {
                self.draft.name = Some(value.to_string());
                self.validity.name = validation::validate_length(value, self.config.name_bounds());
            }
            Field::Description => {
                self.draft.description = Some(value.to_string());
                self.validity.description =
                    validation::validate_length(value, self.config.description_bounds());
            }
            Field::Price => {
                self.draft.price = Some(value.to_string());
                self.validity.price = validation::validate_number(value);
            }
            Field::Available => {
                let available = matches!(value.trim(), "true" | "yes" | "y" | "on" | "1");
                self.draft.available = Some(available);
                self.validity.available = true;
            }
            Field::Category => {
                self.draft.category_id = Some(value.to_string());
                self.validity.category_id = validation::validate_select(value);
            }
            Field::BrandSelect => {
                let choice = BrandChoice::parse(value);
                match choice {
                    BrandChoice::Known(id) => {
                        self.draft.brand = Some(
                            reference::find_brand_by_id(id)
                                .map(|brand| brand.name.to_string())
                                .unwrap_or_default(),
                        );
                        self.brand_input = BrandInput::Known;
                    }
                    BrandChoice::Other => {
                        // free-text control takes over; its own change
                        // supplies the brand value
                        self.brand_input = BrandInput::Custom;
                    }
                }
                self.validity.brand = validation::validate_brand_choice(choice);
            }
            Field::BrandCustom => {
                self.draft.brand = Some(value.to_string());
                self.validity.brand =
                    validation::validate_length(value, self.config.name_bounds());
            }
        }
    }

    /// Validate and immediately upload a thumbnail file
    ///
    /// A field-level side effect, not gated behind submit: a valid file is
    /// uploaded right away and the returned server path stored in the
    /// draft. A failed upload clears the thumbnail and its validity flag.
    pub async fn attach_thumbnail(
        &mut self,
        client: &CatalogClient,
        path: &Path,
    ) -> Result<(), FormError> {
        if !validation::validate_file(path, &self.config.upload_policy()) {
            self.validity.thumbnail = false;
            return Err(FormError::BadThumbnail);
        }
        self.validity.thumbnail = true;

        match client.upload_file(path).await {
            Ok(server_path) => {
                self.draft.thumbnail = Some(server_path);
                Ok(())
            }
            Err(err) => {
                self.draft.thumbnail = None;
                self.validity.thumbnail = false;
                Err(err.into())
            }
        }
    }

    /// Validate, build the typed payload, and create or update
    ///
    /// No network call is made unless every validity flag is set.
    /// `available_now` is read live from the availability control rather
    /// than from the draft copy. On success the form returns to create mode
    /// and the caller should refresh the list; on failure the draft is left
    /// intact for retry.
    pub async fn submit(
        &mut self,
        client: &CatalogClient,
        available_now: bool,
    ) -> Result<Product, FormError> {
        if !self.is_submittable() {
            return Err(FormError::Invalid);
        }

        let payload = self.build_payload(available_now)?;

        let result = match self.mode {
            FormMode::Edit { id } => client.update_product(id, &payload).await,
            FormMode::Create => client.create_product(&payload).await,
        };

        let product = result?;
        tracing::info!(id = ?product.id, name = %product.name, "product saved");
        self.reset();
        Ok(product)
    }

    /// Coerce the raw draft into the wire payload
    ///
    /// The single typed boundary: price to a float, category to an integer.
    fn build_payload(&self, available_now: bool) -> Result<ProductPayload, FormError> {
        let price = self
            .draft
            .price
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .ok_or(FormError::Malformed("price"))?;
        let category_id = self
            .draft
            .category_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or(FormError::Malformed("category"))?;

        Ok(ProductPayload {
            name: self.draft.name.clone().ok_or(FormError::Malformed("name"))?,
            description: self
                .draft
                .description
                .clone()
                .ok_or(FormError::Malformed("description"))?,
            brand: self.draft.brand.clone().ok_or(FormError::Malformed("brand"))?,
            price,
            available: available_now,
            thumbnail: self.draft.thumbnail.clone(),
            category_id,
        })
    }
}
