// admin-console/tests/form_flow.rs
// End-to-end form state transitions, no server required

use admin_console::{AppConfig, BrandInput, Field, FormError, FormMode, ProductForm};
use catalog_client::ClientConfig;
use clap::Parser;
use shared::models::Product;

fn new_form() -> ProductForm {
    ProductForm::new(AppConfig::parse_from(["admin-console"]))
}

fn fetched_product() -> Product {
    Product {
        id: Some(9),
        name: "Mark II".to_string(),
        description: "Stage piano with weighted keys".to_string(),
        brand: "Kawai".to_string(),
        price: 2499.0,
        available: true,
        thumbnail: Some("/uploads/mark2.jpg".to_string()),
        category_id: 3,
    }
}

#[test]
fn create_path_gates_submission_on_every_field() {
    let mut form = new_form();

    form.set_field(Field::Available, "on");
    assert!(!form.is_submittable());

    form.set_field(Field::Name, "Djembe");
    form.set_field(Field::Description, "Rope-tuned hand drum from the workshop");
    form.set_field(Field::BrandSelect, "22");
    form.set_field(Field::Price, "549.90");
    form.set_field(Field::Category, "4");
    assert!(!form.is_submittable(), "thumbnail still missing");

    // a finished upload is what flips the last flag
    form.draft.thumbnail = Some("/uploads/djembe.jpg".to_string());
    form.validity.thumbnail = true;
    assert!(form.is_submittable());
}

#[test]
fn edit_path_starts_fully_valid_and_bound() {
    let mut form = new_form();
    form.begin_edit(&fetched_product());

    assert_eq!(form.mode(), FormMode::Edit { id: 9 });
    assert_eq!(form.brand_input(), BrandInput::Known);
    assert!(form.is_submittable());

    // touching one field re-validates just that field
    form.set_field(Field::Description, "too short");
    assert!(!form.is_submittable());

    form.set_field(Field::Description, "Stage piano, freshly serviced action");
    assert!(form.is_submittable());
}

#[test]
fn reedit_after_reset_shows_no_residue() {
    let mut form = new_form();
    form.begin_edit(&fetched_product());
    form.reset();

    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.draft.name, None);
    assert_eq!(form.draft.thumbnail, None);
    assert!(!form.is_submittable());
}

#[tokio::test]
async fn invalid_submit_is_rejected_before_any_request() {
    // port 9 is discard; if submit ever built a request this would hang or
    // error with a transport failure instead of a validation error
    let client = ClientConfig::new("http://127.0.0.1:9/api/v1")
        .with_timeout(1)
        .build_client();

    let mut form = new_form();
    form.set_field(Field::Name, "Djembe");

    match form.submit(&client, true).await {
        Err(FormError::Invalid) => {}
        other => panic!("expected a validation error, got {other:?}"),
    }
}
