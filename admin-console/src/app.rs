//! Interactive admin session
//!
//! Stands in for the browser event loop: each console command is one
//! discrete event. Client errors are caught at the command that triggered
//! them and surfaced as notifications; none end the session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use catalog_client::CatalogClient;
use shared::models::Product;
use shared::reference;

use crate::config::AppConfig;
use crate::form::{BrandInput, Field, FormError, ProductForm};
use crate::view::ProductTable;

/// Outcome of one field prompt
enum Entry {
    /// A new raw value for the control
    Value(String),
    /// Empty input: keep the current value
    Keep,
}

/// Console admin session
pub struct App {
    client: CatalogClient,
    table: ProductTable,
    form: ProductForm,
}

impl App {
    /// Wire up the session from configuration
    pub fn new(config: AppConfig) -> Self {
        let client = config.client_config().build_client();
        let table = ProductTable::new(&config.server_url);
        let form = ProductForm::new(config);
        Self {
            client,
            table,
            form,
        }
    }

    /// Run the command loop until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        println!("Instrument catalog admin");
        println!("Commands: list, new, edit <id>, delete <id>, quit");
        self.refresh().await;

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = read_line()? else { break };

            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("list"), _) => self.refresh().await,
                (Some("new"), _) => self.form_session(None).await?,
                (Some("edit"), Some(id)) => match id.parse::<i64>() {
                    Ok(id) => self.edit(id).await?,
                    Err(_) => notify("edit takes a numeric product id"),
                },
                (Some("delete"), Some(id)) => match id.parse::<i64>() {
                    Ok(id) => self.delete(id).await?,
                    Err(_) => notify("delete takes a numeric product id"),
                },
                (Some("quit") | Some("exit"), _) => break,
                (None, _) => {}
                _ => notify("Commands: list, new, edit <id>, delete <id>, quit"),
            }
        }
        Ok(())
    }

    /// Reload and re-render the product table
    ///
    /// The loading indicator clears on success and failure alike; a failed
    /// fetch surfaces a notification instead of a stale table.
    async fn refresh(&mut self) {
        print!("Loading products... ");
        let _ = io::stdout().flush();

        match self.client.list_products().await {
            Ok(products) => {
                println!("done.");
                println!("{}", self.table.render(&products));
            }
            Err(err) => {
                println!();
                tracing::error!(error = %err, "product list fetch failed");
                notify("Error loading products. Please try again.");
            }
        }
    }

    async fn edit(&mut self, id: i64) -> Result<()> {
        match self.client.get_product(id).await {
            Ok(product) => {
                self.form.begin_edit(&product);
                self.form_session(Some(&product)).await
            }
            Err(err) => {
                notify(&format!("Error loading the product: {err}"));
                Ok(())
            }
        }
    }

    /// Delete with confirmation; the table only changes via a server refresh
    async fn delete(&mut self, id: i64) -> Result<()> {
        if !confirm("Delete this product? This cannot be undone.")? {
            return Ok(());
        }

        println!("Deleting...");
        match self.client.delete_product(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => notify(&err.to_string()),
        }
        Ok(())
    }

    /// Form-filling session, standing in for the modal dialog
    ///
    /// `current` is the fetched product when editing; `None` opens a fresh
    /// create form.
    async fn form_session(&mut self, current: Option<&Product>) -> Result<()> {
        if current.is_none() {
            self.form.reset();
            // a fresh form starts with the availability control switched on
            self.form.set_field(Field::Available, "on");
        }
        let mut available_control = current.map(|product| product.available).unwrap_or(true);

        let labels = self.form.labels();
        println!("{} {}", labels.title, labels.subtitle);
        println!("(Enter keeps the shown value, 'cancel' aborts)");

        if !self.field_prompt("Name", Field::Name, self.form.draft.name.clone())? {
            return self.cancel();
        }
        if !self.field_prompt(
            "Description",
            Field::Description,
            self.form.draft.description.clone(),
        )? {
            return self.cancel();
        }

        println!("Brands:");
        for brand in reference::BRANDS {
            println!("  {:>2}) {}", brand.id, brand.name);
        }
        println!("   0) Other brand");
        match prompt("Brand", self.form.draft.brand.as_deref())? {
            None => return self.cancel(),
            Some(Entry::Keep) => {}
            Some(Entry::Value(value)) => {
                self.form.set_field(Field::BrandSelect, &value);
                if self.form.brand_input() == BrandInput::Custom
                    && !self.field_prompt(
                        "New brand name",
                        Field::BrandCustom,
                        self.form.draft.brand.clone(),
                    )?
                {
                    return self.cancel();
                }
            }
        }

        if !self.field_prompt("Price", Field::Price, self.form.draft.price.clone())? {
            return self.cancel();
        }

        let shown = if available_control { "y" } else { "n" };
        match prompt("Available (y/n)", Some(shown))? {
            None => return self.cancel(),
            Some(Entry::Keep) => {}
            Some(Entry::Value(value)) => {
                self.form.set_field(Field::Available, &value);
                available_control = self.form.draft.available.unwrap_or(false);
            }
        }

        println!("Categories:");
        for category in reference::CATEGORIES {
            println!("  {}) {}", category.id, category.name);
        }
        if !self.field_prompt("Category", Field::Category, self.form.draft.category_id.clone())? {
            return self.cancel();
        }

        match prompt("Thumbnail file", self.form.draft.thumbnail.as_deref())? {
            None => return self.cancel(),
            Some(Entry::Keep) => {}
            Some(Entry::Value(value)) => {
                match self
                    .form
                    .attach_thumbnail(&self.client, Path::new(&value))
                    .await
                {
                    Ok(()) => println!("Thumbnail uploaded."),
                    Err(err) => notify(&format!("Error uploading the image: {err}")),
                }
            }
        }

        if !confirm(labels.submit)? {
            return self.cancel();
        }

        println!("Saving...");
        match self.form.submit(&self.client, available_control).await {
            Ok(_) => {
                println!("Saved!");
                self.refresh().await;
            }
            Err(err @ FormError::Invalid) => notify(&err.to_string()),
            Err(err) => notify(&format!("Error: {err}")),
        }
        Ok(())
    }

    /// One simple field prompt routed into the controller; false = cancelled
    fn field_prompt(&mut self, label: &str, field: Field, current: Option<String>) -> Result<bool> {
        match prompt(label, current.as_deref())? {
            None => Ok(false),
            Some(Entry::Keep) => Ok(true),
            Some(Entry::Value(value)) => {
                self.form.set_field(field, &value);
                Ok(true)
            }
        }
    }

    fn cancel(&mut self) -> Result<()> {
        notify(self.form.labels().cancel);
        Ok(())
    }
}

/// Blocking notification, the alert() stand-in
fn notify(message: &str) {
    println!("!! {message}");
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} (y/n): ");
    io::stdout().flush()?;
    Ok(matches!(read_line()?.as_deref(), Some("y") | Some("yes")))
}

/// Prompt for one field; `None` means the session was cancelled
fn prompt(label: &str, current: Option<&str>) -> io::Result<Option<Entry>> {
    match current {
        Some(current) if !current.is_empty() => print!("{label} [{current}]: "),
        _ => print!("{label}: "),
    }
    io::stdout().flush()?;

    match read_line()? {
        None => Ok(None),
        Some(line) if line == "cancel" => Ok(None),
        Some(line) if line.is_empty() => Ok(Some(Entry::Keep)),
        Some(line) => Ok(Some(Entry::Value(line))),
    }
}

/// Read one trimmed line from stdin; `None` at end of input
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
