use crate::app::command::Command;
use crate::core::catalog::Catalog;
use crate::core::store::{CartStore, SubscriptionId};
use crate::core::{Cart, CartEvent, CartObserver};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Display text for the screen. Any subset can be overridden from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub products_heading: String,
    pub cart_heading: String,
    pub empty_cart: String,
    pub add_button: String,
    pub remove_button: String,
    pub confirm_button: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            products_heading: "Productos".to_string(),
            cart_heading: "Carrito".to_string(),
            empty_cart: "Tu carro esta vacio".to_string(),
            add_button: "Agregar al carrito".to_string(),
            remove_button: "Remover".to_string(),
            confirm_button: "Confirmar".to_string(),
        }
    }
}

impl Validate for Labels {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("labels.products_heading", &self.products_heading)?;
        validate_non_empty_string("labels.cart_heading", &self.cart_heading)?;
        validate_non_empty_string("labels.empty_cart", &self.empty_cart)?;
        validate_non_empty_string("labels.add_button", &self.add_button)?;
        validate_non_empty_string("labels.remove_button", &self.remove_button)?;
        validate_non_empty_string("labels.confirm_button", &self.confirm_button)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The store changed; a fresh frame is waiting in [`Screen::take_frame`].
    Redraw,
    /// A full frame drawn on request.
    Frame(String),
    Message(String),
    Nothing,
    Quit,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    catalog: &'a Catalog,
    cart: &'a Cart,
}

/// Single cart screen: the catalog on top, the cart below.
///
/// The screen owns its store handle and registers a renderer on it, so each
/// store mutation produces the next frame through the observer path rather
/// than the screen polling for changes.
pub struct Screen {
    catalog: Rc<Catalog>,
    labels: Rc<Labels>,
    format: OutputFormat,
    store: CartStore,
    frame: Rc<RefCell<Option<String>>>,
    renderer: SubscriptionId,
}

impl Screen {
    pub fn new(catalog: Catalog, labels: Labels, mut store: CartStore, format: OutputFormat) -> Self {
        let catalog = Rc::new(catalog);
        let labels = Rc::new(labels);
        let frame = Rc::new(RefCell::new(None));

        let renderer = store.subscribe(FrameRenderer {
            catalog: Rc::clone(&catalog),
            labels: Rc::clone(&labels),
            format,
            frame: Rc::clone(&frame),
        });

        Self {
            catalog,
            labels,
            format,
            store,
            frame,
            renderer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Extra subscribers (loggers, tests) go through the same store handle.
    pub fn store_mut(&mut self) -> &mut CartStore {
        &mut self.store
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn renderer_subscription(&self) -> SubscriptionId {
        self.renderer
    }

    /// Frame produced by the last store notification, if not yet taken.
    pub fn take_frame(&self) -> Option<String> {
        self.frame.borrow_mut().take()
    }

    /// Renders the current state on demand.
    pub fn draw(&self) -> Result<String> {
        draw_frame(&self.catalog, &self.labels, self.store.cart(), self.format)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let command: Command = line.parse()?;
        self.handle(command)
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply> {
        tracing::debug!(?command, "Handling command");
        match command {
            Command::Add(id) => {
                let product = self
                    .catalog
                    .get(id)
                    .cloned()
                    .ok_or(CartError::UnknownProduct { id })?;
                self.store.add_to_cart(product);
                Ok(Reply::Redraw)
            }
            Command::Remove(id) => {
                self.store.remove_from_cart(id);
                Ok(Reply::Redraw)
            }
            // The confirm control has no bound behavior.
            Command::Confirm => Ok(Reply::Nothing),
            Command::Show => Ok(Reply::Frame(self.draw()?)),
            Command::Help => Ok(Reply::Message(help_text(&self.labels))),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    pub fn render(catalog: &Catalog, labels: &Labels, cart: &Cart) -> String {
        let mut out = format!("{}\n", labels.products_heading);
        for product in catalog.products() {
            out.push_str(&format!(
                "  #{} {}  ${}  [{}]\n",
                product.id, product.name, product.price, labels.add_button
            ));
        }

        out.push_str(&format!("\n{}\n", labels.cart_heading));
        if cart.is_empty() {
            out.push_str(&format!("  {}\n", labels.empty_cart));
        } else {
            for line in cart {
                out.push_str(&format!(
                    "  #{} {} ({})  [{}]\n",
                    line.product.id, line.product.name, line.quantity, labels.remove_button
                ));
            }
            out.push_str(&format!("  [{}]\n", labels.confirm_button));
        }

        out
    }

    pub fn render_json(catalog: &Catalog, cart: &Cart) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&Snapshot { catalog, cart })?;
        json.push('\n');
        Ok(json)
    }
}

fn draw_frame(catalog: &Catalog, labels: &Labels, cart: &Cart, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(Screen::render(catalog, labels, cart)),
        OutputFormat::Json => Screen::render_json(catalog, cart),
    }
}

fn help_text(labels: &Labels) -> String {
    format!(
        "Commands:\n  add <id>     {}\n  remove <id>  {}\n  confirm      {}\n  show         redraw the screen\n  help         this list\n  quit         leave\n",
        labels.add_button, labels.remove_button, labels.confirm_button
    )
}

struct FrameRenderer {
    catalog: Rc<Catalog>,
    labels: Rc<Labels>,
    format: OutputFormat,
    frame: Rc<RefCell<Option<String>>>,
}

impl CartObserver for FrameRenderer {
    fn on_cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        match draw_frame(&self.catalog, &self.labels, cart, self.format) {
            Ok(frame) => {
                *self.frame.borrow_mut() = Some(frame);
            }
            Err(e) => {
                tracing::warn!(?event, "Failed to render cart: {}", e);
            }
        }
    }
}
