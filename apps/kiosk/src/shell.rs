//! # Command Shell
//!
//! Line-oriented front end. Each line is split into words (quotes group
//! words), parsed with clap, and dispatched to one command. The reply is
//! printed as pretty JSON.
//!
//! ## Session Example
//! ```text
//! > menu --category burgers --search bacon
//! > cart add grill-classic
//! > cart set grill-classic 2
//! > checkout "Lucas Silva" "Rua Augusta, 200"
//! > orders advance PED-001
//! > catalog add --name "Cheddar Melt" --price 31,90 --category burgers
//! > theme toggle
//! > reset
//! > quit
//! ```
//!
//! Blank lines and lines starting with `#` are ignored, so a script file
//! can carry comments.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use grill_core::validation::parse_price;
use grill_core::{
    Category, MenuItemPatch, Money, NewMenuItem, NewUser, OrderStatus, StorePatch, Theme,
    UserPatch, UserRole,
};

use crate::channel::MessageChannel;
use crate::commands::{cart, checkout, dashboard, menu, orders, settings, store, users};
use crate::error::ApiError;
use crate::state::{AdminState, CartState, ConfigState};

// =============================================================================
// Line Grammar
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "grill", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Storefront menu (active items only)
    Menu(MenuArgs),
    /// The customer's cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Send the cart as a WhatsApp order
    Checkout {
        /// Customer name
        name: String,
        /// Delivery address
        address: String,
    },
    /// Admin menu catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Store settings
    Store {
        #[command(subcommand)]
        action: Option<StoreAction>,
    },
    /// Admin orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Staff users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Stats, weekly sales and recent orders
    Dashboard,
    /// Admin color scheme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Restore all admin data to the demo seed
    Reset,
    /// Print all admin data as JSON
    Backup,
    /// Print the kiosk configuration
    Config,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Args)]
struct MenuArgs {
    #[arg(short, long)]
    category: Option<Category>,
    #[arg(short, long)]
    search: Option<String>,
}

impl MenuArgs {
    fn into_filter(self) -> menu::MenuFilter {
        menu::MenuFilter::new(self.category, self.search)
    }
}

#[derive(Debug, Subcommand)]
enum CartAction {
    Show,
    /// Add one unit of a menu item
    Add { id: String },
    Remove { id: String },
    /// Set a line's quantity (0 removes it)
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Clear,
}

#[derive(Debug, Subcommand)]
enum CatalogAction {
    List(MenuArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_price)]
        price: Money,
        #[arg(long)]
        category: Category,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_price)]
        price: Option<Money>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Remove { id: String },
    /// Show or hide an item on the storefront
    Toggle { id: String },
}

#[derive(Debug, Subcommand)]
enum StoreAction {
    Show,
    Edit(StoreEditArgs),
}

#[derive(Debug, Args)]
struct StoreEditArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    instagram: Option<String>,
    #[arg(long)]
    open_time: Option<String>,
    #[arg(long)]
    close_time: Option<String>,
    #[arg(long = "fee", value_parser = parse_price)]
    delivery_fee: Option<Money>,
    #[arg(long = "eta")]
    estimated_delivery: Option<String>,
    #[arg(long = "open")]
    is_open: Option<bool>,
    #[arg(long)]
    logo: Option<String>,
}

impl StoreEditArgs {
    fn into_patch(self) -> StorePatch {
        StorePatch {
            name: self.name,
            description: self.description,
            address: self.address,
            phone: self.phone,
            instagram: self.instagram,
            open_time: self.open_time,
            close_time: self.close_time,
            delivery_fee: self.delivery_fee,
            estimated_delivery: self.estimated_delivery,
            is_open: self.is_open,
            logo: self.logo,
        }
    }
}

#[derive(Debug, Subcommand)]
enum OrdersAction {
    List {
        #[arg(short, long)]
        status: Option<OrderStatus>,
    },
    Show { id: String },
    /// Move one step forward (received → preparing → delivering → done)
    Advance { id: String },
    /// Set any status
    Set { id: String, status: OrderStatus },
}

#[derive(Debug, Subcommand)]
enum UsersAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "employee")]
        role: UserRole,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<UserRole>,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    Show,
    Set { theme: Theme },
    Toggle,
}

// =============================================================================
// Shell
// =============================================================================

/// What the shell did with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line or comment
    Skip,
    /// Text to print
    Reply(String),
    /// `quit` or `exit`
    Quit,
}

/// The kiosk state plus the channel checkout hands orders to.
#[derive(Debug)]
pub struct Shell<C> {
    cart: CartState,
    admin: AdminState,
    config: ConfigState,
    channel: C,
}

impl<C: MessageChannel> Shell<C> {
    pub fn new(cart: CartState, admin: AdminState, config: ConfigState, channel: C) -> Self {
        Shell {
            cart,
            admin,
            config,
            channel,
        }
    }

    /// Reads lines until end of input or `quit`, writing each reply.
    ///
    /// Returns the number of lines that produced a reply.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0;

        while let Some(line) = lines.next_line().await? {
            match self.execute(&line).await {
                Outcome::Skip => continue,
                Outcome::Quit => break,
                Outcome::Reply(text) => {
                    handled += 1;
                    writer.write_all(text.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                }
            }
        }

        Ok(handled)
    }

    /// Handles a single line.
    pub async fn execute(&self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Outcome::Skip;
        }
        debug!(line = %line, "Shell input");

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(reason) => return Outcome::Reply(render_error(&ApiError::validation(reason))),
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            // Usage errors and `help` output alike
            Err(e) => return Outcome::Reply(e.render().to_string()),
        };

        if matches!(parsed.command, ShellCommand::Quit) {
            return Outcome::Quit;
        }

        match self.dispatch(parsed.command).await {
            Ok(value) => Outcome::Reply(pretty(&value)),
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Command failed");
                Outcome::Reply(render_error(&err))
            }
        }
    }

    async fn dispatch(&self, command: ShellCommand) -> Result<Value, ApiError> {
        let (cart, admin, config) = (&self.cart, &self.admin, &self.config);

        match command {
            ShellCommand::Menu(args) => to_json(menu::list_menu(admin, &args.into_filter())),

            ShellCommand::Cart { action } => match action.unwrap_or(CartAction::Show) {
                CartAction::Show => to_json(cart::get_cart(cart)),
                CartAction::Add { id } => to_json(cart::add_to_cart(cart, admin, &id)?),
                CartAction::Remove { id } => to_json(cart::remove_from_cart(cart, &id)),
                CartAction::Set { id, quantity } => {
                    to_json(cart::update_cart_item(cart, &id, quantity)?)
                }
                CartAction::Clear => to_json(cart::clear_cart(cart)),
            },

            ShellCommand::Checkout { name, address } => to_json(
                checkout::checkout(cart, admin, config, &self.channel, &name, &address).await?,
            ),

            ShellCommand::Catalog { action } => match action {
                CatalogAction::List(args) => {
                    to_json(menu::list_admin_menu(admin, &args.into_filter()))
                }
                CatalogAction::Add {
                    name,
                    price,
                    category,
                    description,
                    image,
                } => to_json(menu::add_menu_item(
                    admin,
                    NewMenuItem {
                        name,
                        description,
                        price,
                        category,
                        image,
                    },
                )?),
                CatalogAction::Edit {
                    id,
                    name,
                    description,
                    price,
                    category,
                    image,
                    active,
                } => {
                    let patch = MenuItemPatch {
                        name,
                        description,
                        price,
                        category,
                        image,
                        active,
                    };
                    to_json(menu::edit_menu_item(admin, &id, patch)?)
                }
                CatalogAction::Remove { id } => {
                    menu::remove_menu_item(admin, &id)?;
                    Ok(json!({ "removed": id }))
                }
                CatalogAction::Toggle { id } => to_json(menu::toggle_menu_item(admin, &id)?),
            },

            ShellCommand::Store { action } => match action.unwrap_or(StoreAction::Show) {
                StoreAction::Show => to_json(store::get_store(admin)),
                StoreAction::Edit(args) => to_json(store::edit_store(admin, args.into_patch())?),
            },

            ShellCommand::Orders { action } => match action {
                OrdersAction::List { status } => to_json(orders::list_orders(admin, status)),
                OrdersAction::Show { id } => to_json(orders::get_order(admin, &id)?),
                OrdersAction::Advance { id } => to_json(orders::advance_order(admin, &id)?),
                OrdersAction::Set { id, status } => {
                    to_json(orders::set_order_status(admin, &id, status)?)
                }
            },

            ShellCommand::Users { action } => match action {
                UsersAction::List => to_json(users::list_users(admin)),
                UsersAction::Add { name, email, role } => {
                    to_json(users::add_user(admin, NewUser { name, email, role })?)
                }
                UsersAction::Edit {
                    id,
                    name,
                    email,
                    role,
                } => to_json(users::edit_user(admin, &id, UserPatch { name, email, role })?),
                UsersAction::Remove { id } => {
                    users::remove_user(admin, &id)?;
                    Ok(json!({ "removed": id }))
                }
            },

            ShellCommand::Dashboard => to_json(dashboard::get_dashboard(admin, config)),

            ShellCommand::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => to_json(settings::get_theme(admin)),
                ThemeAction::Set { theme } => to_json(settings::set_theme(admin, theme)),
                ThemeAction::Toggle => to_json(settings::toggle_theme(admin)),
            },

            ShellCommand::Reset => to_json(settings::reset_demo(admin)),
            ShellCommand::Backup => to_json(settings::backup(admin)),
            ShellCommand::Config => to_json(settings::get_config(config)),

            ShellCommand::Quit => Ok(Value::Null),
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn render_error(err: &ApiError) -> String {
    pretty(&json!({ "error": err }))
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Splits a line into words.
///
/// - Whitespace separates words
/// - `"..."` and `'...'` group words; the quotes are dropped
/// - `'` only opens a quote at the start of a word, so `D'Ávila` stays whole
/// - `\` escapes the next character outside quotes and inside `"..."`
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("line ends with an escape".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            // mid-word apostrophe is literal
            (None, '\'') if !in_word => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ConsoleChannel;
    use std::time::Duration;

    fn shell() -> Shell<ConsoleChannel> {
        Shell::new(
            CartState::new(),
            AdminState::demo(),
            ConfigState::default(),
            ConsoleChannel::new(Duration::from_millis(0)),
        )
    }

    async fn reply(shell: &Shell<ConsoleChannel>, line: &str) -> Value {
        match shell.execute(line).await {
            Outcome::Reply(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("cart add grill-classic").unwrap(), vec!["cart", "add", "grill-classic"]);
        assert_eq!(
            tokenize(r#"checkout "Lucas Silva" 'Rua Augusta, 200'"#).unwrap(),
            vec!["checkout", "Lucas Silva", "Rua Augusta, 200"]
        );
        assert_eq!(tokenize(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
        assert_eq!(tokenize(r#"say "a \"b\"""#).unwrap(), vec!["say", r#"a "b""#]);
        assert_eq!(tokenize(r"x\ y").unwrap(), vec!["x y"]);
        assert_eq!(
            tokenize(r#"checkout "Ana" Rua D'Ávila, 10"#).unwrap(),
            vec!["checkout", "Ana", "Rua", "D'Ávila,", "10"]
        );
        assert_eq!(tokenize("it's 'a b'").unwrap(), vec!["it's", "a b"]);
        assert_eq!(tokenize(r#"--name="Cheddar Melt""#).unwrap(), vec!["--name=Cheddar Melt"]);
        assert!(tokenize("\"open").is_err());
        assert!(tokenize("'open").is_err());
        assert!(tokenize("trailing\\").is_err());
    }

    #[tokio::test]
    async fn test_cart_and_checkout_session() {
        let shell = shell();

        reply(&shell, "cart add grill-classic").await;
        reply(&shell, "cart add batata-frita").await;
        let cart = reply(&shell, "cart set grill-classic 2").await;
        assert_eq!(cart["totals"]["total"], 7470);

        let done = reply(&shell, r#"checkout "Lucas Silva" "Rua Augusta, 200""#).await;
        assert_eq!(done["summary"]["total"], 7470);
        assert!(done["delivery"]["url"]
            .as_str()
            .unwrap()
            .starts_with("https://api.whatsapp.com/send?phone=5511999999999&text="));

        let cart = reply(&shell, "cart").await;
        assert_eq!(cart["items"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_an_error_reply() {
        let shell = shell();
        reply(&shell, "cart add grill-classic").await;

        let err = reply(&shell, "cart set grill-classic 9223372036854775807").await;
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");

        match shell.execute("catalog add --name Ouro --price 92233720368547758 --category burgers").await {
            Outcome::Reply(text) => assert!(text.contains("price")),
            other => panic!("unexpected {:?}", other),
        }

        let cart = reply(&shell, "cart").await;
        assert_eq!(cart["totals"]["totalItems"], 1);
        assert_eq!(cart["totals"]["total"], 2890);
    }

    #[tokio::test]
    async fn test_apostrophe_in_unquoted_name() {
        let shell = shell();
        reply(&shell, "cart add onion-rings").await;

        let done = reply(&shell, r#"checkout D'Ávila "Rua D'Ouro, 10""#).await;
        assert_eq!(done["summary"]["customer"], "D'Ávila");
        assert_eq!(done["summary"]["address"], "Rua D'Ouro, 10");
    }

    #[tokio::test]
    async fn test_listings_carry_labels() {
        let shell = shell();

        let orders = reply(&shell, "orders list -s done").await;
        assert_eq!(orders[0]["statusLabel"], "Finalizado");

        let users = reply(&shell, "users list").await;
        assert_eq!(users[2]["roleLabel"], "Funcionário");

        let catalog = reply(&shell, "catalog list --search classic").await;
        assert_eq!(catalog[0]["priceInput"], "28.90");
    }

    #[tokio::test]
    async fn test_admin_session() {
        let shell = shell();

        let added = reply(&shell, "catalog add --name \"Cheddar Melt\" --price 31,90 --category burgers").await;
        assert_eq!(added["price"], 3190);
        assert_eq!(added["active"], true);

        let advanced = reply(&shell, "orders advance PED-001").await;
        assert_eq!(advanced["order"]["status"], "preparing");

        let change = reply(&shell, "orders set PED-004 received").await;
        assert_eq!(change["from"], "done");

        let store = reply(&shell, "store edit --fee 0 --open false").await;
        assert_eq!(store["deliveryFee"], 0);
        assert_eq!(store["isOpen"], false);

        assert_eq!(reply(&shell, "theme toggle").await, "light");

        let snapshot = reply(&shell, "reset").await;
        assert_eq!(snapshot["theme"], "dark");
        assert_eq!(snapshot["orders"][0]["status"], "received");
    }

    #[tokio::test]
    async fn test_errors_are_reported_not_fatal() {
        let shell = shell();

        let err = reply(&shell, "orders advance PED-999").await;
        assert_eq!(err["error"]["code"], "NOT_FOUND");

        let err = reply(&shell, "checkout Ana \"Rua X, 1\"").await;
        assert_eq!(err["error"]["code"], "CART_ERROR");

        match shell.execute("frobnicate").await {
            Outcome::Reply(text) => assert!(text.contains("error")),
            other => panic!("unexpected {:?}", other),
        }
        match shell.execute("catalog add --name X --price abc --category burgers").await {
            Outcome::Reply(text) => assert!(text.contains("price")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_reads_until_quit() {
        let shell = shell();
        let script = b"# demo\n\nmenu --category drinks\ntheme\nexit\nreset\n";
        let mut out = Vec::new();

        let handled = shell.run(&script[..], &mut out).await.unwrap();

        assert_eq!(handled, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Coca-Cola 350ml"));
        assert!(text.contains("\"dark\""));
    }
}
