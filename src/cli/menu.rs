use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, instrument, warn};

use crate::app_system::VaultSystem;
use crate::cart_actor::CartError;
use crate::domain::{GameCreate, TransactionCreate, UserCreate};
use crate::user_actor::UserError;
use super::console::Console;
use super::error::CliError;
use super::render;

const MENU: &str = "\nGame Vault CLI Menu:
1. Create User
2. Create Game
3. Add Game to Cart
4. Place Order
5. Create Transaction
6. List Games
7. List Users
8. View Orders
9. View Transactions
10. Update Wallet Balance
0. Exit";

const GOODBYE: &str = "Exiting Game Vault CLI...";

/// The numbered operator menu.
///
/// Domain failures are printed and the menu comes back; only console I/O
/// failures end the session with an error.
pub struct Menu<'a, R, W> {
    system: &'a VaultSystem,
    console: Console<R, W>,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(system: &'a VaultSystem, console: Console<R, W>) -> Self {
        Self { system, console }
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Serve menu choices until the operator picks 0 or input runs out.
    #[instrument(name = "menu", skip(self))]
    pub async fn run(&mut self) -> Result<(), CliError> {
        info!("Menu session started");
        loop {
            self.console.say(MENU).await?;
            let choice = match self.console.prompt("Enter your choice: ").await {
                Ok(line) => line,
                Err(CliError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let choice = match choice.trim().parse::<u64>() {
                Ok(0) => break,
                Ok(choice) => choice,
                Err(_) => {
                    self.console.say("Invalid input. Please enter a number.").await?;
                    continue;
                }
            };

            debug!(choice, "Dispatching menu choice");
            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(CliError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected operator input");
                    self.console.say(&e.to_string()).await?;
                }
                Err(e) => return Err(e),
            }
        }
        self.console.say(GOODBYE).await?;
        info!("Menu session ended");
        Ok(())
    }

    async fn dispatch(&mut self, choice: u64) -> Result<(), CliError> {
        match choice {
            1 => self.create_user().await,
            2 => self.create_game().await,
            3 => self.add_game_to_cart().await,
            4 => self.place_order().await,
            5 => self.create_transaction().await,
            6 => self.list_games().await,
            7 => self.list_users().await,
            8 => self.view_orders().await,
            9 => self.view_transactions().await,
            10 => self.update_wallet_balance().await,
            _ => self.console.say("Invalid choice. Please try again.").await,
        }
    }

    async fn create_user(&mut self) -> Result<(), CliError> {
        let email = self.console.prompt("Enter email: ").await?;
        let password = self.console.prompt("Enter password: ").await?;
        let username = self.console.prompt("Enter username: ").await?;
        let wallet_balance = self.console.prompt_amount("Enter wallet balance: ").await?;

        let user = UserCreate::new(email, password, username.clone(), wallet_balance);
        let message = match self.system.user_client.create_user(user).await {
            Ok(id) => format!("User created: {username} with ID: {id}"),
            Err(e) => format!("Error creating user: {e}"),
        };
        self.console.say(&message).await
    }

    async fn create_game(&mut self) -> Result<(), CliError> {
        let title = self.console.prompt("Enter game title: ").await?;
        let description = self.console.prompt("Enter game description: ").await?;
        let developer = self.console.prompt("Enter game developer: ").await?;
        let platform = self.console.prompt("Enter game platform: ").await?;
        let price = self.console.prompt_amount("Enter game price: ").await?;

        let game = GameCreate::new(title.clone(), description, developer, platform, price);
        let message = match self.system.game_client.create_game(game).await {
            Ok(id) => format!("Game created: {title} with ID: {id}"),
            Err(e) => format!("Error creating game: {e}"),
        };
        self.console.say(&message).await
    }

    async fn add_game_to_cart(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID: ").await?;
        let game_id = self.console.prompt_id("Enter Game ID to add to cart: ").await?;

        let message = match self.system.cart_client.add_game_to_cart(user_id, game_id).await {
            Ok((game, items)) => {
                format!("Added {} to cart for user {user_id} ({items} item(s) in cart)", game.title)
            }
            Err(CartError::GameNotFound(id)) => format!("Game not found with ID: {id}"),
            Err(e) => format!("Error adding game to cart: {e}"),
        };
        self.console.say(&message).await
    }

    async fn place_order(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID: ").await?;

        let message = match self.system.order_client.place_order(user_id).await {
            Ok(order) => format!(
                "Order {} placed for user {user_id}: {} game(s), total {:.2}",
                order.id,
                order.games.len(),
                order.total_amount
            ),
            Err(e) => format!("Error placing order: {e}"),
        };
        self.console.say(&message).await
    }

    async fn create_transaction(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID: ").await?;
        let game_id = self.console.prompt_id("Enter Game ID: ").await?;
        let kind = self.console.prompt("Enter Transaction Type: ").await?;
        let amount = self.console.prompt_amount("Enter Amount: ").await?;

        let transaction = TransactionCreate::new(user_id, game_id, kind, amount);
        let message = match self.system.transaction_client.add_transaction(transaction).await {
            Ok(id) => format!("Transaction created with ID: {id}"),
            Err(e) => format!("Error creating transaction: {e}"),
        };
        self.console.say(&message).await
    }

    /// Wallet changes need the account password.
    async fn update_wallet_balance(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID: ").await?;
        let password = self.console.prompt("Enter password: ").await?;
        let balance = self.console.prompt_amount("Enter new wallet balance: ").await?;

        let user_client = &self.system.user_client;
        let message = match user_client.get_user(user_id).await {
            Ok(user) if user.password != password => {
                warn!(user_id, "Wallet update refused: wrong password");
                "Incorrect password.".to_string()
            }
            Ok(_) => match user_client.update_wallet_balance(user_id, balance).await {
                Ok(user) => format!("Wallet balance for {} set to {:.2}", user.username, user.wallet_balance),
                Err(e) => format!("Error updating wallet: {e}"),
            },
            Err(UserError::NotFound(id)) => format!("User not found with ID: {id}"),
            Err(e) => format!("Error updating wallet: {e}"),
        };
        self.console.say(&message).await
    }

    async fn list_games(&mut self) -> Result<(), CliError> {
        let message = match self.system.game_client.list_games().await {
            Ok(games) => format!("\n--- Game List ---\n{}", render::games_table(&games)),
            Err(e) => format!("Error listing games: {e}"),
        };
        self.console.say(&message).await
    }

    async fn list_users(&mut self) -> Result<(), CliError> {
        let message = match self.system.user_client.list_users().await {
            Ok(users) => format!("\n--- User List ---\n{}", render::users_table(&users)),
            Err(e) => format!("Error listing users: {e}"),
        };
        self.console.say(&message).await
    }

    async fn view_orders(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID to view orders: ").await?;

        let message = match self.system.order_client.list_orders_for_user(user_id).await {
            Ok(orders) => format!("\n--- Orders List ---\n{}", render::orders_table(&orders)),
            Err(e) => format!("Error viewing orders: {e}"),
        };
        self.console.say(&message).await
    }

    async fn view_transactions(&mut self) -> Result<(), CliError> {
        let user_id = self.console.prompt_id("Enter User ID to view transactions: ").await?;

        let message = match self.system.transaction_client.list_transactions_for_user(user_id).await {
            Ok(transactions) => {
                format!("\n--- Transactions List ---\n{}", render::transactions_table(&transactions))
            }
            Err(e) => format!("Error viewing transactions: {e}"),
        };
        self.console.say(&message).await
    }
}
